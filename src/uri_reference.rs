//! Lexical analysis of the bracketed URI-Reference.

use std::io::{Read, Seek};

use tracing::trace;

use crate::byte_stream::ByteStream;
use crate::constants::{LEFT_ANGLE_BRACKET, RIGHT_ANGLE_BRACKET, WHITESPACE};
use crate::error::ParseError;
use crate::lexeme::Lexeme;
use crate::token::Token;

/// Recognizes `OWS "<" URI-Reference ">" OWS` and returns its lexeme.
///
/// Leading whitespace should already have been removed by whatever split the
/// header, but it is tolerated here. The reference itself is not validated.
pub(crate) fn analyze<R: Read + Seek + ?Sized>(
    input: &mut ByteStream<'_, R>,
) -> Result<Lexeme, ParseError> {
    input.skip(WHITESPACE)?;
    input.expect(
        LEFT_ANGLE_BRACKET,
        "expecting a left angle bracket to delimit the start of a URI Reference",
    )?;

    let reference = input.read_until(&[RIGHT_ANGLE_BRACKET], Some("expecting a URI Reference"))?;

    input.expect(
        RIGHT_ANGLE_BRACKET,
        "expecting a right angle bracket to delimit the end of a URI Reference",
    )?;
    input.skip(WHITESPACE)?;

    let lexeme = Lexeme::from_bytes(Token::URIReference, reference)?;
    trace!(value = lexeme.value(), "lexed URI reference");
    Ok(lexeme)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::constants::MAX_LINK_VALUE_LENGTH;
    use crate::error::{LexicalError, Subject};

    fn lex(input: &str) -> (Result<Lexeme, ParseError>, Option<u8>) {
        let mut cursor = Cursor::new(input.as_bytes());
        let mut stream = ByteStream::new(&mut cursor, MAX_LINK_VALUE_LENGTH);
        let result = analyze(&mut stream);
        let next = stream.peek();
        (result, next)
    }

    #[test]
    fn bracketed_reference() {
        let (result, next) = lex("<http://example.com>");
        assert_eq!(result.unwrap().value(), "http://example.com");
        assert_eq!(next, None);
    }

    #[test]
    fn surrounding_whitespace_is_consumed() {
        let (result, next) = lex(" \t</rel> \t;");
        assert_eq!(result.unwrap().value(), "/rel");
        assert_eq!(next, Some(b';'));
    }

    #[test]
    fn reference_is_not_interpreted() {
        let (result, _) = lex("<a b;c=\"d\">");
        assert_eq!(result.unwrap().value(), "a b;c=\"d\"");
    }

    #[test]
    fn missing_left_bracket() {
        let (result, _) = lex("http://x>");
        assert_eq!(
            result.unwrap_err(),
            ParseError::Lexical(LexicalError {
                subject: Subject::Byte(b'h'),
                position: 0,
                hint: Some("expecting a left angle bracket to delimit the start of a URI Reference"),
            })
        );
    }

    #[test]
    fn missing_right_bracket() {
        let (result, _) = lex("<http://x");
        assert_eq!(
            result.unwrap_err(),
            ParseError::Lexical(LexicalError {
                subject: Subject::EndOfLine,
                position: 9,
                hint: Some("expecting a right angle bracket to delimit the end of a URI Reference"),
            })
        );
    }

    #[test]
    fn empty_reference() {
        let (result, _) = lex("<>");
        let err = result.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unexpected '>' at position 1; expecting a URI Reference"
        );
    }

    #[test]
    fn empty_input() {
        let (result, _) = lex("");
        assert!(matches!(
            result,
            Err(ParseError::Lexical(LexicalError {
                subject: Subject::EndOfLine,
                position: 0,
                ..
            }))
        ));
    }
}
