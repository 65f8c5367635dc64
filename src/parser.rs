//! Syntactic analysis of a lexeme sequence into a [`Link`].

use std::io::{Cursor, Read, Seek};

use tracing::debug;

use crate::config::ParserConfig;
use crate::error::{ParseError, SyntaxError};
use crate::lexeme::{Lexeme, LexemeBuffer};
use crate::lexer::Lexer;
use crate::link::Link;
use crate::parameter::Parameter;
use crate::parameters::Parameters;
use crate::token::Token;

/// Parses `Link` header values.
///
/// Parsing runs the [`Lexer`] over the input, then consumes the resulting
/// lexemes with a single token of lookahead:
///
/// 1. a `URIReference` lexeme becomes [`Link::uri_reference`];
/// 2. each `ParameterName`, optionally followed by a `ParameterValue`,
///    becomes a [`Parameter`].
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use link_header::{Parser, ParserConfig};
///
/// let parser = Parser::new(ParserConfig::default());
/// let link = parser
///     .parse(&mut Cursor::new(&b"<https://example.com/2>; rel=\"next\""[..]))
///     .unwrap();
///
/// assert_eq!(link.uri_reference(), "https://example.com/2");
/// assert_eq!(link.rel(), Some("next"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    lexer: Lexer,
}

impl Parser {
    /// Creates a parser with the given configuration.
    #[must_use]
    pub const fn new(config: ParserConfig) -> Self {
        Self {
            lexer: Lexer::new(config),
        }
    }

    /// Returns the configuration in use.
    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        self.lexer.config()
    }

    /// Parses a link-value from `input`, starting at its current position.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if lexical or syntactic analysis fails. No partial
    /// result is produced.
    pub fn parse<R: Read + Seek + ?Sized>(&self, input: &mut R) -> Result<Link, ParseError> {
        debug!("parsing link value");
        let lexemes = self.lexer.analyze(input)?;
        let link = Self::parse_lexemes(lexemes)?;
        debug!(
            uri_reference = link.uri_reference(),
            parameters = link.parameters().len(),
            "parsed link value"
        );
        Ok(link)
    }

    /// Parses a link-value held in a string.
    ///
    /// # Errors
    ///
    /// Same as [`Parser::parse`].
    pub fn parse_str(&self, input: &str) -> Result<Link, ParseError> {
        self.parse(&mut Cursor::new(input.as_bytes()))
    }

    /// Runs syntactic analysis alone over an already lexed sequence.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Syntax` if the sequence does not start with a
    /// `URIReference`, or if anything other than parameter lexemes follows.
    ///
    /// # Examples
    ///
    /// ```
    /// use link_header::{Lexeme, LexemeBuffer, Parser, Token};
    ///
    /// let lexemes = vec![
    ///     Lexeme::new(Token::URIReference, "/style.css"),
    ///     Lexeme::new(Token::ParameterName, "rel"),
    ///     Lexeme::new(Token::ParameterValue, "preload"),
    /// ];
    /// let link = Parser::parse_lexemes(lexemes.into()).unwrap();
    /// assert_eq!(link.uri_reference(), "/style.css");
    ///
    /// let err = Parser::parse_lexemes(LexemeBuffer::new()).unwrap_err();
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Unexpected end of stream; expecting token(s): URIReference"
    /// );
    /// ```
    pub fn parse_lexemes(mut lexemes: LexemeBuffer) -> Result<Link, ParseError> {
        let uri_reference = consume(&mut lexemes, Token::URIReference)?.into_value();
        let parameters = parse_parameters(&mut lexemes)?;

        if !lexemes.is_empty() {
            expect(&lexemes, &[Token::ParameterName])?;
        }

        Ok(Link::new(uri_reference, parameters))
    }
}

fn parse_parameters(lexemes: &mut LexemeBuffer) -> Result<Parameters, SyntaxError> {
    let mut parameters = Parameters::new();

    while lexemes.peek_token() == Some(Token::ParameterName) {
        let parameter = parse_parameter(lexemes)?;
        if let Some(replaced) = parameters.insert(parameter) {
            debug!(
                name = replaced.name(),
                "parameter replaced by a later occurrence"
            );
        }
    }

    Ok(parameters)
}

fn parse_parameter(lexemes: &mut LexemeBuffer) -> Result<Parameter, SyntaxError> {
    let name = consume(lexemes, Token::ParameterName)?.into_value();

    let value = match lexemes.peek_token() {
        Some(Token::ParameterValue) => lexemes.consume().map(Lexeme::into_value),
        Some(Token::ParameterName | Token::URIReference) | None => None,
    };

    Ok(Parameter::new(name, value.unwrap_or_default()))
}

/// Consumes the front lexeme, which must be a `token`.
fn consume(lexemes: &mut LexemeBuffer, token: Token) -> Result<Lexeme, SyntaxError> {
    expect(lexemes, &[token])?;
    lexemes.consume().ok_or_else(|| SyntaxError {
        found: None,
        expected: vec![token],
    })
}

/// Checks that the front lexeme is one of `tokens`.
fn expect(lexemes: &LexemeBuffer, tokens: &[Token]) -> Result<(), SyntaxError> {
    let found = lexemes.peek_token();
    if found.is_some_and(|t| tokens.contains(&t)) {
        return Ok(());
    }

    let mut expected = tokens.to_vec();
    expected.sort_unstable();
    expected.dedup();
    Err(SyntaxError { found, expected })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexemes(items: &[(Token, &str)]) -> LexemeBuffer {
        items.iter().map(|&(t, v)| Lexeme::new(t, v)).collect()
    }

    #[test]
    fn reference_only() {
        let link = Parser::parse_lexemes(lexemes(&[(Token::URIReference, "/a")])).unwrap();
        assert_eq!(link.uri_reference(), "/a");
        assert!(link.parameters().is_empty());
    }

    #[test]
    fn name_without_value_defaults_to_empty() {
        let link = Parser::parse_lexemes(lexemes(&[
            (Token::URIReference, "/a"),
            (Token::ParameterName, "noval"),
            (Token::ParameterName, "rel"),
            (Token::ParameterValue, "next"),
        ]))
        .unwrap();

        assert_eq!(link.parameter("noval").map(Parameter::value), Some(""));
        assert_eq!(link.rel(), Some("next"));
    }

    #[test]
    fn duplicate_names_keep_the_last() {
        let link = Parser::parse_lexemes(lexemes(&[
            (Token::URIReference, "/a"),
            (Token::ParameterName, "A"),
            (Token::ParameterValue, "1"),
            (Token::ParameterName, "a"),
            (Token::ParameterValue, "2"),
        ]))
        .unwrap();

        assert_eq!(link.parameters().len(), 1);
        assert_eq!(link.parameter("a"), Some(&Parameter::new("a", "2")));
    }

    #[test]
    fn empty_stream() {
        let err = Parser::parse_lexemes(LexemeBuffer::new()).unwrap_err();
        assert_eq!(
            err,
            ParseError::Syntax(SyntaxError {
                found: None,
                expected: vec![Token::URIReference],
            })
        );
    }

    #[test]
    fn wrong_leading_token() {
        let err = Parser::parse_lexemes(lexemes(&[(Token::ParameterName, "rel")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unexpected ParameterName token; expecting token(s): URIReference"
        );
    }

    #[test]
    fn stray_value_after_reference() {
        let err = Parser::parse_lexemes(lexemes(&[
            (Token::URIReference, "/a"),
            (Token::ParameterValue, "x"),
        ]))
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unexpected ParameterValue token; expecting token(s): ParameterName"
        );
    }

    #[test]
    fn second_reference_is_rejected() {
        let err = Parser::parse_lexemes(lexemes(&[
            (Token::URIReference, "/a"),
            (Token::ParameterName, "rel"),
            (Token::URIReference, "/b"),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            ParseError::Syntax(SyntaxError {
                found: Some(Token::URIReference),
                ..
            })
        ));
    }

    #[test]
    fn expected_tokens_are_sorted_and_unique() {
        let err = expect(
            &lexemes(&[(Token::ParameterValue, "x")]),
            &[Token::ParameterName, Token::URIReference, Token::ParameterName],
        )
        .unwrap_err();
        assert_eq!(err.expected, vec![Token::URIReference, Token::ParameterName]);
        assert_eq!(err.found, Some(Token::ParameterValue));
    }

    #[test]
    fn expect_accepts_any_listed_token() {
        let buffer = lexemes(&[(Token::ParameterName, "rel")]);
        assert!(expect(&buffer, &[Token::URIReference, Token::ParameterName]).is_ok());
    }

    #[test]
    fn parse_str_runs_both_stages() {
        let link = Parser::default().parse_str("</a>; Rel=next").unwrap();
        assert_eq!(link.uri_reference(), "/a");
        assert_eq!(link.parameter("rel").map(Parameter::name), Some("Rel"));
    }
}
