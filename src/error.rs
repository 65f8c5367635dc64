//! Error types for link-value parsing.

use std::fmt;

use crate::token::Token;

/// Errors that can occur when parsing a link-value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A required delimiter or non-empty span was missing from the input.
    #[error(transparent)]
    Lexical(#[from] LexicalError),
    /// The lexeme sequence did not match the link-value grammar.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// The input exceeded the configured maximum length.
    #[error("link value exceeds maximum length of {max} bytes")]
    TooLong {
        /// Maximum allowed length in bytes
        max: usize,
    },
    /// A lexeme's bytes were not valid UTF-8.
    #[error("{token} is not valid UTF-8")]
    InvalidUtf8 {
        /// The kind of lexeme that failed to decode
        token: Token,
    },
}

/// The thing found where the lexer expected something else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    /// The next unread byte.
    Byte(u8),
    /// The input was exhausted (or could not be read).
    EndOfLine,
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::EndOfLine => f.write_str("end of line"),
            Self::Byte(b @ (b'\'' | b'\\')) => write!(f, "'\\{}'", char::from(b)),
            Self::Byte(b @ 0x21..=0x7E) => write!(f, "'{}'", char::from(b)),
            Self::Byte(b) => write!(f, "0x{b:02X}"),
        }
    }
}

/// A lexical error: the byte stream did not contain what the grammar requires.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub struct LexicalError {
    /// What was found instead
    pub subject: Subject,
    /// Byte offset in the input stream
    pub position: u64,
    /// Contextual hint describing what was expected
    pub hint: Option<&'static str>,
}

impl fmt::Display for LexicalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unexpected {} at position {}", self.subject, self.position)?;
        if let Some(hint) = self.hint {
            write!(f, "; {hint}")?;
        }
        Ok(())
    }
}

/// A syntactic error: the next lexeme was not one the parser could accept.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub struct SyntaxError {
    /// The token kind found, or `None` at end of stream
    pub found: Option<Token>,
    /// The token kinds that would have been accepted
    pub expected: Vec<Token>,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.found {
            Some(token) => write!(f, "Unexpected {token} token")?,
            None => f.write_str("Unexpected end of stream")?,
        }
        f.write_str("; expecting token(s): ")?;
        for (i, token) in self.expected.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_subject_is_quoted() {
        assert_eq!(Subject::Byte(b'a').to_string(), "'a'");
        assert_eq!(Subject::Byte(b'~').to_string(), "'~'");
    }

    #[test]
    fn quote_and_backslash_subjects_are_escaped() {
        assert_eq!(Subject::Byte(b'\'').to_string(), r"'\''");
        assert_eq!(Subject::Byte(b'\\').to_string(), r"'\\'");
    }

    #[test]
    fn unprintable_subject_is_hex() {
        assert_eq!(Subject::Byte(b' ').to_string(), "0x20");
        assert_eq!(Subject::Byte(0x01).to_string(), "0x01");
        assert_eq!(Subject::Byte(0xFF).to_string(), "0xFF");
    }

    #[test]
    fn lexical_error_with_hint() {
        let err = LexicalError {
            subject: Subject::EndOfLine,
            position: 9,
            hint: Some("expecting a parameter name"),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected end of line at position 9; expecting a parameter name"
        );
    }

    #[test]
    fn lexical_error_without_hint() {
        let err = LexicalError {
            subject: Subject::Byte(b'x'),
            position: 0,
            hint: None,
        };
        assert_eq!(err.to_string(), "Unexpected 'x' at position 0");
    }

    #[test]
    fn syntax_error_lists_expected_tokens() {
        let err = SyntaxError {
            found: Some(Token::ParameterValue),
            expected: vec![Token::URIReference],
        };
        assert_eq!(
            err.to_string(),
            "Unexpected ParameterValue token; expecting token(s): URIReference"
        );

        let err = SyntaxError {
            found: None,
            expected: vec![Token::ParameterName, Token::ParameterValue],
        };
        assert_eq!(
            err.to_string(),
            "Unexpected end of stream; expecting token(s): ParameterName, ParameterValue"
        );
    }

    #[test]
    fn parse_error_is_transparent() {
        let err = ParseError::from(LexicalError {
            subject: Subject::Byte(b';'),
            position: 4,
            hint: None,
        });
        assert_eq!(err.to_string(), "Unexpected ';' at position 4");
    }
}
