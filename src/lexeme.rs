//! Lexemes and the buffer that hands them from the lexer to the parser.

use std::collections::VecDeque;

use crate::error::ParseError;
use crate::token::Token;

/// A single classified unit of text.
///
/// # Examples
///
/// ```
/// use link_header::{Lexeme, Token};
///
/// let lexeme = Lexeme::new(Token::ParameterName, "rel");
/// assert_eq!(lexeme.token(), Token::ParameterName);
/// assert_eq!(lexeme.value(), "rel");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    token: Token,
    value: String,
}

impl Lexeme {
    /// Creates a lexeme of the given kind.
    #[must_use]
    pub fn new(token: Token, value: impl Into<String>) -> Self {
        Self {
            token,
            value: value.into(),
        }
    }

    /// Creates a lexeme from raw bytes, which must be valid UTF-8.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidUtf8` if `bytes` do not decode.
    pub fn from_bytes(token: Token, bytes: Vec<u8>) -> Result<Self, ParseError> {
        let value = String::from_utf8(bytes).map_err(|_| ParseError::InvalidUtf8 { token })?;
        Ok(Self { token, value })
    }

    /// Returns the token kind.
    #[must_use]
    pub const fn token(&self) -> Token {
        self.token
    }

    /// Returns the text carried by the lexeme.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Consumes the lexeme, returning its text.
    #[must_use]
    pub fn into_value(self) -> String {
        self.value
    }
}

/// An ordered, consumable sequence of lexemes.
///
/// Lexemes come out in the same left-to-right order they were produced.
/// The parser looks at most one lexeme ahead.
///
/// # Examples
///
/// ```
/// use link_header::{Lexeme, LexemeBuffer, Token};
///
/// let mut buffer: LexemeBuffer = vec![
///     Lexeme::new(Token::URIReference, "/next"),
///     Lexeme::new(Token::ParameterName, "rel"),
/// ]
/// .into();
///
/// assert_eq!(buffer.peek().map(Lexeme::token), Some(Token::URIReference));
/// assert_eq!(buffer.consume().map(Lexeme::into_value).as_deref(), Some("/next"));
/// assert_eq!(buffer.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LexemeBuffer {
    lexemes: VecDeque<Lexeme>,
}

impl LexemeBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a lexeme to the back of the buffer.
    pub fn push(&mut self, lexeme: Lexeme) {
        self.lexemes.push_back(lexeme);
    }

    /// Returns the front lexeme without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&Lexeme> {
        self.lexemes.front()
    }

    /// Returns the kind of the front lexeme, if any.
    #[must_use]
    pub fn peek_token(&self) -> Option<Token> {
        self.peek().map(Lexeme::token)
    }

    /// Removes and returns the front lexeme.
    pub fn consume(&mut self) -> Option<Lexeme> {
        self.lexemes.pop_front()
    }

    /// Returns the number of lexemes left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lexemes.len()
    }

    /// Returns true if every lexeme has been consumed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lexemes.is_empty()
    }

    /// Returns an iterator over the remaining lexemes without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &Lexeme> {
        self.lexemes.iter()
    }
}

impl From<Vec<Lexeme>> for LexemeBuffer {
    fn from(lexemes: Vec<Lexeme>) -> Self {
        Self {
            lexemes: lexemes.into(),
        }
    }
}

impl FromIterator<Lexeme> for LexemeBuffer {
    fn from_iter<I: IntoIterator<Item = Lexeme>>(iter: I) -> Self {
        Self {
            lexemes: iter.into_iter().collect(),
        }
    }
}

impl Extend<Lexeme> for LexemeBuffer {
    fn extend<I: IntoIterator<Item = Lexeme>>(&mut self, iter: I) {
        self.lexemes.extend(iter);
    }
}

impl IntoIterator for LexemeBuffer {
    type Item = Lexeme;
    type IntoIter = std::collections::vec_deque::IntoIter<Lexeme>;

    fn into_iter(self) -> Self::IntoIter {
        self.lexemes.into_iter()
    }
}
