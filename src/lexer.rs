//! Lexical analysis of a complete link-value.

use std::io::{Read, Seek};

use tracing::trace;

use crate::byte_stream::ByteStream;
use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::lexeme::LexemeBuffer;
use crate::{parameter_list, uri_reference};

/// Turns a link-value byte stream into a [`LexemeBuffer`].
///
/// ```text
/// link-value = "<" URI-Reference ">" *( OWS ";" OWS link-param )
/// link-param = token BWS [ "=" BWS ( token / quoted-string ) ]
/// ```
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use link_header::{Lexer, Token};
///
/// let mut input = Cursor::new(&b"</next>; rel=next"[..]);
/// let lexemes = Lexer::default().analyze(&mut input).unwrap();
///
/// let tokens: Vec<Token> = lexemes.iter().map(|l| l.token()).collect();
/// assert_eq!(
///     tokens,
///     [Token::URIReference, Token::ParameterName, Token::ParameterValue]
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Lexer {
    config: ParserConfig,
}

impl Lexer {
    /// Creates a lexer with the given configuration.
    #[must_use]
    pub const fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration in use.
    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Runs lexical analysis over `input`, starting at its current position.
    ///
    /// The stream is borrowed for the duration of the call and left positioned
    /// after the last byte consumed.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Lexical` if a required delimiter or span is
    /// missing, `ParseError::TooLong` if the input exceeds the configured
    /// maximum, and `ParseError::InvalidUtf8` if a lexeme is not UTF-8.
    pub fn analyze<R: Read + Seek + ?Sized>(
        &self,
        input: &mut R,
    ) -> Result<LexemeBuffer, ParseError> {
        let mut stream = ByteStream::new(input, self.config.max_length);
        let mut lexemes = LexemeBuffer::new();

        lexemes.push(uri_reference::analyze(&mut stream)?);
        parameter_list::analyze(&mut stream, &mut lexemes)?;

        if self.config.deny_trailing_input && stream.peek().is_some() {
            return Err(stream.error(Some("expecting end of input")));
        }

        trace!(count = lexemes.len(), "lexical analysis complete");
        Ok(lexemes)
    }
}
