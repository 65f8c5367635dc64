//! Lexer and parser for HTTP `Link` header field values.
//!
//! This crate parses a single `link-value` as defined by RFC 8288 into its
//! URI-Reference and a case-insensitive map of parameters.
//!
//! # Overview
//!
//! A link-value has the structure:
//!
//! ```text
//! link-value = "<" URI-Reference ">" *( OWS ";" OWS link-param )
//! link-param = token BWS [ "=" BWS ( token / quoted-string ) ]
//! ```
//!
//! Parsing happens in two stages:
//!
//! 1. [`Lexer`] turns the bytes of the value into a [`LexemeBuffer`].
//! 2. [`Parser`] consumes the lexemes and builds a [`Link`].
//!
//! # Quick Start
//!
//! ```rust
//! use link_header::Link;
//!
//! let link = Link::parse(r#"<https://api.example.com/items?page=3>; rel="next"; Title="A \"quoted\" word""#).unwrap();
//!
//! assert_eq!(link.uri_reference(), "https://api.example.com/items?page=3");
//! assert_eq!(link.rel(), Some("next"));
//!
//! // Lookups are case-insensitive, names keep their original case
//! let title = link.parameter("title").unwrap();
//! assert_eq!(title.name(), "Title");
//! assert_eq!(title.value(), r#"A "quoted" word"#);
//! ```
//!
//! # Streams
//!
//! Any `Read + Seek` source can be parsed directly. Parsing starts at the
//! current position and leaves the stream after the last byte it consumed:
//!
//! ```rust
//! use std::io::Cursor;
//!
//! let mut input = Cursor::new(&b"</up>; rel=up"[..]);
//! let link = link_header::parse(&mut input).unwrap();
//! assert_eq!(link.rel(), Some("up"));
//! ```
//!
//! Splitting a header that carries several comma-separated link-values is
//! left to the caller.
//!
//! # Errors
//!
//! | Error | Cause |
//! |-------|-------|
//! | [`ParseError::Lexical`] | Missing delimiter, empty name or value |
//! | [`ParseError::Syntax`] | Lexemes out of grammatical order |
//! | [`ParseError::TooLong`] | Input longer than [`ParserConfig::max_length`] |
//! | [`ParseError::InvalidUtf8`] | A lexeme is not UTF-8 |
//!
//! A read failure on the underlying stream is treated as end of input.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod byte_stream;
mod config;
mod constants;
mod error;
#[cfg(kani)]
mod kani_impls;
mod lexeme;
mod lexer;
mod link;
mod parameter;
mod parameter_list;
mod parameters;
mod parser;
pub mod prelude;
mod token;
mod uri_reference;

use std::io::{Read, Seek};

pub use config::ParserConfig;
pub use constants::{
    BACKSLASH, DOUBLE_QUOTE, LEFT_ANGLE_BRACKET, MAX_LINK_VALUE_LENGTH, PARAMETER_DELIMITER,
    RIGHT_ANGLE_BRACKET, VALUE_DELIMITER, WHITESPACE,
};
pub use error::{LexicalError, ParseError, Subject, SyntaxError};
pub use lexeme::{Lexeme, LexemeBuffer};
pub use lexer::Lexer;
pub use link::Link;
pub use parameter::Parameter;
pub use parameters::Parameters;
pub use parser::Parser;
pub use token::Token;

/// Parses one link-value from `input` with the default configuration.
///
/// # Errors
///
/// Returns `ParseError` if the input is not a well-formed link-value.
pub fn parse<R: Read + Seek + ?Sized>(input: &mut R) -> Result<Link, ParseError> {
    Parser::default().parse(input)
}
