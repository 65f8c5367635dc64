//! Lexical analysis of the optional `; name[=value]` parameter list.
//!
//! ```text
//! link-param = token BWS [ "=" BWS ( token / quoted-string ) ]
//! ```
//!
//! Names and token values are only delimited, never checked against the
//! HTTP `token` character class.

use std::io::{Read, Seek};

use tracing::trace;

use crate::byte_stream::ByteStream;
use crate::constants::{
    BACKSLASH, DOUBLE_QUOTE, PARAMETER_DELIMITER, PARAMETER_NAME_DELIMITERS,
    QUOTED_STRING_DELIMITERS, TOKEN_VALUE_DELIMITERS, VALUE_DELIMITER, WHITESPACE,
};
use crate::error::ParseError;
use crate::lexeme::{Lexeme, LexemeBuffer};
use crate::token::Token;

/// Lexes every parameter present, appending their lexemes to `out`.
///
/// Produces nothing unless the next byte is `;`.
pub(crate) fn analyze<R: Read + Seek + ?Sized>(
    input: &mut ByteStream<'_, R>,
    out: &mut LexemeBuffer,
) -> Result<(), ParseError> {
    if !input.next_is(PARAMETER_DELIMITER) {
        return Ok(());
    }

    while input.next_is(PARAMETER_DELIMITER) {
        input.discard()?;
        parameter(input, out)?;
    }

    input.skip(WHITESPACE)
}

fn parameter<R: Read + Seek + ?Sized>(
    input: &mut ByteStream<'_, R>,
    out: &mut LexemeBuffer,
) -> Result<(), ParseError> {
    out.push(parameter_name(input)?);

    if input.next_is(VALUE_DELIMITER) {
        out.push(parameter_value(input)?);
    }

    Ok(())
}

fn parameter_name<R: Read + Seek + ?Sized>(
    input: &mut ByteStream<'_, R>,
) -> Result<Lexeme, ParseError> {
    input.skip(WHITESPACE)?;
    let name = input.read_until(PARAMETER_NAME_DELIMITERS, Some("expecting a parameter name"))?;
    input.skip(WHITESPACE)?;

    let lexeme = Lexeme::from_bytes(Token::ParameterName, name)?;
    trace!(name = lexeme.value(), "lexed parameter name");
    Ok(lexeme)
}

fn parameter_value<R: Read + Seek + ?Sized>(
    input: &mut ByteStream<'_, R>,
) -> Result<Lexeme, ParseError> {
    // '='
    input.discard()?;
    input.skip(WHITESPACE)?;

    let value = if input.next_is(DOUBLE_QUOTE) {
        quoted_string(input)?
    } else {
        input.read_until(TOKEN_VALUE_DELIMITERS, Some("expecting a parameter value"))?
    };

    input.skip(WHITESPACE)?;

    let lexeme = Lexeme::from_bytes(Token::ParameterValue, value)?;
    trace!(value = lexeme.value(), "lexed parameter value");
    Ok(lexeme)
}

/// Reads a quoted-string, removing the quotes and resolving escapes.
///
/// A backslash removes itself and the byte after it is taken verbatim.
fn quoted_string<R: Read + Seek + ?Sized>(
    input: &mut ByteStream<'_, R>,
) -> Result<Vec<u8>, ParseError> {
    input.discard()?;

    let mut value = input.read_until(QUOTED_STRING_DELIMITERS, None)?;
    while input.next_is(BACKSLASH) {
        input.discard()?;
        value.extend(input.bump()?);
        value.extend(input.read_until(QUOTED_STRING_DELIMITERS, None)?);
    }

    input.expect(
        DOUBLE_QUOTE,
        "expecting a double quote to delimit the end of the quoted string",
    )?;
    Ok(value)
}
