//! Constants for link-value lexing.

/// Default maximum number of bytes consumed from a single link-value.
pub const MAX_LINK_VALUE_LENGTH: usize = 8192;

/// Optional whitespace: horizontal tab and space.
pub const WHITESPACE: &[u8] = b"\t ";

/// Opens the URI-Reference.
pub const LEFT_ANGLE_BRACKET: u8 = b'<';

/// Closes the URI-Reference.
pub const RIGHT_ANGLE_BRACKET: u8 = b'>';

/// Introduces each parameter.
pub const PARAMETER_DELIMITER: u8 = b';';

/// Separates a parameter name from its value.
pub const VALUE_DELIMITER: u8 = b'=';

/// Delimits a quoted-string value.
pub const DOUBLE_QUOTE: u8 = b'"';

/// Escapes the following byte inside a quoted-string.
pub const BACKSLASH: u8 = b'\\';

/// Bytes that end a parameter name.
pub(crate) const PARAMETER_NAME_DELIMITERS: &[u8] = b"\t ;=";

/// Bytes that end a token (unquoted) parameter value.
pub(crate) const TOKEN_VALUE_DELIMITERS: &[u8] = b"\t ;";

/// Bytes that interrupt a run of quoted-string text.
pub(crate) const QUOTED_STRING_DELIMITERS: &[u8] = b"\"\\";
