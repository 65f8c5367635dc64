//! Token kinds produced by lexical analysis.

use std::fmt;

/// The kind of a lexeme in a `Link` header value.
///
/// The set is closed: a link-value is a URI-Reference followed by
/// parameter names, each optionally followed by a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Token {
    /// The bracket-delimited target address.
    #[cfg_attr(feature = "serde", serde(rename = "uri_reference"))]
    URIReference,
    /// The name of a parameter.
    #[cfg_attr(feature = "serde", serde(rename = "parameter_name"))]
    ParameterName,
    /// The value of a parameter, unquoted and unescaped.
    #[cfg_attr(feature = "serde", serde(rename = "parameter_value"))]
    ParameterValue,
}

impl Token {
    /// Returns the name of the token kind as it appears in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::URIReference => "URIReference",
            Self::ParameterName => "ParameterName",
            Self::ParameterValue => "ParameterValue",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
