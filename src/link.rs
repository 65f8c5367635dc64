//! The parsed form of a single link-value.

use std::str::FromStr;

use crate::error::ParseError;
use crate::parameter::Parameter;
use crate::parameters::Parameters;
use crate::parser::Parser;

/// A parsed `Link` header value.
///
/// # Structure
///
/// ```text
/// <uri-reference> *( ";" name [ "=" value ] )
/// ```
///
/// # Examples
///
/// ```
/// use link_header::Link;
///
/// let link = Link::parse(r#"<https://example.com/page/2>; rel="next"; title="Page 2""#).unwrap();
/// assert_eq!(link.uri_reference(), "https://example.com/page/2");
/// assert_eq!(link.rel(), Some("next"));
/// assert_eq!(link.parameter("Title").map(|p| p.value()), Some("Page 2"));
///
/// // Parameter names are case-insensitive and the last occurrence wins
/// let link: Link = "</a>; A=1; a=2".parse().unwrap();
/// assert_eq!(link.parameters().len(), 1);
/// assert_eq!(link.parameter("a").map(|p| p.name()), Some("a"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Link {
    uri_reference: String,
    parameters: Parameters,
}

impl Link {
    /// Parses a link-value from a string with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - The URI-Reference is missing or not enclosed in angle brackets
    /// - A parameter name or token value is empty
    /// - A quoted-string is not terminated
    /// - The input exceeds the default maximum length
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Parser::default().parse_str(input)
    }

    /// Creates a link from its parts.
    #[must_use]
    pub fn new(uri_reference: impl Into<String>, parameters: Parameters) -> Self {
        Self {
            uri_reference: uri_reference.into(),
            parameters,
        }
    }

    /// Returns the URI-Reference exactly as written between the brackets.
    #[must_use]
    pub fn uri_reference(&self) -> &str {
        &self.uri_reference
    }

    /// Returns all parameters.
    #[must_use]
    pub const fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Returns the parameter with the given name, compared case-insensitively.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.get(name)
    }

    /// Returns the `rel` parameter value, if present.
    #[must_use]
    pub fn rel(&self) -> Option<&str> {
        self.parameters.rel()
    }

    /// Returns true if the `rel` parameter lists `relation`.
    #[must_use]
    pub fn has_relation(&self, relation: &str) -> bool {
        self.parameters.has_relation(relation)
    }

    /// Splits the link into its URI-Reference and parameters.
    #[must_use]
    pub fn into_parts(self) -> (String, Parameters) {
        (self.uri_reference, self.parameters)
    }
}

impl FromStr for Link {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Link {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}
