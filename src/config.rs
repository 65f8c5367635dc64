//! Configuration for link-value parsing.

use crate::constants::MAX_LINK_VALUE_LENGTH;

/// Configuration for [`Parser`](crate::Parser) and [`Lexer`](crate::Lexer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum number of bytes consumed from the input.
    ///
    /// Default: 8192
    pub max_length: usize,

    /// Whether bytes left after the last parameter are an error.
    ///
    /// By default they are not inspected at all.
    /// Default: false
    pub deny_trailing_input: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_length: MAX_LINK_VALUE_LENGTH,
            deny_trailing_input: false,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum input length in bytes.
    #[must_use]
    pub const fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = max;
        self
    }

    /// Enables or disables rejection of trailing input.
    #[must_use]
    pub const fn with_deny_trailing_input(mut self, deny: bool) -> Self {
        self.deny_trailing_input = deny;
        self
    }
}
