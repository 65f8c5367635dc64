//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use link_header::prelude::*;
//!
//! let link = Link::parse("</next>; rel=next").unwrap();
//! assert_eq!(link.rel(), Some("next"));
//! ```
//!
//! Lexing internals (`Lexeme`, `LexemeBuffer`, `Token`) and the delimiter
//! constants are left out; import them from the crate root when needed.

pub use crate::{
    // Core types
    Link, Parameter, Parameters,
    // Entry points
    Lexer, Parser, ParserConfig,
    // Errors
    LexicalError, ParseError, Subject, SyntaxError,
    // Constants
    MAX_LINK_VALUE_LENGTH,
};
