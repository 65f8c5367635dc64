//! Kani `Arbitrary` implementations and proof harnesses.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use std::io::Cursor;

use crate::{Lexeme, LexemeBuffer, Parser, Subject, Token};

/// Bytes that drive every branch of the lexer.
const INTERESTING_BYTES: &[u8] = b"<>;=\"\\ \tax";

fn arbitrary_interesting_byte() -> u8 {
    let idx: usize = kani::any();
    INTERESTING_BYTES[idx % INTERESTING_BYTES.len()]
}

impl kani::Arbitrary for Token {
    fn any() -> Self {
        match kani::any::<u8>() % 3 {
            0 => Token::URIReference,
            1 => Token::ParameterName,
            _ => Token::ParameterValue,
        }
    }
}

impl kani::Arbitrary for Subject {
    fn any() -> Self {
        if kani::any() {
            Subject::Byte(kani::any())
        } else {
            Subject::EndOfLine
        }
    }
}

/// Rendering a subject never panics and never yields an empty string.
#[kani::proof]
fn subject_display_is_total() {
    let subject: Subject = kani::any();
    let rendered = subject.to_string();
    assert!(!rendered.is_empty());
}

/// Syntactic analysis of short arbitrary lexeme sequences never panics.
#[kani::proof]
#[kani::unwind(5)]
fn parse_lexemes_is_total() {
    let len: usize = kani::any();
    kani::assume(len <= 3);

    let buffer: LexemeBuffer = (0..len)
        .map(|_| Lexeme::new(kani::any::<Token>(), "x"))
        .collect();
    let _ = Parser::parse_lexemes(buffer);
}

/// A successful parse always starts from a URI-Reference lexeme.
#[kani::proof]
#[kani::unwind(5)]
fn parse_requires_leading_reference() {
    let first: Token = kani::any();
    let buffer: LexemeBuffer = [Lexeme::new(first, "x")].into_iter().collect();
    if Parser::parse_lexemes(buffer).is_ok() {
        assert_eq!(first, Token::URIReference);
    }
}

/// Parsing short byte strings built from delimiters never panics.
#[kani::proof]
#[kani::unwind(8)]
fn parse_short_input_is_total() {
    let bytes: [u8; 6] = std::array::from_fn(|_| arbitrary_interesting_byte());
    let _ = Parser::default().parse(&mut Cursor::new(&bytes[..]));
}
