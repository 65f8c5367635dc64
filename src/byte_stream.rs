//! Byte-level cursor shared by both lexing phases.

use std::io::{Read, Seek, SeekFrom};

use crate::error::{LexicalError, ParseError, Subject};

/// A cursor over a caller-supplied seekable byte source.
///
/// Peeking reads one byte and seeks back to the recorded position, so the
/// underlying stream only needs `Read + Seek`. Any failure while peeking is
/// reported as end of input.
pub(crate) struct ByteStream<'a, R: ?Sized> {
    inner: &'a mut R,
    start: u64,
    consumed: usize,
    max_length: usize,
}

impl<'a, R: Read + Seek + ?Sized> ByteStream<'a, R> {
    pub(crate) fn new(inner: &'a mut R, max_length: usize) -> Self {
        let start = inner.stream_position().unwrap_or(0);
        Self {
            inner,
            start,
            consumed: 0,
            max_length,
        }
    }

    /// Returns the next unread byte without consuming it.
    ///
    /// If the byte is read but seeking back fails, that byte stays consumed
    /// and is lost to every later read.
    pub(crate) fn peek(&mut self) -> Option<u8> {
        let pos = self.inner.stream_position().ok()?;
        let mut buf = [0u8; 1];
        match self.inner.read(&mut buf) {
            Ok(1) => {}
            _ => return None,
        }
        self.inner.seek(SeekFrom::Start(pos)).ok()?;
        Some(buf[0])
    }

    /// Returns true if the next unread byte is `byte`.
    pub(crate) fn next_is(&mut self, byte: u8) -> bool {
        self.peek() == Some(byte)
    }

    /// Consumes and returns one byte, or `None` at end of input.
    pub(crate) fn bump(&mut self) -> Result<Option<u8>, ParseError> {
        let mut buf = [0u8; 1];
        match self.inner.read(&mut buf) {
            Ok(1) => {
                self.consumed += 1;
                if self.consumed > self.max_length {
                    return Err(ParseError::TooLong {
                        max: self.max_length,
                    });
                }
                Ok(Some(buf[0]))
            }
            _ => Ok(None),
        }
    }

    /// Advances past exactly one byte, ignoring its value.
    pub(crate) fn discard(&mut self) -> Result<(), ParseError> {
        self.bump().map(drop)
    }

    /// Consumes bytes while they belong to `class`.
    ///
    /// # Errors
    ///
    /// Fails with a lexical error carrying `hint` if nothing was consumed and
    /// a hint was supplied.
    pub(crate) fn read(
        &mut self,
        class: &[u8],
        hint: Option<&'static str>,
    ) -> Result<Vec<u8>, ParseError> {
        self.consume_while(|b| class.contains(&b), hint)
    }

    /// Consumes bytes until one belongs to `class`.
    ///
    /// An empty `class` consumes the rest of the input.
    ///
    /// # Errors
    ///
    /// Same contract as [`ByteStream::read`].
    pub(crate) fn read_until(
        &mut self,
        class: &[u8],
        hint: Option<&'static str>,
    ) -> Result<Vec<u8>, ParseError> {
        self.consume_while(|b| !class.contains(&b), hint)
    }

    /// Skips optional whitespace.
    pub(crate) fn skip(&mut self, class: &[u8]) -> Result<(), ParseError> {
        self.read(class, None).map(drop)
    }

    /// Requires the next byte to be `byte` and discards exactly that one byte.
    pub(crate) fn expect(&mut self, byte: u8, hint: &'static str) -> Result<(), ParseError> {
        if self.next_is(byte) {
            self.discard()
        } else {
            Err(self.error(Some(hint)))
        }
    }

    /// Builds a lexical error describing the next unread byte.
    pub(crate) fn error(&mut self, hint: Option<&'static str>) -> ParseError {
        let subject = self.peek().map_or(Subject::EndOfLine, Subject::Byte);
        ParseError::Lexical(LexicalError {
            subject,
            position: self.position(),
            hint,
        })
    }

    /// Returns the current byte offset in the underlying stream.
    pub(crate) fn position(&mut self) -> u64 {
        self.inner
            .stream_position()
            .unwrap_or(self.start + self.consumed as u64)
    }

    fn consume_while(
        &mut self,
        mut accept: impl FnMut(u8) -> bool,
        hint: Option<&'static str>,
    ) -> Result<Vec<u8>, ParseError> {
        let mut result = Vec::new();
        while let Some(next) = self.peek() {
            if !accept(next) {
                break;
            }
            match self.bump()? {
                Some(b) => result.push(b),
                None => break,
            }
        }

        if result.is_empty()
            && let Some(hint) = hint
        {
            return Err(self.error(Some(hint)));
        }

        Ok(result)
    }
}
