//! Input cursor shared by all parsing codecs.
//!
//! A [`Cursor`] is a read-only view of the source text plus a byte offset.
//! Backtracking is a matter of saving and restoring the offset, which is how
//! ordered-alternative productions (transform sequences, shape unions) undo
//! a failed attempt without copying any text.

use crate::codec::location::{offset_to_location, Location};
use crate::error::{Result, SceneError};

pub(crate) struct Cursor<'a> {
    source: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Self { source, offset: 0 }
    }

    /// Current byte offset into the source.
    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    /// Restore a previously saved offset (backtracking).
    pub(crate) fn set_offset(&mut self, offset: usize) {
        debug_assert!(offset <= self.source.len());
        self.offset = offset;
    }

    /// Unconsumed remainder of the input.
    pub(crate) fn rest(&self) -> &'a str {
        &self.source[self.offset..]
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.offset >= self.source.len()
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub(crate) fn advance(&mut self, bytes: usize) {
        self.offset += bytes;
        debug_assert!(self.source.is_char_boundary(self.offset.min(self.source.len())));
    }

    /// Consume `literal` if the input starts with it.
    pub(crate) fn eat_literal(&mut self, literal: &str) -> bool {
        if self.rest().starts_with(literal) {
            self.offset += literal.len();
            true
        } else {
            false
        }
    }

    /// Consume exactly one newline if present.
    pub(crate) fn eat_newline(&mut self) -> bool {
        self.eat_literal("\n")
    }

    /// Consume zero or more newlines, returning how many were eaten.
    pub(crate) fn eat_newlines(&mut self) -> usize {
        let mut count = 0;
        while self.eat_newline() {
            count += 1;
        }
        count
    }

    /// Consume zero or more spaces/tabs, returning how many were eaten.
    pub(crate) fn eat_hspace(&mut self) -> usize {
        let mut count = 0;
        while matches!(self.peek(), Some(' ') | Some('\t')) {
            self.offset += 1;
            count += 1;
        }
        count
    }

    /// Require one or more spaces/tabs.
    pub(crate) fn require_hspace(&mut self) -> Result<()> {
        if self.eat_hspace() == 0 {
            Err(self.malformed("horizontal whitespace"))
        } else {
            Ok(())
        }
    }

    /// Require exactly one newline.
    pub(crate) fn require_newline(&mut self) -> Result<()> {
        if self.eat_newline() {
            Ok(())
        } else {
            Err(self.malformed("newline"))
        }
    }

    pub(crate) fn location(&self) -> Location {
        self.location_at(self.offset)
    }

    pub(crate) fn location_at(&self, offset: usize) -> Location {
        offset_to_location(self.source, offset)
    }

    /// `MalformedLiteral` at the current position, or `UnexpectedEndOfInput`
    /// when there is nothing left to read.
    pub(crate) fn malformed(&self, expected: &'static str) -> SceneError {
        if self.is_at_end() {
            self.end_of_input(expected)
        } else {
            SceneError::MalformedLiteral {
                expected,
                location: self.location(),
            }
        }
    }

    pub(crate) fn end_of_input(&self, expected: &'static str) -> SceneError {
        SceneError::UnexpectedEndOfInput {
            expected,
            location: self.location(),
        }
    }
}
