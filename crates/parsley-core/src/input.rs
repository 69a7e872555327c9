//! Input buffer and the immutable cursor walking over it.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::chars::InputChar;

/// Random-access character storage for a parse run.
///
/// Indices are char indices, not byte offsets. Reading past the last
/// character yields `InputChar::Eoi` for any index.
#[derive(Clone, Debug)]
pub struct InputBuffer {
    text: String,
    chars: Vec<char>,
    /// Byte offset of each char, plus one trailing entry for `text.len()`.
    byte_offsets: Vec<usize>,
    /// Char index where each line starts.
    line_starts: Vec<usize>,
}

impl InputBuffer {
    pub fn new(text: &str) -> Self {
        let mut chars = Vec::with_capacity(text.len());
        let mut byte_offsets = Vec::with_capacity(text.len() + 1);
        let mut line_starts = vec![0];
        for (offset, c) in text.char_indices() {
            chars.push(c);
            byte_offsets.push(offset);
            if c == '\n' {
                line_starts.push(chars.len());
            }
        }
        byte_offsets.push(text.len());

        Self {
            text: text.to_owned(),
            chars,
            byte_offsets,
            line_starts,
        }
    }

    /// Number of chars in the buffer.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn char_at(&self, index: usize) -> InputChar {
        self.chars
            .get(index)
            .map_or(InputChar::Eoi, |&c| InputChar::Char(c))
    }

    /// Text between two char indices, clamped to the buffer.
    pub fn extract(&self, start: usize, end: usize) -> &str {
        let start = self.byte_offset(start);
        let end = self.byte_offset(end).max(start);
        &self.text[start..end]
    }

    /// Byte offset of a char index, clamped to the end of the text.
    pub fn byte_offset(&self, index: usize) -> usize {
        let last = self.byte_offsets.len() - 1;
        self.byte_offsets[index.min(last)]
    }

    /// 1-based line and column of a char index.
    pub fn position(&self, index: usize) -> Position {
        let index = index.min(self.chars.len());
        let line = self.line_starts.partition_point(|&start| start <= index) - 1;
        Position {
            line: line + 1,
            column: index - self.line_starts[line] + 1,
        }
    }

    /// Text of a 1-based line, without its terminator.
    pub fn line(&self, line: usize) -> Option<&str> {
        let start = *self.line_starts.get(line.checked_sub(1)?)?;
        let end = self
            .line_starts
            .get(line)
            .map_or(self.chars.len(), |&next| next - 1);
        Some(self.extract(start, end).trim_end_matches('\r'))
    }
}

/// Human-readable location inside an input buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, pos {}", self.line, self.column)
    }
}

/// Immutable cursor: an index plus the char found there.
///
/// Cursors are ordered by index. Advancing at end of input returns the
/// same cursor again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InputLocation {
    pub index: usize,
    pub current: InputChar,
}

impl InputLocation {
    pub fn start(buffer: &InputBuffer) -> Self {
        Self::at(buffer, 0)
    }

    pub fn at(buffer: &InputBuffer, index: usize) -> Self {
        Self {
            index,
            current: buffer.char_at(index),
        }
    }

    #[must_use]
    pub fn advance(self, buffer: &InputBuffer) -> Self {
        if self.current.is_eoi() {
            return self;
        }
        Self::at(buffer, self.index + 1)
    }

    /// Char `n` positions ahead of this cursor (`n = 0` is the current char).
    pub fn lookahead(self, buffer: &InputBuffer, n: usize) -> InputChar {
        buffer.char_at(self.index + n)
    }
}

impl PartialOrd for InputLocation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for InputLocation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}
