//! Byte offset to line/column mapping for reporters.
//!
//! Lines end at `\n`, `\r\n`, a lone `\r`, U+2028 or U+2029, the same
//! terminators that end a directive description. Columns count UTF-16 code
//! units so they line up with editor positions.

use crate::span::Span;
use serde::{Deserialize, Serialize};

/// Zero-based line and UTF-16 column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub const fn new(line: u32, character: u32) -> Self {
        Position { line, character }
    }
}

/// Start and end [`Position`] of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub const fn new(start: Position, end: Position) -> Self {
        Range { start, end }
    }
}

/// Byte offsets at which each line of a document begins.
#[derive(Debug, Clone)]
pub struct LineMap {
    line_starts: Vec<u32>,
}

impl LineMap {
    pub fn build(source: &str) -> Self {
        let mut line_starts = vec![0];
        let mut chars = source.char_indices().peekable();

        while let Some((offset, ch)) = chars.next() {
            let next_line = offset + ch.len_utf8();
            match ch {
                '\r' if matches!(chars.peek(), Some((_, '\n'))) => {}
                '\n' | '\r' | '\u{2028}' | '\u{2029}' => line_starts.push(next_line as u32),
                _ => {}
            }
        }

        LineMap { line_starts }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Position of byte `offset`. Offsets past the end clamp to the end of
    /// the source.
    pub fn offset_to_position(&self, offset: u32, source: &str) -> Position {
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let line_start = self.line_starts[line] as usize;
        let end = (offset as usize).clamp(line_start, source.len().max(line_start));

        let character = source
            .get(line_start..end)
            .map_or(0, |text| text.encode_utf16().count());

        Position::new(line as u32, character as u32)
    }

    pub fn span_to_range(&self, span: Span, source: &str) -> Range {
        Range::new(
            self.offset_to_position(span.start, source),
            self.offset_to_position(span.end, source),
        )
    }
}

#[cfg(test)]
#[path = "../tests/position_tests.rs"]
mod position_tests;
