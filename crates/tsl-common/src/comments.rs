//! Comment tokens
//!
//! Comments are not part of the AST, so hosts hand them to rules as a flat,
//! document-ordered stream of [`CommentToken`]s. [`scan_comments`] is a
//! lightweight reference scanner for hosts that do not have a lexer of their
//! own.

use crate::span::Span;
use serde::{Deserialize, Serialize};

/// Lexical form of a comment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommentKind {
    /// `// ...`
    Line,
    /// `/* ... */`
    Block,
}

/// One lexical comment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentToken {
    pub kind: CommentKind,
    /// Comment text without the `//`, `/*` or `*/` delimiters.
    pub value: String,
    /// Span of the whole comment, delimiters included.
    pub span: Span,
}

impl CommentToken {
    /// Create a line comment token.
    pub fn line(value: impl Into<String>, span: Span) -> Self {
        CommentToken {
            kind: CommentKind::Line,
            value: value.into(),
            span,
        }
    }

    /// Create a block comment token.
    pub fn block(value: impl Into<String>, span: Span) -> Self {
        CommentToken {
            kind: CommentKind::Block,
            value: value.into(),
            span,
        }
    }

    /// Re-wrap a comment value in the delimiters of this token's kind.
    pub fn render(&self, value: &str) -> String {
        match self.kind {
            CommentKind::Line => format!("//{value}"),
            CommentKind::Block => format!("/*{value}*/"),
        }
    }
}

/// Extract all comments from source text, in document order.
///
/// String and template literals are skipped so that `"// not a comment"`
/// does not produce a token. Regular expression literals are not recognized.
///
/// Offsets are `u32`; sources of 4 GiB or more saturate at `u32::MAX`.
pub fn scan_comments(source: &str) -> Vec<CommentToken> {
    let mut comments = Vec::new();
    let bytes = source.as_bytes();
    let len = bytes.len();
    let mut pos = 0;

    while pos < len {
        let ch = bytes[pos];

        if matches!(ch, b'"' | b'\'' | b'`') {
            pos = skip_string_literal(bytes, pos);
            continue;
        }

        if ch == b'/' && pos + 1 < len {
            let next = bytes[pos + 1];

            if next == b'/' {
                let start = pos;
                pos += 2;
                while pos < len && !is_line_terminator_at(bytes, pos) {
                    pos += 1;
                }

                comments.push(CommentToken::line(
                    &source[start + 2..pos],
                    Span::new(to_offset(start), to_offset(pos)),
                ));
                continue;
            } else if next == b'*' {
                let start = pos;
                pos += 2;

                let mut value_end = len;
                while pos + 1 < len {
                    if bytes[pos] == b'*' && bytes[pos + 1] == b'/' {
                        value_end = pos;
                        pos += 2;
                        break;
                    }
                    pos += 1;
                }
                if value_end == len {
                    // Unclosed comment runs to end of input
                    pos = len;
                }

                comments.push(CommentToken::block(
                    &source[start + 2..value_end],
                    Span::new(to_offset(start), to_offset(pos)),
                ));
                continue;
            }
        }

        pos += 1;
    }

    comments
}

/// `\n`, `\r`, U+2028 or U+2029 starts at byte `pos`.
fn is_line_terminator_at(bytes: &[u8], pos: usize) -> bool {
    match bytes[pos] {
        b'\n' | b'\r' => true,
        // U+2028 / U+2029 encode as E2 80 A8 / E2 80 A9
        0xE2 => matches!(bytes.get(pos + 1..pos + 3), Some([0x80, 0xA8 | 0xA9])),
        _ => false,
    }
}

fn to_offset(pos: usize) -> u32 {
    u32::try_from(pos).unwrap_or(u32::MAX)
}

/// Skip a quoted literal starting at `start`, returning the offset just past
/// its closing quote (or end of input). Single and double quoted strings also
/// stop at a line break.
fn skip_string_literal(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut pos = start + 1;

    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => pos += 2,
            b if b == quote => return pos + 1,
            b'\n' | b'\r' if quote != b'`' => return pos,
            _ => pos += 1,
        }
    }

    bytes.len()
}

#[cfg(test)]
#[path = "../tests/comments_tests.rs"]
mod comments_tests;
