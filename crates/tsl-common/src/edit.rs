//! Text edits produced by fixes and suggestions.

use crate::span::Span;

/// A single text edit: replace `span` in the original source with `new_text`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextEdit {
    /// The original byte range to replace.
    pub span: Span,
    /// The replacement text.
    pub new_text: String,
}

impl TextEdit {
    /// Create a new text edit.
    pub const fn new(span: Span, new_text: String) -> Self {
        Self { span, new_text }
    }

    /// Replace the text covered by `span`.
    pub fn replace(span: Span, new_text: impl Into<String>) -> Self {
        Self::new(span, new_text.into())
    }

    /// Apply this edit to `source`. Returns `None` when the span does not
    /// fall on character boundaries inside `source`.
    pub fn apply(&self, source: &str) -> Option<String> {
        apply_edits(source, std::slice::from_ref(self))
    }
}

/// Apply a set of non-overlapping edits to `source`.
///
/// Edits are applied back to front so earlier spans stay valid. Returns `None`
/// if any span is out of bounds or two spans overlap.
pub fn apply_edits(source: &str, edits: &[TextEdit]) -> Option<String> {
    let mut sorted: Vec<&TextEdit> = edits.iter().collect();
    sorted.sort_by_key(|edit| (edit.span.start, edit.span.end));

    for pair in sorted.windows(2) {
        if pair[0].span.end > pair[1].span.start {
            return None;
        }
    }

    let mut result = source.to_string();
    for edit in sorted.iter().rev() {
        let start = edit.span.start as usize;
        let end = edit.span.end as usize;
        if end > result.len() || !result.is_char_boundary(start) || !result.is_char_boundary(end) {
            return None;
        }
        result.replace_range(start..end, &edit.new_text);
    }

    Some(result)
}

#[cfg(test)]
#[path = "../tests/edit_tests.rs"]
mod edit_tests;
