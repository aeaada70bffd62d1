use crate::messages::MessageId;
use serde::Serialize;
use tsl_common::{LineMap, MessageData, Range, Span, TextEdit, format_message};

/// An optional edit offered alongside a diagnostic. Never applied
/// automatically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub message_id: MessageId,
    pub message: String,
    pub edit: TextEdit,
}

impl Suggestion {
    pub fn new(message_id: MessageId, edit: TextEdit) -> Self {
        Suggestion {
            message_id,
            message: format_message(message_id.template(), &MessageData::new()),
            edit,
        }
    }
}

/// A problem reported by a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleDiagnostic {
    pub message_id: MessageId,
    /// Values interpolated into the message template.
    pub data: MessageData,
    /// Rendered message text.
    pub message: String,
    pub span: Span,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Suggestion>,
}

impl RuleDiagnostic {
    pub fn new(message_id: MessageId, span: Span, data: MessageData) -> Self {
        RuleDiagnostic {
            message_id,
            message: format_message(message_id.template(), &data),
            data,
            span,
            suggestions: Vec::new(),
        }
    }

    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestions.push(suggestion);
        self
    }

    /// Line/column range of the reported comment.
    pub fn range(&self, line_map: &LineMap, source: &str) -> Range {
        line_map.span_to_range(self.span, source)
    }
}
