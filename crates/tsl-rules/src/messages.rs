//! Message ids and templates for `ban-ts-comment`.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageId {
    /// `@ts-<directive>` used where it is banned outright.
    TsDirectiveComment,
    /// `@ts-ignore` used where `@ts-expect-error` should be.
    TsIgnoreInsteadOfExpectError,
    /// The description does not match the configured format.
    TsDirectiveCommentDescriptionNotMatchPattern,
    /// The description is missing or too short.
    TsDirectiveCommentRequiresDescription,
    /// Suggestion: rewrite `@ts-ignore` to `@ts-expect-error`.
    ReplaceTsIgnoreWithTsExpectError,
}

impl MessageId {
    pub const fn as_str(self) -> &'static str {
        match self {
            MessageId::TsDirectiveComment => "tsDirectiveComment",
            MessageId::TsIgnoreInsteadOfExpectError => "tsIgnoreInsteadOfExpectError",
            MessageId::TsDirectiveCommentDescriptionNotMatchPattern => {
                "tsDirectiveCommentDescriptionNotMatchPattern"
            }
            MessageId::TsDirectiveCommentRequiresDescription => {
                "tsDirectiveCommentRequiresDescription"
            }
            MessageId::ReplaceTsIgnoreWithTsExpectError => "replaceTsIgnoreWithTsExpectError",
        }
    }

    /// Message template with `{{placeholder}}` slots.
    pub const fn template(self) -> &'static str {
        match self {
            MessageId::TsDirectiveComment => {
                "Do not use \"@ts-{{directive}}\" because it alters compilation errors."
            }
            MessageId::TsIgnoreInsteadOfExpectError => {
                "Use \"@ts-expect-error\" instead of \"@ts-ignore\", as \"@ts-ignore\" will do nothing if the following line is error-free."
            }
            MessageId::TsDirectiveCommentRequiresDescription => {
                "Include a description after the \"@ts-{{directive}}\" directive to explain why the @ts-{{directive}} is necessary. The description must be {{minimumDescriptionLength}} characters or longer."
            }
            MessageId::TsDirectiveCommentDescriptionNotMatchPattern => {
                "The description for the \"@ts-{{directive}}\" directive must match the {{format}} format."
            }
            MessageId::ReplaceTsIgnoreWithTsExpectError => {
                "Replace \"@ts-ignore\" with \"@ts-expect-error\"."
            }
        }
    }
}

/// Category of problem a rule reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Problem,
    Suggestion,
    Layout,
}

/// Static description of a rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleMeta {
    pub name: &'static str,
    pub kind: RuleKind,
    pub description: &'static str,
    /// Enabled in the recommended configuration.
    pub recommended: bool,
    pub has_suggestions: bool,
    pub messages: &'static [MessageId],
}
