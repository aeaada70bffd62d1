//! `ban-ts-comment`: disallow `@ts-<directive>` comments or require
//! descriptions after them.
//!
//! Decision per matched directive, first applicable policy wins:
//!
//! | policy                     | outcome                                          |
//! |----------------------------|--------------------------------------------------|
//! | `false`                    | allowed                                          |
//! | `true`, `@ts-ignore`       | report, suggest `@ts-expect-error`               |
//! | `true`, other directive    | report                                           |
//! | description required       | report if trimmed description is too short,      |
//! |                            | else report if it does not match the format      |

use crate::diagnostic::{RuleDiagnostic, Suggestion};
use crate::directive::{DirectiveKind, DirectiveMatch, match_directive};
use crate::error::OptionsError;
use crate::messages::{MessageId, RuleKind, RuleMeta};
use crate::options::{BanTsCommentOptions, DirectiveConfig};
use regex::Regex;
use rustc_hash::FxHashMap;
use serde_json::Value;
use tracing::{debug, trace};
use tsl_common::{CommentToken, MessageData, TextEdit, scan_comments};

pub const META: RuleMeta = RuleMeta {
    name: "ban-ts-comment",
    kind: RuleKind::Problem,
    description: "Disallow `@ts-<directive>` comments or require descriptions after directives",
    recommended: true,
    has_suggestions: true,
    messages: &[
        MessageId::TsDirectiveComment,
        MessageId::TsIgnoreInsteadOfExpectError,
        MessageId::TsDirectiveCommentRequiresDescription,
        MessageId::TsDirectiveCommentDescriptionNotMatchPattern,
        MessageId::ReplaceTsIgnoreWithTsExpectError,
    ],
};

/// A configured `ban-ts-comment` rule.
///
/// Immutable once built; share one instance across documents.
#[derive(Debug, Clone)]
pub struct BanTsComment {
    options: BanTsCommentOptions,
    description_formats: FxHashMap<DirectiveKind, Regex>,
}

impl BanTsComment {
    /// Build the rule, compiling every `descriptionFormat` up front.
    pub fn new(options: BanTsCommentOptions) -> Result<Self, OptionsError> {
        let mut description_formats = FxHashMap::default();

        for directive in DirectiveKind::ALL {
            let Some(pattern) = options.config(directive).description_format() else {
                continue;
            };
            let regex = Regex::new(pattern).map_err(|source| OptionsError::InvalidPattern {
                directive: directive.option_key(),
                pattern: pattern.to_string(),
                source,
            })?;
            debug!(directive = directive.option_key(), pattern, "compiled description format");
            description_formats.insert(directive, regex);
        }

        Ok(BanTsComment {
            options,
            description_formats,
        })
    }

    /// Build the rule from JSON options.
    pub fn from_json(value: Value) -> Result<Self, OptionsError> {
        Self::new(BanTsCommentOptions::from_json(value)?)
    }

    pub fn meta(&self) -> &'static RuleMeta {
        &META
    }

    pub fn options(&self) -> &BanTsCommentOptions {
        &self.options
    }

    /// Check a document's comments, in order.
    pub fn check(&self, comments: &[CommentToken]) -> Vec<RuleDiagnostic> {
        comments
            .iter()
            .filter_map(|comment| self.check_comment(comment))
            .collect()
    }

    /// Scan `source` for comments and check them.
    pub fn check_source(&self, source: &str) -> Vec<RuleDiagnostic> {
        self.check(&scan_comments(source))
    }

    /// Check a single comment. At most one diagnostic is produced.
    pub fn check_comment(&self, comment: &CommentToken) -> Option<RuleDiagnostic> {
        let matched = match_directive(comment)?;
        let diagnostic = self.evaluate(comment, &matched);
        trace!(
            directive = matched.directive.name(),
            start = comment.span.start,
            reported = ?diagnostic.as_ref().map(|d| d.message_id),
            "checked directive comment"
        );
        diagnostic
    }

    fn evaluate(&self, comment: &CommentToken, matched: &DirectiveMatch<'_>) -> Option<RuleDiagnostic> {
        let directive = matched.directive;

        match self.options.config(directive) {
            DirectiveConfig::Disabled => None,
            DirectiveConfig::AlwaysFlag if directive == DirectiveKind::Ignore => Some(
                RuleDiagnostic::new(
                    MessageId::TsIgnoreInsteadOfExpectError,
                    comment.span,
                    MessageData::new(),
                )
                .with_suggestion(replace_ts_ignore_suggestion(comment)),
            ),
            DirectiveConfig::AlwaysFlag => Some(RuleDiagnostic::new(
                MessageId::TsDirectiveComment,
                comment.span,
                directive_data(directive),
            )),
            config if config.requires_description() => {
                self.check_description(comment, directive, matched.description)
            }
            DirectiveConfig::AllowWithDescription | DirectiveConfig::DescriptionFormat { .. } => {
                None
            }
        }
    }

    fn check_description(
        &self,
        comment: &CommentToken,
        directive: DirectiveKind,
        description: &str,
    ) -> Option<RuleDiagnostic> {
        let minimum = self.options.minimum_description_length;

        if description_length(description) < minimum {
            let mut data = directive_data(directive);
            data.insert("minimumDescriptionLength".to_string(), Value::from(minimum));
            return Some(RuleDiagnostic::new(
                MessageId::TsDirectiveCommentRequiresDescription,
                comment.span,
                data,
            ));
        }

        let format = self.description_formats.get(&directive)?;
        if format.is_match(description) {
            return None;
        }

        let mut data = directive_data(directive);
        data.insert("format".to_string(), Value::from(format.as_str()));
        Some(RuleDiagnostic::new(
            MessageId::TsDirectiveCommentDescriptionNotMatchPattern,
            comment.span,
            data,
        ))
    }
}

/// Length of a description in Unicode scalar values, ignoring surrounding
/// whitespace and byte order marks.
pub fn description_length(description: &str) -> usize {
    description
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .chars()
        .count()
}

fn directive_data(directive: DirectiveKind) -> MessageData {
    let mut data = MessageData::new();
    data.insert("directive".to_string(), Value::from(directive.name()));
    data
}

/// Rewrite the first `@ts-ignore` in the comment, keeping its delimiters.
fn replace_ts_ignore_suggestion(comment: &CommentToken) -> Suggestion {
    let value = comment.value.replacen("@ts-ignore", "@ts-expect-error", 1);
    Suggestion::new(
        MessageId::ReplaceTsIgnoreWithTsExpectError,
        TextEdit::replace(comment.span, comment.render(&value)),
    )
}

#[cfg(test)]
#[path = "../tests/ban_ts_comment_tests.rs"]
mod ban_ts_comment_tests;
