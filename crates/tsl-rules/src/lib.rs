//! Directive-comment rules
//!
//! Recognizes TypeScript comment directives (`@ts-expect-error`,
//! `@ts-ignore`, `@ts-nocheck`, `@ts-check`) and applies the
//! `ban-ts-comment` policy to them.
//!
//! ```rust,ignore
//! use tsl_rules::BanTsComment;
//!
//! let rule = BanTsComment::from_json(serde_json::json!({ "ts-ignore": true }))?;
//! let diagnostics = rule.check_source("// @ts-ignore\nfoo();");
//! assert_eq!(diagnostics.len(), 1);
//! ```

pub mod ban_ts_comment;
mod diagnostic;
pub mod directive;
mod error;
pub mod messages;
pub mod options;

pub use ban_ts_comment::{BanTsComment, description_length};
pub use diagnostic::{RuleDiagnostic, Suggestion};
pub use directive::{DirectiveKind, DirectiveMatch, match_directive};
pub use error::OptionsError;
pub use messages::{MessageId, RuleKind, RuleMeta};
pub use options::{BanTsCommentOptions, DEFAULT_MINIMUM_DESCRIPTION_LENGTH, DirectiveConfig};
