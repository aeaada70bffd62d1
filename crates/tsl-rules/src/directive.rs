//! `@ts-<directive>` comment recognition.
//!
//! Uses the same two anchored grammars as the TypeScript scanner: one for
//! line comments and one for block comments, which additionally tolerates
//! leading `*` continuation markup. A directive that does not start the
//! comment is not a directive.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use tsl_common::{CommentKind, CommentToken};

/// `// @ts-ignore`, `/// @ts-expect-error: reason`, ...
static LINE_DIRECTIVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^/*\s*@ts-(?P<directive>expect-error|ignore|check|nocheck)(?P<description>[^\n\r\x{2028}\x{2029}]*)",
    )
    .unwrap()
});

/// `/* @ts-ignore */`, `/** @ts-nocheck */`, `/*\n * @ts-check\n */`, ...
static BLOCK_DIRECTIVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*(?:/|\*)*\s*@ts-(?P<directive>expect-error|ignore|check|nocheck)(?P<description>[^\n\r\x{2028}\x{2029}]*)",
    )
    .unwrap()
});

/// A TypeScript comment directive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DirectiveKind {
    #[serde(rename = "expect-error")]
    ExpectError,
    #[serde(rename = "ignore")]
    Ignore,
    #[serde(rename = "nocheck")]
    NoCheck,
    #[serde(rename = "check")]
    Check,
}

impl DirectiveKind {
    pub const ALL: [DirectiveKind; 4] = [
        DirectiveKind::ExpectError,
        DirectiveKind::Ignore,
        DirectiveKind::NoCheck,
        DirectiveKind::Check,
    ];

    /// Name as written after `@ts-`.
    pub const fn name(self) -> &'static str {
        match self {
            DirectiveKind::ExpectError => "expect-error",
            DirectiveKind::Ignore => "ignore",
            DirectiveKind::NoCheck => "nocheck",
            DirectiveKind::Check => "check",
        }
    }

    /// Key of this directive in the rule options (`"ts-ignore"`, ...).
    pub const fn option_key(self) -> &'static str {
        match self {
            DirectiveKind::ExpectError => "ts-expect-error",
            DirectiveKind::Ignore => "ts-ignore",
            DirectiveKind::NoCheck => "ts-nocheck",
            DirectiveKind::Check => "ts-check",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@ts-{}", self.name())
    }
}

/// A directive found at the start of a comment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirectiveMatch<'a> {
    pub directive: DirectiveKind,
    /// Everything after the directive keyword up to the end of the line,
    /// untrimmed.
    pub description: &'a str,
}

/// Match a directive at the start of `comment`.
pub fn match_directive(comment: &CommentToken) -> Option<DirectiveMatch<'_>> {
    let re = match comment.kind {
        CommentKind::Line => &*LINE_DIRECTIVE_RE,
        CommentKind::Block => &*BLOCK_DIRECTIVE_RE,
    };

    let caps = re.captures(&comment.value)?;
    let directive = DirectiveKind::from_name(caps.name("directive")?.as_str())?;
    let description = caps.name("description").map_or("", |m| m.as_str());

    Some(DirectiveMatch {
        directive,
        description,
    })
}

#[cfg(test)]
#[path = "../tests/directive_tests.rs"]
mod directive_tests;
