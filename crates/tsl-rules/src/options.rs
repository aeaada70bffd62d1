//! Options for the `ban-ts-comment` rule.
//!
//! Accepted JSON shape:
//!
//! ```json
//! {
//!   "ts-expect-error": "allow-with-description",
//!   "ts-ignore": true,
//!   "ts-nocheck": true,
//!   "ts-check": false,
//!   "minimumDescriptionLength": 3
//! }
//! ```
//!
//! Each directive takes `true`, `false`, `"allow-with-description"` or
//! `{ "descriptionFormat": "<regex>" }`. Keys left out keep their defaults.
//!
//! `descriptionFormat` uses [`regex`] syntax, not JavaScript's: lookaround
//! (`(?!...)`, `(?<=...)`) and backreferences are not supported, and such
//! patterns are rejected when the rule is built.

use crate::directive::DirectiveKind;
use crate::error::OptionsError;
use serde::{Deserialize, Serialize};

/// Default for `minimumDescriptionLength`.
pub const DEFAULT_MINIMUM_DESCRIPTION_LENGTH: usize = 3;

/// Policy for one directive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDirectiveConfig", into = "RawDirectiveConfig")]
pub enum DirectiveConfig {
    /// `false`: the directive is allowed.
    Disabled,
    /// `true`: the directive is always reported.
    AlwaysFlag,
    /// `"allow-with-description"`
    AllowWithDescription,
    /// `{ "descriptionFormat": ... }`. An empty pattern imposes no
    /// requirement at all.
    DescriptionFormat { description_format: String },
}

impl DirectiveConfig {
    /// Whether this policy requires a description after the directive.
    pub fn requires_description(&self) -> bool {
        match self {
            DirectiveConfig::AllowWithDescription => true,
            DirectiveConfig::DescriptionFormat { description_format } => {
                !description_format.is_empty()
            }
            DirectiveConfig::Disabled | DirectiveConfig::AlwaysFlag => false,
        }
    }

    /// Non-empty description pattern, if any.
    pub fn description_format(&self) -> Option<&str> {
        match self {
            DirectiveConfig::DescriptionFormat { description_format }
                if !description_format.is_empty() =>
            {
                Some(description_format)
            }
            _ => None,
        }
    }
}

/// Wire form of [`DirectiveConfig`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum RawDirectiveConfig {
    Flag(bool),
    Mode(DescriptionMode),
    Format(FormatConfig),
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
enum DescriptionMode {
    #[serde(rename = "allow-with-description")]
    AllowWithDescription,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct FormatConfig {
    #[serde(default)]
    description_format: Option<String>,
}

impl From<RawDirectiveConfig> for DirectiveConfig {
    fn from(raw: RawDirectiveConfig) -> Self {
        match raw {
            RawDirectiveConfig::Flag(false) => DirectiveConfig::Disabled,
            RawDirectiveConfig::Flag(true) => DirectiveConfig::AlwaysFlag,
            RawDirectiveConfig::Mode(DescriptionMode::AllowWithDescription) => {
                DirectiveConfig::AllowWithDescription
            }
            RawDirectiveConfig::Format(format) => DirectiveConfig::DescriptionFormat {
                description_format: format.description_format.unwrap_or_default(),
            },
        }
    }
}

impl From<DirectiveConfig> for RawDirectiveConfig {
    fn from(config: DirectiveConfig) -> Self {
        match config {
            DirectiveConfig::Disabled => RawDirectiveConfig::Flag(false),
            DirectiveConfig::AlwaysFlag => RawDirectiveConfig::Flag(true),
            DirectiveConfig::AllowWithDescription => {
                RawDirectiveConfig::Mode(DescriptionMode::AllowWithDescription)
            }
            DirectiveConfig::DescriptionFormat { description_format } => {
                RawDirectiveConfig::Format(FormatConfig {
                    description_format: Some(description_format),
                })
            }
        }
    }
}

/// Resolved options for `ban-ts-comment`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BanTsCommentOptions {
    #[serde(rename = "ts-expect-error")]
    pub ts_expect_error: DirectiveConfig,
    #[serde(rename = "ts-ignore")]
    pub ts_ignore: DirectiveConfig,
    #[serde(rename = "ts-nocheck")]
    pub ts_nocheck: DirectiveConfig,
    #[serde(rename = "ts-check")]
    pub ts_check: DirectiveConfig,
    /// Minimum description length, in Unicode scalar values.
    #[serde(rename = "minimumDescriptionLength")]
    pub minimum_description_length: usize,
}

impl Default for BanTsCommentOptions {
    fn default() -> Self {
        BanTsCommentOptions {
            ts_expect_error: DirectiveConfig::AllowWithDescription,
            ts_ignore: DirectiveConfig::AlwaysFlag,
            ts_nocheck: DirectiveConfig::AlwaysFlag,
            ts_check: DirectiveConfig::Disabled,
            minimum_description_length: DEFAULT_MINIMUM_DESCRIPTION_LENGTH,
        }
    }
}

impl BanTsCommentOptions {
    /// Parse user options, filling unspecified keys with defaults.
    pub fn from_json(value: serde_json::Value) -> Result<Self, OptionsError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_json_str(text: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Policy for `directive`.
    pub fn config(&self, directive: DirectiveKind) -> &DirectiveConfig {
        match directive {
            DirectiveKind::ExpectError => &self.ts_expect_error,
            DirectiveKind::Ignore => &self.ts_ignore,
            DirectiveKind::NoCheck => &self.ts_nocheck,
            DirectiveKind::Check => &self.ts_check,
        }
    }

    /// Builder-style override of one directive's policy.
    pub fn with(mut self, directive: DirectiveKind, config: DirectiveConfig) -> Self {
        match directive {
            DirectiveKind::ExpectError => self.ts_expect_error = config,
            DirectiveKind::Ignore => self.ts_ignore = config,
            DirectiveKind::NoCheck => self.ts_nocheck = config,
            DirectiveKind::Check => self.ts_check = config,
        }
        self
    }

    pub fn with_minimum_description_length(mut self, length: usize) -> Self {
        self.minimum_description_length = length;
        self
    }
}

#[cfg(test)]
#[path = "../tests/options_tests.rs"]
mod options_tests;
