use thiserror::Error;

/// Errors raised while building a rule from its options.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("invalid rule options: {0}")]
    InvalidOptions(#[from] serde_json::Error),

    #[error("invalid pattern {pattern:?} in descriptionFormat for \"{directive}\": {source}")]
    InvalidPattern {
        directive: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
