//! Error types for rule configuration and session setup

use thiserror::Error;

/// Errors surfaced to the host
///
/// Configuration errors only disable the offending rule; the rest of the
/// session still runs.
#[derive(Debug, Error)]
pub enum LintError {
    #[error("unknown rule `{0}`")]
    UnknownRule(String),

    #[error("invalid options for `{rule}`: {reason}")]
    InvalidOptions { rule: String, reason: String },

    #[error("rule `{0}` is already registered")]
    DuplicateRule(String),

    #[error("failed to parse source: {0}")]
    Parse(String),

    #[error("invalid lint configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl LintError {
    pub fn invalid_options(rule: &str, reason: impl ToString) -> Self {
        Self::InvalidOptions {
            rule: rule.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LintError>;
