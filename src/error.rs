//! Library-level errors (no I/O concerns)

use thiserror::Error;

/// Errors raised by pattern lookups, parsing and configuration loading.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("unknown {category}: {key}")]
    UnknownCategory { category: &'static str, key: String },

    #[error("unknown pattern: {0}")]
    UnknownPattern(String),

    #[error("invalid expression '{input}': {message}")]
    InvalidExpression { input: String, message: String },

    #[error("config error: {message}")]
    Config { message: String },
}

impl PatternError {
    pub fn unknown(category: &'static str, key: impl Into<String>) -> Self {
        Self::UnknownCategory {
            category,
            key: key.into(),
        }
    }
}

/// Result type for library operations.
pub type PatternResult<T> = Result<T, PatternError>;
