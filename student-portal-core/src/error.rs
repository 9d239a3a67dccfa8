//! Unified error type definition

use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Rejected locally before any request was made
    #[error("Validation error: {0}")]
    Validation(String),

    /// Connection refused, DNS failure, body read failure, ...
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not the JSON we expected
    #[error("Parse error: {0}")]
    Parse(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, missing record, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_) => true,
            Self::Status { status, .. } => (400..500).contains(status),
            _ => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
