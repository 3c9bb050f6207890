use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building a verification policy.
#[derive(Debug, Error)]
pub enum TitleCheckError {
    /// The policy file could not be read.
    #[error("failed to read policy file {path:?}: {source}")]
    PolicyRead {
        /// Location of the policy file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The policy document is not valid JSON or has the wrong shape.
    #[error("failed to parse policy: {0}")]
    PolicyParse(#[from] serde_json::Error),

    /// The policy parsed but violates a constraint.
    #[error("invalid policy: {0}")]
    InvalidPolicy(String),
}

/// Result type alias for titlecheck core operations.
pub type Result<T> = std::result::Result<T, TitleCheckError>;
