//! Error types for option parsing
//!
//! Normalization itself cannot fail. Errors only arise when options are
//! built from untyped input (flag names, JSON objects).

use thiserror::Error;

/// Errors raised while interpreting normalization options
#[derive(Error, Debug)]
pub enum NormalizeError {
    /// Flag name that does not match any option
    #[error("unknown option flag '{name}'")]
    UnknownFlag {
        /// The name as given by the caller
        name: String,
    },

    /// Options object that could not be deserialized
    #[cfg(feature = "serde")]
    #[error("invalid options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

/// Result type for option parsing
pub type Result<T> = std::result::Result<T, NormalizeError>;
