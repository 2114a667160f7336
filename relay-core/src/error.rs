//! Error types for the relay dispatcher.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for dispatch operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum Error {
    /// No configured parser accepted a token
    #[error("Could not parse argument: {0}")]
    Unrecognized(String),

    /// A parser recognized a token's role but found it invalid
    #[error("{0}")]
    Validation(String),
}

/// Result type alias for dispatch operations
pub type Result<T> = std::result::Result<T, Error>;
