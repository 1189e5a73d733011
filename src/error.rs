//! # Client Error Types
//!
//! Unified error handling for configuration and serialization operations.
//! Handle construction itself is infallible: a missing credential builds a
//! handle with an absent key rather than an error, so failures surface at
//! first use inside the orchestration service.

use thiserror::Error;

/// Client operation result type
pub type ClientResult<T> = Result<T, ClientError>;

/// Error types for client configuration and serialization
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("JSON serialization/deserialization failed: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ClientError {
    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }
}
