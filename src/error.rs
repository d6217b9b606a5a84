//! Unified library error types
//!
//! Provides a single error type for the fallible edges of the crate:
//! loading shelf data and reading or writing configuration.

use serde::Serialize;
use thiserror::Error;

use crate::models::ShelfError;

/// Library-level error type
#[derive(Error, Debug)]
pub enum StatsError {
    /// Shelf provider error
    #[error("shelf error: {0}")]
    Shelf(#[from] ShelfError),

    /// Invalid or unwritable configuration
    #[error("config error: {0}")]
    Config(String),

    /// File operation error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

/// Serializable error response for a reporting layer
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for client-side handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl StatsError {
    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Shelf(_) => "SHELF_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn detail(&self) -> String {
        match self {
            Self::Shelf(e) => e.to_string(),
            Self::Io(e) => e.to_string(),
            Self::Config(msg) | Self::Internal(msg) => msg.clone(),
        }
    }
}

impl From<StatsError> for ErrorResponse {
    fn from(err: StatsError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.detail(),
        }
    }
}

impl Serialize for StatsError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        ErrorResponse {
            code: self.code().to_string(),
            message: self.detail(),
        }
        .serialize(serializer)
    }
}
