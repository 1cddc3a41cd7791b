//! Error responses for the HTTP-facing collaborator.
//!
//! This module maps engine errors to a JSON error body and a status code.
//! Routing is left to the embedding service.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::ParseOverheadFieldError;
use crate::repository::RepositoryError;

/// HTTP 400.
pub const STATUS_BAD_REQUEST: u16 = 400;
/// HTTP 500.
pub const STATUS_INTERNAL_SERVER_ERROR: u16 = 500;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a storage error response.
    pub fn storage_error(message: impl Into<String>) -> Self {
        Self::with_details("STORAGE_ERROR", "Storage error", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The error body.
    pub error: ApiError,
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::MixedDates { .. }
            | EngineError::InvalidDateRange { .. }
            | EngineError::RangeTooLong { .. } => ApiErrorResponse {
                status: STATUS_BAD_REQUEST,
                error: ApiError::validation_error(error.to_string()),
            },
            EngineError::InvalidRecord { record_id, message } => ApiErrorResponse {
                status: STATUS_BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_RECORD",
                    format!("Invalid record '{}': {}", record_id, message),
                    "The stored work record cannot be allocated against",
                ),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: STATUS_INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: STATUS_INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidConfig { field, message } => ApiErrorResponse {
                status: STATUS_INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Invalid configuration",
                    format!("{}: {}", field, message),
                ),
            },
            EngineError::Storage(err) => err.into(),
        }
    }
}

impl From<RepositoryError> for ApiErrorResponse {
    fn from(error: RepositoryError) -> Self {
        ApiErrorResponse {
            status: STATUS_INTERNAL_SERVER_ERROR,
            error: ApiError::storage_error(error.to_string()),
        }
    }
}

impl From<ParseOverheadFieldError> for ApiErrorResponse {
    fn from(error: ParseOverheadFieldError) -> Self {
        ApiErrorResponse {
            status: STATUS_BAD_REQUEST,
            error: ApiError::validation_error(error.to_string()),
        }
    }
}
