//! Adapter error types.

use crate::ValidationError;
use ledgerline_model::ModelError;
use ledgerline_serializer::SerializerError;
use thiserror::Error;

/// Result type for adapter operations.
pub type AdapterResult<T> = Result<T, AdapterError>;

/// Errors that can occur while talking to the API.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("validation failed with {} error(s)", .0.len())]
    Invalid(Vec<ValidationError>),

    #[error("malformed validation errors: {0}")]
    MalformedErrors(String),

    #[error("authentication required")]
    Unauthorized,

    #[error("access forbidden")]
    Forbidden,

    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("server error: HTTP {status}")]
    Server { status: u16 },

    #[error("unexpected HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("{model} record has no id")]
    MissingId { model: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Serializer(#[from] SerializerError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl AdapterError {
    /// Returns true if this error represents a 422 validation failure.
    pub fn is_invalid(&self) -> bool {
        matches!(self, AdapterError::Invalid(_))
    }

    /// The per-field validation errors; empty for every other error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            AdapterError::Invalid(errors) => errors,
            _ => &[],
        }
    }

    /// The HTTP status behind this error, when there is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            AdapterError::Invalid(_) => Some(422),
            AdapterError::Unauthorized => Some(401),
            AdapterError::Forbidden => Some(403),
            AdapterError::NotFound => Some(404),
            AdapterError::Conflict => Some(409),
            AdapterError::Server { status } | AdapterError::Status { status, .. } => Some(*status),
            AdapterError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
