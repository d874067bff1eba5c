use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, IsuumoError>;

#[derive(Debug, Error)]
pub enum IsuumoError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("out of range: {0}")]
    OutOfRange(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    pub operation: String,
    pub trace_id: String,
}

impl IsuumoError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::OutOfRange(_) => "OUT_OF_RANGE",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::Io(_) => "IO_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::Sqlite(_) => "SQLITE_ERROR",
            Self::Csv(_) => "CSV_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// True for errors caused by the caller's input rather than by the service.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::BadRequest(_)
                | Self::InvalidArgument(_)
                | Self::OutOfRange(_)
                | Self::Validation(_)
        )
    }

    pub(crate) fn lock_poisoned(resource: &str) -> Self {
        Self::Internal(format!("{resource} lock poisoned"))
    }

    /// Builds the client-facing payload. Server-side failures are reported
    /// with a generic message so storage details never leave the process.
    pub fn to_payload(&self, operation: impl Into<String>) -> ErrorPayload {
        let message = match self {
            Self::Io(_) | Self::Json(_) | Self::Sqlite(_) | Self::Csv(_) | Self::Internal(_) => {
                "internal error".to_string()
            }
            _ => self.to_string(),
        };
        ErrorPayload {
            code: self.code().to_string(),
            message,
            operation: operation.into(),
            trace_id: Uuid::new_v4().to_string(),
        }
    }
}
