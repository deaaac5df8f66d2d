//! Shared error type across metricsprobe crates.

use thiserror::Error;

/// Stable error codes for assertions in test harnesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Numeric value does not fit the instrument's storage type.
    OutOfRange,
    /// Invalid input / malformed config.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal failure (I/O and the like).
    Internal,
}

impl ErrorCode {
    /// String representation.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MetricsError>;

/// Unified error type used by core and the testing handler.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("value {value} out of range for {target}")]
    OutOfRange { value: String, target: &'static str },
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl MetricsError {
    pub fn code(&self) -> ErrorCode {
        match self {
            MetricsError::OutOfRange { .. } => ErrorCode::OutOfRange,
            MetricsError::BadRequest(_) => ErrorCode::BadRequest,
            MetricsError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            MetricsError::Internal(_) => ErrorCode::Internal,
        }
    }
}
