//! Statistics-specific error types.
//!
//! # Caller Mapping
//!
//! | Error | Page behavior |
//! |-------|---------------|
//! | StorageUnavailable | Notice in place of statistics |
//! | InvalidRange | Filter form error |
//! | ValidationFailed | Filter form error |

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors returned by statistics queries.
///
/// Per-record problems never surface here; they are logged and the record
/// is excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatisticsError {
    /// The record store (or snapshot store) could not be queried.
    StorageUnavailable(String),

    /// The requested date range is inverted or unparsable.
    InvalidRange(String),

    /// A query parameter failed validation.
    ValidationFailed { field: String, message: String },
}

impl StatisticsError {
    pub fn storage_unavailable(message: impl Into<String>) -> Self {
        StatisticsError::StorageUnavailable(message.into())
    }

    pub fn invalid_range(message: impl Into<String>) -> Self {
        StatisticsError::InvalidRange(message.into())
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        StatisticsError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            StatisticsError::StorageUnavailable(_) => ErrorCode::DatabaseError,
            StatisticsError::InvalidRange(_) => ErrorCode::InvalidDateRange,
            StatisticsError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
        }
    }

    /// Returns a descriptive error message.
    pub fn message(&self) -> String {
        match self {
            StatisticsError::StorageUnavailable(msg) => {
                format!("Membership records unavailable: {}", msg)
            }
            StatisticsError::InvalidRange(msg) => format!("Invalid date range: {}", msg),
            StatisticsError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
        }
    }

    /// Text a page shows in place of the statistics block.
    pub fn user_notice(&self) -> &'static str {
        match self {
            StatisticsError::StorageUnavailable(_) => {
                "Statistics are temporarily unavailable. Please try again later."
            }
            StatisticsError::InvalidRange(_) | StatisticsError::ValidationFailed { .. } => {
                "Please check the selected filters."
            }
        }
    }

    /// Returns true if repeating the request later may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, StatisticsError::StorageUnavailable(_))
    }
}

impl std::fmt::Display for StatisticsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for StatisticsError {}

impl From<DomainError> for StatisticsError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::InvalidDateRange => StatisticsError::InvalidRange(err.message),
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
                StatisticsError::ValidationFailed {
                    field: err
                        .details
                        .get("field")
                        .cloned()
                        .unwrap_or_else(|| "unknown".to_string()),
                    message: err.message,
                }
            }
            _ => StatisticsError::StorageUnavailable(err.to_string()),
        }
    }
}

impl From<ValidationError> for StatisticsError {
    fn from(err: ValidationError) -> Self {
        match &err {
            ValidationError::InvertedRange { .. } => StatisticsError::InvalidRange(err.to_string()),
            ValidationError::EmptyField { field } | ValidationError::InvalidFormat { field, .. } => {
                StatisticsError::ValidationFailed {
                    field: field.clone(),
                    message: err.to_string(),
                }
            }
        }
    }
}

impl From<StatisticsError> for DomainError {
    fn from(err: StatisticsError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}
