//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    UnknownQuestion,

    // Not found errors
    WizardNotFound,

    // State errors
    InvalidStateTransition,
    WizardNotComplete,
    ConcurrentModification,

    // Capacity errors
    CapacityExceeded,

    // Infrastructure errors
    StorageError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::UnknownQuestion => "UNKNOWN_QUESTION",
            ErrorCode::WizardNotFound => "WIZARD_NOT_FOUND",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::WizardNotComplete => "WIZARD_NOT_COMPLETE",
            ErrorCode::ConcurrentModification => "CONCURRENT_MODIFICATION",
            ErrorCode::CapacityExceeded => "CAPACITY_EXCEEDED",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("wizard_id", "not a UUID");
        assert_eq!(
            format!("{}", err),
            "Field 'wizard_id' has invalid format: not a UUID"
        );
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::WizardNotFound, "Wizard not found");
        assert_eq!(format!("{}", err), "[WIZARD_NOT_FOUND] Wizard not found");
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::new(ErrorCode::ValidationFailed, "Validation failed")
            .with_detail("field", "answers")
            .with_detail("reason", "unknown key");

        assert_eq!(err.details.get("field"), Some(&"answers".to_string()));
        assert_eq!(err.details.get("reason"), Some(&"unknown key".to_string()));
    }

    #[test]
    fn validation_error_reports_field() {
        let err = ValidationError::invalid_format("format", "expected text");
        assert_eq!(err.field(), "format");
    }

    #[test]
    fn error_codes_render_screaming_snake_case() {
        assert_eq!(ErrorCode::UnknownQuestion.to_string(), "UNKNOWN_QUESTION");
        assert_eq!(ErrorCode::CapacityExceeded.to_string(), "CAPACITY_EXCEEDED");
        assert_eq!(
            ErrorCode::ConcurrentModification.to_string(),
            "CONCURRENT_MODIFICATION"
        );
    }
}
