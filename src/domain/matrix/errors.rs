//! Wizard-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError, WizardId};

/// Wizard-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    /// Wizard was not found (never started, deleted, or expired).
    NotFound(WizardId),
    /// The requested move is not allowed from the current state.
    InvalidTransition(String),
    /// A report was requested before all questions were answered.
    NotComplete,
    /// An answer referenced a question id outside the catalog.
    UnknownQuestion(String),
    /// Another request changed the wizard since it was loaded.
    Conflict(String),
    /// Too many wizards are being held.
    CapacityExceeded { limit: usize },
    /// Storage failure.
    Infrastructure(String),
}

impl WizardError {
    pub fn not_found(id: WizardId) -> Self {
        WizardError::NotFound(id)
    }
    pub fn invalid_transition(message: impl Into<String>) -> Self {
        WizardError::InvalidTransition(message.into())
    }
    pub fn unknown_question(message: impl Into<String>) -> Self {
        WizardError::UnknownQuestion(message.into())
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        WizardError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            WizardError::NotFound(_) => ErrorCode::WizardNotFound,
            WizardError::InvalidTransition(_) => ErrorCode::InvalidStateTransition,
            WizardError::NotComplete => ErrorCode::WizardNotComplete,
            WizardError::UnknownQuestion(_) => ErrorCode::UnknownQuestion,
            WizardError::Conflict(_) => ErrorCode::ConcurrentModification,
            WizardError::CapacityExceeded { .. } => ErrorCode::CapacityExceeded,
            WizardError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            WizardError::NotFound(id) => format!("Wizard not found: {}", id),
            WizardError::InvalidTransition(msg) => format!("Invalid transition: {}", msg),
            WizardError::NotComplete => {
                "All questions must be answered before a report is available".to_string()
            }
            WizardError::UnknownQuestion(msg) => msg.clone(),
            WizardError::Conflict(msg) => format!("{}; reload and retry", msg),
            WizardError::CapacityExceeded { limit } => {
                format!("Wizard capacity of {} reached, try again later", limit)
            }
            WizardError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for WizardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for WizardError {}

impl From<ValidationError> for WizardError {
    fn from(err: ValidationError) -> Self {
        match err.field() {
            "state_transition" => WizardError::InvalidTransition(err.to_string()),
            "question_id" => WizardError::UnknownQuestion(err.to_string()),
            _ => WizardError::Infrastructure(err.to_string()),
        }
    }
}

impl From<DomainError> for WizardError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::InvalidStateTransition => WizardError::InvalidTransition(err.message),
            ErrorCode::WizardNotComplete => WizardError::NotComplete,
            ErrorCode::UnknownQuestion => WizardError::UnknownQuestion(err.message),
            ErrorCode::ConcurrentModification => WizardError::Conflict(err.message),
            ErrorCode::CapacityExceeded => WizardError::CapacityExceeded {
                limit: err
                    .details
                    .get("limit")
                    .and_then(|l| l.parse().ok())
                    .unwrap_or_default(),
            },
            _ => WizardError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_variants() {
        assert_eq!(WizardError::not_found(WizardId::new()).code(), ErrorCode::WizardNotFound);
        assert_eq!(WizardError::NotComplete.code(), ErrorCode::WizardNotComplete);
        assert_eq!(
            WizardError::CapacityExceeded { limit: 3 }.code(),
            ErrorCode::CapacityExceeded
        );
    }

    #[test]
    fn state_transition_validation_maps_to_invalid_transition() {
        let err: WizardError = ValidationError::invalid_format("state_transition", "nope").into();
        assert!(matches!(err, WizardError::InvalidTransition(_)));
    }

    #[test]
    fn question_validation_maps_to_unknown_question() {
        let err: WizardError = ValidationError::invalid_format("question_id", "unknown").into();
        assert_eq!(err.code(), ErrorCode::UnknownQuestion);
    }

    #[test]
    fn storage_domain_error_maps_to_infrastructure() {
        let err: WizardError = DomainError::new(ErrorCode::StorageError, "lock poisoned").into();
        assert!(matches!(err, WizardError::Infrastructure(_)));
    }

    #[test]
    fn concurrent_modification_maps_to_conflict() {
        let err: WizardError =
            DomainError::new(ErrorCode::ConcurrentModification, "changed").into();
        assert_eq!(err, WizardError::Conflict("changed".to_string()));
        assert_eq!(err.code(), ErrorCode::ConcurrentModification);
    }

    #[test]
    fn capacity_domain_error_keeps_limit() {
        let err: WizardError = DomainError::new(ErrorCode::CapacityExceeded, "full")
            .with_detail("limit", "25")
            .into();
        assert_eq!(err, WizardError::CapacityExceeded { limit: 25 });
    }

    #[test]
    fn display_uses_message() {
        let err = WizardError::CapacityExceeded { limit: 10 };
        assert_eq!(err.to_string(), "Wizard capacity of 10 reached, try again later");
    }
}
