//! State machine trait for lifecycle states.
//!
//! Gives every state enum the same way of validating a move before it
//! happens, so callers never mutate state into a position the flow forbids.

use super::ValidationError;

/// Trait for state enums that represent state machines.
///
/// Implementors define valid transitions and get validated transition
/// methods for free.
///
/// # Example
///
/// ```ignore
/// let next = WizardState::Question(6).transition_to(WizardState::Results)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Gate {
        Closed,
        Open,
        Locked,
    }

    impl StateMachine for Gate {
        fn can_transition_to(&self, target: &Self) -> bool {
            use Gate::*;
            matches!((self, target), (Closed, Open) | (Open, Closed) | (Closed, Locked))
        }

        fn valid_transitions(&self) -> Vec<Self> {
            use Gate::*;
            match self {
                Closed => vec![Open, Locked],
                Open => vec![Closed],
                Locked => vec![],
            }
        }
    }

    #[test]
    fn transition_to_succeeds_for_valid_transition() {
        assert_eq!(Gate::Closed.transition_to(Gate::Open), Ok(Gate::Open));
    }

    #[test]
    fn transition_to_fails_for_invalid_transition() {
        let err = Gate::Open.transition_to(Gate::Locked).unwrap_err();
        assert_eq!(err.field(), "state_transition");
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        for state in [Gate::Closed, Gate::Open, Gate::Locked] {
            for target in state.valid_transitions() {
                assert!(state.can_transition_to(&target), "{:?} -> {:?}", state, target);
            }
        }
    }
}
