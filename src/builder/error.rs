//! Build errors for the state machine builder.

use thiserror::Error;

/// A single problem found while validating a builder before `build`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConstructionViolation {
    #[error("No states registered. Call .register_state(..) before .build()")]
    NoStates,

    #[error("Default state not specified. Call .default_state(state) before .build()")]
    MissingDefaultState,

    #[error("Default state '{state}' is not registered")]
    UnregisteredDefaultState { state: String },

    #[error("State '{from}' declares a transition to unregistered state '{to}'")]
    UnregisteredTarget { from: String, to: String },
}

/// Errors that can occur when building state machines.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("State '{state}' is already registered")]
    DuplicateState { state: String },

    #[error("State machine is not properly configured: {}", join(.violations))]
    Construction {
        violations: Vec<ConstructionViolation>,
    },
}

impl BuildError {
    /// Violations behind a construction failure; empty for other errors.
    pub fn violations(&self) -> &[ConstructionViolation] {
        match self {
            BuildError::Construction { violations } => violations,
            BuildError::DuplicateState { .. } => &[],
        }
    }
}

fn join(violations: &[ConstructionViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_error_lists_every_violation() {
        let err = BuildError::Construction {
            violations: vec![
                ConstructionViolation::NoStates,
                ConstructionViolation::MissingDefaultState,
            ],
        };

        let message = err.to_string();
        assert!(message.contains("No states registered"));
        assert!(message.contains("Default state not specified"));
        assert_eq!(err.violations().len(), 2);
    }

    #[test]
    fn duplicate_state_names_the_state() {
        let err = BuildError::DuplicateState {
            state: "Wait".to_string(),
        };

        assert_eq!(err.to_string(), "State 'Wait' is already registered");
        assert!(err.violations().is_empty());
    }
}
