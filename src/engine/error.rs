//! Run-time transition errors.

use crate::core::State;
use thiserror::Error;

/// Errors returned while a machine is running.
///
/// These are recoverable: the machine's state is unchanged when one is
/// returned, and the caller decides what to do next.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransitionError<S: State> {
    #[error("No valid transition from '{}' to '{}'", .from.name(), .to.name())]
    InvalidTransition { from: S, to: S },
}

impl<S: State> TransitionError<S> {
    /// The state the machine was in when the move was attempted.
    pub fn from_state(&self) -> &S {
        match self {
            TransitionError::InvalidTransition { from, .. } => from,
        }
    }

    /// The state the move was aimed at.
    pub fn to_state(&self) -> &S {
        match self {
            TransitionError::InvalidTransition { to, .. } => to,
        }
    }
}
