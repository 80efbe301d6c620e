//! Core state machine types.
//!
//! This module contains the building blocks the engine is made of:
//! - State identifiers via the `State` trait
//! - The `StateAction` behavior contract
//! - Transition sets and the state registry
//! - Optional transition history

mod action;
mod history;
mod registry;
mod state;
mod transitions;

pub use action::StateAction;
pub use history::{StateHistory, StateTransition, TransitionKind};
pub use registry::{RegistryEntry, StateRegistry};
pub use state::State;
pub use transitions::TransitionSet;
