//! Execution engine.
//!
//! Drives a built machine: hands events to the current state's behavior,
//! checks the state it picks against the declared transition set, and runs
//! the exit and entry hooks in a fixed order (exit, move, enter).

mod error;
mod machine;

pub use error::TransitionError;
pub use machine::{Lifecycle, StateMachine};
