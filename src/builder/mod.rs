//! Builder API for state machine construction.
//!
//! A machine can only be obtained through [`StateMachineBuilder::build`],
//! which refuses configurations the engine could not run safely.

pub mod error;
pub mod machine;
pub mod macros;
mod validation;

pub use error::{BuildError, ConstructionViolation};
pub use machine::{StateMachineBuilder, DEFAULT_MACHINE_NAME};
