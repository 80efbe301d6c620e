//! Switchyard: an embeddable finite state machine engine
//!
//! A machine is a set of states, each bound to a behavior, plus the set of
//! states every state may move to. The engine only ever takes declared
//! transitions and tells behaviors when they are entered and exited.
//!
//! # Core Concepts
//!
//! - **State**: Identifiers via the `State` trait (or the `state_enum!` macro)
//! - **StateAction**: `on_enter` / `on_exit` / `execute` behavior of a state
//! - **Builder**: Validates a configuration before a machine can run
//! - **StateMachine**: `start`, `process_event`, `reset`, `stop`
//!
//! # Example
//!
//! ```rust
//! use switchyard::{state_enum, StateAction, StateMachineBuilder, TransitionError};
//!
//! state_enum! {
//!     enum Door {
//!         Closed,
//!         Open,
//!         Locked,
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Stats {
//!     openings: u32,
//! }
//!
//! struct Closed;
//! struct Open;
//! struct Locked;
//!
//! impl StateAction<Door, Stats, &'static str> for Closed {
//!     fn on_enter(&mut self, _ctx: &mut Stats) {}
//!     fn on_exit(&mut self, _ctx: &mut Stats) {}
//!     fn execute(&mut self, _ctx: &mut Stats, event: &'static str) -> Door {
//!         match event {
//!             "push" => Door::Open,
//!             "lock" => Door::Locked,
//!             _ => Door::Closed,
//!         }
//!     }
//! }
//!
//! impl StateAction<Door, Stats, &'static str> for Open {
//!     fn on_enter(&mut self, ctx: &mut Stats) {
//!         ctx.openings += 1;
//!     }
//!     fn on_exit(&mut self, _ctx: &mut Stats) {}
//!     fn execute(&mut self, _ctx: &mut Stats, event: &'static str) -> Door {
//!         match event {
//!             "pull" => Door::Closed,
//!             "lock" => Door::Locked,
//!             _ => Door::Open,
//!         }
//!     }
//! }
//!
//! impl StateAction<Door, Stats, &'static str> for Locked {
//!     fn on_enter(&mut self, _ctx: &mut Stats) {}
//!     fn on_exit(&mut self, _ctx: &mut Stats) {}
//!     fn execute(&mut self, _ctx: &mut Stats, event: &'static str) -> Door {
//!         if event == "unlock" { Door::Closed } else { Door::Locked }
//!     }
//! }
//!
//! let mut door = StateMachineBuilder::<Door, Stats, &'static str>::new()
//!     .default_state(Door::Closed)
//!     .register_state(Door::Closed, Closed, [Door::Open, Door::Locked])
//!     .unwrap()
//!     .register_state(Door::Open, Open, [Door::Closed])
//!     .unwrap()
//!     .register_state(Door::Locked, Locked, [Door::Closed])
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! door.start();
//! door.process_event("push").unwrap();
//! assert_eq!(door.state(), &Door::Open);
//!
//! // an open door cannot be locked
//! let err = door.process_event("lock").unwrap_err();
//! assert_eq!(
//!     err,
//!     TransitionError::InvalidTransition { from: Door::Open, to: Door::Locked }
//! );
//! assert_eq!(door.state(), &Door::Open);
//!
//! door.reset();
//! assert_eq!(door.state(), &Door::Closed);
//! assert_eq!(door.context().openings, 1);
//! ```

pub mod builder;
pub mod core;
pub mod diagram;
pub mod engine;

// Re-export commonly used types
pub use builder::{BuildError, ConstructionViolation, StateMachineBuilder};
pub use core::{
    State, StateAction, StateHistory, StateRegistry, StateTransition, TransitionKind,
    TransitionSet,
};
pub use diagram::DiagramFormat;
pub use engine::{Lifecycle, StateMachine, TransitionError};
