//! The behavior contract every state implements.

use super::state::State;

/// Behavior bound to a single state.
///
/// The machine owns the context `C` and hands it to every hook, so all
/// behaviors of one machine share it. Events `E` are moved into
/// [`execute`](StateAction::execute) on each
/// [`process_event`](crate::engine::StateMachine::process_event) call.
///
/// `execute` returns the identifier the machine should move to. Returning
/// the current state's own identifier keeps the machine where it is without
/// running any hooks; any other identifier must be in the state's declared
/// transition set or the event is rejected.
///
/// Behaviors are stored as `Send` trait objects so a built machine can be
/// handed to another thread. Shared state belongs in the context `C`, which
/// carries no such bound.
///
/// # Example
///
/// ```rust
/// use switchyard::core::StateAction;
///
/// struct Counter;
///
/// impl StateAction<u8, u32, bool> for Counter {
///     fn on_enter(&mut self, hits: &mut u32) {
///         *hits = 0;
///     }
///
///     fn on_exit(&mut self, _hits: &mut u32) {}
///
///     fn execute(&mut self, hits: &mut u32, done: bool) -> u8 {
///         *hits += 1;
///         if done { 1 } else { 0 }
///     }
/// }
/// ```
pub trait StateAction<S: State, C, E> {
    /// Called once each time the state is entered.
    fn on_enter(&mut self, ctx: &mut C);

    /// Called once each time the state is left.
    fn on_exit(&mut self, ctx: &mut C);

    /// Handle an event while this state is current and pick the next state.
    fn execute(&mut self, ctx: &mut C, event: E) -> S;
}
