//! State machine that executes behaviors and applies declared transitions.

use crate::core::{
    State, StateHistory, StateRegistry, StateTransition, TransitionKind, TransitionSet,
};
use crate::engine::error::TransitionError;
use chrono::Utc;

/// Where a machine is in its own lifecycle.
///
/// Informational only: every operation is allowed in every phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// Built, `start` not called yet.
    Created,
    /// `start` called.
    Active,
    /// `stop` called.
    Stopped,
}

/// An executable state machine, produced by
/// [`StateMachineBuilder::build`](crate::builder::StateMachineBuilder::build).
///
/// The machine owns the shared context `C` and the behavior of every state.
/// All operations run to completion on the caller's thread; sharing a
/// machine between threads needs external synchronization.
///
/// Calling [`process_event`](StateMachine::process_event) before
/// [`start`](StateMachine::start) runs the default state's `execute`
/// without that state ever having seen `on_enter`.
pub struct StateMachine<S: State, C = (), E = ()> {
    name: String,
    current: usize,
    default: usize,
    registry: StateRegistry<S, C, E>,
    context: C,
    lifecycle: Lifecycle,
    history: Option<StateHistory<S>>,
}

impl<S: State, C, E> StateMachine<S, C, E> {
    /// `default` must be a position in `registry`.
    pub(crate) fn new(
        name: String,
        default: usize,
        registry: StateRegistry<S, C, E>,
        context: C,
        history: Option<StateHistory<S>>,
    ) -> Self {
        Self {
            name,
            current: default,
            default,
            registry,
            context,
            lifecycle: Lifecycle::Created,
            history,
        }
    }

    /// Enter the current state (the default state on a fresh machine).
    ///
    /// No transition happens. Calling it again re-runs `on_enter`.
    pub fn start(&mut self) {
        tracing::debug!(
            machine = %self.name,
            state = %self.state().name(),
            "starting state machine"
        );
        self.registry
            .entry_mut(self.current)
            .action
            .on_enter(&mut self.context);
        self.lifecycle = Lifecycle::Active;
    }

    /// Exit the current state. The current state is left as is.
    pub fn stop(&mut self) {
        tracing::debug!(
            machine = %self.name,
            state = %self.state().name(),
            "stopping state machine"
        );
        self.registry
            .entry_mut(self.current)
            .action
            .on_exit(&mut self.context);
        self.lifecycle = Lifecycle::Stopped;
    }

    /// Get current state (pure)
    pub fn state(&self) -> &S {
        self.registry.entry(self.current).id()
    }

    /// Get the state `start` enters and `reset` returns to.
    pub fn default_state(&self) -> &S {
        self.registry.entry(self.default).id()
    }

    /// Get the machine name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the lifecycle phase.
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Hand an event to the current state's behavior and apply the state it
    /// picks.
    ///
    /// - Picking the current state again is a no-op: no hooks run.
    /// - Picking a state outside the current transition set returns
    ///   [`TransitionError::InvalidTransition`]; no hooks run and the state
    ///   is unchanged.
    /// - Otherwise the current state's `on_exit` runs, the machine moves,
    ///   then the new state's `on_enter` runs.
    pub fn process_event(&mut self, event: E) -> Result<(), TransitionError<S>> {
        if self.lifecycle != Lifecycle::Active {
            tracing::warn!(
                machine = %self.name,
                lifecycle = ?self.lifecycle,
                "processing event on a machine that is not active"
            );
        }

        let next = self
            .registry
            .entry_mut(self.current)
            .action
            .execute(&mut self.context, event);
        self.transition_to(next)
    }

    /// Move to `next` as if the current behavior had picked it, without
    /// running `execute`.
    ///
    /// Same rules as [`process_event`](StateMachine::process_event).
    pub fn transition_to(&mut self, next: S) -> Result<(), TransitionError<S>> {
        let entry = self.registry.entry(self.current);
        if next == entry.id {
            tracing::trace!(
                machine = %self.name,
                state = %next.name(),
                "staying in current state"
            );
            return Ok(());
        }

        let target = match self.registry.position(&next) {
            Some(idx) if entry.transitions.contains(&next) => idx,
            _ => {
                let err = TransitionError::InvalidTransition {
                    from: entry.id.clone(),
                    to: next,
                };
                tracing::debug!(machine = %self.name, error = %err, "transition rejected");
                return Err(err);
            }
        };

        self.apply(target, TransitionKind::Event);
        Ok(())
    }

    /// Return to the default state unconditionally.
    ///
    /// Runs `on_exit` on the current state and `on_enter` on the default
    /// state, even when the machine is already in the default state. The
    /// transition set is not consulted.
    pub fn reset(&mut self) {
        self.apply(self.default, TransitionKind::Reset);
    }

    /// Check whether [`transition_to`](StateMachine::transition_to) would
    /// accept `to` from the current state.
    pub fn can_transition(&self, to: &S) -> bool {
        let entry = self.registry.entry(self.current);
        *to == entry.id || entry.transitions.contains(to)
    }

    /// Check if `id` is one of the machine's states.
    pub fn is_registered(&self, id: &S) -> bool {
        self.registry.contains(id)
    }

    /// Registered states and their transition sets, in registration order.
    pub fn states(&self) -> impl Iterator<Item = (&S, &TransitionSet<S>)> {
        self.registry.iter().map(|e| (e.id(), e.transitions()))
    }

    /// Get the transition history, if it was enabled on the builder.
    pub fn history(&self) -> Option<&StateHistory<S>> {
        self.history.as_ref()
    }

    /// Get the shared context.
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Get mutable access to the shared context.
    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    /// Consume the machine and return its context.
    pub fn into_context(self) -> C {
        self.context
    }

    /// Exit the current entry, move to `target`, enter it.
    fn apply(&mut self, target: usize, kind: TransitionKind) {
        let from = self.current;

        self.registry
            .entry_mut(from)
            .action
            .on_exit(&mut self.context);
        self.current = target;
        self.registry
            .entry_mut(target)
            .action
            .on_enter(&mut self.context);

        let from_id = self.registry.entry(from).id();
        let to_id = self.registry.entry(target).id();
        tracing::debug!(
            machine = %self.name,
            from = %from_id.name(),
            to = %to_id.name(),
            kind = ?kind,
            "transition applied"
        );

        if let Some(history) = self.history.as_mut() {
            history.record(StateTransition {
                from: from_id.clone(),
                to: to_id.clone(),
                timestamp: Utc::now(),
                kind,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::StateMachineBuilder;
    use crate::core::StateAction;

    /// Logs hooks into the context and moves to whatever the event names.
    struct Follow(&'static str);

    impl StateAction<&'static str, Vec<String>, &'static str> for Follow {
        fn on_enter(&mut self, log: &mut Vec<String>) {
            log.push(format!("enter:{}", self.0));
        }

        fn on_exit(&mut self, log: &mut Vec<String>) {
            log.push(format!("exit:{}", self.0));
        }

        fn execute(&mut self, log: &mut Vec<String>, event: &'static str) -> &'static str {
            log.push(format!("execute:{}", self.0));
            event
        }
    }

    type Machine = StateMachine<&'static str, Vec<String>, &'static str>;

    fn two_state_machine() -> Machine {
        StateMachineBuilder::<&'static str, Vec<String>, &'static str>::new()
            .name("ab")
            .default_state("A")
            .record_history(None)
            .register_state("A", Follow("A"), ["B"])
            .unwrap()
            .register_state("B", Follow("B"), ["A"])
            .unwrap()
            .build()
            .unwrap()
    }

    fn drain(machine: &mut Machine) -> Vec<String> {
        std::mem::take(machine.context_mut())
    }

    #[test]
    fn start_enters_default_state() {
        let mut machine = two_state_machine();
        assert_eq!(machine.lifecycle(), Lifecycle::Created);

        machine.start();

        assert_eq!(machine.state(), &"A");
        assert_eq!(machine.lifecycle(), Lifecycle::Active);
        assert_eq!(drain(&mut machine), vec!["enter:A"]);
    }

    #[test]
    fn start_is_repeatable() {
        let mut machine = two_state_machine();

        machine.start();
        machine.start();

        assert_eq!(machine.state(), &"A");
        assert_eq!(drain(&mut machine), vec!["enter:A", "enter:A"]);
    }

    #[test]
    fn legal_transition_exits_then_enters() {
        let mut machine = two_state_machine();
        machine.start();
        drain(&mut machine);

        assert_eq!(machine.process_event("B"), Ok(()));

        assert_eq!(machine.state(), &"B");
        assert_eq!(drain(&mut machine), vec!["execute:A", "exit:A", "enter:B"]);
    }

    #[test]
    fn self_transition_runs_no_hooks() {
        let mut machine = two_state_machine();
        machine.start();
        drain(&mut machine);

        assert_eq!(machine.process_event("A"), Ok(()));

        assert_eq!(machine.state(), &"A");
        assert_eq!(drain(&mut machine), vec!["execute:A"]);
        assert!(machine.history().unwrap().is_empty());
    }

    #[test]
    fn illegal_transition_is_rejected_without_hooks() {
        let mut machine = two_state_machine();
        machine.start();
        machine.process_event("B").unwrap();
        drain(&mut machine);

        let result = machine.process_event("C");

        assert_eq!(
            result,
            Err(TransitionError::InvalidTransition { from: "B", to: "C" })
        );
        assert_eq!(machine.state(), &"B");
        assert_eq!(drain(&mut machine), vec!["execute:B"]);
    }

    #[test]
    fn reset_returns_to_default() {
        let mut machine = two_state_machine();
        machine.start();
        machine.process_event("B").unwrap();
        drain(&mut machine);

        machine.reset();

        assert_eq!(machine.state(), &"A");
        assert_eq!(drain(&mut machine), vec!["exit:B", "enter:A"]);
    }

    #[test]
    fn reset_from_default_still_runs_hooks() {
        let mut machine = two_state_machine();
        machine.start();
        drain(&mut machine);

        machine.reset();

        assert_eq!(machine.state(), &"A");
        assert_eq!(drain(&mut machine), vec!["exit:A", "enter:A"]);
    }

    #[test]
    fn reset_ignores_transition_sets() {
        let mut machine = StateMachineBuilder::<&'static str, Vec<String>, &'static str>::new()
            .default_state("A")
            .register_state("A", Follow("A"), ["B"])
            .unwrap()
            .register_state("B", Follow("B"), [])
            .unwrap()
            .build()
            .unwrap();
        machine.start();
        machine.process_event("B").unwrap();
        assert!(!machine.can_transition(&"A"));

        machine.reset();

        assert_eq!(machine.state(), &"A");
    }

    #[test]
    fn stop_exits_and_keeps_state() {
        let mut machine = two_state_machine();
        machine.start();
        machine.process_event("B").unwrap();
        drain(&mut machine);

        machine.stop();

        assert_eq!(machine.state(), &"B");
        assert_eq!(machine.lifecycle(), Lifecycle::Stopped);
        assert_eq!(drain(&mut machine), vec!["exit:B"]);
    }

    #[test]
    fn event_before_start_skips_on_enter() {
        let mut machine = two_state_machine();

        machine.process_event("B").unwrap();

        assert_eq!(machine.state(), &"B");
        assert_eq!(drain(&mut machine), vec!["execute:A", "exit:A", "enter:B"]);
    }

    #[test]
    fn transition_to_follows_declared_sets() {
        let mut machine = two_state_machine();
        machine.start();
        drain(&mut machine);

        assert!(machine.can_transition(&"A"));
        assert!(machine.can_transition(&"B"));
        assert!(!machine.can_transition(&"C"));

        assert_eq!(machine.transition_to("B"), Ok(()));
        assert_eq!(drain(&mut machine), vec!["exit:A", "enter:B"]);
        assert!(machine.transition_to("C").is_err());
        assert_eq!(machine.state(), &"B");
    }

    #[test]
    fn history_records_applied_transitions_only() {
        let mut machine = two_state_machine();
        machine.start();
        machine.process_event("B").unwrap();
        machine.process_event("B").unwrap();
        let _ = machine.process_event("C");
        machine.reset();

        let history = machine.history().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history.get_path(), vec![&"A", &"B", &"A"]);
        assert_eq!(history.transitions()[0].kind, TransitionKind::Event);
        assert_eq!(history.transitions()[1].kind, TransitionKind::Reset);
    }

    #[test]
    fn accessors_describe_the_machine() {
        let machine = two_state_machine();

        assert_eq!(machine.name(), "ab");
        assert_eq!(machine.default_state(), &"A");
        assert!(machine.is_registered(&"B"));
        assert!(!machine.is_registered(&"C"));

        let states: Vec<(&str, usize)> = machine.states().map(|(id, t)| (*id, t.len())).collect();
        assert_eq!(states, vec![("A", 1), ("B", 1)]);
        assert!(machine.into_context().is_empty());
    }

    #[test]
    fn behaviors_keep_their_own_fields() {
        struct Countdown {
            left: u8,
        }

        impl StateAction<u8, (), ()> for Countdown {
            fn on_enter(&mut self, _ctx: &mut ()) {
                self.left = 2;
            }

            fn on_exit(&mut self, _ctx: &mut ()) {}

            fn execute(&mut self, _ctx: &mut (), _event: ()) -> u8 {
                self.left -= 1;
                if self.left == 0 {
                    1
                } else {
                    0
                }
            }
        }

        struct Done;

        impl StateAction<u8, (), ()> for Done {
            fn on_enter(&mut self, _ctx: &mut ()) {}
            fn on_exit(&mut self, _ctx: &mut ()) {}
            fn execute(&mut self, _ctx: &mut (), _event: ()) -> u8 {
                1
            }
        }

        let mut machine = StateMachineBuilder::<u8>::new()
            .default_state(0)
            .register_state(0, Countdown { left: 0 }, [1])
            .unwrap()
            .register_state(1, Done, [])
            .unwrap()
            .build()
            .unwrap();

        machine.start();
        machine.process_event(()).unwrap();
        assert_eq!(machine.state(), &0);
        machine.process_event(()).unwrap();
        assert_eq!(machine.state(), &1);
    }

    #[test]
    fn machine_moves_to_worker_thread() {
        let mut machine = two_state_machine();
        machine.start();

        let worker = std::thread::spawn(move || {
            machine.process_event("B").unwrap();
            machine
        });
        let mut machine = worker.join().unwrap();

        assert_eq!(machine.state(), &"B");
        assert_eq!(drain(&mut machine), vec!["enter:A", "execute:A", "exit:A", "enter:B"]);
    }

    #[test]
    fn machine_is_shared_behind_mutex() {
        use std::sync::{Arc, Mutex};

        let machine = Arc::new(Mutex::new(two_state_machine()));
        machine.lock().unwrap().start();

        let shared = Arc::clone(&machine);
        let outcome = std::thread::spawn(move || {
            let mut machine = shared.lock().unwrap();
            machine.process_event("B")
        })
        .join()
        .unwrap();

        assert_eq!(outcome, Ok(()));

        assert_eq!(machine.lock().unwrap().state(), &"B");
    }
}
