//! Builder for constructing state machines.

use crate::builder::error::{BuildError, ConstructionViolation};
use crate::builder::validation::validate;
use crate::core::{State, StateAction, StateHistory, StateRegistry};
use crate::engine::StateMachine;

/// Name given to machines built without calling [`StateMachineBuilder::name`].
pub const DEFAULT_MACHINE_NAME: &str = "Unnamed";

/// Builder for constructing state machines with a fluent API.
///
/// Registration order is free: the default state may be chosen before the
/// state itself is registered. Everything is checked at
/// [`build`](StateMachineBuilder::build).
///
/// # Example
///
/// ```rust
/// use switchyard::{BuildError, StateAction, StateMachineBuilder};
///
/// struct Toggle(&'static str);
///
/// impl StateAction<&'static str, (), ()> for Toggle {
///     fn on_enter(&mut self, _ctx: &mut ()) {}
///     fn on_exit(&mut self, _ctx: &mut ()) {}
///     fn execute(&mut self, _ctx: &mut (), _event: ()) -> &'static str {
///         self.0
///     }
/// }
///
/// # fn main() -> Result<(), BuildError> {
/// let mut machine = StateMachineBuilder::<&'static str>::new()
///     .name("switch")
///     .default_state("off")
///     .register_state("off", Toggle("on"), ["on"])?
///     .register_state("on", Toggle("off"), ["off"])?
///     .build()?;
///
/// machine.start();
/// machine.process_event(()).unwrap();
/// assert_eq!(machine.state(), &"on");
/// # Ok(())
/// # }
/// ```
pub struct StateMachineBuilder<S: State, C = (), E = ()> {
    name: String,
    default: Option<S>,
    registry: StateRegistry<S, C, E>,
    context: C,
    history: Option<StateHistory<S>>,
}

impl<S: State, C: Default, E> StateMachineBuilder<S, C, E> {
    /// Create a new builder whose context starts as `C::default()`.
    pub fn new() -> Self {
        Self::with_context(C::default())
    }
}

impl<S: State, C, E> StateMachineBuilder<S, C, E> {
    /// Create a new builder around an explicit shared context.
    pub fn with_context(context: C) -> Self {
        Self {
            name: DEFAULT_MACHINE_NAME.to_string(),
            default: None,
            registry: StateRegistry::new(),
            context,
            history: None,
        }
    }

    /// Name the machine for logs and diagrams.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Register a state with its behavior and legal successors.
    ///
    /// Fails with [`BuildError::DuplicateState`] if `id` was already
    /// registered on this builder.
    pub fn register_state<A, T>(
        mut self,
        id: S,
        action: A,
        transitions: T,
    ) -> Result<Self, BuildError>
    where
        A: StateAction<S, C, E> + Send + 'static,
        T: IntoIterator<Item = S>,
    {
        self.registry.register(id, action, transitions)?;
        Ok(self)
    }

    /// Set the state the machine starts in and returns to on reset (required).
    pub fn default_state(mut self, id: S) -> Self {
        self.default = Some(id);
        self
    }

    /// Replace the context shared by all behaviors.
    pub fn set_context(mut self, context: C) -> Self {
        self.context = context;
        self
    }

    /// Keep an audit trail of applied transitions.
    ///
    /// With `Some(n)` only the latest `n` records are kept; `None` keeps
    /// everything.
    pub fn record_history(mut self, limit: Option<usize>) -> Self {
        self.history = Some(match limit {
            Some(n) => StateHistory::with_limit(n),
            None => StateHistory::new(),
        });
        self
    }

    /// Build the state machine.
    ///
    /// Returns [`BuildError::Construction`] listing every violation if no
    /// state was registered, no default state was set, the default state is
    /// not registered, or a transition set names an unregistered state.
    pub fn build(self) -> Result<StateMachine<S, C, E>, BuildError> {
        validate(&self.registry, self.default.as_ref())
            .map_err(|violations| BuildError::Construction { violations })?;

        let default = self
            .default
            .as_ref()
            .and_then(|id| self.registry.position(id))
            .ok_or_else(|| BuildError::Construction {
                violations: vec![ConstructionViolation::MissingDefaultState],
            })?;

        tracing::debug!(
            machine = %self.name,
            states = self.registry.len(),
            default = ?self.default,
            "state machine built"
        );

        Ok(StateMachine::new(
            self.name,
            default,
            self.registry,
            self.context,
            self.history,
        ))
    }
}

impl<S: State, C: Default, E> Default for StateMachineBuilder<S, C, E> {
    fn default() -> Self {
        Self::new()
    }
}
