//! Registry mapping state identifiers to their behavior and transitions.

use super::action::StateAction;
use super::state::State;
use super::transitions::TransitionSet;
use crate::builder::BuildError;
use std::collections::HashMap;

/// A registered state: its behavior and its legal successors.
pub struct RegistryEntry<S: State, C, E> {
    pub(crate) id: S,
    pub(crate) action: Box<dyn StateAction<S, C, E> + Send>,
    pub(crate) transitions: TransitionSet<S>,
}

impl<S: State, C, E> RegistryEntry<S, C, E> {
    /// Get the state identifier.
    pub fn id(&self) -> &S {
        &self.id
    }

    /// Get the declared successors.
    pub fn transitions(&self) -> &TransitionSet<S> {
        &self.transitions
    }
}

/// Registered states, kept in registration order.
///
/// Entries are addressed by position so the engine can hold on to the
/// current entry without a fallible lookup on every call.
pub struct StateRegistry<S: State, C, E> {
    positions: HashMap<S, usize>,
    entries: Vec<RegistryEntry<S, C, E>>,
}

impl<S: State, C, E> StateRegistry<S, C, E> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            positions: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Register a state.
    ///
    /// Returns [`BuildError::DuplicateState`] if `id` already has an entry;
    /// the existing entry is left untouched.
    pub fn register<A, T>(&mut self, id: S, action: A, transitions: T) -> Result<(), BuildError>
    where
        A: StateAction<S, C, E> + Send + 'static,
        T: IntoIterator<Item = S>,
    {
        if self.positions.contains_key(&id) {
            return Err(BuildError::DuplicateState {
                state: id.name().into_owned(),
            });
        }

        self.positions.insert(id.clone(), self.entries.len());
        self.entries.push(RegistryEntry {
            id,
            action: Box::new(action),
            transitions: transitions.into_iter().collect(),
        });
        Ok(())
    }

    /// Position of a registered state, if any.
    pub fn position(&self, id: &S) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Check if `id` is registered.
    pub fn contains(&self, id: &S) -> bool {
        self.positions.contains_key(id)
    }

    /// Look up the entry for `id`.
    pub fn get(&self, id: &S) -> Option<&RegistryEntry<S, C, E>> {
        self.position(id).map(|idx| &self.entries[idx])
    }

    pub(crate) fn entry(&self, idx: usize) -> &RegistryEntry<S, C, E> {
        &self.entries[idx]
    }

    pub(crate) fn entry_mut(&mut self, idx: usize) -> &mut RegistryEntry<S, C, E> {
        &mut self.entries[idx]
    }

    /// Number of registered states.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no state is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RegistryEntry<S, C, E>> {
        self.entries.iter()
    }
}

impl<S: State, C, E> Default for StateRegistry<S, C, E> {
    fn default() -> Self {
        Self::new()
    }
}
