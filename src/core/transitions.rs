//! Per-state set of legal successor states.

use super::state::State;
use std::collections::HashSet;

/// The identifiers a state may move to directly.
///
/// Only membership matters; iteration order is unspecified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionSet<S: State> {
    targets: HashSet<S>,
}

impl<S: State> TransitionSet<S> {
    /// Create an empty set (a state with no way out).
    pub fn new() -> Self {
        Self {
            targets: HashSet::new(),
        }
    }

    /// Check if `state` is a legal successor.
    pub fn contains(&self, state: &S) -> bool {
        self.targets.contains(state)
    }

    /// Number of legal successors.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Check if the state has no way out.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Iterate over the targets in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.targets.iter()
    }
}

impl<S: State> Default for TransitionSet<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> FromIterator<S> for TransitionSet<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            targets: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_collapse() {
        let set: TransitionSet<&'static str> = ["b", "c", "b"].into_iter().collect();

        assert_eq!(set.len(), 2);
        assert!(set.contains(&"b"));
        assert!(set.contains(&"c"));
        assert!(!set.contains(&"a"));
    }

    #[test]
    fn empty_set_contains_nothing() {
        let set: TransitionSet<u8> = TransitionSet::new();

        assert!(set.is_empty());
        assert!(!set.contains(&0));
        assert_eq!(set.iter().count(), 0);
    }
}
