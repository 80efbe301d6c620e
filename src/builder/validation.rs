//! Construction checks run by `StateMachineBuilder::build`.
//!
//! Checks use stillwater's `Validation` so that every problem in a
//! configuration is reported at once instead of one per `build` attempt.

use crate::builder::error::ConstructionViolation;
use crate::core::{State, StateRegistry};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<ConstructionViolation>>;

/// Validate a registry and default state, accumulating ALL violations.
pub(crate) fn validate<S: State, C, E>(
    registry: &StateRegistry<S, C, E>,
    default: Option<&S>,
) -> Result<(), Vec<ConstructionViolation>> {
    let mut checks: Vec<Check> = vec![
        has_states(registry),
        default_is_registered(registry, default),
    ];

    for entry in registry.iter() {
        let mut targets: Vec<&S> = entry.transitions().iter().collect();
        targets.sort_by(|a, b| a.name().cmp(&b.name()));
        for to in targets {
            checks.push(target_is_registered(registry, entry.id(), to));
        }
    }

    match Validation::all_vec(checks) {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
    }
}

fn has_states<S: State, C, E>(registry: &StateRegistry<S, C, E>) -> Check {
    if registry.is_empty() {
        Validation::fail(ConstructionViolation::NoStates)
    } else {
        Validation::success(())
    }
}

fn default_is_registered<S: State, C, E>(
    registry: &StateRegistry<S, C, E>,
    default: Option<&S>,
) -> Check {
    match default {
        None => Validation::fail(ConstructionViolation::MissingDefaultState),
        // an empty registry is already reported by has_states
        Some(_) if registry.is_empty() => Validation::success(()),
        Some(state) if !registry.contains(state) => {
            Validation::fail(ConstructionViolation::UnregisteredDefaultState {
                state: state.name().into_owned(),
            })
        }
        Some(_) => Validation::success(()),
    }
}

fn target_is_registered<S: State, C, E>(
    registry: &StateRegistry<S, C, E>,
    from: &S,
    to: &S,
) -> Check {
    if registry.contains(to) {
        Validation::success(())
    } else {
        Validation::fail(ConstructionViolation::UnregisteredTarget {
            from: from.name().into_owned(),
            to: to.name().into_owned(),
        })
    }
}
