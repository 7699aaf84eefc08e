//! Contracts a system model implements to be explored by the checker.
//!
//! A model is described by four pieces:
//!
//! - a constants value `C`, fixed for the whole search and only ever borrowed;
//! - a state type `V` implementing [`Variables`];
//! - an [`InitialStates`] generator;
//! - a [`NextStateRelation`] (usually composed with the combinators in
//!   [`crate::relation`]);
//!
//! plus any number of [`SafetyInvariant`]s checked against every reachable
//! state.

use std::hash::{Hash, Hasher};

use ahash::AHasher;

use crate::report::InvariantReport;

/// One point in the state space of a modelled system.
///
/// The checker identifies states solely by [`Variables::state_hash`]: two
/// states with the same hash are treated as the same state, and no equality
/// check backs this up. Implementations must derive the hash from the full
/// semantic content of the state and nothing else (annotations such as the
/// name of the action that produced the state must be left out).
pub trait Variables {
    /// Returns the 64-bit identity of this state.
    ///
    /// Must be a pure function of the state's content and stable across calls.
    fn state_hash(&self) -> u64;
}

/// Hashes a value with a fixed-key hasher, so equal values always produce the
/// same hash.
///
/// Handy for implementing [`Variables::state_hash`] over the semantic part of
/// a state:
///
/// ```
/// use fmc::model::{Variables, fingerprint};
///
/// struct Counter {
///     value: u32,
///     note: String,
/// }
///
/// impl Variables for Counter {
///     fn state_hash(&self) -> u64 { fingerprint(&self.value) }
/// }
///
/// let a = Counter { value: 3, note: "inc".to_owned() };
/// let b = Counter { value: 3, note: "dec".to_owned() };
/// assert_eq!(a.state_hash(), b.state_hash());
/// ```
#[must_use]
pub fn fingerprint<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = AHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Generates the states a system may start in.
///
/// The checker calls this once to seed the search and once more when it
/// replays a counterexample, so repeated calls with the same constants must
/// produce the same states in the same order.
pub trait InitialStates<C, V> {
    /// Returns every valid initial state for `constants`.
    fn initial_states(&self, constants: &C) -> Vec<V>;
}

impl<C, V, F> InitialStates<C, V> for F
where
    F: Fn(&C) -> Vec<V>,
{
    fn initial_states(&self, constants: &C) -> Vec<V> { self(constants) }
}

/// A transition rule of the modelled system.
///
/// Implementations must be deterministic and free of side effects: the
/// checker regenerates successors when it reconstructs a counterexample and
/// expects to see exactly the states it saw during the search.
pub trait NextStateRelation<C, V> {
    /// Returns `true` if the rule can fire from `current`.
    fn is_enabled(&self, constants: &C, current: &V) -> bool;

    /// Returns the states reachable from `current` by one application of the
    /// rule.
    ///
    /// Callers are expected to check [`NextStateRelation::is_enabled`] first,
    /// but a disabled rule should answer with an empty list rather than
    /// panic.
    fn next_states(&self, constants: &C, current: &V) -> Vec<V>;
}

impl<C, V, R> NextStateRelation<C, V> for &R
where
    R: NextStateRelation<C, V> + ?Sized,
{
    fn is_enabled(&self, constants: &C, current: &V) -> bool {
        (**self).is_enabled(constants, current)
    }

    fn next_states(&self, constants: &C, current: &V) -> Vec<V> {
        (**self).next_states(constants, current)
    }
}

impl<C, V, R> NextStateRelation<C, V> for Box<R>
where
    R: NextStateRelation<C, V> + ?Sized,
{
    fn is_enabled(&self, constants: &C, current: &V) -> bool {
        (**self).is_enabled(constants, current)
    }

    fn next_states(&self, constants: &C, current: &V) -> Vec<V> {
        (**self).next_states(constants, current)
    }
}

/// A property that must hold in every reachable state.
pub trait SafetyInvariant<C, V> {
    /// Human-readable name used in reports.
    fn name(&self) -> &str;

    /// Checks `state` and reports whether the property holds.
    ///
    /// Must be total and free of side effects.
    fn is_safe(&self, constants: &C, state: &V) -> InvariantReport;
}
