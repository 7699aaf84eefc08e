//! Breadth-first model checking.
//!
//! [`ModelCheck`] collects the pieces of a model and runs the search;
//! [`check_model`] is a shorthand for the common case. The search explores
//! every state reachable from the initial states, checks each one against
//! every safety invariant before expanding it, and stops at the first state
//! that violates any of them. Because the frontier is a FIFO queue and a
//! state's predecessor is recorded only on first discovery, the trace in a
//! failure report is a shortest path to the violation.
//!
//! States are deduplicated by [`Variables::state_hash`] alone. Two distinct
//! states whose hashes collide are merged, and the one found second is never
//! explored.
//!
//! # Example
//!
//! ```
//! use fmc::{
//!     check::ModelCheck,
//!     invariant::Invariant,
//!     model::{Variables, fingerprint},
//!     relation::{Action, Disjunction},
//! };
//!
//! #[derive(Clone, Debug)]
//! struct Count(u32);
//!
//! impl Variables for Count {
//!     fn state_hash(&self) -> u64 { fingerprint(&self.0) }
//! }
//!
//! let init = |_: &u32| vec![Count(0)];
//! let next = Disjunction::new().or(Action::new(
//!     "increment",
//!     |max: &u32, count: &Count| count.0 < *max,
//!     |_: &u32, count: &Count| vec![Count(count.0 + 1)],
//! ));
//! let below_three = Invariant::new("below three", |_: &u32, count: &Count| {
//!     if count.0 < 3 { Ok(()) } else { Err(format!("count is {}", count.0)) }
//! });
//!
//! let report = ModelCheck::new()
//!     .constants(&5)
//!     .initial_states(&init)
//!     .next_state_relation(&next)
//!     .invariant(&below_three)
//!     .check()?;
//!
//! assert!(!report.is_success());
//! assert_eq!(report.execution_trace().len(), 4);
//! # Ok::<(), fmc::error::CheckError>(())
//! ```

mod search;
mod trace;

use tracing::warn;

use crate::{
    error::CheckError,
    model::{InitialStates, NextStateRelation, SafetyInvariant, Variables},
    report::ModelCheckReport,
};

/// Optional bounds on a search.
///
/// The default is unbounded: the search runs until the state space is
/// exhausted or an invariant fails.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SearchLimits {
    /// Maximum number of unique states to discover before giving up.
    pub max_unique_states: Option<usize>,
}

impl SearchLimits {
    /// No bounds.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_unique_states: None,
        }
    }

    /// Stops the search once more than `limit` unique states are discovered.
    #[must_use]
    pub const fn with_max_unique_states(limit: usize) -> Self {
        Self {
            max_unique_states: Some(limit),
        }
    }

    fn enforce(self, explored: usize) -> Result<(), CheckError> {
        match self.max_unique_states {
            Some(limit) if explored > limit => {
                warn!(limit, explored, "state limit exceeded; abandoning search");
                Err(CheckError::StateLimitExceeded { limit, explored })
            }
            _ => Ok(()),
        }
    }
}

/// The borrowed pieces of a model, all present.
struct Model<'a, C, V> {
    constants: &'a C,
    init: &'a dyn InitialStates<C, V>,
    next: &'a dyn NextStateRelation<C, V>,
    invariants: &'a [&'a dyn SafetyInvariant<C, V>],
}

/// Builder for a model check.
///
/// Constants, an initial-state generator and a next-state relation are
/// required; [`ModelCheck::check`] reports the first one missing as
/// [`CheckError::MissingArgument`] without doing any search work. Invariants
/// are optional: with none, the search simply counts the reachable states.
pub struct ModelCheck<'a, C, V> {
    constants: Option<&'a C>,
    init: Option<&'a dyn InitialStates<C, V>>,
    next: Option<&'a dyn NextStateRelation<C, V>>,
    invariants: Vec<&'a dyn SafetyInvariant<C, V>>,
    limits: SearchLimits,
}

impl<C, V> Default for ModelCheck<'_, C, V> {
    fn default() -> Self { Self::new() }
}

impl<'a, C, V> ModelCheck<'a, C, V> {
    /// Creates an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            constants: None,
            init: None,
            next: None,
            invariants: Vec::new(),
            limits: SearchLimits::unbounded(),
        }
    }

    /// Sets the model constants.
    #[must_use]
    pub const fn constants(mut self, constants: &'a C) -> Self {
        self.constants = Some(constants);
        self
    }

    /// Sets the initial-state generator.
    #[must_use]
    pub fn initial_states<I>(mut self, init: &'a I) -> Self
    where
        I: InitialStates<C, V>,
    {
        self.init = Some(init);
        self
    }

    /// Sets the next-state relation.
    #[must_use]
    pub fn next_state_relation<R>(mut self, next: &'a R) -> Self
    where
        R: NextStateRelation<C, V>,
    {
        self.next = Some(next);
        self
    }

    /// Adds a safety invariant.
    #[must_use]
    pub fn invariant<S>(mut self, invariant: &'a S) -> Self
    where
        S: SafetyInvariant<C, V>,
    {
        self.invariants.push(invariant);
        self
    }

    /// Adds several safety invariants, checked in the given order.
    #[must_use]
    pub fn invariants<I>(mut self, invariants: I) -> Self
    where
        I: IntoIterator<Item = &'a dyn SafetyInvariant<C, V>>,
    {
        self.invariants.extend(invariants);
        self
    }

    /// Bounds the search.
    #[must_use]
    pub const fn limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Runs the breadth-first search.
    ///
    /// Returns `Ok` with a success report when every reachable state satisfies
    /// every invariant, and `Ok` with a failure report (including a shortest
    /// trace) when some state does not.
    ///
    /// # Errors
    ///
    /// - [`CheckError::MissingArgument`] if constants, the initial-state
    ///   generator or the next-state relation was not supplied.
    /// - [`CheckError::StateLimitExceeded`] if a state limit was set and
    ///   exceeded.
    /// - [`CheckError::BrokenPredecessorChain`] or
    ///   [`CheckError::TraceReplayDiverged`] if the counterexample cannot be
    ///   replayed, which means the model is not deterministic.
    pub fn check(&self) -> Result<ModelCheckReport<V>, CheckError>
    where
        V: Variables,
    {
        let constants = self
            .constants
            .ok_or(CheckError::MissingArgument("constants"))?;
        let init = self.init.ok_or(CheckError::MissingArgument("init"))?;
        let next = self
            .next
            .ok_or(CheckError::MissingArgument("next_state_relation"))?;
        let model = Model {
            constants,
            init,
            next,
            invariants: &self.invariants,
        };
        search::breadth_first(&model, self.limits)
    }
}

/// Checks every state reachable under `next` from the states produced by
/// `init` against `invariants`, without limits.
///
/// # Errors
///
/// See [`ModelCheck::check`].
pub fn check_model<'a, C, V, I, R>(
    constants: &'a C,
    init: &'a I,
    next: &'a R,
    invariants: &[&'a dyn SafetyInvariant<C, V>],
) -> Result<ModelCheckReport<V>, CheckError>
where
    V: Variables,
    I: InitialStates<C, V>,
    R: NextStateRelation<C, V>,
{
    ModelCheck::new()
        .constants(constants)
        .initial_states(init)
        .next_state_relation(next)
        .invariants(invariants.iter().copied())
        .check()
}

#[cfg(test)]
mod tests;
