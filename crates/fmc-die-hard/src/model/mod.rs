//! The generalised die-hard model.
//!
//! The next-state relation is the disjunction of three families of rules,
//! each quantified over the jugs:
//!
//! - fill some jug;
//! - empty some jug;
//! - for some source and some destination, pour source into destination.
//!
//! Two invariants are checked in every state: [`LevelsWithinCapacity`], then
//! the [`Goal`]. A failure report on the goal is a solution to the puzzle.

pub mod actions;
pub mod properties;
pub mod state;

use fmc::{
    ModelCheck,
    ModelCheckReport,
    SearchLimits,
    model::SafetyInvariant,
    relation::{Disjunction, ExistentialQuantification},
};
use tracing::debug;

pub use self::{
    actions::{EmptyJug, FillJug, TransferBetweenJugs},
    properties::{Goal, LevelsWithinCapacity, all_empty},
    state::{JugLevels, Jugs},
};
use crate::error::ModelError;

/// Builds the full next-state relation for `jugs`.
#[must_use]
pub fn next_state_relation(jugs: &Jugs) -> Disjunction<Jugs, JugLevels> {
    type Rules = ExistentialQuantification<Jugs, JugLevels>;

    let ids = jugs.ids();
    let fill = Rules::new(ids.clone(), FillJug::new);
    let empty = Rules::new(ids.clone(), EmptyJug::new);
    let transfer = Rules::new(ids.clone(), |source| {
        Rules::new(ids.clone(), move |destination| {
            TransferBetweenJugs::new(source, destination)
        })
    });
    Disjunction::new().or(fill).or(empty).or(transfer)
}

/// A die-hard puzzle ready to check.
#[derive(Debug)]
pub struct DieHard {
    jugs: Jugs,
    goal: Goal,
    next: Disjunction<Jugs, JugLevels>,
}

impl DieHard {
    /// Builds the puzzle for `capacities` (jug `n` gets the `n`th entry) and
    /// the `goal` quantity.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NoJugs`] or [`ModelError::ZeroCapacity`] if the
    /// capacities do not describe a puzzle.
    pub fn new(capacities: Vec<u32>, goal: u32) -> Result<Self, ModelError> {
        let jugs = Jugs::new(capacities)?;
        let next = next_state_relation(&jugs);
        Ok(Self {
            jugs,
            goal: Goal::new(goal),
            next,
        })
    }

    /// The puzzle from the film: jugs of 3 and 5, measure 4.
    ///
    /// # Errors
    ///
    /// See [`DieHard::new`].
    pub fn basic() -> Result<Self, ModelError> { Self::new(vec![3, 5], 4) }

    /// Four jugs of 3, 5, 7 and 9, measure 8.
    ///
    /// # Errors
    ///
    /// See [`DieHard::new`].
    pub fn large() -> Result<Self, ModelError> { Self::new(vec![3, 5, 7, 9], 8) }

    /// Jugs of 2, 4 and 8 can only ever hold even quantities, so 3 is out of
    /// reach.
    ///
    /// # Errors
    ///
    /// See [`DieHard::new`].
    pub fn impossible() -> Result<Self, ModelError> { Self::new(vec![2, 4, 8], 3) }

    /// The puzzle's jugs.
    #[must_use]
    pub const fn jugs(&self) -> &Jugs { &self.jugs }

    /// The quantity being measured.
    #[must_use]
    pub const fn goal(&self) -> Goal { self.goal }

    /// The composed transition relation.
    #[must_use]
    pub const fn relation(&self) -> &Disjunction<Jugs, JugLevels> { &self.next }

    /// Searches every reachable combination of levels for one that measures
    /// the goal.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Check`] if the search aborts, for example because
    /// it exceeded `limits`.
    pub fn check(&self, limits: SearchLimits) -> Result<ModelCheckReport<JugLevels>, ModelError> {
        debug!(
            capacities = ?self.jugs.capacities(),
            goal = self.goal.target(),
            "checking die-hard puzzle"
        );
        let invariants: [&dyn SafetyInvariant<Jugs, JugLevels>; 2] =
            [&LevelsWithinCapacity, &self.goal];
        let report = ModelCheck::new()
            .constants(&self.jugs)
            .initial_states(&all_empty)
            .next_state_relation(&self.next)
            .invariants(invariants)
            .limits(limits)
            .check()?;
        Ok(report)
    }
}
