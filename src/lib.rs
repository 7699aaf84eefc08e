//! Explicit-state model checking for safety invariants.
//!
//! This crate explores the full reachable state space of a finite model in
//! breadth-first order and checks every state against a set of safety
//! invariants. A run either proves the invariants hold everywhere or stops at
//! the first violation with a shortest trace from an initial state.
//!
//! A model supplies:
//!
//! - constants, fixed for the whole run;
//! - a state type implementing [`model::Variables`];
//! - an [`model::InitialStates`] generator;
//! - a [`model::NextStateRelation`], usually composed from atomic rules with
//!   [`relation::Disjunction`] and [`relation::ExistentialQuantification`];
//! - any number of [`model::SafetyInvariant`]s.
//!
//! [`check::check_model`] and [`check::ModelCheck`] run the search and return
//! a [`report::ModelCheckReport`].
//!
//! The engine does not check liveness or temporal formulas, does not
//! represent states symbolically, and runs on the calling thread.

pub mod check;
pub mod error;
pub mod invariant;
pub mod model;
pub mod relation;
pub mod report;

pub use check::{ModelCheck, SearchLimits, check_model};
pub use error::CheckError;
pub use report::{InvariantReport, ModelCheckReport};
