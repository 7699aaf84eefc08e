//! The generalised die-hard water jug puzzle, checked with `fmc`.
//!
//! A set of jugs of known capacities starts empty. Each step fills a jug from
//! the tap, empties one onto the ground, or pours one into another until the
//! source is empty or the destination is full. The puzzle asks whether some
//! jug can be made to hold an exact quantity; the model states "no jug ever
//! holds the goal quantity" as a safety invariant, so a counterexample is a
//! solution and a successful check proves there is none.
//!
//! - [`model`] builds the constants, states, transition rules and invariants.
//! - [`cli`] runs a check configured from the command line, environment and
//!   configuration files.

pub mod cli;
pub mod error;
pub mod model;

pub use error::ModelError;
pub use model::DieHard;
