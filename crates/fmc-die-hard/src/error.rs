//! Errors raised while building or checking a die-hard model.

use fmc::CheckError;
use thiserror::Error;

/// Reasons a die-hard model cannot be built or checked.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The puzzle needs at least one jug.
    #[error("at least one jug capacity is required")]
    NoJugs,
    /// A jug that can hold nothing.
    #[error("jug [{jug}] has zero capacity")]
    ZeroCapacity {
        /// One-based jug number.
        jug: usize,
    },
    /// The checker itself failed.
    #[error(transparent)]
    Check(#[from] CheckError),
}
