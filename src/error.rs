//! Error types for model checking.
//!
//! An invariant violation is not an error: it is reported through
//! [`crate::report::ModelCheckReport`]. The variants below cover misuse of
//! the checker and searches that could not finish.

use thiserror::Error;

/// Errors returned by [`crate::check::ModelCheck::check`].
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum CheckError {
    /// A required input was not supplied to the builder.
    #[error("missing required argument `{0}`")]
    MissingArgument(&'static str),
    /// The search discovered more unique states than the configured limit.
    #[error("state limit of {limit} unique states exceeded after exploring {explored}")]
    StateLimitExceeded {
        /// The configured maximum number of unique states.
        limit: usize,
        /// Unique states discovered when the search stopped.
        explored: usize,
    },
    /// A state on the counterexample path has no recorded predecessor.
    #[error("no predecessor recorded for state {hash:#018x}")]
    BrokenPredecessorChain {
        /// Hash of the state whose predecessor is missing.
        hash: u64,
    },
    /// Replaying the counterexample did not regenerate a state seen during
    /// the search; the initial-state generator or next-state relation is not
    /// deterministic.
    #[error("trace replay diverged at depth {depth}: state {hash:#018x} was not regenerated")]
    TraceReplayDiverged {
        /// Position in the trace (0 is the initial state).
        depth: usize,
        /// Hash of the state that could not be found.
        hash: u64,
    },
}
