//! Result types returned by the checker.
//!
//! - [`InvariantReport`]: outcome of one invariant on one state
//! - [`ModelCheckReport`]: outcome of a whole search, with a [`Counterexample`]
//!   when an invariant failed

use std::fmt;

/// Outcome of checking one state against one safety invariant.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvariantReport {
    invariant: String,
    holds: bool,
    description: Option<String>,
}

impl InvariantReport {
    /// Reports that `invariant` holds.
    #[must_use]
    pub fn holds(invariant: impl Into<String>) -> Self {
        Self {
            invariant: invariant.into(),
            holds: true,
            description: None,
        }
    }

    /// Reports that `invariant` is violated, with a human-readable reason.
    #[must_use]
    pub fn violated(invariant: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            invariant: invariant.into(),
            holds: false,
            description: Some(description.into()),
        }
    }

    /// Builds a report from a boolean verdict.
    ///
    /// `describe` runs only when `holds` is `false`.
    #[must_use]
    pub fn check<D>(invariant: impl Into<String>, holds: bool, describe: impl FnOnce() -> D) -> Self
    where
        D: Into<String>,
    {
        if holds {
            Self::holds(invariant)
        } else {
            Self::violated(invariant, describe())
        }
    }

    /// Name of the invariant this report is about.
    #[must_use]
    pub fn invariant(&self) -> &str { &self.invariant }

    /// Returns `true` if the invariant holds for the checked state.
    #[must_use]
    pub const fn is_holding(&self) -> bool { self.holds }

    /// Description of the failing check, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> { self.description.as_deref() }
}

impl fmt::Display for InvariantReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: [{}]",
            self.invariant,
            self.description.as_deref().unwrap_or_default()
        )
    }
}

/// State counters gathered during a search.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SearchStats {
    /// Number of initial states produced by the generator.
    pub initial_state_count: u64,
    /// Number of states generated, counting every edge traversed (a state
    /// reached along several paths is counted once per path). Initial states
    /// that share a hash are expanded once, so their successors count once.
    pub total_state_count: u64,
    /// Number of distinct state hashes discovered.
    pub unique_state_count: u64,
}

/// The first violating state found and how to reach it.
#[derive(Clone, Debug)]
pub struct Counterexample<V> {
    /// Every invariant that failed on [`Counterexample::unsafe_state`].
    pub violated: Vec<InvariantReport>,
    /// The state on which the invariants failed.
    pub unsafe_state: V,
    /// States from an initial state up to and including the unsafe state.
    pub trace: Vec<V>,
}

impl<V> Counterexample<V> {
    /// Number of transitions in the trace.
    #[must_use]
    pub fn transition_count(&self) -> usize { self.trace.len().saturating_sub(1) }
}

/// Outcome of a model check.
#[derive(Clone, Debug)]
pub struct ModelCheckReport<V> {
    stats: SearchStats,
    counterexample: Option<Counterexample<V>>,
}

impl<V> ModelCheckReport<V> {
    /// Builds a report for a search that exhausted the state space.
    #[must_use]
    pub const fn success(stats: SearchStats) -> Self {
        Self {
            stats,
            counterexample: None,
        }
    }

    /// Builds a report for a search that stopped on an invariant violation.
    #[must_use]
    pub const fn failure(stats: SearchStats, counterexample: Counterexample<V>) -> Self {
        Self {
            stats,
            counterexample: Some(counterexample),
        }
    }

    /// Returns `true` when every invariant held in every reachable state.
    #[must_use]
    pub const fn is_success(&self) -> bool { self.counterexample.is_none() }

    /// Counters as of the end of the search (or of the violation).
    #[must_use]
    pub const fn stats(&self) -> SearchStats { self.stats }

    /// Number of initial states.
    #[must_use]
    pub const fn initial_state_count(&self) -> u64 { self.stats.initial_state_count }

    /// Number of states generated, counting duplicates.
    #[must_use]
    pub const fn total_state_count(&self) -> u64 { self.stats.total_state_count }

    /// Number of distinct states discovered.
    #[must_use]
    pub const fn unique_state_count(&self) -> u64 { self.stats.unique_state_count }

    /// The counterexample, if an invariant failed.
    #[must_use]
    pub const fn counterexample(&self) -> Option<&Counterexample<V>> {
        self.counterexample.as_ref()
    }

    /// Reports of the invariants violated; empty on success.
    #[must_use]
    pub fn safety_invariants_violated(&self) -> &[InvariantReport] {
        self.counterexample
            .as_ref()
            .map_or(&[], |cex| cex.violated.as_slice())
    }

    /// The state on which the invariants failed.
    #[must_use]
    pub fn unsafe_state(&self) -> Option<&V> {
        self.counterexample.as_ref().map(|cex| &cex.unsafe_state)
    }

    /// States leading from an initial state to the unsafe state; empty on
    /// success.
    #[must_use]
    pub fn execution_trace(&self) -> &[V] {
        self.counterexample
            .as_ref()
            .map_or(&[], |cex| cex.trace.as_slice())
    }

    /// Consumes the report and returns the counterexample, if any.
    #[must_use]
    pub fn into_counterexample(self) -> Option<Counterexample<V>> { self.counterexample }
}

impl<V: fmt::Display> fmt::Display for ModelCheckReport<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(cex) = &self.counterexample else {
            writeln!(f, "Success!")?;
            writeln!(
                f,
                "Found [{}] initial state(s).",
                self.stats.initial_state_count
            )?;
            return writeln!(
                f,
                "Found [{}] total states, [{}] unique.",
                self.stats.total_state_count, self.stats.unique_state_count
            );
        };

        writeln!(f, "Failure!")?;
        writeln!(
            f,
            "Found [{}] initial state(s).",
            self.stats.initial_state_count
        )?;
        writeln!(f, "Failing safety invariant(s):")?;
        for report in &cex.violated {
            writeln!(f, "{report}")?;
        }
        writeln!(f, "Failing state:")?;
        writeln!(f, "{}", cex.unsafe_state)?;
        writeln!(f, "State trace:")?;
        for state in &cex.trace {
            writeln!(f, "{state}")?;
        }
        Ok(())
    }
}
