//! The breadth-first exploration loop.

use std::collections::{HashMap, VecDeque, hash_map::Entry};

use tracing::{debug, info, trace, warn};

use super::{Model, SearchLimits, trace::reconstruct};
use crate::{
    error::CheckError,
    model::Variables,
    report::{Counterexample, InvariantReport, ModelCheckReport, SearchStats},
};

/// Maps each discovered state hash to the hash of the state that first
/// reached it. Initial states have no predecessor.
pub(super) type Predecessors = HashMap<u64, Option<u64>, ahash::RandomState>;

fn as_count(len: usize) -> u64 { u64::try_from(len).unwrap_or(u64::MAX) }

pub(super) fn breadth_first<C, V>(
    model: &Model<'_, C, V>,
    limits: SearchLimits,
) -> Result<ModelCheckReport<V>, CheckError>
where
    V: Variables,
{
    let initial_states = model.init.initial_states(model.constants);
    let initial_state_count = as_count(initial_states.len());
    let mut stats = SearchStats {
        initial_state_count,
        total_state_count: initial_state_count,
        unique_state_count: 0,
    };

    let mut predecessors = Predecessors::default();
    let mut frontier = VecDeque::with_capacity(initial_states.len());
    // Roots with a shared hash are queued once.
    for state in initial_states {
        if let Entry::Vacant(slot) = predecessors.entry(state.state_hash()) {
            slot.insert(None);
            frontier.push_back(state);
        }
    }
    limits.enforce(predecessors.len())?;
    debug!(
        initial_states = initial_state_count,
        invariants = model.invariants.len(),
        "starting breadth-first search"
    );

    while let Some(current) = frontier.pop_front() {
        let current_hash = current.state_hash();
        trace!(
            hash = current_hash,
            frontier = frontier.len(),
            "checking state"
        );

        let violated: Vec<InvariantReport> = model
            .invariants
            .iter()
            .map(|invariant| invariant.is_safe(model.constants, &current))
            .filter(|report| !report.is_holding())
            .collect();
        if !violated.is_empty() {
            stats.unique_state_count = as_count(predecessors.len());
            let trace = reconstruct(model, &predecessors, current_hash)?;
            let names: Vec<&str> = violated.iter().map(InvariantReport::invariant).collect();
            warn!(
                invariants = ?names,
                depth = trace.len().saturating_sub(1),
                unique_states = stats.unique_state_count,
                "safety invariant violated"
            );
            return Ok(ModelCheckReport::failure(
                stats,
                Counterexample {
                    violated,
                    unsafe_state: current,
                    trace,
                },
            ));
        }

        let next_states = model.next.next_states(model.constants, &current);
        stats.total_state_count = stats
            .total_state_count
            .saturating_add(as_count(next_states.len()));
        for next_state in next_states {
            if let Entry::Vacant(slot) = predecessors.entry(next_state.state_hash()) {
                slot.insert(Some(current_hash));
                frontier.push_back(next_state);
            }
        }
        limits.enforce(predecessors.len())?;
    }

    stats.unique_state_count = as_count(predecessors.len());
    info!(
        initial_states = stats.initial_state_count,
        total_states = stats.total_state_count,
        unique_states = stats.unique_state_count,
        "model check complete; all invariants hold"
    );
    Ok(ModelCheckReport::success(stats))
}
