//! Counterexample reconstruction by replay.
//!
//! The search keeps only hashes, so the states on the path to a violation are
//! regenerated: the predecessor chain gives the hash at every depth, and the
//! model is re-run one step at a time along that chain.

use super::{Model, search::Predecessors};
use crate::{error::CheckError, model::Variables};

/// Hashes from an initial state to `goal`, root first.
fn hash_path(predecessors: &Predecessors, goal: u64) -> Result<Vec<u64>, CheckError> {
    let mut path = vec![goal];
    let mut cursor = goal;
    while let Some(predecessor) = predecessors
        .get(&cursor)
        .copied()
        .ok_or(CheckError::BrokenPredecessorChain { hash: cursor })?
    {
        path.push(predecessor);
        cursor = predecessor;
    }
    path.reverse();
    Ok(path)
}

pub(super) fn reconstruct<C, V>(
    model: &Model<'_, C, V>,
    predecessors: &Predecessors,
    goal: u64,
) -> Result<Vec<V>, CheckError>
where
    V: Variables,
{
    let path = hash_path(predecessors, goal)?;
    let last = path.len().saturating_sub(1);
    let mut candidates = model.init.initial_states(model.constants);
    let mut trace = Vec::with_capacity(path.len());
    for (depth, hash) in path.into_iter().enumerate() {
        let state = candidates
            .into_iter()
            .find(|candidate| candidate.state_hash() == hash)
            .ok_or(CheckError::TraceReplayDiverged { depth, hash })?;
        candidates = if depth < last {
            model.next.next_states(model.constants, &state)
        } else {
            Vec::new()
        };
        trace.push(state);
    }
    Ok(trace)
}
