//! Initial states and safety invariants for the die-hard model.

use fmc::{model::SafetyInvariant, report::InvariantReport};

use super::state::{JugLevels, Jugs};

/// Description given to the starting state.
pub const INITIAL_DESCRIPTION: &str = "Initial state";

/// The only initial state: every jug empty.
#[must_use]
pub fn all_empty(jugs: &Jugs) -> Vec<JugLevels> { vec![JugLevels::empty(jugs, INITIAL_DESCRIPTION)] }

/// Type invariant: every jug holds between nothing and its capacity.
///
/// The transition rules preserve this by construction; checking it guards the
/// rules themselves.
#[derive(Clone, Copy, Debug, Default)]
pub struct LevelsWithinCapacity;

impl SafetyInvariant<Jugs, JugLevels> for LevelsWithinCapacity {
    fn name(&self) -> &str { "levels within capacity" }

    fn is_safe(&self, jugs: &Jugs, state: &JugLevels) -> InvariantReport {
        let overflow = state
            .iter()
            .find(|&(jug, level)| jugs.capacity(jug).is_none_or(|capacity| level > capacity));
        let wrong_count = state.levels().len() != jugs.len();
        InvariantReport::check(self.name(), overflow.is_none() && !wrong_count, || {
            match overflow {
                Some((jug, level)) => format!("jug [{jug}] holds [{level}] beyond its capacity"),
                None => format!(
                    "state tracks [{}] jugs but the puzzle has [{}]",
                    state.levels().len(),
                    jugs.len()
                ),
            }
        })
    }
}

/// The puzzle's goal, phrased as a safety invariant: no jug ever holds exactly
/// the target quantity. A violation is a solution.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Goal {
    target: u32,
}

impl Goal {
    /// Forbids any jug from holding `target`.
    #[must_use]
    pub const fn new(target: u32) -> Self { Self { target } }

    /// The forbidden quantity.
    #[must_use]
    pub const fn target(&self) -> u32 { self.target }
}

impl SafetyInvariant<Jugs, JugLevels> for Goal {
    fn name(&self) -> &str { "goal" }

    fn is_safe(&self, _jugs: &Jugs, state: &JugLevels) -> InvariantReport {
        let reached = state.iter().find(|&(_, level)| level == self.target);
        InvariantReport::check(self.name(), reached.is_none(), || {
            reached.map_or_else(String::new, |(jug, level)| format!("jug [{jug}] holds [{level}]"))
        })
    }
}
