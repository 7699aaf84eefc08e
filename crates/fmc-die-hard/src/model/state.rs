//! Constants and state types for the die-hard model.
//!
//! - [`Jugs`]: the fixed capacities, one per jug, numbered from 1.
//! - [`JugLevels`]: how much water each jug holds, plus a note of the step
//!   that produced the state.

use std::{fmt, ops::RangeInclusive};

use fmc::model::{Variables, fingerprint};

use crate::error::ModelError;

/// The jugs of a puzzle and their capacities.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Jugs {
    capacities: Vec<u32>,
}

impl Jugs {
    /// Validates `capacities`; jug `n` gets `capacities[n - 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NoJugs`] for an empty list and
    /// [`ModelError::ZeroCapacity`] for a jug that cannot hold water.
    pub fn new(capacities: Vec<u32>) -> Result<Self, ModelError> {
        if capacities.is_empty() {
            return Err(ModelError::NoJugs);
        }
        if let Some(position) = capacities.iter().position(|&capacity| capacity == 0) {
            return Err(ModelError::ZeroCapacity { jug: position + 1 });
        }
        Ok(Self { capacities })
    }

    /// Jug numbers in ascending order.
    #[must_use]
    pub fn ids(&self) -> RangeInclusive<usize> { 1..=self.capacities.len() }

    /// Number of jugs.
    #[must_use]
    pub fn len(&self) -> usize { self.capacities.len() }

    /// Always `false`: construction rejects an empty list.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.capacities.is_empty() }

    /// Capacity of `jug`, or `None` if there is no such jug.
    #[must_use]
    pub fn capacity(&self, jug: usize) -> Option<u32> {
        self.capacities.get(jug.checked_sub(1)?).copied()
    }

    /// Capacities in jug order.
    #[must_use]
    pub fn capacities(&self) -> &[u32] { &self.capacities }
}

/// Water levels of every jug.
///
/// The description records which step produced the state and is shown in
/// traces. It takes no part in the state's identity: two states with the same
/// levels are the same state however they were reached.
#[derive(Clone, Debug)]
pub struct JugLevels {
    levels: Vec<u32>,
    description: String,
}

impl JugLevels {
    /// Every jug empty.
    #[must_use]
    pub fn empty(jugs: &Jugs, description: impl Into<String>) -> Self {
        Self {
            levels: vec![0; jugs.len()],
            description: description.into(),
        }
    }

    /// Builds a state from explicit levels, in jug order.
    #[must_use]
    pub fn from_levels(levels: Vec<u32>, description: impl Into<String>) -> Self {
        Self {
            levels,
            description: description.into(),
        }
    }

    /// Level of `jug`, or `None` if there is no such jug.
    #[must_use]
    pub fn level(&self, jug: usize) -> Option<u32> { self.levels.get(jug.checked_sub(1)?).copied() }

    /// Levels in jug order.
    #[must_use]
    pub fn levels(&self) -> &[u32] { &self.levels }

    /// The step that produced this state.
    #[must_use]
    pub fn description(&self) -> &str { &self.description }

    /// `(jug, level)` pairs in jug order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        (1..).zip(self.levels.iter().copied())
    }

    /// A copy with the same levels and a new description.
    pub(super) fn successor(&self, description: impl Into<String>) -> Self {
        Self {
            levels: self.levels.clone(),
            description: description.into(),
        }
    }

    /// Sets the level of `jug`. Returns `false` if there is no such jug.
    pub(super) fn set(&mut self, jug: usize, level: u32) -> bool {
        match jug
            .checked_sub(1)
            .and_then(|index| self.levels.get_mut(index))
        {
            Some(slot) => {
                *slot = level;
                true
            }
            None => false,
        }
    }
}

impl Variables for JugLevels {
    fn state_hash(&self) -> u64 { fingerprint(&self.levels) }
}

impl fmt::Display for JugLevels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.description)?;
        for (position, (jug, level)) in self.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{{{jug} : {level}}}")?;
        }
        f.write_str("]")
    }
}
