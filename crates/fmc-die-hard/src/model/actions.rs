//! Transition rules for the die-hard model.
//!
//! Each rule is parameterised by the jug(s) it acts on and produces exactly
//! one successor. All three are enabled in every state: filling a full jug or
//! pouring into a full one is a legal step that changes nothing. A rule
//! naming a jug the constants do not have is never enabled.

use std::fmt;

use fmc::model::NextStateRelation;

use super::state::{JugLevels, Jugs};

/// Fills a jug from the tap.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FillJug {
    jug: usize,
}

impl FillJug {
    /// Fills `jug` to its capacity.
    #[must_use]
    pub const fn new(jug: usize) -> Self { Self { jug } }
}

impl fmt::Display for FillJug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Fill jug [{}]", self.jug) }
}

impl NextStateRelation<Jugs, JugLevels> for FillJug {
    fn is_enabled(&self, jugs: &Jugs, _current: &JugLevels) -> bool {
        jugs.capacity(self.jug).is_some()
    }

    fn next_states(&self, jugs: &Jugs, current: &JugLevels) -> Vec<JugLevels> {
        let Some(capacity) = jugs.capacity(self.jug) else {
            return Vec::new();
        };
        let mut next = current.successor(self.to_string());
        if !next.set(self.jug, capacity) {
            return Vec::new();
        }
        vec![next]
    }
}

/// Pours a jug out onto the ground.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EmptyJug {
    jug: usize,
}

impl EmptyJug {
    /// Empties `jug`.
    #[must_use]
    pub const fn new(jug: usize) -> Self { Self { jug } }
}

impl fmt::Display for EmptyJug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Empty jug [{}]", self.jug) }
}

impl NextStateRelation<Jugs, JugLevels> for EmptyJug {
    fn is_enabled(&self, jugs: &Jugs, _current: &JugLevels) -> bool {
        jugs.capacity(self.jug).is_some()
    }

    fn next_states(&self, jugs: &Jugs, current: &JugLevels) -> Vec<JugLevels> {
        if !self.is_enabled(jugs, current) {
            return Vec::new();
        }
        let mut next = current.successor(self.to_string());
        if !next.set(self.jug, 0) {
            return Vec::new();
        }
        vec![next]
    }
}

/// Pours one jug into another until the source is empty or the destination
/// is full, whichever comes first.
///
/// Pouring a jug into itself leaves every level unchanged.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TransferBetweenJugs {
    source: usize,
    destination: usize,
}

impl TransferBetweenJugs {
    /// Pours `source` into `destination`.
    #[must_use]
    pub const fn new(source: usize, destination: usize) -> Self {
        Self {
            source,
            destination,
        }
    }

    fn pour(self, jugs: &Jugs, next: &mut JugLevels) -> Option<()> {
        let source_level = next.level(self.source)?;
        let room = jugs
            .capacity(self.destination)?
            .saturating_sub(next.level(self.destination)?);
        let moved = source_level.min(room);
        next.set(self.source, source_level - moved).then_some(())?;
        // Read again: the destination may be the source.
        let destination_level = next.level(self.destination)?;
        next.set(self.destination, destination_level + moved).then_some(())
    }
}

impl fmt::Display for TransferBetweenJugs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transfer from jug [{}] to [{}]",
            self.source, self.destination
        )
    }
}

impl NextStateRelation<Jugs, JugLevels> for TransferBetweenJugs {
    fn is_enabled(&self, jugs: &Jugs, _current: &JugLevels) -> bool {
        jugs.capacity(self.source).is_some() && jugs.capacity(self.destination).is_some()
    }

    fn next_states(&self, jugs: &Jugs, current: &JugLevels) -> Vec<JugLevels> {
        let mut next = current.successor(self.to_string());
        match self.pour(jugs, &mut next) {
            Some(()) => vec![next],
            None => Vec::new(),
        }
    }
}
