//! Disjunction of next-state relations.

use std::fmt;

use crate::model::NextStateRelation;

/// A relation that fires whenever any of its sub-relations fires.
///
/// Successors are the concatenation, in insertion order, of the successors of
/// every enabled sub-relation. Disabled sub-relations are never asked for
/// successors. An empty disjunction is never enabled.
pub struct Disjunction<C, V> {
    disjuncts: Vec<Box<dyn NextStateRelation<C, V>>>,
}

impl<C, V> Disjunction<C, V> {
    /// Creates an empty disjunction.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            disjuncts: Vec::new(),
        }
    }

    /// Adds `relation` as a further alternative.
    #[must_use]
    pub fn or<R>(mut self, relation: R) -> Self
    where
        R: NextStateRelation<C, V> + 'static,
    {
        self.push(relation);
        self
    }

    /// Appends `relation` to the alternatives.
    pub fn push<R>(&mut self, relation: R)
    where
        R: NextStateRelation<C, V> + 'static,
    {
        self.disjuncts.push(Box::new(relation));
    }

    /// Number of sub-relations.
    #[must_use]
    pub fn len(&self) -> usize { self.disjuncts.len() }

    /// Returns `true` if there are no sub-relations.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.disjuncts.is_empty() }
}

impl<C, V> Default for Disjunction<C, V> {
    fn default() -> Self { Self::new() }
}

impl<C, V> fmt::Debug for Disjunction<C, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Disjunction")
            .field("disjuncts", &self.disjuncts.len())
            .finish()
    }
}

impl<C, V> FromIterator<Box<dyn NextStateRelation<C, V>>> for Disjunction<C, V> {
    fn from_iter<I: IntoIterator<Item = Box<dyn NextStateRelation<C, V>>>>(iter: I) -> Self {
        Self {
            disjuncts: iter.into_iter().collect(),
        }
    }
}

impl<C, V> NextStateRelation<C, V> for Disjunction<C, V> {
    fn is_enabled(&self, constants: &C, current: &V) -> bool {
        self.disjuncts
            .iter()
            .any(|disjunct| disjunct.is_enabled(constants, current))
    }

    fn next_states(&self, constants: &C, current: &V) -> Vec<V> {
        let mut next_states = Vec::new();
        for disjunct in &self.disjuncts {
            if disjunct.is_enabled(constants, current) {
                next_states.extend(disjunct.next_states(constants, current));
            }
        }
        next_states
    }
}
