//! Existential quantification over a finite domain.

use std::fmt;

use super::Disjunction;
use crate::model::NextStateRelation;

/// "There exists a value in the domain for which the instantiated rule
/// fires."
///
/// The rule factory is applied to every value of the domain once, at
/// construction, and the instances are disjoined in domain order. Nesting
/// quantifications expresses rules over several parameters.
pub struct ExistentialQuantification<C, V> {
    instances: Disjunction<C, V>,
}

impl<C, V> ExistentialQuantification<C, V> {
    /// Instantiates `rule` for every value of `domain`.
    pub fn new<T, R, I, F>(domain: I, rule: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: FnMut(T) -> R,
        R: NextStateRelation<C, V> + 'static,
    {
        let mut instances = Disjunction::new();
        for instance in domain.into_iter().map(rule) {
            instances.push(instance);
        }
        Self { instances }
    }

    /// Number of instantiated rules (the size of the domain).
    #[must_use]
    pub fn len(&self) -> usize { self.instances.len() }

    /// Returns `true` if the domain was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.instances.is_empty() }
}

impl<C, V> fmt::Debug for ExistentialQuantification<C, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExistentialQuantification")
            .field("instances", &self.instances.len())
            .finish()
    }
}

impl<C, V> NextStateRelation<C, V> for ExistentialQuantification<C, V> {
    fn is_enabled(&self, constants: &C, current: &V) -> bool {
        self.instances.is_enabled(constants, current)
    }

    fn next_states(&self, constants: &C, current: &V) -> Vec<V> {
        self.instances.next_states(constants, current)
    }
}
