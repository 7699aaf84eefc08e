//! Atomic transition rules built from closures.

use std::fmt;

use crate::model::NextStateRelation;

/// A named transition rule defined by an enabling condition and a successor
/// function.
pub struct Action<E, N> {
    name: String,
    enabled: E,
    next: N,
}

impl<E, N> Action<E, N> {
    /// Creates an action called `name`.
    ///
    /// `next` is only consulted when `enabled` returns `true`.
    pub fn new(name: impl Into<String>, enabled: E, next: N) -> Self {
        Self {
            name: name.into(),
            enabled,
            next,
        }
    }

    /// The action's name.
    #[must_use]
    pub fn name(&self) -> &str { &self.name }
}

impl<E, N> fmt::Debug for Action<E, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<E, N> fmt::Display for Action<E, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.name) }
}

impl<C, V, E, N> NextStateRelation<C, V> for Action<E, N>
where
    E: Fn(&C, &V) -> bool,
    N: Fn(&C, &V) -> Vec<V>,
{
    fn is_enabled(&self, constants: &C, current: &V) -> bool { (self.enabled)(constants, current) }

    fn next_states(&self, constants: &C, current: &V) -> Vec<V> {
        if (self.enabled)(constants, current) {
            (self.next)(constants, current)
        } else {
            Vec::new()
        }
    }
}
