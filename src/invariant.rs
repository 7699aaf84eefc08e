//! Closure-backed safety invariants.

use std::fmt;

use crate::{model::SafetyInvariant, report::InvariantReport};

/// A named safety invariant defined by a predicate.
///
/// The predicate returns `Ok(())` when the property holds and `Err(reason)`
/// otherwise; `reason` becomes the report's description.
///
/// ```
/// use fmc::{invariant::Invariant, model::SafetyInvariant};
///
/// let bounded = Invariant::new("bounded", |limit: &u32, value: &u32| {
///     if value <= limit {
///         Ok(())
///     } else {
///         Err(format!("{value} exceeds {limit}"))
///     }
/// });
/// assert!(bounded.is_safe(&3, &2).is_holding());
/// assert_eq!(bounded.is_safe(&3, &4).description(), Some("4 exceeds 3"));
/// ```
pub struct Invariant<F> {
    name: String,
    predicate: F,
}

impl<F> Invariant<F> {
    /// Creates an invariant called `name`.
    pub fn new(name: impl Into<String>, predicate: F) -> Self {
        Self {
            name: name.into(),
            predicate,
        }
    }
}

impl<F> fmt::Debug for Invariant<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invariant")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<C, V, F> SafetyInvariant<C, V> for Invariant<F>
where
    F: Fn(&C, &V) -> Result<(), String>,
{
    fn name(&self) -> &str { &self.name }

    fn is_safe(&self, constants: &C, state: &V) -> InvariantReport {
        match (self.predicate)(constants, state) {
            Ok(()) => InvariantReport::holds(self.name.as_str()),
            Err(reason) => InvariantReport::violated(self.name.as_str(), reason),
        }
    }
}
