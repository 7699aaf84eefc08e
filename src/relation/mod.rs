//! Building blocks for next-state relations.
//!
//! Atomic rules implement [`NextStateRelation`](crate::model::NextStateRelation)
//! directly or are written as an [`Action`]. They are combined with:
//!
//! - [`Disjunction`]: "one of these rules fires";
//! - [`ExistentialQuantification`]: "for some value in a domain, this
//!   parameterised rule fires".
//!
//! ```
//! use fmc::relation::{Action, Disjunction, ExistentialQuantification};
//! use fmc::model::NextStateRelation;
//!
//! // Add any step in `1..=max` to a counter, or reset it.
//! let add = ExistentialQuantification::new(1..=2_u32, |step| {
//!     Action::new(
//!         format!("add {step}"),
//!         |_: &u32, _: &u32| true,
//!         move |max: &u32, value: &u32| {
//!             if step <= *max { vec![value + step] } else { Vec::new() }
//!         },
//!     )
//! });
//! let reset = Action::new("reset", |_: &u32, value: &u32| *value > 0, |_: &u32, _: &u32| vec![0]);
//! let next = Disjunction::new().or(add).or(reset);
//!
//! assert_eq!(next.next_states(&2, &5), vec![6, 7, 0]);
//! assert_eq!(next.next_states(&2, &0), vec![1, 2]);
//! ```

mod action;
mod disjunction;
mod quantification;

pub use action::Action;
pub use disjunction::Disjunction;
pub use quantification::ExistentialQuantification;
