//! Combinators that orchestrate many validators
//!
//! - [`named`] / [`bind`] turn a rule and a value into a validator, with or
//!   without field attribution.
//! - [`each`] lifts a per-element rule to a container rule.
//! - [`execute`] runs independent validators and aggregates their failures.
//! - [`fields`] builds a struct rule out of per-field validators.

mod each;
mod execute;
mod named;

pub use each::{Each, Elements, each};
pub use execute::{execute, fields};
pub use named::{Named, bind, named};
