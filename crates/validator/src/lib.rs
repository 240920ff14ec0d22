//! # rulebook
//!
//! Composable, fail-fast value validation with structured, translatable
//! errors and concurrent orchestration.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rulebook::prelude::*;
//!
//! let ctx = Context::new();
//! execute(&ctx, [
//!     named("name", String::from("alice"), string().required().min(3)),
//!     named("tags", vec![1_i32, 2], slice::<i32>().max(5).each(number().min(1))),
//! ])
//! .await?;
//! ```
//!
//! ## Building Blocks
//!
//! - **Rules**: every kind in [`validators`] starts out accepting everything
//!   and chains one check per modifier. The first failing check wins.
//! - **Validators**: a rule bound to a value with [`named`] or [`bind`].
//!   Nothing runs until [`Validator::validate`](foundation::Validator::validate).
//! - **Orchestration**: [`execute`] runs independent validators and collects
//!   every expected failure. An internal error replaces the whole result.
//! - **Errors**: [`RuleError`](foundation::RuleError) carries a
//!   [`RuleCode`](foundation::RuleCode), the offending input and arguments;
//!   [`KeyError`](foundation::KeyError) nests field paths;
//!   [`Errors`](foundation::Errors) aggregates siblings. All serialize to JSON.
//! - **Translation**: leaf failures pass through the context's
//!   [`ErrorTranslator`](translate::ErrorTranslator) exactly once.
//!
//! ## Feature Flags
//!
//! - `time` (default): timestamp rules over `chrono::DateTime<Utc>`.

// ValidationError is the only error type validators return; boxing it would
// add indirection to every check.
#![allow(clippy::result_large_err)]

mod macros;

pub mod codes;
pub mod combinators;
pub mod config;
pub mod foundation;
pub mod patterns;
pub mod prelude;
pub mod translate;
pub mod validators;

pub use combinators::{bind, each, execute, fields, named};
pub use config::Config;
pub use foundation::{Context, RuleCode, RuleError, ValidationError};
