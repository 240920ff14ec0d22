//! Foundation: the types every other module builds on
//!
//! - [`RuleCode`] and [`Band`]: which rule failed
//! - [`ValidationError`] and its parts: what went wrong
//! - [`Context`]: per-call language, translator and cancellation
//! - [`Check`], [`Validator`], [`Builder`]: deferred validation
//! - [`Rule`] and [`RuleKind`]: fail-fast composition

mod code;
mod context;
mod error;
mod rule;
mod traits;

pub use code::{BUILTIN_FAMILY, Band, CodeSpec, ParseRuleCodeError, RuleCode};
pub use context::Context;
pub(crate) use error::Outcome;
pub use error::{
    Errors, InternalError, KeyError, RuleError, TextError, TranslatedError, ValidationError,
};
pub use rule::{Rule, RuleKind};
pub use traits::{
    BoxValidator, Builder, Check, FnBuilder, FnValidator, Subject, Validator, builder_fn,
    validator_fn,
};
