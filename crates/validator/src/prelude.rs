//! Prelude module for convenient imports.
//!
//! Provides a single `use rulebook::prelude::*;` import that brings in the
//! rule kinds, combinators, error types and translation machinery.
//!
//! # Examples
//!
//! ```rust,ignore
//! use rulebook::prelude::*;
//!
//! let ctx = Config::default().context();
//! execute(&ctx, [
//!     named("name", "alice", string().required().max(20)),
//!     named("age", 17_u8, number::<u8>().min(18)),
//! ])
//! .await?;
//! ```

// ============================================================================
// FOUNDATION: Codes, errors, context, core traits
// ============================================================================

pub use crate::foundation::{
    Band, BoxValidator, Builder, Check, CodeSpec, Context, Errors, InternalError, KeyError, Rule,
    RuleCode, RuleError, RuleKind, Subject, TextError, TranslatedError, ValidationError,
    Validator, builder_fn, validator_fn,
};

// ============================================================================
// VALIDATORS: Per-kind rules
// ============================================================================

pub use crate::validators::{
    LazyPattern, MapLike, MapRule, Number, NumberRule, OptionRule, Pattern, SliceRule,
    StringRule, map, number, option, slice, string,
};

// ============================================================================
// TIME-GATED: Timestamp rules
// ============================================================================

#[cfg(feature = "time")]
pub use crate::validators::{TimeRule, time};

// ============================================================================
// COMBINATORS: Orchestration
// ============================================================================

pub use crate::combinators::{Elements, bind, each, execute, fields, named};

// ============================================================================
// TRANSLATION AND CONFIGURATION
// ============================================================================

pub use crate::config::Config;
pub use crate::translate::{
    Bundle, BundleTranslator, ErrorTranslator, NopTranslator, TranslateError,
    TranslationFallback, translator_fn,
};

pub use crate::{codes, patterns};
