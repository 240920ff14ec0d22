//! Error translation
//!
//! Every failing leaf check hands its [`RuleError`] to the context's
//! [`ErrorTranslator`] exactly once, before the error leaves the rule chain.
//! Field wrappers and aggregates are never translated again.
//!
//! - [`NopTranslator`] keeps the structured rule error (the default).
//! - [`BundleTranslator`] renders localized text from a [`Bundle`].
//! - [`translator_fn`] adapts a closure.

mod bundle;
mod template;
mod translator;

pub use bundle::{Bundle, Dictionary};
pub use translator::{BundleTranslator, DEFAULT_LANGUAGE, TranslateError, TranslationFallback};

use crate::foundation::{Context, RuleError, ValidationError};

/// Turns a rule failure into the error callers see.
pub trait ErrorTranslator: Send + Sync {
    /// Translates `err` for `ctx`.
    fn translate(&self, ctx: &Context, err: RuleError) -> ValidationError;
}

/// Leaves rule errors untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NopTranslator;

impl ErrorTranslator for NopTranslator {
    fn translate(&self, _ctx: &Context, err: RuleError) -> ValidationError {
        ValidationError::Rule(err)
    }
}

/// Translator backed by a closure. Created by [`translator_fn`].
pub struct FnTranslator<F>(F);

impl<F> ErrorTranslator for FnTranslator<F>
where
    F: Fn(&Context, RuleError) -> ValidationError + Send + Sync,
{
    fn translate(&self, ctx: &Context, err: RuleError) -> ValidationError {
        (self.0)(ctx, err)
    }
}

/// Wraps a closure as a translator.
///
/// ```rust,ignore
/// let ctx = Context::new().with_translator(translator_fn(|_ctx, err: RuleError| {
///     if *err.code() == codes::STRING_REQUIRED {
///         TranslatedError::new("string is required").into()
///     } else {
///         err.into()
///     }
/// }));
/// ```
pub fn translator_fn<F>(f: F) -> FnTranslator<F>
where
    F: Fn(&Context, RuleError) -> ValidationError + Send + Sync,
{
    FnTranslator(f)
}
