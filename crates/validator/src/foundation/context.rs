//! Validation context
//!
//! The [`Context`] is passed to every validator. It carries the caller's
//! language, the [`ErrorTranslator`] that renders rule failures, and a
//! cancellation token long-running rules may consult.
//!
//! Contexts are cheap to clone; every field is reference counted.

use std::fmt;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::error::{RuleError, ValidationError};
use crate::translate::{ErrorTranslator, NopTranslator};

/// Per-call validation state.
///
/// # Examples
///
/// ```rust,ignore
/// use rulebook::prelude::*;
///
/// let ctx = Context::new()
///     .with_language("en")
///     .with_translator(BundleTranslator::new().with_bundle(Bundle::builtin()));
/// ```
#[derive(Clone)]
pub struct Context {
    language: Option<Arc<str>>,
    translator: Arc<dyn ErrorTranslator>,
    cancellation: CancellationToken,
}

impl Context {
    /// Creates a context with no language, the no-op translator and a fresh
    /// cancellation token.
    pub fn new() -> Self {
        Self {
            language: None,
            translator: Arc::new(NopTranslator),
            cancellation: CancellationToken::new(),
        }
    }

    /// Sets the language translations are rendered in.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_language(mut self, language: impl Into<Arc<str>>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Replaces the translator for every validator run with this context.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_translator(mut self, translator: impl ErrorTranslator + 'static) -> Self {
        self.translator = Arc::new(translator);
        self
    }

    /// Like [`with_translator`](Self::with_translator) for an already shared
    /// translator.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_shared_translator(mut self, translator: Arc<dyn ErrorTranslator>) -> Self {
        self.translator = translator;
        self
    }

    /// Uses `token` as the cancellation signal.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// The requested language, if any.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// The active translator.
    pub fn translator(&self) -> &Arc<dyn ErrorTranslator> {
        &self.translator
    }

    /// Runs `err` through the active translator.
    pub fn translate(&self, err: RuleError) -> ValidationError {
        self.translator.translate(self, err)
    }

    /// The cancellation token.
    pub const fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }

    /// Returns `true` once the caller has cancelled the run.
    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("language", &self.language)
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{RuleCode, TranslatedError};
    use crate::translate::translator_fn;

    #[test]
    fn test_default_context_keeps_rule_errors() {
        let ctx = Context::new();
        let err = RuleError::new(RuleCode::builtin(2001), "");
        assert_eq!(ctx.translate(err.clone()), ValidationError::Rule(err));
        assert_eq!(ctx.language(), None);
    }

    #[test]
    fn test_translator_override() {
        let ctx = Context::new()
            .with_language("de")
            .with_translator(translator_fn(|ctx: &Context, err: RuleError| {
                let text = format!("{}:{}", ctx.language().unwrap_or("?"), err.code());
                TranslatedError::new(text).into()
            }));

        let err = ctx.translate(RuleError::new(RuleCode::builtin(2001), ""));
        assert_eq!(err.to_string(), "de:2001");
    }

    #[test]
    fn test_cancellation_is_shared_between_clones() {
        let ctx = Context::new();
        let clone = ctx.clone();
        ctx.cancellation().cancel();
        assert!(clone.is_cancelled());
    }
}
