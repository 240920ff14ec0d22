//! Bundle-backed translator

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::ErrorTranslator;
use super::bundle::Bundle;
use super::template::Template;
use crate::codes;
use crate::foundation::{CodeSpec, Context, RuleCode, RuleError, TranslatedError, ValidationError};

/// Default language when the context names none.
pub const DEFAULT_LANGUAGE: &str = "en";

// ============================================================================
// ERRORS
// ============================================================================

/// Why a rule error could not be rendered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    /// The translator has no bundle, or an empty one.
    #[error("bundle is not set")]
    BundleNotSet,

    /// No template key is registered for the code.
    #[error("code {code} has no registered template key")]
    UnregisteredCode { code: String },

    /// The bundle has no dictionary for the language.
    #[error("language `{language}` not found")]
    LanguageNotFound { language: String },

    /// The dictionary has no template for the key.
    #[error("template `{key}` not found for language `{language}`")]
    KeyNotFound { language: String, key: String },

    /// The template is malformed or references missing arguments.
    #[error("template `{key}` failed to render: {reason}")]
    Render { key: String, reason: String },
}

/// What [`BundleTranslator`] returns when rendering fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslationFallback {
    /// A translated error whose message is the failure text.
    #[default]
    Message,
    /// The untranslated rule error.
    RuleError,
}

// ============================================================================
// TRANSLATOR
// ============================================================================

/// Renders rule errors from a [`Bundle`] in the context's language.
///
/// Built-in codes map to their template keys through [`codes::TABLE`]; codes
/// of other families must be registered with
/// [`with_codes`](Self::with_codes) or
/// [`with_template_key`](Self::with_template_key).
///
/// ```rust,ignore
/// let translator = BundleTranslator::new()
///     .with_bundle(Bundle::builtin())
///     .with_codes(billing::TABLE);
/// let ctx = Context::new().with_language("en").with_translator(translator);
/// ```
#[derive(Debug)]
pub struct BundleTranslator {
    bundle: Option<Bundle>,
    default_language: String,
    keys: HashMap<RuleCode, Cow<'static, str>>,
    fallback: TranslationFallback,
    cache: RwLock<HashMap<(String, String), Arc<Template>>>,
}

impl Default for BundleTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl BundleTranslator {
    /// A translator without a bundle. Every translation fails with
    /// [`TranslateError::BundleNotSet`] until one is supplied.
    pub fn new() -> Self {
        Self {
            bundle: None,
            default_language: DEFAULT_LANGUAGE.to_owned(),
            keys: HashMap::new(),
            fallback: TranslationFallback::default(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_bundle(mut self, bundle: Bundle) -> Self {
        self.bundle = Some(bundle);
        self.cache.get_mut().clear();
        self
    }

    /// Language used when the context names none.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = language.into();
        self
    }

    /// Registers every entry of a code table.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_codes(mut self, table: &'static [CodeSpec]) -> Self {
        for spec in table {
            self.keys
                .insert(spec.code.clone(), Cow::Borrowed(spec.template_key));
        }
        self
    }

    /// Registers a single code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_template_key(mut self, code: RuleCode, key: impl Into<Cow<'static, str>>) -> Self {
        self.keys.insert(code, key.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_fallback(mut self, fallback: TranslationFallback) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn bundle(&self) -> Option<&Bundle> {
        self.bundle.as_ref()
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Renders `err`, reporting why when it cannot.
    pub fn try_translate(&self, ctx: &Context, err: &RuleError) -> Result<String, TranslateError> {
        let bundle = self
            .bundle
            .as_ref()
            .filter(|bundle| !bundle.is_empty())
            .ok_or(TranslateError::BundleNotSet)?;

        let key = self
            .template_key(err.code())
            .ok_or_else(|| TranslateError::UnregisteredCode {
                code: err.code().to_string(),
            })?;

        let language = ctx.language().unwrap_or(&self.default_language);
        let dictionary =
            bundle
                .dictionary(language)
                .ok_or_else(|| TranslateError::LanguageNotFound {
                    language: language.to_owned(),
                })?;

        let source = dictionary
            .get(key)
            .ok_or_else(|| TranslateError::KeyNotFound {
                language: language.to_owned(),
                key: key.to_owned(),
            })?;

        self.template(language, key, source)?
            .render(err)
            .map_err(|reason| TranslateError::Render {
                key: key.to_owned(),
                reason,
            })
    }

    fn template_key(&self, code: &RuleCode) -> Option<&str> {
        self.keys
            .get(code)
            .map(|key| key.as_ref())
            .or_else(|| codes::lookup(code).map(|spec| spec.template_key))
    }

    fn template(&self, language: &str, key: &str, source: &str) -> Result<Arc<Template>, TranslateError> {
        let cache_key = (language.to_owned(), key.to_owned());
        if let Some(template) = self.cache.read().get(&cache_key) {
            return Ok(Arc::clone(template));
        }

        let template = Template::parse(source).map_err(|reason| TranslateError::Render {
            key: key.to_owned(),
            reason,
        })?;
        let template = Arc::new(template);
        self.cache.write().insert(cache_key, Arc::clone(&template));
        Ok(template)
    }
}

impl ErrorTranslator for BundleTranslator {
    fn translate(&self, ctx: &Context, err: RuleError) -> ValidationError {
        match self.try_translate(ctx, &err) {
            Ok(message) => TranslatedError::new(message).with_rule(err).into(),
            Err(failure) => {
                tracing::debug!(
                    code = %err.code(),
                    error = %failure,
                    fallback = ?self.fallback,
                    "translation fell back"
                );
                match self.fallback {
                    TranslationFallback::Message => {
                        TranslatedError::new(failure.to_string()).with_rule(err).into()
                    }
                    TranslationFallback::RuleError => err.into(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Band;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn builtin() -> BundleTranslator {
        BundleTranslator::new().with_bundle(Bundle::builtin())
    }

    #[test]
    fn test_translates_builtin_code() {
        let ctx = Context::new().with_language("en");
        let err = RuleError::new(codes::NUMBER_REQUIRED, 0);

        let translated = builtin().translate(&ctx, err.clone());
        let ValidationError::Translated(translated) = translated else {
            panic!("expected a translated error, got {translated:?}");
        };
        assert_eq!(translated.message(), "This field is required.");
        assert_eq!(translated.rule(), Some(&err));
    }

    #[test]
    fn test_renders_arguments() {
        let ctx = Context::new();
        let err = RuleError::new(codes::STRING_MIN, "ab").with_arg(3);
        assert_eq!(
            builtin().try_translate(&ctx, &err).unwrap(),
            "This field must be at least 3 characters long."
        );
    }

    #[test]
    fn test_no_bundle() {
        let ctx = Context::new().with_language("en");
        let err = RuleError::new(codes::NUMBER_REQUIRED, 0);
        let translator = BundleTranslator::new();

        assert_eq!(
            translator.try_translate(&ctx, &err),
            Err(TranslateError::BundleNotSet)
        );
        assert_eq!(
            translator.translate(&ctx, err).to_string(),
            "bundle is not set"
        );
    }

    #[test]
    fn test_failure_modes() {
        let custom = RuleCode::new("billing", Band::Number.code(50).value());
        let err = RuleError::new(custom.clone(), 1);
        let ctx = Context::new();

        assert!(matches!(
            builtin().try_translate(&ctx, &err),
            Err(TranslateError::UnregisteredCode { .. })
        ));

        let fr = Context::new().with_language("fr");
        assert_eq!(
            builtin().try_translate(&fr, &RuleError::new(codes::NUMBER_REQUIRED, 0)),
            Err(TranslateError::LanguageNotFound {
                language: "fr".into()
            })
        );

        let registered = builtin().with_template_key(custom, "billing.limit");
        assert_eq!(
            registered.try_translate(&ctx, &err),
            Err(TranslateError::KeyNotFound {
                language: "en".into(),
                key: "billing.limit".into()
            })
        );
    }

    #[test]
    fn test_custom_family_with_own_templates() {
        static BILLING: &[CodeSpec] = &[CodeSpec::new(
            RuleCode::new("billing", 3050),
            "billing.limit",
            1,
        )];
        let mut bundle = Bundle::builtin();
        bundle.merge(Bundle::new().with_language(
            "en",
            HashMap::from([("billing.limit".to_owned(), "Limit is {0}.".to_owned())]),
        ));
        let translator = BundleTranslator::new()
            .with_bundle(bundle)
            .with_codes(BILLING);

        let err = RuleError::new(RuleCode::new("billing", 3050), 120).with_arg(100);
        assert_eq!(
            translator.try_translate(&Context::new(), &err).unwrap(),
            "Limit is 100."
        );
    }

    #[test]
    fn test_default_language() {
        let bundle = Bundle::new().with_language(
            "de",
            HashMap::from([(
                "numbers.required".to_owned(),
                "Dieses Feld ist erforderlich.".to_owned(),
            )]),
        );
        let translator = BundleTranslator::new()
            .with_bundle(bundle)
            .with_default_language("de");
        let err = RuleError::new(codes::NUMBER_REQUIRED, 0);
        assert_eq!(
            translator.try_translate(&Context::new(), &err).unwrap(),
            "Dieses Feld ist erforderlich."
        );
    }

    #[test]
    fn test_render_error_and_fallback() {
        let bundle = Bundle::new().with_language(
            "en",
            HashMap::from([("numbers.min".to_owned(), "at least {3}".to_owned())]),
        );
        let err = RuleError::new(codes::NUMBER_MIN, 1).with_arg(5);
        let ctx = Context::new();

        let translator = BundleTranslator::new().with_bundle(bundle.clone());
        assert!(matches!(
            translator.try_translate(&ctx, &err),
            Err(TranslateError::Render { .. })
        ));

        let keep = BundleTranslator::new()
            .with_bundle(bundle)
            .with_fallback(TranslationFallback::RuleError);
        assert_eq!(keep.translate(&ctx, err.clone()), ValidationError::Rule(err));
    }

    #[test]
    fn test_template_cache_is_reused() {
        let translator = builtin();
        let ctx = Context::new();
        let err = RuleError::new(codes::SLICE_MIN, [1]).with_arg(2);
        for _ in 0..3 {
            translator.try_translate(&ctx, &err).unwrap();
        }
        assert_eq!(translator.cache.read().len(), 1);
    }
}
