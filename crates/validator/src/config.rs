//! Process-level configuration
//!
//! Configuration is read once and turned into a [`Context`] that callers pass
//! to every validation run:
//!
//! ```rust,ignore
//! let ctx = Config::from_env().context();
//! execute(&ctx, validators).await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::foundation::Context;
use crate::translate::{Bundle, BundleTranslator, DEFAULT_LANGUAGE, TranslationFallback};

/// Environment variable holding the default language.
pub const ENV_LANGUAGE: &str = "RULEBOOK_LANGUAGE";
/// Environment variable toggling translation (`0`/`false` to disable).
pub const ENV_TRANSLATE: &str = "RULEBOOK_TRANSLATE";
/// Environment variable selecting the translation fallback
/// (`message` or `rule_error`).
pub const ENV_FALLBACK: &str = "RULEBOOK_FALLBACK";

/// Validation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Language used when a context names none.
    pub default_language: String,
    /// Whether rule errors are rendered with the built-in bundle.
    pub translate: bool,
    /// What to return when rendering fails.
    pub fallback: TranslationFallback,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_language: DEFAULT_LANGUAGE.to_owned(),
            translate: true,
            fallback: TranslationFallback::default(),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Config {
    /// Reads the `RULEBOOK_*` environment variables over the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(language) = lookup(ENV_LANGUAGE) {
            let language = language.trim();
            if language.is_empty() {
                tracing::warn!(var = ENV_LANGUAGE, "empty language, keeping default");
            } else {
                config.default_language = language.to_owned();
            }
        }

        if let Some(v) = lookup(ENV_TRANSLATE) {
            match parse_flag(&v) {
                Some(flag) => config.translate = flag,
                None => tracing::warn!(
                    var = ENV_TRANSLATE,
                    value = v.as_str(),
                    "unknown flag value, keeping default"
                ),
            }
        }

        if let Some(v) = lookup(ENV_FALLBACK) {
            match v.trim().to_ascii_lowercase().as_str() {
                "message" => config.fallback = TranslationFallback::Message,
                "rule_error" => config.fallback = TranslationFallback::RuleError,
                other => tracing::warn!(
                    var = ENV_FALLBACK,
                    value = other,
                    "unknown translation fallback, keeping default"
                ),
            }
        }

        config
    }

    /// The translator this configuration describes, if translation is on.
    pub fn translator(&self) -> Option<BundleTranslator> {
        self.translate.then(|| {
            BundleTranslator::new()
                .with_bundle(Bundle::builtin())
                .with_default_language(self.default_language.clone())
                .with_fallback(self.fallback)
        })
    }

    /// Builds the context validators run with.
    pub fn context(&self) -> Context {
        match self.translator() {
            Some(translator) => Context::new().with_translator(translator),
            None => Context::new(),
        }
    }
}
