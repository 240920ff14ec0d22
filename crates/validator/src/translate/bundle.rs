//! Locale bundles
//!
//! A [`Bundle`] maps a language tag to a [`Dictionary`] of template key →
//! template text. It serializes as a plain nested JSON object:
//!
//! ```json
//! { "en": { "numbers.required": "This field is required." } }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Template key → template text, for one language.
pub type Dictionary = HashMap<String, String>;

/// Language → dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bundle {
    languages: HashMap<String, Dictionary>,
}

const ENGLISH: &[(&str, &str)] = &[
    ("pointers.required", "This field is required."),
    ("strings.required", "This field is required."),
    ("strings.min", "This field must be at least {0} characters long."),
    ("strings.max", "This field must be at most {0} characters long."),
    ("strings.match", "This field has an invalid format."),
    ("strings.in", "This field must be one of: {0}."),
    ("strings.in_fold", "This field must be one of: {0}."),
    ("numbers.required", "This field is required."),
    ("numbers.min", "This field must be at least {0}."),
    ("numbers.max", "This field must be at most {0}."),
    ("numbers.in", "This field must be one of: {0}."),
    ("slices.required", "This field is required."),
    ("slices.min", "This field must contain at least {0} items."),
    ("slices.max", "This field must contain at most {0} items."),
    ("maps.required", "This field is required."),
    ("maps.min", "This field must contain at least {0} entries."),
    ("maps.max", "This field must contain at most {0} entries."),
    ("times.required", "This field is required."),
    ("times.min", "This field must not be earlier than {0}."),
    ("times.max", "This field must not be later than {0}."),
];

impl Bundle {
    /// An empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// English templates for every built-in code, under `"en"`.
    pub fn builtin() -> Self {
        let english = ENGLISH
            .iter()
            .map(|(key, text)| ((*key).to_owned(), (*text).to_owned()))
            .collect();
        Self::new().with_language("en", english)
    }

    /// Parses a bundle from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Adds or replaces the dictionary for `language`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_language(mut self, language: impl Into<String>, dictionary: Dictionary) -> Self {
        self.insert(language, dictionary);
        self
    }

    /// Adds or replaces the dictionary for `language`.
    pub fn insert(&mut self, language: impl Into<String>, dictionary: Dictionary) {
        self.languages.insert(language.into(), dictionary);
    }

    /// Adds the entries of `other`, overriding templates present in both.
    pub fn merge(&mut self, other: Self) {
        for (language, dictionary) in other.languages {
            self.languages
                .entry(language)
                .or_default()
                .extend(dictionary);
        }
    }

    /// The dictionary for `language`.
    pub fn dictionary(&self, language: &str) -> Option<&Dictionary> {
        self.languages.get(language)
    }

    /// Every language with a dictionary.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    /// Returns `true` when no language is configured.
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}
