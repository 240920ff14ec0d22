//! Structured validation errors
//!
//! Every failure a validator can produce is a [`ValidationError`], a closed
//! enum with one variant per kind of failure:
//!
//! | variant | meaning | expected? |
//! |---|---|---|
//! | [`Rule`](ValidationError::Rule) | a leaf rule rejected a value | yes |
//! | [`Translated`](ValidationError::Translated) | a rule failure rendered to text | yes |
//! | [`Field`](ValidationError::Field) | a failure attributed to one field | yes |
//! | [`Aggregate`](ValidationError::Aggregate) | failures of independent siblings | yes |
//! | [`Internal`](ValidationError::Internal) | anything else, fatal to the run | no |
//!
//! Expected failures serialize to a stable JSON shape meant for API error
//! bodies:
//!
//! ```text
//! RuleError   {"code": 3002, "input": 2, "args": [3]}
//! KeyError    {"key": "email", "err": <error>}
//! Errors      [<error>, <error>, ...]
//! text        "This field is required."
//! ```

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::code::RuleCode;

/// Writes the JSON form of `value`, falling back to `fallback` if
/// serialization fails. Rendering never returns an error of its own.
fn write_json<T: Serialize>(
    f: &mut fmt::Formatter<'_>,
    value: &T,
    fallback: impl FnOnce(&mut fmt::Formatter<'_>) -> fmt::Result,
) -> fmt::Result {
    match serde_json::to_string(value) {
        Ok(json) => f.write_str(&json),
        Err(_) => fallback(f),
    }
}

// ============================================================================
// RULE ERROR
// ============================================================================

/// A leaf rule rejected a value.
///
/// Carries the rule's [`RuleCode`], the offending input and the rule's
/// parameters (bounds, options, patterns).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleError {
    code: RuleCode,
    #[serde(default)]
    input: Value,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    args: Vec<Value>,
}

impl RuleError {
    /// Creates a rule error for `input`.
    ///
    /// Inputs that cannot be represented as JSON are recorded as `null`.
    pub fn new(code: RuleCode, input: impl Serialize) -> Self {
        Self {
            code,
            input: serde_json::to_value(input).unwrap_or(Value::Null),
            args: Vec::new(),
        }
    }

    /// Appends one rule argument.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_arg(mut self, arg: impl Serialize) -> Self {
        self.args
            .push(serde_json::to_value(arg).unwrap_or(Value::Null));
        self
    }

    /// The failing rule.
    pub const fn code(&self) -> &RuleCode {
        &self.code
    }

    /// The rejected value.
    pub const fn input(&self) -> &Value {
        &self.input
    }

    /// Rule parameters in declaration order.
    pub fn args(&self) -> &[Value] {
        &self.args
    }
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_json(f, self, |f| write!(f, "RuleError[code={}]", self.code))
    }
}

impl StdError for RuleError {}

// ============================================================================
// TEXT ERRORS
// ============================================================================

/// A plain-text error. Serializes as a JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
#[serde(transparent)]
#[error("{0}")]
pub struct TextError(Cow<'static, str>);

impl TextError {
    /// Creates a text error.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self(message.into())
    }

    /// The message.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A rule failure rendered to human-readable text by a translator.
///
/// Displays and serializes as its text only, but still remembers the rule
/// error it came from so code lookups keep working after translation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct TranslatedError {
    message: TextError,
    rule: Option<RuleError>,
}

impl TranslatedError {
    /// Creates a translated error with no originating rule.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: TextError::new(message),
            rule: None,
        }
    }

    /// Records the rule error this text was rendered from.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_rule(mut self, rule: RuleError) -> Self {
        self.rule = Some(rule);
        self
    }

    /// The rendered text.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// The originating rule error, when known.
    pub const fn rule(&self) -> Option<&RuleError> {
        self.rule.as_ref()
    }
}

impl From<TextError> for TranslatedError {
    fn from(message: TextError) -> Self {
        Self {
            message,
            rule: None,
        }
    }
}

impl Serialize for TranslatedError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.message.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TranslatedError {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        TextError::deserialize(deserializer).map(Self::from)
    }
}

// ============================================================================
// KEY ERROR
// ============================================================================

/// Attributes a failure to one field.
///
/// Paths are built by nesting key errors, never by joining strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyError {
    key: Cow<'static, str>,
    err: Box<ValidationError>,
}

impl KeyError {
    /// Wraps `err` under `key`.
    pub fn new(key: impl Into<Cow<'static, str>>, err: impl Into<ValidationError>) -> Self {
        Self {
            key: key.into(),
            err: Box::new(err.into()),
        }
    }

    /// Wraps a foreign error under `key`, keeping only its text.
    pub fn from_display(key: impl Into<Cow<'static, str>>, err: &impl fmt::Display) -> Self {
        Self::new(key, TranslatedError::new(err.to_string()))
    }

    /// The field name.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The wrapped failure.
    pub fn error(&self) -> &ValidationError {
        &self.err
    }

    /// Unwraps the failure.
    pub fn into_error(self) -> ValidationError {
        *self.err
    }
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_json(f, self, |f| write!(f, "{}: {}", self.key, self.err))
    }
}

impl StdError for KeyError {}

// ============================================================================
// ERRORS
// ============================================================================

/// Ordered failures of independent sibling checks.
///
/// An empty collection means success; see [`Errors::into_result`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Errors(Vec<ValidationError>);

impl<'de> Deserialize<'de> for Errors {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<ValidationError>::deserialize(deserializer).map(Self::from_iter)
    }
}

impl Errors {
    /// Creates an empty collection.
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a failure. Empty aggregates carry no failure and are skipped.
    pub fn push(&mut self, err: impl Into<ValidationError>) {
        let err = err.into();
        if !err.is_vacuous() {
            self.0.push(err);
        }
    }

    /// Number of failures.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when nothing failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Failure at `index`.
    pub fn get(&self, index: usize) -> Option<&ValidationError> {
        self.0.get(index)
    }

    /// Iterates failures in the order they were recorded.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// `Ok(())` when empty, otherwise the collection as an aggregate error.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::Aggregate(self))
        }
    }

    /// Unwraps the underlying vector.
    pub fn into_inner(self) -> Vec<ValidationError> {
        self.0
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_json(f, self, |f| write!(f, "{} validation errors", self.len()))
    }
}

impl StdError for Errors {}

impl<E: Into<ValidationError>> FromIterator<E> for Errors {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut errors = Self::new();
        errors.extend(iter);
        errors
    }
}

impl<E: Into<ValidationError>> Extend<E> for Errors {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for err in iter {
            self.push(err);
        }
    }
}

impl IntoIterator for Errors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ============================================================================
// INTERNAL ERROR
// ============================================================================

/// An unexpected failure: a bug, a broken invariant, an unavailable
/// dependency. Never aggregated and never translated.
#[derive(Clone)]
pub struct InternalError(Arc<dyn StdError + Send + Sync>);

impl InternalError {
    /// Wraps any error.
    pub fn new<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self(Arc::new(err))
    }

    /// Creates an internal error from a message.
    pub fn msg(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(TextError::new(message))
    }

    /// Recovers the wrapped error.
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.0.downcast_ref::<E>()
    }
}

impl fmt::Debug for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("InternalError").field(&self.0).finish()
    }
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl StdError for InternalError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl PartialEq for InternalError {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.to_string() == other.to_string()
    }
}

impl Serialize for InternalError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// Any failure produced by validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A leaf rule rejected a value.
    #[error(transparent)]
    Rule(#[from] RuleError),
    /// A rule failure rendered to text.
    #[error(transparent)]
    Translated(#[from] TranslatedError),
    /// A failure attributed to one field.
    #[error(transparent)]
    Field(#[from] KeyError),
    /// Failures of independent siblings.
    #[error(transparent)]
    Aggregate(#[from] Errors),
    /// An unexpected failure.
    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl ValidationError {
    /// Wraps any error as an internal failure.
    pub fn internal<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Internal(InternalError::new(err))
    }

    /// Returns `true` for [`ValidationError::Internal`].
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal(_))
    }

    /// Returns `true` for every variant that belongs in a validation report.
    pub const fn is_expected(&self) -> bool {
        !self.is_internal()
    }

    /// Returns `true` for an aggregate with nothing in it, which stands for
    /// success wherever it is returned.
    pub fn is_vacuous(&self) -> bool {
        matches!(self, Self::Aggregate(errs) if errs.is_empty())
    }

    /// The rule error behind a `Rule` or `Translated` failure.
    pub const fn as_rule(&self) -> Option<&RuleError> {
        match self {
            Self::Rule(err) => Some(err),
            Self::Translated(err) => err.rule(),
            _ => None,
        }
    }

    /// The field wrapper, if this is a `Field` failure.
    pub const fn as_field(&self) -> Option<&KeyError> {
        match self {
            Self::Field(err) => Some(err),
            _ => None,
        }
    }

    /// The aggregate, if this is an `Aggregate` failure.
    pub const fn as_aggregate(&self) -> Option<&Errors> {
        match self {
            Self::Aggregate(errs) => Some(errs),
            _ => None,
        }
    }

    /// Every rule error reachable from this failure, depth-first.
    pub fn rule_errors(&self) -> Vec<&RuleError> {
        let mut found = Vec::new();
        self.collect_rule_errors(&mut found);
        found
    }

    fn collect_rule_errors<'a>(&'a self, found: &mut Vec<&'a RuleError>) {
        match self {
            Self::Rule(err) => found.push(err),
            Self::Translated(err) => found.extend(err.rule()),
            Self::Field(err) => err.error().collect_rule_errors(found),
            Self::Aggregate(errs) => {
                for err in errs {
                    err.collect_rule_errors(found);
                }
            }
            Self::Internal(_) => {}
        }
    }

    /// Returns `true` when any rule error reachable from this failure has
    /// `code`.
    pub fn contains_code(&self, code: &RuleCode) -> bool {
        self.rule_errors().iter().any(|err| err.code() == code)
    }
}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Rule(err) => err.serialize(serializer),
            Self::Translated(err) => err.serialize(serializer),
            Self::Field(err) => err.serialize(serializer),
            Self::Aggregate(errs) => errs.serialize(serializer),
            Self::Internal(err) => err.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ValidationError {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Arrays are tried first: derived structs also accept sequences.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Aggregate(Errors),
            Rule(RuleError),
            Field(KeyError),
            Text(TranslatedError),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Aggregate(errs) => Self::Aggregate(errs),
            Repr::Rule(err) => Self::Rule(err),
            Repr::Field(err) => Self::Field(err),
            Repr::Text(err) => Self::Translated(err),
        })
    }
}

// ============================================================================
// TRIAGE
// ============================================================================

/// Classification of one validator result, used by the combinators that
/// collect sibling failures.
#[derive(Debug)]
pub(crate) enum Outcome {
    Passed,
    Expected(ValidationError),
    Internal(InternalError),
}

impl Outcome {
    pub(crate) fn of(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Self::Passed,
            Err(err) if err.is_vacuous() => Self::Passed,
            Err(ValidationError::Internal(err)) => Self::Internal(err),
            Err(
                err @ (ValidationError::Rule(_)
                | ValidationError::Translated(_)
                | ValidationError::Field(_)
                | ValidationError::Aggregate(_)),
            ) => Self::Expected(err),
        }
    }
}
