//! String rules
//!
//! Lengths are counted in Unicode scalar values, not bytes.

use crate::codes;
use crate::foundation::{Context, InternalError, Rule, RuleError, RuleKind};
use crate::macros::impl_rule_kind;

use super::pattern::Pattern;

/// Rule over `String` values.
pub struct StringRule {
    rule: Rule<String>,
}

impl_rule_kind!(StringRule => String);

/// Starts a string rule that accepts everything.
pub fn string() -> StringRule {
    StringRule::default()
}

impl StringRule {
    /// Rejects the empty string.
    #[must_use = "rules are lazy and do nothing unless bound and validated"]
    pub fn required(self) -> Self {
        self.with_leaf(|value: &String| {
            if value.is_empty() {
                Err(RuleError::new(codes::STRING_REQUIRED, value))
            } else {
                Ok(())
            }
        })
    }

    /// Rejects strings shorter than `min` characters.
    #[must_use = "rules are lazy and do nothing unless bound and validated"]
    pub fn min(self, min: usize) -> Self {
        self.with_leaf(move |value: &String| {
            if value.chars().count() < min {
                Err(RuleError::new(codes::STRING_MIN, value).with_arg(min))
            } else {
                Ok(())
            }
        })
    }

    /// Rejects strings longer than `max` characters.
    #[must_use = "rules are lazy and do nothing unless bound and validated"]
    pub fn max(self, max: usize) -> Self {
        self.with_leaf(move |value: &String| {
            if value.chars().count() > max {
                Err(RuleError::new(codes::STRING_MAX, value).with_arg(max))
            } else {
                Ok(())
            }
        })
    }

    /// Rejects strings that do not match `pattern`.
    ///
    /// A pattern that fails to compile is an internal error, not a rule
    /// failure.
    #[must_use = "rules are lazy and do nothing unless bound and validated"]
    pub fn matches<P>(self, pattern: P) -> Self
    where
        P: Pattern + 'static,
    {
        self.with(Rule::custom(move |_ctx: &Context, value: &String| {
            let regex = pattern.regex().map_err(InternalError::new)?;
            if regex.is_match(value) {
                Ok(())
            } else {
                Err(RuleError::new(codes::STRING_MATCH, value)
                    .with_arg(pattern.as_str())
                    .into())
            }
        }))
    }

    /// Rejects strings that are not exactly one of `options`.
    #[must_use = "rules are lazy and do nothing unless bound and validated"]
    pub fn one_of<I, S>(self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        self.with_leaf(move |value: &String| {
            if options.contains(value) {
                Ok(())
            } else {
                Err(RuleError::new(codes::STRING_IN, value).with_arg(&options))
            }
        })
    }

    /// Like [`one_of`](Self::one_of), ignoring case.
    #[must_use = "rules are lazy and do nothing unless bound and validated"]
    pub fn one_of_fold<I, S>(self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        let folded: Vec<String> = options.iter().map(|option| option.to_lowercase()).collect();
        self.with_leaf(move |value: &String| {
            let value_folded = value.to_lowercase();
            if folded.contains(&value_folded) {
                Ok(())
            } else {
                Err(RuleError::new(codes::STRING_IN_FOLD, value).with_arg(&options))
            }
        })
    }
}
