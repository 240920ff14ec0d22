//! Sequence rules over `Vec<T>`

use serde::Serialize;

use crate::codes;
use crate::combinators::each;
use crate::foundation::{Builder, Rule, RuleError, RuleKind, Subject};
use crate::macros::impl_rule_kind;

/// Rule over `Vec<T>` values.
pub struct SliceRule<T> {
    rule: Rule<Vec<T>>,
}

impl_rule_kind!(SliceRule<T> => Vec<T>; where T: Subject + Serialize);

/// Starts a sequence rule that accepts everything.
pub fn slice<T: Subject + Serialize>() -> SliceRule<T> {
    SliceRule::default()
}

impl<T: Subject + Serialize> SliceRule<T> {
    /// Rejects empty sequences.
    #[must_use = "rules are lazy and do nothing unless bound and validated"]
    pub fn required(self) -> Self {
        self.with_leaf(|values: &Vec<T>| {
            if values.is_empty() {
                Err(RuleError::new(codes::SLICE_REQUIRED, values))
            } else {
                Ok(())
            }
        })
    }

    /// Rejects sequences with fewer than `min` elements.
    #[must_use = "rules are lazy and do nothing unless bound and validated"]
    pub fn min(self, min: usize) -> Self {
        self.with_leaf(move |values: &Vec<T>| {
            if values.len() < min {
                Err(RuleError::new(codes::SLICE_MIN, values).with_arg(min))
            } else {
                Ok(())
            }
        })
    }

    /// Rejects sequences with more than `max` elements.
    #[must_use = "rules are lazy and do nothing unless bound and validated"]
    pub fn max(self, max: usize) -> Self {
        self.with_leaf(move |values: &Vec<T>| {
            if values.len() > max {
                Err(RuleError::new(codes::SLICE_MAX, values).with_arg(max))
            } else {
                Ok(())
            }
        })
    }

    /// Validates every element with `builder`, collecting all failures.
    #[must_use = "rules are lazy and do nothing unless bound and validated"]
    pub fn each<B>(self, builder: B) -> Self
    where
        T: Clone,
        B: Builder<T> + 'static,
    {
        self.with(each(builder))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Context, ValidationError};
    use crate::validators::number;
    use serde_json::json;

    #[tokio::test]
    async fn test_required_min_max() {
        let ctx = Context::new();
        let rule = slice::<u8>().required().min(2).max(3);

        let code = |result: Result<(), ValidationError>| {
            result.err().and_then(|err| err.as_rule().map(|rule| rule.code().clone()))
        };
        assert_eq!(code(rule.validate(&ctx, &vec![]).await), Some(codes::SLICE_REQUIRED));
        assert_eq!(code(rule.validate(&ctx, &vec![1]).await), Some(codes::SLICE_MIN));
        assert_eq!(code(rule.validate(&ctx, &vec![1, 2]).await), None);
        assert_eq!(code(rule.validate(&ctx, &vec![1, 2, 3, 4]).await), Some(codes::SLICE_MAX));
    }

    #[tokio::test]
    async fn test_each_reports_failing_elements() {
        let ctx = Context::new();
        let rule = slice::<i32>().each(number::<i32>().min(0).max(5));

        let err = rule.validate(&ctx, &vec![-1, 3, 9]).await.unwrap_err();
        let errors = err.as_aggregate().unwrap();
        assert_eq!(errors.len(), 2);
        let inputs: Vec<_> = errors
            .iter()
            .filter_map(ValidationError::as_rule)
            .map(|rule| rule.input().clone())
            .collect();
        assert_eq!(inputs, vec![json!(-1), json!(9)]);
    }

    #[tokio::test]
    async fn test_each_runs_after_length_checks() {
        let ctx = Context::new();
        let rule = slice::<i32>().required().each(number::<i32>().required());
        let err = rule.validate(&ctx, &vec![]).await.unwrap_err();
        assert!(err.contains_code(&codes::SLICE_REQUIRED));
    }
}
