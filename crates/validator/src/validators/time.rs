//! Timestamp rules over `chrono::DateTime<Utc>`

use chrono::{DateTime, Utc};

use crate::codes;
use crate::foundation::{Rule, RuleError, RuleKind};
use crate::macros::impl_rule_kind;

/// Rule over UTC timestamps.
pub struct TimeRule {
    rule: Rule<DateTime<Utc>>,
}

impl_rule_kind!(TimeRule => DateTime<Utc>);

/// Starts a timestamp rule that accepts everything.
pub fn time() -> TimeRule {
    TimeRule::default()
}

impl TimeRule {
    /// Rejects the zero timestamp (the Unix epoch, `DateTime::default()`).
    #[must_use = "rules are lazy and do nothing unless bound and validated"]
    pub fn required(self) -> Self {
        self.with_leaf(|value: &DateTime<Utc>| {
            if *value == DateTime::<Utc>::default() {
                Err(RuleError::new(codes::TIME_REQUIRED, value))
            } else {
                Ok(())
            }
        })
    }

    /// Rejects timestamps before `min`.
    #[must_use = "rules are lazy and do nothing unless bound and validated"]
    pub fn min(self, min: DateTime<Utc>) -> Self {
        self.with_leaf(move |value: &DateTime<Utc>| {
            if *value < min {
                Err(RuleError::new(codes::TIME_MIN, value).with_arg(min))
            } else {
                Ok(())
            }
        })
    }

    /// Rejects timestamps after `max`.
    #[must_use = "rules are lazy and do nothing unless bound and validated"]
    pub fn max(self, max: DateTime<Utc>) -> Self {
        self.with_leaf(move |value: &DateTime<Utc>| {
            if *value > max {
                Err(RuleError::new(codes::TIME_MAX, value).with_arg(max))
            } else {
                Ok(())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Context;
    use chrono::TimeZone;
    use serde_json::json;

    fn at(year: i32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_required_rejects_zero_time() {
        let ctx = Context::new();
        let rule = time().required();
        let err = rule.validate(&ctx, &DateTime::default()).await.unwrap_err();
        assert!(err.contains_code(&codes::TIME_REQUIRED));
        assert!(rule.validate(&ctx, &at(2024)).await.is_ok());
    }

    #[tokio::test]
    async fn test_bounds() {
        let ctx = Context::new();
        let rule = time().min(at(2000)).max(at(2030));

        assert!(rule.validate(&ctx, &at(2024)).await.is_ok());

        let err = rule.validate(&ctx, &at(1999)).await.unwrap_err();
        let rule_err = err.as_rule().unwrap();
        assert_eq!(rule_err.code(), &codes::TIME_MIN);
        assert_eq!(rule_err.args(), &[json!("2000-01-01T00:00:00Z")]);

        let err = rule.validate(&ctx, &at(2031)).await.unwrap_err();
        assert!(err.contains_code(&codes::TIME_MAX));
    }
}
