//! Map rules over `HashMap` and `BTreeMap`

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde::Serialize;

use crate::codes;
use crate::combinators::{Elements, each};
use crate::foundation::{Builder, Rule, RuleError, RuleKind, Subject};
use crate::macros::impl_rule_kind;

/// Maps that map rules apply to.
pub trait MapLike: Elements + Serialize {
    /// Number of entries.
    fn entry_count(&self) -> usize;
}

impl<K, V, S> MapLike for HashMap<K, V, S>
where
    K: Subject + Serialize,
    V: Subject + Clone + Serialize,
    S: BuildHasher + Subject,
{
    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl<K, V> MapLike for BTreeMap<K, V>
where
    K: Subject + Serialize,
    V: Subject + Clone + Serialize,
{
    fn entry_count(&self) -> usize {
        self.len()
    }
}

/// Rule over map values.
pub struct MapRule<M> {
    rule: Rule<M>,
}

impl_rule_kind!(MapRule<M> => M; where M: MapLike);

/// Starts a map rule that accepts everything.
///
/// ```rust,ignore
/// let rule = map::<HashMap<String, String>>().required().each(string().required());
/// ```
pub fn map<M: MapLike>() -> MapRule<M> {
    MapRule::default()
}

impl<M: MapLike> MapRule<M> {
    /// Rejects empty maps.
    #[must_use = "rules are lazy and do nothing unless bound and validated"]
    pub fn required(self) -> Self {
        self.with_leaf(|values: &M| {
            if values.entry_count() == 0 {
                Err(RuleError::new(codes::MAP_REQUIRED, values))
            } else {
                Ok(())
            }
        })
    }

    /// Rejects maps with fewer than `min` entries.
    #[must_use = "rules are lazy and do nothing unless bound and validated"]
    pub fn min(self, min: usize) -> Self {
        self.with_leaf(move |values: &M| {
            if values.entry_count() < min {
                Err(RuleError::new(codes::MAP_MIN, values).with_arg(min))
            } else {
                Ok(())
            }
        })
    }

    /// Rejects maps with more than `max` entries.
    #[must_use = "rules are lazy and do nothing unless bound and validated"]
    pub fn max(self, max: usize) -> Self {
        self.with_leaf(move |values: &M| {
            if values.entry_count() > max {
                Err(RuleError::new(codes::MAP_MAX, values).with_arg(max))
            } else {
                Ok(())
            }
        })
    }

    /// Validates every value with `builder`, collecting all failures.
    #[must_use = "rules are lazy and do nothing unless bound and validated"]
    pub fn each<B>(self, builder: B) -> Self
    where
        B: Builder<M::Item> + 'static,
    {
        self.with(each(builder))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Context;
    use crate::validators::string;
    use serde_json::json;

    type Tags = BTreeMap<String, String>;

    fn tags(entries: &[(&str, &str)]) -> Tags {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[tokio::test]
    async fn test_required_min_max() {
        let ctx = Context::new();
        let rule = map::<Tags>().required().max(1);

        let err = rule.validate(&ctx, &Tags::new()).await.unwrap_err();
        assert!(err.contains_code(&codes::MAP_REQUIRED));

        let two = tags(&[("a", "1"), ("b", "2")]);
        let err = rule.validate(&ctx, &two).await.unwrap_err();
        let rule_err = err.as_rule().unwrap();
        assert_eq!(rule_err.code(), &codes::MAP_MAX);
        assert_eq!(rule_err.input(), &json!({"a": "1", "b": "2"}));
        assert_eq!(rule_err.args(), &[json!(1)]);

        let min = map::<Tags>().min(2);
        assert!(min.validate(&ctx, &two).await.is_ok());
    }

    #[tokio::test]
    async fn test_each_validates_values() {
        let ctx = Context::new();
        let rule = map::<HashMap<String, String>>()
            .required()
            .each(string().required());

        let mut values = HashMap::new();
        values.insert("size".to_owned(), "L".to_owned());
        values.insert("color".to_owned(), String::new());

        let err = rule.validate(&ctx, &values).await.unwrap_err();
        assert_eq!(err.as_aggregate().map(|errors| errors.len()), Some(1));
        assert!(err.contains_code(&codes::STRING_REQUIRED));
    }
}
