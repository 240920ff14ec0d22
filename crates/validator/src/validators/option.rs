//! Rules over optional values

use async_trait::async_trait;
use serde_json::Value;

use crate::codes;
use crate::foundation::{
    Builder, Check, Context, Rule, RuleError, RuleKind, Subject, ValidationError,
};
use crate::macros::impl_rule_kind;

/// Rule over `Option<T>` values.
pub struct OptionRule<T> {
    rule: Rule<Option<T>>,
}

impl_rule_kind!(OptionRule<T> => Option<T>; where T: Subject + Clone);

/// Starts an optional-value rule that accepts everything.
pub fn option<T: Subject + Clone>() -> OptionRule<T> {
    OptionRule::default()
}

fn missing() -> RuleError {
    RuleError::new(codes::PTR_REQUIRED, Value::Null)
}

impl<T: Subject + Clone> OptionRule<T> {
    /// Rejects `None`.
    #[must_use = "rules are lazy and do nothing unless bound and validated"]
    pub fn required(self) -> Self {
        self.with_leaf(|value: &Option<T>| match value {
            Some(_) => Ok(()),
            None => Err(missing()),
        })
    }

    /// Validates the inner value with `builder` when present; `None` passes.
    #[must_use = "rules are lazy and do nothing unless bound and validated"]
    pub fn optional<B>(self, builder: B) -> Self
    where
        B: Builder<T> + 'static,
    {
        self.with(Rule::new(Inner {
            builder,
            required: false,
        }))
    }

    /// Validates the inner value with `builder`; `None` fails with the
    /// pointer "required" code.
    #[must_use = "rules are lazy and do nothing unless bound and validated"]
    pub fn then<B>(self, builder: B) -> Self
    where
        B: Builder<T> + 'static,
    {
        self.with(Rule::new(Inner {
            builder,
            required: true,
        }))
    }
}

struct Inner<B> {
    builder: B,
    required: bool,
}

#[async_trait]
impl<T, B> Check<Option<T>> for Inner<B>
where
    T: Subject + Clone,
    B: Builder<T>,
{
    async fn check(&self, ctx: &Context, value: &Option<T>) -> Result<(), ValidationError> {
        match value {
            Some(inner) => self.builder.build(inner.clone()).validate(ctx).await,
            None if self.required => Err(ctx.translate(missing())),
            None => Ok(()),
        }
    }
}
