//! Field attribution
//!
//! [`named`] binds a value to a rule and tags its failure with a field name;
//! [`bind`] does the same without a name.

use std::borrow::Cow;

use async_trait::async_trait;

use crate::foundation::{
    BoxValidator, Builder, Context, KeyError, Outcome, ValidationError, Validator,
};

/// Validator that wraps its child's expected failures in a [`KeyError`].
pub struct Named {
    key: Cow<'static, str>,
    inner: BoxValidator,
}

impl Named {
    /// Tags `inner` with `key`.
    pub fn new(key: impl Into<Cow<'static, str>>, inner: BoxValidator) -> Self {
        Self {
            key: key.into(),
            inner,
        }
    }

    /// The field name.
    pub fn key(&self) -> &str {
        &self.key
    }
}

#[async_trait]
impl Validator for Named {
    async fn validate(&self, ctx: &Context) -> Result<(), ValidationError> {
        match Outcome::of(self.inner.validate(ctx).await) {
            Outcome::Passed => Ok(()),
            Outcome::Expected(err) => Err(KeyError::new(self.key.clone(), err).into()),
            Outcome::Internal(err) => Err(err.into()),
        }
    }
}

/// Binds `value` to `builder` under the field name `key`.
///
/// Only the direct child's failure is wrapped; nested keys stay nested.
/// Internal errors are never wrapped.
///
/// # Examples
///
/// ```rust,ignore
/// let v = named("email", "", string().required());
/// // fails with {"key": "email", "err": {"code": 2001, "input": ""}}
/// ```
pub fn named<T, B>(
    key: impl Into<Cow<'static, str>>,
    value: impl Into<T>,
    builder: B,
) -> BoxValidator
where
    B: Builder<T>,
{
    Box::new(Named::new(key, builder.build(value.into())))
}

/// Binds `value` to `builder` without a field name.
pub fn bind<T, B>(value: impl Into<T>, builder: B) -> BoxValidator
where
    B: Builder<T>,
{
    builder.build(value.into())
}
