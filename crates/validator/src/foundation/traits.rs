//! Core traits
//!
//! - [`Check`] inspects a borrowed value: one link of a rule chain.
//! - [`Validator`] is a check already bound to its value, waiting to run.
//! - [`Builder`] binds values to a rule, turning one rule definition into
//!   any number of validators.

use std::future::Future;
use std::marker::PhantomData;

use async_trait::async_trait;

use super::context::Context;
use super::error::ValidationError;

/// Anything that can be validated: owned, thread-safe data.
pub trait Subject: Send + Sync + 'static {}

impl<T: Send + Sync + 'static> Subject for T {}

// ============================================================================
// CHECK
// ============================================================================

/// One step of a rule chain.
///
/// Implementations must not mutate the value and may run any number of
/// times.
#[async_trait]
pub trait Check<T>: Send + Sync {
    /// Inspects `value`.
    async fn check(&self, ctx: &Context, value: &T) -> Result<(), ValidationError>;
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// A deferred validation: nothing runs until [`validate`](Self::validate)
/// is awaited. Validators are stateless and can be run repeatedly.
#[async_trait]
pub trait Validator: Send + Sync {
    /// Runs the validation now.
    async fn validate(&self, ctx: &Context) -> Result<(), ValidationError>;
}

/// Type-erased validator, the unit [`execute`](crate::combinators::execute)
/// works with.
pub type BoxValidator = Box<dyn Validator>;

#[async_trait]
impl<V: Validator + ?Sized> Validator for Box<V> {
    async fn validate(&self, ctx: &Context) -> Result<(), ValidationError> {
        (**self).validate(ctx).await
    }
}

/// Validator backed by an async closure. Created by [`validator_fn`].
pub struct FnValidator<F> {
    f: F,
}

#[async_trait]
impl<F, Fut> Validator for FnValidator<F>
where
    F: Fn(Context) -> Fut + Send + Sync,
    Fut: Future<Output = Result<(), ValidationError>> + Send + 'static,
{
    async fn validate(&self, ctx: &Context) -> Result<(), ValidationError> {
        (self.f)(ctx.clone()).await
    }
}

/// Wraps an async closure as a validator.
///
/// ```rust,ignore
/// let always_fails = validator_fn(|_ctx| async {
///     Err(ValidationError::from(InternalError::msg("database unavailable")))
/// });
/// ```
pub fn validator_fn<F, Fut>(f: F) -> BoxValidator
where
    F: Fn(Context) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), ValidationError>> + Send + 'static,
{
    Box::new(FnValidator { f })
}

// ============================================================================
// BUILDER
// ============================================================================

/// Binds values of type `T` to a rule.
///
/// Every rule type implements this; see
/// [`RuleKind`](super::RuleKind).
pub trait Builder<T>: Send + Sync {
    /// Binds `value`. Nothing executes yet.
    fn build(&self, value: T) -> BoxValidator;
}

/// Builder backed by a closure. Created by [`builder_fn`].
pub struct FnBuilder<T, F> {
    f: F,
    _value: PhantomData<fn(T)>,
}

impl<T, F> Builder<T> for FnBuilder<T, F>
where
    F: Fn(T) -> BoxValidator + Send + Sync,
{
    fn build(&self, value: T) -> BoxValidator {
        (self.f)(value)
    }
}

/// Wraps a closure as a builder.
pub fn builder_fn<T, F>(f: F) -> FnBuilder<T, F>
where
    F: Fn(T) -> BoxValidator + Send + Sync,
{
    FnBuilder {
        f,
        _value: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::InternalError;

    #[tokio::test]
    async fn test_validator_fn_runs_on_every_call() {
        let validator = validator_fn(|ctx: Context| async move {
            if ctx.language() == Some("en") {
                Ok(())
            } else {
                Err(ValidationError::from(InternalError::msg("no language")))
            }
        });

        assert!(validator.validate(&Context::new()).await.is_err());
        let en = Context::new().with_language("en");
        assert!(validator.validate(&en).await.is_ok());
        assert!(validator.validate(&en).await.is_ok());
    }

    #[tokio::test]
    async fn test_builder_fn_defers_until_validate() {
        let builder = builder_fn(|value: u8| {
            validator_fn(move |_ctx| async move {
                if value > 1 {
                    Ok(())
                } else {
                    Err(ValidationError::from(InternalError::msg("too small")))
                }
            })
        });

        let ctx = Context::new();
        assert!(builder.build(2).validate(&ctx).await.is_ok());
        assert!(builder.build(0).validate(&ctx).await.is_err());
    }
}
