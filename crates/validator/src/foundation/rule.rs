//! Rule composition
//!
//! A [`Rule<T>`] is an immutable, fail-fast chain of [`Check`]s over values
//! of type `T`. Rules form a monoid: [`Rule::nop`] is the identity and
//! [`Rule::chain`] is associative, so every modifier on a typed rule
//! (`required`, `min`, `matches`, ...) is just a chain with one more link.
//!
//! [`RuleKind`] lifts that composition to the per-kind wrappers
//! ([`StringRule`](crate::validators::StringRule) and friends) without
//! repeating it in each of them.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;

use super::context::Context;
use super::error::{RuleError, ValidationError};
use super::traits::{BoxValidator, Builder, Check, Subject, Validator};

// ============================================================================
// RULE
// ============================================================================

/// A composable chain of checks over `T`.
///
/// Cloning is cheap: links are shared.
///
/// # Examples
///
/// ```rust,ignore
/// use rulebook::prelude::*;
///
/// let even = Rule::<i64>::leaf(|n| {
///     if n % 2 == 0 { Ok(()) } else { Err(RuleError::new(MY_EVEN, n)) }
/// });
/// let rule = number::<i64>().required().with(even);
/// ```
pub struct Rule<T> {
    link: Option<Arc<dyn Check<T>>>,
}

impl<T> Clone for Rule<T> {
    fn clone(&self) -> Self {
        Self {
            link: self.link.clone(),
        }
    }
}

impl<T> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("nop", &self.link.is_none())
            .finish()
    }
}

impl<T: Subject> Default for Rule<T> {
    fn default() -> Self {
        Self::nop()
    }
}

impl<T: Subject> Rule<T> {
    /// The rule that accepts everything.
    pub const fn nop() -> Self {
        Self { link: None }
    }

    /// A rule with a single link.
    pub fn new<C>(check: C) -> Self
    where
        C: Check<T> + 'static,
    {
        Self {
            link: Some(Arc::new(check)),
        }
    }

    /// A leaf rule from a pure predicate.
    ///
    /// A returned [`RuleError`] is passed through the context's translator
    /// exactly once, here.
    pub fn leaf<F>(f: F) -> Self
    where
        F: Fn(&T) -> Result<(), RuleError> + Send + Sync + 'static,
    {
        Self::new(Leaf(f))
    }

    /// A rule from an arbitrary function.
    ///
    /// `Rule` failures are translated like [`leaf`](Self::leaf) failures;
    /// any other error is returned untouched.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&Context, &T) -> Result<(), ValidationError> + Send + Sync + 'static,
    {
        Self::new(Custom(f))
    }

    /// Runs `self`, then `next` only if `self` passed.
    #[must_use = "rules are lazy and do nothing unless bound and validated"]
    pub fn chain(self, next: Self) -> Self {
        match (self.link, next.link) {
            (None, link) | (link, None) => Self { link },
            (Some(first), Some(second)) => Self::new(Chain { first, second }),
        }
    }

    /// Runs `then` when `predicate` holds for the value, `otherwise` when it
    /// does not.
    pub fn branch<P>(predicate: P, then: Self, otherwise: Self) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::new(Branch {
            predicate,
            then,
            otherwise,
        })
    }

    /// Returns `true` for the identity rule.
    pub const fn is_nop(&self) -> bool {
        self.link.is_none()
    }

    /// Runs the chain against `value`.
    pub async fn check(&self, ctx: &Context, value: &T) -> Result<(), ValidationError> {
        match &self.link {
            None => Ok(()),
            Some(link) => link.check(ctx, value).await,
        }
    }
}

// ============================================================================
// LINKS
// ============================================================================

struct Leaf<F>(F);

#[async_trait]
impl<T, F> Check<T> for Leaf<F>
where
    T: Subject,
    F: Fn(&T) -> Result<(), RuleError> + Send + Sync,
{
    async fn check(&self, ctx: &Context, value: &T) -> Result<(), ValidationError> {
        (self.0)(value).map_err(|err| ctx.translate(err))
    }
}

struct Custom<F>(F);

#[async_trait]
impl<T, F> Check<T> for Custom<F>
where
    T: Subject,
    F: Fn(&Context, &T) -> Result<(), ValidationError> + Send + Sync,
{
    async fn check(&self, ctx: &Context, value: &T) -> Result<(), ValidationError> {
        match (self.0)(ctx, value) {
            Err(ValidationError::Rule(err)) => Err(ctx.translate(err)),
            Err(err) if err.is_vacuous() => Ok(()),
            other => other,
        }
    }
}

struct Chain<T> {
    first: Arc<dyn Check<T>>,
    second: Arc<dyn Check<T>>,
}

#[async_trait]
impl<T: Subject> Check<T> for Chain<T> {
    async fn check(&self, ctx: &Context, value: &T) -> Result<(), ValidationError> {
        self.first.check(ctx, value).await?;
        self.second.check(ctx, value).await
    }
}

struct Branch<T, P> {
    predicate: P,
    then: Rule<T>,
    otherwise: Rule<T>,
}

#[async_trait]
impl<T, P> Check<T> for Branch<T, P>
where
    T: Subject,
    P: Fn(&T) -> bool + Send + Sync,
{
    async fn check(&self, ctx: &Context, value: &T) -> Result<(), ValidationError> {
        if (self.predicate)(value) {
            self.then.check(ctx, value).await
        } else {
            self.otherwise.check(ctx, value).await
        }
    }
}

/// A rule bound to a value.
struct Bound<T> {
    rule: Rule<T>,
    value: T,
}

#[async_trait]
impl<T: Subject> Validator for Bound<T> {
    async fn validate(&self, ctx: &Context) -> Result<(), ValidationError> {
        self.rule.check(ctx, &self.value).await
    }
}

// ============================================================================
// RULE KIND
// ============================================================================

/// A typed wrapper around a [`Rule`].
///
/// Implementors only provide the conversions; chaining, conditional
/// branching and binding come for free.
pub trait RuleKind: Sized + Send + Sync + 'static {
    /// The validated type.
    type Value: Subject;

    /// The wrapped rule.
    fn rule(&self) -> &Rule<Self::Value>;

    /// Wraps a rule.
    fn from_rule(rule: Rule<Self::Value>) -> Self;

    /// Unwraps the rule.
    fn into_rule(self) -> Rule<Self::Value>;

    /// Chains an arbitrary rule after this one.
    #[must_use = "rules are lazy and do nothing unless bound and validated"]
    fn with(self, next: Rule<Self::Value>) -> Self {
        Self::from_rule(self.into_rule().chain(next))
    }

    /// Chains a leaf predicate after this one.
    #[must_use = "rules are lazy and do nothing unless bound and validated"]
    fn with_leaf<F>(self, f: F) -> Self
    where
        F: Fn(&Self::Value) -> Result<(), RuleError> + Send + Sync + 'static,
    {
        self.with(Rule::leaf(f))
    }

    /// Applies `extend` only for values matching `predicate`.
    ///
    /// `extend` receives the rule built so far and returns the rule used
    /// when the predicate holds; otherwise the rule built so far runs alone.
    ///
    /// ```rust,ignore
    /// let code = string()
    ///     .required()
    ///     .when(|s| s.starts_with("0x"), |r| r.matches(&patterns::HEXADECIMAL));
    /// ```
    #[must_use = "rules are lazy and do nothing unless bound and validated"]
    fn when<P, E>(self, predicate: P, extend: E) -> Self
    where
        P: Fn(&Self::Value) -> bool + Send + Sync + 'static,
        E: FnOnce(Self) -> Self,
    {
        let otherwise = self.rule().clone();
        let then = extend(self).into_rule();
        Self::from_rule(Rule::branch(predicate, then, otherwise))
    }

    /// Checks `value` directly, without binding it first.
    fn validate<'a>(
        &'a self,
        ctx: &'a Context,
        value: &'a Self::Value,
    ) -> BoxFuture<'a, Result<(), ValidationError>> {
        Box::pin(self.rule().check(ctx, value))
    }
}

impl<T: Subject> RuleKind for Rule<T> {
    type Value = T;

    fn rule(&self) -> &Rule<T> {
        self
    }

    fn from_rule(rule: Rule<T>) -> Self {
        rule
    }

    fn into_rule(self) -> Rule<T> {
        self
    }
}

impl<K: RuleKind> Builder<K::Value> for K {
    fn build(&self, value: K::Value) -> BoxValidator {
        Box::new(Bound {
            rule: self.rule().clone(),
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Errors, InternalError, RuleCode};
    use std::sync::atomic::{AtomicUsize, Ordering};

    const TOO_SMALL: RuleCode = RuleCode::new("test", 1);
    const ODD: RuleCode = RuleCode::new("test", 2);

    fn at_least(min: i32) -> Rule<i32> {
        Rule::leaf(move |n: &i32| {
            if *n >= min {
                Ok(())
            } else {
                Err(RuleError::new(TOO_SMALL, n).with_arg(min))
            }
        })
    }

    fn even() -> Rule<i32> {
        Rule::leaf(|n: &i32| {
            if n % 2 == 0 {
                Ok(())
            } else {
                Err(RuleError::new(ODD, n))
            }
        })
    }

    fn counting(counter: Arc<AtomicUsize>) -> Rule<i32> {
        Rule::custom(move |_ctx: &Context, _n: &i32| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
    }

    #[tokio::test]
    async fn test_nop_accepts_everything() {
        let ctx = Context::new();
        assert!(Rule::<i32>::nop().is_nop());
        assert!(Rule::<i32>::nop().check(&ctx, &-1).await.is_ok());
    }

    #[tokio::test]
    async fn test_chain_with_nop_is_identity() {
        let ctx = Context::new();
        let left = Rule::nop().chain(at_least(3));
        let right = at_least(3).chain(Rule::nop());
        assert!(!left.is_nop());
        assert_eq!(left.check(&ctx, &1).await, right.check(&ctx, &1).await);
        assert_eq!(left.check(&ctx, &5).await, Ok(()));
    }

    #[tokio::test]
    async fn test_chain_short_circuits() {
        let ctx = Context::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let rule = at_least(3).chain(counting(calls.clone()));

        let err = rule.check(&ctx, &1).await.unwrap_err();
        assert_eq!(err.as_rule().map(RuleError::code), Some(&TOO_SMALL));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        rule.check(&ctx, &4).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_chain_is_associative() {
        let ctx = Context::new();
        let grouped_left = at_least(0).chain(even()).chain(at_least(10));
        let grouped_right = at_least(0).chain(even().chain(at_least(10)));

        for n in [-3, -2, 3, 4, 11, 12] {
            assert_eq!(
                grouped_left.check(&ctx, &n).await,
                grouped_right.check(&ctx, &n).await,
                "n = {n}"
            );
        }
    }

    #[tokio::test]
    async fn test_custom_passes_internal_errors_through() {
        let ctx = Context::new();
        let rule = Rule::custom(|_ctx: &Context, _n: &i32| Err(InternalError::msg("broken").into()));
        let err = rule.check(&ctx, &1).await.unwrap_err();
        assert!(err.is_internal());
    }

    #[tokio::test]
    async fn test_custom_empty_aggregate_passes_and_continues() {
        let ctx = Context::new();
        let rule = Rule::custom(|_ctx: &Context, _n: &i32| Err(Errors::new().into())).chain(even());
        assert_eq!(rule.check(&ctx, &2).await, Ok(()));
        assert!(rule.check(&ctx, &3).await.unwrap_err().contains_code(&ODD));
    }

    #[tokio::test]
    async fn test_when_extends_only_matching_values() {
        let ctx = Context::new();
        let rule = at_least(0).when(|n: &i32| *n > 100, |r| r.chain(even()));

        assert!(rule.check(&ctx, &-1).await.is_err());
        assert!(rule.check(&ctx, &7).await.is_ok());
        assert!(rule.check(&ctx, &102).await.is_ok());
        let err = rule.check(&ctx, &101).await.unwrap_err();
        assert!(err.contains_code(&ODD));
    }

    #[tokio::test]
    async fn test_build_defers_and_rebinds() {
        let ctx = Context::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let rule = counting(calls.clone());

        let first = rule.build(1);
        let second = rule.build(2);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        first.validate(&ctx).await.unwrap();
        first.validate(&ctx).await.unwrap();
        second.validate(&ctx).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
