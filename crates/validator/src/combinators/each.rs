//! EACH combinator - validates every element of a container
//!
//! Unlike a chain, `each` never stops at the first failure: every element is
//! checked and all element failures are collected, in container order, into
//! one [`Errors`]. An internal error still aborts immediately.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::BuildHasher;

use async_trait::async_trait;

use crate::foundation::{
    Builder, Check, Context, Errors, Outcome, Rule, Subject, ValidationError,
};

// ============================================================================
// ELEMENTS
// ============================================================================

/// A container whose elements can be validated one by one.
///
/// Maps expose their values; keys are not validated.
pub trait Elements: Subject {
    /// Element type.
    type Item: Subject + Clone;

    /// Borrows every element, in iteration order.
    fn elements(&self) -> Vec<&Self::Item>;
}

impl<T: Subject + Clone> Elements for Vec<T> {
    type Item = T;

    fn elements(&self) -> Vec<&T> {
        self.iter().collect()
    }
}

impl<T: Subject + Clone> Elements for VecDeque<T> {
    type Item = T;

    fn elements(&self) -> Vec<&T> {
        self.iter().collect()
    }
}

impl<K, V, S> Elements for HashMap<K, V, S>
where
    K: Subject,
    V: Subject + Clone,
    S: BuildHasher + Subject,
{
    type Item = V;

    fn elements(&self) -> Vec<&V> {
        self.values().collect()
    }
}

impl<K: Subject, V: Subject + Clone> Elements for BTreeMap<K, V> {
    type Item = V;

    fn elements(&self) -> Vec<&V> {
        self.values().collect()
    }
}

// ============================================================================
// EACH
// ============================================================================

/// Check that runs a per-element builder over every element.
pub struct Each<B> {
    builder: B,
}

impl<B> Each<B> {
    /// Creates the check.
    pub const fn new(builder: B) -> Self {
        Self { builder }
    }
}

#[async_trait]
impl<C, B> Check<C> for Each<B>
where
    C: Elements,
    B: Builder<C::Item>,
{
    async fn check(&self, ctx: &Context, values: &C) -> Result<(), ValidationError> {
        let mut errors = Errors::new();
        for value in values.elements() {
            match Outcome::of(self.builder.build(value.clone()).validate(ctx).await) {
                Outcome::Passed => {}
                Outcome::Expected(err) => errors.push(err),
                Outcome::Internal(err) => return Err(err.into()),
            }
        }
        errors.into_result()
    }
}

/// Lifts a per-element builder to a rule over a whole container.
///
/// ```rust,ignore
/// let rule = each::<Vec<i32>, _>(number::<i32>().min(0).max(5));
/// ```
pub fn each<C, B>(builder: B) -> Rule<C>
where
    C: Elements,
    B: Builder<C::Item> + 'static,
{
    Rule::new(Each::new(builder))
}
