//! Number rules

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::codes;
use crate::foundation::{Rule, RuleError, RuleKind};
use crate::macros::impl_rule_kind;

/// Primitive numeric types number rules apply to.
///
/// The default value (`0`) counts as "not set".
pub trait Number: Copy + PartialOrd + Default + Serialize + fmt::Debug + Send + Sync + 'static {
    /// Returns `true` for the zero value.
    fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

macro_rules! impl_number {
    ($($ty:ty),+ $(,)?) => {
        $(impl Number for $ty {})+
    };
}

impl_number!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

/// Rule over numeric values.
pub struct NumberRule<N> {
    rule: Rule<N>,
}

impl_rule_kind!(NumberRule<N> => N; where N: Number);

/// Starts a number rule that accepts everything.
pub fn number<N: Number>() -> NumberRule<N> {
    NumberRule::default()
}

impl<N: Number> NumberRule<N> {
    /// Rejects zero.
    #[must_use = "rules are lazy and do nothing unless bound and validated"]
    pub fn required(self) -> Self {
        self.with_leaf(|value: &N| {
            if value.is_zero() {
                Err(RuleError::new(codes::NUMBER_REQUIRED, value))
            } else {
                Ok(())
            }
        })
    }

    /// Rejects values below `min`.
    ///
    /// Values that do not compare with `min` (a float `NaN`) are rejected
    /// too; their input is recorded as `null`.
    #[must_use = "rules are lazy and do nothing unless bound and validated"]
    pub fn min(self, min: N) -> Self {
        self.with_leaf(move |value: &N| {
            if matches!(value.partial_cmp(&min), None | Some(Ordering::Less)) {
                Err(RuleError::new(codes::NUMBER_MIN, value).with_arg(min))
            } else {
                Ok(())
            }
        })
    }

    /// Rejects values above `max`, and `NaN` like [`min`](Self::min).
    #[must_use = "rules are lazy and do nothing unless bound and validated"]
    pub fn max(self, max: N) -> Self {
        self.with_leaf(move |value: &N| {
            if matches!(value.partial_cmp(&max), None | Some(Ordering::Greater)) {
                Err(RuleError::new(codes::NUMBER_MAX, value).with_arg(max))
            } else {
                Ok(())
            }
        })
    }

    /// Rejects values that are not one of `options`.
    #[must_use = "rules are lazy and do nothing unless bound and validated"]
    pub fn one_of(self, options: impl IntoIterator<Item = N>) -> Self {
        let options: Vec<N> = options.into_iter().collect();
        self.with_leaf(move |value: &N| {
            if options.contains(value) {
                Ok(())
            } else {
                Err(RuleError::new(codes::NUMBER_IN, value).with_arg(&options))
            }
        })
    }
}
