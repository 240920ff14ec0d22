//! Macros for declaring rule codes and rule kinds with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule_codes!`]: declare a family of rule codes and its registry table
//! - `impl_rule_kind!` (crate-internal): wire a typed wrapper to [`Rule`](crate::foundation::Rule)
//!
//! # Examples
//!
//! ```rust,ignore
//! mod billing_codes {
//!     rulebook::rule_codes! {
//!         family = "billing";
//!         /// Invoice total must be positive.
//!         TOTAL_POSITIVE = (3100, "billing.total_positive", 0);
//!         /// Currency must be one of the allowed options.
//!         CURRENCY_IN = (2100, "billing.currency_in", 1);
//!     }
//! }
//! ```

// ============================================================================
// RULE CODES MACRO
// ============================================================================

/// Declares rule codes of one family plus a `TABLE` listing every code with
/// its translation template key and argument count.
///
/// Expands to one `pub const` per code and a `pub static TABLE: &[CodeSpec]`
/// in the invoking module. Register the table with a
/// [`BundleTranslator`](crate::translate::BundleTranslator) through
/// `with_codes(TABLE)` to translate the family.
///
/// ```rust,ignore
/// rule_codes! {
///     family = "billing";
///     TOTAL_POSITIVE = (3100, "billing.total_positive", 0);
/// }
///
/// assert_eq!(TOTAL_POSITIVE.family(), "billing");
/// assert_eq!(TABLE[0].template_key, "billing.total_positive");
/// ```
#[macro_export]
macro_rules! rule_codes {
    (
        family = $family:expr;
        $(
            $(#[$meta:meta])*
            $name:ident = ($value:expr, $key:literal, $arity:literal);
        )+
    ) => {
        $(
            $(#[$meta])*
            pub const $name: $crate::foundation::RuleCode =
                $crate::foundation::RuleCode::new($family, $value);
        )+

        /// Every code declared in this module with its template key and arity.
        pub static TABLE: &[$crate::foundation::CodeSpec] = &[
            $( $crate::foundation::CodeSpec::new($name, $key, $arity), )+
        ];
    };
}

// ============================================================================
// RULE KIND MACRO
// ============================================================================

/// Implements [`RuleKind`](crate::foundation::RuleKind), `Clone`, `Default`
/// and `Debug` for a wrapper struct with a single `rule` field.
///
/// ```rust,ignore
/// impl_rule_kind!(StringRule => String);
/// impl_rule_kind!(NumberRule<N> => N; where N: Number);
/// ```
macro_rules! impl_rule_kind {
    (
        $kind:ident $(<$($generic:ident),+>)? => $value:ty
        $(; where $($bounds:tt)+)?
    ) => {
        impl<$($($generic),+)?> $crate::foundation::RuleKind for $kind<$($($generic),+)?>
        where
            $($($bounds)+)?
        {
            type Value = $value;

            fn rule(&self) -> &$crate::foundation::Rule<$value> {
                &self.rule
            }

            fn from_rule(rule: $crate::foundation::Rule<$value>) -> Self {
                Self { rule }
            }

            fn into_rule(self) -> $crate::foundation::Rule<$value> {
                self.rule
            }
        }

        impl<$($($generic),+)?> Clone for $kind<$($($generic),+)?>
        where
            $($($bounds)+)?
        {
            fn clone(&self) -> Self {
                Self {
                    rule: self.rule.clone(),
                }
            }
        }

        impl<$($($generic),+)?> Default for $kind<$($($generic),+)?>
        where
            $($($bounds)+)?
        {
            fn default() -> Self {
                Self {
                    rule: $crate::foundation::Rule::nop(),
                }
            }
        }

        impl<$($($generic),+)?> ::std::fmt::Debug for $kind<$($($generic),+)?>
        where
            $($($bounds)+)?
        {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(stringify!($kind))
                    .field("rule", &self.rule)
                    .finish()
            }
        }
    };
}

pub(crate) use impl_rule_kind;

#[cfg(test)]
mod tests {
    mod sample_codes {
        crate::rule_codes! {
            family = "sample";
            /// First.
            FIRST = (2100, "sample.first", 0);
            SECOND = (2101, "sample.second", 1);
        }
    }

    #[test]
    fn test_rule_codes_declares_consts_and_table() {
        use sample_codes::{FIRST, SECOND, TABLE};

        assert_eq!(FIRST.family(), "sample");
        assert_eq!(SECOND.value(), 2101);
        assert_eq!(TABLE.len(), 2);
        assert_eq!(TABLE[1].code, SECOND);
        assert_eq!(TABLE[1].template_key, "sample.second");
        assert_eq!(TABLE[1].arity, 1);
    }
}
