//! Built-in rule codes
//!
//! One band per subject kind; see [`Band`]. Codes never move once
//! published: new rules take the next free value in their band.

use crate::foundation::{BUILTIN_FAMILY, Band, CodeSpec, RuleCode};

crate::rule_codes! {
    family = BUILTIN_FAMILY;

    /// `None` where a value is required.
    PTR_REQUIRED = (Band::Pointer.base() + 1, "pointers.required", 0);

    /// Empty string.
    STRING_REQUIRED = (Band::String.base() + 1, "strings.required", 0);
    /// Fewer characters than allowed. Args: `[min]`.
    STRING_MIN = (Band::String.base() + 2, "strings.min", 1);
    /// More characters than allowed. Args: `[max]`.
    STRING_MAX = (Band::String.base() + 3, "strings.max", 1);
    /// Pattern mismatch. Args: `[pattern]`.
    STRING_MATCH = (Band::String.base() + 4, "strings.match", 1);
    /// Not one of the options. Args: `[options]`.
    STRING_IN = (Band::String.base() + 5, "strings.in", 1);
    /// Not one of the options, ignoring case. Args: `[options]`.
    STRING_IN_FOLD = (Band::String.base() + 6, "strings.in_fold", 1);

    /// Zero.
    NUMBER_REQUIRED = (Band::Number.base() + 1, "numbers.required", 0);
    /// Below the minimum. Args: `[min]`.
    NUMBER_MIN = (Band::Number.base() + 2, "numbers.min", 1);
    /// Above the maximum. Args: `[max]`.
    NUMBER_MAX = (Band::Number.base() + 3, "numbers.max", 1);
    /// Not one of the options. Args: `[options]`.
    NUMBER_IN = (Band::Number.base() + 4, "numbers.in", 1);

    /// Empty sequence.
    SLICE_REQUIRED = (Band::Slice.base() + 1, "slices.required", 0);
    /// Fewer elements than allowed. Args: `[min]`.
    SLICE_MIN = (Band::Slice.base() + 2, "slices.min", 1);
    /// More elements than allowed. Args: `[max]`.
    SLICE_MAX = (Band::Slice.base() + 3, "slices.max", 1);

    /// Empty map.
    MAP_REQUIRED = (Band::Map.base() + 1, "maps.required", 0);
    /// Fewer entries than allowed. Args: `[min]`.
    MAP_MIN = (Band::Map.base() + 2, "maps.min", 1);
    /// More entries than allowed. Args: `[max]`.
    MAP_MAX = (Band::Map.base() + 3, "maps.max", 1);

    /// The zero timestamp.
    TIME_REQUIRED = (Band::Time.base() + 1, "times.required", 0);
    /// Earlier than allowed. Args: `[min]`.
    TIME_MIN = (Band::Time.base() + 2, "times.min", 1);
    /// Later than allowed. Args: `[max]`.
    TIME_MAX = (Band::Time.base() + 3, "times.max", 1);
}

/// Registry entry of a built-in code.
pub fn lookup(code: &RuleCode) -> Option<&'static CodeSpec> {
    CodeSpec::find(TABLE, code)
}
