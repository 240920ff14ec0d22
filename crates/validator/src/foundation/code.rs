//! Rule code identity
//!
//! A [`RuleCode`] names exactly one rule. Codes are grouped in contiguous
//! numeric [`Band`]s per subject kind and qualified by the *family* that
//! declares them: `3001` declared by two different families are two
//! different codes.
//!
//! Built-in codes serialize as bare integers (`3001`); codes from any other
//! family serialize as `"family:3001"`. Both forms deserialize.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Family of every code declared by this crate.
pub const BUILTIN_FAMILY: &str = "rulebook";

// ============================================================================
// RULE CODE
// ============================================================================

/// Opaque, family-qualified identifier of a single rule.
///
/// Equality and hashing take both the family and the numeric value into
/// account.
///
/// # Examples
///
/// ```rust,ignore
/// use rulebook::foundation::RuleCode;
///
/// const MINE: RuleCode = RuleCode::new("billing", 3001);
/// assert_ne!(MINE, rulebook::codes::NUMBER_REQUIRED);
/// assert_eq!(MINE.to_string(), "billing:3001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleCode {
    family: Cow<'static, str>,
    value: u32,
}

impl RuleCode {
    /// Declares a code in `family`.
    pub const fn new(family: &'static str, value: u32) -> Self {
        Self {
            family: Cow::Borrowed(family),
            value,
        }
    }

    /// Declares a code in the built-in family.
    pub const fn builtin(value: u32) -> Self {
        Self::new(BUILTIN_FAMILY, value)
    }

    /// Builds a code whose family is only known at runtime.
    pub fn owned(family: impl Into<Cow<'static, str>>, value: u32) -> Self {
        Self {
            family: family.into(),
            value,
        }
    }

    /// The declaring family.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// The numeric value inside the family.
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Returns `true` when the code belongs to [`BUILTIN_FAMILY`].
    pub fn is_builtin(&self) -> bool {
        self.family == BUILTIN_FAMILY
    }

    /// The band the numeric value falls into, if any.
    pub const fn band(&self) -> Option<Band> {
        Band::of(self.value)
    }
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_builtin() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{}:{}", self.family, self.value)
        }
    }
}

/// Failure to parse a [`RuleCode`] from its textual form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid rule code `{input}`: expected `<number>` or `<family>:<number>`")]
pub struct ParseRuleCodeError {
    input: String,
}

impl FromStr for RuleCode {
    type Err = ParseRuleCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseRuleCodeError {
            input: s.to_owned(),
        };

        match s.rsplit_once(':') {
            None => s.parse().map(Self::builtin).map_err(|_| invalid()),
            Some((family, _)) if family.is_empty() => Err(invalid()),
            Some((family, value)) => {
                let value = value.parse().map_err(|_| invalid())?;
                Ok(Self::owned(family.to_owned(), value))
            }
        }
    }
}

impl Serialize for RuleCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_builtin() {
            serializer.serialize_u32(self.value)
        } else {
            serializer.collect_str(self)
        }
    }
}

impl<'de> Deserialize<'de> for RuleCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(u32),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(Self::builtin(value)),
            Repr::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

// ============================================================================
// BANDS
// ============================================================================

/// Contiguous numeric range reserved for one subject kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    /// Optional values (`Option<T>`).
    Pointer,
    /// Strings.
    String,
    /// Integers and floats.
    Number,
    /// Sequences.
    Slice,
    /// Maps.
    Map,
    /// Timestamps.
    Time,
}

impl Band {
    /// Width of every band.
    pub const WIDTH: u32 = 1000;

    /// First value of the band. Rules start at `base() + 1`.
    pub const fn base(self) -> u32 {
        match self {
            Self::Pointer => 1000,
            Self::String => 2000,
            Self::Number => 3000,
            Self::Slice => 4000,
            Self::Map => 5000,
            Self::Time => 6000,
        }
    }

    /// Built-in code at `offset` inside this band.
    pub const fn code(self, offset: u32) -> RuleCode {
        RuleCode::builtin(self.base() + offset)
    }

    /// Band a numeric value falls into.
    pub const fn of(value: u32) -> Option<Self> {
        match value / Self::WIDTH {
            1 => Some(Self::Pointer),
            2 => Some(Self::String),
            3 => Some(Self::Number),
            4 => Some(Self::Slice),
            5 => Some(Self::Map),
            6 => Some(Self::Time),
            _ => None,
        }
    }

    /// Returns `true` when `code` lies inside this band.
    pub fn contains(self, code: &RuleCode) -> bool {
        code.band() == Some(self)
    }
}

// ============================================================================
// CODE TABLE
// ============================================================================

/// Registry entry for one code: its translation template key and the number
/// of arguments a [`RuleError`](super::RuleError) with that code carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSpec {
    /// The code.
    pub code: RuleCode,
    /// Key of the template used to render this code.
    pub template_key: &'static str,
    /// Number of rule arguments.
    pub arity: usize,
}

impl CodeSpec {
    /// Creates a registry entry.
    pub const fn new(code: RuleCode, template_key: &'static str, arity: usize) -> Self {
        Self {
            code,
            template_key,
            arity,
        }
    }

    /// Finds `code` in `table`.
    pub fn find<'a>(table: &'a [Self], code: &RuleCode) -> Option<&'a Self> {
        table.iter().find(|spec| spec.code == *code)
    }
}
