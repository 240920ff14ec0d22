//! Per-kind rules
//!
//! Each kind is a thin typed wrapper over [`Rule`](crate::foundation::Rule)
//! with its own band of [`codes`](crate::codes):
//!
//! | constructor | value type | band |
//! |---|---|---|
//! | [`option`] | `Option<T>` | pointer (1000) |
//! | [`string`] | `String` | string (2000) |
//! | [`number`] | primitive numbers | number (3000) |
//! | [`slice`] | `Vec<T>` | slice (4000) |
//! | [`map`] | `HashMap` / `BTreeMap` | map (5000) |
//! | `time` | `DateTime<Utc>` | time (6000) |
//!
//! Every kind starts out accepting everything; each modifier chains one more
//! check.

mod map;
mod number;
mod option;
mod pattern;
mod slice;
mod string;
#[cfg(feature = "time")]
mod time;

pub use map::{MapLike, MapRule, map};
pub use number::{Number, NumberRule, number};
pub use option::{OptionRule, option};
pub use pattern::{LazyPattern, Pattern};
pub use slice::{SliceRule, slice};
pub use string::{StringRule, string};
#[cfg(feature = "time")]
pub use time::{TimeRule, time};
