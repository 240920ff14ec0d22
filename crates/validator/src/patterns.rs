//! Built-in pattern table
//!
//! Every entry compiles on first use and is reused afterwards.
//!
//! ```rust,ignore
//! let hex = string().required().matches(&patterns::HEX_COLOR);
//! ```

use crate::validators::LazyPattern;

/// ASCII letters.
pub static ALPHA: LazyPattern = LazyPattern::new(r"^[a-zA-Z]+$");
/// ASCII letters and digits.
pub static ALPHA_NUMERIC: LazyPattern = LazyPattern::new(r"^[a-zA-Z0-9]+$");
/// Unicode letters.
pub static ALPHA_UNICODE: LazyPattern = LazyPattern::new(r"^[\p{L}]+$");
/// Unicode letters and numbers.
pub static ALPHA_UNICODE_NUMERIC: LazyPattern = LazyPattern::new(r"^[\p{L}\p{N}]+$");
/// Signed decimal number.
pub static NUMERIC: LazyPattern = LazyPattern::new(r"^[-+]?[0-9]+(?:\.[0-9]+)?$");
/// Unsigned integer.
pub static NUMBER: LazyPattern = LazyPattern::new(r"^[0-9]+$");
pub static HEXADECIMAL: LazyPattern = LazyPattern::new(r"^(0[xX])?[0-9a-fA-F]+$");
/// `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
pub static HEX_COLOR: LazyPattern =
    LazyPattern::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$");
/// E.164 phone number.
pub static E164: LazyPattern = LazyPattern::new(r"^\+[1-9]?[0-9]{7,14}$");
pub static BASE64: LazyPattern = LazyPattern::new(
    r"^(?:[A-Za-z0-9+/]{4})*(?:[A-Za-z0-9+/]{2}==|[A-Za-z0-9+/]{3}=|[A-Za-z0-9+/]{4})$",
);
pub static BASE64_URL: LazyPattern = LazyPattern::new(
    r"^(?:[A-Za-z0-9\-_]{4})*(?:[A-Za-z0-9\-_]{2}==|[A-Za-z0-9\-_]{3}=|[A-Za-z0-9\-_]{4})$",
);
/// Lowercase UUID of any version.
pub static UUID: LazyPattern =
    LazyPattern::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$");
/// UUID of any version, either case.
pub static UUID_RFC4122: LazyPattern = LazyPattern::new(
    r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$",
);
pub static ULID: LazyPattern = LazyPattern::new(r"^[A-HJKMNP-TV-Z0-9]{26}$");
pub static MD5: LazyPattern = LazyPattern::new(r"^[0-9a-f]{32}$");
pub static SHA256: LazyPattern = LazyPattern::new(r"^[0-9a-f]{64}$");
pub static SHA512: LazyPattern = LazyPattern::new(r"^[0-9a-f]{128}$");
pub static ASCII: LazyPattern = LazyPattern::new(r"^[\x00-\x7F]*$");
pub static PRINTABLE_ASCII: LazyPattern = LazyPattern::new(r"^[\x20-\x7E]*$");
pub static LATITUDE: LazyPattern = LazyPattern::new(r"^[-+]?([1-8]?\d(\.\d+)?|90(\.0+)?)$");
pub static LONGITUDE: LazyPattern =
    LazyPattern::new(r"^[-+]?(180(\.0+)?|((1[0-7]\d)|([1-9]?\d))(\.\d+)?)$");
pub static ETH_ADDRESS: LazyPattern = LazyPattern::new(r"^0x[0-9a-fA-F]{40}$");
/// Percent-encoded text.
pub static URL_ENCODED: LazyPattern = LazyPattern::new(r"^(?:[^%]|%[0-9A-Fa-f]{2})*$");
