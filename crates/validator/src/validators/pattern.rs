//! Compiled patterns for string matching
//!
//! String rules accept anything implementing [`Pattern`]: an owned
//! [`Regex`], a shared `Arc<Regex>`, or a [`LazyPattern`] compiled on first
//! use and reused afterwards. The built-in table lives in
//! [`patterns`](crate::patterns).

use std::sync::{Arc, OnceLock};

use regex::Regex;

/// A regular expression a string rule can match against.
pub trait Pattern: Send + Sync {
    /// The compiled expression, or the compile error.
    fn regex(&self) -> Result<&Regex, regex::Error>;

    /// The source text, recorded in rule errors.
    fn as_str(&self) -> &str;
}

impl Pattern for Regex {
    fn regex(&self) -> Result<&Regex, regex::Error> {
        Ok(self)
    }

    fn as_str(&self) -> &str {
        Self::as_str(self)
    }
}

impl Pattern for Arc<Regex> {
    fn regex(&self) -> Result<&Regex, regex::Error> {
        Ok(&**self)
    }

    fn as_str(&self) -> &str {
        Regex::as_str(self)
    }
}

impl<P: Pattern + ?Sized> Pattern for &P {
    fn regex(&self) -> Result<&Regex, regex::Error> {
        (**self).regex()
    }

    fn as_str(&self) -> &str {
        (**self).as_str()
    }
}

/// A pattern compiled once, on first use.
///
/// ```rust,ignore
/// static SLUG: LazyPattern = LazyPattern::new("^[a-z0-9-]+$");
///
/// let rule = string().required().matches(&SLUG);
/// ```
#[derive(Debug)]
pub struct LazyPattern {
    source: &'static str,
    compiled: OnceLock<Result<Regex, regex::Error>>,
}

impl LazyPattern {
    /// Declares a pattern without compiling it.
    pub const fn new(source: &'static str) -> Self {
        Self {
            source,
            compiled: OnceLock::new(),
        }
    }
}

impl Pattern for LazyPattern {
    fn regex(&self) -> Result<&Regex, regex::Error> {
        self.compiled
            .get_or_init(|| Regex::new(self.source))
            .as_ref()
            .map_err(Clone::clone)
    }

    fn as_str(&self) -> &str {
        self.source
    }
}
