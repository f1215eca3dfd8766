//! Utility functions and types.

use std::fmt::{Debug, Formatter};

/// Number of characters kept visible at each end of a long secret.
const VISIBLE: usize = 3;

/// Secrets shorter than this are hidden completely.
const MIN_PARTIAL: usize = 12;

/// Redact hides a secret in `Debug` output.
///
/// Empty values print `EMPTY`, short values print `***` and values of
/// twelve characters or more keep their first and last three characters,
/// e.g. `AKI***PLE`, so two keys can still be told apart in logs.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        Redact(value.as_deref().unwrap_or_default())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let chars = self.0.chars().count();
        match chars {
            0 => f.write_str("EMPTY"),
            n if n < MIN_PARTIAL => f.write_str("***"),
            n => {
                let head = self.0.chars().take(VISIBLE).collect::<String>();
                let tail = self.0.chars().skip(n - VISIBLE).collect::<String>();
                write!(f, "{head}***{tail}")
            }
        }
    }
}
