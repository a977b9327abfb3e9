//! Stop names: case-preserving storage, case-insensitive lookup.
//!
//! Every name-keyed operation in the workspace (route search, duplicate
//! detection, seat-tag queries) goes through [`StopName::matches`] so the
//! folding rule lives in exactly one place.  Derived `PartialEq`/`Hash` stay
//! byte-exact on purpose: two `StopName`s that differ only in case are
//! *different values* that *match* each other.

use std::fmt;

/// A stop name as entered, compared case-insensitively.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StopName(String);

impl StopName {
    pub fn new(name: impl Into<String>) -> Self {
        StopName(name.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison (full Unicode lowercasing, not just ASCII).
    ///
    /// Allocates two lowercased copies per call; name lookups are short
    /// strings on cold paths.
    pub fn matches(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.to_lowercase()
    }
}

impl From<&str> for StopName {
    fn from(name: &str) -> Self {
        StopName(name.to_owned())
    }
}

impl From<String> for StopName {
    fn from(name: String) -> Self {
        StopName(name)
    }
}

impl fmt::Display for StopName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
