//! The circular stop sequence.
//!
//! # Representation
//!
//! Stops live in a `Vec<Stop>` in ring order with a wrap-around successor
//! (`(i + 1) % len`), plus a cursor index for the current stop.  Two
//! structural identities fall out of keeping the `Vec` in ring order:
//!
//! - index 0 is always the **head** (the earliest-inserted stop still on the
//!   route), and
//! - the last index is always the insertion-order **tail**,
//!
//! so appending "between the tail and the head" is a plain `push`, and
//! removal is `Vec::remove` plus a cursor fixup.  Ring closure — following
//! the successor from any stop visits every stop and returns — holds by
//! construction; there is no pointer bookkeeping to get wrong.
//!
//! # Invariants
//!
//! - The ring always holds at least one stop: construction requires one and
//!   [`RouteRing::remove`] refuses to take the last.
//! - The cursor always indexes a present stop.
//! - No two stops match case-insensitively.

use crate::error::{RouteError, RouteResult};
use crate::stop::Stop;

/// Circular route with a current-stop cursor.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RouteRing {
    stops: Vec<Stop>,
    cursor: usize,
}

impl RouteRing {
    /// Build a ring from names in ring order; the first becomes the head and
    /// the initial current stop.
    ///
    /// Each name passes the same validation as [`RouteRing::append`]; an
    /// empty iterator is [`RouteError::EmptyRoute`].
    pub fn from_names<I, S>(names: I) -> RouteResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ring = RouteRing { stops: Vec::new(), cursor: 0 };
        for name in names {
            ring.append(name.as_ref())?;
        }
        if ring.stops.is_empty() {
            return Err(RouteError::EmptyRoute);
        }
        Ok(ring)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The stop the cursor is on.
    #[inline]
    pub fn current(&self) -> &Stop {
        &self.stops[self.cursor]
    }

    /// Offset of the current stop from the head.
    #[inline]
    pub fn current_index(&self) -> usize {
        self.cursor
    }

    /// Case-insensitive lookup.  O(stops).
    pub fn find(&self, name: &str) -> Option<&Stop> {
        self.stops.iter().find(|s| s.name.matches(name))
    }

    /// Traverse the ring head-first, each stop exactly once.
    ///
    /// Every call starts a fresh traversal; the cursor is not involved.
    pub fn iter(&self) -> impl Iterator<Item = &Stop> {
        self.stops.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always `false`: the ring cannot be constructed empty and the last
    /// stop cannot be removed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    // ── Cursor movement and counters ──────────────────────────────────────

    /// Move the cursor to the circular successor.  Always succeeds; with a
    /// single stop the cursor stays put.
    #[inline]
    pub fn advance(&mut self) {
        self.cursor = (self.cursor + 1) % self.stops.len();
    }

    /// Add `count` to the current stop's cumulative boarded total.
    #[inline]
    pub fn record_boarding(&mut self, count: u32) {
        self.stops[self.cursor].boarded += count;
    }

    /// Add `count` to the current stop's cumulative alighted total.
    #[inline]
    pub fn record_alighting(&mut self, count: u32) {
        self.stops[self.cursor].alighted += count;
    }

    // ── Structural edits ──────────────────────────────────────────────────

    /// Insert a stop at the end of insertion order — between the current
    /// tail and the head.
    ///
    /// The name is trimmed first.  Blank names are [`RouteError::EmptyName`];
    /// a case-insensitive match with any existing stop is
    /// [`RouteError::Duplicate`].  The cursor never moves.
    pub fn append(&mut self, name: &str) -> RouteResult<()> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(RouteError::EmptyName);
        }
        if self.find(trimmed).is_some() {
            return Err(RouteError::Duplicate { name: trimmed.to_owned() });
        }
        self.stops.push(Stop::new(trimmed));
        Ok(())
    }

    /// Remove the named stop (case-insensitive) and return it with its
    /// counters.
    ///
    /// An unmatched name is [`RouteError::NotFound`] even when only one stop
    /// remains; a matched name on a single-stop route is
    /// [`RouteError::LastStop`].  Either way the route is untouched on error.
    ///
    /// Cursor fixup: removing a stop before the cursor shifts the cursor
    /// down one; removing the current stop leaves the cursor on the former
    /// successor, wrapping to the head when the tail was removed.  Removing
    /// a stop after the cursor is position-neutral.
    pub fn remove(&mut self, name: &str) -> RouteResult<Stop> {
        let i = self
            .stops
            .iter()
            .position(|s| s.name.matches(name))
            .ok_or_else(|| RouteError::NotFound { name: name.trim().to_owned() })?;
        if self.stops.len() == 1 {
            return Err(RouteError::LastStop);
        }
        let removed = self.stops.remove(i);
        if self.cursor > i {
            self.cursor -= 1;
        } else if self.cursor == i && self.cursor == self.stops.len() {
            // the removed stop was both current and the tail
            self.cursor = 0;
        }
        Ok(removed)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

/// Deserialization re-checks the ring invariants (at least one stop, cursor
/// in range, no case-insensitive duplicates) rather than trusting the dump.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RouteRing {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        #[derive(serde::Deserialize)]
        struct Raw {
            stops: Vec<Stop>,
            cursor: usize,
        }

        let raw = Raw::deserialize(deserializer)?;
        if raw.stops.is_empty() {
            return Err(D::Error::custom("a route needs at least one stop"));
        }
        if raw.cursor >= raw.stops.len() {
            return Err(D::Error::custom(format!(
                "cursor {} out of range for {} stops",
                raw.cursor,
                raw.stops.len()
            )));
        }
        for (i, stop) in raw.stops.iter().enumerate() {
            if raw.stops[..i].iter().any(|s| s.name.matches(stop.name.as_str())) {
                return Err(D::Error::custom(format!(
                    "stop {:?} appears more than once",
                    stop.name.as_str()
                )));
            }
        }
        Ok(RouteRing { stops: raw.stops, cursor: raw.cursor })
    }
}
