//! The seat-occupancy state machine.
//!
//! # Representation
//!
//! One `Vec<Option<StopName>>` of exactly `capacity` entries, indexed by
//! [`SeatId`]: `Some(tag)` iff the seat is occupied, where `tag` is the stop
//! the occupant boarded at.  Fusing occupancy and tag into one field makes
//! "a seat has a tag iff it is occupied" structural rather than a rule to
//! police.  Tags are owned values — route edits elsewhere can never
//! invalidate them.
//!
//! The occupied count is cached so `available_count` is O(1); every mutation
//! keeps it in sync with the number of `Some` entries.

use bus_core::{CabinLayout, SeatId, StopName};

use crate::error::{CabinError, CabinResult};
use crate::seat::{ReleasedSeat, SeatInfo};

/// Fixed-capacity seat grid.  Never resized after construction.
pub struct SeatGrid {
    layout: CabinLayout,
    tags: Vec<Option<StopName>>,
    occupied: u32,
}

impl SeatGrid {
    /// An empty grid with the given geometry.
    pub fn new(layout: CabinLayout) -> Self {
        SeatGrid {
            layout,
            tags: vec![None; layout.capacity() as usize],
            occupied: 0,
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn layout(&self) -> CabinLayout {
        self.layout
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.layout.capacity()
    }

    #[inline]
    pub fn occupied_count(&self) -> u32 {
        self.occupied
    }

    #[inline]
    pub fn available_count(&self) -> u32 {
        self.layout.capacity() - self.occupied
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupied == self.layout.capacity()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Occupied seats whose tag matches `name` case-insensitively.
    ///
    /// Counts by stored value, so passengers who boarded at a stop that was
    /// later removed from the route are still counted under its name.
    pub fn occupied_from(&self, name: &str) -> u32 {
        self.tags.iter().flatten().filter(|tag| tag.matches(name)).count() as u32
    }

    /// Look up a single seat by its public number.
    pub fn seat(&self, number: u32) -> CabinResult<SeatInfo> {
        let id = self.layout.seat(number).ok_or(CabinError::OutOfRange {
            seat: number,
            capacity: self.layout.capacity(),
        })?;
        Ok(self.info(id))
    }

    /// Full cabin state in seat-number order.  Side-effect free.
    pub fn snapshot(&self) -> Vec<SeatInfo> {
        (0..self.tags.len() as u32).map(|i| self.info(SeatId(i))).collect()
    }

    fn info(&self, id: SeatId) -> SeatInfo {
        let (row, col) = self.layout.position(id);
        SeatInfo {
            number: self.layout.number(id),
            row,
            col,
            boarded_at: self.tags[id.index()].clone(),
        }
    }

    // ── Mutations ─────────────────────────────────────────────────────────

    /// Seat up to `requested` passengers boarding at `stop`.
    ///
    /// Allocates empty seats in ascending number order, tagging each with
    /// `stop`, and returns the allocated seat numbers (ascending).  Demand
    /// beyond availability is clamped silently — the returned length is the
    /// number actually boarded.  `requested == 0` mutates nothing.
    pub fn board(&mut self, stop: &StopName, requested: u32) -> Vec<u32> {
        let take = requested.min(self.available_count()) as usize;
        let mut seated = Vec::with_capacity(take);
        if take == 0 {
            return seated;
        }
        let layout = self.layout;
        for (i, tag) in self.tags.iter_mut().enumerate() {
            if tag.is_none() {
                *tag = Some(stop.clone());
                seated.push(layout.number(SeatId(i as u32)));
                if seated.len() == take {
                    break;
                }
            }
        }
        self.occupied += seated.len() as u32;
        seated
    }

    /// Release every seat in `seats` at once, or release none.
    ///
    /// The whole batch is validated before any seat is touched: each number
    /// must be inside the cabin ([`CabinError::OutOfRange`]) and refer to an
    /// occupied seat ([`CabinError::AlreadyEmpty`]).  Validation runs in the
    /// caller's order, so the error names the first offending entry.  On
    /// success the freed seats are reported in ascending number order, each
    /// with the tag it held.
    ///
    /// The input is treated as a set: duplicates collapse to one release.
    /// An empty input is trivially valid and changes nothing.
    pub fn alight(&mut self, seats: &[u32]) -> CabinResult<Vec<ReleasedSeat>> {
        let mut ids: Vec<SeatId> = Vec::with_capacity(seats.len());
        for &number in seats {
            let id = self.layout.seat(number).ok_or(CabinError::OutOfRange {
                seat: number,
                capacity: self.layout.capacity(),
            })?;
            if self.tags[id.index()].is_none() {
                return Err(CabinError::AlreadyEmpty { seat: number });
            }
            ids.push(id);
        }
        ids.sort_unstable();
        ids.dedup();

        let mut released = Vec::with_capacity(ids.len());
        for id in ids {
            // Validated occupied above; dedup guarantees each take() hits Some.
            if let Some(boarded_at) = self.tags[id.index()].take() {
                released.push(ReleasedSeat {
                    number: self.layout.number(id),
                    boarded_at,
                });
            }
        }
        self.occupied -= released.len() as u32;
        Ok(released)
    }
}
