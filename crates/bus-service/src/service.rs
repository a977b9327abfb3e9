//! The `Service` struct — the owned cabin/route context and its visit loop.

use bus_cabin::{CabinResult, SeatGrid};
use bus_route::RouteRing;

use crate::model::{PassengerModel, StopAction};
use crate::observer::ServiceObserver;
use crate::report::{
    AlightingReport, BoardingReport, PassReport, ServiceStatus, StopStats, StopVisit,
};

/// One bus working one circular route.
///
/// `Service` owns both halves of the simulator state — nothing is global, so
/// several buses are simply several values.  The cabin and the route never
/// reference each other: the stop *name*, copied by value into seat tags at
/// boarding time, is the only key they share, and this struct is where the
/// two sides meet.
///
/// Every completed visit departs the stop: boarding, a successful
/// alighting, and passing all end with the cursor on the next stop.  A
/// failed alighting changes nothing and stays put so the caller can retry.
///
/// The fields are public for direct queries (`service.cabin.snapshot()`,
/// `service.route.find(..)`) and for route edits, which are cursor-safe on
/// their own and need no mediation.
pub struct Service {
    pub cabin: SeatGrid,
    pub route: RouteRing,
}

impl Service {
    pub fn new(cabin: SeatGrid, route: RouteRing) -> Self {
        Service { cabin, route }
    }

    // ── Stop visits ───────────────────────────────────────────────────────

    /// Board up to `requested` passengers at the current stop, then depart.
    ///
    /// Demand beyond availability is clamped by the cabin; the stop's
    /// boarded counter records only those actually seated.
    pub fn board_at_current_stop(&mut self, requested: u32) -> BoardingReport {
        let stop = self.route.current().name.clone();
        let seats = self.cabin.board(&stop, requested);
        self.route.record_boarding(seats.len() as u32);
        self.route.advance();
        BoardingReport {
            stop,
            requested,
            seats,
            next_stop: self.route.current().name.clone(),
        }
    }

    /// Release the given seats at the current stop, then depart.
    ///
    /// The batch is atomic: on error nothing changes and the bus stays at
    /// the stop, so the caller can correct the list and retry.  The released
    /// count is recorded against the stop that is current *now* — the
    /// alighting stop, not the stops the passengers boarded at.  An empty
    /// list is the "nobody alights" case: no release, no counter change,
    /// but the bus still departs.
    pub fn alight_at_current_stop(&mut self, seats: &[u32]) -> CabinResult<AlightingReport> {
        let released = self.cabin.alight(seats)?;
        let stop = self.route.current().name.clone();
        self.route.record_alighting(released.len() as u32);
        self.route.advance();
        Ok(AlightingReport {
            stop,
            released,
            next_stop: self.route.current().name.clone(),
        })
    }

    /// Depart the current stop with no passenger activity.
    pub fn pass_stop(&mut self) -> PassReport {
        let stop = self.route.current().name.clone();
        self.route.advance();
        PassReport {
            stop,
            next_stop: self.route.current().name.clone(),
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Passengers currently onboard.
    #[inline]
    pub fn onboard(&self) -> u32 {
        self.cabin.occupied_count()
    }

    /// Full summary in route order.  Side-effect free: consecutive calls
    /// with no mutation between them are identical.
    pub fn status(&self) -> ServiceStatus {
        let current_index = self.route.current_index();
        let stops = self
            .route
            .iter()
            .enumerate()
            .map(|(i, stop)| StopStats {
                name:          stop.name.clone(),
                boarded:       stop.boarded,
                alighted:      stop.alighted,
                still_onboard: self.cabin.occupied_from(stop.name.as_str()),
                is_current:    i == current_index,
            })
            .collect();
        ServiceStatus {
            current_stop: self.route.current().name.clone(),
            stops,
            onboard:   self.cabin.occupied_count(),
            available: self.cabin.available_count(),
            capacity:  self.cabin.capacity(),
        }
    }

    /// Statistics for one named stop (case-insensitive), or `None` if it is
    /// not on the route.
    pub fn stop_stats(&self, name: &str) -> Option<StopStats> {
        let current_index = self.route.current_index();
        self.route
            .iter()
            .enumerate()
            .find(|(_, stop)| stop.name.matches(name))
            .map(|(i, stop)| StopStats {
                name:          stop.name.clone(),
                boarded:       stop.boarded,
                alighted:      stop.alighted,
                still_onboard: self.cabin.occupied_from(stop.name.as_str()),
                is_current:    i == current_index,
            })
    }

    // ── Scripted runs ─────────────────────────────────────────────────────

    /// Drive `visits` consecutive stop visits, asking `model` what happens
    /// at each one and reporting every completed visit to `observer`.
    ///
    /// Aborts with the cabin's error if the model produces an invalid
    /// alight list; state is left exactly as of the last completed visit.
    /// `observer.on_service_end` fires only after a full run.
    pub fn run_stops<M, O>(
        &mut self,
        visits:   u64,
        model:    &mut M,
        observer: &mut O,
    ) -> CabinResult<()>
    where
        M: PassengerModel,
        O: ServiceObserver,
    {
        for visit in 1..=visits {
            let action = model.next_action(self.route.current(), &self.cabin);
            let (stop, boarded, alighted) = match action {
                StopAction::Board(n) => {
                    let report = self.board_at_current_stop(n);
                    let boarded = report.boarded();
                    (report.stop, boarded, 0)
                }
                StopAction::Alight(seats) => {
                    let report = self.alight_at_current_stop(&seats)?;
                    let alighted = report.alighted();
                    (report.stop, 0, alighted)
                }
                StopAction::Pass => {
                    let report = self.pass_stop();
                    (report.stop, 0, 0)
                }
            };
            observer.on_visit(&StopVisit {
                visit,
                stop,
                boarded,
                alighted,
                onboard: self.cabin.occupied_count(),
            });
        }
        observer.on_service_end(visits);
        Ok(())
    }
}
