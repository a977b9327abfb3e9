//! service_day — one scripted day on a six-stop circular route.
//!
//! Non-interactive companion to `bus-console`: a seeded random passenger
//! model drives a 10×5 bus around an embedded route for a fixed number of
//! stop visits, every visit is logged to CSV, and the run ends with a
//! per-stop traffic table.
//!
//! ```text
//! cargo run --bin service_day
//! ```

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use bus_cabin::SeatGrid;
use bus_core::{CabinLayout, FlowRng};
use bus_output::{VisitLogObserver, VisitLogWriter};
use bus_route::{load_route_reader, Stop};
use bus_service::{PassengerModel, Service, StopAction};

// ── Constants ─────────────────────────────────────────────────────────────

const ROWS: u16 = 10;
const COLS: u16 = 5;
const SEED: u64 = 42;
const VISITS: u64 = 40;

/// Embedded route, same shape a `--route <file>` CSV would have.
const ROUTE_CSV: &str = "\
name
Depot
Market Street
Old Town
University
Harbor
Stadium
";

// ── Passenger model ───────────────────────────────────────────────────────

/// Seeded random demand. An empty bus always picks somebody up; after that
/// the fuller the cabin, the more likely a stop turns into alightings, with
/// the occasional visit where nobody moves at all.
struct RandomPassengers {
    rng: FlowRng,
}

impl RandomPassengers {
    fn new(seed: u64) -> Self {
        Self { rng: FlowRng::new(seed) }
    }
}

impl PassengerModel for RandomPassengers {
    fn next_action(&mut self, _stop: &Stop, cabin: &SeatGrid) -> StopAction {
        let occupied: Vec<u32> = cabin
            .snapshot()
            .into_iter()
            .filter(|seat| seat.is_occupied())
            .map(|seat| seat.number)
            .collect();

        let load = occupied.len() as f64 / cabin.capacity() as f64;
        if occupied.is_empty() || !self.rng.gen_bool(0.3 + load * 0.6) {
            let group = self.rng.gen_range(1..=8);
            return StopAction::Board(group);
        }
        if self.rng.gen_bool(0.15) {
            return StopAction::Pass;
        }

        // Alight a random subset of whoever is onboard.
        let mut leaving = occupied;
        self.rng.shuffle(&mut leaving);
        let keep = self.rng.gen_range(1..=leaving.len());
        leaving.truncate(keep);
        StopAction::Alight(leaving)
    }
}

// ── Entry point ───────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("service_day: {ROWS}×{COLS} bus, {VISITS} stop visits, seed {SEED}");

    // 1. Load the embedded route.
    let route = load_route_reader(Cursor::new(ROUTE_CSV))?;
    println!("Route: {} stops, starting at {}", route.len(), route.current().name);

    // 2. Build the bus.
    let cabin = SeatGrid::new(CabinLayout::new(ROWS, COLS)?);
    let mut service = Service::new(cabin, route);

    // 3. Set up output.
    std::fs::create_dir_all("output/service_day")?;
    let writer = VisitLogWriter::new(Path::new("output/service_day"))?;
    let mut observer = VisitLogObserver::new(writer);

    // 4. Run the day.
    let mut model = RandomPassengers::new(SEED);
    let t0 = Instant::now();
    service.run_stops(VISITS, &mut model, &mut observer)?;
    let elapsed = t0.elapsed();

    if let Some(e) = observer.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!("Day complete in {:.3} s", elapsed.as_secs_f64());
    println!("  stop_visits.csv : {VISITS} rows (output/service_day)");
    println!();

    // 6. Per-stop traffic table.
    let status = service.status();
    println!("{:<16} {:<9} {:<10} {:<13}", "Stop", "Boarded", "Alighted", "Still On Bus");
    println!("{}", "-".repeat(51));
    for stop in &status.stops {
        println!(
            "{:<16} {:<9} {:<10} {:<13}",
            stop.name.as_str(),
            stop.boarded,
            stop.alighted,
            stop.still_onboard
        );
    }
    println!("{}", "-".repeat(51));
    println!(
        "Ending at {} with {} onboard, {}/{} seats free",
        status.current_stop, status.onboard, status.available, status.capacity
    );

    Ok(())
}
