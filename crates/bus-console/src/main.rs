//! bus-console — interactive driver for the ringbus crates.
//!
//! Presents the classic nine-option depot console over one [`Service`]:
//! board and alight passengers, edit the circular route, and inspect seats
//! and per-stop counters. The route comes from a CSV file given as the
//! first argument, or falls back to a built-in five-stop loop.

mod input;

use std::env;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{bail, Result};

use bus_cabin::{SeatGrid, SeatInfo};
use bus_core::CabinLayout;
use bus_route::{load_route_csv, RouteError, RouteRing};
use bus_service::Service;

use crate::input::{MenuChoice, SeatListInput};

// ── Constants ─────────────────────────────────────────────────────────────

const ROWS: u16 = 10;
const COLS: u16 = 5;
const DEFAULT_STOPS: [&str; 5] = ["Stop A", "Stop B", "Stop C", "Stop D", "Stop E"];

// ── Terminal I/O ──────────────────────────────────────────────────────────

/// Prints `label` without a newline and reads one line of input.
fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        bail!("input stream closed");
    }
    Ok(line)
}

// ── Menu actions ──────────────────────────────────────────────────────────

fn board(service: &mut Service) -> Result<()> {
    println!("\nBus arrived at {}", service.route.current().name);
    let answer = prompt("Enter number of passengers boarding at this stop: ")?;

    let requested = match input::parse_count(&answer) {
        None => {
            println!("Invalid input. No passengers boarded.");
            0
        }
        Some(n) if n <= 0 => {
            println!("No passengers boarded.");
            0
        }
        Some(n) => u32::try_from(n).unwrap_or(u32::MAX),
    };

    let report = service.board_at_current_stop(requested);
    if requested > 0 {
        if report.boarded() == 0 {
            println!("Bus is FULL! No passengers can board.");
        } else {
            if report.clamped() {
                println!("Only {} seats available.", report.boarded());
            }
            println!("{} passenger(s) boarded at {}", report.boarded(), report.stop);
        }
    }
    println!("Next stop: {}\n", report.next_stop);
    Ok(())
}

fn alight(service: &mut Service) -> Result<()> {
    println!("\nBus arrived at {}", service.route.current().name);

    if service.cabin.is_empty() {
        println!("Bus is EMPTY! No passengers can alight.");
        let report = service.pass_stop();
        println!("Next stop: {}\n", report.next_stop);
        return Ok(());
    }

    println!("\nOccupied Seats:");
    for seat in service.cabin.snapshot() {
        if let Some(stop) = &seat.boarded_at {
            println!("Seat {:02} → Boarded at {stop}", seat.number);
        }
    }

    loop {
        let answer = prompt("Enter seat numbers to alight (comma separated, e.g., 3,7,10): ")?;
        match input::parse_seat_list(&answer) {
            SeatListInput::Empty => {
                println!("No passengers alighted.");
                let report = service.alight_at_current_stop(&[])?;
                println!("Next stop: {}\n", report.next_stop);
                return Ok(());
            }
            SeatListInput::Invalid => {
                println!("Invalid input! Use numbers separated by commas.");
            }
            SeatListInput::Seats(seats) => match service.alight_at_current_stop(&seats) {
                Ok(report) => {
                    println!("{} passenger(s) alighted at {}", report.alighted(), report.stop);
                    println!("Next stop: {}\n", report.next_stop);
                    return Ok(());
                }
                // The whole list is rejected, nothing alights, the bus stays.
                Err(e) => println!("{e}"),
            },
        }
    }
}

fn add_stop(service: &mut Service) -> Result<()> {
    let answer = prompt("Enter name of new stop: ")?;
    let name = answer.trim();
    match service.route.append(name) {
        Ok(()) => println!("{name} added to route.\n"),
        Err(RouteError::EmptyName) => println!("Stop name cannot be empty.\n"),
        Err(RouteError::Duplicate { name }) => {
            println!("A stop with the name '{name}' already exists.\n");
        }
        Err(e) => println!("{e}\n"),
    }
    Ok(())
}

fn remove_stop(service: &mut Service) -> Result<()> {
    let answer = prompt("Enter stop name to delete: ")?;
    match service.route.remove(answer.trim()) {
        Ok(removed) => println!("{} deleted successfully.\n", removed.name),
        Err(RouteError::LastStop) => println!("Cannot delete the only remaining stop.\n"),
        Err(RouteError::NotFound { .. }) => println!("Stop not found.\n"),
        Err(e) => println!("{e}\n"),
    }
    Ok(())
}

fn search_stop(service: &Service) -> Result<()> {
    let answer = prompt("Enter a bus stop name: ")?;
    match service.stop_stats(answer.trim()) {
        Some(stats) => {
            println!("\nStop Found: {}", stats.name);
            println!("Passengers Boarded: {}", stats.boarded);
            println!("Passengers Alighted: {}", stats.alighted);
            println!("Passengers Still On Bus: {}\n", stats.still_onboard);
        }
        None => println!("Stop not found.\n"),
    }
    Ok(())
}

fn search_seats(service: &Service) -> Result<()> {
    println!("\n--- Search Passengers by Seat Numbers ---");
    let answer = prompt("Enter seat numbers (comma separated, e.g., 3,7,10): ")?;
    match input::parse_seat_list(&answer) {
        SeatListInput::Empty => println!("No seats entered."),
        SeatListInput::Invalid => println!("Invalid input! Use numbers separated by commas."),
        SeatListInput::Seats(seats) => {
            for number in seats {
                match service.cabin.seat(number) {
                    Ok(info) => print_seat(&info),
                    Err(e) => println!("{e}"),
                }
            }
        }
    }
    println!("-------------------------------\n");
    Ok(())
}

fn show_all_seats(service: &Service) {
    println!("\n--- Passenger Seat Layout ---");
    for info in service.cabin.snapshot() {
        print_seat(&info);
    }
    println!("-------------------------------\n");
}

fn print_seat(info: &SeatInfo) {
    match &info.boarded_at {
        Some(stop) => println!(
            "Seat {:02} (Row {}, Col {}) → Boarded at: {stop} (Still On Bus)",
            info.number,
            info.row + 1,
            info.col + 1
        ),
        None => println!(
            "Seat {:02} (Row {}, Col {}) → Empty",
            info.number,
            info.row + 1,
            info.col + 1
        ),
    }
}

fn show_status(service: &Service) {
    let status = service.status();

    println!("\n----- BUS STATUS -----");
    println!("Current Stop: {}", status.current_stop);
    println!("Total Stops: {}\n", status.stops.len());

    let labels: Vec<String> = status
        .stops
        .iter()
        .map(|s| {
            if s.is_current {
                format!("{} (CURRENT)", s.name)
            } else {
                s.name.to_string()
            }
        })
        .collect();
    let route_line = labels.join(" → ");
    println!("Route (Circular Visual):");
    println!("{route_line}");
    println!("  ↖{}↩ (circular)\n", "─".repeat(route_line.chars().count()));

    println!("Route Statistics (Boarded / Alighted / Still On Bus):");
    for s in &status.stops {
        println!(
            "  {} | Boarded: {} | Alighted: {} | Still On Bus: {}",
            s.name, s.boarded, s.alighted, s.still_onboard
        );
    }

    println!("\nOccupied Seats: {}", status.onboard);
    println!("Available Seats: {}/{}", status.available, status.capacity);
    println!("Total Passengers Onboard: {}", status.onboard);
    println!("----------------------\n");
}

// ── Entry point ───────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let route = match env::args().nth(1) {
        Some(path) => load_route_csv(Path::new(&path))?,
        None => RouteRing::from_names(DEFAULT_STOPS)?,
    };
    let cabin = SeatGrid::new(CabinLayout::new(ROWS, COLS)?);
    let mut service = Service::new(cabin, route);

    println!(
        "Bus ready: {} seats, route of {} stops.\n",
        service.cabin.capacity(),
        service.route.len()
    );

    loop {
        println!("===== BUS SERVICE CONSOLE =====");
        println!("1. Board passengers at current stop");
        println!("2. Add stop to route");
        println!("3. Display bus status");
        println!("4. Alight passengers");
        println!("5. Search seat number(s)");
        println!("6. Show all passenger seats");
        println!("7. Search bus stop");
        println!("8. Remove bus stop");
        println!("9. Exit");

        let answer = prompt("Enter choice (1-9): ")?;
        match input::parse_choice(&answer) {
            Some(MenuChoice::Board) => board(&mut service)?,
            Some(MenuChoice::AddStop) => add_stop(&mut service)?,
            Some(MenuChoice::Status) => show_status(&service),
            Some(MenuChoice::Alight) => alight(&mut service)?,
            Some(MenuChoice::SearchSeats) => search_seats(&service)?,
            Some(MenuChoice::ShowSeats) => show_all_seats(&service),
            Some(MenuChoice::SearchStop) => search_stop(&service)?,
            Some(MenuChoice::RemoveStop) => remove_stop(&mut service)?,
            Some(MenuChoice::Exit) => {
                println!("Exiting system.");
                break;
            }
            None => println!("Invalid choice. Please enter a number between 1 and 9.\n"),
        }
    }
    Ok(())
}
