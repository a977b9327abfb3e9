//! Input parsing for the interactive menu.
//!
//! All parsers are pure functions over the raw line (trailing newline and
//! all) so they can be unit tested without a terminal. Prompting and
//! re-prompting live in `main.rs`.

// ── Menu choice ───────────────────────────────────────────────────────────

/// One entry of the nine-option main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Board,
    AddStop,
    Status,
    Alight,
    SearchSeats,
    ShowSeats,
    SearchStop,
    RemoveStop,
    Exit,
}

/// Parses a menu selection. Anything other than the digits `1`-`9`
/// (surrounding whitespace ignored) is `None`.
pub fn parse_choice(input: &str) -> Option<MenuChoice> {
    match input.trim() {
        "1" => Some(MenuChoice::Board),
        "2" => Some(MenuChoice::AddStop),
        "3" => Some(MenuChoice::Status),
        "4" => Some(MenuChoice::Alight),
        "5" => Some(MenuChoice::SearchSeats),
        "6" => Some(MenuChoice::ShowSeats),
        "7" => Some(MenuChoice::SearchStop),
        "8" => Some(MenuChoice::RemoveStop),
        "9" => Some(MenuChoice::Exit),
        _ => None,
    }
}

// ── Passenger count ───────────────────────────────────────────────────────

/// Parses a passenger count as a signed integer, so the caller can tell
/// "no passengers" (zero or negative) apart from text that is not a number.
pub fn parse_count(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}

// ── Seat lists ────────────────────────────────────────────────────────────

/// Outcome of parsing a comma-separated seat list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeatListInput {
    /// A blank line: the user chose to name no seats.
    Empty,
    /// Not a comma-separated list of seat numbers.
    Invalid,
    /// Seat numbers in the order entered, duplicates preserved.
    Seats(Vec<u32>),
}

/// Parses a seat list such as `3,7,10`. Every comma-separated part must be
/// ASCII digits only; whitespace around parts is ignored. Range checks are
/// the cabin's job, not the parser's.
pub fn parse_seat_list(input: &str) -> SeatListInput {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return SeatListInput::Empty;
    }

    let mut seats = Vec::new();
    for part in trimmed.split(',') {
        let part = part.trim();
        if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
            return SeatListInput::Invalid;
        }
        match part.parse() {
            Ok(number) => seats.push(number),
            Err(_) => return SeatListInput::Invalid,
        }
    }
    SeatListInput::Seats(seats)
}
