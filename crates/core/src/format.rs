//! Presentational formatting.
//!
//! These helpers only scale and round values for display. They never derive
//! new statistics.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds half away from zero, then pads to exactly `places` decimals.
fn fixed(value: Decimal, places: u32) -> String {
    let rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", places as usize, rounded)
}

/// Height in inches as feet and inches, e.g. `6'7"`.
#[must_use]
pub fn height(inches: i32) -> String {
    format!("{}'{}\"", inches / 12, inches % 12)
}

#[must_use]
pub fn weight(pounds: i32) -> String {
    format!("{pounds} lbs")
}

/// Win percentage with three decimals, e.g. `0.610`.
#[must_use]
pub fn win_percentage(value: Decimal) -> String {
    fixed(value, 3)
}

/// Per-game average with one decimal.
#[must_use]
pub fn per_game(value: Decimal) -> String {
    fixed(value, 1)
}

/// A stored fraction as a percentage with one decimal, e.g. `0.4567` -> `45.7%`.
#[must_use]
pub fn percentage(fraction: Decimal) -> String {
    format!("{}%", fixed(fraction * Decimal::ONE_HUNDRED, 1))
}

/// Contract value in millions, e.g. `$31.8M`.
#[must_use]
pub fn contract_value(dollars: Decimal) -> String {
    format!("${}M", fixed(dollars / Decimal::from(1_000_000), 1))
}

/// Made/attempted pair joined by `separator`.
#[must_use]
pub fn made_attempted(made: i32, attempted: i32, separator: char) -> String {
    format!("{made}{separator}{attempted}")
}

/// Score line, e.g. `112–104`.
#[must_use]
pub fn score(first: i32, second: i32) -> String {
    format!("{first}\u{2013}{second}")
}

/// Short calendar date, e.g. `Jan 15`.
#[must_use]
pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Long calendar date, e.g. `Wednesday, January 15, 2025`.
#[must_use]
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
