//! Release date validation.
//!
//! Dates on artifact records are three separate numeric fields (year, month,
//! day), any of which may be blank. Two layers of rules apply:
//!
//! - **Per-field ranges** (`valid_year` / `valid_month` / `valid_day`): an
//!   empty field is always acceptable ("not yet specified"); a filled field
//!   must be an integer in its range. The year's upper bound is the current
//!   calendar year, read from the [`Context`] at call time.
//! - **Coarse-to-fine** (`check_date`): a day without a month, or a
//!   month-or-day without a year, is flagged. You cannot date an artifact more
//!   precisely than you can place it.
//!
//! The day range is a flat `[1, 31]` for every month; February 31 passes.
//! This matches the deployed editor and is kept as-is rather than tightened.

use crate::api::Context;
use crate::fields::int_value;
use bitflags::bitflags;

/// Oldest accepted release year. The archive holds nothing older.
pub const MIN_YEAR: i64 = 1980;

/// True iff `text` is empty or an integer in `[1980, current year]`.
pub fn valid_year(text: &str, ctx: &Context) -> bool {
    if text.trim().is_empty() {
        return true;
    }
    match int_value(text) {
        Some(y) => (MIN_YEAR..=ctx.current_year() as i64).contains(&y),
        None => false,
    }
}

/// True iff `text` is empty or an integer in `[1, 12]`.
pub fn valid_month(text: &str) -> bool {
    if text.trim().is_empty() {
        return true;
    }
    match int_value(text) {
        Some(m) => month_in_range(m),
        None => false,
    }
}

/// True iff `text` is empty or an integer in `[1, 31]`.
pub fn valid_day(text: &str) -> bool {
    if text.trim().is_empty() {
        return true;
    }
    match int_value(text) {
        Some(d) => day_in_range(d),
        None => false,
    }
}

fn month_in_range(m: i64) -> bool {
    (1..=12).contains(&m)
}

fn day_in_range(d: i64) -> bool {
    (1..=31).contains(&d)
}

bitflags! {
    /// Which of the three date fields were flagged by [`check_date`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DateFlags: u8 {
        const YEAR = 1;
        const MONTH = 1 << 1;
        const DAY = 1 << 2;
    }
}

/// Result of the composite date check: the normalized field texts plus the
/// set of flagged fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateReport {
    pub year: String,
    pub month: String,
    pub day: String,
    pub flagged: DateFlags,
}

impl DateReport {
    pub fn ok(&self) -> bool {
        self.flagged.is_empty()
    }
}

/// Validate the three date fields together.
///
/// Each field's text is normalized by re-serializing through integer parse:
/// leading zeros are stripped and non-numeric text becomes `"0"`. Flags are
/// evaluated per field but with a cross-field dependency — supplying a day
/// requires a month, and supplying a month or a day requires a year.
pub fn check_date(year: &str, month: &str, day: &str, ctx: &Context) -> DateReport {
    let y = int_value(year);
    let m = int_value(month);
    let d = int_value(day);

    // "In-range" here is the field validating on its own; a blank neighbor
    // never forces a flag by itself.
    let month_given = m.is_some_and(|v| month_in_range(v));
    let day_given = d.is_some_and(|v| day_in_range(v));

    let mut flagged = DateFlags::empty();

    match y {
        Some(v) if v != 0 && !(MIN_YEAR..=ctx.current_year() as i64).contains(&v) => {
            flagged |= DateFlags::YEAR;
        }
        None if month_given || day_given => {
            // A more specific field was supplied without a year.
            flagged |= DateFlags::YEAR;
        }
        _ => {}
    }

    match m {
        Some(v) if v != 0 && !month_in_range(v) => flagged |= DateFlags::MONTH,
        Some(0) | None if day_given => flagged |= DateFlags::MONTH,
        _ => {}
    }

    if d.is_some_and(|v| v != 0 && !day_in_range(v)) {
        flagged |= DateFlags::DAY;
    }

    if !flagged.is_empty() {
        tracing::debug!(?flagged, year, month, day, "date fields flagged");
    }

    DateReport {
        year: y.unwrap_or(0).to_string(),
        month: m.unwrap_or(0).to_string(),
        day: d.unwrap_or(0).to_string(),
        flagged,
    }
}
