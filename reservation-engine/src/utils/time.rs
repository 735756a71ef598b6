//! Time helpers for slot arithmetic
//!
//! All values are restaurant-local wall-clock times (`NaiveDateTime`).

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use super::{AppError, AppResult};

/// Parse a slot time string (`HH:MM`, 24h)
pub fn parse_slot_time(time: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(time.trim(), "%H:%M")
        .map_err(|_| AppError::invalid_format(format!("Invalid time format: {}", time)))
}

/// Date + `HH:MM` → start instant
pub fn slot_start(date: NaiveDate, time: &str) -> AppResult<NaiveDateTime> {
    Ok(date.and_time(parse_slot_time(time)?))
}

/// Format as `HH:MM`
pub fn format_slot_time(at: NaiveDateTime) -> String {
    format!("{:02}:{:02}", at.hour(), at.minute())
}

/// Date at `hour:00`; hour 24 is the following midnight.
///
/// `None` past the end of the calendar.
pub fn at_hour(date: NaiveDate, hour: u32) -> Option<NaiveDateTime> {
    date.and_time(NaiveTime::MIN)
        .checked_add_signed(Duration::hours(i64::from(hour)))
}

/// `at + minutes`, or `None` past the end of the calendar
pub fn add_minutes(at: NaiveDateTime, minutes: u32) -> Option<NaiveDateTime> {
    at.checked_add_signed(Duration::minutes(i64::from(minutes)))
}

/// Round up to the next multiple of `interval_minutes` counted from midnight.
///
/// Values already on a boundary (with zero seconds) are returned unchanged,
/// so a notice ending at 14:30 still offers 14:30. This deliberately differs
/// from the `interval - (m % interval)` step, which always advances and would
/// offer 15:00 instead.
pub fn round_up_to_interval(at: NaiveDateTime, interval_minutes: u32) -> Option<NaiveDateTime> {
    let step = i64::from(interval_minutes.max(1)) * 60;
    let midnight = at.date().and_time(NaiveTime::MIN);
    let elapsed = (at - midnight).num_seconds();
    let rounded = (elapsed + step - 1) / step * step;
    midnight.checked_add_signed(Duration::seconds(rounded))
}

/// Fractional hours from `from` until `to` (negative when `to` is earlier)
pub fn hours_between(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
    (to - from).num_seconds() as f64 / 3600.0
}

/// Minutes since midnight
pub fn minute_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}
