//! Display formatting for track responses.
//!
//! Pure per-field formatting invoked by the presentation layer; out of
//! scope for the services' correctness contract.

use chrono::NaiveDate;
use melodex_core::types::Timestamp;

/// Date display format for release dates and timestamps.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a calendar date for display.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Format a timestamp's date part for display.
pub fn format_timestamp(ts: Timestamp) -> String {
    ts.format(DATE_FORMAT).to_string()
}

/// Format a millisecond duration as `MM:SS`.
///
/// Minutes are not wrapped at an hour, so a 90-minute track renders as
/// `90:00`. Negative inputs clamp to `00:00`.
pub fn format_duration_ms(duration_ms: i32) -> String {
    let total_secs = duration_ms.max(0) / 1000;
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

/// Join artist credits for single-line display.
pub fn format_artist_names(names: &[String]) -> String {
    names.join(", ")
}
