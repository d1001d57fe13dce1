//! Date helpers shared by page scripts.
//!
//! `format_date` is the `YYYY-MM-DD` form used in attendance URLs
//! (`/api/attendance/<date>`); `format_date_dmy` is the `DD/MM/YYYY` form
//! the Hebrew-date endpoint expects.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use chrono::{Datelike, NaiveDate};

use crate::error::DateError;

/// Days in the yeshiva week, Sunday through Friday.
pub const WEEK_LEN: usize = 6;

/// Format `date` as `YYYY-MM-DD` using its own (local) calendar fields.
#[must_use]
pub fn format_date<D: Datelike>(date: &D) -> String {
    format!("{}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Format `date` as `DD/MM/YYYY`.
#[must_use]
pub fn format_date_dmy<D: Datelike>(date: &D) -> String {
    format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
}

/// Hebrew dates arrive pre-formatted from the server (e.g. `א׳ בשבט תשפ״ה`)
/// and are passed through untouched.
#[must_use]
pub fn format_hebrew_date(hebrew_date: &str) -> &str {
    hebrew_date
}

/// Parse a `YYYY-MM-DD` string.
///
/// # Errors
///
/// Returns [`DateError::Invalid`] when `raw` is not a valid calendar date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| DateError::Invalid { input: raw.to_owned() })
}

/// Sunday through Friday of the week containing `day`.
#[must_use]
pub fn week_dates(day: NaiveDate) -> Vec<NaiveDate> {
    let back = chrono::Days::new(u64::from(day.weekday().num_days_from_sunday()));
    let sunday = day.checked_sub_days(back).unwrap_or(NaiveDate::MIN);
    sunday.iter_days().take(WEEK_LEN).collect()
}

/// Current local date. In the browser this reads the JS clock.
#[must_use]
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
