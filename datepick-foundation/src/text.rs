//! Default text representation of calendar dates.
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::{CalendarDate, ParseDateError};

const DATE_FORMATS: &[&str] = &[
    "%m/%d/%Y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%B %d %Y",
    "%b %d, %Y",
    "%b %d %Y",
    "%a %b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
];

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Formats `date` as `M/D/YYYY` without zero padding.
pub fn format_date(date: CalendarDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Reads a date from common textual forms.
///
/// Accepts `M/D/YYYY`, ISO dates, month-name forms and date-times. Offsets
/// in RFC 3339 input are converted to the local zone before the time of day
/// is dropped.
pub fn parse_date(text: &str) -> Result<CalendarDate, ParseDateError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseDateError::Empty);
    }

    if let Ok(date_time) = DateTime::parse_from_rfc3339(text) {
        return Ok(date_time.with_timezone(&Local).into());
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .map(CalendarDate::from)
        .or_else(|| {
            DATE_TIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
                .map(CalendarDate::from)
        })
        .ok_or_else(|| ParseDateError::Unrecognized(text.to_string()))
}

/// [`parse_date`], substituting today's date when the text is unreadable.
pub fn parse_date_or_today(text: &str) -> CalendarDate {
    parse_date(text).unwrap_or_else(|err| {
        debug!("falling back to today: {err}");
        CalendarDate::today()
    })
}
