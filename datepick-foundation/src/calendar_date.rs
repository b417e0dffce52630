//! Day-granularity calendar values.
//!
//! [`CalendarDate`] never carries a time of day. Conversions from `chrono`
//! date-times discard it, so two values taken at different hours of the same
//! day compare equal.
use std::fmt;

use chrono::{DateTime, Datelike, Days, Local, Months, NaiveDate, NaiveDateTime, TimeZone};

/// Days of the week in Sunday-first order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Weekday {
    /// Sunday.
    #[default]
    Sunday,
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
}

impl Weekday {
    /// Returns the index of this weekday counted from Sunday (0-6).
    pub fn num_days_from_sunday(self) -> u8 {
        match self {
            Weekday::Sunday => 0,
            Weekday::Monday => 1,
            Weekday::Tuesday => 2,
            Weekday::Wednesday => 3,
            Weekday::Thursday => 4,
            Weekday::Friday => 5,
            Weekday::Saturday => 6,
        }
    }

    /// Returns the weekday at `index` days after Sunday, wrapping modulo 7.
    pub fn from_sunday_index(index: i64) -> Self {
        match index.rem_euclid(7) {
            0 => Weekday::Sunday,
            1 => Weekday::Monday,
            2 => Weekday::Tuesday,
            3 => Weekday::Wednesday,
            4 => Weekday::Thursday,
            5 => Weekday::Friday,
            _ => Weekday::Saturday,
        }
    }
}

/// A calendar date expressed as year, month, and day.
///
/// Ordering is chronological. Years are bounded by what `chrono` can
/// represent; arithmetic that would leave that span stops at
/// [`CalendarDate::MIN`] or [`CalendarDate::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Earliest representable date.
    pub const MIN: Self = Self(NaiveDate::MIN);
    /// Latest representable date.
    pub const MAX: Self = Self(NaiveDate::MAX);

    /// Creates a calendar date if the values are valid.
    pub fn new(year: i32, month: u8, day: u8) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month as u32, day as u32).map(Self)
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month (1-12).
    pub fn month(&self) -> u8 {
        self.0.month() as u8
    }

    /// Returns the day of the month (1-31).
    pub fn day(&self) -> u8 {
        self.0.day() as u8
    }

    /// Returns the current local date.
    pub fn today() -> Self {
        Local::now().date_naive().into()
    }

    /// Returns the weekday this date falls on.
    pub fn weekday(&self) -> Weekday {
        Weekday::from_sunday_index(self.0.weekday().num_days_from_sunday() as i64)
    }

    /// Moves by `n` days, stopping at the representable bounds.
    pub(crate) fn saturating_add_days(self, n: i64) -> Self {
        let days = Days::new(n.unsigned_abs());
        let shifted = if n < 0 {
            self.0.checked_sub_days(days)
        } else {
            self.0.checked_add_days(days)
        };
        match shifted {
            Some(date) => Self(date),
            None if n < 0 => Self::MIN,
            None => Self::MAX,
        }
    }

    /// Builds a date, pulling `day` back to the last day of the month when
    /// the month is shorter and `year` into the representable span.
    pub(crate) fn clamped(year: i64, month: u8, day: u8) -> Self {
        let year = year.clamp(Self::MIN.year() as i64, Self::MAX.year() as i64) as i32;
        let day = day.clamp(1, days_in_month(year, month));
        Self::new(year, month, day).unwrap_or(if year < 0 { Self::MIN } else { Self::MAX })
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<NaiveDateTime> for CalendarDate {
    fn from(date_time: NaiveDateTime) -> Self {
        Self(date_time.date())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for CalendarDate {
    fn from(date_time: DateTime<Tz>) -> Self {
        Self(date_time.date_naive())
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

/// Returns the number of days in `month` (1-12) of `year`.
///
/// Months outside 1-12 and years outside the representable span report 31.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    NaiveDate::from_ymd_opt(year, month as u32, 1)
        .and_then(|first| {
            let next = first.checked_add_months(Months::new(1))?;
            Some(next.signed_duration_since(first).num_days() as u8)
        })
        .unwrap_or(31)
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}
