//! Mutation-free date arithmetic.
//!
//! Every function takes dates by value and returns a new one. Month shifts
//! never roll into the following month: a day that does not exist in the
//! target month is pulled back to that month's last day.
use crate::{CalendarDate, InvertedRangeError};

/// Returns the current local date.
pub fn today() -> CalendarDate {
    CalendarDate::today()
}

/// Compares two optional dates by calendar day.
///
/// Two missing dates are equal; a missing date never equals a present one.
pub fn dates_eq(a: Option<CalendarDate>, b: Option<CalendarDate>) -> bool {
    a == b
}

/// Shifts `date` by `n` days, crossing month and year boundaries.
///
/// Saturates at [`CalendarDate::MIN`] and [`CalendarDate::MAX`].
pub fn shift_days(date: CalendarDate, n: i64) -> CalendarDate {
    date.saturating_add_days(n)
}

/// Shifts `date` by `n` months.
///
/// When `wrap_year` is set the year is left alone and the month index wraps
/// modulo 12 instead.
pub fn shift_months(date: CalendarDate, n: i32, wrap_year: bool) -> CalendarDate {
    let index = date.month() as i64 - 1 + n as i64;
    let year = if wrap_year {
        date.year() as i64
    } else {
        date.year() as i64 + index.div_euclid(12)
    };
    let month = (index.rem_euclid(12) + 1) as u8;
    CalendarDate::clamped(year, month, date.day())
}

/// Shifts `date` by `n` years. Feb 29 lands on Feb 28 in a common year.
pub fn shift_years(date: CalendarDate, n: i32) -> CalendarDate {
    CalendarDate::clamped(date.year() as i64 + n as i64, date.month(), date.day())
}

/// Moves `date` into `year`, keeping month and day.
pub fn set_year(date: CalendarDate, year: i32) -> CalendarDate {
    CalendarDate::clamped(year as i64, date.month(), date.day())
}

/// Moves `date` into `month` (1-12) of the same year, clamping the day.
///
/// Values outside 1-12 behave like the equivalent shift, so 13 is January
/// of the next year and 0 is December of the previous one.
pub fn set_month(date: CalendarDate, month: u8) -> CalendarDate {
    shift_months(date, month as i32 - date.month() as i32, false)
}

/// Returns `min` if `date` is before it, `max` if after it, else `date`.
pub fn clamp_to_range(date: CalendarDate, min: CalendarDate, max: CalendarDate) -> CalendarDate {
    if date < min {
        min
    } else if date > max {
        max
    } else {
        date
    }
}

/// Number of month boundaries from `from` to `to`.
pub fn diff_months(from: CalendarDate, to: CalendarDate) -> i32 {
    let months = |date: CalendarDate| date.year() * 12 + date.month() as i32;
    months(to) - months(from)
}

/// An inclusive `[min, max]` span of dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    min: CalendarDate,
    max: CalendarDate,
}

impl DateRange {
    /// Creates a range, rejecting `min > max`.
    pub fn new(min: CalendarDate, max: CalendarDate) -> Result<Self, InvertedRangeError> {
        if min > max {
            return Err(InvertedRangeError { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound (inclusive).
    pub fn min(&self) -> CalendarDate {
        self.min
    }

    /// Upper bound (inclusive).
    pub fn max(&self) -> CalendarDate {
        self.max
    }

    /// Returns true when `date` lies within the range.
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.min <= date && date <= self.max
    }

    /// Forces `date` into the range.
    pub fn clamp(&self, date: CalendarDate) -> CalendarDate {
        clamp_to_range(date, self.min, self.max)
    }
}

/// A date option that is either already a date or still text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateValue {
    /// Already a date.
    Date(CalendarDate),
    /// Text still to be parsed.
    Text(String),
}

impl From<CalendarDate> for DateValue {
    fn from(date: CalendarDate) -> Self {
        DateValue::Date(date)
    }
}

impl From<&str> for DateValue {
    fn from(text: &str) -> Self {
        DateValue::Text(text.to_string())
    }
}

impl From<String> for DateValue {
    fn from(text: String) -> Self {
        DateValue::Text(text)
    }
}

/// Builds a normalizer that passes dates through and runs `parse` on text.
///
/// Results are always day-granular, so no time of day survives.
pub fn date_or_parse<F>(parse: F) -> impl Fn(DateValue) -> CalendarDate
where
    F: Fn(&str) -> CalendarDate,
{
    move |value| match value {
        DateValue::Date(date) => date,
        DateValue::Text(text) => parse(&text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn dates_eq_handles_missing_values() {
        assert!(dates_eq(None, None));
        assert!(!dates_eq(Some(today()), None));
        assert!(!dates_eq(None, Some(today())));
        assert!(dates_eq(Some(date(2015, 9, 26)), Some(date(2015, 9, 26))));
        assert!(!dates_eq(Some(date(2015, 9, 26)), Some(date(2015, 9, 27))));
    }

    #[test]
    fn shift_days_crosses_boundaries() {
        assert_eq!(shift_days(date(2010, 1, 2), 1), date(2010, 1, 3));
        assert_eq!(shift_days(date(2010, 1, 2), -10), date(2009, 12, 23));
        assert_eq!(shift_days(date(2016, 2, 28), 1), date(2016, 2, 29));
        assert_eq!(shift_days(date(2015, 2, 28), 1), date(2015, 3, 1));
        assert_eq!(shift_days(date(2015, 9, 26), -7), date(2015, 9, 19));
        assert_eq!(shift_days(date(2015, 9, 26), 7), date(2015, 10, 3));
    }

    #[test]
    fn shift_days_leaves_input_untouched() {
        let start = date(2015, 9, 26);
        let next = shift_days(start, 1);
        assert_ne!(start, next);
        assert_eq!(start, date(2015, 9, 26));
    }

    #[test]
    fn shift_months_moves_across_years() {
        assert_eq!(shift_months(date(1999, 1, 2), 2, false), date(1999, 3, 2));
        assert_eq!(shift_months(date(1999, 1, 2), -3, false), date(1998, 10, 2));
        assert_eq!(shift_months(date(1999, 11, 2), 26, false), date(2002, 1, 2));
    }

    #[test]
    fn shift_months_wraps_without_changing_year() {
        assert_eq!(shift_months(date(1999, 1, 2), -3, true), date(1999, 10, 2));
        assert_eq!(shift_months(date(1999, 11, 2), 3, true), date(1999, 2, 2));
        assert_eq!(shift_months(date(1999, 1, 2), -15, true), date(1999, 10, 2));
    }

    #[test]
    fn shift_months_clamps_to_end_of_month() {
        assert_eq!(shift_months(date(2015, 1, 31), 1, false), date(2015, 2, 28));
        assert_eq!(shift_months(date(2016, 1, 31), 1, false), date(2016, 2, 29));
        assert_eq!(shift_months(date(2015, 10, 31), 1, false), date(2015, 11, 30));
        assert_eq!(shift_months(date(2015, 12, 31), -1, false), date(2015, 11, 30));
        assert_eq!(shift_months(date(2017, 5, 31), 1, false), date(2017, 6, 30));
        assert_eq!(shift_months(date(2018, 3, 31), -1, false), date(2018, 2, 28));
        assert_eq!(shift_months(date(2018, 5, 31), -1, false), date(2018, 4, 30));
    }

    #[test]
    fn clamped_month_shift_does_not_round_trip() {
        let there = shift_months(date(2015, 5, 31), 1, false);
        assert_eq!(there, date(2015, 6, 30));
        assert_eq!(shift_months(there, -1, false), date(2015, 5, 30));
    }

    #[test]
    fn unclamped_month_shift_round_trips() {
        let start = date(2015, 5, 15);
        for n in -30..30 {
            assert_eq!(shift_months(shift_months(start, n, false), -n, false), start);
        }
    }

    #[test]
    fn shift_years_keeps_month_and_day() {
        assert_eq!(shift_years(date(2005, 3, 4), 1), date(2006, 3, 4));
        assert_eq!(shift_years(date(2005, 3, 4), -5), date(2000, 3, 4));
        assert_eq!(shift_years(date(2016, 2, 29), 1), date(2017, 2, 28));
        assert_eq!(shift_years(date(2016, 2, 29), 4), date(2020, 2, 29));
    }

    #[test]
    fn extreme_shifts_stop_at_the_representable_bounds() {
        let start = date(2015, 9, 26);
        assert_eq!(shift_days(start, i64::MAX), CalendarDate::MAX);
        assert_eq!(shift_days(start, i64::MIN), CalendarDate::MIN);
        assert_eq!(shift_days(start, 1_000_000_000_000), CalendarDate::MAX);

        let far = shift_days(start, 36_500_000);
        assert_eq!(shift_days(far, -36_500_000), start);

        assert_eq!(set_year(start, i32::MIN).year(), CalendarDate::MIN.year());
        assert_eq!(set_year(start, i32::MAX).year(), CalendarDate::MAX.year());
        assert_eq!(set_year(start, i32::MAX).month(), 9);
        assert_eq!(shift_years(start, i32::MAX).year(), CalendarDate::MAX.year());
        assert_eq!(shift_months(start, i32::MIN, false).year(), CalendarDate::MIN.year());
        assert_eq!(shift_months(start, i32::MAX, true).year(), 2015);
    }

    #[test]
    fn set_year_and_month() {
        assert_eq!(set_year(date(2005, 3, 4), 2011), date(2011, 3, 4));
        assert_eq!(set_month(date(2005, 3, 4), 9), date(2005, 9, 4));
        assert_eq!(set_month(date(2017, 5, 31), 6), date(2017, 6, 30));
        assert_eq!(set_month(date(2018, 3, 31), 2), date(2018, 2, 28));
        assert_eq!(set_month(date(2018, 5, 31), 4), date(2018, 4, 30));
        assert_eq!(set_month(date(2018, 5, 31), 13), date(2019, 1, 31));
    }

    #[test]
    fn clamp_to_range_picks_nearest_bound() {
        let min = date(2003, 1, 1);
        let max = date(2020, 1, 1);
        assert_eq!(clamp_to_range(date(2003, 1, 2), min, max), date(2003, 1, 2));
        assert_eq!(clamp_to_range(date(2002, 1, 2), min, max), min);
        assert_eq!(clamp_to_range(date(2033, 1, 2), min, max), max);
        assert_eq!(clamp_to_range(min, min, max), min);
        assert_eq!(clamp_to_range(max, min, max), max);
    }

    #[test]
    fn clamp_to_range_is_idempotent() {
        let min = date(2015, 9, 23);
        let max = date(2015, 10, 23);
        for offset in -40..80 {
            let value = shift_days(min, offset);
            let once = clamp_to_range(value, min, max);
            assert_eq!(clamp_to_range(once, min, max), once);
        }
    }

    #[test]
    fn diff_months_counts_month_boundaries() {
        assert_eq!(diff_months(date(2015, 9, 30), date(2015, 10, 1)), 1);
        assert_eq!(diff_months(date(2015, 12, 1), date(2016, 1, 31)), 1);
        assert_eq!(diff_months(date(2016, 1, 1), date(2015, 11, 1)), -2);
        assert_eq!(diff_months(date(2016, 1, 1), date(2016, 1, 31)), 0);
    }

    #[test]
    fn date_range_rejects_inverted_bounds() {
        let err = DateRange::new(date(2015, 9, 24), date(2015, 9, 23)).unwrap_err();
        assert_eq!(err.min, date(2015, 9, 24));
        let single = DateRange::new(date(2015, 9, 23), date(2015, 9, 23)).unwrap();
        assert!(single.contains(date(2015, 9, 23)));
        assert!(!single.contains(date(2015, 9, 26)));
        assert_eq!(single.clamp(date(2015, 9, 26)), date(2015, 9, 23));
    }

    #[test]
    fn date_or_parse_only_parses_text() {
        let fixed = date(2003, 1, 2);
        let normalize = date_or_parse(|text: &str| {
            assert_eq!(text, "1/2/2003");
            fixed
        });
        assert_eq!(normalize(DateValue::from("1/2/2003")), fixed);
        let other = date(1999, 12, 31);
        assert_eq!(normalize(DateValue::from(other)), other);
    }
}
