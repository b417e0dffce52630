//! Picker configuration.
//!
//! [`DatePickerOptions`] is what hosts fill in. [`DatePickerOptions::build`]
//! resolves defaults and date strings once and validates the result into an
//! immutable [`DatePickerConfig`].
use std::{sync::Arc, time::Duration};

use datepick_foundation::{
    CalendarDate, DateRange, DateValue, InvertedRangeError, ParseDateError, Weekday,
    date_manip::{date_or_parse, shift_years},
};
use derive_setters::Setters;
use thiserror::Error;
use tracing::debug;

use crate::{
    mode::PickerMode,
    prop::{ClassHook, FormatHook, ParseHook, default_class, default_format},
};

/// Controls which dates are selectable in the date picker.
///
/// The configured min/max bounds always apply on top of this policy.
pub trait SelectableDates: Send + Sync {
    /// Returns true when the date can be selected.
    fn is_selectable_date(&self, _date: CalendarDate) -> bool {
        true
    }

    /// Returns true when the year can be selected.
    fn is_selectable_year(&self, _year: i32) -> bool {
        true
    }
}

impl<F> SelectableDates for F
where
    F: Fn(CalendarDate) -> bool + Send + Sync,
{
    fn is_selectable_date(&self, date: CalendarDate) -> bool {
        self(date)
    }
}

/// Defaults for date picker behavior.
pub struct DatePickerDefaults;

impl DatePickerDefaults {
    /// Years before and after today covered by the default min/max.
    pub const YEAR_SPAN: i32 = 100;

    /// Window after a close during which open requests are ignored.
    pub const REOPEN_GUARD: Duration = Duration::from_millis(100);

    /// Returns a selectable-dates policy that allows every date.
    pub fn all_dates() -> Arc<dyn SelectableDates> {
        Arc::new(|_: CalendarDate| true)
    }
}

/// Errors raised while building a [`DatePickerConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error(transparent)]
    InvertedRange(#[from] InvertedRangeError),
    #[error("expected {expected} {what} labels, found {actual}")]
    LabelCount {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Labels shown by the picker.
#[derive(Debug, Clone, PartialEq, Eq, Setters)]
pub struct Lang {
    /// Weekday labels, Sunday first.
    pub days: Vec<String>,
    /// Month labels, January first.
    pub months: Vec<String>,
    /// Label of the "select today" button.
    #[setters(into)]
    pub today: String,
    /// Label of the clear button.
    #[setters(into)]
    pub clear: String,
    /// Label of the close button.
    #[setters(into)]
    pub close: String,
}

impl Default for Lang {
    fn default() -> Self {
        fn owned(labels: &[&str]) -> Vec<String> {
            labels.iter().map(|label| label.to_string()).collect()
        }

        Self {
            days: owned(&["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]),
            months: owned(&[
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ]),
            today: "Today".to_string(),
            clear: "Clear".to_string(),
            close: "Close".to_string(),
        }
    }
}

impl Lang {
    /// Label for `month` (1-12).
    pub fn month_name(&self, month: u8) -> &str {
        let index = (month as usize).saturating_sub(1);
        self.months.get(index).map(String::as_str).unwrap_or_default()
    }

    fn validate(&self) -> Result<(), OptionsError> {
        let check = |what, expected, actual| {
            if actual == expected {
                Ok(())
            } else {
                Err(OptionsError::LabelCount {
                    what,
                    expected,
                    actual,
                })
            }
        };
        check("weekday", 7, self.days.len())?;
        check("month", 12, self.months.len())
    }
}

/// Options for a [`DatePicker`](crate::DatePicker).
///
/// Unset bounds default to a hundred years either side of today; an unset
/// highlighted date defaults to today.
#[derive(Clone, Setters)]
pub struct DatePickerOptions {
    /// Presentation mode.
    pub mode: PickerMode,
    /// Labels.
    pub lang: Lang,
    /// First column of the day grid.
    pub week_start: Weekday,
    /// Window after a close during which open requests are ignored.
    pub reopen_guard: Duration,
    /// Date shown when the input is empty.
    #[setters(skip)]
    pub highlighted_date: Option<DateValue>,
    /// Earliest selectable date.
    #[setters(skip)]
    pub min: Option<DateValue>,
    /// Latest selectable date.
    #[setters(skip)]
    pub max: Option<DateValue>,
    /// Date to text.
    #[setters(skip)]
    pub format: FormatHook,
    /// Text to date.
    #[setters(skip)]
    pub parse: ParseHook,
    /// Extra selectability policy.
    #[setters(skip)]
    pub selectable_dates: Arc<dyn SelectableDates>,
    /// Extra presentation classes per day.
    #[setters(skip)]
    pub date_class: ClassHook,
}

impl Default for DatePickerOptions {
    fn default() -> Self {
        Self {
            mode: PickerMode::default(),
            lang: Lang::default(),
            week_start: Weekday::Sunday,
            reopen_guard: DatePickerDefaults::REOPEN_GUARD,
            highlighted_date: None,
            min: None,
            max: None,
            format: default_format(),
            parse: ParseHook::default(),
            selectable_dates: DatePickerDefaults::all_dates(),
            date_class: default_class(),
        }
    }
}

impl DatePickerOptions {
    /// Sets the date shown when the input is empty.
    pub fn highlighted_date(mut self, date: impl Into<DateValue>) -> Self {
        self.highlighted_date = Some(date.into());
        self
    }

    /// Sets the earliest selectable date.
    pub fn min(mut self, date: impl Into<DateValue>) -> Self {
        self.min = Some(date.into());
        self
    }

    /// Sets the latest selectable date.
    pub fn max(mut self, date: impl Into<DateValue>) -> Self {
        self.max = Some(date.into());
        self
    }

    /// Replaces the formatter.
    pub fn format<F>(mut self, format: F) -> Self
    where
        F: Fn(CalendarDate) -> String + Send + Sync + 'static,
    {
        self.format = FormatHook::new(format);
        self
    }

    /// Replaces the parser.
    pub fn parse<F>(mut self, parse: F) -> Self
    where
        F: Fn(&str) -> Result<CalendarDate, ParseDateError> + Send + Sync + 'static,
    {
        self.parse = ParseHook::new(parse);
        self
    }

    /// Restricts selectable dates beyond the min/max bounds.
    pub fn selectable_dates(mut self, policy: impl SelectableDates + 'static) -> Self {
        self.selectable_dates = Arc::new(policy);
        self
    }

    /// Adds presentation classes to day cells.
    pub fn date_class<F>(mut self, classify: F) -> Self
    where
        F: Fn(CalendarDate) -> String + Send + Sync + 'static,
    {
        self.date_class = ClassHook::new(classify);
        self
    }

    /// Resolves defaults and date strings and validates the result.
    pub fn build(self) -> Result<DatePickerConfig, OptionsError> {
        self.lang.validate()?;

        let today = CalendarDate::today();
        let parse = self.parse.clone();
        let resolve = date_or_parse(|text| parse_or_today(&parse, text));

        let min = resolve(
            self.min
                .unwrap_or_else(|| shift_years(today, -DatePickerDefaults::YEAR_SPAN).into()),
        );
        let max = resolve(
            self.max
                .unwrap_or_else(|| shift_years(today, DatePickerDefaults::YEAR_SPAN).into()),
        );
        let range = DateRange::new(min, max)?;
        let highlighted_date = resolve(self.highlighted_date.unwrap_or_else(|| today.into()));

        Ok(DatePickerConfig {
            mode: self.mode,
            lang: self.lang,
            week_start: self.week_start,
            reopen_guard: self.reopen_guard,
            highlighted_date,
            range,
            format: self.format,
            parse: self.parse,
            selectable_dates: self.selectable_dates,
            date_class: self.date_class,
        })
    }
}

fn parse_or_today(parse: &ParseHook, text: &str) -> CalendarDate {
    parse.call(text).unwrap_or_else(|err| {
        debug!("falling back to today: {err}");
        CalendarDate::today()
    })
}

/// Resolved, validated picker configuration.
#[derive(Clone)]
pub struct DatePickerConfig {
    mode: PickerMode,
    lang: Lang,
    week_start: Weekday,
    reopen_guard: Duration,
    highlighted_date: CalendarDate,
    range: DateRange,
    format: FormatHook,
    parse: ParseHook,
    selectable_dates: Arc<dyn SelectableDates>,
    date_class: ClassHook,
}

impl DatePickerConfig {
    /// Presentation mode.
    pub fn mode(&self) -> PickerMode {
        self.mode
    }

    /// Labels.
    pub fn lang(&self) -> &Lang {
        &self.lang
    }

    /// First column of the day grid.
    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// Window after a close during which open requests are ignored.
    pub fn reopen_guard(&self) -> Duration {
        self.reopen_guard
    }

    /// Date shown when there is nothing to seed from.
    pub fn highlighted_date(&self) -> CalendarDate {
        self.highlighted_date
    }

    /// Inclusive selectable bounds.
    pub fn range(&self) -> DateRange {
        self.range
    }

    /// Whether `date` may be selected: inside the bounds and accepted by the
    /// selectable-dates policy.
    pub fn in_range(&self, date: CalendarDate) -> bool {
        self.range.contains(date)
            && self.selectable_dates.is_selectable_year(date.year())
            && self.selectable_dates.is_selectable_date(date)
    }

    /// Whether any part of `year` may be selected.
    pub fn is_year_selectable(&self, year: i32) -> bool {
        (self.range.min().year()..=self.range.max().year()).contains(&year)
            && self.selectable_dates.is_selectable_year(year)
    }

    /// Text written to the input for `date`.
    pub fn format(&self, date: CalendarDate) -> String {
        self.format.call(date)
    }

    /// Reads a date from text, substituting today when it is unreadable.
    pub fn parse(&self, text: &str) -> CalendarDate {
        parse_or_today(&self.parse, text)
    }

    /// Reads a date from text without any fallback.
    pub fn try_parse(&self, text: &str) -> Result<CalendarDate, ParseDateError> {
        self.parse.call(text)
    }

    /// Extra presentation classes for `date`.
    pub fn date_class(&self, date: CalendarDate) -> String {
        self.date_class.call(date)
    }
}

#[cfg(test)]
mod tests {
    use datepick_foundation::date_manip::shift_days;

    use super::*;

    fn date(year: i32, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn lang_defaults_to_english() {
        let lang = Lang::default();
        assert_eq!(lang.close, "Close");
        assert_eq!(lang.today, "Today");
        assert_eq!(lang.days[0], "Sun");
        assert_eq!(lang.month_name(1), "January");
        assert_eq!(lang.month_name(12), "December");
    }

    #[test]
    fn lang_fields_can_be_overridden_individually() {
        let lang = Lang::default().close("X");
        assert_eq!(lang.close, "X");
        assert_eq!(lang.today, "Today");
        assert_eq!(lang.clear, "Clear");
    }

    #[test]
    fn bounds_default_to_a_century_around_today() {
        let config = DatePickerOptions::default().build().unwrap();
        let year = CalendarDate::today().year();
        assert_eq!(config.range().min().year(), year - 100);
        assert_eq!(config.range().max().year(), year + 100);
        assert_eq!(config.highlighted_date(), CalendarDate::today());
        assert_eq!(config.mode(), PickerMode::Modal);
    }

    #[test]
    fn bounds_accept_text_and_dates() {
        let config = DatePickerOptions::default()
            .min("10/20/2000")
            .max(date(2010, 10, 20))
            .build()
            .unwrap();
        assert_eq!(config.range().min(), date(2000, 10, 20));
        assert_eq!(config.range().max(), date(2010, 10, 20));
    }

    #[test]
    fn in_range_combines_policy_with_bounds() {
        let config = DatePickerOptions::default()
            .min("10/20/2000")
            .max("10/20/2010")
            .selectable_dates(|date: CalendarDate| date.year() != 2001)
            .build()
            .unwrap();

        assert!(config.in_range(date(2000, 10, 20)));
        assert!(config.in_range(date(2010, 10, 20)));
        assert!(!config.in_range(date(2010, 10, 21)));
        assert!(!config.in_range(date(2000, 10, 19)));
        assert!(!config.in_range(date(2001, 10, 19)));
        assert!(config.in_range(date(2002, 10, 19)));
    }

    #[test]
    fn inverted_bounds_fail_fast() {
        let err = DatePickerOptions::default()
            .min("9/24/2015")
            .max("9/23/2015")
            .build()
            .err()
            .unwrap();
        assert_eq!(
            err,
            OptionsError::InvertedRange(InvertedRangeError {
                min: date(2015, 9, 24),
                max: date(2015, 9, 23),
            })
        );
    }

    #[test]
    fn wrong_label_counts_are_rejected() {
        let lang = Lang::default().days(vec!["S".to_string(); 6]);
        let err = DatePickerOptions::default().lang(lang).build().err().unwrap();
        assert_eq!(
            err,
            OptionsError::LabelCount {
                what: "weekday",
                expected: 7,
                actual: 6,
            }
        );
    }

    #[test]
    fn unreadable_bounds_fall_back_to_today() {
        let today = CalendarDate::today();
        let config = DatePickerOptions::default()
            .min("garbage")
            .max(shift_days(today, 10))
            .build()
            .unwrap();
        assert_eq!(config.range().min(), today);
    }

    #[test]
    fn custom_parse_is_used_for_text_options() {
        let fixed = date(2014, 2, 3);
        let config = DatePickerOptions::default()
            .parse(move |_| Ok(fixed))
            .highlighted_date("anything")
            .build()
            .unwrap();
        assert_eq!(config.highlighted_date(), fixed);
        assert_eq!(config.parse("not a real date"), fixed);
    }

    #[test]
    fn default_format_is_us_style() {
        let config = DatePickerOptions::default().build().unwrap();
        assert_eq!(config.format(date(2017, 9, 7)), "9/7/2017");
        assert_eq!(config.date_class(date(2017, 9, 7)), "");
    }

    #[test]
    fn year_selectability_follows_bounds_and_policy() {
        struct NoLeapYears;
        impl SelectableDates for NoLeapYears {
            fn is_selectable_year(&self, year: i32) -> bool {
                !datepick_foundation::is_leap_year(year)
            }
        }

        let config = DatePickerOptions::default()
            .min("1/1/2014")
            .max("12/31/2017")
            .selectable_dates(NoLeapYears)
            .build()
            .unwrap();
        assert!(config.is_year_selectable(2015));
        assert!(!config.is_year_selectable(2016));
        assert!(!config.is_year_selectable(2018));
        assert!(!config.in_range(date(2016, 3, 1)));
        assert!(config.in_range(date(2017, 3, 1)));
    }
}
