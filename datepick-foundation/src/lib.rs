//! Calendar primitives for datepick.
//!
//! This crate has no notion of a picker. It provides the day-granular
//! [`CalendarDate`] value, mutation-free arithmetic over it, the default
//! `M/D/YYYY` text form, and the six-week month grid layout.
//!
//! # Example
//!
//! ```
//! use datepick_foundation::{CalendarDate, date_manip::shift_months};
//!
//! let jan_31 = CalendarDate::new(2015, 1, 31).unwrap();
//! let feb = shift_months(jan_31, 1, false);
//! assert_eq!(feb, CalendarDate::new(2015, 2, 28).unwrap());
//! ```

mod calendar_date;
mod error;

pub mod date_manip;
pub mod grid;
pub mod text;

pub use calendar_date::{CalendarDate, Weekday, days_in_month, is_leap_year};
pub use date_manip::{DateRange, DateValue};
pub use error::{InvertedRangeError, ParseDateError};
