//! datepick is an embeddable date picker.
//!
//! It owns the picking logic and leaves drawing to the host: a
//! [`DatePicker`] is a state machine driven by [`Action`]s that exposes
//! render-ready view models ([`DayCell`], [`MonthCell`], [`YearCell`]) and
//! reports changes as [`PickerEvent`]s.
//!
//! # Quick start
//!
//! ```
//! use datepick::{DatePicker, DatePickerOptions, Key, TextInput};
//!
//! let options = DatePickerOptions::default().min("1/1/2015").max("12/31/2015");
//! let mut picker = DatePicker::new(TextInput::new("9/26/2015"), options).unwrap();
//!
//! picker.open();
//! picker.key_down(Key::Down);
//! picker.key_down(Key::Enter);
//!
//! assert_eq!(picker.input().text(), "10/3/2015");
//! assert!(!picker.is_open());
//! ```
//!
//! # Modes
//!
//! [`PickerMode::Modal`] and [`PickerMode::Dropdown`] are bound to a text
//! input and close after a selection. [`PickerMode::Permanent`] is an
//! always-open calendar; [`DateRangePicker`] pairs two of them.
//!
//! # Constraints
//!
//! Browsing is free, but the picker opens on, lists years within, and
//! commits only dates inside the configured range and
//! [`SelectableDates`] policy.

pub mod action;
pub mod cells;
pub mod emitter;
pub mod input;
pub mod mode;
pub mod options;
pub mod picker;
pub mod prop;
pub mod range;

pub use datepick_foundation::{
    self as foundation, CalendarDate, DateRange, DateValue, InvertedRangeError, ParseDateError,
    Weekday,
};

pub use crate::{
    action::{Action, CloseReason, Key, PickerEvent, View},
    cells::{DayCell, MonthCell, YearCell},
    emitter::{Emitter, HandlerId},
    input::{DetachedInput, InputBinding, TextInput},
    mode::PickerMode,
    options::{
        DatePickerConfig, DatePickerDefaults, DatePickerOptions, Lang, OptionsError,
        SelectableDates,
    },
    picker::{DatePicker, PickerState},
    prop::{ClassHook, DateHook, FormatHook, ParseHook, Slot},
    range::{DateRangePicker, RangeEvent, RangeMarks, RangeSide, RangeState},
};
