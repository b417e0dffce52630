//! Host-supplied hooks.
//!
//! ## Usage
//!
//! Hooks are stored in [`DatePickerOptions`](crate::DatePickerOptions) and
//! shared by every picker built from them. They compare by identity, so two
//! option sets built from the same closure are equal without comparing
//! closures deeply.

use std::sync::Arc;

use datepick_foundation::{CalendarDate, ParseDateError, text};

/// Stable, comparable slot handle for any shared callable trait object.
///
/// `Slot` compares by identity (`Arc::ptr_eq`).
pub struct Slot<F: ?Sized> {
    inner: Arc<F>,
}

impl<F: ?Sized> Slot<F> {
    /// Create a slot from a shared callable trait object.
    pub fn from_shared(handler: Arc<F>) -> Self {
        Self { inner: handler }
    }

    /// Read the current callable.
    pub fn shared(&self) -> Arc<F> {
        Arc::clone(&self.inner)
    }
}

impl<F: ?Sized> Clone for Slot<F> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<F: ?Sized> PartialEq for Slot<F> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<F: ?Sized> Eq for Slot<F> {}

/// Comparable handle for a per-date hook returning `R`.
///
/// Used for the formatter (`R = String`) and the date classifier.
pub struct DateHook<R> {
    slot: Slot<dyn Fn(CalendarDate) -> R + Send + Sync>,
}

impl<R> DateHook<R> {
    /// Create a hook from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(CalendarDate) -> R + Send + Sync + 'static,
    {
        Self {
            slot: Slot::from_shared(Arc::new(handler)),
        }
    }

    /// Invoke the hook for `date`.
    pub fn call(&self, date: CalendarDate) -> R {
        let handler = self.slot.shared();
        handler(date)
    }
}

impl<R> Clone for DateHook<R> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<R> PartialEq for DateHook<R> {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot
    }
}

impl<R> Eq for DateHook<R> {}

impl<R, F> From<F> for DateHook<R>
where
    F: Fn(CalendarDate) -> R + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

/// Turns a date into the text written to the bound input.
pub type FormatHook = DateHook<String>;

/// Extra presentation classes for a day cell.
pub type ClassHook = DateHook<String>;

pub(crate) fn default_format() -> FormatHook {
    FormatHook::new(text::format_date)
}

pub(crate) fn default_class() -> ClassHook {
    ClassHook::new(|_| String::new())
}

/// Comparable handle for the text-to-date hook.
#[derive(Clone)]
pub struct ParseHook {
    slot: Slot<dyn Fn(&str) -> Result<CalendarDate, ParseDateError> + Send + Sync>,
}

impl ParseHook {
    /// Create a parse hook from a closure.
    pub fn new<F>(parse: F) -> Self
    where
        F: Fn(&str) -> Result<CalendarDate, ParseDateError> + Send + Sync + 'static,
    {
        Self {
            slot: Slot::from_shared(Arc::new(parse)),
        }
    }

    /// Run the hook.
    pub fn call(&self, input: &str) -> Result<CalendarDate, ParseDateError> {
        let parse = self.slot.shared();
        parse(input)
    }
}

impl Default for ParseHook {
    fn default() -> Self {
        Self::new(text::parse_date)
    }
}

impl PartialEq for ParseHook {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot
    }
}

impl Eq for ParseHook {}
