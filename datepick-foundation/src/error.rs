use thiserror::Error;

use crate::CalendarDate;

/// Failure to read a calendar date from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseDateError {
    /// The text was empty or only whitespace.
    #[error("date text is empty")]
    Empty,
    /// The text matched none of the accepted forms.
    #[error("`{0}` is not a recognized date")]
    Unrecognized(String),
}

/// A range whose lower bound lies after its upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("range minimum {min} is after maximum {max}")]
pub struct InvertedRangeError {
    pub min: CalendarDate,
    pub max: CalendarDate,
}
