//! Actions applied to a picker and the events it emits in response.
use datepick_foundation::CalendarDate;

/// Which granularity the user is currently choosing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    /// Month grid of days.
    #[default]
    Day,
    /// Twelve months of the current year.
    Month,
    /// Years between the bounds, latest first.
    Year,
}

/// Keys the picker reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Enter or Return.
    Enter,
    /// Escape.
    Escape,
}

/// Why a picker closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloseReason {
    /// Explicit close request.
    Command,
    /// Escape pressed in the day view.
    Escape,
    /// Focus left the picker.
    Blur,
    /// A date was selected or the selection was cleared.
    Selection,
    /// The input was activated while the picker was open.
    Toggle,
}

/// Everything a user (or host) can do to a picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Open the picker on the seeded date.
    Open,
    /// Close the picker on request.
    Close,
    /// Open when closed, close when open.
    Toggle,
    /// Focus left the picker; close it.
    Blur,
    /// A key press, interpreted for the current view.
    Key(Key),
    /// Move the current date by whole days (day view).
    NavigateDay(i64),
    /// Move the current date by months (day view).
    NavigateMonth(i32),
    /// Move through the month list without changing year (month view).
    NavigateMonthPicker(i32),
    /// Move through the year list, clamped to the bounds (year view).
    NavigateYearPicker(i32),
    /// Switch from the day view to the month list.
    OpenMonthPicker,
    /// Switch from the day view to the year list.
    OpenYearPicker,
    /// Pick a month (1-12) and return to the day view.
    ChooseMonth(u8),
    /// Pick a year and return to the day view.
    ChooseYear(i32),
    /// Leave the month or year list, or close from the day view.
    Escape,
    /// Commit a date if it is selectable.
    Select(CalendarDate),
    /// Commit today's date if it is selectable.
    SelectToday,
    /// Remove the selection and empty the input.
    Clear,
    /// Move the current date without any checks.
    Goto(CalendarDate),
    /// The bound input's text was edited.
    InputChanged(String),
}

impl Action {
    /// Translates a key press in `view` with the cursor on `current`.
    pub fn for_key(key: Key, view: View, current: CalendarDate) -> Action {
        match (view, key) {
            (_, Key::Escape) => Action::Escape,
            (View::Day, Key::Left) => Action::NavigateDay(-1),
            (View::Day, Key::Right) => Action::NavigateDay(1),
            (View::Day, Key::Up) => Action::NavigateDay(-7),
            (View::Day, Key::Down) => Action::NavigateDay(7),
            (View::Day, Key::Enter) => Action::Select(current),
            (View::Month, Key::Left) => Action::NavigateMonthPicker(-1),
            (View::Month, Key::Right) => Action::NavigateMonthPicker(1),
            (View::Month, Key::Up) => Action::NavigateMonthPicker(-3),
            (View::Month, Key::Down) => Action::NavigateMonthPicker(3),
            (View::Month, Key::Enter) => Action::ChooseMonth(current.month()),
            // Years are listed latest first, so moving up goes forward in time.
            (View::Year, Key::Left | Key::Up) => Action::NavigateYearPicker(1),
            (View::Year, Key::Right | Key::Down) => Action::NavigateYearPicker(-1),
            (View::Year, Key::Enter) => Action::ChooseYear(current.year()),
        }
    }
}

/// Notifications emitted by a picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// The picker opened on `current_date`.
    Open {
        current_date: CalendarDate,
    },
    /// The picker closed.
    Close {
        reason: CloseReason,
    },
    /// The view or the current date changed.
    StateChange {
        view: View,
        current_date: CalendarDate,
    },
    /// The bound input's text was replaced.
    Change {
        value: String,
    },
    /// A date was committed, or the selection was cleared.
    Select {
        date: Option<CalendarDate>,
    },
}
