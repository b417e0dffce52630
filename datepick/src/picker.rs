//! The date picker state machine.
//!
//! A [`DatePicker`] is either closed or open with a [`PickerState`]. Every
//! user interaction is an [`Action`]; hosts may call [`DatePicker::dispatch`]
//! or the matching command method directly. Changes are reported through
//! [`PickerEvent`]s.
//!
//! Browsing by day or month is unconstrained. Opening, the year list and
//! committing a date are constrained to the configured range.
use std::time::Instant;

use datepick_foundation::{
    CalendarDate,
    date_manip::{self, set_month, set_year, shift_days, shift_months, shift_years},
};
use tracing::{debug, trace, warn};

use crate::{
    action::{Action, CloseReason, Key, PickerEvent, View},
    emitter::{Emitter, HandlerId},
    input::{DetachedInput, InputBinding},
    mode::PickerMode,
    options::{DatePickerConfig, DatePickerOptions, OptionsError},
};

/// State of an open picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerState {
    view: View,
    current_date: CalendarDate,
    selected_date: Option<CalendarDate>,
}

impl PickerState {
    /// Granularity being chosen.
    pub fn view(&self) -> View {
        self.view
    }

    /// Highlighted date. Not necessarily selectable.
    pub fn current_date(&self) -> CalendarDate {
        self.current_date
    }

    /// Committed date, if any.
    pub fn selected_date(&self) -> Option<CalendarDate> {
        self.selected_date
    }
}

/// A date picker bound to an input of type `I`.
pub struct DatePicker<I: InputBinding = DetachedInput> {
    config: DatePickerConfig,
    input: I,
    state: Option<PickerState>,
    committed: Option<CalendarDate>,
    closed_at: Option<Instant>,
    events: Emitter<PickerEvent>,
}

impl DatePicker<DetachedInput> {
    /// Creates an always-open picker with no input.
    pub fn permanent(options: DatePickerOptions) -> Result<Self, OptionsError> {
        Self::new(DetachedInput, options.mode(PickerMode::Permanent))
    }
}

impl<I: InputBinding> DatePicker<I> {
    /// Binds a picker to `input`.
    ///
    /// Modal pickers make the input read-only. Permanent pickers open
    /// immediately.
    pub fn new(mut input: I, options: DatePickerOptions) -> Result<Self, OptionsError> {
        let config = options.build()?;
        let mode = config.mode();
        if mode.locks_input() {
            input.set_read_only(true);
        }

        let mut picker = Self {
            config,
            input,
            state: None,
            committed: None,
            closed_at: None,
            events: Emitter::new(),
        };
        if mode.opens_on_create() {
            picker.open();
        }
        Ok(picker)
    }

    /// Applies `action`. Returns false when it was not applicable in the
    /// current state.
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Open => self.open(),
            Action::Close => self.close(CloseReason::Command),
            Action::Toggle => self.toggle(),
            Action::Blur => self.close(CloseReason::Blur),
            Action::Key(key) => self.key_down(key),
            Action::NavigateDay(days) => self.navigate_day(days),
            Action::NavigateMonth(months) => self.navigate_month(months),
            Action::NavigateMonthPicker(months) => self.navigate_month_picker(months),
            Action::NavigateYearPicker(years) => self.navigate_year_picker(years),
            Action::OpenMonthPicker => self.open_month_picker(),
            Action::OpenYearPicker => self.open_year_picker(),
            Action::ChooseMonth(month) => self.choose_month(month),
            Action::ChooseYear(year) => self.choose_year(year),
            Action::Escape => self.escape(),
            Action::Select(date) => self.select_date(date),
            Action::SelectToday => self.select_today(),
            Action::Clear => self.clear(),
            Action::Goto(date) => self.goto(date),
            Action::InputChanged(text) => self.input_changed(&text),
        }
    }

    /// Opens the picker in the day view.
    pub fn open(&mut self) -> bool {
        if self.state.is_some() {
            return false;
        }
        let guard = self.config.reopen_guard();
        if self.closed_at.is_some_and(|at| at.elapsed() < guard) {
            debug!("ignoring open request inside the re-open guard");
            return false;
        }

        let selected = if self.config.mode().seeds_from_input() {
            let text = self.input.value();
            if text.trim().is_empty() {
                None
            } else {
                Some(self.config.parse(&text))
            }
        } else {
            self.committed
                .or_else(|| Some(self.config.highlighted_date()))
        };
        let current_date = self
            .config
            .range()
            .clamp(selected.unwrap_or_else(|| self.config.highlighted_date()));

        self.state = Some(PickerState {
            view: View::Day,
            current_date,
            selected_date: selected,
        });
        self.committed = selected;
        debug!(%current_date, "picker opened");
        self.events.emit(&PickerEvent::Open { current_date });
        true
    }

    /// Closes the picker. Permanent pickers ignore this.
    pub fn close(&mut self, reason: CloseReason) -> bool {
        let mode = self.config.mode();
        if !mode.closes() || self.state.take().is_none() {
            return false;
        }
        self.closed_at = Some(Instant::now());
        if mode.returns_focus() {
            self.input.focus();
        }
        debug!(?reason, "picker closed");
        self.events.emit(&PickerEvent::Close { reason });
        true
    }

    /// Opens a closed picker or closes an open one.
    pub fn toggle(&mut self) -> bool {
        if self.is_open() {
            self.close(CloseReason::Toggle)
        } else {
            self.open()
        }
    }

    /// Moves the current date by `days`.
    pub fn navigate_day(&mut self, days: i64) -> bool {
        self.step(View::Day, View::Day, |_, current| shift_days(current, days))
    }

    /// Moves the current date by `months`, clamping the day to the target
    /// month.
    pub fn navigate_month(&mut self, months: i32) -> bool {
        self.step(View::Day, View::Day, |_, current| {
            shift_months(current, months, false)
        })
    }

    /// Moves through the month list, wrapping within the current year.
    pub fn navigate_month_picker(&mut self, months: i32) -> bool {
        self.step(View::Month, View::Month, |_, current| {
            shift_months(current, months, true)
        })
    }

    /// Moves through the year list, clamped to the configured range.
    pub fn navigate_year_picker(&mut self, years: i32) -> bool {
        self.step(View::Year, View::Year, |config, current| {
            config.range().clamp(shift_years(current, years))
        })
    }

    /// Switches from the day view to the month list.
    pub fn open_month_picker(&mut self) -> bool {
        self.step(View::Day, View::Month, |_, current| current)
    }

    /// Switches from the day view to the year list.
    pub fn open_year_picker(&mut self) -> bool {
        self.step(View::Day, View::Year, |_, current| current)
    }

    /// Picks `month` (1-12) from the month list.
    pub fn choose_month(&mut self, month: u8) -> bool {
        self.step(View::Month, View::Day, |_, current| set_month(current, month))
    }

    /// Picks `year` from the year list.
    pub fn choose_year(&mut self, year: i32) -> bool {
        self.step(View::Year, View::Day, |_, current| set_year(current, year))
    }

    /// Leaves the month or year list, or closes from the day view.
    pub fn escape(&mut self) -> bool {
        match self.state.map(|state| state.view) {
            None => false,
            Some(View::Day) => self.close(CloseReason::Escape),
            Some(view) => self.step(view, View::Day, |_, current| current),
        }
    }

    /// Commits `date`.
    ///
    /// Dates outside the selectable range are refused and nothing changes.
    /// Otherwise the formatted date is written to the input and the picker
    /// closes.
    pub fn select_date(&mut self, date: CalendarDate) -> bool {
        if !self.config.in_range(date) {
            debug!(%date, "refusing to select a date outside the selectable range");
            return false;
        }

        self.committed = Some(date);
        if let Some(state) = self.state.as_mut() {
            state.selected_date = Some(date);
            state.current_date = date;
            let event = PickerEvent::StateChange {
                view: state.view,
                current_date: date,
            };
            self.events.emit(&event);
        }
        if self.config.mode().writes_input() {
            let value = self.config.format(date);
            self.write_input(value);
        }
        self.close(CloseReason::Selection);
        debug!(%date, "date selected");
        self.events.emit(&PickerEvent::Select { date: Some(date) });
        true
    }

    /// Commits today's date, if it is selectable.
    pub fn select_today(&mut self) -> bool {
        self.select_date(date_manip::today())
    }

    /// Removes the selection and empties the input.
    pub fn clear(&mut self) -> bool {
        self.committed = None;
        if let Some(state) = self.state.as_mut() {
            state.selected_date = None;
        }
        if self.config.mode().writes_input() {
            self.write_input(String::new());
        }
        self.close(CloseReason::Selection);
        debug!("selection cleared");
        self.events.emit(&PickerEvent::Select { date: None });
        true
    }

    /// Moves the current date to `date` without any range check.
    pub fn goto(&mut self, date: CalendarDate) -> bool {
        let Some(state) = self.state.as_mut() else {
            return false;
        };
        state.current_date = date;
        let event = PickerEvent::StateChange {
            view: state.view,
            current_date: date,
        };
        trace!(%date, "picker moved");
        self.events.emit(&event);
        true
    }

    /// Follows edits to the bound input. Text that does not parse is
    /// ignored.
    pub fn input_changed(&mut self, text: &str) -> bool {
        if !self.is_open() {
            return false;
        }
        match self.config.try_parse(text) {
            Ok(date) => self.goto(date),
            Err(err) => {
                debug!("ignoring input edit: {err}");
                false
            }
        }
    }

    /// Handles a key press according to the current view.
    pub fn key_down(&mut self, key: Key) -> bool {
        let Some(state) = self.state else {
            return false;
        };
        let action = Action::for_key(key, state.view, state.current_date);
        trace!(?key, ?action, "key pressed");
        self.dispatch(action)
    }

    /// Replaces the configuration, pulling the current and selected dates
    /// into the new range.
    pub fn reconfigure(&mut self, options: DatePickerOptions) -> Result<(), OptionsError> {
        let config = options.build()?;
        let range = config.range();
        let mode = config.mode();
        self.input.set_read_only(mode.locks_input());

        if let Some(selected) = self.committed {
            let clamped = range.clamp(selected);
            if clamped != selected {
                warn!(%selected, %clamped, "selection moved into the new range");
                self.committed = Some(clamped);
            }
        }
        if let Some(state) = self.state.as_mut() {
            state.current_date = range.clamp(state.current_date);
            state.selected_date = self.committed;
        }
        self.config = config;

        if mode.opens_on_create() && !self.is_open() {
            self.closed_at = None;
            self.open();
        }
        Ok(())
    }

    /// Closes the picker, releases the input and drops every subscriber.
    pub fn destroy(&mut self) {
        if self.state.take().is_some() {
            debug!("picker destroyed while open");
        }
        self.input.set_read_only(false);
        self.events.clear();
    }

    /// Subscribes to picker events.
    pub fn on<F>(&self, handler: F) -> HandlerId
    where
        F: Fn(&PickerEvent) + Send + Sync + 'static,
    {
        self.events.on(handler)
    }

    /// Unsubscribes a handler returned by [`DatePicker::on`].
    pub fn off(&self, id: HandlerId) -> bool {
        self.events.off(id)
    }

    /// Whether the picker is open.
    pub fn is_open(&self) -> bool {
        self.state.is_some()
    }

    /// State of the open picker.
    pub fn state(&self) -> Option<&PickerState> {
        self.state.as_ref()
    }

    /// Current view, day view when closed.
    pub fn view(&self) -> View {
        self.state.map(|state| state.view).unwrap_or_default()
    }

    /// Highlighted date. When closed this is where the picker would open
    /// without a selection.
    pub fn current_date(&self) -> CalendarDate {
        match self.state {
            Some(state) => state.current_date,
            None => self.config.range().clamp(self.config.highlighted_date()),
        }
    }

    /// Last committed date.
    pub fn selected_date(&self) -> Option<CalendarDate> {
        match self.state {
            Some(state) => state.selected_date,
            None => self.committed,
        }
    }

    /// Resolved configuration.
    pub fn config(&self) -> &DatePickerConfig {
        &self.config
    }

    /// The bound input.
    pub fn input(&self) -> &I {
        &self.input
    }

    /// The bound input, for host-side edits.
    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    fn step<F>(&mut self, required: View, next: View, advance: F) -> bool
    where
        F: FnOnce(&DatePickerConfig, CalendarDate) -> CalendarDate,
    {
        let Some(state) = self.state.as_mut() else {
            return false;
        };
        if state.view != required {
            trace!(?required, actual = ?state.view, "action does not apply to this view");
            return false;
        }
        state.current_date = advance(&self.config, state.current_date);
        state.view = next;

        let event = PickerEvent::StateChange {
            view: state.view,
            current_date: state.current_date,
        };
        trace!(view = ?state.view, current = %state.current_date, "picker navigated");
        self.events.emit(&event);
        true
    }

    fn write_input(&mut self, value: String) {
        self.input.set_value(&value);
        self.events.emit(&PickerEvent::Change { value });
    }
}
