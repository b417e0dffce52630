//! A start/end range picker built from two permanent pickers.
//!
//! The two calendars always show adjacent months. Selecting a date on
//! either side either starts a new range or completes the pending one.
//! Day cells inside the range carry `dr-in-range`; the endpoints carry
//! `dr-selected`.
use std::{collections::VecDeque, sync::Arc};

use datepick_foundation::{
    CalendarDate,
    date_manip::{diff_months, shift_months},
};
use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::{
    action::{Action, Key, PickerEvent},
    emitter::{Emitter, HandlerId},
    options::{DatePickerOptions, OptionsError},
    picker::DatePicker,
};

/// Which calendar of a range picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeSide {
    /// The left calendar.
    Start,
    /// The right calendar, one month later.
    End,
}

/// Selected endpoints. `end` is only set once `start` is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RangeState {
    pub start: Option<CalendarDate>,
    pub end: Option<CalendarDate>,
}

/// How a day relates to the selected range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RangeMarks {
    /// Between the start and the end (or the hovered date).
    pub in_range: bool,
    /// The start or end date itself.
    pub endpoint: bool,
}

/// Notifications emitted by a [`DateRangePicker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeEvent {
    /// The selected endpoints changed.
    StateChange { state: RangeState },
}

#[derive(Debug, Default)]
struct RangeShared {
    state: RangeState,
    hover: Option<CalendarDate>,
}

impl RangeShared {
    fn classify(&self, date: CalendarDate) -> RangeMarks {
        let RangeState { start, end } = self.state;
        let in_range = match (start, self.hover) {
            (Some(start), Some(hover)) => between(date, start, end.unwrap_or(hover)),
            _ => false,
        };
        RangeMarks {
            in_range,
            endpoint: start == Some(date) || end == Some(date),
        }
    }
}

/// Half-open in either direction: includes `anchor`, excludes `other`.
fn between(date: CalendarDate, anchor: CalendarDate, other: CalendarDate) -> bool {
    (anchor <= date && date < other) || (other < date && date <= anchor)
}

type Inbox = Arc<Mutex<VecDeque<(RangeSide, PickerEvent)>>>;

/// Two side-by-side permanent calendars selecting a date range.
pub struct DateRangePicker {
    start: DatePicker,
    end: DatePicker,
    shared: Arc<Mutex<RangeShared>>,
    inbox: Inbox,
    events: Emitter<RangeEvent>,
}

impl DateRangePicker {
    /// Builds both calendars from `options`. The end calendar starts one
    /// month after the start calendar.
    pub fn new(options: DatePickerOptions) -> Result<Self, OptionsError> {
        let shared = Arc::new(Mutex::new(RangeShared::default()));

        let user_class = options.date_class.clone();
        let marks_from = Arc::clone(&shared);
        let options = options.date_class(move |date| {
            let mut class = user_class.call(date);
            let marks = marks_from.lock().classify(date);
            if marks.in_range {
                class.push_str("dr-in-range ");
            }
            if marks.endpoint {
                class.push_str("dr-selected ");
            }
            class
        });

        let start = DatePicker::permanent(options.clone())?;
        let end_month = shift_months(start.current_date(), 1, false);
        let end = DatePicker::permanent(options.highlighted_date(end_month))?;

        let inbox: Inbox = Arc::default();
        for (side, picker) in [(RangeSide::Start, &start), (RangeSide::End, &end)] {
            let inbox = Arc::clone(&inbox);
            picker.on(move |event| {
                if matches!(
                    event,
                    PickerEvent::StateChange { .. } | PickerEvent::Select { .. }
                ) {
                    inbox.lock().push_back((side, event.clone()));
                }
            });
        }

        Ok(Self {
            start,
            end,
            shared,
            inbox,
            events: Emitter::new(),
        })
    }

    /// Applies `action` to one calendar and reconciles the range.
    pub fn dispatch(&mut self, side: RangeSide, action: Action) -> bool {
        let handled = self.picker_mut(side).dispatch(action);
        self.settle();
        handled
    }

    /// Handles a key press on one calendar.
    pub fn key_down(&mut self, side: RangeSide, key: Key) -> bool {
        self.dispatch(side, Action::Key(key))
    }

    /// Records the date under the pointer. Returns true when it changed.
    pub fn hover(&self, date: CalendarDate) -> bool {
        let mut shared = self.shared.lock();
        let changed = shared.hover != Some(date);
        if changed {
            shared.hover = Some(date);
        }
        changed
    }

    /// Range membership of `date`.
    pub fn classify(&self, date: CalendarDate) -> RangeMarks {
        self.shared.lock().classify(date)
    }

    /// Selected endpoints.
    pub fn state(&self) -> RangeState {
        self.shared.lock().state
    }

    /// Subscribes to range changes.
    pub fn on<F>(&self, handler: F) -> HandlerId
    where
        F: Fn(&RangeEvent) + Send + Sync + 'static,
    {
        self.events.on(handler)
    }

    /// Unsubscribes a handler returned by [`DateRangePicker::on`].
    pub fn off(&self, id: HandlerId) -> bool {
        self.events.off(id)
    }

    /// The left calendar.
    pub fn start(&self) -> &DatePicker {
        &self.start
    }

    /// The right calendar.
    pub fn end(&self) -> &DatePicker {
        &self.end
    }

    /// Tears down both calendars and drops every subscriber.
    pub fn dispose(&mut self) {
        self.start.destroy();
        self.end.destroy();
        self.inbox.lock().clear();
        self.events.clear();
    }

    fn picker_mut(&mut self, side: RangeSide) -> &mut DatePicker {
        match side {
            RangeSide::Start => &mut self.start,
            RangeSide::End => &mut self.end,
        }
    }

    fn settle(&mut self) {
        loop {
            // The guard must drop before handling: moving a calendar queues
            // more events.
            let next = self.inbox.lock().pop_front();
            let Some((side, event)) = next else {
                break;
            };
            match event {
                PickerEvent::StateChange { .. } => self.keep_adjacent(side),
                PickerEvent::Select { date: Some(date) } => self.date_selected(date),
                _ => {}
            }
        }
    }

    fn keep_adjacent(&mut self, moved: RangeSide) {
        let start = self.start.current_date();
        let end = self.end.current_date();
        if diff_months(start, end) == 1 {
            return;
        }
        trace!(?moved, %start, %end, "realigning range calendars");
        match moved {
            RangeSide::Start => self.end.goto(shift_months(start, 1, false)),
            RangeSide::End => self.start.goto(shift_months(end, -1, false)),
        };
    }

    fn date_selected(&mut self, date: CalendarDate) {
        let state = {
            let mut shared = self.shared.lock();
            shared.state = match shared.state {
                RangeState {
                    start: Some(start),
                    end: None,
                } => RangeState {
                    start: Some(start.min(date)),
                    end: Some(start.max(date)),
                },
                _ => RangeState {
                    start: Some(date),
                    end: None,
                },
            };
            shared.state
        };
        debug!(start = ?state.start, end = ?state.end, "range changed");
        self.events.emit(&RangeEvent::StateChange { state });
    }
}
