//! Render-ready view models for each picker view.
use datepick_foundation::{
    CalendarDate,
    grid::{self, GRID_CELLS},
};

use crate::{input::InputBinding, picker::DatePicker};

/// One cell of the day grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: CalendarDate,
    /// False for leading and trailing days of the neighbouring months.
    pub in_month: bool,
    /// The highlighted date.
    pub current: bool,
    pub selected: bool,
    pub today: bool,
    /// Not selectable under the configured range and policy.
    pub disabled: bool,
    /// Host-supplied presentation classes.
    pub class: String,
}

/// One entry of the month list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthCell {
    /// 1-12.
    pub month: u8,
    pub label: String,
    pub current: bool,
}

/// One entry of the year list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearCell {
    pub year: i32,
    pub current: bool,
    pub selected: bool,
    pub disabled: bool,
}

impl<I: InputBinding> DatePicker<I> {
    /// The six-week grid around the current month.
    pub fn day_cells(&self) -> Vec<DayCell> {
        let config = self.config();
        let current = self.current_date();
        let selected = self.selected_date();
        let today = CalendarDate::today();

        let mut cells = Vec::with_capacity(GRID_CELLS);
        for date in grid::month_grid(current, config.week_start()) {
            cells.push(DayCell {
                date,
                in_month: date.year() == current.year() && date.month() == current.month(),
                current: date == current,
                selected: selected == Some(date),
                today: date == today,
                disabled: !config.in_range(date),
                class: config.date_class(date),
            });
        }
        cells
    }

    /// Twelve months of the current year.
    pub fn month_cells(&self) -> Vec<MonthCell> {
        let lang = self.config().lang();
        let current = self.current_date().month();
        (1..=12)
            .map(|month| MonthCell {
                month,
                label: lang.month_name(month).to_string(),
                current: month == current,
            })
            .collect()
    }

    /// Years from the latest bound down to the earliest.
    pub fn year_cells(&self) -> Vec<YearCell> {
        let config = self.config();
        let range = config.range();
        let current = self.current_date().year();
        let selected = self.selected_date().map(|date| date.year());
        (range.min().year()..=range.max().year())
            .rev()
            .map(|year| YearCell {
                year,
                current: year == current,
                selected: selected == Some(year),
                disabled: !config.is_year_selectable(year),
            })
            .collect()
    }

    /// Weekday labels in grid column order.
    pub fn weekday_labels(&self) -> Vec<String> {
        let config = self.config();
        grid::weekday_labels(&config.lang().days, config.week_start())
    }
}

#[cfg(test)]
mod tests {
    use datepick_foundation::Weekday;

    use crate::{
        input::TextInput,
        options::{DatePickerOptions, SelectableDates},
    };

    use super::*;

    fn date(year: i32, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    fn open_picker(options: DatePickerOptions) -> DatePicker<TextInput> {
        let mut picker = DatePicker::new(TextInput::new("9/26/2015"), options).unwrap();
        picker.open();
        picker
    }

    #[test]
    fn day_grid_starts_on_the_week_start() {
        let sunday = open_picker(DatePickerOptions::default());
        let cells = sunday.day_cells();
        assert_eq!(cells.len(), 42);
        assert_eq!(cells[0].date, date(2015, 8, 30));
        assert!(!cells[0].in_month);

        let monday = open_picker(DatePickerOptions::default().week_start(Weekday::Monday));
        let cells = monday.day_cells();
        assert_eq!(cells[0].date, date(2015, 8, 31));
        assert_eq!(monday.weekday_labels()[0], "Mon");
        assert_eq!(monday.weekday_labels()[6], "Sun");
    }

    #[test]
    fn day_cells_mark_state() {
        let options = DatePickerOptions::default()
            .min("9/10/2015")
            .max("9/30/2015")
            .date_class(|date: CalendarDate| {
                if date.day() == 1 {
                    "first ".to_string()
                } else {
                    String::new()
                }
            });
        let mut picker = open_picker(options);
        picker.navigate_day(1);
        let cells = picker.day_cells();

        let find = |target: CalendarDate| cells.iter().find(|cell| cell.date == target).unwrap();
        let current = find(date(2015, 9, 27));
        assert!(current.current && !current.selected && !current.disabled);
        assert!(find(date(2015, 9, 26)).selected);
        assert!(find(date(2015, 9, 9)).disabled);
        assert_eq!(find(date(2015, 9, 1)).class, "first ");
        assert!(find(date(2015, 10, 1)).disabled);
    }

    #[test]
    fn month_cells_label_every_month() {
        let picker = open_picker(DatePickerOptions::default());
        let cells = picker.month_cells();
        assert_eq!(cells.len(), 12);
        assert_eq!(cells[8].label, "September");
        assert!(cells[8].current);
        assert_eq!(cells.iter().filter(|cell| cell.current).count(), 1);
    }

    #[test]
    fn year_cells_run_latest_first() {
        struct Odd;
        impl SelectableDates for Odd {
            fn is_selectable_year(&self, year: i32) -> bool {
                year % 2 == 1
            }
        }

        let options = DatePickerOptions::default()
            .min("1/1/2013")
            .max("12/31/2016")
            .selectable_dates(Odd);
        let picker = open_picker(options);
        let cells = picker.year_cells();
        let years: Vec<_> = cells.iter().map(|cell| cell.year).collect();
        assert_eq!(years, vec![2016, 2015, 2014, 2013]);
        assert!(cells[1].current && cells[1].selected && !cells[1].disabled);
        assert!(cells[0].disabled);
    }
}
