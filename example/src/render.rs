//! Plain-text rendering of the picker view models.
use std::fmt::Write;

use datepick::{DatePicker, DateRangePicker, InputBinding, View};

pub fn picker<I: InputBinding>(picker: &DatePicker<I>) -> String {
    let mut out = String::new();
    if !picker.is_open() {
        out.push_str("(closed)\n");
        return out;
    }
    match picker.view() {
        View::Day => day_view(picker, &mut out),
        View::Month => month_view(picker, &mut out),
        View::Year => year_view(picker, &mut out),
    }
    out
}

pub fn range(range: &DateRangePicker) -> String {
    let start = picker(range.start());
    let end = picker(range.end());
    let left: Vec<&str> = start.lines().collect();
    let right: Vec<&str> = end.lines().collect();

    let mut out = String::new();
    for row in 0..left.len().max(right.len()) {
        let l = left.get(row).copied().unwrap_or_default();
        let r = right.get(row).copied().unwrap_or_default();
        let _ = writeln!(out, "{l:<30}  {r}");
    }
    let state = range.state();
    let show = |date: Option<datepick::CalendarDate>| {
        date.map(|date| date.to_string())
            .unwrap_or_else(|| "-".to_string())
    };
    let _ = writeln!(out, "range: {} .. {}", show(state.start), show(state.end));
    out
}

fn day_view<I: InputBinding>(picker: &DatePicker<I>, out: &mut String) {
    let current = picker.current_date();
    let lang = picker.config().lang();
    let _ = writeln!(out, "{} {}", lang.month_name(current.month()), current.year());

    for label in picker.weekday_labels() {
        let short: String = label.chars().take(2).collect();
        let _ = write!(out, "{short:>3} ");
    }
    out.push('\n');

    for week in picker.day_cells().chunks(7) {
        for cell in week {
            let (open, close) = if cell.current {
                ('[', ']')
            } else if cell.selected {
                ('(', ')')
            } else if cell.class.contains("dr-in-range") {
                ('.', '.')
            } else {
                (' ', ' ')
            };
            let day = if cell.in_month {
                format!("{:>2}", cell.date.day())
            } else {
                "  ".to_string()
            };
            let mark = if cell.disabled { 'x' } else { ' ' };
            let _ = write!(out, "{open}{day}{close}{mark}");
        }
        out.push('\n');
    }
}

fn month_view<I: InputBinding>(picker: &DatePicker<I>, out: &mut String) {
    let _ = writeln!(out, "{}", picker.current_date().year());
    for row in picker.month_cells().chunks(3) {
        for cell in row {
            let label: String = cell.label.chars().take(3).collect();
            if cell.current {
                let _ = write!(out, "[{label}] ");
            } else {
                let _ = write!(out, " {label}  ");
            }
        }
        out.push('\n');
    }
}

fn year_view<I: InputBinding>(picker: &DatePicker<I>, out: &mut String) {
    let current = picker.current_date().year();
    // Only the neighbourhood of the current year is worth printing.
    for cell in picker
        .year_cells()
        .into_iter()
        .filter(|cell| (cell.year - current).abs() <= 3)
    {
        let marker = if cell.current { '>' } else { ' ' };
        let disabled = if cell.disabled { " (unavailable)" } else { "" };
        let _ = writeln!(out, "{marker} {}{disabled}", cell.year);
    }
}
