//! Month grid layout.
use crate::{CalendarDate, Weekday, date_manip::shift_days};

/// Columns in the day grid.
pub const GRID_COLUMNS: usize = 7;
/// Rows in the day grid. Six weeks are always laid out so the grid size
/// does not change between months.
pub const GRID_ROWS: usize = 6;
/// Cells in the day grid.
pub const GRID_CELLS: usize = GRID_COLUMNS * GRID_ROWS;

/// Lays out the six weeks shown for the month containing `current`.
///
/// The first cell is the last `week_start` weekday on or before the first
/// of the month. Leading and trailing cells belong to the neighbouring
/// months.
pub fn month_grid(current: CalendarDate, week_start: Weekday) -> [CalendarDate; GRID_CELLS] {
    let first = shift_days(current, 1 - current.day() as i64);
    let offset = (first.weekday().num_days_from_sunday() as i64
        - week_start.num_days_from_sunday() as i64)
        .rem_euclid(GRID_COLUMNS as i64);
    let start = shift_days(first, -offset);
    std::array::from_fn(|index| shift_days(start, index as i64))
}

/// Rotates Sunday-first weekday labels so that `week_start` comes first.
pub fn weekday_labels<T: Clone>(sunday_first: &[T], week_start: Weekday) -> Vec<T> {
    let len = sunday_first.len();
    if len == 0 {
        return Vec::new();
    }
    let start = week_start.num_days_from_sunday() as usize;
    (0..len)
        .map(|index| sunday_first[(index + start) % len].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn sunday_first_grid_starts_on_preceding_sunday() {
        let cells = month_grid(date(2015, 9, 26), Weekday::Sunday);
        assert_eq!(cells[0], date(2015, 8, 30));
        assert_eq!(cells[8], date(2015, 9, 7));
        assert_eq!(cells[GRID_CELLS - 1], date(2015, 10, 10));
    }

    #[test]
    fn monday_first_grid_starts_on_preceding_monday() {
        let cells = month_grid(date(2015, 9, 26), Weekday::Monday);
        assert_eq!(cells[0], date(2015, 8, 31));
        assert_eq!(cells[0].weekday(), Weekday::Monday);
    }

    #[test]
    fn month_starting_on_week_start_has_no_leading_days() {
        // November 2015 begins on a Sunday.
        let cells = month_grid(date(2015, 11, 15), Weekday::Sunday);
        assert_eq!(cells[0], date(2015, 11, 1));

        // With Monday first, the Sunday must still be shown.
        let cells = month_grid(date(2015, 11, 15), Weekday::Monday);
        assert_eq!(cells[0], date(2015, 10, 26));
        assert!(cells.contains(&date(2015, 11, 1)));
    }

    #[test]
    fn grid_cells_are_consecutive_days() {
        let cells = month_grid(date(2016, 2, 29), Weekday::Wednesday);
        for pair in cells.windows(2) {
            assert_eq!(shift_days(pair[0], 1), pair[1]);
        }
        assert_eq!(cells[0].weekday(), Weekday::Wednesday);
    }

    #[test]
    fn weekday_labels_rotate_to_week_start() {
        let labels = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
        assert_eq!(weekday_labels(&labels, Weekday::Sunday), labels.to_vec());
        assert_eq!(
            weekday_labels(&labels, Weekday::Monday),
            vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
        );
    }
}
