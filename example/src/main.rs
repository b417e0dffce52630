//! Interactive terminal demo.
//!
//! Type commands on stdin: `open`, `close`, `left`, `right`, `up`, `down`,
//! `enter`, `esc`, `next`, `prev`, `month`, `year`, `today`, `clear`,
//! `type <text>`, `range` and `quit`.
mod render;

use std::{
    io::{self, BufRead, Write},
    sync::Arc,
};

use datepick::{
    Action, DatePicker, DatePickerOptions, DateRangePicker, Key, PickerEvent, PickerMode,
    RangeSide, TextInput,
};
use parking_lot::Mutex;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("off,datepick=info"))?;
    tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .init();

    let options = DatePickerOptions::default().mode(PickerMode::Dropdown);
    let mut picker = DatePicker::new(TextInput::default(), options)?;

    let log = Arc::new(Mutex::new(Vec::<String>::new()));
    let sink = Arc::clone(&log);
    picker.on(move |event| {
        if let PickerEvent::Select { date } = event {
            sink.lock().push(match date {
                Some(date) => format!("selected {date}"),
                None => "cleared".to_string(),
            });
        }
    });

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut range: Option<DateRangePicker> = None;

    for line in stdin.lock().lines() {
        let line = line?;
        let command = line.trim();
        if command == "quit" {
            break;
        }

        if let Some(range) = range.as_mut() {
            if let Some(action) = range_action(command) {
                let (side, action) = action;
                range.dispatch(side, action);
            }
            write!(stdout, "{}", render::range(range))?;
            stdout.flush()?;
            continue;
        }

        match command {
            "range" => {
                let picker = DateRangePicker::new(DatePickerOptions::default())?;
                info!("switched to range picker");
                write!(stdout, "{}", render::range(&picker))?;
                range = Some(picker);
                continue;
            }
            "" => {}
            _ => match picker_action(command) {
                Some(action) => {
                    if !picker.dispatch(action) {
                        writeln!(stdout, "ignored: {command}")?;
                    }
                }
                None => writeln!(stdout, "unknown command: {command}")?,
            },
        }

        for message in log.lock().drain(..) {
            writeln!(stdout, "{message}")?;
        }
        writeln!(stdout, "input: {:?}", picker.input().text())?;
        write!(stdout, "{}", render::picker(&picker))?;
        stdout.flush()?;
    }

    picker.destroy();
    if let Some(mut range) = range {
        range.dispose();
    }
    Ok(())
}

fn picker_action(command: &str) -> Option<Action> {
    if let Some(text) = command.strip_prefix("type ") {
        return Some(Action::InputChanged(text.to_string()));
    }
    let action = match command {
        "open" => Action::Open,
        "close" => Action::Close,
        "left" => Action::Key(Key::Left),
        "right" => Action::Key(Key::Right),
        "up" => Action::Key(Key::Up),
        "down" => Action::Key(Key::Down),
        "enter" => Action::Key(Key::Enter),
        "esc" => Action::Key(Key::Escape),
        "next" => Action::NavigateMonth(1),
        "prev" => Action::NavigateMonth(-1),
        "month" => Action::OpenMonthPicker,
        "year" => Action::OpenYearPicker,
        "today" => Action::SelectToday,
        "clear" => Action::Clear,
        _ => return None,
    };
    Some(action)
}

/// Range commands are prefixed with the side, e.g. `start next` or
/// `end enter`.
fn range_action(command: &str) -> Option<(RangeSide, Action)> {
    let (side, rest) = command.split_once(' ')?;
    let side = match side {
        "start" => RangeSide::Start,
        "end" => RangeSide::End,
        _ => return None,
    };
    picker_action(rest).map(|action| (side, action))
}
