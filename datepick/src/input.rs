//! The text input a picker is bound to.

/// A host text field that a picker reads from and writes to.
pub trait InputBinding {
    /// Current text of the input.
    fn value(&self) -> String;

    /// Replaces the text of the input.
    fn set_value(&mut self, value: &str);

    /// Moves keyboard focus to the input.
    fn focus(&mut self) {}

    /// Marks the input as read-only (or editable again).
    fn set_read_only(&mut self, _read_only: bool) {}
}

/// An in-memory text field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    read_only: bool,
    focused: bool,
}

impl TextInput {
    /// Creates an input holding `value`.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// Returns the current text.
    pub fn text(&self) -> &str {
        &self.value
    }

    /// Whether the input has been made read-only.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Whether the input currently has focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Drops focus from the input.
    pub fn blur(&mut self) {
        self.focused = false;
    }
}

impl InputBinding for TextInput {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }
}

/// Binding for pickers that have no input, such as permanent calendars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetachedInput;

impl InputBinding for DetachedInput {
    fn value(&self) -> String {
        String::new()
    }

    fn set_value(&mut self, _value: &str) {}
}
