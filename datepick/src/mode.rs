//! Presentation modes.
//!
//! All modes share one state machine. They differ only in how the picker
//! opens and closes and whether it owns the bound input's value.

/// How a picker is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PickerMode {
    /// Overlay that takes over input; the input itself is read-only.
    #[default]
    Modal,
    /// Flyout anchored to the input; the input stays editable.
    Dropdown,
    /// Always-visible inline calendar with no input of its own.
    Permanent,
}

impl PickerMode {
    /// Whether closing the picker has any effect.
    pub fn closes(self) -> bool {
        !matches!(self, PickerMode::Permanent)
    }

    /// Whether selections are written back to the bound input.
    pub fn writes_input(self) -> bool {
        !matches!(self, PickerMode::Permanent)
    }

    /// Whether the bound input is made read-only.
    pub fn locks_input(self) -> bool {
        matches!(self, PickerMode::Modal)
    }

    /// Whether focus goes back to the input on close.
    pub fn returns_focus(self) -> bool {
        matches!(self, PickerMode::Modal)
    }

    /// Whether the picker opens as soon as it is created.
    pub fn opens_on_create(self) -> bool {
        matches!(self, PickerMode::Permanent)
    }

    /// Whether the initial selection is read from the bound input. Otherwise
    /// the configured highlighted date is used.
    pub fn seeds_from_input(self) -> bool {
        !matches!(self, PickerMode::Permanent)
    }
}
