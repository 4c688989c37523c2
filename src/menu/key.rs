//! Logical key tokens consumed by every menu.
//!
//! Platform key decoding lives in [`crate::ui::keys`]; menus only ever see
//! this closed set.

/// A normalized key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Move cursor up
    Up,
    /// Move cursor down
    Down,
    /// Move cursor one page up
    PageUp,
    /// Move cursor one page down
    PageDown,
    /// Jump to the first option
    First,
    /// Jump to the last option
    Last,
    /// Toggle the option under the cursor (multi select)
    Select,
    /// Toggle every visible option (multi select)
    SelectAll,
    /// Prompt for a search query and filter the options
    Search,
    /// Confirm the current choice
    Confirm,
    /// Leave the menu without a choice
    Cancel,
    /// Any other printable character
    Char(char),
    /// Input that maps to nothing
    Unknown,
}

impl Key {
    /// Whether the key can move the cursor or change the visible options
    pub fn is_navigation(self) -> bool {
        matches!(
            self,
            Key::Up | Key::Down | Key::PageUp | Key::PageDown | Key::First | Key::Last | Key::Search
        )
    }
}
