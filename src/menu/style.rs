//! Construction defaults shared by every menu variant.

use unicode_width::UnicodeWidthStr;

pub const DEFAULT_INDICATOR: &str = "->";
pub const DEFAULT_PAGE_SIZE: usize = 15;

/// Cursor indicator, page size and color switch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuStyle {
    pub indicator: String,
    pub page_size: usize,
    pub color: bool,
}

impl Default for MenuStyle {
    fn default() -> Self {
        Self {
            indicator: DEFAULT_INDICATOR.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            color: false,
        }
    }
}

impl MenuStyle {
    /// Blank run as wide as the indicator, used on rows without the cursor
    pub fn indicator_padding(&self) -> String {
        " ".repeat(self.indicator.width())
    }
}

/// Glyphs for the selection column of a multi-select menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marks {
    pub open: String,
    pub close: String,
    pub selected: String,
    pub unselected: String,
}

impl Default for Marks {
    fn default() -> Self {
        Self {
            open: "[".to_string(),
            close: "]".to_string(),
            selected: "*".to_string(),
            unselected: " ".to_string(),
        }
    }
}

impl Marks {
    /// Token shown for a selected row, e.g. `[*]`
    pub fn checked(&self) -> String {
        format!("{}{}{}", self.open, self.selected, self.close)
    }

    /// Token shown for an unselected row, e.g. `[ ]`
    pub fn unchecked(&self) -> String {
        format!("{}{}{}", self.open, self.unselected, self.close)
    }
}
