use crossterm::style::Color;
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};

/// Design tokens for menu output.
///
/// All colors used by the crate are sourced from here.
pub mod colors {
    use super::Color;

    /// Cursor row
    pub const INFO: Color = Color::Cyan;
    /// Error messages
    pub const ERROR: Color = Color::Red;
}

/// Theme for the search prompt: colorful when color is on, plain otherwise
pub fn prompt_theme(color: bool) -> Box<dyn Theme> {
    if color {
        Box::new(ColorfulTheme::default())
    } else {
        Box::new(SimpleTheme)
    }
}
