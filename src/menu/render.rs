//! Page rendering for menus.
//!
//! Rendering only reads menu state; it produces the frame as lines and hands
//! them to a [`DisplaySink`].

use tracing::trace;

use crate::error::MenuResult;
use crate::ui::text::ColoredText;
use crate::ui::DisplaySink;

use super::state::MenuState;
use super::style::MenuStyle;

/// Title shown for a menu opened from `parent` (empty for top-level menus)
pub fn nested_title(parent: &str, title: &str) -> String {
    if parent.is_empty() {
        title.to_string()
    } else {
        format!("{} -> {}", parent, title)
    }
}

/// Render the title line followed by every option row on the current page.
///
/// `body` produces the text after the indicator column for each option.
pub fn render_page<T: Clone>(
    state: &MenuState<T>,
    title: &str,
    style: &MenuStyle,
    body: impl Fn(&T) -> String,
) -> Vec<String> {
    let padding = style.indicator_padding();
    let range = state.page_range();
    let mut lines = Vec::with_capacity(range.len() + 1);

    lines.push(ColoredText::plain(title).bold().render(style.color));

    for index in range {
        let option = &state.options()[index];
        if index == state.selected() {
            let row = format!("{} {}", style.indicator, body(option));
            lines.push(ColoredText::info(row).bold().render(style.color));
        } else {
            lines.push(format!("{} {}", padding, body(option)));
        }
    }

    lines
}

/// Clear the display and print `lines`
pub fn draw<D: DisplaySink + ?Sized>(display: &mut D, lines: &[String]) -> MenuResult<()> {
    trace!(lines = lines.len(), "render frame");
    display.clear()?;
    for line in lines {
        display.print_line(line)?;
    }
    display.flush()
}
