//! Multi-select menu: toggles a selection set and returns it on confirm.

use std::fmt;

use tracing::debug;

use crate::error::{BoxError, MenuResult};
use crate::ui::Console;

use super::composite::Show;
use super::key::Key;
use super::outcome::Outcome;
use super::render::{draw, nested_title, render_page};
use super::search::{self, Matcher};
use super::state::MenuState;
use super::style::{Marks, MenuStyle};

/// Chosen options in the order they were toggled on.
///
/// Membership uses `PartialEq`; options that compare equal collapse into one
/// entry. The set is independent of the visible options, so hiding an option
/// with a search does not unselect it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSet<T> {
    items: Vec<T>,
}

impl<T> Default for SelectionSet<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Clone + PartialEq> SelectionSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, option: &T) -> bool {
        self.items.contains(option)
    }

    /// Add `option` if absent, remove it if present. Returns whether it is now selected.
    pub fn toggle(&mut self, option: &T) -> bool {
        match self.items.iter().position(|item| item == option) {
            Some(index) => {
                self.items.remove(index);
                false
            }
            None => {
                self.items.push(option.clone());
                true
            }
        }
    }

    /// Select every option in `options` when some are missing, otherwise clear.
    pub fn toggle_all(&mut self, options: &[T]) {
        if self.items.len() < options.len() {
            self.items = options.to_vec();
        } else if self.items.len() == options.len() {
            self.items.clear();
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

/// A menu that resolves to any number of options
pub struct MultiMenu<T> {
    title: String,
    state: MenuState<T>,
    style: MenuStyle,
    marks: Marks,
    selection: SelectionSet<T>,
    matcher: Option<Matcher<T>>,
    callback: Option<Box<dyn FnMut(Vec<T>)>>,
}

impl<T: Clone + PartialEq + fmt::Display> MultiMenu<T> {
    pub fn new(title: impl Into<String>, options: impl IntoIterator<Item = T>) -> Self {
        let style = MenuStyle::default();
        Self {
            title: title.into(),
            state: MenuState::new(options.into_iter().collect(), 0, style.page_size),
            style,
            marks: Marks::default(),
            selection: SelectionSet::new(),
            matcher: None,
            callback: None,
        }
    }

    pub fn with_style(mut self, style: MenuStyle) -> Self {
        self.state.set_page_size(style.page_size);
        self.style = style;
        self
    }

    pub fn with_marks(mut self, marks: Marks) -> Self {
        self.marks = marks;
        self
    }

    pub fn with_indicator(mut self, indicator: impl Into<String>) -> Self {
        self.style.indicator = indicator.into();
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.style.page_size = page_size.max(1);
        self.state.set_page_size(page_size);
        self
    }

    pub fn with_cursor(mut self, cursor: usize) -> Self {
        self.state.set_cursor(cursor);
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.style.color = color;
        self
    }

    /// Replace the default substring search
    pub fn with_matcher<F>(mut self, matcher: F) -> Self
    where
        F: Fn(&str, &[T]) -> Result<Vec<T>, BoxError> + 'static,
    {
        self.matcher = Some(Box::new(matcher));
        self
    }

    /// Hand the confirmed selection to `callback` instead of returning it
    pub fn with_callback<F>(mut self, callback: F) -> Self
    where
        F: FnMut(Vec<T>) + 'static,
    {
        self.callback = Some(Box::new(callback));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn state(&self) -> &MenuState<T> {
        &self.state
    }

    /// Selection of the running (or last) `show` call
    pub fn selection(&self) -> &SelectionSet<T> {
        &self.selection
    }

    /// Render the current page under `title`, with a mark column
    pub fn render(&self, title: &str) -> Vec<String> {
        let checked = self.marks.checked();
        let unchecked = self.marks.unchecked();
        render_page(&self.state, title, &self.style, |option| {
            let mark = if self.selection.contains(option) {
                &checked
            } else {
                &unchecked
            };
            format!("{} {}", mark, option)
        })
    }

    /// Run the menu until the user confirms or cancels
    pub fn show(&mut self, console: &mut dyn Console) -> MenuResult<Outcome<Vec<T>>> {
        self.show_nested(console, "")
    }

    /// Run the menu as a child of the menu titled `parent`
    pub fn show_nested(
        &mut self,
        console: &mut dyn Console,
        parent: &str,
    ) -> MenuResult<Outcome<Vec<T>>> {
        let title = nested_title(parent, &self.title);
        self.selection.clear();
        debug!(title = %title, options = self.state.options().len(), "multi menu opened");

        loop {
            draw(console, &self.render(&title))?;

            let key = console.read_key()?;
            let matcher = self.matcher.as_ref();
            let key = self.state.handle_key(key, console, |query, all| {
                search::filter(query, all, matcher, |option| option.to_string())
            })?;

            match key {
                Key::Select => {
                    if let Some(option) = self.state.current() {
                        let now_selected = self.selection.toggle(option);
                        debug!(option = %option, now_selected, "selection toggled");
                    }
                }
                Key::SelectAll => {
                    self.selection.toggle_all(self.state.options());
                    debug!(selected = self.selection.len(), "selection toggled for all");
                }
                Key::Cancel => {
                    debug!(title = %title, "multi menu cancelled");
                    return Ok(Outcome::Cancelled);
                }
                // Same as single select: nothing is confirmed from an empty
                // filtered list.
                Key::Confirm => {
                    if self.state.is_empty() {
                        continue;
                    }
                    let chosen = self.selection.as_slice().to_vec();
                    debug!(title = %title, chosen = chosen.len(), "multi menu confirmed");
                    return Ok(self.deliver(chosen));
                }
                _ => {}
            }
        }
    }

    fn deliver(&mut self, chosen: Vec<T>) -> Outcome<Vec<T>> {
        match self.callback.as_mut() {
            Some(callback) => {
                callback(chosen);
                Outcome::Delivered
            }
            None => Outcome::Selected(chosen),
        }
    }
}

impl<T: Clone + PartialEq + fmt::Display> Show for MultiMenu<T> {
    fn title(&self) -> &str {
        &self.title
    }

    fn show_within(&mut self, console: &mut dyn Console, parent: &str) -> MenuResult<()> {
        self.show_nested(console, parent).map(|_| ())
    }
}
