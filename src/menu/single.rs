//! Single-select menu: returns one option or cancels.

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
use super::style::MenuStyle;

/// A menu that resolves to exactly one option
pub struct SingleMenu<T> {
    title: String,
    state: MenuState<T>,
    style: MenuStyle,
    matcher: Option<Matcher<T>>,
    callback: Option<Box<dyn FnMut(T)>>,
}

impl<T: Clone + fmt::Display> SingleMenu<T> {
    pub fn new(title: impl Into<String>, options: impl IntoIterator<Item = T>) -> Self {
        let style = MenuStyle::default();
        Self {
            title: title.into(),
            state: MenuState::new(options.into_iter().collect(), 0, style.page_size),
            style,
            matcher: None,
            callback: None,
        }
    }

    pub fn with_style(mut self, style: MenuStyle) -> Self {
        self.state.set_page_size(style.page_size);
        self.style = style;
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

    /// Hand the confirmed option to `callback` instead of returning it
    pub fn with_callback<F>(mut self, callback: F) -> Self
    where
        F: FnMut(T) + 'static,
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

    /// Render the current page under `title`
    pub fn render(&self, title: &str) -> Vec<String> {
        render_page(&self.state, title, &self.style, |option| option.to_string())
    }

    /// Run the menu until the user confirms or cancels
    pub fn show(&mut self, console: &mut dyn Console) -> MenuResult<Outcome<T>> {
        self.show_nested(console, "")
    }

    /// Run the menu as a child of the menu titled `parent`
    pub fn show_nested(&mut self, console: &mut dyn Console, parent: &str) -> MenuResult<Outcome<T>> {
        let title = nested_title(parent, &self.title);
        debug!(title = %title, options = self.state.options().len(), "single menu opened");

        loop {
            draw(console, &self.render(&title))?;

            let key = console.read_key()?;
            let matcher = self.matcher.as_ref();
            let key = self.state.handle_key(key, console, |query, all| {
                search::filter(query, all, matcher, |option| option.to_string())
            })?;

            match key {
                Key::Cancel => {
                    debug!(title = %title, "single menu cancelled");
                    return Ok(Outcome::Cancelled);
                }
                // An empty filtered list blocks confirmation until the search
                // is reset or the menu is cancelled.
                Key::Confirm => {
                    if let Some(option) = self.state.current().cloned() {
                        debug!(title = %title, choice = %option, "single menu confirmed");
                        return Ok(self.deliver(option));
                    }
                }
                _ => {}
            }
        }
    }

    fn deliver(&mut self, option: T) -> Outcome<T> {
        match self.callback.as_mut() {
            Some(callback) => {
                callback(option);
                Outcome::Delivered
            }
            None => Outcome::Selected(option),
        }
    }
}

impl<T: Clone + fmt::Display> Show for SingleMenu<T> {
    fn title(&self) -> &str {
        &self.title
    }

    fn show_within(&mut self, console: &mut dyn Console, parent: &str) -> MenuResult<()> {
        self.show_nested(console, parent).map(|_| ())
    }
}
