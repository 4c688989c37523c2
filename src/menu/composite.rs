//! Composite menus: navigation-only menus whose entries run actions or open
//! other menus.
//!
//! A composite never returns a value. Confirm runs the entry under the cursor
//! and the loop continues; only cancel leaves the menu. Child menus run on the
//! same stack, so the parent resumes exactly where it was.

use std::fmt;

use tracing::debug;

use crate::error::{BoxError, MenuError, MenuResult};
use crate::ui::Console;

use super::key::Key;
use super::render::{draw, nested_title, render_page};
use super::search;
use super::state::MenuState;
use super::style::MenuStyle;

/// Anything that can be opened from a composite menu
pub trait Show {
    fn title(&self) -> &str;

    /// Run until the user leaves, rendering `parent` in the title path
    fn show_within(&mut self, console: &mut dyn Console, parent: &str) -> MenuResult<()>;
}

type Action = Box<dyn FnMut() -> Result<(), BoxError>>;

/// A titled unit of work run synchronously on confirm
pub struct ActionItem {
    title: String,
    action: Action,
}

impl ActionItem {
    pub fn new<F>(title: impl Into<String>, mut action: F) -> Self
    where
        F: FnMut() + 'static,
    {
        Self::fallible(title, move || {
            action();
            Ok(())
        })
    }

    /// An action whose failure ends the surrounding menu with an error
    pub fn fallible<F>(title: impl Into<String>, action: F) -> Self
    where
        F: FnMut() -> Result<(), BoxError> + 'static,
    {
        Self {
            title: title.into(),
            action: Box::new(action),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn run(&mut self) -> MenuResult<()> {
        debug!(title = %self.title, "running action");
        (self.action)().map_err(|source| MenuError::Action {
            title: self.title.clone(),
            source,
        })
    }
}

impl fmt::Debug for ActionItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionItem").field("title", &self.title).finish()
    }
}

/// One row of a composite menu
pub enum Entry {
    Action(ActionItem),
    Menu(Box<dyn Show>),
}

impl Entry {
    pub fn action<F>(title: impl Into<String>, action: F) -> Self
    where
        F: FnMut() + 'static,
    {
        Entry::Action(ActionItem::new(title, action))
    }

    pub fn menu(menu: impl Show + 'static) -> Self {
        Entry::Menu(Box::new(menu))
    }

    pub fn title(&self) -> &str {
        match self {
            Entry::Action(item) => item.title(),
            Entry::Menu(menu) => menu.title(),
        }
    }
}

impl From<ActionItem> for Entry {
    fn from(item: ActionItem) -> Self {
        Entry::Action(item)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A menu of actions and sub-menus
pub struct CompositeMenu {
    title: String,
    entries: Vec<Entry>,
    // Options are indices into `entries`, so filtering never touches the entries.
    state: MenuState<usize>,
    style: MenuStyle,
}

impl CompositeMenu {
    pub fn new(title: impl Into<String>, entries: impl IntoIterator<Item = Entry>) -> Self {
        let entries: Vec<Entry> = entries.into_iter().collect();
        let style = MenuStyle::default();
        Self {
            title: title.into(),
            state: MenuState::new((0..entries.len()).collect(), 0, style.page_size),
            entries,
            style,
        }
    }

    /// Append an entry after construction
    pub fn with_entry(mut self, entry: impl Into<Entry>) -> Self {
        self.state.push(self.entries.len());
        self.entries.push(entry.into());
        self
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

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn state(&self) -> &MenuState<usize> {
        &self.state
    }

    /// Render the current page under `title`
    pub fn render(&self, title: &str) -> Vec<String> {
        render_page(&self.state, title, &self.style, |index| {
            self.entries[*index].title().to_string()
        })
    }

    /// Run the menu until the user cancels
    pub fn show(&mut self, console: &mut dyn Console) -> MenuResult<()> {
        self.show_nested(console, "")
    }

    /// Run the menu as a child of the menu titled `parent`
    pub fn show_nested(&mut self, console: &mut dyn Console, parent: &str) -> MenuResult<()> {
        let title = nested_title(parent, &self.title);
        debug!(title = %title, entries = self.entries.len(), "composite menu opened");

        loop {
            draw(console, &self.render(&title))?;

            let key = console.read_key()?;
            let entries = &self.entries;
            let key = self.state.handle_key(key, console, |query, all| {
                search::filter(query, all, None, |index| entries[*index].title().to_string())
            })?;

            match key {
                Key::Cancel => {
                    debug!(title = %title, "composite menu closed");
                    return Ok(());
                }
                Key::Confirm => {
                    let Some(&index) = self.state.current() else {
                        continue;
                    };
                    match &mut self.entries[index] {
                        Entry::Action(item) => item.run()?,
                        Entry::Menu(menu) => {
                            debug!(parent = %title, child = %menu.title(), "entering sub-menu");
                            menu.show_within(console, &title)?;
                        }
                    }
                }
                _ => {}
            }
        }
    }
}

impl Show for CompositeMenu {
    fn title(&self) -> &str {
        &self.title
    }

    fn show_within(&mut self, console: &mut dyn Console, parent: &str) -> MenuResult<()> {
        self.show_nested(console, parent)
    }
}
