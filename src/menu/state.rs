//! Pagination and selection core shared by every menu variant.
//!
//! `MenuState` owns two lists: the full option list given at construction and
//! the currently visible (filtered) list. Filtering always produces a fresh
//! copy, so the two never alias. The page is derived from the cursor on every
//! read instead of being tracked incrementally.

use std::ops::Range;

use tracing::debug;

use crate::error::MenuResult;
use crate::ui::QueryPrompt;

use super::key::Key;

/// Prompt shown when the search key is pressed
pub const SEARCH_PROMPT: &str = "Search";

/// Cursor, page window and filtered view over a list of options
#[derive(Debug, Clone)]
pub struct MenuState<T> {
    all_options: Vec<T>,
    options: Vec<T>,
    selected: usize,
    page_size: usize,
    query: String,
}

impl<T: Clone> MenuState<T> {
    /// Create a state over `options` with the cursor at `cursor`.
    ///
    /// The cursor is clamped into the list and a zero page size is treated as 1.
    pub fn new(options: Vec<T>, cursor: usize, page_size: usize) -> Self {
        let mut state = Self {
            all_options: options.clone(),
            options,
            selected: 0,
            page_size: page_size.max(1),
            query: String::new(),
        };
        state.set_cursor(cursor);
        state
    }

    /// Every option, in insertion order
    pub fn all_options(&self) -> &[T] {
        &self.all_options
    }

    /// Options visible under the current search
    pub fn options(&self) -> &[T] {
        &self.options
    }

    /// Cursor index into [`Self::options`]
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Page holding the cursor: always `selected / page_size`
    pub fn page(&self) -> usize {
        self.selected / self.page_size
    }

    /// Last search query; empty when no filter is active
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Option under the cursor, if any
    pub fn current(&self) -> Option<&T> {
        self.options.get(self.selected)
    }

    /// Indices of [`Self::options`] rendered on the current page
    pub fn page_range(&self) -> Range<usize> {
        let start = self.page() * self.page_size;
        let end = (start + self.page_size).min(self.options.len());
        start.min(end)..end
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
    }

    /// Move the cursor to `cursor`, clamped to the visible options
    pub fn set_cursor(&mut self, cursor: usize) {
        self.selected = match self.options.len() {
            0 => 0,
            len => cursor.min(len - 1),
        };
    }

    /// Append an option to the full list and to the visible list
    pub fn push(&mut self, option: T) {
        self.all_options.push(option.clone());
        self.options.push(option);
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.options.len() {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        if self.selected >= 1 {
            self.selected -= 1;
        }
    }

    pub fn page_down(&mut self) {
        if let Some(last) = self.options.len().checked_sub(1) {
            self.selected = (self.selected + self.page_size).min(last);
        }
    }

    pub fn page_up(&mut self) {
        self.selected = self.selected.saturating_sub(self.page_size);
    }

    pub fn move_first(&mut self) {
        self.selected = 0;
    }

    pub fn move_last(&mut self) {
        if let Some(last) = self.options.len().checked_sub(1) {
            self.selected = last;
        }
    }

    /// Replace the visible options with a filter result.
    ///
    /// A cursor past the end is pulled back onto the last option. On an empty
    /// result the cursor is left alone; nothing can be confirmed until the
    /// options come back.
    pub fn apply_filter(&mut self, query: &str, filtered: Vec<T>) {
        self.query = query.to_string();
        self.options = filtered;
        if !self.options.is_empty() && self.selected > self.options.len() - 1 {
            self.selected = self.options.len() - 1;
        }
    }

    /// Apply one key to the cursor and the visible options.
    ///
    /// On [`Key::Search`] a query is read from `prompt` and handed to `filter`
    /// together with the full option list. The key is returned unchanged so
    /// the caller can act on confirm, cancel and selection keys.
    pub fn handle_key<P, F>(&mut self, key: Key, prompt: &mut P, filter: F) -> MenuResult<Key>
    where
        P: QueryPrompt + ?Sized,
        F: FnOnce(&str, &[T]) -> MenuResult<Vec<T>>,
    {
        if !key.is_navigation() {
            return Ok(key);
        }

        // Cursor keys on an empty list are ignored; the cursor must still
        // point at the same option once a search brings the list back.
        if key != Key::Search && self.options.is_empty() {
            return Ok(key);
        }

        match key {
            Key::Down => self.move_down(),
            Key::Up => self.move_up(),
            Key::PageDown => self.page_down(),
            Key::PageUp => self.page_up(),
            Key::First => self.move_first(),
            Key::Last => self.move_last(),
            Key::Search => {
                let query = prompt.read_query(SEARCH_PROMPT)?;
                let filtered = filter(&query, &self.all_options)?;
                debug!(query = %query, matched = filtered.len(), "search applied");
                self.apply_filter(&query, filtered);
            }
            _ => {}
        }

        debug!(?key, selected = self.selected, page = self.page(), "cursor moved");
        Ok(key)
    }
}
