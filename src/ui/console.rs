//! Seams between menus and the terminal.
//!
//! Menus block on a [`KeySource`], draw through a [`DisplaySink`] and read
//! search queries from a [`QueryPrompt`]. A [`Console`] is anything that does
//! all three.

use crate::error::MenuResult;
use crate::menu::Key;

/// Blocking source of normalized keys
pub trait KeySource {
    /// Wait for the next key
    fn read_key(&mut self) -> MenuResult<Key>;
}

/// Line-oriented output surface
pub trait DisplaySink {
    /// Wipe the surface before a new frame
    fn clear(&mut self) -> MenuResult<()>;

    fn print_line(&mut self, text: &str) -> MenuResult<()>;

    fn flush(&mut self) -> MenuResult<()> {
        Ok(())
    }
}

/// Reads a full line of text, used for search queries
pub trait QueryPrompt {
    fn read_query(&mut self, prompt: &str) -> MenuResult<String>;
}

/// Everything a running menu talks to
pub trait Console: KeySource + DisplaySink + QueryPrompt {}

impl<C: KeySource + DisplaySink + QueryPrompt + ?Sized> Console for C {}
