//! pickmenu - interactive terminal menus
//!
//! Renders a paged list of options, lets the user move with the keyboard,
//! filter with a search query, and returns a single choice, a set of choices,
//! or drives a tree of nested menus and actions.
//!
//! Menus never touch the terminal directly: they block on a [`Console`],
//! which is either the real [`TerminalConsole`] or a [`ScriptedConsole`] fed
//! from queued keys.

pub mod config;
pub mod error;
pub mod menu;
pub mod ui;

// Re-exports for convenience
pub use config::{ColorMode, Config, ConfigWarning};
pub use error::{BoxError, MenuError, MenuResult};
pub use menu::{
    ActionItem, CompositeMenu, Entry, Key, Marks, MenuState, MenuStyle, MultiMenu, Outcome,
    SelectionSet, Show, SingleMenu,
};
pub use ui::{Console, DisplaySink, KeySource, QueryPrompt, ScriptedConsole, TerminalConsole};
