//! Terminal adapters: key decoding, drawing, prompting and styling.

mod console;
pub mod keys;
mod scripted;
pub mod terminal;
pub mod text;
pub mod theme;

pub use console::{Console, DisplaySink, KeySource, QueryPrompt};
pub use scripted::ScriptedConsole;
pub use terminal::{detect_capabilities, resolve_color, TerminalCapabilities, TerminalConsole};
