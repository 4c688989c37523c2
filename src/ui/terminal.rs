//! Real terminal console backed by crossterm and dialoguer.
//!
//! Frames are drawn on stderr so stdout stays free for the menu's result.

use std::io::{self, Stderr, Write};

use crossterm::{
    cursor, execute,
    terminal::{self, ClearType},
};
use dialoguer::Input;
use is_terminal::IsTerminal;

use crate::config::ColorMode;
use crate::error::MenuResult;
use crate::menu::Key;

use super::console::{DisplaySink, KeySource, QueryPrompt};
use super::keys;
use super::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub supports_color: bool,
    pub is_ci: bool,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(|key| std::env::var(key).ok(), io::stderr().is_terminal())
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");

    let no_color = get_env("NO_COLOR").is_some();
    let is_ci = is_ci_env(&get_env);

    TerminalCapabilities {
        is_tty,
        supports_color: is_tty && !term_is_dumb && !no_color,
        is_ci,
    }
}

fn is_ci_env(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &[
        "CI",
        "GITHUB_ACTIONS",
        "JENKINS_HOME",
        "BUILDKITE",
        "CIRCLECI",
        "TRAVIS",
        "TEAMCITY_VERSION",
    ];

    KEYS.iter().any(|k| get_env(k).is_some())
}

/// Decide whether menus should emit ANSI color
pub fn resolve_color(mode: ColorMode, caps: &TerminalCapabilities) -> bool {
    match mode {
        ColorMode::Never => false,
        ColorMode::Always => true,
        ColorMode::Auto => caps.supports_color && !caps.is_ci,
    }
}

/// Console that talks to the user's terminal
pub struct TerminalConsole {
    out: Stderr,
    color: bool,
}

impl TerminalConsole {
    pub fn new(color: bool) -> Self {
        Self {
            out: io::stderr(),
            color,
        }
    }

    /// Clear the last frame once the menu is done
    pub fn finish(&mut self) -> MenuResult<()> {
        self.clear()?;
        self.flush()
    }
}

impl KeySource for TerminalConsole {
    fn read_key(&mut self) -> MenuResult<Key> {
        Ok(keys::read_key()?)
    }
}

impl DisplaySink for TerminalConsole {
    fn clear(&mut self) -> MenuResult<()> {
        execute!(self.out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        Ok(())
    }

    fn print_line(&mut self, text: &str) -> MenuResult<()> {
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    fn flush(&mut self) -> MenuResult<()> {
        self.out.flush()?;
        Ok(())
    }
}

impl QueryPrompt for TerminalConsole {
    fn read_query(&mut self, prompt: &str) -> MenuResult<String> {
        self.clear()?;
        let theme = theme::prompt_theme(self.color);
        let query = Input::<String>::with_theme(theme.as_ref())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(query)
    }
}
