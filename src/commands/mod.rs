//! Subcommand implementations

pub mod demo;
pub mod pick;

use anyhow::{bail, Context as _, Result};
use pickmenu::config::{self, Config};
use pickmenu::ui::{detect_capabilities, resolve_color};
use pickmenu::{ColorMode, MenuStyle, TerminalConsole};
use tracing::info;

use crate::cli::Cli;

/// Settings shared by every command
#[derive(Debug, Clone)]
pub struct Context {
    pub config: Config,
    pub color: bool,
}

impl Context {
    /// Resolve configuration and terminal capabilities for an interactive run
    pub fn load(cli: &Cli) -> Result<Self> {
        let (config, warnings) = config::load_or_default(cli.config.as_deref())
            .context("failed to load configuration")?;
        info!(warnings = warnings.len(), "configuration loaded");

        let caps = detect_capabilities();
        if !caps.is_tty {
            bail!("pickmenu needs an interactive terminal on stderr");
        }

        let mode = cli.color.map(ColorMode::from).unwrap_or(config.output.color);
        let color = resolve_color(mode, &caps);

        Ok(Self { config, color })
    }

    pub fn style(&self) -> MenuStyle {
        self.config.menu_style(self.color)
    }

    pub fn console(&self) -> TerminalConsole {
        TerminalConsole::new(self.color)
    }
}
