//! CLI Argument Parsing
//!
//! Global flags (--config, --color, --verbose, --log-file) are inherited by
//! all subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pickmenu::ColorMode;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(when: ColorWhen) -> Self {
        match when {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

/// pickmenu - interactive terminal menus
#[derive(Parser, Debug)]
#[command(name = "pickmenu")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Keys: up/k, down/j, enter confirm, esc cancel, space/x toggle, a toggle all, s/f search"
)]
pub struct Cli {
    /// Configuration file (defaults to <config dir>/pickmenu/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level for the log file (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write logs to this file (the terminal is reserved for the menu)
    #[arg(long, global = true, env = "PICKMENU_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pick one item and print it
    Single(PickArgs),

    /// Pick any number of items and print them, one per line
    Multi(PickArgs),

    /// Walk through a nested demo menu
    Demo,
}

#[derive(Args, Debug, Clone)]
pub struct PickArgs {
    /// Menu title
    #[arg(short, long, default_value = "Select an option")]
    pub title: String,

    /// Cursor indicator (overrides config)
    #[arg(long)]
    pub indicator: Option<String>,

    /// Rows per page (overrides config)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub page_size: Option<u64>,

    /// Initial cursor position
    #[arg(long, default_value_t = 0)]
    pub cursor: usize,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Items to choose from (read from stdin when omitted)
    pub items: Vec<String>,
}
