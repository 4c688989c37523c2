//! pickmenu CLI - interactive terminal menus
//!
//! Usage: pickmenu <COMMAND>
//!
//! Commands:
//!   single  Pick one item and print it
//!   multi   Pick any number of items and print them
//!   demo    Walk through a nested demo menu
//!
//! Exit codes: 0 on a choice, 1 when cancelled, 2 on error.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use pickmenu::ui::detect_capabilities;
use pickmenu::ui::text::ColoredText;
use tracing::error;

mod cli;
mod commands;
mod logging;

use cli::{Cli, Commands};
use commands::Context;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            error!("{err:#}");
            let color = detect_capabilities().supports_color;
            eprintln!("{}", ColoredText::error(format!("Error: {err:#}")).render(color));
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    logging::init(cli.verbose, cli.log_file.as_deref())?;

    let ctx = Context::load(&cli)?;
    match &cli.command {
        Commands::Single(args) => commands::pick::cmd_single(&ctx, args),
        Commands::Multi(args) => commands::pick::cmd_multi(&ctx, args),
        Commands::Demo => commands::demo::cmd_demo(&ctx),
    }
}
