//! `pickmenu single` and `pickmenu multi`

use std::io::{self, BufRead};
use std::process::ExitCode;

use anyhow::{bail, Context as _, Result};
use is_terminal::IsTerminal;
use pickmenu::{MenuStyle, MultiMenu, Outcome, SingleMenu};
use tracing::info;

use super::Context;
use crate::cli::PickArgs;

/// Exit code used when the user cancels the menu
pub const CANCELLED: u8 = 1;

pub fn cmd_single(ctx: &Context, args: &PickArgs) -> Result<ExitCode> {
    let items = collect_items(args)?;
    let mut menu = SingleMenu::new(&args.title, items)
        .with_style(style_for(ctx, args))
        .with_cursor(args.cursor);

    let mut console = ctx.console();
    let outcome = menu.show(&mut console);
    console.finish()?;

    match outcome? {
        Outcome::Selected(choice) => {
            info!(choice = %choice, "single selection");
            println!("{}", format_single(&choice, args.json)?);
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Delivered => Ok(ExitCode::SUCCESS),
        Outcome::Cancelled => Ok(ExitCode::from(CANCELLED)),
    }
}

pub fn cmd_multi(ctx: &Context, args: &PickArgs) -> Result<ExitCode> {
    let items = collect_items(args)?;
    let mut menu = MultiMenu::new(&args.title, items)
        .with_style(style_for(ctx, args))
        .with_marks(ctx.config.marks())
        .with_cursor(args.cursor);

    let mut console = ctx.console();
    let outcome = menu.show(&mut console);
    console.finish()?;

    match outcome? {
        Outcome::Selected(chosen) => {
            info!(count = chosen.len(), "multi selection");
            let output = format_multi(&chosen, args.json)?;
            if !output.is_empty() {
                println!("{output}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Delivered => Ok(ExitCode::SUCCESS),
        Outcome::Cancelled => Ok(ExitCode::from(CANCELLED)),
    }
}

fn style_for(ctx: &Context, args: &PickArgs) -> MenuStyle {
    let mut style = ctx.style();
    if let Some(indicator) = &args.indicator {
        style.indicator = indicator.clone();
    }
    if let Some(page_size) = args.page_size {
        style.page_size = usize::try_from(page_size).unwrap_or(usize::MAX);
    }
    style
}

/// Items from the command line, or one per line from piped stdin
fn collect_items(args: &PickArgs) -> Result<Vec<String>> {
    if !args.items.is_empty() {
        return Ok(args.items.clone());
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        bail!("no items given: pass them as arguments or pipe them on stdin");
    }

    let items = read_items(stdin.lock()).context("failed to read items from stdin")?;
    if items.is_empty() {
        bail!("no items on stdin");
    }
    Ok(items)
}

fn read_items(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut items = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if !line.trim().is_empty() {
            items.push(line.to_string());
        }
    }
    Ok(items)
}

fn format_single(choice: &str, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string(choice)?)
    } else {
        Ok(choice.to_string())
    }
}

fn format_multi(chosen: &[String], json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string(chosen)?)
    } else {
        Ok(chosen.join("\n"))
    }
}
