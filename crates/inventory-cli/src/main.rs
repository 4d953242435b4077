//! Inventory CLI - track item quantities in a plain JSON file
//!
//! This is the command-line interface for Inventory. With no subcommand it
//! runs a short demonstration of every store operation.

mod app;
mod cli;
mod commands;
mod config;
mod helpers;
mod logging;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{demo, misc, reports, stock};

fn main() {
    logging::init_tracing();
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let error_msg = format!("{}", e);
        eprintln!("Error: {}", error_msg);
        if let Some(hint) = extract_error_hint(&error_msg) {
            eprintln!("{}", hint);
        }
        std::process::exit(1);
    }
}

/// Provide contextual hints for common error messages.
fn extract_error_hint(error: &str) -> Option<String> {
    let error_lower = error.to_lowercase();

    if error_lower.contains("not found in inventory") {
        return Some("Hint: Run `inventory report` to see stocked items.".to_string());
    }

    if error_lower.contains("invalid quantity") {
        return Some("Hint: Quantities are whole numbers, zero or more.".to_string());
    }

    if error_lower.contains("error decoding json") {
        return Some(
            "Hint: The file must be a JSON object such as {\"apple\": 7}. Fix it or point --file elsewhere."
                .to_string(),
        );
    }

    if error_lower.contains("error saving file") {
        return Some("Hint: Ensure the parent directory exists and is writable.".to_string());
    }

    None
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        None | Some(Commands::Demo) => {
            demo::handle_demo(ctx)?;
        }
        Some(Commands::Add(args)) => {
            stock::handle_add(ctx, args)?;
        }
        Some(Commands::Remove(args)) => {
            stock::handle_remove(ctx, args)?;
        }
        Some(Commands::Qty(args)) => {
            stock::handle_qty(ctx, args)?;
        }
        Some(Commands::Report(args)) => {
            reports::handle_report(ctx, args)?;
        }
        Some(Commands::Low(args)) => {
            reports::handle_low(ctx, args)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
    }

    Ok(())
}
