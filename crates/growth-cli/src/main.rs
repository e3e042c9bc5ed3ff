//! Growth CLI - a daily journal with goal, study, and must-do checklists
//!
//! Command-line front end over the `growth-core` entry store.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;
mod ui;

use clap::Parser;
use growth_core::VERSION;
use tracing_subscriber::EnvFilter;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{entries, init, maintenance, misc};
use crate::errors::{exit_code_for, split_hint};
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    init_tracing();
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false, None);
        let rendered = format!("{:#}", e);
        let (message, hint) = split_hint(&rendered);
        print_error(&ui_ctx, message, hint);
        std::process::exit(exit_code_for(&e));
    }
}

/// Log to stderr, filtered by GROWTH_LOG (default "warn").
fn init_tracing() {
    let filter = EnvFilter::try_from_env("GROWTH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => {
            init::handle_init(ctx, args)?;
        }
        Some(Commands::Write(args)) => {
            entries::handle_write(ctx, args)?;
        }
        Some(Commands::Edit(args)) => {
            entries::handle_edit(ctx, args)?;
        }
        Some(Commands::Tick(args)) => {
            entries::handle_tick(ctx, args)?;
        }
        Some(Commands::List(args)) => {
            entries::handle_list(ctx, args)?;
        }
        Some(Commands::Show(args)) => {
            entries::handle_show(ctx, args)?;
        }
        Some(Commands::Delete(args)) => {
            entries::handle_delete(ctx, args)?;
        }
        Some(Commands::Export(args)) => {
            entries::handle_export(ctx, args)?;
        }
        Some(Commands::Import(args)) => {
            maintenance::handle_import(ctx, args)?;
        }
        Some(Commands::Check) => {
            maintenance::handle_check(ctx)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
        None => {
            println!("Growth v{}", VERSION);
            println!("\nQuickstart:");
            println!("  growth init");
            println!("  growth write --title \"Day one\" --body \"Started today\" --goal \"Walk 5k\"");
            println!("  growth list");
            println!("  growth tick <id> daily 1");
            println!("  growth show <id>");
            println!("\nRun `growth --help` for full usage.");
        }
    }

    Ok(())
}
