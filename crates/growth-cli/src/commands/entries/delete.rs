use crate::app::AppContext;
use crate::cli::DeleteArgs;
use crate::errors::CliError;
use crate::helpers::{confirm, require_entry};
use crate::ui::{badge, print, Badge, OutputMode};

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let entry = require_entry(&store, &args.id)?;
    let ui_ctx = ctx.ui_context(false, None);

    if !args.force {
        if !ui_ctx.is_interactive() {
            return Err(CliError::invalid_input(
                "Refusing to delete without confirmation; pass --force",
            )
            .into());
        }
        let confirmed = confirm(&format!(
            "Delete \"{}\" from {}? This cannot be undone.",
            entry.title, entry.date
        ))?;
        if !confirmed {
            if !ctx.quiet() {
                match ui_ctx.mode {
                    OutputMode::Pretty => {
                        print(&ui_ctx, &badge(&ui_ctx, Badge::Info, "Cancelled"));
                    }
                    OutputMode::Plain | OutputMode::Json => {
                        println!("status=cancelled");
                    }
                }
            }
            return Ok(());
        }
    }

    store.delete_by_id(&entry.id)?;

    if !ctx.quiet() {
        match ui_ctx.mode {
            OutputMode::Pretty => {
                print(
                    &ui_ctx,
                    &badge(
                        &ui_ctx,
                        Badge::Ok,
                        &format!("Deleted \"{}\" ({})", entry.title, entry.date),
                    ),
                );
            }
            OutputMode::Plain | OutputMode::Json => {
                println!("status=ok");
                println!("deleted={}", entry.id);
            }
        }
    }
    Ok(())
}
