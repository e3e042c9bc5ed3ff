use std::io::{self, Read};

use crate::app::AppContext;
use crate::cli::ImportArgs;
use crate::errors::CliError;
use crate::helpers::confirm;
use crate::ui::{badge, print, receipt, Badge, OutputMode};

fn read_source(path: &str) -> anyhow::Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
        return Ok(buffer);
    }
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(contents),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(CliError::not_found(
            format!("Import file not found: {}", path),
            "Create one with `growth export --output <file>`.",
        )
        .into()),
        Err(err) => Err(anyhow::anyhow!("Failed to read {}: {}", path, err)),
    }
}

pub fn handle_import(ctx: &AppContext, args: &ImportArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let blob = read_source(&args.path)?;
    let ui_ctx = ctx.ui_context(false, None);

    if !args.force {
        // Reading the blob from stdin leaves nothing to answer a prompt with.
        if args.path == "-" || !ui_ctx.is_interactive() {
            return Err(CliError::invalid_input(
                "Import replaces every stored entry; pass --force to confirm",
            )
            .into());
        }
        let current = store.len()?;
        if current > 0 {
            print(
                &ui_ctx,
                &badge(
                    &ui_ctx,
                    Badge::Warn,
                    &format!("{} stored entries will be replaced", current),
                ),
            );
        }
        if !confirm("Replace all entries with the import?")? {
            if !ctx.quiet() {
                match ui_ctx.mode {
                    OutputMode::Pretty => print(&ui_ctx, &badge(&ui_ctx, Badge::Info, "Cancelled")),
                    OutputMode::Plain | OutputMode::Json => println!("status=cancelled"),
                }
            }
            return Ok(());
        }
    }

    let imported = store.import_all(&blob)?;

    if !ctx.quiet() {
        let count = imported.to_string();
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Imported entries",
                &[("Entries", count.as_str()), ("Source", args.path.as_str())],
            ),
        );
    }
    Ok(())
}
