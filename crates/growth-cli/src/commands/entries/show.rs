use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::errors::CliError;
use crate::helpers::{parse_date, require_entry};
use crate::output::{entry_json, print_entry};

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;

    let entry = match (args.id.as_deref(), args.date.as_deref()) {
        (Some(id), _) => require_entry(&store, id)?,
        (None, Some(value)) => {
            let date = parse_date(value, ctx.today()?)?;
            store.read_by_date(date)?.ok_or_else(|| {
                CliError::not_found(
                    format!("No entry for {}", date),
                    format!("Run `growth write --date {}` to write one.", date),
                )
            })?
        }
        (None, None) => return Err(CliError::invalid_input("Pass an entry ID or --date").into()),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entry_json(&entry)?)?);
    } else {
        let ui_ctx = ctx.ui_context(false, None);
        print_entry(&ui_ctx, &entry, ctx.quiet());
    }
    Ok(())
}
