use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::helpers::{parse_date, parse_output_format};
use crate::output::{entries_json, print_entry_list, sort_newest_first};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    let today = ctx.today()?;
    let since = args
        .since
        .as_deref()
        .map(|value| parse_date(value, today))
        .transpose()?;
    let until = args
        .until
        .as_deref()
        .map(|value| parse_date(value, today))
        .transpose()?;

    let store = ctx.open_store()?;
    let mut entries = store.read_all()?;
    sort_newest_first(&mut entries);
    entries.retain(|entry| {
        since.map_or(true, |since| entry.date >= since)
            && until.map_or(true, |until| entry.date <= until)
    });
    if let Some(limit) = args.limit {
        entries.truncate(limit);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries_json(&entries)?)?);
        return Ok(());
    }

    let ui_ctx = ctx.ui_context(false, format.map(|f| f.as_str()));
    let data_dir = store.substrate().root().display().to_string();
    print_entry_list(&ui_ctx, &entries, &data_dir, ctx.quiet());
    Ok(())
}
