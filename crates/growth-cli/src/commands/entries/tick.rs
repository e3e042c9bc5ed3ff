use growth_core::storage::ChecklistKind;

use crate::app::AppContext;
use crate::cli::TickArgs;
use crate::errors::CliError;
use crate::helpers::require_entry;
use crate::ui::{print, receipt};

pub fn handle_tick(ctx: &AppContext, args: &TickArgs) -> anyhow::Result<()> {
    let kind: ChecklistKind = args.section.parse()?;
    if args.index == 0 {
        return Err(CliError::invalid_input("Checklist items are numbered from 1").into());
    }
    let position = args.index - 1;

    let store = ctx.open_store()?;
    let mut entry = require_entry(&store, &args.id)?;
    let text = entry
        .checklist(kind)
        .get(position)
        .map(|item| item.text.clone())
        .unwrap_or_default();
    if text.trim().is_empty() && position < entry.checklist(kind).len() {
        return Err(CliError::invalid_input(format!(
            "{} item {} is empty",
            kind.label(),
            args.index
        ))
        .into());
    }
    entry.set_checked(kind, position, !args.uncheck)?;
    store.save(&entry)?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        let title = if args.uncheck { "Unchecked item" } else { "Checked item" };
        let (done, total) = entry.progress();
        let progress = format!("{}/{}", done, total);
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                title,
                &[
                    ("Checklist", kind.label()),
                    ("Item", text.as_str()),
                    ("Progress", progress.as_str()),
                ],
            ),
        );
    }
    Ok(())
}
