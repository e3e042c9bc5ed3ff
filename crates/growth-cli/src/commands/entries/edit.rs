use std::io::{self, IsTerminal};

use growth_core::storage::ChecklistKind;

use crate::app::AppContext;
use crate::cli::EditArgs;
use crate::helpers::{
    checklist_from_flags, parse_date, prompt_title, read_entry_body, require_entry,
};
use crate::ui::{print, receipt};

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let mut entry = require_entry(&store, &args.id)?;
    let fields = &args.fields;

    if fields.is_empty() {
        // Nothing on the command line: edit the body, piped or in the editor.
        let body = read_entry_body(args.no_input, None, ctx.editor()?, Some(&entry.body))?;
        entry.body = body.trim().to_string();
    } else {
        if let Some(value) = fields.date.as_deref() {
            entry.date = parse_date(value, ctx.today()?)?;
        }
        if let Some(value) = fields.title.as_deref() {
            entry.title = value.trim().to_string();
        }
        if let Some(value) = fields.body.as_deref() {
            entry.body = value.trim().to_string();
        }
        if let Some(value) = fields.quote.as_deref() {
            entry.motivational_quote = value.trim().to_string();
        }
        for (kind, texts) in [
            (ChecklistKind::DailyGoals, &fields.goals),
            (ChecklistKind::StudyToday, &fields.study),
            (ChecklistKind::MustDo, &fields.must),
        ] {
            if texts.is_empty() {
                continue;
            }
            let items = checklist_from_flags(kind, texts, entry.checklist(kind))?;
            *entry.checklist_mut(kind) = items;
        }
    }

    if entry.title.trim().is_empty() {
        let interactive = !args.no_input && io::stdin().is_terminal();
        entry.title = prompt_title(interactive, None)?.trim().to_string();
    }
    entry.validate()?;
    store.save(&entry)?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        let date_text = entry.date.to_string();
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Updated entry",
                &[
                    ("ID", entry.id.as_str()),
                    ("Date", date_text.as_str()),
                    ("Title", entry.title.as_str()),
                ],
            ),
        );
    }
    Ok(())
}
