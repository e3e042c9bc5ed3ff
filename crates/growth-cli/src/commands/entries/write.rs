use std::io::{self, IsTerminal};

use growth_core::storage::{ChecklistKind, JournalEntry};

use crate::app::AppContext;
use crate::cli::WriteArgs;
use crate::helpers::{checklist_from_flags, parse_date, prompt_title, read_entry_body};
use crate::ui::{badge, hint, print, receipt, short_id, Badge};

pub fn handle_write(ctx: &AppContext, args: &WriteArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let fields = &args.fields;

    let date = match fields.date.as_deref() {
        Some(value) => parse_date(value, ctx.today()?)?,
        None => ctx.today()?,
    };

    let interactive = !args.no_input && io::stdin().is_terminal();
    let title = match fields.title.as_deref() {
        Some(value) => value.to_string(),
        None => prompt_title(interactive, None)?,
    };
    let body = read_entry_body(args.no_input, fields.body.clone(), ctx.editor()?, None)?;

    let mut entry = JournalEntry::new(date, title.trim(), body.trim())
        .with_checklist(
            ChecklistKind::DailyGoals,
            checklist_from_flags(ChecklistKind::DailyGoals, &fields.goals, &[])?,
        )
        .with_checklist(
            ChecklistKind::StudyToday,
            checklist_from_flags(ChecklistKind::StudyToday, &fields.study, &[])?,
        )
        .with_checklist(
            ChecklistKind::MustDo,
            checklist_from_flags(ChecklistKind::MustDo, &fields.must, &[])?,
        );
    if let Some(quote) = fields.quote.as_deref() {
        entry = entry.with_quote(quote.trim());
    }
    entry.validate()?;

    let existing = store.read_by_date(date)?;
    store.save(&entry)?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        if let Some(other) = existing {
            print(
                &ui_ctx,
                &badge(
                    &ui_ctx,
                    Badge::Warn,
                    &format!("{} already had an entry ({})", date, short_id(&other.id)),
                ),
            );
        }
        let id = entry.id.clone();
        let date_text = entry.date.to_string();
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Saved entry",
                &[
                    ("ID", id.as_str()),
                    ("Date", date_text.as_str()),
                    ("Title", entry.title.as_str()),
                ],
            ),
        );
        if ui_ctx.mode.is_pretty() {
            print(&ui_ctx, &hint(&ui_ctx, &format!("growth show {}", short_id(&id))));
        }
    }
    Ok(())
}
