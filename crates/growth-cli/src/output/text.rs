//! Text and table output for entries.

use growth_core::storage::{ChecklistKind, JournalEntry};

use crate::ui::theme::{styled, styles, UPDATED};
use crate::ui::{
    badge, blank_line, checklist_item, divider, format_datetime, format_long_date,
    header_with_context, hint, kv, print, short_id, simple_table, single_line, truncate, wrap,
    Badge, Column, UiContext,
};

/// Sort by entry date, newest first. Entries sharing a date keep stored order.
pub fn sort_newest_first(entries: &mut [JournalEntry]) {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
}

fn progress_label(entry: &JournalEntry) -> String {
    let (done, total) = entry.progress();
    if total == 0 {
        "-".to_string()
    } else {
        format!("{}/{}", done, total)
    }
}

/// Print the entry list as a table (pretty) or tab-separated rows (plain).
pub fn print_entry_list(ctx: &UiContext, entries: &[JournalEntry], data_dir: &str, quiet: bool) {
    if ctx.mode.is_pretty() {
        if !quiet {
            let count = match entries.len() {
                1 => "1 entry".to_string(),
                n => format!("{} entries", n),
            };
            print(ctx, &header_with_context(ctx, "list", Some(&count), Some(data_dir)));
            blank_line(ctx);
        }
        if entries.is_empty() {
            print(ctx, &badge(ctx, Badge::Info, "No entries yet"));
            print(ctx, &hint(ctx, "growth write --title \"Day one\""));
            return;
        }

        let columns = [
            Column::new("ID"),
            Column::new("Date"),
            Column::new("Title"),
            Column::new("Progress"),
            Column::new(""),
        ];
        let title_width = ctx.width.saturating_sub(40).clamp(16, 60);
        let rows: Vec<Vec<String>> = entries
            .iter()
            .map(|entry| {
                let marker = if entry.was_updated() {
                    styled(UPDATED.get(ctx.unicode), styles::dim(), ctx.color)
                } else {
                    String::new()
                };
                vec![
                    short_id(&entry.id),
                    entry.date.to_string(),
                    truncate(&single_line(&entry.title), title_width),
                    progress_label(entry),
                    marker,
                ]
            })
            .collect();
        print(ctx, &simple_table(ctx, &columns, &rows));
        if !quiet && entries.iter().any(JournalEntry::was_updated) {
            blank_line(ctx);
            print(
                ctx,
                &styled(
                    &format!("{} edited after it was written", UPDATED.get(ctx.unicode)),
                    styles::dim(),
                    ctx.color,
                ),
            );
        }
    } else {
        if !quiet {
            print(ctx, &format!("count={}", entries.len()));
        }
        let rows: Vec<Vec<String>> = entries
            .iter()
            .map(|entry| {
                vec![
                    entry.id.clone(),
                    entry.date.to_string(),
                    single_line(&entry.title),
                    progress_label(entry),
                    if entry.was_updated() { "updated" } else { "" }.to_string(),
                ]
            })
            .collect();
        if !rows.is_empty() {
            print(ctx, &simple_table(ctx, &[], &rows));
        }
    }
}

/// Print one entry as a card (pretty) or key=value lines (plain).
///
/// Quiet mode prints only the body.
pub fn print_entry(ctx: &UiContext, entry: &JournalEntry, quiet: bool) {
    if quiet {
        print(ctx, &entry.body);
        return;
    }

    if ctx.mode.is_pretty() {
        let mut heading = styled(&entry.title, styles::bold(), ctx.color);
        if entry.was_updated() {
            heading.push_str(&format!(" {}", styled("(updated)", styles::dim(), ctx.color)));
        }
        print(ctx, &heading);
        print(
            ctx,
            &styled(
                &format!("{} \u{00B7} {}", format_long_date(entry.date), short_id(&entry.id)),
                styles::dim(),
                ctx.color,
            ),
        );
        print(ctx, &divider(ctx));
        for line in wrap(&entry.body, ctx.width.min(80)) {
            print(ctx, &line);
        }

        for kind in ChecklistKind::ALL {
            let items: Vec<_> = entry
                .checklist(kind)
                .iter()
                .filter(|item| !item.is_blank())
                .collect();
            if items.is_empty() {
                continue;
            }
            let done = items.iter().filter(|item| item.checked).count();
            blank_line(ctx);
            print(
                ctx,
                &format!(
                    "{} {}",
                    styled(kind.label(), styles::bold(), ctx.color),
                    styled(&format!("({}/{})", done, items.len()), styles::dim(), ctx.color)
                ),
            );
            for item in items {
                print(ctx, &checklist_item(ctx, &item.text, item.checked));
            }
        }

        if !entry.motivational_quote.trim().is_empty() {
            blank_line(ctx);
            print(
                ctx,
                &styled(
                    &format!("\u{201C}{}\u{201D}", entry.motivational_quote.trim()),
                    styles::info(),
                    ctx.color,
                ),
            );
        }

        blank_line(ctx);
        print(ctx, &kv(ctx, "Created", &format_datetime(&entry.created_at, true)));
        if entry.was_updated() {
            print(ctx, &kv(ctx, "Updated", &format_datetime(&entry.updated_at, true)));
        }
    } else {
        print(ctx, &kv(ctx, "ID", &entry.id));
        print(ctx, &kv(ctx, "Date", &entry.date.to_string()));
        print(ctx, &kv(ctx, "Title", &single_line(&entry.title)));
        print(ctx, &kv(ctx, "Created", &format_datetime(&entry.created_at, false)));
        print(ctx, &kv(ctx, "Updated", &format_datetime(&entry.updated_at, false)));
        for kind in ChecklistKind::ALL {
            for item in entry.checklist(kind).iter().filter(|item| !item.is_blank()) {
                let mark = if item.checked { "[x]" } else { "[ ]" };
                print(
                    ctx,
                    &kv(ctx, kind.short_name(), &format!("{} {}", mark, single_line(&item.text))),
                );
            }
        }
        if !entry.motivational_quote.trim().is_empty() {
            print(ctx, &kv(ctx, "Quote", &single_line(&entry.motivational_quote)));
        }
        print(ctx, "");
        print(ctx, &entry.body);
    }
}
