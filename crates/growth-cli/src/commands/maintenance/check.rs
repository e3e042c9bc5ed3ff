use growth_core::GrowthError;

use crate::app::AppContext;
use crate::errors::CliError;
use crate::ui::{badge, hint, kv, print, Badge};

pub fn handle_check(ctx: &AppContext) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let ui_ctx = ctx.ui_context(false, None);

    match store.check_integrity() {
        Ok(report) => {
            if !ctx.quiet() {
                print(&ui_ctx, &badge(&ui_ctx, Badge::Ok, "Integrity check passed"));
                print(&ui_ctx, &kv(&ui_ctx, "Entries", &report.entries.to_string()));
                for date in &report.duplicate_dates {
                    print(
                        &ui_ctx,
                        &badge(&ui_ctx, Badge::Warn, &format!("More than one entry on {}", date)),
                    );
                }
            }
            Ok(())
        }
        Err(GrowthError::Corrupt(detail)) => {
            eprintln!("{}", badge(&ui_ctx, Badge::Err, "Integrity check failed"));
            eprintln!("{}", kv(&ui_ctx, "Error", &detail));
            eprintln!(
                "{}",
                hint(&ui_ctx, "Restore from an export with `growth import <file> --force`.")
            );
            Err(CliError::integrity_failed("Stored entries are corrupt").into())
        }
        Err(err) => Err(err.into()),
    }
}
