use std::path::Path;

use growth_core::fs::write_atomic;

use crate::app::AppContext;
use crate::cli::ExportArgs;
use crate::ui::{print, receipt};

pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let blob = store.export_all()?;

    let Some(output) = args.output.as_deref() else {
        println!("{}", blob);
        return Ok(());
    };

    let path = Path::new(output);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!("Failed to create directory {}: {}", parent.display(), e)
        })?;
    }
    write_atomic(path, format!("{}\n", blob).as_bytes())
        .map_err(|e| anyhow::anyhow!("Failed to write export {}: {}", path.display(), e))?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        let count = store.len()?.to_string();
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Exported entries",
                &[("Entries", count.as_str()), ("File", output)],
            ),
        );
    }
    Ok(())
}
