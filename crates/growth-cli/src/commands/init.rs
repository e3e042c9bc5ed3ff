use std::path::PathBuf;

use growth_core::storage::{FileSubstrate, Substrate};
use growth_core::GrowthError;

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{default_data_dir, write_config, GrowthConfig};
use crate::errors::CliError;
use crate::ui::{badge, hint, print, Badge, OutputMode};

/// Validate an IANA timezone name. "auto" or blank means the system zone.
fn parse_timezone(value: &str) -> anyhow::Result<Option<String>> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("auto") {
        return Ok(None);
    }
    let tz = trimmed
        .parse::<chrono_tz::Tz>()
        .map_err(|_| CliError::invalid_input(format!("Invalid timezone: {}", trimmed)))?;
    Ok(Some(tz.to_string()))
}

fn editor_command_name(value: &str) -> Option<&str> {
    value.split_whitespace().next().filter(|s| !s.is_empty())
}

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let config_path = resolve_config_path()?;
    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input(format!(
            "Config already exists at {}\nHint: Pass --force to overwrite it.",
            config_path.display()
        ))
        .into());
    }

    let data_dir = match args.path.as_deref().or(ctx.cli().data_dir.as_deref()) {
        Some(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => default_data_dir()?,
    };
    let timezone = match args.timezone.as_deref() {
        Some(value) => parse_timezone(value)?,
        None => None,
    };
    let editor = args
        .editor
        .as_deref()
        .filter(|value| editor_command_name(value).is_some())
        .map(|value| value.trim().to_string());

    FileSubstrate::new(&data_dir)
        .probe()
        .map_err(|e| GrowthError::StorageUnavailable(format!("{}: {}", data_dir.display(), e)))?;

    let config = GrowthConfig::new(data_dir.clone(), timezone.clone(), editor);
    write_config(&config_path, &config)?;
    tracing::info!(config = %config_path.display(), data_dir = %data_dir.display(), "initialized");

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        match ui_ctx.mode {
            OutputMode::Pretty => {
                print(
                    &ui_ctx,
                    &badge(
                        &ui_ctx,
                        Badge::Ok,
                        &format!("Entries will be stored in {}", data_dir.display()),
                    ),
                );
                print(
                    &ui_ctx,
                    &badge(
                        &ui_ctx,
                        Badge::Ok,
                        &format!("Config written to {}", config_path.display()),
                    ),
                );
                if let Some(tz) = timezone.as_deref() {
                    print(&ui_ctx, &badge(&ui_ctx, Badge::Info, &format!("Timezone: {}", tz)));
                }
                println!();
                print(
                    &ui_ctx,
                    &hint(
                        &ui_ctx,
                        "growth write  \u{00B7}  growth list  \u{00B7}  growth --help",
                    ),
                );
            }
            OutputMode::Plain | OutputMode::Json => {
                println!("status=ok");
                println!("data_dir={}", data_dir.display());
                println!("config_path={}", config_path.display());
                if let Some(tz) = timezone.as_deref() {
                    println!("timezone={}", tz);
                }
            }
        }
    }
    Ok(())
}
