//! Interactive input: titles, confirmations, and entry bodies.

use std::io::{self, IsTerminal, Read};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use dialoguer::{Confirm, Input};

use crate::errors::CliError;

/// Prompt for an entry title, pre-filled with `initial` when editing.
pub fn prompt_title(interactive: bool, initial: Option<&str>) -> anyhow::Result<String> {
    if !interactive {
        return Err(
            CliError::invalid_input("--title is required when prompts are disabled").into(),
        );
    }
    let mut input = Input::<String>::new().with_prompt("Title");
    if let Some(value) = initial {
        input = input.with_initial_text(value);
    }
    let title = input
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read title: {}", e))?;
    if title.trim().is_empty() {
        return Err(CliError::invalid_input("Title is required").into());
    }
    Ok(title)
}

/// Ask a yes/no question that defaults to "no".
pub fn confirm(prompt: &str) -> anyhow::Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read confirmation: {}", e))
}

/// Read entry body from --body flag, stdin, or $EDITOR.
pub fn read_entry_body(
    no_input: bool,
    body: Option<String>,
    editor_override: Option<&str>,
    initial_body: Option<&str>,
) -> anyhow::Result<String> {
    if let Some(value) = body {
        if value.trim().is_empty() {
            return Err(CliError::invalid_input("--body cannot be empty").into());
        }
        return Ok(value);
    }

    if !io::stdin().is_terminal() {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
        let trimmed = buffer.trim_end().to_string();
        if trimmed.is_empty() {
            return Err(CliError::invalid_input(
                "No body provided; use --body or pipe content via stdin",
            )
            .into());
        }
        return Ok(trimmed);
    }

    if no_input {
        return Err(
            CliError::invalid_input("--no-input requires --body or content on stdin").into(),
        );
    }

    read_body_from_editor(editor_override, initial_body)
}

/// Open the editor on a temp file and return what was saved.
fn read_body_from_editor(
    editor_override: Option<&str>,
    initial_body: Option<&str>,
) -> anyhow::Result<String> {
    let editor = editor_override
        .map(|value| value.to_string())
        .or_else(|| std::env::var("EDITOR").ok())
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| {
            CliError::invalid_input("$EDITOR is not set; use --body or pipe content via stdin")
        })?;

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| anyhow::anyhow!("System time error: {}", e))?
        .as_nanos();
    let path = std::env::temp_dir().join(format!(
        "growth_entry_{}_{}.md",
        std::process::id(),
        nanos
    ));

    std::fs::write(&path, initial_body.unwrap_or(""))
        .map_err(|e| anyhow::anyhow!("Failed to create temp file: {}", e))?;

    // Editors like "code --wait" carry their own arguments.
    let mut parts = editor.split_whitespace();
    let program = parts.next().unwrap_or("vi");
    let status = Command::new(program)
        .args(parts)
        .arg(&path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to launch editor {}: {}", program, e));
    let status = match status {
        Ok(status) => status,
        Err(err) => {
            let _ = std::fs::remove_file(&path);
            return Err(err);
        }
    };
    if !status.success() {
        let _ = std::fs::remove_file(&path);
        return Err(anyhow::anyhow!("Editor exited with failure"));
    }

    let contents = std::fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("Failed to read temp file: {}", e))?;
    let _ = std::fs::remove_file(&path);

    let trimmed = contents.trim_end().to_string();
    if trimmed.is_empty() {
        return Err(CliError::invalid_input("Entry body is empty").into());
    }
    Ok(trimmed)
}
