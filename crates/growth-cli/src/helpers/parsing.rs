//! Parsing helpers for dates, checklists, output format, and entry IDs.

use chrono::{Duration, NaiveDate};

use growth_core::storage::{
    padded_checklist, ChecklistItem, ChecklistKind, EntryStore, JournalEntry, Substrate,
    CHECKLIST_SLOTS,
};

use crate::errors::CliError;

/// Parse an entry date: YYYY-MM-DD, "today", or "yesterday".
pub fn parse_date(value: &str, today: NaiveDate) -> anyhow::Result<NaiveDate> {
    let trimmed = value.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "today" => return Ok(today),
        "yesterday" => return Ok(today - Duration::days(1)),
        _ => {}
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
        CliError::invalid_input(format!(
            "Invalid date (expected YYYY-MM-DD, today, or yesterday): {}",
            value
        ))
        .into()
    })
}

/// Output format for the list command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Plain,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Plain => "plain",
        }
    }
}

/// Parse output format string.
pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    match value {
        None => Ok(None),
        Some("table") => Ok(Some(OutputFormat::Table)),
        Some("plain") => Ok(Some(OutputFormat::Plain)),
        Some(other) => Err(CliError::invalid_input(format!(
            "Unsupported format: {} (use table or plain)",
            other
        ))
        .into()),
    }
}

/// Build a checklist from repeated `--goal`/`--study`/`--must` flags.
///
/// Check marks from `previous` carry over slot by slot.
pub fn checklist_from_flags(
    kind: ChecklistKind,
    texts: &[String],
    previous: &[ChecklistItem],
) -> anyhow::Result<Vec<ChecklistItem>> {
    if texts.len() > CHECKLIST_SLOTS {
        return Err(CliError::invalid_input(format!(
            "{} takes at most {} items (got {})",
            kind.label(),
            CHECKLIST_SLOTS,
            texts.len()
        ))
        .into());
    }
    let mut items = padded_checklist(texts.iter().map(|text| text.trim()));
    for (item, old) in items.iter_mut().zip(previous) {
        item.checked = old.checked && !item.is_blank();
    }
    Ok(items)
}

/// Look up an entry by full ID or by a unique ID prefix.
pub fn require_entry<S: Substrate>(
    store: &EntryStore<S>,
    id: &str,
) -> anyhow::Result<JournalEntry> {
    let id = id.trim();
    let entries = store.read_all()?;
    if let Some(entry) = entries.iter().find(|entry| entry.id == id) {
        return Ok(entry.clone());
    }

    let mut matches: Vec<&JournalEntry> = if id.is_empty() {
        Vec::new()
    } else {
        entries
            .iter()
            .filter(|entry| entry.id.starts_with(id))
            .collect()
    };
    match matches.len() {
        0 => Err(CliError::not_found(
            format!("Entry {} not found", id),
            "Run `growth list` to find entry IDs.",
        )
        .into()),
        1 => Ok(matches.remove(0).clone()),
        n => Err(CliError::invalid_input(format!(
            "Entry ID prefix {} is ambiguous ({} matches); use more characters",
            id, n
        ))
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use growth_core::storage::MemorySubstrate;

    fn day(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_parse_date_keywords() {
        let today = day("2024-03-01");
        assert_eq!(parse_date("today", today).unwrap(), today);
        assert_eq!(parse_date("Yesterday", today).unwrap(), day("2024-02-29"));
        assert_eq!(parse_date(" 2023-12-31 ", today).unwrap(), day("2023-12-31"));
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        let err = parse_date("31/12/2023", day("2024-01-01")).unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format(None).unwrap(), None);
        assert_eq!(
            parse_output_format(Some("plain")).unwrap(),
            Some(OutputFormat::Plain)
        );
        assert!(parse_output_format(Some("csv")).is_err());
    }

    #[test]
    fn test_checklist_from_flags_pads_and_trims() {
        let items =
            checklist_from_flags(ChecklistKind::DailyGoals, &[" run ".to_string()], &[]).unwrap();
        assert_eq!(items.len(), CHECKLIST_SLOTS);
        assert_eq!(items[0].text, "run");
        assert!(items[1].is_blank());
    }

    #[test]
    fn test_checklist_from_flags_keeps_marks_by_slot() {
        let previous = vec![
            ChecklistItem::new("run").checked(true),
            ChecklistItem::new("read").checked(true),
        ];
        let texts = vec!["jog".to_string()];
        let items = checklist_from_flags(ChecklistKind::DailyGoals, &texts, &previous).unwrap();
        assert!(items[0].checked);
        assert!(!items[1].checked);
    }

    #[test]
    fn test_checklist_from_flags_rejects_too_many() {
        let texts: Vec<String> = (0..5).map(|i| format!("item {}", i)).collect();
        assert!(checklist_from_flags(ChecklistKind::MustDo, &texts, &[]).is_err());
    }

    #[test]
    fn test_require_entry_by_prefix() {
        let store = EntryStore::new(MemorySubstrate::new());
        let first = JournalEntry::new(day("2024-01-01"), "A", "a").with_id("abc-111");
        let second = JournalEntry::new(day("2024-01-02"), "B", "b").with_id("abd-222");
        store.save(&first).unwrap();
        store.save(&second).unwrap();

        assert_eq!(require_entry(&store, "abc-111").unwrap().id, "abc-111");
        assert_eq!(require_entry(&store, "abd").unwrap().id, "abd-222");

        let ambiguous = require_entry(&store, "ab").unwrap_err();
        assert!(ambiguous.to_string().contains("ambiguous"));

        let missing = require_entry(&store, "zzz").unwrap_err();
        assert!(matches!(
            missing.downcast_ref::<CliError>(),
            Some(CliError::NotFound { .. })
        ));
    }
}
