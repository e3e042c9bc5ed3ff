//! Core data types for the entry store.
//!
//! Entries persist as camelCase JSON objects. Reading accepts every entry
//! shape the journal has written over time and upgrades it to the
//! canonical `{text, checked}` checklist form; writing always emits the
//! canonical form.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

use crate::error::{GrowthError, Result};

/// Number of slots the write form offers per checklist.
pub const CHECKLIST_SLOTS: usize = 4;

/// Current time at millisecond precision.
pub fn timestamp_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

fn serialize_timestamp<S>(
    value: &DateTime<Utc>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}

/// One line of a goal checklist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub text: String,
    #[serde(default)]
    pub checked: bool,
}

impl ChecklistItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            checked: false,
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// True when the slot has no text worth showing.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Build a checklist from texts, padded with blank slots up to [`CHECKLIST_SLOTS`].
pub fn padded_checklist<I, T>(texts: I) -> Vec<ChecklistItem>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let mut items: Vec<ChecklistItem> = texts.into_iter().map(ChecklistItem::new).collect();
    while items.len() < CHECKLIST_SLOTS {
        items.push(ChecklistItem::default());
    }
    items
}

/// The three goal checklists an entry can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChecklistKind {
    DailyGoals,
    StudyToday,
    MustDo,
}

impl ChecklistKind {
    pub const ALL: [ChecklistKind; 3] = [
        ChecklistKind::DailyGoals,
        ChecklistKind::StudyToday,
        ChecklistKind::MustDo,
    ];

    /// Heading shown above the checklist.
    pub fn label(&self) -> &'static str {
        match self {
            Self::DailyGoals => "Daily goals",
            Self::StudyToday => "Study today",
            Self::MustDo => "Must do today",
        }
    }

    /// Short name accepted on the command line.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::DailyGoals => "daily",
            Self::StudyToday => "study",
            Self::MustDo => "must",
        }
    }
}

impl fmt::Display for ChecklistKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for ChecklistKind {
    type Err = GrowthError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "daily" | "daily-goals" | "dailygoals" => Ok(Self::DailyGoals),
            "study" | "study-today" | "studytoday" => Ok(Self::StudyToday),
            "must" | "must-do" | "mustdo" => Ok(Self::MustDo),
            other => Err(GrowthError::Validation(format!(
                "Unknown checklist \"{}\" (use daily, study, or must)",
                other
            ))),
        }
    }
}

/// A journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawEntry")]
pub struct JournalEntry {
    /// Opaque identifier, unique within the collection
    pub id: String,

    /// Calendar day the entry is about
    pub date: NaiveDate,

    pub title: String,

    pub body: String,

    /// Set once, when the entry is first written
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: DateTime<Utc>,

    /// Refreshed by every save
    #[serde(serialize_with = "serialize_timestamp")]
    pub updated_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub daily_goals: Vec<ChecklistItem>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub study_today: Vec<ChecklistItem>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub must_do: Vec<ChecklistItem>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub motivational_quote: String,
}

impl JournalEntry {
    /// Create a new entry with a fresh id and matching created/updated timestamps.
    pub fn new(date: NaiveDate, title: impl Into<String>, body: impl Into<String>) -> Self {
        let now = timestamp_now();
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            title: title.into(),
            body: body.into(),
            created_at: now,
            updated_at: now,
            daily_goals: Vec::new(),
            study_today: Vec::new(),
            must_do: Vec::new(),
            motivational_quote: String::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_checklist(mut self, kind: ChecklistKind, items: Vec<ChecklistItem>) -> Self {
        *self.checklist_mut(kind) = items;
        self
    }

    pub fn with_quote(mut self, quote: impl Into<String>) -> Self {
        self.motivational_quote = quote.into();
        self
    }

    pub fn checklist(&self, kind: ChecklistKind) -> &[ChecklistItem] {
        match kind {
            ChecklistKind::DailyGoals => &self.daily_goals,
            ChecklistKind::StudyToday => &self.study_today,
            ChecklistKind::MustDo => &self.must_do,
        }
    }

    pub fn checklist_mut(&mut self, kind: ChecklistKind) -> &mut Vec<ChecklistItem> {
        match kind {
            ChecklistKind::DailyGoals => &mut self.daily_goals,
            ChecklistKind::StudyToday => &mut self.study_today,
            ChecklistKind::MustDo => &mut self.must_do,
        }
    }

    /// Mark a checklist item (zero-based index) as done or not done.
    pub fn set_checked(&mut self, kind: ChecklistKind, index: usize, checked: bool) -> Result<()> {
        let items = self.checklist_mut(kind);
        let len = items.len();
        let item = items.get_mut(index).ok_or_else(|| {
            GrowthError::Validation(format!(
                "{} has {} item(s); index {} is out of range",
                kind.label(),
                len,
                index + 1
            ))
        })?;
        item.checked = checked;
        Ok(())
    }

    /// Checked and total counts across all checklists, ignoring blank slots.
    pub fn progress(&self) -> (usize, usize) {
        ChecklistKind::ALL
            .iter()
            .flat_map(|kind| self.checklist(*kind).iter())
            .filter(|item| !item.is_blank())
            .fold((0, 0), |(done, total), item| {
                (done + usize::from(item.checked), total + 1)
            })
    }

    /// True once the entry has been saved over at least once.
    pub fn was_updated(&self) -> bool {
        self.updated_at != self.created_at
    }

    /// Check the fields a saved entry must carry.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(GrowthError::Validation("Entry id is empty".to_string()));
        }
        if self.title.trim().is_empty() {
            return Err(GrowthError::Validation("Title is required".to_string()));
        }
        if self.body.trim().is_empty() {
            return Err(GrowthError::Validation("Body is required".to_string()));
        }
        Ok(())
    }
}

/// Checklist shapes seen in stored data.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawChecklist {
    Items(Vec<ChecklistItem>),
    Texts(Vec<String>),
}

/// Entry as found on disk, before upgrade.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEntry {
    id: String,
    date: NaiveDate,
    title: String,
    body: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(default)]
    daily_goals: Option<RawChecklist>,
    #[serde(default)]
    daily_goals_checked: Option<Vec<bool>>,
    #[serde(default)]
    study_today: Option<RawChecklist>,
    #[serde(default)]
    study_today_checked: Option<Vec<bool>>,
    #[serde(default)]
    must_do: Option<RawChecklist>,
    #[serde(default)]
    must_do_checked: Option<Vec<bool>>,
    #[serde(default)]
    motivational_quote: Option<String>,
}

fn upgrade_checklist(list: Option<RawChecklist>, flags: Option<Vec<bool>>) -> Vec<ChecklistItem> {
    match list {
        None => Vec::new(),
        Some(RawChecklist::Items(items)) => items,
        Some(RawChecklist::Texts(texts)) => {
            let flags = flags.unwrap_or_default();
            texts
                .into_iter()
                .enumerate()
                .map(|(index, text)| ChecklistItem {
                    text,
                    checked: flags.get(index).copied().unwrap_or(false),
                })
                .collect()
        }
    }
}

impl From<RawEntry> for JournalEntry {
    fn from(raw: RawEntry) -> Self {
        Self {
            id: raw.id,
            date: raw.date,
            title: raw.title,
            body: raw.body,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
            daily_goals: upgrade_checklist(raw.daily_goals, raw.daily_goals_checked),
            study_today: upgrade_checklist(raw.study_today, raw.study_today_checked),
            must_do: upgrade_checklist(raw.must_do, raw.must_do_checked),
            motivational_quote: raw.motivational_quote.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_plain_entry_parses_with_empty_checklists() {
        let json = r#"{
            "id": "a",
            "date": "2024-01-01",
            "title": "T",
            "body": "B",
            "createdAt": "2024-01-01T08:00:00.000Z",
            "updatedAt": "2024-01-01T08:00:00.000Z"
        }"#;
        let entry: JournalEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, "a");
        assert_eq!(entry.date, day("2024-01-01"));
        assert!(entry.daily_goals.is_empty());
        assert!(entry.motivational_quote.is_empty());
        assert!(!entry.was_updated());
    }

    #[test]
    fn test_parallel_arrays_upgrade_to_items() {
        let json = r#"{
            "id": "b",
            "date": "2024-02-03",
            "title": "T",
            "body": "B",
            "createdAt": "2024-02-03T08:00:00.000Z",
            "updatedAt": "2024-02-03T09:30:00.000Z",
            "dailyGoals": ["run", "read", "", ""],
            "dailyGoalsChecked": [true, false],
            "mustDo": ["taxes"],
            "mustDoChecked": [true, true, true],
            "motivationalQuote": "Keep going"
        }"#;
        let entry: JournalEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.daily_goals.len(), 4);
        assert_eq!(entry.daily_goals[0], ChecklistItem::new("run").checked(true));
        assert_eq!(entry.daily_goals[1], ChecklistItem::new("read"));
        assert!(!entry.daily_goals[3].checked);
        assert_eq!(entry.must_do, vec![ChecklistItem::new("taxes").checked(true)]);
        assert!(entry.study_today.is_empty());
        assert_eq!(entry.motivational_quote, "Keep going");
        assert!(entry.was_updated());
    }

    #[test]
    fn test_pair_checklists_parse_and_default_checked() {
        let json = r#"{
            "id": "c",
            "date": "2024-03-04",
            "title": "T",
            "body": "B",
            "createdAt": "2024-03-04T08:00:00Z",
            "updatedAt": "2024-03-04T08:00:00Z",
            "studyToday": [{"text": "rust", "checked": true}, {"text": "sql"}],
            "dailyGoals": null
        }"#;
        let entry: JournalEntry = serde_json::from_str(json).unwrap();
        assert_eq!(
            entry.study_today,
            vec![ChecklistItem::new("rust").checked(true), ChecklistItem::new("sql")]
        );
        assert!(entry.daily_goals.is_empty());
    }

    #[test]
    fn test_unknown_checklist_shape_is_rejected() {
        let json = r#"{
            "id": "d",
            "date": "2024-03-04",
            "title": "T",
            "body": "B",
            "createdAt": "2024-03-04T08:00:00Z",
            "updatedAt": "2024-03-04T08:00:00Z",
            "mustDo": 42
        }"#;
        assert!(serde_json::from_str::<JournalEntry>(json).is_err());
    }

    #[test]
    fn test_serialization_emits_canonical_camel_case() {
        let entry = JournalEntry::new(day("2024-05-06"), "Title", "Body")
            .with_id("e")
            .with_checklist(ChecklistKind::DailyGoals, padded_checklist(["stretch"]))
            .with_quote("Onward");
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["id"], "e");
        assert_eq!(value["date"], "2024-05-06");
        assert!(value["createdAt"].as_str().unwrap().ends_with('Z'));
        assert_eq!(value["dailyGoals"][0]["text"], "stretch");
        assert_eq!(value["dailyGoals"][0]["checked"], false);
        assert_eq!(value["dailyGoals"].as_array().unwrap().len(), CHECKLIST_SLOTS);
        assert_eq!(value["motivationalQuote"], "Onward");
        assert!(value.get("studyToday").is_none());
        assert!(value.get("dailyGoalsChecked").is_none());

        let parsed: JournalEntry = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, entry);
    }

    #[test]
    fn test_set_checked_and_progress() {
        let mut entry = JournalEntry::new(day("2024-05-06"), "T", "B")
            .with_checklist(ChecklistKind::MustDo, padded_checklist(["a", "b"]));
        assert_eq!(entry.progress(), (0, 2));

        entry.set_checked(ChecklistKind::MustDo, 1, true).unwrap();
        assert_eq!(entry.progress(), (1, 2));

        let err = entry
            .set_checked(ChecklistKind::StudyToday, 0, true)
            .unwrap_err();
        assert!(matches!(err, GrowthError::Validation(_)));
    }

    #[test]
    fn test_validate_requires_title_and_body() {
        let entry = JournalEntry::new(day("2024-05-06"), "  ", "Body");
        assert!(entry.validate().is_err());
        let entry = JournalEntry::new(day("2024-05-06"), "Title", "\n");
        assert!(entry.validate().is_err());
        let entry = JournalEntry::new(day("2024-05-06"), "Title", "Body");
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn test_checklist_kind_from_str() {
        assert_eq!("daily".parse::<ChecklistKind>().unwrap(), ChecklistKind::DailyGoals);
        assert_eq!("Study".parse::<ChecklistKind>().unwrap(), ChecklistKind::StudyToday);
        assert_eq!("must-do".parse::<ChecklistKind>().unwrap(), ChecklistKind::MustDo);
        assert!("weekly".parse::<ChecklistKind>().is_err());
    }

    #[test]
    fn test_timestamp_now_has_millisecond_precision() {
        let now = timestamp_now();
        assert_eq!(now.timestamp_subsec_nanos() % 1_000_000, 0);
    }
}
