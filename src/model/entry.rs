//! Mood history entries

use super::mood::MoodKind;
use chrono::{DateTime, Local};
use std::fmt;
use uuid::Uuid;

/// Maximum note length, in characters
pub const MAX_NOTE_CHARS: usize = 100;

/// Stable identity of an entry, independent of its position in history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single logged mood
#[derive(Debug, Clone, PartialEq)]
pub struct MoodEntry {
    pub id: EntryId,
    pub mood: MoodKind,
    /// Milliseconds since the Unix epoch, fixed at creation
    pub timestamp_ms: i64,
    pub note: String,
}

impl MoodEntry {
    pub fn new(mood: MoodKind, timestamp: DateTime<Local>, note: &str) -> Self {
        Self {
            id: EntryId::new(),
            mood,
            timestamp_ms: timestamp.timestamp_millis(),
            note: clamp_note(note),
        }
    }

    /// Creation time in the local time zone
    pub fn local_time(&self) -> Option<DateTime<Local>> {
        DateTime::from_timestamp_millis(self.timestamp_ms).map(|utc| utc.with_timezone(&Local))
    }

    pub fn formatted_timestamp(&self) -> String {
        self.local_time()
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }

    /// Whether this entry was logged on the same local calendar day as `now`
    pub fn is_same_day(&self, now: &DateTime<Local>) -> bool {
        self.local_time()
            .is_some_and(|t| t.date_naive() == now.date_naive())
    }
}

/// Truncate note text to [`MAX_NOTE_CHARS`] characters
pub fn clamp_note(text: &str) -> String {
    text.chars().take(MAX_NOTE_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 12, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_clamp_note_truncates_at_boundary() {
        let long = "a".repeat(150);
        assert_eq!(clamp_note(&long).chars().count(), MAX_NOTE_CHARS);

        let exact = "b".repeat(MAX_NOTE_CHARS);
        assert_eq!(clamp_note(&exact), exact);
    }

    #[test]
    fn test_clamp_note_counts_characters_not_bytes() {
        let long = "é".repeat(120);
        let clamped = clamp_note(&long);
        assert_eq!(clamped.chars().count(), MAX_NOTE_CHARS);
        assert_eq!(clamped.len(), MAX_NOTE_CHARS * 2);
    }

    #[test]
    fn test_entry_ids_are_unique() {
        let a = MoodEntry::new(MoodKind::Happy, noon(), "");
        let b = MoodEntry::new(MoodKind::Happy, noon(), "");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_formatted_timestamp() {
        let entry = MoodEntry::new(MoodKind::Sad, noon(), "rainy");
        assert_eq!(entry.formatted_timestamp(), "2024-03-12 12:00:00");
    }

    #[test]
    fn test_is_same_day_uses_calendar_date() {
        let now = noon();
        let recent = MoodEntry::new(MoodKind::Happy, now - Duration::minutes(1), "");
        let yesterday = MoodEntry::new(MoodKind::Happy, now - Duration::hours(23), "");

        assert!(recent.is_same_day(&now));
        assert!(!yesterday.is_same_day(&now));
    }
}
