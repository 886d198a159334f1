//! Mood log - owns history, drafts, the edit session and reminder state
//!
//! Every mutation goes through a named operation. Operations either apply
//! fully or return an error and leave state untouched.

use super::entry::{clamp_note, EntryId, MoodEntry};
use super::mood::{MoodKind, MOOD_COUNT};
use crate::error::{MoodError, MoodResult};
use chrono::{DateTime, Local};

/// Maximum number of entries kept in history
pub const HISTORY_CAPACITY: usize = 5;

/// An in-progress edit of one entry's note
#[derive(Debug, Clone, PartialEq)]
struct EditSession {
    entry: EntryId,
    draft: String,
}

/// Edit session as seen by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditView {
    pub index: usize,
    pub draft: String,
}

/// Per-mood entry counts, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoodCounts([usize; MOOD_COUNT]);

impl MoodCounts {
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a MoodEntry>) -> Self {
        let mut counts = [0; MOOD_COUNT];
        for entry in entries {
            counts[entry.mood.index()] += 1;
        }
        Self(counts)
    }

    pub fn get(&self, mood: MoodKind) -> usize {
        self.0[mood.index()]
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (MoodKind, usize)> + '_ {
        MoodKind::ALL.iter().map(|kind| (*kind, self.get(*kind)))
    }

    /// Mood with the highest count; the earliest catalog mood wins ties
    ///
    /// A candidate only replaces the current best when its count is strictly
    /// greater, starting from "none" at zero, so all-zero counts yield `None`.
    pub fn most_frequent(&self) -> Option<MoodKind> {
        let mut best: Option<MoodKind> = None;
        let mut best_count = 0;
        for (kind, count) in self.iter() {
            if count > best_count {
                best = Some(kind);
                best_count = count;
            }
        }
        best
    }
}

/// Read-only projection rendered by the UI after every mutation
#[derive(Debug, Clone, PartialEq)]
pub struct MoodLogSnapshot {
    pub history: Vec<MoodEntry>,
    pub draft_note: String,
    pub edit: Option<EditView>,
    pub pending_delete: Option<usize>,
    pub counts: MoodCounts,
    pub most_frequent: Option<MoodKind>,
    pub show_reminder: bool,
}

/// Domain state for the mood tracker
#[derive(Debug, Default)]
pub struct MoodLog {
    history: Vec<MoodEntry>,
    draft_note: String,
    edit: Option<EditSession>,
    pending_delete: Option<EntryId>,
    reminder_dismissed: bool,
}

impl MoodLog {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Entries, newest first
    pub fn history(&self) -> &[MoodEntry] {
        &self.history
    }

    pub fn draft_note(&self) -> &str {
        &self.draft_note
    }

    pub fn reminder_dismissed(&self) -> bool {
        self.reminder_dismissed
    }

    fn position_of(&self, id: EntryId) -> Option<usize> {
        self.history.iter().position(|e| e.id == id)
    }

    fn entry_at(&self, index: usize) -> MoodResult<&MoodEntry> {
        self.history.get(index).ok_or(MoodError::IndexOutOfRange {
            index,
            len: self.history.len(),
        })
    }

    /// Active edit session, resolved to the entry's current position
    pub fn edit_session(&self) -> Option<EditView> {
        let session = self.edit.as_ref()?;
        let index = self.position_of(session.entry)?;
        Some(EditView {
            index,
            draft: session.draft.clone(),
        })
    }

    /// Position of the entry awaiting delete confirmation
    pub fn pending_delete(&self) -> Option<usize> {
        self.pending_delete.and_then(|id| self.position_of(id))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Submission
    // ─────────────────────────────────────────────────────────────────────────

    pub fn set_draft_note(&mut self, text: &str) {
        self.draft_note = clamp_note(text);
    }

    /// Log `mood_name` with the trimmed `draft_note`, stamped with the current time
    pub fn submit_mood(&mut self, mood_name: &str, draft_note: &str) -> MoodResult<EntryId> {
        self.submit_mood_at(mood_name, draft_note, Local::now())
    }

    pub fn submit_mood_at(
        &mut self,
        mood_name: &str,
        draft_note: &str,
        now: DateTime<Local>,
    ) -> MoodResult<EntryId> {
        let mood = MoodKind::from_name(mood_name)?;
        let entry = MoodEntry::new(mood, now, draft_note.trim());
        let id = entry.id;
        self.push_entry(entry);
        Ok(id)
    }

    /// Log `mood` using the current draft note
    pub fn select_mood(&mut self, mood: MoodKind) -> MoodResult<EntryId> {
        let draft = self.draft_note.clone();
        self.submit_mood(mood.name(), &draft)
    }

    pub fn select_mood_at(&mut self, mood: MoodKind, now: DateTime<Local>) -> MoodResult<EntryId> {
        let draft = self.draft_note.clone();
        self.submit_mood_at(mood.name(), &draft, now)
    }

    fn push_entry(&mut self, entry: MoodEntry) {
        tracing::info!(mood = %entry.mood, note_len = entry.note.chars().count(), "mood logged");

        self.history.insert(0, entry);
        if self.history.len() > HISTORY_CAPACITY {
            for evicted in self.history.drain(HISTORY_CAPACITY..) {
                tracing::debug!(entry = %evicted.id, mood = %evicted.mood, "entry evicted");
            }
            self.drop_dangling_references();
        }
        self.draft_note.clear();
    }

    /// Clear an edit session or delete request whose entry is gone
    fn drop_dangling_references(&mut self) {
        if self
            .edit
            .as_ref()
            .is_some_and(|s| self.position_of(s.entry).is_none())
        {
            tracing::debug!("edit session ended by eviction");
            self.edit = None;
        }
        if self
            .pending_delete
            .is_some_and(|id| self.position_of(id).is_none())
        {
            self.pending_delete = None;
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Editing
    // ─────────────────────────────────────────────────────────────────────────

    /// Start editing the note of the entry at `index`, abandoning any prior edit
    pub fn begin_edit(&mut self, index: usize) -> MoodResult<()> {
        let entry = self.entry_at(index)?;
        let session = EditSession {
            entry: entry.id,
            draft: entry.note.clone(),
        };
        if let Some(prev) = self.edit.replace(session) {
            tracing::debug!(entry = %prev.entry, "unsaved edit abandoned");
        }
        tracing::debug!(index, "edit started");
        Ok(())
    }

    /// Replace the edit draft verbatim, truncated to the note cap
    pub fn update_edit_draft(&mut self, text: &str) -> MoodResult<()> {
        let session = self.edit.as_mut().ok_or(MoodError::NoActiveEdit)?;
        session.draft = clamp_note(text);
        Ok(())
    }

    /// Commit the edit draft untrimmed. Returns `false` when nothing was being edited.
    pub fn save_edit(&mut self) -> bool {
        let Some(session) = self.edit.take() else {
            return false;
        };
        match self.history.iter_mut().find(|e| e.id == session.entry) {
            Some(entry) => {
                entry.note = session.draft;
                tracing::info!(entry = %entry.id, "note updated");
                true
            }
            None => false,
        }
    }

    /// Discard the edit draft. Returns `false` when nothing was being edited.
    pub fn cancel_edit(&mut self) -> bool {
        self.edit.take().is_some()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Deletion
    // ─────────────────────────────────────────────────────────────────────────

    /// First step of a delete: remember which entry the user wants gone
    pub fn request_delete(&mut self, index: usize) -> MoodResult<EntryId> {
        let id = self.entry_at(index)?.id;
        self.pending_delete = Some(id);
        Ok(id)
    }

    /// Second step of a delete; only removes the entry that was requested
    pub fn confirm_delete(&mut self, index: usize) -> MoodResult<MoodEntry> {
        let requested = self
            .pending_delete
            .ok_or(MoodError::DeleteNotRequested { index })?;
        let id = self.entry_at(index)?.id;
        if id != requested {
            return Err(MoodError::DeleteNotRequested { index });
        }

        self.pending_delete = None;
        let removed = self.history.remove(index);
        if self.edit.as_ref().is_some_and(|s| s.entry == removed.id) {
            self.edit = None;
        }

        tracing::info!(entry = %removed.id, mood = %removed.mood, "entry deleted");
        Ok(removed)
    }

    /// Abandon a pending delete request. Returns `false` when none was pending.
    pub fn cancel_delete(&mut self) -> bool {
        self.pending_delete.take().is_some()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Statistics & reminder
    // ─────────────────────────────────────────────────────────────────────────

    pub fn mood_counts(&self) -> MoodCounts {
        MoodCounts::from_entries(&self.history)
    }

    pub fn most_frequent_mood(&self) -> Option<MoodKind> {
        self.mood_counts().most_frequent()
    }

    pub fn has_entry_today(&self) -> bool {
        self.has_entry_today_at(Local::now())
    }

    pub fn has_entry_today_at(&self, now: DateTime<Local>) -> bool {
        self.history.iter().any(|e| e.is_same_day(&now))
    }

    pub fn dismiss_reminder(&mut self) {
        self.reminder_dismissed = true;
    }

    pub fn show_reminder_at(&self, now: DateTime<Local>) -> bool {
        !self.reminder_dismissed && !self.has_entry_today_at(now)
    }

    pub fn snapshot(&self) -> MoodLogSnapshot {
        self.snapshot_at(Local::now())
    }

    pub fn snapshot_at(&self, now: DateTime<Local>) -> MoodLogSnapshot {
        MoodLogSnapshot {
            history: self.history.clone(),
            draft_note: self.draft_note.clone(),
            edit: self.edit_session(),
            pending_delete: self.pending_delete(),
            counts: self.mood_counts(),
            most_frequent: self.most_frequent_mood(),
            show_reminder: self.show_reminder_at(now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MAX_NOTE_CHARS;
    use chrono::{Duration, TimeZone};

    fn noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 12, 12, 0, 0).unwrap()
    }

    /// Submit moods one second apart, oldest first
    fn log_with(moods: &[&str]) -> MoodLog {
        let mut log = MoodLog::new();
        for (i, mood) in moods.iter().enumerate() {
            log.submit_mood_at(mood, "", noon() + Duration::seconds(i as i64))
                .unwrap();
        }
        log
    }

    fn moods_of(log: &MoodLog) -> Vec<MoodKind> {
        log.history().iter().map(|e| e.mood).collect()
    }

    #[test]
    fn test_history_never_exceeds_capacity() {
        let mut log = MoodLog::new();
        let mut submitted = Vec::new();
        for i in 0..12 {
            let mood = MoodKind::ALL[i % MOOD_COUNT];
            submitted.push(log.submit_mood_at(mood.name(), "", noon()).unwrap());
            assert!(log.history().len() <= HISTORY_CAPACITY);
        }

        let kept: Vec<EntryId> = log.history().iter().map(|e| e.id).collect();
        let expected: Vec<EntryId> = submitted
            .iter()
            .rev()
            .take(HISTORY_CAPACITY)
            .copied()
            .collect();
        assert_eq!(kept, expected);
    }

    #[test]
    fn test_eviction_drops_oldest() {
        let log = log_with(&["Happy", "Sad", "Neutral", "Energetic", "Tired", "Happy"]);

        assert_eq!(
            moods_of(&log),
            vec![
                MoodKind::Happy,
                MoodKind::Tired,
                MoodKind::Energetic,
                MoodKind::Neutral,
                MoodKind::Sad,
            ]
        );
        // The first Happy (oldest timestamp) is gone
        let oldest = noon().timestamp_millis();
        assert!(log.history().iter().all(|e| e.timestamp_ms != oldest));
    }

    #[test]
    fn test_submit_trims_note_and_clears_draft() {
        let mut log = MoodLog::new();
        log.set_draft_note("  tired today  ");
        log.submit_mood_at("Happy", "  tired today  ", noon()).unwrap();

        assert_eq!(log.history()[0].note, "tired today");
        assert_eq!(log.draft_note(), "");
    }

    #[test]
    fn test_select_mood_uses_draft_note() {
        let mut log = MoodLog::new();
        log.set_draft_note(" slept well ");
        log.select_mood_at(MoodKind::Energetic, noon()).unwrap();

        assert_eq!(log.history()[0].mood, MoodKind::Energetic);
        assert_eq!(log.history()[0].note, "slept well");
        assert_eq!(log.draft_note(), "");
    }

    #[test]
    fn test_submit_rejects_unknown_mood() {
        let mut log = MoodLog::new();
        log.set_draft_note("keep me");

        let result = log.submit_mood_at("Grumpy", "keep me", noon());

        assert_eq!(result, Err(MoodError::InvalidMoodKind("Grumpy".to_string())));
        assert!(log.history().is_empty());
        assert_eq!(log.draft_note(), "keep me");
    }

    #[test]
    fn test_draft_note_is_capped() {
        let mut log = MoodLog::new();
        log.set_draft_note(&"x".repeat(130));
        assert_eq!(log.draft_note().chars().count(), 100);
    }

    #[test]
    fn test_submitted_note_is_capped() {
        let mut log = MoodLog::new();
        log.submit_mood_at("Happy", &" x".repeat(80), noon()).unwrap();

        let note = &log.history()[0].note;
        assert_eq!(note.chars().count(), MAX_NOTE_CHARS);
        assert!(note.starts_with("x x"));
    }

    #[test]
    fn test_edit_commits_verbatim() {
        let mut log = log_with(&["Sad"]);
        log.begin_edit(0).unwrap();
        log.update_edit_draft("  padded  ").unwrap();

        assert!(log.save_edit());
        assert_eq!(log.history()[0].note, "  padded  ");
        assert_eq!(log.edit_session(), None);
    }

    #[test]
    fn test_begin_edit_seeds_draft_from_note() {
        let mut log = MoodLog::new();
        log.submit_mood_at("Tired", "long day", noon()).unwrap();
        log.begin_edit(0).unwrap();

        assert_eq!(
            log.edit_session(),
            Some(EditView {
                index: 0,
                draft: "long day".to_string()
            })
        );
    }

    #[test]
    fn test_save_edit_twice_is_noop() {
        let mut log = log_with(&["Sad"]);
        log.begin_edit(0).unwrap();
        log.update_edit_draft("first").unwrap();
        assert!(log.save_edit());

        assert!(!log.save_edit());
        assert_eq!(log.history()[0].note, "first");
    }

    #[test]
    fn test_edit_draft_is_capped() {
        let mut log = log_with(&["Happy"]);
        log.begin_edit(0).unwrap();
        log.update_edit_draft(&"y".repeat(101)).unwrap();

        let session = log.edit_session().unwrap();
        assert_eq!(session.draft.chars().count(), 100);
    }

    #[test]
    fn test_cancel_edit_discards_draft() {
        let mut log = MoodLog::new();
        log.submit_mood_at("Neutral", "original", noon()).unwrap();
        log.begin_edit(0).unwrap();
        log.update_edit_draft("changed").unwrap();

        assert!(log.cancel_edit());
        assert!(!log.cancel_edit());
        assert_eq!(log.history()[0].note, "original");
        assert!(!log.save_edit());
    }

    #[test]
    fn test_begin_edit_abandons_previous_draft() {
        let mut log = log_with(&["Happy", "Sad"]);
        log.begin_edit(0).unwrap();
        log.update_edit_draft("unsaved").unwrap();
        log.begin_edit(1).unwrap();
        log.save_edit();

        assert!(log.history().iter().all(|e| e.note.is_empty()));
    }

    #[test]
    fn test_edit_out_of_range_is_rejected() {
        let mut log = log_with(&["Happy"]);

        assert_eq!(
            log.begin_edit(3),
            Err(MoodError::IndexOutOfRange { index: 3, len: 1 })
        );
        assert_eq!(log.update_edit_draft("x"), Err(MoodError::NoActiveEdit));
        assert_eq!(log.edit_session(), None);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut log = log_with(&["Happy", "Sad", "Tired"]);
        let before: Vec<EntryId> = log.history().iter().map(|e| e.id).collect();

        log.request_delete(1).unwrap();
        let removed = log.confirm_delete(1).unwrap();

        assert_eq!(removed.id, before[1]);
        let after: Vec<EntryId> = log.history().iter().map(|e| e.id).collect();
        assert_eq!(after, vec![before[0], before[2]]);
        assert_eq!(log.pending_delete(), None);
    }

    #[test]
    fn test_delete_requires_request() {
        let mut log = log_with(&["Happy", "Sad"]);

        assert_eq!(
            log.confirm_delete(0),
            Err(MoodError::DeleteNotRequested { index: 0 })
        );

        log.request_delete(1).unwrap();
        assert_eq!(
            log.confirm_delete(0),
            Err(MoodError::DeleteNotRequested { index: 0 })
        );
        assert_eq!(log.history().len(), 2);
        assert_eq!(log.pending_delete(), Some(1));
    }

    #[test]
    fn test_cancel_delete_leaves_history() {
        let mut log = log_with(&["Happy", "Sad"]);
        log.request_delete(0).unwrap();

        assert!(log.cancel_delete());
        assert_eq!(log.history().len(), 2);
        assert!(log.confirm_delete(0).is_err());
        assert_eq!(log.history().len(), 2);
    }

    #[test]
    fn test_request_delete_out_of_range() {
        let mut log = MoodLog::new();
        assert_eq!(
            log.request_delete(0),
            Err(MoodError::IndexOutOfRange { index: 0, len: 0 })
        );
        assert_eq!(log.pending_delete(), None);
    }

    #[test]
    fn test_deleting_edited_entry_ends_session() {
        let mut log = log_with(&["Happy", "Sad", "Tired"]);
        log.begin_edit(1).unwrap();
        log.request_delete(1).unwrap();
        log.confirm_delete(1).unwrap();

        assert_eq!(log.edit_session(), None);
        assert!(!log.save_edit());
    }

    #[test]
    fn test_edit_session_follows_entry_after_lower_delete() {
        let mut log = log_with(&["Happy", "Sad", "Tired"]);
        // history: [Tired, Sad, Happy]; edit Happy at index 2
        log.begin_edit(2).unwrap();
        log.update_edit_draft("still happy").unwrap();

        log.request_delete(0).unwrap();
        log.confirm_delete(0).unwrap();

        let session = log.edit_session().unwrap();
        assert_eq!(session.index, 1);
        assert!(log.save_edit());
        assert_eq!(log.history()[1].mood, MoodKind::Happy);
        assert_eq!(log.history()[1].note, "still happy");
        assert_eq!(log.history()[0].note, "");
    }

    #[test]
    fn test_edit_session_unchanged_after_higher_delete() {
        let mut log = log_with(&["Happy", "Sad", "Tired"]);
        log.begin_edit(0).unwrap();
        log.request_delete(2).unwrap();
        log.confirm_delete(2).unwrap();

        assert_eq!(log.edit_session().map(|s| s.index), Some(0));
    }

    #[test]
    fn test_eviction_ends_edit_of_evicted_entry() {
        let mut log = log_with(&["Happy", "Sad", "Neutral", "Energetic", "Tired"]);
        log.begin_edit(4).unwrap();
        log.request_delete(4).unwrap();

        log.submit_mood_at("Sad", "", noon()).unwrap();

        assert_eq!(log.edit_session(), None);
        assert_eq!(log.pending_delete(), None);
    }

    #[test]
    fn test_counts_sum_to_history_length() {
        let mut log = MoodLog::new();
        assert_eq!(log.mood_counts().total(), 0);
        for mood in ["Happy", "Sad", "Happy", "Tired", "Happy", "Neutral", "Sad"] {
            log.submit_mood_at(mood, "", noon()).unwrap();
            assert_eq!(log.mood_counts().total(), log.history().len());
        }

        let counts = log.mood_counts();
        assert_eq!(counts.get(MoodKind::Happy), 2);
        assert_eq!(counts.get(MoodKind::Sad), 1);
        assert_eq!(counts.get(MoodKind::Energetic), 0);
    }

    #[test]
    fn test_most_frequent_tie_prefers_catalog_order() {
        let log = log_with(&["Sad", "Happy"]);
        assert_eq!(log.most_frequent_mood(), Some(MoodKind::Happy));
    }

    #[test]
    fn test_most_frequent_strict_majority() {
        let log = log_with(&["Happy", "Tired", "Tired"]);
        assert_eq!(log.most_frequent_mood(), Some(MoodKind::Tired));
    }

    #[test]
    fn test_empty_state() {
        let log = MoodLog::new();
        let counts = log.mood_counts();
        assert!(counts.iter().all(|(_, n)| n == 0));
        assert_eq!(log.most_frequent_mood(), None);
    }

    #[test]
    fn test_reminder_shown_without_entry_today() {
        let now = noon();
        let mut log = MoodLog::new();
        assert!(log.show_reminder_at(now));

        log.submit_mood_at("Sad", "", now - Duration::hours(23)).unwrap();
        assert!(!log.has_entry_today_at(now));
        assert!(log.show_reminder_at(now));

        log.submit_mood_at("Happy", "", now - Duration::minutes(1)).unwrap();
        assert!(log.has_entry_today_at(now));
        assert!(!log.show_reminder_at(now));
    }

    #[test]
    fn test_dismissed_reminder_stays_hidden() {
        let now = noon();
        let mut log = MoodLog::new();
        log.dismiss_reminder();

        assert!(log.reminder_dismissed());
        assert!(!log.show_reminder_at(now));
        assert!(!log.show_reminder_at(now + Duration::days(2)));
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let now = noon();
        let mut log = log_with(&["Happy", "Happy", "Sad"]);
        log.set_draft_note("typing");
        log.begin_edit(1).unwrap();
        log.request_delete(2).unwrap();

        let snap = log.snapshot_at(now);
        assert_eq!(snap.history.len(), 3);
        assert_eq!(snap.draft_note, "typing");
        assert_eq!(snap.edit.map(|e| e.index), Some(1));
        assert_eq!(snap.pending_delete, Some(2));
        assert_eq!(snap.counts.get(MoodKind::Happy), 2);
        assert_eq!(snap.most_frequent, Some(MoodKind::Happy));
        assert!(!snap.show_reminder);
    }
}
