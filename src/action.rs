//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::MoodKind;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for time-based updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move keyboard focus to the next panel
    NextFocus,
    /// Move keyboard focus to the previous panel
    PrevFocus,
    /// Move the mood highlight right / history selection down
    NextItem,
    /// Move the mood highlight left / history selection up
    PrevItem,

    // ─────────────────────────────────────────────────────────────────────────
    // Logging a mood
    // ─────────────────────────────────────────────────────────────────────────
    /// Log a mood using the current draft note
    SelectMood(MoodKind),
    /// Log the highlighted mood
    SelectHighlightedMood,
    /// Append a character to the draft note
    DraftInput(char),
    /// Remove the last character of the draft note
    DraftBackspace,

    // ─────────────────────────────────────────────────────────────────────────
    // History
    // ─────────────────────────────────────────────────────────────────────────
    /// Start editing the note of the history entry at index
    BeginEdit(usize),
    /// Append a character to the edit draft
    EditInput(char),
    /// Remove the last character of the edit draft
    EditBackspace,
    /// Commit the edit draft
    SaveEdit,
    /// Discard the edit draft
    CancelEdit,
    /// Ask for confirmation before deleting the entry at index
    RequestDelete(usize),

    // ─────────────────────────────────────────────────────────────────────────
    // Reminder
    // ─────────────────────────────────────────────────────────────────────────
    /// Hide the "log your mood today" banner for this session
    DismissReminder,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,
    /// Confirm the current modal action
    ConfirmModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::NextFocus => write!(f, "NextFocus"),
            Action::PrevFocus => write!(f, "PrevFocus"),
            Action::NextItem => write!(f, "NextItem"),
            Action::PrevItem => write!(f, "PrevItem"),
            Action::SelectMood(mood) => write!(f, "SelectMood({})", mood),
            Action::SelectHighlightedMood => write!(f, "SelectHighlightedMood"),
            Action::DraftInput(c) => write!(f, "DraftInput('{}')", c),
            Action::DraftBackspace => write!(f, "DraftBackspace"),
            Action::BeginEdit(i) => write!(f, "BeginEdit({})", i),
            Action::EditInput(c) => write!(f, "EditInput('{}')", c),
            Action::EditBackspace => write!(f, "EditBackspace"),
            Action::SaveEdit => write!(f, "SaveEdit"),
            Action::CancelEdit => write!(f, "CancelEdit"),
            Action::RequestDelete(i) => write!(f, "RequestDelete({})", i),
            Action::DismissReminder => write!(f, "DismissReminder"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ConfirmModal => write!(f, "ConfirmModal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_display() {
        assert_eq!(Action::SelectMood(MoodKind::Sad).to_string(), "SelectMood(Sad)");
        assert_eq!(Action::DraftInput('x').to_string(), "DraftInput('x')");
        assert_eq!(Action::RequestDelete(3).to_string(), "RequestDelete(3)");
    }
}
