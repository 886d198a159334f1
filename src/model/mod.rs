//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `MoodLog` - Domain state (history, drafts, edit session, reminder)
//! - `Focus` - Presentation state (which panel receives keys)
//! - `ModalStack` - Modal overlay management

pub mod entry;
pub mod modal;
pub mod mood;
pub mod mood_log;
pub mod ui;

// Re-export commonly used types
pub use entry::{MoodEntry, MAX_NOTE_CHARS};
pub use mood::MoodKind;
pub use mood_log::{EditView, MoodCounts, MoodLog, MoodLogSnapshot, HISTORY_CAPACITY};
pub use ui::Focus;
