//! Error types for mood log operations

use thiserror::Error;

/// Precondition failures raised by [`crate::model::MoodLog`]
///
/// None of these are fatal. The app logs them and leaves state untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoodError {
    /// Mood name is not part of the fixed catalog
    #[error("Unknown mood: {0}")]
    InvalidMoodKind(String),

    /// History position does not refer to an entry
    #[error("Index {index} out of range for history of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Edit operation issued while no entry is being edited
    #[error("No entry is being edited")]
    NoActiveEdit,

    /// Delete confirmed without a matching delete request
    #[error("Delete of entry {index} was not requested")]
    DeleteNotRequested { index: usize },
}

pub type MoodResult<T> = Result<T, MoodError>;
