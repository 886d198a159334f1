//! Fixed mood catalog

use crate::error::{MoodError, MoodResult};
use std::fmt;

/// Display data for a single mood
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodDefinition {
    pub name: &'static str,
    /// Hex colour token, e.g. `#4CAF50`
    pub color: &'static str,
}

/// The five selectable moods, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoodKind {
    Happy,
    Neutral,
    Sad,
    Energetic,
    Tired,
}

/// Number of moods in the catalog
pub const MOOD_COUNT: usize = 5;

const CATALOG: [MoodDefinition; MOOD_COUNT] = [
    MoodDefinition {
        name: "Happy",
        color: "#4CAF50",
    },
    MoodDefinition {
        name: "Neutral",
        color: "#9E9E9E",
    },
    MoodDefinition {
        name: "Sad",
        color: "#2196F3",
    },
    MoodDefinition {
        name: "Energetic",
        color: "#FFEB3B",
    },
    MoodDefinition {
        name: "Tired",
        color: "#795548",
    },
];

impl MoodKind {
    /// All moods in catalog order
    pub const ALL: [MoodKind; MOOD_COUNT] = [
        MoodKind::Happy,
        MoodKind::Neutral,
        MoodKind::Sad,
        MoodKind::Energetic,
        MoodKind::Tired,
    ];

    /// Position of this mood in the catalog
    pub fn index(&self) -> usize {
        match self {
            MoodKind::Happy => 0,
            MoodKind::Neutral => 1,
            MoodKind::Sad => 2,
            MoodKind::Energetic => 3,
            MoodKind::Tired => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<MoodKind> {
        Self::ALL.get(index).copied()
    }

    pub fn definition(&self) -> &'static MoodDefinition {
        &CATALOG[self.index()]
    }

    pub fn name(&self) -> &'static str {
        self.definition().name
    }

    pub fn color(&self) -> &'static str {
        self.definition().color
    }

    /// Resolve a catalog name (exact match)
    pub fn from_name(name: &str) -> MoodResult<MoodKind> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| MoodError::InvalidMoodKind(name.to_string()))
    }
}

impl fmt::Display for MoodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
