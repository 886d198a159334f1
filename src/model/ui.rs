//! UI state - presentation state separate from domain data

/// Panel that currently receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Moods,
    Note,
    History,
}

impl Focus {
    pub fn next(&self) -> Focus {
        match self {
            Focus::Moods => Focus::Note,
            Focus::Note => Focus::History,
            Focus::History => Focus::Moods,
        }
    }

    pub fn previous(&self) -> Focus {
        match self {
            Focus::Moods => Focus::History,
            Focus::Note => Focus::Moods,
            Focus::History => Focus::Note,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle_round_trips() {
        for focus in [Focus::Moods, Focus::Note, Focus::History] {
            assert_eq!(focus.next().previous(), focus);
            assert_eq!(focus.next().next().next(), focus);
        }
    }
}
