//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout areas, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainLayout {
    pub reminder: Option<Rect>,
    pub moods: Rect,
    pub note: Rect,
    pub stats: Rect,
    pub history: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate main screen layout
pub fn calculate_main_layout(area: Rect, show_reminder: bool) -> MainLayout {
    let mut constraints = Vec::with_capacity(6);
    if show_reminder {
        constraints.push(Constraint::Length(3));
    }
    constraints.extend([
        Constraint::Length(5),
        Constraint::Length(3),
        Constraint::Length(5),
        Constraint::Min(0),
        Constraint::Length(3),
    ]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let (reminder, rest) = if show_reminder {
        (Some(chunks[0]), &chunks[1..])
    } else {
        (None, &chunks[..])
    };

    MainLayout {
        reminder,
        moods: rest[0],
        note: rest[1],
        stats: rest[2],
        history: rest[3],
        help: rest[4],
    }
}
