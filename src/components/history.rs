//! Mood history panel
//!
//! Lists the most recent entries with their notes. The entry being edited
//! shows its draft with a cursor instead of the committed note.

use crate::components::palette::mood_color;
use crate::model::{EditView, MoodEntry, HISTORY_CAPACITY};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

/// Shorten `text` to at most `max_width` terminal columns, ending in `…` when cut
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

pub fn draw_history(
    frame: &mut Frame,
    area: Rect,
    history: &[MoodEntry],
    edit: Option<&EditView>,
    list_state: &mut ListState,
    focused: bool,
) {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" Mood History ({}/{}) ", history.len(), HISTORY_CAPACITY))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    if history.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No moods recorded yet.",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    // Room for the note after borders and indent
    let note_width = area.width.saturating_sub(8) as usize;

    let items: Vec<ListItem> = history
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let header = Line::from(vec![
                Span::styled(
                    format!("{:<10}", entry.mood.name()),
                    Style::default()
                        .fg(mood_color(entry.mood))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    entry.formatted_timestamp(),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);

            let body = match edit.filter(|e| e.index == i) {
                Some(view) => Line::from(vec![
                    Span::styled("  edit> ", Style::default().fg(Color::Yellow)),
                    Span::styled(
                        format!("{}_", view.draft),
                        Style::default().fg(Color::White).bg(Color::DarkGray),
                    ),
                ]),
                None if entry.note.is_empty() => Line::from(""),
                None => Line::from(vec![
                    Span::styled("  Note: ", Style::default().fg(Color::Gray)),
                    Span::raw(truncate_to_width(&entry.note, note_width)),
                ]),
            };

            ListItem::new(vec![header, body])
        })
        .collect();

    let highlight = if focused {
        Style::default().bg(Color::Blue).fg(Color::White)
    } else {
        Style::default()
    };

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight)
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, list_state);
}
