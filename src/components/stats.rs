//! Mood statistics panel

use crate::components::palette::mood_color;
use crate::model::mood::MOOD_COUNT;
use crate::model::{MoodCounts, MoodKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Label shown when no mood has been logged yet
pub fn most_frequent_label(most_frequent: Option<MoodKind>) -> &'static str {
    most_frequent.map(|m| m.name()).unwrap_or("N/A")
}

pub fn draw_stats(
    frame: &mut Frame,
    area: Rect,
    counts: &MoodCounts,
    most_frequent: Option<MoodKind>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" Mood Statistics ({} logged) ", counts.total()))
        .title_style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, MOOD_COUNT as u32); MOOD_COUNT])
        .split(rows[0]);

    for ((mood, count), column) in counts.iter().zip(columns.iter()) {
        let cell = Paragraph::new(vec![
            Line::from(vec![
                Span::styled("● ", Style::default().fg(mood_color(mood))),
                Span::raw(mood.name()),
            ]),
            Line::from(Span::styled(
                count.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(cell, *column);
    }

    let summary = Paragraph::new(Line::from(vec![
        Span::styled("Most frequent mood: ", Style::default().fg(Color::Gray)),
        Span::styled(
            most_frequent_label(most_frequent),
            Style::default()
                .fg(most_frequent.map(mood_color).unwrap_or(Color::White))
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    frame.render_widget(summary, rows[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_frequent_label() {
        assert_eq!(most_frequent_label(None), "N/A");
        assert_eq!(most_frequent_label(Some(MoodKind::Tired)), "Tired");
    }
}
