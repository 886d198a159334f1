//! Home component - Main application screen
//!
//! Displays the reminder banner, mood buttons, note input, statistics and
//! history. Owns focus, the mood highlight and the history selection.

use crate::action::Action;
use crate::component::Component;
use crate::components::history::draw_history;
use crate::components::palette::{mood_color, mood_text_color};
use crate::components::stats::draw_stats;
use crate::components::{calculate_main_layout, MainLayout};
use crate::model::{Focus, MoodKind, MoodLogSnapshot, MAX_NOTE_CHARS};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListState, Paragraph},
    Frame,
};

// ═══════════════════════════════════════════════════════════════════════════════
// Home Component
// ═══════════════════════════════════════════════════════════════════════════════

/// Home component for the main application view
pub struct HomeComponent {
    /// Panel receiving key input
    pub focus: Focus,

    /// Highlighted mood button (catalog index)
    pub highlighted_mood: usize,

    /// History selection state
    pub history_state: ListState,
}

impl Default for HomeComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeComponent {
    pub fn new() -> Self {
        Self {
            focus: Focus::Moods,
            highlighted_mood: 0,
            history_state: ListState::default(),
        }
    }

    pub fn highlighted(&self) -> MoodKind {
        MoodKind::from_index(self.highlighted_mood).unwrap_or(MoodKind::Happy)
    }

    /// Selected history position, if any
    pub fn selected_entry(&self) -> Option<usize> {
        self.history_state.selected()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    pub fn next_focus(&mut self, history_len: usize) {
        self.focus = self.focus.next();
        self.sync_history(history_len);
    }

    pub fn previous_focus(&mut self, history_len: usize) {
        self.focus = self.focus.previous();
        self.sync_history(history_len);
    }

    /// Move within the focused panel (wraps)
    pub fn next(&mut self, history_len: usize) {
        match self.focus {
            Focus::Moods => {
                self.highlighted_mood = (self.highlighted_mood + 1) % MoodKind::ALL.len();
            }
            Focus::History if history_len > 0 => {
                let next = self
                    .history_state
                    .selected()
                    .map(|i| (i + 1) % history_len)
                    .unwrap_or(0);
                self.history_state.select(Some(next));
            }
            _ => {}
        }
    }

    pub fn previous(&mut self, history_len: usize) {
        match self.focus {
            Focus::Moods => {
                let count = MoodKind::ALL.len();
                self.highlighted_mood = (self.highlighted_mood + count - 1) % count;
            }
            Focus::History if history_len > 0 => {
                let prev = match self.history_state.selected() {
                    Some(0) | None => history_len - 1,
                    Some(i) => i - 1,
                };
                self.history_state.select(Some(prev));
            }
            _ => {}
        }
    }

    /// Keep the history selection valid after entries were added or removed
    pub fn sync_history(&mut self, history_len: usize) {
        if history_len == 0 {
            self.history_state.select(None);
            return;
        }
        let selected = self.history_state.selected().unwrap_or(0);
        self.history_state.select(Some(selected.min(history_len - 1)));
    }

    /// A new entry went in at the top; keep the selection on the same entry
    pub fn entry_logged(&mut self, history_len: usize) {
        if let Some(selected) = self.history_state.selected() {
            self.history_state.select(Some(selected + 1));
        }
        self.sync_history(history_len);
    }

    /// Point the history selection at `index`
    pub fn select_entry(&mut self, index: usize) {
        self.history_state.select(Some(index));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Key handling per focus
    // ─────────────────────────────────────────────────────────────────────────

    fn handle_note_key_event(&self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Tab => Some(Action::NextFocus),
            KeyCode::BackTab | KeyCode::Esc => Some(Action::PrevFocus),
            KeyCode::Enter => Some(Action::SelectHighlightedMood),
            KeyCode::Backspace => Some(Action::DraftBackspace),
            KeyCode::Char(c) => Some(Action::DraftInput(c)),
            _ => None,
        }
    }

    fn handle_panel_key_event(&self, key: KeyEvent) -> Option<Action> {
        // Shared shortcuts outside text input
        match key.code {
            KeyCode::Tab => return Some(Action::NextFocus),
            KeyCode::BackTab => return Some(Action::PrevFocus),
            KeyCode::Char('q') => return Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => return Some(Action::OpenHelp),
            KeyCode::Char('x') => return Some(Action::DismissReminder),
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                return MoodKind::from_index(index).map(Action::SelectMood);
            }
            _ => {}
        }

        match self.focus {
            Focus::Moods => match key.code {
                KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevItem),
                KeyCode::Right | KeyCode::Char('l') => Some(Action::NextItem),
                KeyCode::Enter | KeyCode::Char(' ') => Some(Action::SelectHighlightedMood),
                KeyCode::Char('n') => Some(Action::NextFocus),
                _ => None,
            },
            Focus::History => match key.code {
                KeyCode::Up | KeyCode::Char('k') => Some(Action::PrevItem),
                KeyCode::Down | KeyCode::Char('j') => Some(Action::NextItem),
                KeyCode::Enter | KeyCode::Char('e') => {
                    self.selected_entry().map(Action::BeginEdit)
                }
                KeyCode::Delete | KeyCode::Char('d') => {
                    self.selected_entry().map(Action::RequestDelete)
                }
                _ => None,
            },
            Focus::Note => None,
        }
    }
}

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(None);
        }
        let action = match self.focus {
            Focus::Note => self.handle_note_key_event(key),
            _ => self.handle_panel_key_event(key),
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_home_screen which takes the snapshot
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Draw the home screen
pub fn draw_home_screen(
    frame: &mut Frame,
    area: Rect,
    home: &mut HomeComponent,
    snapshot: &MoodLogSnapshot,
) -> Result<()> {
    let layout: MainLayout = calculate_main_layout(area, snapshot.show_reminder);

    if let Some(reminder_area) = layout.reminder {
        render_reminder(frame, reminder_area);
    }
    render_mood_buttons(frame, layout.moods, home);
    render_note_input(frame, layout.note, home, &snapshot.draft_note);
    draw_stats(frame, layout.stats, &snapshot.counts, snapshot.most_frequent);
    draw_history(
        frame,
        layout.history,
        &snapshot.history,
        snapshot.edit.as_ref(),
        &mut home.history_state,
        home.focus == Focus::History,
    );
    render_help_bar(frame, layout.help, home, snapshot);

    Ok(())
}

fn render_reminder(frame: &mut Frame, area: Rect) {
    let banner = Paragraph::new(Line::from(vec![
        Span::styled(
            "Don't forget to log your mood today!",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("   x ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Span::styled("Dismiss", Style::default().fg(Color::Gray)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(banner, area);
}

fn render_mood_buttons(frame: &mut Frame, area: Rect, home: &HomeComponent) {
    let focused = home.focus == Focus::Moods;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { Color::Cyan } else { Color::DarkGray }))
        .title(" How are you feeling? ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(MoodKind::ALL.map(|_| Constraint::Ratio(1, MoodKind::ALL.len() as u32)))
        .split(inner);

    for (i, (mood, column)) in MoodKind::ALL.iter().zip(columns.iter()).enumerate() {
        let mut style = Style::default()
            .bg(mood_color(*mood))
            .fg(mood_text_color(*mood))
            .add_modifier(Modifier::BOLD);
        let label = if focused && i == home.highlighted_mood {
            style = style.add_modifier(Modifier::REVERSED);
            format!("▶ {} {}", i + 1, mood.name())
        } else {
            format!("{} {}", i + 1, mood.name())
        };

        let button = Paragraph::new(vec![Line::from(""), Line::from(Span::styled(label, style))])
            .style(Style::default().bg(mood_color(*mood)))
            .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(button, column.inner(ratatui::layout::Margin {
            vertical: 0,
            horizontal: 1,
        }));
    }
}

fn render_note_input(frame: &mut Frame, area: Rect, home: &HomeComponent, draft: &str) {
    let focused = home.focus == Focus::Note;
    let content = if draft.is_empty() && !focused {
        Line::from(Span::styled(
            "How are you feeling?",
            Style::default().fg(Color::DarkGray),
        ))
    } else if focused {
        Line::from(Span::styled(format!("{}_", draft), Style::default().fg(Color::White)))
    } else {
        Line::from(draft.to_string())
    };

    let title = format!(
        " Add a note (optional) {}/{} ",
        draft.chars().count(),
        MAX_NOTE_CHARS
    );
    let input = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if focused { Color::Cyan } else { Color::DarkGray }))
            .title(title),
    );
    frame.render_widget(input, area);
}

fn render_help_bar(
    frame: &mut Frame,
    area: Rect,
    home: &HomeComponent,
    snapshot: &MoodLogSnapshot,
) {
    let key = |k: &'static str, color: Color| {
        Span::styled(k, Style::default().fg(color).add_modifier(Modifier::BOLD))
    };

    let help_spans = if snapshot.edit.is_some() && home.focus == Focus::History {
        vec![
            key(" Enter ", Color::Green),
            Span::raw("Save  "),
            key(" Esc ", Color::Yellow),
            Span::raw("Cancel"),
        ]
    } else {
        match home.focus {
            Focus::Moods => vec![
                key(" ←/→ ", Color::Cyan),
                Span::raw("Choose  "),
                key(" Enter ", Color::Green),
                Span::raw("Log mood  "),
                key(" 1-5 ", Color::Green),
                Span::raw("Quick log  "),
                key(" Tab ", Color::Cyan),
                Span::raw("Next panel  "),
                key(" ? ", Color::Cyan),
                Span::raw("Help  "),
                key(" q ", Color::Yellow),
                Span::raw("Quit"),
            ],
            Focus::Note => vec![
                key(" Enter ", Color::Green),
                Span::styled(
                    format!("Log {} with note  ", home.highlighted().name()),
                    Style::default(),
                ),
                key(" Esc ", Color::Yellow),
                Span::raw("Back  "),
                key(" Tab ", Color::Cyan),
                Span::raw("Next panel"),
            ],
            Focus::History => vec![
                key(" ↑/↓ ", Color::Cyan),
                Span::raw("Select  "),
                key(" e ", Color::Green),
                Span::raw("Edit note  "),
                key(" d ", Color::Red),
                Span::raw("Delete  "),
                key(" Tab ", Color::Cyan),
                Span::raw("Next panel  "),
                key(" q ", Color::Yellow),
                Span::raw("Quit"),
            ],
        }
    };

    let help = Paragraph::new(Line::from(help_spans))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}
