//! Yes/no confirmation dialog, used for quitting and deleting entries

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Confirmation dialog
pub struct ConfirmDialog {
    title: &'static str,
    question: &'static str,
    confirm_label: &'static str,
    accent: Color,
    /// Extra line under the question, e.g. the entry about to be deleted
    detail: Option<String>,
}

impl ConfirmDialog {
    pub fn quit() -> Self {
        Self {
            title: " Quit? ",
            question: "Are you sure you want to quit?",
            confirm_label: "Yes, quit  ",
            accent: Color::Yellow,
            detail: None,
        }
    }

    pub fn delete() -> Self {
        Self {
            title: " Delete Entry ",
            question: "Are you sure you want to delete this mood entry?",
            confirm_label: "Delete  ",
            accent: Color::Red,
            detail: None,
        }
    }

    pub fn set_detail(&mut self, detail: Option<String>) {
        self.detail = detail;
    }
}

impl Component for ConfirmDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(Action::ConfirmModal),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 56, if self.detail.is_some() { 9 } else { 7 });

        frame.render_widget(Clear, popup_area);

        let mut content = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.question,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        if let Some(detail) = &self.detail {
            content.push(Line::from(""));
            content.push(Line::from(Span::styled(
                detail.clone(),
                Style::default().fg(Color::Gray),
            )));
        }
        content.push(Line::from(""));
        content.push(Line::from(vec![
            Span::styled(
                " y ",
                Style::default()
                    .fg(self.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(self.confirm_label),
            Span::styled(
                " n/Esc ",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::raw("Cancel"),
        ]));

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.accent))
                    .title(self.title)
                    .title_style(
                        Style::default()
                            .fg(self.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .alignment(ratatui::layout::Alignment::Center);

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_confirm_and_cancel_keys() {
        let mut dialog = ConfirmDialog::delete();
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(
            dialog.handle_key_event(press(KeyCode::Char('y'))).unwrap(),
            Some(Action::ConfirmModal)
        );
        assert_eq!(
            dialog.handle_key_event(press(KeyCode::Esc)).unwrap(),
            Some(Action::CloseModal)
        );
        assert_eq!(dialog.handle_key_event(press(KeyCode::Char('d'))).unwrap(), None);
    }
}
