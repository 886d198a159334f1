//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! All domain changes are routed into the mood log; App itself holds no
//! mood data.

use crate::action::Action;
use crate::component::Component;
use crate::components::{draw_home_screen, ConfirmDialog, HelpDialog, HomeComponent};
use crate::config::Config;
use crate::error::MoodResult;
use crate::model::modal::{Modal, ModalStack};
use crate::model::{Focus, MoodLog};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Domain state
    pub mood_log: MoodLog,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Ask before quitting with `q`
    pub confirm_quit: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub home: HomeComponent,
    pub quit_dialog: ConfirmDialog,
    pub delete_dialog: ConfirmDialog,
    pub help_dialog: HelpDialog,
}

/// Log an intent the mood log refused; the UI carries on unchanged
fn accept<T>(result: MoodResult<T>, action: &Action) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::debug!(%action, %error, "intent rejected");
            None
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    pub fn new(config: &Config) -> App {
        App {
            mood_log: MoodLog::new(),
            modals: ModalStack::new(),
            should_quit: false,
            confirm_quit: config.confirm_quit,
            home: HomeComponent::new(),
            quit_dialog: ConfirmDialog::quit(),
            delete_dialog: ConfirmDialog::delete(),
            help_dialog: HelpDialog::default(),
        }
    }

    fn history_len(&self) -> usize {
        self.mood_log.history().len()
    }

    fn is_editing(&self) -> bool {
        self.home.focus == Focus::History && self.mood_log.edit_session().is_some()
    }

    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::DeleteConfirm { .. } => self.delete_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    fn handle_edit_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Enter => Some(Action::SaveEdit),
            KeyCode::Esc => Some(Action::CancelEdit),
            KeyCode::Backspace => Some(Action::EditBackspace),
            KeyCode::Char(c) => Some(Action::EditInput(c)),
            _ => None,
        };
        Ok(action)
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
            Modal::DeleteConfirm { .. } => self.delete_dialog.draw(frame, area)?,
            Modal::Help => self.help_dialog.draw(frame, area)?,
        }
        Ok(())
    }

    fn edit_draft_with(&mut self, action: &Action, change: impl FnOnce(&mut String)) {
        let Some(view) = self.mood_log.edit_session() else {
            tracing::debug!(%action, "no entry being edited");
            return;
        };
        let mut draft = view.draft;
        change(&mut draft);
        accept(self.mood_log.update_edit_draft(&draft), action);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::ForceQuit));
        }

        if let Some(modal) = self.modals.top().cloned() {
            self.handle_modal_key_event(&modal, key)
        } else if self.is_editing() {
            self.handle_edit_key_event(key)
        } else {
            self.home.handle_key_event(key)
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match &action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick | Action::Resize(_, _) => {}
            Action::ForceQuit => {
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Navigation (delegate to HomeComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::NextFocus => self.home.next_focus(self.history_len()),
            Action::PrevFocus => self.home.previous_focus(self.history_len()),
            Action::NextItem => self.home.next(self.history_len()),
            Action::PrevItem => self.home.previous(self.history_len()),

            // ─────────────────────────────────────────────────────────────────
            // Logging a mood
            // ─────────────────────────────────────────────────────────────────
            Action::SelectMood(mood) => {
                if accept(self.mood_log.select_mood(*mood), &action).is_some() {
                    self.home.highlighted_mood = mood.index();
                    self.home.entry_logged(self.history_len());
                }
            }
            Action::SelectHighlightedMood => {
                return Ok(Some(Action::SelectMood(self.home.highlighted())));
            }
            Action::DraftInput(c) => {
                let mut draft = self.mood_log.draft_note().to_string();
                draft.push(*c);
                self.mood_log.set_draft_note(&draft);
            }
            Action::DraftBackspace => {
                let mut draft = self.mood_log.draft_note().to_string();
                draft.pop();
                self.mood_log.set_draft_note(&draft);
            }

            // ─────────────────────────────────────────────────────────────────
            // History
            // ─────────────────────────────────────────────────────────────────
            Action::BeginEdit(index) => {
                if accept(self.mood_log.begin_edit(*index), &action).is_some() {
                    self.home.focus = Focus::History;
                    self.home.select_entry(*index);
                }
            }
            Action::EditInput(c) => {
                let c = *c;
                self.edit_draft_with(&action, |draft| draft.push(c));
            }
            Action::EditBackspace => {
                self.edit_draft_with(&action, |draft| {
                    draft.pop();
                });
            }
            Action::SaveEdit => {
                self.mood_log.save_edit();
            }
            Action::CancelEdit => {
                self.mood_log.cancel_edit();
            }
            Action::RequestDelete(index) => {
                if accept(self.mood_log.request_delete(*index), &action).is_some() {
                    let detail = self
                        .mood_log
                        .history()
                        .get(*index)
                        .map(|e| format!("{} · {}", e.mood, e.formatted_timestamp()));
                    self.delete_dialog.set_detail(detail);
                    self.modals.push(Modal::DeleteConfirm { index: *index });
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Reminder
            // ─────────────────────────────────────────────────────────────────
            Action::DismissReminder => {
                if !self.mood_log.reminder_dismissed() && !self.mood_log.has_entry_today() {
                    tracing::info!("reminder dismissed");
                    self.mood_log.dismiss_reminder();
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                if self.confirm_quit {
                    self.modals.push(Modal::QuitConfirm);
                } else {
                    self.should_quit = true;
                }
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::CloseModal => {
                if matches!(self.modals.top(), Some(Modal::DeleteConfirm { .. })) {
                    self.mood_log.cancel_delete();
                }
                self.modals.pop();
            }
            Action::ConfirmModal => {
                if let Some(modal) = self.modals.pop() {
                    match modal {
                        Modal::QuitConfirm => {
                            self.should_quit = true;
                        }
                        Modal::DeleteConfirm { index } => {
                            accept(self.mood_log.confirm_delete(index), &action);
                            self.home.sync_history(self.history_len());
                        }
                        Modal::Help => {}
                    }
                }
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let snapshot = self.mood_log.snapshot();
        draw_home_screen(frame, area, &mut self.home, &snapshot)?;

        if let Some(modal) = self.modals.top().cloned() {
            self.draw_modal(frame, area, &modal)?;
        }
        Ok(())
    }
}
