//! Login screen key handling
//!
//! Maps key presses to widget actions

use super::state::{Focus, LoginScreenState};
use crate::widget::{Action, Outcome};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

impl LoginScreenState {
    /// Handle a key press. Returns the outcome when the key triggered an action.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Outcome> {
        let action = self.action_for_key(key)?;
        Some(self.dispatch(action))
    }

    fn action_for_key(&mut self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.control_action(key.code);
        }

        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                None
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                None
            }
            KeyCode::Enter => self.enter_action(),
            KeyCode::Char(' ') if self.focus == Focus::FailureToggle => {
                Some(Action::SetFailureMode(!self.auth.failure_mode_enabled))
            }
            KeyCode::Char(c) => self.edit_focused(|value| value.push(c)),
            KeyCode::Backspace => self.edit_focused(|value| {
                value.pop();
            }),
            _ => None,
        }
    }

    fn control_action(&self, code: KeyCode) -> Option<Action> {
        match code {
            // Unlock is only offered while locked
            KeyCode::Char('u') if self.auth.is_locked => Some(Action::Unlock),
            // Logout is only offered while logged in
            KeyCode::Char('o') if self.auth.is_logged_in => Some(Action::Logout),
            KeyCode::Char('r') => Some(Action::Reset),
            KeyCode::Char('f') => Some(Action::SetFailureMode(!self.auth.failure_mode_enabled)),
            _ => None,
        }
    }

    fn enter_action(&mut self) -> Option<Action> {
        if self.auth.is_logged_in {
            return None;
        }
        match self.focus {
            Focus::Email => {
                self.focus = Focus::Password;
                None
            }
            // The login button is disabled while locked
            Focus::Password if !self.auth.is_locked => Some(Action::Login),
            Focus::Password => None,
            Focus::FailureToggle => Some(Action::SetFailureMode(!self.auth.failure_mode_enabled)),
        }
    }

    fn edit_focused(&self, edit: impl FnOnce(&mut String)) -> Option<Action> {
        if !self.auth.accepts_input() {
            return None;
        }
        match self.focus {
            Focus::Email => {
                let mut email = self.auth.email.clone();
                edit(&mut email);
                Some(Action::SetEmail(email))
            }
            Focus::Password => {
                let mut password = self.auth.password.clone();
                edit(&mut password);
                Some(Action::SetPassword(password))
            }
            Focus::FailureToggle => None,
        }
    }
}
