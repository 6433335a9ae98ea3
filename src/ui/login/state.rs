//! Login screen state management
//!
//! Owns the widget state plus the view-only bits: field focus and the
//! activity log.

use crate::consts::widget_consts::MAX_ACTIVITY_LOGS;
use crate::events::Event;
use crate::ui::app::UIConfig;
use crate::widget::{Action, AuthState, Clock, FailureSource, Outcome, apply};

use std::collections::VecDeque;
use std::fmt;

/// Which input has keyboard focus.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Focus {
    Email,
    Password,
    FailureToggle,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Email => Focus::Password,
            Focus::Password => Focus::FailureToggle,
            Focus::FailureToggle => Focus::Email,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Email => Focus::FailureToggle,
            Focus::Password => Focus::Email,
            Focus::FailureToggle => Focus::Password,
        }
    }
}

pub struct LoginScreenState {
    /// The login widget state.
    pub auth: AuthState,
    /// Currently focused input.
    pub focus: Focus,
    /// Activity logs for display
    pub activity_logs: VecDeque<Event>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    clock: Box<dyn Clock>,
    failure: Box<dyn FailureSource>,
}

impl fmt::Debug for LoginScreenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginScreenState")
            .field("auth", &self.auth)
            .field("focus", &self.focus)
            .field("activity_logs", &self.activity_logs.len())
            .finish_non_exhaustive()
    }
}

impl LoginScreenState {
    /// Creates a new instance of the login screen state.
    pub fn new(
        ui_config: &UIConfig,
        clock: Box<dyn Clock>,
        failure: Box<dyn FailureSource>,
    ) -> Self {
        Self {
            auth: AuthState::new(ui_config.failure_injection),
            focus: Focus::Email,
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            clock,
            failure,
        }
    }

    /// Run one action through the widget and record the outcome.
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        let current = std::mem::take(&mut self.auth);
        let (next, outcome) = apply(current, action, self.clock.as_ref(), self.failure.as_mut());
        self.auth = next;

        match outcome {
            Outcome::LoggedOut | Outcome::Reset | Outcome::Unlocked => self.focus = Focus::Email,
            Outcome::WrongCredentials { .. } => self.focus = Focus::Password,
            _ => {}
        }

        if outcome != Outcome::FieldEdited {
            let event = Event::from_outcome(outcome, &self.auth, self.clock.now());
            self.add_to_activity_log(event);
        }
        outcome
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }
}
