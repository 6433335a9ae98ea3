//! Event System
//!
//! Timestamped records of widget outcomes, for the activity log and headless output

use crate::consts::widget_consts::EVENT_TIMESTAMP_FORMAT;
use crate::logging::{LogLevel, should_log_with_env};
use crate::widget::{AuthState, Outcome};
use chrono::{DateTime, Local};
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Lockout,
    Recovery,
    StateChange,
}

impl EventType {
    fn from_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::LoggedIn => EventType::Success,
            Outcome::WrongCredentials { .. }
            | Outcome::ServerError
            | Outcome::RejectedWhileLocked => EventType::Error,
            Outcome::LockedOut => EventType::Lockout,
            Outcome::Unlocked => EventType::Recovery,
            Outcome::LoggedOut
            | Outcome::Reset
            | Outcome::FieldEdited
            | Outcome::FailureModeChanged(_)
            | Outcome::Ignored => EventType::StateChange,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub outcome: Outcome,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    /// Record an outcome against the state it produced.
    pub fn from_outcome(outcome: Outcome, state: &AuthState, now: DateTime<Local>) -> Self {
        Self {
            outcome,
            msg: describe(outcome, state),
            timestamp: now.format(EVENT_TIMESTAMP_FORMAT).to_string(),
            event_type: EventType::from_outcome(outcome),
            log_level: outcome.log_level(),
        }
    }

    pub fn should_display(&self) -> bool {
        // Always show successes, lockouts and recoveries
        if matches!(
            self.event_type,
            EventType::Success | EventType::Lockout | EventType::Recovery
        ) {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

/// Human-readable line for an outcome. Uses the status message when the
/// transition set one.
fn describe(outcome: Outcome, state: &AuthState) -> String {
    match outcome {
        Outcome::LoggedIn
        | Outcome::WrongCredentials { .. }
        | Outcome::LockedOut
        | Outcome::RejectedWhileLocked
        | Outcome::ServerError
        | Outcome::Unlocked => state.message.clone(),
        Outcome::LoggedOut => "Logged out.".to_string(),
        Outcome::Reset => "Metrics and session reset.".to_string(),
        Outcome::FieldEdited => "Input updated.".to_string(),
        Outcome::FailureModeChanged(true) => "Failure injection enabled.".to_string(),
        Outcome::FailureModeChanged(false) => "Failure injection disabled.".to_string(),
        Outcome::Ignored => "Action not available right now.".to_string(),
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
