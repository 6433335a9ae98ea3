//! Login widget state
//!
//! One explicit record owns everything the login view shows. It is created
//! with defaults when the view starts and only changes through the
//! transitions in [`super::transitions`].

use super::metrics::AttemptMetrics;
use crate::consts::widget_consts::MAX_ATTEMPTS;
use chrono::{DateTime, Local, TimeDelta};

/// Session status derived from the state flags.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum SessionStatus {
    LoggedOut,
    LoggedIn,
    Locked,
}

/// Visual tone of the status message.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MessageTone {
    /// Logged in.
    Success,
    /// Account locked.
    Locked,
    /// Anything else: warnings, wrong credentials, server errors.
    Warning,
}

/// The end of a lockout, by unlock or by a later successful login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recovery {
    /// When the lockout ended.
    pub at: DateTime<Local>,
    /// How long the account stayed locked.
    pub locked_for: TimeDelta,
}

impl Recovery {
    /// Lock duration in seconds with one decimal, e.g. `"12.5"`.
    pub fn format_locked_for(&self) -> String {
        let secs = self.locked_for.num_milliseconds() as f64 / 1000.0;
        format!("{:.1}", secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthState {
    /// Current email input.
    pub email: String,
    /// Current password input.
    pub password: String,
    /// Consecutive failed attempts since the last success or unlock.
    pub attempts: u32,
    pub is_locked: bool,
    pub is_logged_in: bool,
    /// Last user-facing status string. Empty means nothing to show.
    pub message: String,
    pub metrics: AttemptMetrics,
    /// Whether login attempts may hit a simulated server error.
    pub failure_mode_enabled: bool,
    /// Set when the account locks, cleared on unlock or successful login.
    pub locked_at: Option<DateTime<Local>>,
    /// Set when leaving a lock.
    pub last_recovery: Option<Recovery>,
}

impl AuthState {
    /// Fresh state with failure injection set as requested.
    pub fn new(failure_mode_enabled: bool) -> Self {
        Self {
            failure_mode_enabled,
            ..Self::default()
        }
    }

    pub fn status(&self) -> SessionStatus {
        if self.is_locked {
            SessionStatus::Locked
        } else if self.is_logged_in {
            SessionStatus::LoggedIn
        } else {
            SessionStatus::LoggedOut
        }
    }

    pub fn message_tone(&self) -> MessageTone {
        if self.is_logged_in {
            MessageTone::Success
        } else if self.is_locked {
            MessageTone::Locked
        } else {
            MessageTone::Warning
        }
    }

    /// Attempts left before the account locks.
    pub fn remaining_attempts(&self) -> u32 {
        MAX_ATTEMPTS.saturating_sub(self.attempts)
    }

    /// Inputs are disabled while locked and hidden while logged in.
    pub fn accepts_input(&self) -> bool {
        !self.is_locked && !self.is_logged_in
    }

    #[allow(unused)]
    pub fn last_recovery_timestamp(&self) -> Option<DateTime<Local>> {
        self.last_recovery.map(|r| r.at)
    }
}
