//! Login widget transitions
//!
//! Every user action is a pure function from the current [`AuthState`] to the
//! next one, paired with an [`Outcome`] describing what happened. Time and
//! randomness come in through [`Clock`] and [`FailureSource`].

use super::clock::Clock;
use super::random::FailureSource;
use super::state::{AuthState, Recovery};
use crate::consts::widget_consts::{
    CORRECT_EMAIL, CORRECT_PASSWORD, FAILURE_PROBABILITY, MAX_ATTEMPTS,
};
use crate::logging::LogLevel;
use chrono::{DateTime, Local};

pub const MSG_LOGIN_SUCCESS: &str = "Login successful! Welcome!";
pub const MSG_LOCKED_REJECT: &str = "Account is locked! Click \"Unlock Account\" to try again.";
pub const MSG_SERVER_ERROR: &str = "Server error! Please try again.";
pub const MSG_LOCKED_OUT: &str = "Account locked! Too many failed attempts.";
pub const MSG_UNLOCKED: &str = "Account unlocked. You can try again!";

/// User actions on the login widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetEmail(String),
    SetPassword(String),
    SetFailureMode(bool),
    Login,
    Unlock,
    Logout,
    Reset,
}

/// What a transition did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Outcome {
    LoggedIn,
    WrongCredentials { remaining: u32 },
    LockedOut,
    RejectedWhileLocked,
    ServerError,
    Unlocked,
    LoggedOut,
    Reset,
    FieldEdited,
    FailureModeChanged(bool),
    /// The action does not apply in the current state.
    Ignored,
}

impl Outcome {
    pub fn log_level(&self) -> LogLevel {
        match self {
            Outcome::LockedOut | Outcome::ServerError | Outcome::RejectedWhileLocked => {
                LogLevel::Warn
            }
            Outcome::LoggedIn
            | Outcome::WrongCredentials { .. }
            | Outcome::Unlocked
            | Outcome::LoggedOut
            | Outcome::Reset
            | Outcome::FailureModeChanged(_) => LogLevel::Info,
            Outcome::Ignored => LogLevel::Debug,
            Outcome::FieldEdited => LogLevel::Trace,
        }
    }
}

/// Apply one action to the state.
pub fn apply(
    state: AuthState,
    action: Action,
    clock: &dyn Clock,
    failure: &mut dyn FailureSource,
) -> (AuthState, Outcome) {
    let (next, outcome) = match action {
        Action::SetEmail(email) => set_email(state, email),
        Action::SetPassword(password) => set_password(state, password),
        Action::SetFailureMode(enabled) => set_failure_mode(state, enabled),
        Action::Login => login(state, clock, failure),
        Action::Unlock => unlock(state, clock),
        Action::Logout => logout(state),
        Action::Reset => reset(state),
    };
    log::log!(
        log::Level::from(outcome.log_level()),
        "{} -> {}",
        outcome,
        next.status()
    );
    (next, outcome)
}

pub fn set_email(mut state: AuthState, email: String) -> (AuthState, Outcome) {
    if !state.accepts_input() {
        return (state, Outcome::Ignored);
    }
    state.email = email;
    (state, Outcome::FieldEdited)
}

pub fn set_password(mut state: AuthState, password: String) -> (AuthState, Outcome) {
    if !state.accepts_input() {
        return (state, Outcome::Ignored);
    }
    state.password = password;
    (state, Outcome::FieldEdited)
}

pub fn set_failure_mode(mut state: AuthState, enabled: bool) -> (AuthState, Outcome) {
    state.failure_mode_enabled = enabled;
    (state, Outcome::FailureModeChanged(enabled))
}

/// Evaluate a login attempt with the current field values.
///
/// Only offered while logged out; a logged-in session is left untouched.
pub fn login(
    mut state: AuthState,
    clock: &dyn Clock,
    failure: &mut dyn FailureSource,
) -> (AuthState, Outcome) {
    if state.is_logged_in {
        return (state, Outcome::Ignored);
    }

    if state.is_locked {
        state.message = MSG_LOCKED_REJECT.to_string();
        return (state, Outcome::RejectedWhileLocked);
    }

    state.metrics.total_tries += 1;

    // Only draw when injection is on.
    if state.failure_mode_enabled && failure.draw() < FAILURE_PROBABILITY {
        state.metrics.fail_count += 1;
        state.message = MSG_SERVER_ERROR.to_string();
        return (state, Outcome::ServerError);
    }

    if state.email == CORRECT_EMAIL && state.password == CORRECT_PASSWORD {
        state.is_logged_in = true;
        state.metrics.success_count += 1;
        state.message = MSG_LOGIN_SUCCESS.to_string();
        state.attempts = 0;
        record_recovery(&mut state, clock.now());
        return (state, Outcome::LoggedIn);
    }

    state.attempts += 1;
    state.metrics.fail_count += 1;
    state.password.clear();

    if state.attempts >= MAX_ATTEMPTS {
        state.is_locked = true;
        state.locked_at = Some(clock.now());
        state.message = MSG_LOCKED_OUT.to_string();
        (state, Outcome::LockedOut)
    } else {
        let remaining = state.remaining_attempts();
        state.message = format!("Wrong credentials! {} attempts remaining.", remaining);
        (state, Outcome::WrongCredentials { remaining })
    }
}

/// Lift the lock. Always succeeds.
pub fn unlock(mut state: AuthState, clock: &dyn Clock) -> (AuthState, Outcome) {
    state.is_locked = false;
    state.attempts = 0;
    state.message = MSG_UNLOCKED.to_string();
    record_recovery(&mut state, clock.now());
    (state, Outcome::Unlocked)
}

/// Leave the logged-in session. Counters and timestamps are kept.
pub fn logout(mut state: AuthState) -> (AuthState, Outcome) {
    if !state.is_logged_in {
        return (state, Outcome::Ignored);
    }
    state.is_logged_in = false;
    state.email.clear();
    state.password.clear();
    state.message.clear();
    (state, Outcome::LoggedOut)
}

/// Back to defaults. The failure injection toggle survives.
pub fn reset(state: AuthState) -> (AuthState, Outcome) {
    (AuthState::new(state.failure_mode_enabled), Outcome::Reset)
}

fn record_recovery(state: &mut AuthState, now: DateTime<Local>) {
    if let Some(locked_at) = state.locked_at.take() {
        state.last_recovery = Some(Recovery {
            at: now,
            locked_for: now - locked_at,
        });
    }
}
