//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_starting},
    script::{ScriptCommand, parse_line},
};
use crate::consts::widget_consts::MAX_ATTEMPTS;
use crate::error::WidgetError;
use crate::events::Event;
use crate::ui::login::utils::format_clock_time;
use crate::widget::{AuthState, Outcome, apply};
use std::io::{BufRead, Write};

/// Runs the application in headless mode
///
/// This function handles:
/// 1. Reading one command per input line
/// 2. Running each command through the login widget
/// 3. Writing one line per event, plus summaries on `status`
///
/// Unknown or malformed commands are reported and skipped.
///
/// # Arguments
/// * `session` - Session data from setup
/// * `input` - Command source, usually stdin
/// * `out` - Event sink, usually stdout
pub fn run_headless_mode<R: BufRead, W: Write>(
    mut session: SessionData,
    input: R,
    out: &mut W,
) -> Result<AuthState, WidgetError> {
    print_session_starting("headless", session.ui_config.failure_injection);

    let mut state = AuthState::new(session.ui_config.failure_injection);
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let command = match parse_line(&line) {
            None => continue,
            Some(Ok(command)) => command,
            Some(Err(e)) => {
                log::warn!("line {}: {}", index + 1, e);
                eprintln!("line {}: {}", index + 1, e);
                continue;
            }
        };

        if command == ScriptCommand::Status {
            writeln!(out, "{}", status_line(&state))?;
            continue;
        }

        for action in command.actions() {
            let (next, outcome) = apply(
                state,
                action,
                session.clock.as_ref(),
                session.failure.as_mut(),
            );
            state = next;
            if outcome != Outcome::FieldEdited {
                let event = Event::from_outcome(outcome, &state, session.clock.now());
                writeln!(out, "{}", event)?;
            }
        }
    }

    print_session_exit_success();
    Ok(state)
}

/// One-line summary of the widget state.
pub fn status_line(state: &AuthState) -> String {
    let metrics = &state.metrics;
    let locked_at = state
        .locked_at
        .as_ref()
        .map(format_clock_time)
        .unwrap_or_else(|| "-".to_string());
    let recovered_at = state
        .last_recovery
        .map(|r| format_clock_time(&r.at))
        .unwrap_or_else(|| "-".to_string());

    format!(
        "status={} attempts={}/{} total={} success={} fail={} rate={} failure_injection={} locked_at={} recovered_at={}",
        state.status(),
        state.attempts,
        MAX_ATTEMPTS,
        metrics.total_tries,
        metrics.success_count,
        metrics.fail_count,
        metrics.format_success_rate(),
        if state.failure_mode_enabled { "on" } else { "off" },
        locked_at,
        recovered_at,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::UIConfig;
    use crate::widget::clock::FixedClock;
    use crate::widget::random::MockFailureSource;
    use chrono::{Local, TimeZone};
    use std::io::Cursor;

    fn session(failure_injection: bool, draws: Vec<f64>) -> SessionData {
        let mut source = MockFailureSource::new();
        let mut draws = draws.into_iter();
        source
            .expect_draw()
            .returning(move || draws.next().expect("unexpected draw"));
        SessionData {
            ui_config: UIConfig::new(false, failure_injection),
            clock: Box::new(FixedClock(
                Local.with_ymd_and_hms(2025, 2, 3, 8, 0, 0).unwrap(),
            )),
            failure: Box::new(source),
        }
    }

    fn run(session: SessionData, script: &str) -> (AuthState, String) {
        let mut out = Vec::new();
        let state = run_headless_mode(session, Cursor::new(script), &mut out).unwrap();
        (state, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_script_locks_and_unlocks() {
        let script = "\
# three bad passwords
login student@college.edu a
login student@college.edu b
login student@college.edu c
status
unlock
status
";
        let (state, out) = run(session(false, vec![]), script);
        assert!(out.contains("Lockout [2025-02-03 08:00:00] Account locked! Too many failed attempts."));
        assert!(out.contains("status=Locked attempts=3/3 total=3 success=0 fail=3 rate=0.0%"));
        assert!(out.contains("Account unlocked. You can try again!"));
        assert!(out.contains("status=LoggedOut attempts=0/3"));
        assert!(out.contains("recovered_at=08:00:00"));
        assert!(!state.is_locked);
    }

    #[test]
    // Bad lines are skipped and the rest still runs.
    fn test_unknown_command_is_skipped() {
        let script = "jump\nlogin student@college.edu password123\n";
        let (state, out) = run(session(false, vec![]), script);
        assert!(state.is_logged_in);
        assert!(out.contains("Login successful! Welcome!"));
    }

    #[test]
    fn test_injected_failure_in_script() {
        let script = "login student@college.edu password123\nstatus\n";
        let (state, out) = run(session(true, vec![0.2]), script);
        assert!(!state.is_logged_in);
        assert!(out.contains("Server error! Please try again."));
        assert!(out.contains("attempts=0/3 total=1 success=0 fail=1"));
    }
}
