//! Headless command parsing
//!
//! One command per line, e.g. `login student@college.edu password123`.

use crate::error::WidgetError;
use crate::widget::Action;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    /// Fill both fields and submit.
    Login { email: String, password: String },
    Email(String),
    Password(String),
    /// Submit with the current field values.
    Submit,
    Unlock,
    Logout,
    Reset,
    Failure(bool),
    /// Print a status summary.
    Status,
}

impl ScriptCommand {
    /// The widget actions this command stands for, in order.
    pub fn actions(&self) -> Vec<Action> {
        match self {
            ScriptCommand::Login { email, password } => vec![
                Action::SetEmail(email.clone()),
                Action::SetPassword(password.clone()),
                Action::Login,
            ],
            ScriptCommand::Email(email) => vec![Action::SetEmail(email.clone())],
            ScriptCommand::Password(password) => vec![Action::SetPassword(password.clone())],
            ScriptCommand::Submit => vec![Action::Login],
            ScriptCommand::Unlock => vec![Action::Unlock],
            ScriptCommand::Logout => vec![Action::Logout],
            ScriptCommand::Reset => vec![Action::Reset],
            ScriptCommand::Failure(enabled) => vec![Action::SetFailureMode(*enabled)],
            ScriptCommand::Status => Vec::new(),
        }
    }
}

impl FromStr for ScriptCommand {
    type Err = WidgetError;

    /// `password` and the password of `login` take the rest of the line, so
    /// inner spaces are kept. Other commands reject trailing arguments.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command.to_lowercase().as_str() {
            "login" => {
                let (email, password) = rest.split_once(char::is_whitespace).ok_or(
                    WidgetError::MissingArgument {
                        command: "login",
                        expected: "<email> <password>",
                    },
                )?;
                Ok(ScriptCommand::Login {
                    email: email.to_string(),
                    password: password.trim().to_string(),
                })
            }
            "email" => {
                if rest.contains(char::is_whitespace) {
                    return Err(unexpected("email", rest));
                }
                Ok(ScriptCommand::Email(rest.to_string()))
            }
            "password" => Ok(ScriptCommand::Password(rest.to_string())),
            "submit" => no_args("submit", rest, ScriptCommand::Submit),
            "unlock" => no_args("unlock", rest, ScriptCommand::Unlock),
            "logout" => no_args("logout", rest, ScriptCommand::Logout),
            "reset" => no_args("reset", rest, ScriptCommand::Reset),
            "status" => no_args("status", rest, ScriptCommand::Status),
            "failure" => match rest.to_lowercase().as_str() {
                "on" => Ok(ScriptCommand::Failure(true)),
                "off" => Ok(ScriptCommand::Failure(false)),
                _ => Err(WidgetError::MissingArgument {
                    command: "failure",
                    expected: "on|off",
                }),
            },
            _ => Err(WidgetError::UnknownCommand(line.to_string())),
        }
    }
}

fn no_args(
    command: &'static str,
    rest: &str,
    parsed: ScriptCommand,
) -> Result<ScriptCommand, WidgetError> {
    if rest.is_empty() {
        Ok(parsed)
    } else {
        Err(unexpected(command, rest))
    }
}

fn unexpected(command: &'static str, extra: &str) -> WidgetError {
    WidgetError::UnexpectedArgument {
        command,
        extra: extra.to_string(),
    }
}

/// Parse a script line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Option<Result<ScriptCommand, WidgetError>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    Some(trimmed.parse())
}
