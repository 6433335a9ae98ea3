//! Process-level errors
//!
//! The widget itself has no error paths; these cover configuration and
//! headless command input.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WidgetError {
    /// Terminal or file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file exists but is not valid JSON.
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The home directory could not be determined.
    #[error("Could not determine home directory")]
    NoHomeDir,

    /// A headless command line did not match any known command.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// A headless command is missing a required argument.
    #[error("Missing argument for '{command}': expected {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    /// A headless command was given arguments it does not take.
    #[error("Unexpected argument for '{command}': {extra}")]
    UnexpectedArgument {
        command: &'static str,
        extra: String,
    },
}
