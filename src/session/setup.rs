//! Session setup and initialization

use crate::config::Config;
use crate::ui::UIConfig;
use crate::widget::{Clock, FailureSource, SystemClock, failure_source};

/// Options resolved from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Seed for the failure-injection RNG.
    pub seed: Option<u64>,
    /// Start with failure injection on, regardless of the config file.
    pub failure_injection: bool,
    /// Disable the background color, regardless of the config file.
    pub no_background: bool,
}

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Display preferences and initial toggle state
    pub ui_config: UIConfig,
    /// Clock used for lock and recovery timestamps
    pub clock: Box<dyn Clock>,
    /// Random source for failure injection
    pub failure: Box<dyn FailureSource>,
}

/// Sets up a session
///
/// This function handles all the common setup required for both TUI and headless modes:
/// 1. Merges config file preferences with command-line flags
/// 2. Picks the system clock
/// 3. Picks a seeded or thread-local random source
///
/// # Arguments
/// * `config` - Preferences loaded from the config file
/// * `options` - Flags given on the command line
pub fn setup_session(config: &Config, options: SessionOptions) -> SessionData {
    let ui_config = UIConfig::new(
        config.with_background_color && !options.no_background,
        config.failure_injection || options.failure_injection,
    );

    if let Some(seed) = options.seed {
        log::info!("Failure injection RNG seeded with {}", seed);
    }

    SessionData {
        ui_config,
        clock: Box::new(SystemClock),
        failure: failure_source(options.seed),
    }
}
