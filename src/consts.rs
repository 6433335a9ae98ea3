pub mod widget_consts {
    //! Login Widget Constants
    //!
    //! Fixed at build time. Neither the credentials nor the limits are read
    //! from the configuration file.

    // =============================================================================
    // CREDENTIALS
    // =============================================================================

    /// The only email address accepted by the login form.
    pub const CORRECT_EMAIL: &str = "student@college.edu";

    /// The only password accepted by the login form.
    pub const CORRECT_PASSWORD: &str = "password123";

    // =============================================================================
    // LOCKOUT & FAILURE INJECTION
    // =============================================================================

    /// Consecutive failed attempts that lock the account.
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Probability that a login attempt hits a simulated server error
    /// while failure injection is enabled.
    pub const FAILURE_PROBABILITY: f64 = 0.3;

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// How long the splash screen stays up before the login screen (milliseconds)
    pub const SPLASH_DURATION_MS: u64 = 2_000;

    /// Key event poll interval for the UI loop (milliseconds)
    pub const POLL_INTERVAL_MS: u64 = 100;

    /// Time format used for lock and recovery timestamps
    pub const CLOCK_FORMAT: &str = "%H:%M:%S";

    /// Time format used for activity log entries
    pub const EVENT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
}
