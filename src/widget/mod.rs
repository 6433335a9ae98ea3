//! Login widget core
//!
//! State record, counters and the pure transitions that drive the view

pub mod clock;
pub mod metrics;
pub mod random;
pub mod state;
pub mod transitions;

// Re-export main types and functions for external use
pub use clock::{Clock, SystemClock};
pub use random::{FailureSource, failure_source};
pub use state::{AuthState, MessageTone, SessionStatus};
pub use transitions::{Action, Outcome, apply};
