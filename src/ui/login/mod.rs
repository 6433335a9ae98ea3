//! Login screen
//!
//! Form, metrics and activity log for the login widget

pub mod components;
pub mod renderer;
pub mod state;
pub mod updaters;
pub mod utils;

// Re-export main types and functions for external use
pub use renderer::render_login;
pub use state::LoginScreenState;
