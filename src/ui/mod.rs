// Module declarations
mod app;
pub mod login;
pub mod splash;
// Re-exports for external use
pub use app::{App, UIConfig, run};
