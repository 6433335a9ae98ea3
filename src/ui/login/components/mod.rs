//! Login screen component modules
//!
//! Contains all individual rendering components

pub mod footer;
pub mod form;
pub mod header;
pub mod logs;
pub mod metrics;
