//! Login screen utility functions
//!
//! Contains helper functions used across login screen components

use crate::consts::widget_consts::CLOCK_FORMAT;
use crate::events::EventType;
use crate::widget::MessageTone;
use chrono::{DateTime, Local};
use ratatui::prelude::Color;

/// Get a ratatui color for the status message tone
pub fn get_tone_color(tone: MessageTone) -> Color {
    match tone {
        MessageTone::Success => Color::Green,
        MessageTone::Locked => Color::Red,
        MessageTone::Warning => Color::Yellow,
    }
}

/// Get a ratatui color for an activity log entry
pub fn get_event_color(event_type: EventType) -> Color {
    match event_type {
        EventType::Success | EventType::Recovery => Color::Green,
        EventType::Error => Color::Yellow,
        EventType::Lockout => Color::Red,
        EventType::StateChange => Color::Gray,
    }
}

/// Format a lock or recovery instant as wall-clock time
pub fn format_clock_time(time: &DateTime<Local>) -> String {
    time.format(CLOCK_FORMAT).to_string()
}

/// Mask a password for display
pub fn mask(password: &str) -> String {
    "*".repeat(password.chars().count())
}

/// Format compact timestamp with time only from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract HH:MM:SS from "YYYY-MM-DD HH:MM:SS"
    timestamp
        .split(' ')
        .nth(1)
        .map(str::to_string)
        .unwrap_or_else(|| timestamp.to_string())
}
