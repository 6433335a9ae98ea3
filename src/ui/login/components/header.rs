//! Login screen header component
//!
//! Renders the title and the failed-attempts gauge

use super::super::state::LoginScreenState;
use crate::consts::widget_consts::MAX_ATTEMPTS;
use crate::widget::SessionStatus;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render header with title and attempts gauge.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &LoginScreenState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let title_text = format!("SIMPLE LOGIN SYSTEM v{}", env!("CARGO_PKG_VERSION"));
    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let auth = &state.auth;
    let (status_text, gauge_color) = match auth.status() {
        SessionStatus::LoggedIn => ("LOGGED IN", Color::LightGreen),
        SessionStatus::Locked => ("LOCKED", Color::LightRed),
        SessionStatus::LoggedOut => ("LOGGED OUT", Color::LightBlue),
    };
    let progress_percent = ((auth.attempts.min(MAX_ATTEMPTS) * 100) / MAX_ATTEMPTS) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(format!(
            "{} - Failed attempts: {} / {}",
            status_text, auth.attempts, MAX_ATTEMPTS
        ));

    f.render_widget(gauge, header_chunks[1]);
}
