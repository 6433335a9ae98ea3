//! Login form component
//!
//! Renders the status message, the credential inputs and the action hints

use super::super::state::{Focus, LoginScreenState};
use super::super::utils::{get_tone_color, mask};
use crate::consts::widget_consts::{CORRECT_EMAIL, CORRECT_PASSWORD, FAILURE_PROBABILITY};

use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the login panel.
pub fn render_form(f: &mut Frame, area: ratatui::layout::Rect, state: &LoginScreenState) {
    let auth = &state.auth;
    let mut lines = Vec::new();

    if !auth.message.is_empty() {
        lines.push(Line::from(Span::styled(
            auth.message.clone(),
            Style::default()
                .fg(get_tone_color(auth.message_tone()))
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }

    if auth.is_logged_in {
        lines.push(Line::from(Span::styled(
            format!("You are logged in as {}", auth.email),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
        lines.push(button_line("[Ctrl+O] Logout", Color::Gray, true));
    } else {
        lines.push(input_line(
            "Email",
            &auth.email,
            "Enter your email",
            state.focus == Focus::Email,
            auth.is_locked,
        ));
        lines.push(input_line(
            "Password",
            &mask(&auth.password),
            "Enter your password",
            state.focus == Focus::Password,
            auth.is_locked,
        ));
        lines.push(Line::from(""));
        lines.push(button_line("[Enter] Login", Color::Blue, !auth.is_locked));
        if auth.is_locked {
            lines.push(button_line("[Ctrl+U] Unlock Account", Color::Green, true));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Test Account:",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(Span::styled(
            format!("Email: {}", CORRECT_EMAIL),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(Span::styled(
            format!("Password: {}", CORRECT_PASSWORD),
            Style::default().fg(Color::Gray),
        )));

        lines.push(Line::from(""));
        let checkbox = if auth.failure_mode_enabled { "[x]" } else { "[ ]" };
        let toggle_style = if state.focus == Focus::FailureToggle {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(Span::styled(
            format!(
                "{} Enable failure injection ({:.0}% error rate)",
                checkbox,
                FAILURE_PROBABILITY * 100.0
            ),
            toggle_style,
        )));
    }

    let form_block = Block::default()
        .title("LOGIN")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let form_paragraph = Paragraph::new(lines)
        .block(form_block)
        .wrap(Wrap { trim: true });
    f.render_widget(form_paragraph, area);
}

fn input_line<'a>(
    label: &'a str,
    value: &str,
    placeholder: &'a str,
    focused: bool,
    disabled: bool,
) -> Line<'a> {
    let label_style = if focused && !disabled {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let value_span = if disabled {
        Span::styled(value.to_string(), Style::default().fg(Color::DarkGray))
    } else if value.is_empty() {
        Span::styled(
            placeholder,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::styled(value.to_string(), Style::default().fg(Color::White))
    };
    let cursor = if focused && !disabled { "▏" } else { "" };

    Line::from(vec![
        Span::styled(format!("{:<10}", format!("{}:", label)), label_style),
        value_span,
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ])
}

fn button_line(label: &str, color: Color, enabled: bool) -> Line<'_> {
    let style = if enabled {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    };
    Line::from(Span::styled(label, style))
}
