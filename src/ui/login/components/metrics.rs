//! Login metrics component
//!
//! Renders cumulative counters and the lock/recovery section

use super::super::state::LoginScreenState;
use super::super::utils::format_clock_time;
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the metrics panel.
pub fn render_metrics(f: &mut Frame, area: ratatui::layout::Rect, state: &LoginScreenState) {
    let auth = &state.auth;
    let metrics = &auth.metrics;
    let mut metric_lines = vec![
        stat_line("Total attempts: ", metrics.total_tries.to_string(), Color::White),
        stat_line(
            "Successful logins: ",
            metrics.success_count.to_string(),
            Color::Green,
        ),
        stat_line("Failed attempts: ", metrics.fail_count.to_string(), Color::Red),
        stat_line(
            "Success rate: ",
            metrics.format_success_rate(),
            metrics.success_rate_color(),
        ),
    ];

    if let Some(locked_at) = &auth.locked_at {
        metric_lines.push(Line::from(""));
        metric_lines.push(Line::from(Span::styled(
            "Currently locked",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        metric_lines.push(Line::from(Span::styled(
            format!("Locked at: {}", format_clock_time(locked_at)),
            Style::default().fg(Color::Gray),
        )));
    } else if let Some(recovery) = &auth.last_recovery {
        metric_lines.push(Line::from(""));
        metric_lines.push(Line::from(Span::styled(
            "Last recovery",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
        metric_lines.push(Line::from(Span::styled(
            format!("Recovered at: {}", format_clock_time(&recovery.at)),
            Style::default().fg(Color::Gray),
        )));
        metric_lines.push(Line::from(Span::styled(
            format!("Locked for: {}s", recovery.format_locked_for()),
            Style::default().fg(Color::Gray),
        )));
    }

    let metrics_block = Block::default()
        .title("METRICS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let metrics_paragraph = Paragraph::new(metric_lines)
        .block(metrics_block)
        .wrap(Wrap { trim: true });
    f.render_widget(metrics_paragraph, area);
}

fn stat_line(label: &'static str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD)),
    ])
}
