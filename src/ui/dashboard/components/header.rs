//! Dashboard header component
//!
//! Renders the title, engine status and refresh indicator

use super::super::state::DashboardState;
use super::super::utils::{format_uptime, spinner_frame, status_color};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render header with title, status dot and refresh indicator.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let title = Paragraph::new(format!(
        "FOREX ENGINE DASHBOARD v{}",
        env!("CARGO_PKG_VERSION")
    ))
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

    let status = &state.data().status;
    let mut spans = vec![
        Span::styled("Status: ", Style::default().fg(Color::Gray)),
        Span::styled("● ", Style::default().fg(status_color(status))),
        Span::styled(
            status.status.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(version) = &status.version {
        spans.push(Span::styled(
            format!("  engine v{}", version),
            Style::default().fg(Color::DarkGray),
        ));
    }
    spans.push(Span::raw("   "));
    if state.is_loading() {
        spans.push(Span::styled(
            format!("{} refreshing", spinner_frame(state.tick)),
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        ));
    } else {
        spans.push(Span::styled(
            format!("↻ every {}s", state.refresh_interval.as_secs()),
            Style::default().fg(Color::DarkGray),
        ));
    }

    spans.push(Span::styled(
        format!("   up {}", format_uptime(state.start_time.elapsed())),
        Style::default().fg(Color::DarkGray),
    ));

    let status_line = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(status_line, header_chunks[1]);
}
