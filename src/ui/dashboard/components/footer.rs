//! Dashboard footer component
//!
//! Renders key help, the backend URL, the last refresh time and latest activity

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render footer.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let updated = state
        .data()
        .last_updated
        .map(|t| format!("{} (#{})", t.format("%H:%M:%S"), state.data().refresh_count))
        .unwrap_or_else(|| "never".to_string());

    let mut footer_text = format!(
        "[Q] Quit | [R] Refresh | [PgUp/PgDn] Scroll signals | [↑↓] Scroll news | {} | Updated: {}",
        state.environment.backend_url(),
        updated
    );
    if let Some(event) = state.last_event() {
        footer_text.push_str(&format!(" | {}: {}", event.event_type, event.msg));
    }

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
