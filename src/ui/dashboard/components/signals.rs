//! Dashboard signals panel component
//!
//! Renders one card per signal in a two-column grid

use super::super::state::DashboardState;
use super::super::utils::{accent_color, border_color, confidence_bar, truncate};
use crate::cards::SignalCard;
use crate::consts::dashboard_consts::NO_SIGNALS_MESSAGE;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Rows taken by one card, borders included.
const CARD_HEIGHT: u16 = 9;

/// Narrowest panel that still gets two card columns.
const TWO_COLUMN_MIN_WIDTH: u16 = 60;

/// Render the signals panel starting at the current scroll offset.
pub fn render_signals_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let cards = state.signal_cards();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);

    let columns: usize = if inner.width >= TWO_COLUMN_MIN_WIDTH { 2 } else { 1 };
    let rows = (inner.height / CARD_HEIGHT).max(1) as usize;
    let first = state.signal_offset().min(cards.len());
    let shown = cards.len().saturating_sub(first).min(rows * columns);

    let title = if shown < cards.len() {
        format!(
            "LIVE SIGNALS ({}-{}/{}) [PgUp/PgDn]",
            first + 1,
            first + shown,
            cards.len()
        )
    } else {
        "LIVE SIGNALS".to_string()
    };
    f.render_widget(block.title(title), area);

    if cards.is_empty() {
        if state.show_empty_signals() {
            let hint = Paragraph::new(NO_SIGNALS_MESSAGE)
                .style(
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                )
                .wrap(Wrap { trim: true });
            f.render_widget(hint, inner);
        }
        return;
    }

    let row_areas = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); rows]).split(inner);
    for (row, row_area) in row_areas.iter().enumerate() {
        let cells =
            Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns]).split(*row_area);
        for (column, cell) in cells.iter().enumerate() {
            if let Some(card) = cards.get(first + row * columns + column) {
                render_signal_card(f, *cell, card);
            }
        }
    }
}

fn render_signal_card(f: &mut Frame, area: Rect, card: &SignalCard) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color(card.border)))
        .padding(Padding::horizontal(1));
    let inner_width = block.inner(area).width;

    let badge = match card.icon {
        Some(icon) => format!(" {} {} ", icon.glyph(), card.badge_text),
        None => format!(" {} ", card.badge_text),
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                card.pair.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                badge,
                Style::default()
                    .fg(accent_color(card.badge))
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            ),
        ]),
        Line::from(Span::styled(
            card.time_label.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(vec![
            Span::styled("Price ", Style::default().fg(Color::Gray)),
            Span::styled(
                card.entry_price.clone(),
                Style::default()
                    .fg(accent_color(card.price_color))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    if card.show_tp_sl {
        lines.push(Line::from(vec![
            Span::styled("TP ", Style::default().fg(Color::DarkGray)),
            Span::styled(card.take_profit.clone(), Style::default().fg(Color::LightGreen)),
            Span::raw("   "),
            Span::styled("SL ", Style::default().fg(Color::DarkGray)),
            Span::styled(card.stop_loss.clone(), Style::default().fg(Color::LightRed)),
        ]));

        // "Confidence " before the bar and " 100%" after it
        let (filled, empty) = confidence_bar(inner_width.saturating_sub(16), card.confidence_width);
        lines.push(Line::from(vec![
            Span::styled("Confidence ", Style::default().fg(Color::Gray)),
            Span::styled(filled, Style::default().fg(Color::Blue)),
            Span::styled(empty, Style::default().fg(Color::DarkGray)),
            Span::raw(format!(" {:.0}%", card.confidence_width)),
        ]));
    }

    lines.push(Line::from(Span::styled(
        truncate(&card.reason, inner_width as usize * 2),
        Style::default().fg(Color::Gray),
    )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
