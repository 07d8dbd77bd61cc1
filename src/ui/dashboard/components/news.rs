//! Dashboard news panel component
//!
//! Renders the news feed as a scrollable list of short cards

use super::super::state::DashboardState;
use super::super::utils::{accent_color, truncate};
use crate::cards::NewsCard;
use crate::consts::dashboard_consts::NO_NEWS_MESSAGE;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the news panel starting at the current scroll offset.
pub fn render_news_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let cards = state.news_cards();
    let title = if cards.is_empty() {
        "LATEST NEWS".to_string()
    } else {
        format!("LATEST NEWS ({}/{})", state.news_offset() + 1, cards.len())
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Magenta))
        .padding(Padding::uniform(1));
    let inner_width = block.inner(area).width as usize;

    let lines: Vec<Line> = if cards.is_empty() {
        if state.show_empty_news() {
            vec![Line::from(Span::styled(
                NO_NEWS_MESSAGE,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ))]
        } else {
            Vec::new()
        }
    } else {
        cards
            .iter()
            .skip(state.news_offset())
            .flat_map(|card| news_card_lines(card, inner_width))
            .collect()
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn news_card_lines(card: &NewsCard, width: usize) -> Vec<Line<'static>> {
    let mut header = vec![
        Span::styled(
            format!("[{}]", card.source_label),
            Style::default().fg(Color::LightBlue),
        ),
        Span::raw(" "),
        Span::styled(card.date_label.clone(), Style::default().fg(Color::DarkGray)),
    ];
    if let Some(sentiment) = card.sentiment {
        header.push(Span::raw("  "));
        header.push(Span::styled(
            sentiment.label(),
            Style::default().fg(accent_color(sentiment.accent())),
        ));
    }

    vec![
        Line::from(header),
        Line::from(Span::styled(
            truncate(&card.title_line, width.max(4) * 2),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ]
}
