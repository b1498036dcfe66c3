use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Paragraph, Wrap},
};

/// Renders the about page over a blank screen
pub fn render_about(f: &mut Frame, area: Rect, lines: &[&str]) {
    f.render_widget(Block::default().style(Style::default().bg(Color::Black)), area);

    let text = Text::from(
        lines
            .iter()
            .map(|line| Line::from(*line))
            .collect::<Vec<_>>(),
    );
    let top_margin = area.height.saturating_sub(u16::try_from(lines.len()).unwrap_or(u16::MAX)) / 2;
    let body = Rect::new(
        area.x,
        area.y + top_margin,
        area.width,
        area.height - top_margin,
    );

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, body);
}
