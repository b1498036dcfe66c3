#![warn(clippy::all, clippy::pedantic)]

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::scene::PauseMenuView;
use crate::ui::to_cells;

const HOVER_BG: Color = Color::Rgb(0, 100, 0);
const DIMMED: Color = Color::Rgb(180, 180, 180);

/// Renders the pause overlay with the selected and hovered options highlighted
pub fn render_pause_menu(f: &mut Frame, field: Rect, view: &PauseMenuView) {
    let Some(panel) = to_cells(field, &view.bounds) else {
        return;
    };

    f.render_widget(Clear, panel);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(view.title).alignment(Alignment::Center))
        .style(Style::default().bg(Color::Black).fg(Color::White));
    f.render_widget(block, panel);

    for item in &view.items {
        let Some(area) = to_cells(field, &item.bounds) else {
            continue;
        };

        let mut style = if item.selected {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DIMMED)
        };
        if item.hovered {
            style = style.bg(HOVER_BG);
        }

        let marker = if item.selected { "> " } else { "  " };
        let line = Line::from(vec![Span::raw(marker), Span::styled(item.label, style)]);
        f.render_widget(Paragraph::new(line).style(style), area);
    }
}
