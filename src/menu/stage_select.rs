#![warn(clippy::all, clippy::pedantic)]

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

use crate::scene::Button;
use crate::ui::to_cells;

const BUTTON_BG: Color = Color::Black;
const BUTTON_HOVER_BG: Color = Color::Rgb(0, 100, 0);

/// Renders the difficulty buttons in the corner of the field
pub fn render_stage_buttons(f: &mut Frame, field: Rect, buttons: &[Button]) {
    for button in buttons {
        let Some(area) = to_cells(field, &button.bounds) else {
            continue;
        };

        let style = Style::default()
            .fg(Color::White)
            .bg(if button.hovered {
                BUTTON_HOVER_BG
            } else {
                BUTTON_BG
            })
            .add_modifier(Modifier::BOLD);

        let label = Paragraph::new(button.label)
            .alignment(Alignment::Left)
            .style(style);
        f.render_widget(label, area);
    }
}
