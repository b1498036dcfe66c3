#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow truncation when projecting game pixels onto terminal cells; values are clamped first
    clippy::cast_possible_truncation,
    // Allow sign loss when projecting game pixels onto terminal cells; values are clamped to >= 0
    clippy::cast_sign_loss
)]

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::collision;
use crate::game::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::menu;
use crate::scene::{CatcherView, Scene};

// Smallest terminal the field can be drawn in
pub const MIN_FIELD_WIDTH: u16 = 40;
pub const MIN_FIELD_HEIGHT: u16 = 15;

// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: f32 = 2.0;

const SKY: Color = Color::Rgb(135, 206, 235);
const GRASS: Color = Color::Rgb(34, 139, 34);
const MONKEY: Color = Color::Rgb(139, 69, 19);
const BASKET: Color = Color::Rgb(205, 133, 63);
const COCONUT: Color = Color::Rgb(101, 67, 33);

pub fn render(f: &mut Frame, scene: &Scene) {
    let area = f.area();
    let Some(field) = field_area(area) else {
        let warning = Paragraph::new(
            "Terminal too small!\nPlease resize your terminal\nto continue playing.",
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Coconut Catch"),
        );
        f.render_widget(warning, centered_rect(50, 30, area));
        return;
    };

    if let Some(lines) = scene.about {
        menu::about::render_about(f, field, lines);
        return;
    }

    if let Some(background) = scene.background {
        fill(f, field, &background, " ", Color::Reset, SKY);
    }
    if let Some(grass) = scene.grass {
        fill(f, field, &grass, " ", Color::Reset, GRASS);
    }
    if let Some(catcher) = scene.catcher {
        render_catcher(f, field, catcher);
    }
    for object in &scene.objects {
        fill(f, field, object, "●", COCONUT, SKY);
    }

    menu::stage_select::render_stage_buttons(f, field, &scene.stage_buttons);

    if let Some(score) = &scene.score {
        if let Some(cells) = to_cells(field, &score.bounds) {
            let text = Paragraph::new(score.text.as_str())
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                );
            f.render_widget(text, cells);
        }
    }

    if let Some(pause_menu) = &scene.pause_menu {
        menu::pause_menu::render_pause_menu(f, field, pause_menu);
    }
}

fn render_catcher(f: &mut Frame, field: Rect, catcher: CatcherView) {
    fill(f, field, &catcher.monkey, "▓", MONKEY, SKY);
    fill(f, field, &catcher.basket, "█", BASKET, SKY);
}

/// Largest area with the playfield's aspect ratio, centered in `area`.
///
/// Returns `None` when the terminal is below the minimum size.
#[must_use]
pub fn field_area(area: Rect) -> Option<Rect> {
    if area.width < MIN_FIELD_WIDTH || area.height < MIN_FIELD_HEIGHT {
        return None;
    }

    let ratio = SCREEN_WIDTH / SCREEN_HEIGHT * CELL_ASPECT;
    let width_for_height = (f32::from(area.height) * ratio) as u16;
    let (width, height) = if width_for_height <= area.width {
        (width_for_height, area.height)
    } else {
        (area.width, (f32::from(area.width) / ratio) as u16)
    };

    Some(Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    ))
}

/// Projects a game-space box onto the cells of `field`, clipped to it
#[must_use]
pub fn to_cells(field: Rect, bounds: &collision::Rect) -> Option<Rect> {
    let scale_x = f32::from(field.width) / SCREEN_WIDTH;
    let scale_y = f32::from(field.height) / SCREEN_HEIGHT;

    let project = |v: f32, scale: f32, max: u16| (v * scale).clamp(0.0, f32::from(max));
    let left = project(bounds.x, scale_x, field.width).floor() as u16;
    let right = project(bounds.right(), scale_x, field.width).ceil() as u16;
    let top = project(bounds.y, scale_y, field.height).floor() as u16;
    let bottom = project(bounds.bottom(), scale_y, field.height).ceil() as u16;

    if right <= left || bottom <= top {
        return None;
    }

    Some(Rect::new(
        field.x + left,
        field.y + top,
        right - left,
        bottom - top,
    ))
}

/// Paints every cell covered by `bounds`
pub fn fill(
    f: &mut Frame,
    field: Rect,
    bounds: &collision::Rect,
    symbol: &str,
    fg: Color,
    bg: Color,
) {
    let Some(cells) = to_cells(field, bounds) else {
        return;
    };

    let buffer = f.buffer_mut();
    for y in cells.top()..cells.bottom() {
        for x in cells.left()..cells.right() {
            if let Some(cell) = buffer.cell_mut((x, y)) {
                cell.set_symbol(symbol);
                cell.set_fg(fg);
                cell.set_bg(bg);
            }
        }
    }
}

/// Helper function to create a centered rect using up certain percentage of the available rect
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
