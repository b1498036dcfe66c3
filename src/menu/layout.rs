#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow precision loss when converting small menu indices to f32 coordinates
    clippy::cast_precision_loss
)]

use crate::collision::Rect;
use crate::difficulty::DifficultyTier;
use crate::game::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::menu_types::PauseOption;

// Stage selector buttons stacked in the top-left corner
const STAGE_BUTTON_X: f32 = 10.0;
const STAGE_BUTTON_Y: f32 = 10.0;
const STAGE_BUTTON_SPACING: f32 = 40.0;
const STAGE_BUTTON_WIDTH: f32 = 120.0;
const STAGE_BUTTON_HEIGHT: f32 = 30.0;

// Pause menu panel and its option rows
const PAUSE_PANEL_WIDTH: f32 = 400.0;
const PAUSE_PANEL_HEIGHT: f32 = 300.0;
const PAUSE_OPTION_INSET_X: f32 = 60.0;
const PAUSE_OPTION_TOP: f32 = 80.0;
const PAUSE_OPTION_SPACING: f32 = 50.0;
const PAUSE_OPTION_WIDTH: f32 = 280.0;
const PAUSE_OPTION_HEIGHT: f32 = 40.0;

#[must_use]
pub fn stage_button_rect(tier: DifficultyTier) -> Rect {
    Rect::new(
        STAGE_BUTTON_X,
        STAGE_BUTTON_Y + tier.index() as f32 * STAGE_BUTTON_SPACING,
        STAGE_BUTTON_WIDTH,
        STAGE_BUTTON_HEIGHT,
    )
}

#[must_use]
pub fn score_rect() -> Rect {
    Rect::new(SCREEN_WIDTH / 2.0 - 100.0, 10.0, 200.0, 30.0)
}

#[must_use]
pub fn pause_menu_rect() -> Rect {
    Rect::new(
        SCREEN_WIDTH / 2.0 - PAUSE_PANEL_WIDTH / 2.0,
        SCREEN_HEIGHT / 2.0 - PAUSE_PANEL_HEIGHT / 2.0,
        PAUSE_PANEL_WIDTH,
        PAUSE_PANEL_HEIGHT,
    )
}

#[must_use]
pub fn pause_option_rect(option: PauseOption) -> Rect {
    let panel = pause_menu_rect();
    Rect::new(
        panel.x + PAUSE_OPTION_INSET_X,
        panel.y + PAUSE_OPTION_TOP + option.index() as f32 * PAUSE_OPTION_SPACING,
        PAUSE_OPTION_WIDTH,
        PAUSE_OPTION_HEIGHT,
    )
}

/// Stage button under the given point, if any
#[must_use]
pub fn stage_button_at(x: f32, y: f32) -> Option<DifficultyTier> {
    DifficultyTier::ALL
        .into_iter()
        .find(|tier| stage_button_rect(*tier).contains_point(x, y))
}

/// Pause menu option under the given point, if any
#[must_use]
pub fn pause_option_at(x: f32, y: f32) -> Option<PauseOption> {
    PauseOption::ALL
        .into_iter()
        .find(|option| pause_option_rect(*option).contains_point(x, y))
}
