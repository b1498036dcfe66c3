#![warn(clippy::all, clippy::pedantic)]

use bevy_ecs::prelude::*;

use crate::assets::AssetCatalog;
use crate::collision::Rect;
use crate::config::{ControlsConfig, HorizontalInput};
use crate::difficulty::DifficultyTier;
use crate::game::{
    BASKET_BASE_Y, BASKET_OFFSET_X, CATCHER_START_X, MOVE_SPEED, MONKEY_BASE_Y, MONKEY_OFFSET_X,
};

/// A coconut on its way down
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct FallingObject {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl FallingObject {
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// The monkey and its basket
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Catcher {
    pub x: f32,
    /// Offset from the resting height, negative while in the air
    pub vertical_offset: f32,
    pub vertical_velocity: f32,
    pub airborne: bool,
}

impl Default for Catcher {
    fn default() -> Self {
        Self {
            x: CATCHER_START_X,
            vertical_offset: 0.0,
            vertical_velocity: 0.0,
            airborne: false,
        }
    }
}

impl Catcher {
    /// Collision box of the basket for the current frame
    #[must_use]
    pub fn basket_box(&self, assets: &AssetCatalog) -> Rect {
        Rect::new(
            self.x - BASKET_OFFSET_X,
            BASKET_BASE_Y + self.vertical_offset,
            assets.basket.width,
            assets.basket.height,
        )
    }

    /// Where the monkey sprite is drawn; never used for collisions
    #[must_use]
    pub fn monkey_box(&self, assets: &AssetCatalog) -> Rect {
        Rect::new(
            self.x + MONKEY_OFFSET_X,
            MONKEY_BASE_Y + self.vertical_offset,
            assets.monkey.width,
            assets.monkey.height,
        )
    }
}

/// One round of play at a fixed tier. Absent while on the stage selector.
#[derive(Resource, Debug, Clone)]
pub struct Session {
    pub tier: DifficultyTier,
    pub score: u32,
    pub catcher: Catcher,
}

impl Session {
    #[must_use]
    pub fn new(tier: DifficultyTier) -> Self {
        Self {
            tier,
            score: 0,
            catcher: Catcher::default(),
        }
    }
}

// Movement intent for the current frame
#[derive(Resource, Debug, Clone, Default)]
pub struct Input {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub pointer_x: Option<f32>,
}

// Which input steers the catcher, and how fast keys move it
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Controls {
    pub horizontal: HorizontalInput,
    pub move_speed: f32,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            horizontal: HorizontalInput::Pointer,
            move_speed: MOVE_SPEED,
        }
    }
}

impl From<&ControlsConfig> for Controls {
    fn from(config: &ControlsConfig) -> Self {
        Self {
            horizontal: config.horizontal,
            move_speed: config.move_speed,
        }
    }
}
