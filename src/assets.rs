#![warn(clippy::all, clippy::pedantic)]

use std::collections::BTreeMap;
use std::fmt;

use bevy_ecs::prelude::*;
use log::debug;

use crate::collision::Rect;
use crate::config::SpriteConfig;
use crate::game::{SCREEN_HEIGHT, SCREEN_WIDTH};

pub const BACKGROUND: &str = "background";
pub const BASKET: &str = "basket";
pub const MONKEY: &str = "monkey";
pub const COCONUT: &str = "coconut";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteSize {
    pub width: f32,
    pub height: f32,
}

impl SpriteSize {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Dimensions of every sprite the game draws.
///
/// Only sizes are known here; pixel data belongs to whatever draws the scene.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct AssetCatalog {
    pub background: SpriteSize,
    pub basket: SpriteSize,
    pub monkey: SpriteSize,
    pub coconut: SpriteSize,
}

impl Default for AssetCatalog {
    fn default() -> Self {
        Self {
            background: SpriteSize::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            basket: SpriteSize::new(120.0, 80.0),
            monkey: SpriteSize::new(150.0, 200.0),
            coconut: SpriteSize::new(40.0, 40.0),
        }
    }
}

impl AssetCatalog {
    /// Builds the catalog from configured sprite sizes.
    ///
    /// Every required sprite must be present with a positive, finite size.
    pub fn load(sprites: &BTreeMap<String, SpriteConfig>) -> Result<Self, AssetError> {
        let catalog = Self {
            background: lookup(sprites, BACKGROUND)?,
            basket: lookup(sprites, BASKET)?,
            monkey: lookup(sprites, MONKEY)?,
            coconut: lookup(sprites, COCONUT)?,
        };
        debug!("Loaded sprite catalog: {catalog:?}");
        Ok(catalog)
    }

    /// Background scaled to fit the screen with its aspect ratio kept, centered
    #[must_use]
    pub fn background_placement(&self) -> Rect {
        let scale =
            (SCREEN_WIDTH / self.background.width).min(SCREEN_HEIGHT / self.background.height);
        let width = (self.background.width * scale).floor();
        let height = (self.background.height * scale).floor();
        Rect::new(
            ((SCREEN_WIDTH - width) / 2.0).floor(),
            ((SCREEN_HEIGHT - height) / 2.0).floor(),
            width,
            height,
        )
    }
}

fn lookup(sprites: &BTreeMap<String, SpriteConfig>, name: &str) -> Result<SpriteSize, AssetError> {
    let sprite = sprites
        .get(name)
        .ok_or_else(|| AssetError::Missing(name.to_string()))?;

    let valid = |v: f32| v.is_finite() && v > 0.0;
    if !valid(sprite.width) || !valid(sprite.height) {
        return Err(AssetError::InvalidSize {
            name: name.to_string(),
            width: sprite.width,
            height: sprite.height,
        });
    }

    Ok(SpriteSize::new(sprite.width, sprite.height))
}

// A required sprite could not be loaded; the game cannot start without it
#[derive(Debug, Clone, PartialEq)]
pub enum AssetError {
    Missing(String),
    InvalidSize { name: String, width: f32, height: f32 },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Missing(name) => write!(f, "required sprite '{name}' is missing"),
            AssetError::InvalidSize {
                name,
                width,
                height,
            } => write!(f, "sprite '{name}' has unusable size {width}x{height}"),
        }
    }
}

impl std::error::Error for AssetError {}
