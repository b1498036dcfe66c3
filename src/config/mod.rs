pub mod loader;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::game::{DEFAULT_FPS, MOVE_SPEED};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub controls: ControlsConfig,
    pub display: DisplayConfig,
    pub gameplay: GameplayConfig,
    pub assets: BTreeMap<String, SpriteConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            controls: ControlsConfig::default(),
            display: DisplayConfig::default(),
            gameplay: GameplayConfig::default(),
            assets: default_sprites(),
        }
    }
}

/// Which input drives the catcher sideways. Only one source is ever live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalInput {
    #[default]
    Pointer,
    Keys,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    pub horizontal: HorizontalInput,
    /// Pixels per tick while a movement key is held (keys mode only)
    pub move_speed: f32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            horizontal: HorizontalInput::Pointer,
            move_speed: MOVE_SPEED,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub fps: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { fps: DEFAULT_FPS }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    /// Fixed seed for spawn positions and hard-tier speeds
    pub seed: Option<u64>,
}

// Pixel size of a named sprite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteConfig {
    pub width: f32,
    pub height: f32,
}

fn default_sprites() -> BTreeMap<String, SpriteConfig> {
    [
        ("background", 800.0, 600.0),
        ("basket", 120.0, 80.0),
        ("monkey", 150.0, 200.0),
        ("coconut", 40.0, 40.0),
    ]
    .into_iter()
    .map(|(name, width, height)| (name.to_string(), SpriteConfig { width, height }))
    .collect()
}
