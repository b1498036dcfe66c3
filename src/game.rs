#![warn(clippy::all, clippy::pedantic)]

// Playfield dimensions in game pixels
pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;

// Grass band along the bottom of the field
pub const GRASS_HEIGHT: f32 = 80.0;
pub const GROUND_Y: f32 = SCREEN_HEIGHT - GRASS_HEIGHT;

// Catcher sprites are anchored relative to the horizontal position
pub const BASKET_OFFSET_X: f32 = 60.0;
pub const BASKET_BASE_Y: f32 = GROUND_Y - 80.0;
pub const MONKEY_OFFSET_X: f32 = -40.0;
pub const MONKEY_BASE_Y: f32 = GROUND_Y - 200.0;

// Horizontal movement
pub const MOVE_SPEED: f32 = 7.0;
pub const CATCHER_EDGE_MARGIN: f32 = 100.0;
pub const CATCHER_START_X: f32 = SCREEN_WIDTH / 2.0;

// Jumping
pub const JUMP_POWER: f32 = -15.0;
pub const GRAVITY: f32 = 1.0;

// Spawn positions along the top edge (inclusive bounds)
pub const SPAWN_MIN_X: i32 = 40;
pub const SPAWN_MAX_X: i32 = 740;

// Frame pacing
pub const DEFAULT_FPS: u32 = 60;
