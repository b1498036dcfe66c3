#![warn(clippy::all, clippy::pedantic)]

use crate::components::FallingObject;
use crate::motion;

/// Axis-aligned box in game pixels, top-left anchored.
///
/// Both axes are half-open: a box covers `[x, x + width)` and `[y, y + height)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// True when the two boxes share a region of non-zero area.
    /// Boxes that only touch along an edge do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    #[must_use]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// What happened to a falling object on one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectOutcome {
    Caught,
    Escaped,
    Falling,
}

/// Moves one object down by `speed` and decides its fate.
///
/// The catch test runs before the escape test, so an object cannot be both.
pub fn resolve_object(
    object: &mut FallingObject,
    speed: i32,
    catcher_box: &Rect,
    screen_height: f32,
) -> ObjectOutcome {
    motion::fall(object, speed);

    if catcher_box.overlaps(&object.bounds()) {
        ObjectOutcome::Caught
    } else if object.y > screen_height {
        ObjectOutcome::Escaped
    } else {
        ObjectOutcome::Falling
    }
}
