#![warn(clippy::all, clippy::pedantic)]

use crate::components::{Catcher, FallingObject, Input};
use crate::config::HorizontalInput;
use crate::game::{CATCHER_EDGE_MARGIN, GRAVITY, JUMP_POWER, SCREEN_WIDTH};

/// Starts a jump if the catcher is on the ground. Returns whether it did.
pub fn trigger_jump(catcher: &mut Catcher) -> bool {
    if catcher.airborne {
        return false;
    }
    catcher.vertical_velocity = JUMP_POWER;
    catcher.airborne = true;
    true
}

/// One tick of the jump arc. Does nothing while grounded.
pub fn advance_jump(catcher: &mut Catcher) {
    if !catcher.airborne {
        return;
    }

    catcher.vertical_velocity += GRAVITY;
    catcher.vertical_offset += catcher.vertical_velocity;

    if catcher.vertical_offset >= 0.0 {
        catcher.vertical_offset = 0.0;
        catcher.vertical_velocity = 0.0;
        catcher.airborne = false;
    }
}

/// Ticks from take-off until the catcher is back at rest.
///
/// After `n` ticks the offset is `n * power + g * n * (n + 1) / 2`, which
/// first reaches zero at `n = -2 * power / g - 1` (rounded up).
#[must_use]
pub fn jump_duration_ticks(power: f32, gravity: f32) -> u32 {
    if power >= 0.0 || gravity <= 0.0 {
        return 1;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let ticks = (-2.0 * power / gravity - 1.0).ceil().max(1.0) as u32;
    ticks
}

/// Keeps the catcher's sprites on screen
#[must_use]
pub fn clamp_horizontal(x: f32) -> f32 {
    x.clamp(CATCHER_EDGE_MARGIN, SCREEN_WIDTH - CATCHER_EDGE_MARGIN)
}

/// Applies this frame's horizontal intent from the configured source only.
pub fn steer(catcher: &mut Catcher, input: &Input, source: HorizontalInput, move_speed: f32) {
    let x = match source {
        HorizontalInput::Pointer => match input.pointer_x {
            Some(pointer_x) => pointer_x,
            None => catcher.x,
        },
        HorizontalInput::Keys => {
            let mut x = catcher.x;
            if input.left {
                x -= move_speed;
            }
            if input.right {
                x += move_speed;
            }
            x
        }
    };
    catcher.x = clamp_horizontal(x);
}

/// Moves a falling object straight down
pub fn fall(object: &mut FallingObject, speed: i32) {
    #[allow(clippy::cast_precision_loss)]
    {
        object.y += speed as f32;
    }
}
