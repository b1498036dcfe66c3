#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::components::{Catcher, FallingObject, Input};
    use crate::config::HorizontalInput;
    use crate::game::{GRAVITY, JUMP_POWER, MOVE_SPEED};
    use crate::motion::{
        advance_jump, clamp_horizontal, fall, jump_duration_ticks, steer, trigger_jump,
    };

    #[test]
    fn test_jump_returns_to_baseline_in_closed_form_ticks() {
        let mut catcher = Catcher::default();
        assert!(trigger_jump(&mut catcher));

        let mut ticks = 0;
        while catcher.airborne {
            advance_jump(&mut catcher);
            ticks += 1;
            assert!(ticks < 1000, "jump never landed");
        }

        assert_eq!(ticks, jump_duration_ticks(JUMP_POWER, GRAVITY));
        assert_eq!(ticks, 29);
        assert_eq!(catcher.vertical_offset, 0.0);
        assert_eq!(catcher.vertical_velocity, 0.0);
    }

    #[test]
    fn test_jump_duration_other_parameters() {
        // offset(n) = -10n + n(n + 1) first returns to zero at n = 9
        assert_eq!(jump_duration_ticks(-10.0, 2.0), 9);
        assert_eq!(jump_duration_ticks(-1.0, 1.0), 1);
        assert_eq!(jump_duration_ticks(5.0, 1.0), 1);
    }

    #[test]
    fn test_jump_peak() {
        let mut catcher = Catcher::default();
        trigger_jump(&mut catcher);

        let mut highest = 0.0_f32;
        while catcher.airborne {
            advance_jump(&mut catcher);
            highest = highest.min(catcher.vertical_offset);
        }

        // -14 - 13 - ... - 1
        assert_eq!(highest, -105.0);
    }

    #[test]
    fn test_no_double_jump() {
        let mut catcher = Catcher::default();
        assert!(trigger_jump(&mut catcher));
        advance_jump(&mut catcher);
        let velocity = catcher.vertical_velocity;

        assert!(!trigger_jump(&mut catcher));
        assert_eq!(catcher.vertical_velocity, velocity);
    }

    #[test]
    fn test_grounded_catcher_does_not_move_vertically() {
        let mut catcher = Catcher::default();
        advance_jump(&mut catcher);
        assert_eq!(catcher, Catcher::default());
    }

    #[test]
    fn test_pointer_steering_is_clamped() {
        let mut catcher = Catcher::default();
        let mut input = Input {
            pointer_x: Some(140.0),
            ..Input::default()
        };

        steer(&mut catcher, &input, HorizontalInput::Pointer, MOVE_SPEED);
        assert_eq!(catcher.x, 140.0);

        input.pointer_x = Some(20.0);
        steer(&mut catcher, &input, HorizontalInput::Pointer, MOVE_SPEED);
        assert_eq!(catcher.x, 100.0);

        input.pointer_x = Some(900.0);
        steer(&mut catcher, &input, HorizontalInput::Pointer, MOVE_SPEED);
        assert_eq!(catcher.x, 700.0);
    }

    #[test]
    fn test_pointer_mode_ignores_keys() {
        let mut catcher = Catcher::default();
        let input = Input {
            left: true,
            ..Input::default()
        };

        steer(&mut catcher, &input, HorizontalInput::Pointer, MOVE_SPEED);
        assert_eq!(catcher.x, 400.0);
    }

    #[test]
    fn test_key_mode_ignores_pointer() {
        let mut catcher = Catcher::default();
        let input = Input {
            left: true,
            pointer_x: Some(650.0),
            ..Input::default()
        };

        steer(&mut catcher, &input, HorizontalInput::Keys, MOVE_SPEED);
        assert_eq!(catcher.x, 393.0);

        // Both held cancel out
        let both = Input {
            left: true,
            right: true,
            ..Input::default()
        };
        steer(&mut catcher, &both, HorizontalInput::Keys, MOVE_SPEED);
        assert_eq!(catcher.x, 393.0);
    }

    #[test]
    fn test_key_mode_stops_at_edge() {
        let mut catcher = Catcher {
            x: 103.0,
            ..Catcher::default()
        };
        let input = Input {
            left: true,
            ..Input::default()
        };

        steer(&mut catcher, &input, HorizontalInput::Keys, MOVE_SPEED);
        assert_eq!(catcher.x, 100.0);
        assert_eq!(clamp_horizontal(700.5), 700.0);
    }

    #[test]
    fn test_fall_moves_straight_down() {
        let mut object = FallingObject::new(100.0, -40.0, 40.0, 40.0);
        fall(&mut object, 25);
        assert_eq!((object.x, object.y), (100.0, -15.0));
    }
}
