//! Paddle control: human input mapping and the computer tracking policy
//!
//! The two policies clamp differently and on purpose: a human key step that
//! would leave the field is refused, while a computer paddle is pulled back to
//! the nearest legal position.

use super::state::{Ball, Field, Paddle, PaddleControl};
use super::tick::{PaddleKeys, TickInput};
use crate::consts::{COMPUTER_EDGE_GAP, PADDLE_STEP};

/// Move one paddle for this tick according to its control type
pub fn drive_paddle(paddle: &mut Paddle, ball: &Ball, input: &TickInput, field: &Field) {
    match paddle.control {
        PaddleControl::Human { mouse: true } => {
            if let Some(pointer_y) = input.pointer_y {
                follow_pointer(paddle, pointer_y);
            }
        }
        PaddleControl::Human { mouse: false } => {
            let keys = input.keys.get(paddle.id as usize).copied().unwrap_or_default();
            step_keys(paddle, keys, field);
        }
        PaddleControl::Computer => track_ball(paddle, ball, field),
    }

    // Paddles follow window resizes
    paddle.snap_to_side(field);
}

/// Centre the paddle on the pointer. Not clamped: the paddle may leave the field.
pub fn follow_pointer(paddle: &mut Paddle, pointer_y: f32) {
    paddle.pos.y = pointer_y - paddle.size.y / 2.0;
}

/// Step up and/or down by [`PADDLE_STEP`], refusing any step that would push
/// the paddle past the top or bottom of the field
pub fn step_keys(paddle: &mut Paddle, keys: PaddleKeys, field: &Field) {
    if keys.up && paddle.pos.y - PADDLE_STEP >= 0.0 {
        paddle.pos.y -= PADDLE_STEP;
    }
    if keys.down && paddle.pos.y + paddle.size.y + PADDLE_STEP <= field.height {
        paddle.pos.y += PADDLE_STEP;
    }
}

/// Computer policy: only reacts while the ball travels toward this paddle's
/// side, then centres on `ball.y + step * dir_y`. The result is pulled into
/// `[gap, height - paddle - gap]`; if the field is too small for that range the
/// bottom bound wins.
pub fn track_ball(paddle: &mut Paddle, ball: &Ball, field: &Field) {
    if ball.dir_x == paddle.side.sign() {
        let target = ball.pos.y + PADDLE_STEP * ball.dir_y as f32;
        paddle.pos.y = target - paddle.size.y / 2.0;
    }

    let top = COMPUTER_EDGE_GAP;
    let bottom = field.height - paddle.size.y - COMPUTER_EDGE_GAP;
    if paddle.pos.y < top {
        paddle.pos.y = top;
    }
    if paddle.pos.y > bottom {
        paddle.pos.y = bottom;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Side;
    use glam::Vec2;
    use proptest::prelude::*;

    fn field() -> Field {
        Field::new(700, 450)
    }

    fn paddle(side: Side, control: PaddleControl) -> Paddle {
        let id = if side == Side::Left { 0 } else { 1 };
        Paddle::new(id, side, control, &field())
    }

    fn moving_ball(y: f32, dir_x: i8, dir_y: i8) -> Ball {
        let mut ball = Ball::centered(&field());
        ball.pos.y = y;
        ball.dir_x = dir_x;
        ball.dir_y = dir_y;
        ball
    }

    #[test]
    fn test_keys_move_by_step() {
        let mut p = paddle(Side::Left, PaddleControl::Human { mouse: false });
        let start = p.pos.y;
        step_keys(&mut p, PaddleKeys { up: true, down: false }, &field());
        assert_eq!(p.pos.y, start - 5.0);
        step_keys(&mut p, PaddleKeys { up: false, down: true }, &field());
        assert_eq!(p.pos.y, start);
    }

    #[test]
    fn test_keys_refuse_move_past_top() {
        let mut p = paddle(Side::Left, PaddleControl::Human { mouse: false });
        p.pos.y = 3.0;
        step_keys(&mut p, PaddleKeys { up: true, down: false }, &field());
        assert_eq!(p.pos.y, 3.0);
    }

    #[test]
    fn test_keys_refuse_move_past_bottom() {
        let mut p = paddle(Side::Left, PaddleControl::Human { mouse: false });
        p.pos.y = 450.0 - 150.0 - 2.0;
        step_keys(&mut p, PaddleKeys { up: false, down: true }, &field());
        assert_eq!(p.pos.y, 298.0);
    }

    #[test]
    fn test_pointer_is_not_clamped() {
        let mut p = paddle(Side::Right, PaddleControl::Human { mouse: true });
        follow_pointer(&mut p, 10.0);
        assert_eq!(p.pos.y, -65.0);
    }

    #[test]
    fn test_mouse_paddle_ignores_keys() {
        let mut p = paddle(Side::Left, PaddleControl::Human { mouse: true });
        let input = TickInput {
            keys: [PaddleKeys { up: true, down: false }; 2],
            pointer_y: Some(300.0),
            ..Default::default()
        };
        drive_paddle(&mut p, &Ball::centered(&field()), &input, &field());
        assert_eq!(p.pos.y, 225.0);
    }

    #[test]
    fn test_key_bindings_follow_identity() {
        let mut right = paddle(Side::Right, PaddleControl::Human { mouse: false });
        let start = right.pos.y;
        let input = TickInput {
            keys: [
                PaddleKeys { up: true, down: false },
                PaddleKeys { up: false, down: true },
            ],
            ..Default::default()
        };
        drive_paddle(&mut right, &Ball::centered(&field()), &input, &field());
        assert_eq!(right.pos.y, start + 5.0);
    }

    #[test]
    fn test_computer_holds_when_ball_moves_away() {
        let mut p = paddle(Side::Right, PaddleControl::Computer);
        let start = p.pos.y;
        track_ball(&mut p, &moving_ball(40.0, -1, 1), &field());
        assert_eq!(p.pos.y, start);
    }

    #[test]
    fn test_computer_tracks_incoming_ball() {
        let mut p = paddle(Side::Right, PaddleControl::Computer);
        track_ball(&mut p, &moving_ball(200.0, 1, 1), &field());
        assert_eq!(p.center_y(), 205.0);

        let mut left = paddle(Side::Left, PaddleControl::Computer);
        track_ball(&mut left, &moving_ball(200.0, -1, -1), &field());
        assert_eq!(left.center_y(), 195.0);
    }

    #[test]
    fn test_computer_snaps_to_boundary() {
        let mut p = paddle(Side::Left, PaddleControl::Computer);
        track_ball(&mut p, &moving_ball(0.0, -1, -1), &field());
        assert_eq!(p.pos.y, 6.0);

        track_ball(&mut p, &moving_ball(449.0, -1, 1), &field());
        assert_eq!(p.pos.y, 450.0 - 150.0 - 6.0);
    }

    #[test]
    fn test_drive_paddle_tracks_resized_width() {
        let mut p = paddle(Side::Right, PaddleControl::Computer);
        let wide = Field::new(900, 450);
        drive_paddle(&mut p, &Ball::centered(&wide), &TickInput::default(), &wide);
        assert_eq!(p.pos, Vec2::new(900.0 - 25.0, 150.0));
    }

    proptest! {
        #[test]
        fn prop_computer_stays_in_range(
            ball_y in -2000.0f32..2000.0,
            dir_y in -1i8..=1,
            start_y in -2000.0f32..2000.0,
        ) {
            let mut p = paddle(Side::Right, PaddleControl::Computer);
            p.pos.y = start_y;
            track_ball(&mut p, &moving_ball(ball_y, 1, dir_y), &field());
            prop_assert!(p.pos.y >= 6.0);
            prop_assert!(p.pos.y <= 450.0 - 150.0 - 6.0);
        }

        #[test]
        fn prop_keys_stay_in_field(
            start_y in 0i32..=300,
            up in any::<bool>(),
            down in any::<bool>(),
        ) {
            let mut p = paddle(Side::Left, PaddleControl::Human { mouse: false });
            p.pos.y = start_y as f32;
            step_keys(&mut p, PaddleKeys { up, down }, &field());
            prop_assert!(p.pos.y >= 0.0);
            prop_assert!(p.pos.y + p.size.y <= 450.0);
        }
    }
}
