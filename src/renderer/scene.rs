//! Frame contents
//!
//! Builds the whole frame as pixel-space triangles from a read-only view of
//! the game state. No GPU access, so it is testable headless.

use glam::Vec2;

use super::shapes::{CIRCLE_SEGMENTS, circle, rect, rect_outline};
use super::text::TextPainter;
use super::vertex::{Vertex, colors};
use crate::sim::GameState;

/// Distance of the score labels from the top/side edges
const LABEL_MARGIN: Vec2 = Vec2::new(20.0, 10.0);
/// Room reserved for the right-hand label
const RIGHT_LABEL_WIDTH: f32 = 200.0;
/// Width of the collision box outlines
const OUTLINE_WIDTH: f32 = 1.0;

/// Score labels and their top-left positions
pub fn score_labels(state: &GameState) -> [(String, Vec2); 2] {
    [
        (
            format!("Player 1 Score: {}", state.score.left),
            LABEL_MARGIN,
        ),
        (
            format!("Player 2 Score: {}", state.score.right),
            Vec2::new(
                state.field.width - LABEL_MARGIN.x - RIGHT_LABEL_WIDTH,
                LABEL_MARGIN.y,
            ),
        ),
    ]
}

/// Vertices for one frame: ball, paddles, optional text, optional collision boxes
pub fn build_scene(
    state: &GameState,
    text: Option<&TextPainter>,
    render_collisions: bool,
) -> Vec<Vertex> {
    let mut vertices = circle(
        state.ball.pos,
        state.ball.radius,
        colors::BALL,
        CIRCLE_SEGMENTS,
    );

    for paddle in &state.paddles {
        vertices.extend(rect(paddle.pos, paddle.size, colors::PADDLE));
    }

    if let Some(painter) = text {
        for (label, origin) in score_labels(state) {
            vertices.extend(painter.mesh(&label, origin, colors::TEXT));
        }
    }

    if render_collisions {
        vertices.extend(rect_outline(
            &state.ball.collision_box(),
            OUTLINE_WIDTH,
            colors::COLLISION,
        ));
        for paddle in &state.paddles {
            vertices.extend(rect_outline(
                &paddle.collision_box(),
                OUTLINE_WIDTH,
                colors::COLLISION,
            ));
        }
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Field, PaddleControl};

    fn state() -> GameState {
        GameState::new(Field::new(700, 450), [PaddleControl::Computer; 2])
    }

    #[test]
    fn test_scene_without_extras() {
        let v = build_scene(&state(), None, false);
        // Ball fan plus two paddle quads
        assert_eq!(v.len(), (CIRCLE_SEGMENTS * 3) as usize + 12);
        assert!(v.iter().all(|p| p.color == colors::BALL));
    }

    #[test]
    fn test_collision_overlay_is_red() {
        let v = build_scene(&state(), None, true);
        let red = v.iter().filter(|p| p.color == colors::COLLISION).count();
        assert_eq!(red, 3 * 24);
    }

    #[test]
    fn test_score_labels() {
        let mut s = state();
        s.score.left = 3;
        s.score.right = 12;
        let [(left, left_at), (right, right_at)] = score_labels(&s);
        assert_eq!(left, "Player 1 Score: 3");
        assert_eq!(right, "Player 2 Score: 12");
        assert_eq!(left_at, Vec2::new(20.0, 10.0));
        assert_eq!(right_at, Vec2::new(480.0, 10.0));
    }
}
