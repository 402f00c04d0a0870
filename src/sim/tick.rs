//! Fixed timestep simulation tick
//!
//! One call to [`tick`] advances the game by exactly one step, in this order:
//! paddles, serve and speed hotkeys, then the ball resolver. The resolver's
//! internal order is part of the game's behaviour (edge bounces win over paddle
//! bounces in the same tick), so do not reorder it.

use glam::Vec2;

use super::control::drive_paddle;
use super::state::{GameState, Side};
use crate::consts::*;

/// Held state of one paddle's up/down keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleKeys {
    pub up: bool,
    pub down: bool,
}

/// Input snapshot for a single tick (deterministic)
///
/// Everything here is level-triggered: a key that stays held acts on every
/// tick it is held.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Key pairs indexed by paddle id (W/S for 0, Up/Down for 1)
    pub keys: [PaddleKeys; 2],
    /// Pointer y in field pixels, if the pointer has been seen
    pub pointer_y: Option<f32>,
    /// Start-round key
    pub start: bool,
    /// Decrease speed multiplier
    pub speed_down: bool,
    /// Increase speed multiplier
    pub speed_up: bool,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// The ball was served this tick
    pub served: bool,
    /// The ball bounced off the top or bottom edge
    pub edge_bounce: bool,
    /// The ball bounced off a paddle
    pub paddle_bounce: bool,
    /// A side scored and the round was reset
    pub goal: Option<Side>,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) -> TickEvents {
    let mut events = TickEvents::default();
    state.time_ticks += 1;

    // Paddles
    {
        let GameState {
            paddles,
            ball,
            field,
            ..
        } = state;
        for paddle in paddles.iter_mut() {
            drive_paddle(paddle, ball, input, field);
        }
    }

    // Serve (only once per round)
    if input.start && state.serve() {
        log::info!("Round {} served", state.round);
        events.served = true;
    }

    // Speed hotkeys repeat every tick while held
    if input.speed_down {
        state.nudge_speed(-SPEED_HOTKEY_STEP);
        log::debug!("Speed multiplier: {:.2}", state.speed_multiplier);
    }
    if input.speed_up {
        state.nudge_speed(SPEED_HOTKEY_STEP);
        log::debug!("Speed multiplier: {:.2}", state.speed_multiplier);
    }

    resolve_ball(state, &mut events);
    events
}

/// Collision detection, bounce response, integration and goal check
pub fn resolve_ball(state: &mut GameState, events: &mut TickEvents) {
    // 1-2. Horizontal look-ahead against both paddles
    let ahead = state.ball.lookahead_box();
    let paddle_hit = state
        .paddles
        .iter()
        .any(|p| ahead.intersects(&p.collision_box()));

    // 3. Top/bottom edges, checked on the ball centre
    let y = state.ball.pos.y;
    let edge_hit = y - EDGE_TOLERANCE < 0.0 || y + EDGE_TOLERANCE > state.field.height;

    // 4-5. Edge response masks a simultaneous paddle hit
    if edge_hit {
        state.ball.dir_y = -state.ball.dir_y;
        events.edge_bounce = true;
    } else if paddle_hit {
        state.ball.dir_x = -state.ball.dir_x;
        state.speed_multiplier += PADDLE_HIT_BOOST;
        events.paddle_bounce = true;
        log::debug!("Paddle hit, speed multiplier {:.2}", state.speed_multiplier);
    }

    // 6. Integrate; vertical speed is one less than horizontal
    state.ball.pos += displacement(state.ball.dir_x, state.ball.dir_y, state.speed_multiplier);

    // 7. Goal lines
    let scorer = if state.ball.pos.x < 0.0 {
        Some(Side::Right)
    } else if state.ball.pos.x > state.field.width {
        Some(Side::Left)
    } else {
        None
    };

    if let Some(side) = scorer {
        state.score.award(side);
        log::info!(
            "Goal for {:?} side, score {} - {}",
            side,
            state.score.left,
            state.score.right
        );
        state.reset();
        events.goal = Some(side);
    }
}

/// Ball displacement for one tick
#[inline]
pub fn displacement(dir_x: i8, dir_y: i8, multiplier: f32) -> Vec2 {
    let mut delta = Vec2::ZERO;
    if dir_x != 0 {
        delta.x = dir_x as f32 * multiplier;
    }
    if dir_y != 0 {
        delta.y = dir_y as f32 * (multiplier - 1.0);
    }
    delta
}
