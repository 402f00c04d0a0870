//! Game state and core simulation types
//!
//! Everything the simulation reads or writes lives in [`GameState`]; there is no
//! ambient global state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Aabb, ball_box, paddle_box};
use crate::consts::*;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Ball parked at the centre, waiting for the start key
    Serve,
    /// Ball in play
    Playing,
}

/// Screen side a paddle defends; the discriminant matches the ball's horizontal direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left = -1,
    Right = 1,
}

impl Side {
    /// Direction sign (-1 left, +1 right)
    #[inline]
    pub fn sign(self) -> i8 {
        self as i8
    }
}

/// How a paddle is driven, chosen once when the paddle is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddleControl {
    /// Keyboard, or the mouse pointer when `mouse` is set
    Human { mouse: bool },
    /// Ball-tracking computer policy
    Computer,
}

impl PaddleControl {
    pub fn is_human(&self) -> bool {
        matches!(self, PaddleControl::Human { .. })
    }
}

/// Playing field, tracks the window's inner size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Centre position
    pub pos: Vec2,
    /// Horizontal direction, always -1, 0 or 1
    pub dir_x: i8,
    /// Vertical direction, always -1, 0 or 1
    pub dir_y: i8,
    pub radius: f32,
}

impl Ball {
    /// Stationary ball at the centre of the field
    pub fn centered(field: &Field) -> Self {
        Self {
            pos: field.center(),
            dir_x: 0,
            dir_y: 0,
            radius: BALL_RADIUS,
        }
    }

    pub fn is_moving(&self) -> bool {
        self.dir_x != 0 || self.dir_y != 0
    }

    /// Current hit-box
    pub fn collision_box(&self) -> Aabb {
        ball_box(self.pos, self.radius)
    }

    /// Hit-box one step ahead; only horizontal motion is projected
    pub fn lookahead_box(&self) -> Aabb {
        self.collision_box()
            .translated(Vec2::new(BALL_LOOKAHEAD * self.dir_x as f32, 0.0))
    }
}

/// A paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Identity (0 or 1), selects key and mouse bindings
    pub id: u8,
    pub side: Side,
    pub control: PaddleControl,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Paddle {
    /// New paddle at the vertical centre of its side
    pub fn new(id: u8, side: Side, control: PaddleControl, field: &Field) -> Self {
        let size = Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT);
        let mut paddle = Self {
            id,
            side,
            control,
            pos: Vec2::new(0.0, field.height / 2.0 - size.y / 2.0),
            size,
        };
        paddle.snap_to_side(field);
        paddle
    }

    /// Recompute x from the side and the current field width
    pub fn snap_to_side(&mut self, field: &Field) {
        self.pos.x = match self.side {
            Side::Left => PADDLE_MARGIN,
            Side::Right => field.width - self.size.x - PADDLE_MARGIN,
        };
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    pub fn collision_box(&self) -> Aabb {
        paddle_box(self.pos, self.size)
    }
}

/// Points per side; lives for the whole session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub left: u32,
    pub right: u32,
}

impl ScoreBoard {
    /// Award a point to `side`
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub field: Field,
    pub phase: RoundPhase,
    pub ball: Ball,
    /// Left paddle (id 0) then right paddle (id 1)
    pub paddles: [Paddle; 2],
    pub score: ScoreBoard,
    /// Scales ball displacement per tick, grows on paddle hits
    pub speed_multiplier: f32,
    /// Control type of each paddle, reapplied on every reset
    pub lineup: [PaddleControl; 2],
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Rounds started so far (including the current one)
    pub round: u32,
}

impl GameState {
    /// Create a fresh session with the given field size and paddle lineup
    pub fn new(field: Field, lineup: [PaddleControl; 2]) -> Self {
        let mut state = Self {
            field,
            phase: RoundPhase::Serve,
            ball: Ball::centered(&field),
            paddles: [
                Paddle::new(0, Side::Left, lineup[0], &field),
                Paddle::new(1, Side::Right, lineup[1], &field),
            ],
            score: ScoreBoard::default(),
            speed_multiplier: BASE_SPEED_MULTIPLIER,
            lineup,
            time_ticks: 0,
            round: 0,
        };
        state.reset();
        state
    }

    /// Start a new round: centred stationary ball, centred paddles, baseline
    /// multiplier. Scores are kept.
    pub fn reset(&mut self) {
        self.ball = Ball::centered(&self.field);
        self.paddles = [
            Paddle::new(0, Side::Left, self.lineup[0], &self.field),
            Paddle::new(1, Side::Right, self.lineup[1], &self.field),
        ];
        self.speed_multiplier = BASE_SPEED_MULTIPLIER;
        self.phase = RoundPhase::Serve;
        self.round += 1;
    }

    /// Serve the ball toward the left paddle; no-op once the round is running
    pub fn serve(&mut self) -> bool {
        if self.phase != RoundPhase::Serve {
            return false;
        }
        self.phase = RoundPhase::Playing;
        self.ball.dir_x = -1;
        self.ball.dir_y = -1;
        true
    }

    /// Track a window resize; paddles pick up the new width on the next tick
    pub fn resize(&mut self, width: u32, height: u32) {
        self.field = Field::new(width, height);
    }

    /// Adjust the multiplier from a hotkey, never going below the floor
    pub fn nudge_speed(&mut self, delta: f32) {
        self.speed_multiplier = (self.speed_multiplier + delta).max(MIN_SPEED_MULTIPLIER);
    }
}
