//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - No randomness (serves always go left)
//! - No rendering or platform dependencies

pub mod control;
pub mod geometry;
pub mod state;
pub mod tick;

pub use geometry::{Aabb, ball_box, intersects, paddle_box};
pub use state::{
    Ball, Field, GameState, Paddle, PaddleControl, RoundPhase, ScoreBoard, Side,
};
pub use tick::{PaddleKeys, TickEvents, TickInput, displacement, resolve_ball, tick};
