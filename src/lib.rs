//! Pong - a classic two-paddle ball game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, paddle control, tick)
//! - `game`: Fixed-timestep scheduler that owns the live game state
//! - `renderer`: wgpu rendering pipeline and mesh builders
//! - `platform`: Native window, event loop and raw input capture
//! - `settings`: Command-line launch options
//! - `error`: Initialization failures and process exit codes

pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{ExitStatus, InitError};
pub use game::Game;
pub use settings::LaunchOptions;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, the refresh rate the tuning was made for)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame time fed to the accumulator (seconds)
    pub const MAX_FRAME_TIME: f32 = 0.25;

    /// Initial window size in pixels
    pub const WINDOW_WIDTH: u32 = 700;
    pub const WINDOW_HEIGHT: u32 = 450;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 15.0;
    /// Hit-box side is `radius * BALL_BOX_SCALE`, top-left offset is `radius / BALL_BOX_SCALE`
    pub const BALL_BOX_SCALE: f32 = 1.5;
    /// Horizontal look-ahead for paddle hits (pixels per unit of direction)
    pub const BALL_LOOKAHEAD: f32 = 5.0;
    /// Tolerance for top/bottom edge hits
    pub const EDGE_TOLERANCE: f32 = 1.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 150.0;
    /// Gap between a paddle and its side of the window
    pub const PADDLE_MARGIN: f32 = 10.0;
    /// Keyboard step and computer look-ahead (pixels per tick)
    pub const PADDLE_STEP: f32 = 5.0;
    /// Computer paddles are kept this far from the top/bottom edges
    pub const COMPUTER_EDGE_GAP: f32 = 6.0;

    /// Speed multiplier at the start of every round
    pub const BASE_SPEED_MULTIPLIER: f32 = 3.0;
    /// Added to the multiplier on every paddle hit
    pub const PADDLE_HIT_BOOST: f32 = 0.15;
    /// Hotkey adjustment per tick while F2/F3 is held
    pub const SPEED_HOTKEY_STEP: f32 = 0.5;
    /// Hotkeys cannot push the multiplier below this (keeps both axes moving forward)
    pub const MIN_SPEED_MULTIPLIER: f32 = 1.5;

    /// Score text
    pub const FONT_SIZE: f32 = 20.0;
    pub const DEFAULT_FONT_PATH: &str = "/usr/share/fonts/TTF/Hack-Regular.ttf";
    pub const FONT_ENV_VAR: &str = "PONG_FONT";
}
