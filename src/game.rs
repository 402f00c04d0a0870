//! Game scheduler
//!
//! Owns the live [`GameState`] and turns variable frame times into whole
//! simulation ticks with a fixed-timestep accumulator, so ball speed no longer
//! depends on the display's refresh rate.

use crate::consts::{MAX_FRAME_TIME, MAX_SUBSTEPS, SIM_DT};
use crate::settings::LaunchOptions;
use crate::sim::{Field, GameState, TickEvents, TickInput, tick};

/// The running game: state, timestep accumulator and stop flag
#[derive(Debug)]
pub struct Game {
    pub state: GameState,
    accumulator: f32,
    stopped: bool,
}

impl Game {
    pub fn new(options: &LaunchOptions, width: u32, height: u32) -> Self {
        Self {
            state: GameState::new(Field::new(width, height), options.lineup()),
            accumulator: 0.0,
            stopped: false,
        }
    }

    /// Ask the loop to stop; takes effect at the next frame boundary
    pub fn request_stop(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Window inner size changed
    pub fn resize(&mut self, width: u32, height: u32) {
        self.state.resize(width, height);
    }

    /// Run as many fixed ticks as `frame_dt` seconds allow
    ///
    /// Returns the events of every tick that ran. Nothing runs once a stop was
    /// requested.
    pub fn advance(&mut self, frame_dt: f32, input: &TickInput) -> Vec<TickEvents> {
        if self.stopped {
            return Vec::new();
        }

        let dt = frame_dt.clamp(0.0, MAX_FRAME_TIME);
        self.accumulator += dt;

        let mut ran = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            ran.push(tick(&mut self.state, input));
            self.accumulator -= SIM_DT;
            substeps += 1;
        }

        // Drop time we could not catch up on instead of carrying it forever
        if substeps == MAX_SUBSTEPS && self.accumulator >= SIM_DT {
            self.accumulator = 0.0;
        }

        ran
    }
}
