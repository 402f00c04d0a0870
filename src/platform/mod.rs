//! Desktop platform layer
//!
//! Brings the backend up in a fixed order (event loop, font, window,
//! renderer), pumps winit events into the game and hands back the final
//! score once the player quits.

pub mod app;
pub mod icon;
pub mod input;

use winit::event_loop::{ControlFlow, EventLoop};

use crate::consts::FONT_SIZE;
use crate::error::InitError;
use crate::renderer::TextPainter;
use crate::settings::{LaunchOptions, font_path};
use crate::sim::ScoreBoard;

pub use app::App;
pub use input::RawInput;

/// Run the game until the player quits
pub fn run(options: LaunchOptions) -> Result<ScoreBoard, InitError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let text = if options.text_enabled() {
        TextPainter::load(&font_path(), FONT_SIZE)
    } else {
        None
    };

    let mut app = App::new(options, text);
    event_loop.run_app(&mut app)?;
    app.finish()
}
