//! winit application handler: window, event pump and frame loop

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use super::icon::window_icon;
use super::input::{RawInput, bindings};
use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::error::InitError;
use crate::game::Game;
use crate::renderer::{RenderState, TextPainter, Vertex, build_scene};
use crate::settings::LaunchOptions;
use crate::sim::{ScoreBoard, TickInput};

const WINDOW_TITLE: &str = "Pong";

pub struct App {
    options: LaunchOptions,
    text: Option<TextPainter>,
    input: RawInput,
    window: Option<Arc<Window>>,
    renderer: Option<RenderState>,
    game: Option<Game>,
    last_frame: Option<Instant>,
    error: Option<InitError>,
}

impl App {
    pub fn new(options: LaunchOptions, text: Option<TextPainter>) -> Self {
        Self {
            options,
            text,
            input: RawInput::new(),
            window: None,
            renderer: None,
            game: None,
            last_frame: None,
            error: None,
        }
    }

    /// Outcome once the event loop has returned
    pub fn finish(self) -> Result<ScoreBoard, InitError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.game.map(|g| g.state.score).unwrap_or_default()),
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: InitError) {
        log::error!("{}", err);
        self.error = Some(err);
        if let Some(game) = &mut self.game {
            game.request_stop();
        }
        event_loop.exit();
    }

    fn create_window(&self, event_loop: &ActiveEventLoop) -> Result<Arc<Window>, InitError> {
        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .with_resizable(self.options.resizable)
            .with_window_icon(window_icon());
        Ok(Arc::new(event_loop.create_window(attributes)?))
    }

    fn on_key(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };
        let pressed = event.state == ElementState::Pressed;

        if pressed && !event.repeat {
            match code {
                bindings::QUIT => {
                    log::info!("Escape pressed, quitting");
                    if let Some(game) = &mut self.game {
                        game.request_stop();
                    }
                }
                bindings::HELP => println!("{}", LaunchOptions::help_text()),
                _ => {}
            }
        }

        self.input.key(code, pressed);
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(game), Some(renderer)) = (&mut self.game, &mut self.renderer) else {
            return;
        };

        let now = Instant::now();
        let dt = self
            .last_frame
            .map(|last| now.duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_frame = Some(now);

        let text = self.text.as_ref().filter(|_| self.options.text_enabled());
        let input = self.input.snapshot();
        let Some(vertices) = next_frame(game, dt, &input, text, self.options.render_collisions)
        else {
            return;
        };

        let rendered = renderer.render(&vertices);
        match rendered {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("Surface lost, reconfiguring");
                if let Some(renderer) = &mut self.renderer {
                    renderer.reconfigure();
                }
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                self.fail(event_loop, InitError::Renderer("out of GPU memory".into()));
            }
            Err(wgpu::SurfaceError::Timeout) => log::debug!("Surface timeout, frame skipped"),
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

/// Advance `game` and build the frame to draw
///
/// Returns `None` once a stop was requested: neither physics nor rendering
/// runs after quit, even for a redraw already queued in the same event batch.
pub fn next_frame(
    game: &mut Game,
    dt: f32,
    input: &TickInput,
    text: Option<&TextPainter>,
    render_collisions: bool,
) -> Option<Vec<Vertex>> {
    if game.is_stopped() {
        return None;
    }
    game.advance(dt, input);
    Some(build_scene(&game.state, text, render_collisions))
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match self.create_window(event_loop) {
            Ok(window) => window,
            Err(err) => return self.fail(event_loop, err),
        };
        let renderer = match RenderState::new(window.clone(), self.options.vsync()) {
            Ok(renderer) => renderer,
            Err(err) => return self.fail(event_loop, err),
        };

        let (width, height) = renderer.size;
        log::info!("Window created: {}x{}", width, height);
        self.game = Some(Game::new(&self.options, width, height));
        self.renderer = Some(renderer);
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Window closed, quitting");
                if let Some(game) = &mut self.game {
                    game.request_stop();
                }
            }
            WindowEvent::KeyboardInput { event, .. } => self.on_key(&event),
            WindowEvent::CursorMoved { position, .. } => {
                self.input.pointer_moved(position.y as f32);
            }
            WindowEvent::Focused(false) => self.input.release_all(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
                if let Some(game) = &mut self.game {
                    if size.width > 0 && size.height > 0 {
                        game.resize(size.width, size.height);
                    }
                }
            }
            WindowEvent::RedrawRequested => self.frame(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.game.as_ref().is_some_and(Game::is_stopped) {
            event_loop.exit();
            return;
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;

    fn game() -> Game {
        Game::new(&LaunchOptions::default(), WINDOW_WIDTH, WINDOW_HEIGHT)
    }

    #[test]
    fn test_running_game_produces_frame() {
        let mut game = game();
        let vertices = next_frame(&mut game, SIM_DT, &TickInput::default(), None, false);
        assert!(vertices.is_some_and(|v| !v.is_empty()));
        assert_eq!(game.state.time_ticks, 1);
    }

    #[test]
    fn test_no_frame_after_stop() {
        let mut game = game();
        game.request_stop();
        let start = TickInput {
            start: true,
            ..Default::default()
        };

        assert!(next_frame(&mut game, 1.0, &start, None, true).is_none());
        assert_eq!(game.state.time_ticks, 0);
        assert!(!game.state.ball.is_moving());
    }
}
