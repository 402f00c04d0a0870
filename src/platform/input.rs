//! Raw keyboard and pointer state
//!
//! The event handlers record which keys are held and where the pointer is;
//! once per frame that raw state becomes a [`TickInput`] for the simulation.

use std::collections::HashSet;

use winit::keyboard::KeyCode;

use crate::sim::{PaddleKeys, TickInput};

/// Key bindings
pub mod bindings {
    use winit::keyboard::KeyCode;

    pub const PLAYER1_UP: KeyCode = KeyCode::KeyW;
    pub const PLAYER1_DOWN: KeyCode = KeyCode::KeyS;
    pub const PLAYER2_UP: KeyCode = KeyCode::ArrowUp;
    pub const PLAYER2_DOWN: KeyCode = KeyCode::ArrowDown;
    pub const START: KeyCode = KeyCode::Space;
    pub const QUIT: KeyCode = KeyCode::Escape;
    pub const HELP: KeyCode = KeyCode::F1;
    pub const SLOWER: KeyCode = KeyCode::F2;
    pub const FASTER: KeyCode = KeyCode::F3;
}

/// Held keys and last pointer position
#[derive(Debug, Default)]
pub struct RawInput {
    held: HashSet<KeyCode>,
    pointer_y: Option<f32>,
}

impl RawInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press or release
    pub fn key(&mut self, code: KeyCode, pressed: bool) {
        if pressed {
            self.held.insert(code);
        } else {
            self.held.remove(&code);
        }
    }

    pub fn is_held(&self, code: KeyCode) -> bool {
        self.held.contains(&code)
    }

    /// Pointer moved to window y (pixels)
    pub fn pointer_moved(&mut self, y: f32) {
        self.pointer_y = Some(y);
    }

    /// Forget held keys, e.g. when the window loses focus and releases go elsewhere
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Input for the simulation ticks of this frame
    pub fn snapshot(&self) -> TickInput {
        use bindings::*;
        TickInput {
            keys: [
                PaddleKeys {
                    up: self.is_held(PLAYER1_UP),
                    down: self.is_held(PLAYER1_DOWN),
                },
                PaddleKeys {
                    up: self.is_held(PLAYER2_UP),
                    down: self.is_held(PLAYER2_DOWN),
                },
            ],
            pointer_y: self.pointer_y,
            start: self.is_held(START),
            speed_down: self.is_held(SLOWER),
            speed_up: self.is_held(FASTER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_maps_bindings() {
        let mut input = RawInput::new();
        input.key(KeyCode::KeyW, true);
        input.key(KeyCode::ArrowDown, true);
        input.key(KeyCode::F3, true);
        input.pointer_moved(120.0);

        let tick = input.snapshot();
        assert_eq!(tick.keys[0], PaddleKeys { up: true, down: false });
        assert_eq!(tick.keys[1], PaddleKeys { up: false, down: true });
        assert!(tick.speed_up);
        assert!(!tick.speed_down);
        assert!(!tick.start);
        assert_eq!(tick.pointer_y, Some(120.0));
    }

    #[test]
    fn test_release_and_focus_loss() {
        let mut input = RawInput::new();
        input.key(KeyCode::Space, true);
        assert!(input.snapshot().start);
        input.key(KeyCode::Space, false);
        assert!(!input.snapshot().start);

        input.key(KeyCode::KeyS, true);
        input.release_all();
        assert_eq!(input.snapshot().keys[0], PaddleKeys::default());
    }

    #[test]
    fn test_pointer_unknown_until_moved() {
        assert_eq!(RawInput::new().snapshot().pointer_y, None);
    }
}
