//! Window icon: a small yellow ball on a transparent background

use winit::window::Icon;

use crate::renderer::vertex::colors;

pub const ICON_SIZE: u32 = 16;
const ICON_RADIUS: i32 = 6;

/// RGBA8 pixels, row-major
pub fn icon_rgba() -> Vec<u8> {
    let color = colors::ICON.map(|c| (c * 255.0).round() as u8);
    let center = (ICON_SIZE / 2) as i32;

    let mut pixels = vec![0u8; (ICON_SIZE * ICON_SIZE * 4) as usize];
    for (i, px) in pixels.chunks_exact_mut(4).enumerate() {
        let x = (i as u32 % ICON_SIZE) as i32 - center;
        let y = (i as u32 / ICON_SIZE) as i32 - center;
        if x * x + y * y <= ICON_RADIUS * ICON_RADIUS {
            px.copy_from_slice(&color);
        }
    }
    pixels
}

pub fn window_icon() -> Option<Icon> {
    match Icon::from_rgba(icon_rgba(), ICON_SIZE, ICON_SIZE) {
        Ok(icon) => Some(icon),
        Err(e) => {
            log::warn!("Window icon rejected: {}", e);
            None
        }
    }
}
