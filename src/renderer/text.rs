//! Score text
//!
//! Glyphs are rasterized on the CPU with rusttype and emitted as one-pixel
//! quads whose alpha is the glyph coverage, so text goes through the same
//! colored-triangle pipeline as everything else.

use std::path::Path;

use glam::Vec2;
use rusttype::{Font, Scale, point};

use super::shapes::rect;
use super::vertex::Vertex;

/// A loaded font at a fixed pixel size
pub struct TextPainter {
    font: Font<'static>,
    scale: Scale,
}

impl std::fmt::Debug for TextPainter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextPainter")
            .field("scale", &self.scale)
            .finish_non_exhaustive()
    }
}

impl TextPainter {
    /// Load the font at `path`
    ///
    /// Any failure (missing, unreadable or not a font) is logged and returns
    /// `None`; the game then runs without text.
    pub fn load(path: &Path, size: f32) -> Option<Self> {
        let font = match std::fs::read(path) {
            Ok(bytes) => Font::try_from_vec(bytes),
            Err(e) => {
                log::warn!(
                    "Failed to load font {}: {} (text rendering disabled)",
                    path.display(),
                    e
                );
                return None;
            }
        };
        let Some(font) = font else {
            log::warn!(
                "Failed to load font {}: not a TrueType/OpenType font (text rendering disabled)",
                path.display()
            );
            return None;
        };

        log::info!("Loaded font {}", path.display());
        Some(Self {
            font,
            scale: Scale::uniform(size),
        })
    }

    /// Quads for `text` with its top-left corner at `origin`
    pub fn mesh(&self, text: &str, origin: Vec2, color: [f32; 4]) -> Vec<Vertex> {
        let ascent = self.font.v_metrics(self.scale).ascent;
        let start = point(origin.x, origin.y + ascent);

        let mut vertices = Vec::new();
        for glyph in self.font.layout(text, self.scale, start) {
            let Some(bounds) = glyph.pixel_bounding_box() else {
                continue; // whitespace
            };
            glyph.draw(|x, y, coverage| {
                if coverage <= 0.0 {
                    return;
                }
                let pixel = Vec2::new((bounds.min.x + x as i32) as f32, (bounds.min.y + y as i32) as f32);
                let mut shade = color;
                shade[3] *= coverage.min(1.0);
                vertices.extend(rect(pixel, Vec2::ONE, shade));
            });
        }
        vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_file(name: &str, contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("pong-{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_missing_font_disables_text() {
        let path = std::env::temp_dir().join("pong-definitely-not-here.ttf");
        assert!(TextPainter::load(&path, 20.0).is_none());
    }

    #[test]
    fn test_garbage_font_disables_text() {
        let path = scratch_file("garbage.ttf", b"this is not a font");
        assert!(TextPainter::load(&path, 20.0).is_none());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_unreadable_font_disables_text() {
        // A directory exists but cannot be read as a file
        let dir = std::env::temp_dir().join(format!("pong-{}-font-dir", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        assert!(TextPainter::load(&dir, 20.0).is_none());
        let _ = std::fs::remove_dir(dir);
    }
}
