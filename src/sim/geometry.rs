//! Axis-aligned collision boxes
//!
//! Boxes are never stored: they are projected from ball/paddle positions each
//! tick and used for intersection tests and the debug overlay.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in screen pixels (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner
    pub min: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// The same box moved by `offset`
    #[inline]
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            min: self.min + offset,
            size: self.size,
        }
    }

    /// Overlap test: boxes must share area, touching edges do not count
    pub fn intersects(&self, other: &Aabb) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x && a_max.x > other.min.x && self.min.y < b_max.y && a_max.y > other.min.y
    }
}

/// Free-function form of [`Aabb::intersects`]
#[inline]
pub fn intersects(a: &Aabb, b: &Aabb) -> bool {
    a.intersects(b)
}

/// Hit-box for a ball centred at `center`
///
/// Deliberately smaller than the drawn circle: side `radius * 1.5`, top-left at
/// `center - radius / 1.5`. The box is therefore not centred on the ball.
pub fn ball_box(center: Vec2, radius: f32) -> Aabb {
    use crate::consts::BALL_BOX_SCALE;
    let offset = radius / BALL_BOX_SCALE;
    let side = radius * BALL_BOX_SCALE;
    Aabb::new(center.x - offset, center.y - offset, side, side)
}

/// Hit-box for a paddle: its exact rectangle
pub fn paddle_box(top_left: Vec2, size: Vec2) -> Aabb {
    Aabb {
        min: top_left,
        size,
    }
}
