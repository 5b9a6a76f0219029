//! Distance, normalization and axis-aligned rectangles.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Euclidean distance between two points.
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Unit vector in the direction of `v`, or zero when `v` has no length.
pub fn normalize(v: Vec2) -> Vec2 {
    v.normalize_or_zero()
}

/// Keeps a value within `[min, max]`.
pub fn clamp_value(value: f32, min: f32, max: f32) -> f32 {
    min.max(max.min(value))
}

/// Health as a fraction of max. Returns 0 when max is 0.
pub fn health_percentage(current: f64, max: f64) -> f64 {
    if max == 0.0 {
        return 0.0;
    }
    current / max
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size centered on `center`.
    pub fn centered(center: Vec2, width: f32, height: f32) -> Self {
        Self::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Point hit-test. Right and bottom edges are exclusive.
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// True if the two rectangles share any interior area.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn intersects_any(&self, others: &[Rect]) -> bool {
        others.iter().any(|o| self.intersects(o))
    }
}
