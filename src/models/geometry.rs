// src/models/geometry.rs
// Types for working with viewport geometry
//
// The trail engine works in viewport space: origin at the top-left of the
// window, y growing downward. nannou draws in world space: origin at the
// window centre, y growing upward.

use nannou::prelude::*;

/// An axis-aligned rectangle in viewport space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f32,
    pub min_y: f32,
    pub width: f32,
    pub height: f32,
}

impl ViewBox {
    pub fn new(min_x: f32, min_y: f32, width: f32, height: f32) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }

    /// A box covering a whole window of the given size.
    pub fn from_size(size: Vec2) -> Self {
        Self::new(0.0, 0.0, size.x, size.y)
    }

    pub fn max_x(&self) -> f32 {
        self.min_x + self.width
    }
    pub fn max_y(&self) -> f32 {
        self.min_y + self.height
    }

    pub fn origin(&self) -> Point2 {
        pt2(self.min_x, self.min_y)
    }

    // edges count as inside
    pub fn contains(&self, point: Point2) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x()
            && point.y >= self.min_y
            && point.y <= self.max_y()
    }

    /// Expresses a viewport point relative to this box's top-left corner.
    pub fn relative(&self, point: Point2) -> Point2 {
        point - self.origin()
    }
}

/// Converts a nannou world-space point to viewport space.
pub fn world_to_viewport(point: Point2, window_size: Vec2) -> Point2 {
    pt2(point.x + window_size.x / 2.0, window_size.y / 2.0 - point.y)
}

/// Converts a viewport-space point to nannou world space.
pub fn viewport_to_world(point: Point2, window_size: Vec2) -> Point2 {
    pt2(point.x - window_size.x / 2.0, window_size.y / 2.0 - point.y)
}
