// src/controllers/input_tracker.rs
//
// Pointer state for the trail.
// The raw position is written on every move event and nothing else
// happens on that path. The interpolated position is advanced once per
// frame and lags behind the pointer; tiles slide out from it.

use nannou::prelude::*;

#[derive(Debug, Default)]
pub struct InputTracker {
    raw: Point2,
    interpolated: Point2,
    last_spawn: Point2,
    listening: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts accepting pointer moves. Attaching twice is a no-op.
    pub fn attach(&mut self) {
        if !self.listening {
            self.listening = true;
            tracing::debug!("Pointer listener attached");
        }
    }

    /// Stops accepting pointer moves. Detaching twice is a no-op.
    pub fn detach(&mut self) {
        if self.listening {
            self.listening = false;
            tracing::debug!("Pointer listener detached");
        }
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn on_pointer_move(&mut self, position: Point2) {
        if self.listening {
            self.raw = position;
        }
    }

    /// One smoothing step of the lagging position toward the raw one.
    pub fn interpolate(&mut self, factor: f32) {
        self.interpolated = lerp_point(self.interpolated, self.raw, factor);
    }

    pub fn mark_spawn(&mut self) {
        self.last_spawn = self.raw;
    }

    pub fn raw(&self) -> Point2 {
        self.raw
    }

    pub fn interpolated(&self) -> Point2 {
        self.interpolated
    }

    pub fn last_spawn(&self) -> Point2 {
        self.last_spawn
    }
}

// per-axis linear interpolation
fn lerp_point(from: Point2, to: Point2, factor: f32) -> Point2 {
    pt2(
        from.x + (to.x - from.x) * factor,
        from.y + (to.y - from.y) * factor,
    )
}
