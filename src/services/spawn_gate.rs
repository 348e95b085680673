// src/services/spawn_gate.rs
//
// Decides once per frame whether the pointer has travelled far enough,
// inside the trail region, to drop a new tile. Spawns follow pointer
// distance, not event frequency, so tiles come out evenly spaced.

use nannou::prelude::*;

use crate::models::ViewBox;

#[derive(Debug, Clone, Copy)]
pub struct SpawnGate {
    threshold: f32,
}

impl SpawnGate {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    /// True when `raw` is strictly further than the threshold from
    /// `last_spawn` and lies inside `region`.
    pub fn should_spawn(&self, raw: Point2, last_spawn: Point2, region: &ViewBox) -> bool {
        raw.distance(last_spawn) > self.threshold && region.contains(raw)
    }
}
