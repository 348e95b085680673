// src/views/trail/trail_tile.rs
//
// One spawned tile: a stack of mask layers over the same image, each
// clipped to its own horizontal slice, plus the slide from the lagging
// pointer position to the real one.

use nannou::prelude::*;

use crate::{animation::AnimatedValue, effects::mask_reveal, utilities::EasingType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileId(pub u64);

#[derive(Debug, Clone)]
pub struct MaskLayer {
    pub index: usize,
    clip: AnimatedValue,    // 0.0 closed band, 1.0 full slice
    opacity: AnimatedValue, // opacity of the image inside this mask
}

impl MaskLayer {
    fn new(index: usize) -> Self {
        Self {
            index,
            clip: AnimatedValue::fixed(0.0),
            opacity: AnimatedValue::fixed(1.0),
        }
    }

    pub fn clip_progress(&self, now: f64) -> f32 {
        self.clip.value_at(now)
    }

    /// Visible `[top, bottom)` band as fractions of the tile height.
    pub fn clip_band(&self, layer_count: usize, now: f64) -> (f32, f32) {
        mask_reveal::clip_band(self.index, layer_count, self.clip_progress(now))
    }

    pub fn opacity(&self, now: f64) -> f32 {
        self.opacity.value_at(now)
    }
}

#[derive(Debug, Clone)]
pub struct TrailTile {
    pub id: TileId,
    pub image_index: usize,
    pub size: Vec2,
    // top-left corners relative to the trail region
    origin: Point2,
    target: Point2,
    slide: AnimatedValue,
    layers: Vec<MaskLayer>,
}

impl TrailTile {
    pub fn new(
        id: TileId,
        image_index: usize,
        origin: Point2,
        target: Point2,
        size: Vec2,
        layer_count: usize,
    ) -> Self {
        Self {
            id,
            image_index,
            size,
            origin,
            target,
            slide: AnimatedValue::fixed(0.0),
            layers: (0..layer_count).map(MaskLayer::new).collect(),
        }
    }

    pub fn origin(&self) -> Point2 {
        self.origin
    }

    pub fn target(&self) -> Point2 {
        self.target
    }

    /// Top-left corner relative to the trail region at `now`.
    pub fn position_at(&self, now: f64) -> Point2 {
        self.origin.lerp(self.target, self.slide.value_at(now))
    }

    pub fn layers(&self) -> &[MaskLayer] {
        &self.layers
    }

    pub fn start_slide(&mut self, now: f64, duration: f64, easing: EasingType) {
        self.slide.animate_to(1.0, now, duration, easing);
    }

    pub fn reveal_layer(&mut self, index: usize, now: f64, duration: f64, easing: EasingType) {
        if let Some(layer) = self.layers.get_mut(index) {
            layer.clip.animate_to(1.0, now, duration, easing);
        }
    }

    pub fn conceal_layer(&mut self, index: usize, now: f64, duration: f64, easing: EasingType) {
        if let Some(layer) = self.layers.get_mut(index) {
            layer.clip.animate_to(0.0, now, duration, easing);
        }
    }

    /// Fades every image layer toward `opacity` at once.
    pub fn fade_images(&mut self, opacity: f32, now: f64, duration: f64, easing: EasingType) {
        for layer in self.layers.iter_mut() {
            layer.opacity.animate_to(opacity, now, duration, easing);
        }
    }
}
