// src/effects/mask_reveal.rs
//
// Geometry and timing of the layered reveal.
// A tile is cut into horizontal slices, one mask layer each. Layers open
// from the centre slice outward and close from the edges inward.
// All vertical values are fractions of the tile height, 0.0 at the top.

/// Index of the (possibly fractional) middle layer, 4.5 for ten layers.
pub fn center(layer_count: usize) -> f64 {
    (layer_count.max(1) - 1) as f64 / 2.0
}

/// Reveal delay: distance from the centre times the stagger.
pub fn enter_delay(index: usize, layer_count: usize, stagger_in: f64) -> f64 {
    (index as f64 - center(layer_count)).abs() * stagger_in
}

/// Conceal delay: distance from the nearest edge times the stagger.
pub fn exit_delay(index: usize, layer_count: usize, stagger_out: f64) -> f64 {
    let center = center(layer_count);
    (center - (index as f64 - center).abs()) * stagger_out
}

/// Vertical extent `[top, bottom)` of slice `index`.
pub fn slice_bounds(index: usize, layer_count: usize) -> (f32, f32) {
    let step = 1.0 / layer_count.max(1) as f32;
    (index as f32 * step, (index + 1) as f32 * step)
}

/// Visible band of a layer at `progress`: zero height on the slice's
/// midline at 0.0, the full slice at 1.0.
pub fn clip_band(index: usize, layer_count: usize, progress: f32) -> (f32, f32) {
    let (top, bottom) = slice_bounds(index, layer_count);
    let mid = (top + bottom) * 0.5;
    let half = (bottom - top) * 0.5 * progress.clamp(0.0, 1.0);
    (mid - half, mid + half)
}
