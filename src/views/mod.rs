// src/views/mod.rs

pub mod trail;
pub mod trail_effect;

pub use trail::{Mount, TrailManager, TrailTile};
pub use trail_effect::TrailEffect;
