// src/views/trail/mod.rs

pub mod mount;
pub mod trail_manager;
pub mod trail_tile;

pub use mount::Mount;
pub use trail_manager::{QueuedTile, TileEvent, TrailManager};
pub use trail_tile::{MaskLayer, TileId, TrailTile};
