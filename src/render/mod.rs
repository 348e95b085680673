// src/render/mod.rs

pub mod tile_renderer;

pub use tile_renderer::{cover_area, TextureArea, TileRenderer};
