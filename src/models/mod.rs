pub mod geometry;
pub mod image_pool;

pub use geometry::{viewport_to_world, world_to_viewport, ViewBox};
pub use image_pool::ImagePool;
