pub mod easing;

pub use easing::{CubicBezier, EasingType};
