// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

use crate::utilities::{CubicBezier, EasingType};

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::from("imagetrail"),
            width: 1440,
            height: 900,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    pub asset_directory: String,
    pub image_extension: String,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            asset_directory: String::from("assets/tail-images"),
            image_extension: String::from("jpeg"),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub background: [f32; 3],
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: [0.06, 0.06, 0.06],
        }
    }
}

/************************* Trail Config ********************/

/// Tunables of the trail engine. Fixed once the app starts.
/// Durations and delays are milliseconds, distances are logical pixels.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    pub image_lifespan: f64,
    pub mouse_threshold: f32,
    pub in_duration: f64,
    pub out_duration: f64,
    pub stagger_in: f64,
    pub stagger_out: f64,
    pub slide_duration: f64,
    pub slide_easing: CubicBezier,
    pub reveal_easing: CubicBezier,
    pub tile_width: f32,
    pub tile_height: f32,
    pub layer_count: usize,
    pub image_count: usize,
    pub desktop_min_width: f32, // strictly wider than this counts as desktop
    pub smoothing: f32,
    pub removal_grace: f64,
    pub ghost_opacity: f32,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            image_lifespan: 1000.0,
            mouse_threshold: 150.0,
            in_duration: 750.0,
            out_duration: 1000.0,
            stagger_in: 100.0,
            stagger_out: 25.0,
            slide_duration: 1000.0,
            slide_easing: CubicBezier::new(0.25, 0.46, 0.45, 0.94),
            reveal_easing: CubicBezier::new(0.87, 0.0, 0.13, 1.0),
            tile_width: 175.0,
            tile_height: 175.0,
            layer_count: 10,
            image_count: 20,
            desktop_min_width: 1000.0,
            smoothing: 0.1,
            removal_grace: 100.0,
            ghost_opacity: 0.25,
        }
    }
}

impl TrailConfig {
    pub fn slide_easing(&self) -> EasingType {
        self.slide_easing.into()
    }

    pub fn reveal_easing(&self) -> EasingType {
        self.reveal_easing.into()
    }

    /// How long after retirement a tile's elements are removed.
    pub fn removal_delay(&self) -> f64 {
        self.out_duration + self.removal_grace
    }
}
