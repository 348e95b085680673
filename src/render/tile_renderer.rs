// src/render/tile_renderer.rs
// Draws attached trail tiles with nannou.
//
// Each mask layer draws the band of the image it currently reveals,
// cropped to `cover` the tile. The ghost fade is drawn as a veil in the
// background colour over the band, since textures are drawn opaque.

use nannou::prelude::*;
use std::path::{Path, PathBuf};

use crate::{
    errors::TrailError,
    models::{viewport_to_world, ViewBox},
    views::{Mount, TrailTile},
};

/// Normalised texture area, (0, 0) at the top-left of the image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureArea {
    pub u: f32,
    pub v: f32,
    pub width: f32,
    pub height: f32,
}

impl TextureArea {
    /// The sub-area between `top` and `bottom`, fractions of this area's height.
    pub fn band(&self, top: f32, bottom: f32) -> Self {
        Self {
            u: self.u,
            v: self.v + top * self.height,
            width: self.width,
            height: (bottom - top) * self.height,
        }
    }

    fn to_rect(self) -> geom::Rect {
        geom::Rect::from_x_y_w_h(
            self.u + self.width / 2.0,
            self.v + self.height / 2.0,
            self.width,
            self.height,
        )
    }
}

/// Central crop of an image that fills `tile` without distortion.
pub fn cover_area(image_size: [u32; 2], tile: Vec2) -> TextureArea {
    let [image_w, image_h] = image_size;
    if image_w == 0 || image_h == 0 || tile.x <= 0.0 || tile.y <= 0.0 {
        return TextureArea { u: 0.0, v: 0.0, width: 1.0, height: 1.0 };
    }

    let image_aspect = image_w as f32 / image_h as f32;
    let tile_aspect = tile.x / tile.y;

    if image_aspect > tile_aspect {
        // image is wider: trim the sides
        let width = tile_aspect / image_aspect;
        TextureArea { u: (1.0 - width) / 2.0, v: 0.0, width, height: 1.0 }
    } else {
        let height = image_aspect / tile_aspect;
        TextureArea { u: 0.0, v: (1.0 - height) / 2.0, width: 1.0, height }
    }
}

pub struct TileRenderer {
    textures: Vec<Option<wgpu::Texture>>, // None for assets that failed to load
    layer_count: usize,
}

impl TileRenderer {
    /// Loads one texture per pool image. Failures leave a blank slot.
    pub fn load(app: &App, paths: &[PathBuf], layer_count: usize) -> Self {
        let textures: Vec<Option<wgpu::Texture>> = paths
            .iter()
            .map(|path| match Self::load_texture(app, path) {
                Ok(texture) => Some(texture),
                Err(e) => {
                    tracing::warn!("{}", e);
                    None
                }
            })
            .collect();

        let loaded = textures.iter().flatten().count();
        tracing::info!("Loaded {} of {} trail images", loaded, paths.len());

        Self {
            textures,
            layer_count,
        }
    }

    fn load_texture(app: &App, path: &Path) -> Result<wgpu::Texture, TrailError> {
        wgpu::Texture::from_path(app, path).map_err(|e| TrailError::AssetLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn draw(&self, draw: &Draw, mount: &Mount, window_size: Vec2, background: Rgb, now: f64) {
        for tile in mount.tiles() {
            self.draw_tile(draw, tile, mount.region(), window_size, background, now);
        }
    }

    fn draw_tile(
        &self,
        draw: &Draw,
        tile: &TrailTile,
        region: &ViewBox,
        window_size: Vec2,
        background: Rgb,
        now: f64,
    ) {
        // broken asset: blank tile
        let Some(texture) = self.textures.get(tile.image_index).and_then(Option::as_ref) else {
            return;
        };

        let top_left = region.origin() + tile.position_at(now);
        let cover = cover_area(texture.size(), tile.size);

        for layer in tile.layers() {
            let (top, bottom) = layer.clip_band(self.layer_count, now);
            let band_height = (bottom - top) * tile.size.y;
            if band_height <= 0.0 {
                continue;
            }

            let center = pt2(
                top_left.x + tile.size.x / 2.0,
                top_left.y + top * tile.size.y + band_height / 2.0,
            );
            let xy = viewport_to_world(center, window_size);

            draw.texture(texture)
                .xy(xy)
                .w_h(tile.size.x, band_height)
                .area(cover.band(top, bottom).to_rect());

            let veil = 1.0 - layer.opacity(now);
            if veil > 0.0 {
                draw.rect()
                    .xy(xy)
                    .w_h(tile.size.x, band_height)
                    .color(rgba(background.red, background.green, background.blue, veil));
            }
        }
    }
}
