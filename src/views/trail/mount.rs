// src/views/trail/mount.rs
//
// The overlay that tile elements are attached to.
// Elements iterate in creation order so newer tiles draw on top.

use std::collections::BTreeMap;

use super::trail_tile::{TileId, TrailTile};
use crate::models::ViewBox;

#[derive(Debug)]
pub struct Mount {
    region: ViewBox,
    elements: BTreeMap<TileId, TrailTile>,
}

impl Mount {
    pub fn new(region: ViewBox) -> Self {
        Self {
            region,
            elements: BTreeMap::new(),
        }
    }

    pub fn region(&self) -> &ViewBox {
        &self.region
    }

    pub fn set_region(&mut self, region: ViewBox) {
        self.region = region;
    }

    pub fn attach(&mut self, tile: TrailTile) {
        self.elements.insert(tile.id, tile);
    }

    /// Detaches and returns the element, or None if it is already gone.
    pub fn detach(&mut self, id: TileId) -> Option<TrailTile> {
        self.elements.remove(&id)
    }

    pub fn get_mut(&mut self, id: TileId) -> Option<&mut TrailTile> {
        self.elements.get_mut(&id)
    }

    /// Detaches everything, returning how many elements were attached.
    pub fn clear(&mut self) -> usize {
        let count = self.elements.len();
        self.elements.clear();
        count
    }

    pub fn tiles(&self) -> impl Iterator<Item = &TrailTile> {
        self.elements.values()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
