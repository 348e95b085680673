// src/views/trail/trail_manager.rs
//
// The tile lifecycle manager.
//
// Owns the FIFO of live tiles, the mount they are attached to and the
// timers driving their deferred transitions. Tiles are only created and
// destroyed here. Lifespan is constant and tiles are queued in creation
// order, so the queue stays sorted by removal time and retirement only
// ever has to look at its head.

use nannou::prelude::*;
use std::collections::VecDeque;
use std::path::PathBuf;

use super::mount::Mount;
use super::trail_tile::{TileId, TrailTile};
use crate::{
    config::TrailConfig,
    effects::mask_reveal,
    models::{ImagePool, ViewBox},
    services::TimerService,
};

/// Deferred work for a tile, fired by the timer service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileEvent {
    /// First paint after attaching: start the slide, schedule the reveals.
    Enter,
    Reveal(usize),
    Conceal(usize),
    Remove,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueuedTile {
    pub id: TileId,
    pub removal_time: f64,
}

#[derive(Debug)]
pub struct TrailManager {
    config: TrailConfig,
    images: ImagePool<PathBuf>,
    queue: VecDeque<QueuedTile>,
    mount: Mount,
    timers: TimerService<TileId, TileEvent>,
    next_id: u64,
}

impl TrailManager {
    pub fn new(config: TrailConfig, images: ImagePool<PathBuf>, region: ViewBox) -> Self {
        Self {
            config,
            images,
            queue: VecDeque::new(),
            mount: Mount::new(region),
            timers: TimerService::new(),
            next_id: 0,
        }
    }

    /************************** Creation ***************************** */

    /// Attaches a new tile sliding from `interpolated` to `raw` (viewport
    /// space) and queues it for retirement one lifespan from `now`.
    pub fn spawn(&mut self, raw: Point2, interpolated: Point2, now: f64) -> TileId {
        let image_index = self.images.next_index();
        let size = vec2(self.config.tile_width, self.config.tile_height);
        let half = size / 2.0;

        let region = self.mount.region();
        let origin = region.relative(interpolated) - half;
        let target = region.relative(raw) - half;

        self.next_id += 1;
        let id = TileId(self.next_id);
        let removal_time = now + self.config.image_lifespan;

        self.mount.attach(TrailTile::new(
            id,
            image_index,
            origin,
            target,
            size,
            self.config.layer_count,
        ));
        self.timers.schedule(now, id, TileEvent::Enter);
        self.queue.push_back(QueuedTile { id, removal_time });

        tracing::trace!(
            "Spawned tile {:?} with image {} at ({:.0}, {:.0})",
            id,
            image_index,
            raw.x,
            raw.y
        );
        id
    }

    /************************** Retirement ***************************** */

    /// Retires every queued tile whose removal time has come.
    /// Returns how many tiles were retired.
    pub fn sweep(&mut self, now: f64) -> usize {
        let mut retired = 0;
        while self
            .queue
            .front()
            .is_some_and(|queued| queued.removal_time <= now)
        {
            if let Some(queued) = self.queue.pop_front() {
                self.retire(queued.id, now);
                retired += 1;
            }
        }
        retired
    }

    // start the conceal, the ghost fade and the delayed removal
    fn retire(&mut self, id: TileId, now: f64) {
        let layer_count = self.config.layer_count;
        for index in 0..layer_count {
            let delay = mask_reveal::exit_delay(index, layer_count, self.config.stagger_out);
            self.timers.schedule(now + delay, id, TileEvent::Conceal(index));
        }

        if let Some(tile) = self.mount.get_mut(id) {
            tile.fade_images(
                self.config.ghost_opacity,
                now,
                self.config.out_duration,
                self.config.reveal_easing(),
            );
        }

        self.timers
            .schedule(now + self.config.removal_delay(), id, TileEvent::Remove);
        tracing::trace!("Retired tile {:?}", id);
    }

    /************************** Timers ***************************** */

    /// Fires every timer due at `now`. Runs every frame whether or not
    /// the frame loop is scheduled.
    pub fn run_timers(&mut self, now: f64) {
        for (id, event) in self.timers.take_due(now) {
            self.dispatch(id, event, now);
        }
    }

    fn dispatch(&mut self, id: TileId, event: TileEvent, now: f64) {
        if event == TileEvent::Remove {
            self.remove(id);
            return;
        }

        let config = &self.config;
        let Some(tile) = self.mount.get_mut(id) else {
            tracing::trace!("Timer {:?} fired for detached tile {:?}", event, id);
            return;
        };

        match event {
            TileEvent::Enter => {
                tile.start_slide(now, config.slide_duration, config.slide_easing());
                for index in 0..config.layer_count {
                    let delay =
                        mask_reveal::enter_delay(index, config.layer_count, config.stagger_in);
                    self.timers.schedule(now + delay, id, TileEvent::Reveal(index));
                }
            }
            TileEvent::Reveal(index) => {
                tile.reveal_layer(index, now, config.in_duration, config.reveal_easing());
            }
            TileEvent::Conceal(index) => {
                tile.conceal_layer(index, now, config.out_duration, config.reveal_easing());
            }
            TileEvent::Remove => {}
        }
    }

    fn remove(&mut self, id: TileId) {
        if self.mount.detach(id).is_none() {
            tracing::debug!("Tile {:?} already detached, skipping removal", id);
        }
        // late reveals for a removed tile have nothing left to do
        self.timers.cancel(&id);
    }

    /************************** Teardown ***************************** */

    /// Drops every tile immediately, skipping exit animations, and cancels
    /// all pending timers. Returns how many elements were detached.
    pub fn detach_all(&mut self) -> usize {
        self.queue.clear();
        self.timers.clear();
        let detached = self.mount.clear();
        if detached > 0 {
            tracing::debug!("Detached {} tiles", detached);
        }
        detached
    }

    /************************** Accessors ***************************** */

    pub fn mount(&self) -> &Mount {
        &self.mount
    }

    pub fn set_region(&mut self, region: ViewBox) {
        self.mount.set_region(region);
    }

    pub fn region(&self) -> &ViewBox {
        self.mount.region()
    }

    pub fn queue(&self) -> impl Iterator<Item = &QueuedTile> {
        self.queue.iter()
    }

    pub fn live_count(&self) -> usize {
        self.queue.len()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    pub fn images(&self) -> &ImagePool<PathBuf> {
        &self.images
    }
}
