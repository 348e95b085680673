// src/views/trail_effect.rs
//
// The trail component.
//
// Pointer and resize callbacks only mutate state; all rendering logic
// runs from `frame`, which nannou calls once per update. The frame loop
// handle and the desktop gate are checked once on entry.

use nannou::prelude::*;
use std::path::PathBuf;

use crate::{
    animation::FrameLoop,
    config::TrailConfig,
    controllers::{InputTracker, ResponsiveController, ResponsiveState, ResponsiveTransition},
    models::{ImagePool, ViewBox},
    services::SpawnGate,
    views::trail::{Mount, TrailManager},
};

#[derive(Debug)]
pub struct TrailEffect {
    smoothing: f32,
    input: InputTracker,
    gate: SpawnGate,
    manager: TrailManager,
    frame_loop: FrameLoop,
    responsive: ResponsiveController,
    unmounted: bool,
}

impl TrailEffect {
    /// Mounts the effect over `region`. Without a region there is nothing
    /// to mount into and the effect stays off.
    pub fn mount(
        config: TrailConfig,
        images: ImagePool<PathBuf>,
        region: Option<ViewBox>,
        viewport_width: f32,
    ) -> Option<Self> {
        let Some(region) = region else {
            tracing::debug!("No trail region, image trail disabled");
            return None;
        };

        if images.is_empty() {
            tracing::warn!("No trail images configured, tiles will be blank");
        }

        let mut effect = Self {
            smoothing: config.smoothing,
            input: InputTracker::new(),
            gate: SpawnGate::new(config.mouse_threshold),
            responsive: ResponsiveController::new(config.desktop_min_width, viewport_width),
            manager: TrailManager::new(config, images, region),
            frame_loop: FrameLoop::new(),
            unmounted: false,
        };

        if effect.responsive.is_desktop() {
            effect.activate();
        }
        tracing::info!(
            "Image trail mounted ({:?}, {} images)",
            effect.responsive.state(),
            effect.manager.images().len()
        );
        Some(effect)
    }

    fn activate(&mut self) {
        self.input.attach();
        self.frame_loop.start();
    }

    // no exit animations: tiles are dropped on the spot
    fn deactivate(&mut self) {
        self.frame_loop.stop();
        self.manager.detach_all();
        self.input.detach();
    }

    pub fn on_pointer_move(&mut self, position: Point2) {
        if self.unmounted {
            return;
        }
        self.input.on_pointer_move(position);
    }

    pub fn on_resize(&mut self, viewport_width: f32, region: ViewBox) {
        if self.unmounted {
            return;
        }
        self.manager.set_region(region);
        match self.responsive.on_resize(viewport_width) {
            ResponsiveTransition::Activated => {
                tracing::info!("Viewport is {:.0} wide, starting trail", viewport_width);
                self.activate();
            }
            ResponsiveTransition::Deactivated => {
                tracing::info!("Viewport is {:.0} wide, stopping trail", viewport_width);
                self.deactivate();
            }
            ResponsiveTransition::Unchanged => {}
        }
    }

    /// One frame: fire due timers, then, if the loop is scheduled,
    /// interpolate, maybe spawn, sweep and reschedule.
    pub fn frame(&mut self, now: f64) {
        if self.unmounted {
            return;
        }
        self.manager.run_timers(now);

        if !self.responsive.is_desktop() || !self.frame_loop.enter() {
            return;
        }

        self.input.interpolate(self.smoothing);

        let raw = self.input.raw();
        if self
            .gate
            .should_spawn(raw, self.input.last_spawn(), self.manager.region())
        {
            self.manager.spawn(raw, self.input.interpolated(), now);
            self.input.mark_spawn();
        }

        self.manager.sweep(now);
        self.frame_loop.reschedule();
    }

    /// Full stop regardless of state. Terminal: resizes, moves and frames
    /// are ignored afterwards. Safe to call more than once.
    pub fn unmount(&mut self) {
        if self.unmounted {
            return;
        }
        self.unmounted = true;
        self.frame_loop.stop();
        let detached = self.manager.detach_all();
        self.input.detach();
        tracing::info!("Image trail unmounted, dropped {} tiles", detached);
    }

    pub fn mount_point(&self) -> &Mount {
        self.manager.mount()
    }

    pub fn manager(&self) -> &TrailManager {
        &self.manager
    }

    pub fn input(&self) -> &InputTracker {
        &self.input
    }

    pub fn state(&self) -> ResponsiveState {
        self.responsive.state()
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 16.0;

    fn images() -> ImagePool<PathBuf> {
        ImagePool::new(
            (1..=20)
                .map(|n| PathBuf::from(format!("{}.jpeg", n)))
                .collect(),
        )
    }

    fn desktop() -> TrailEffect {
        TrailEffect::mount(
            TrailConfig::default(),
            images(),
            Some(ViewBox::new(0.0, 0.0, 1440.0, 900.0)),
            1440.0,
        )
        .unwrap()
    }

    #[test]
    fn test_missing_region_does_not_mount() {
        let effect = TrailEffect::mount(TrailConfig::default(), images(), None, 1440.0);
        assert!(effect.is_none());
    }

    #[test]
    fn test_narrow_viewport_stays_idle() {
        let mut effect = TrailEffect::mount(
            TrailConfig::default(),
            images(),
            Some(ViewBox::new(0.0, 0.0, 800.0, 900.0)),
            800.0,
        )
        .unwrap();

        assert_eq!(effect.state(), ResponsiveState::Inactive);
        assert!(!effect.is_running());
        assert!(!effect.input().is_listening());

        effect.on_pointer_move(pt2(400.0, 400.0));
        effect.frame(FRAME);
        assert_eq!(effect.manager().live_count(), 0);
    }

    #[test]
    fn test_spawns_only_past_threshold() {
        let mut effect = desktop();

        effect.on_pointer_move(pt2(100.0, 0.0));
        effect.frame(FRAME);
        assert_eq!(effect.manager().live_count(), 0);

        effect.on_pointer_move(pt2(151.0, 0.0));
        effect.frame(2.0 * FRAME);
        assert_eq!(effect.manager().live_count(), 1);
        assert_eq!(effect.input().last_spawn(), pt2(151.0, 0.0));

        // holding still never spawns again
        effect.frame(3.0 * FRAME);
        assert_eq!(effect.manager().live_count(), 1);
    }

    #[test]
    fn test_tile_slides_out_of_lagging_position() {
        let mut effect = desktop();
        effect.on_pointer_move(pt2(600.0, 400.0));
        effect.frame(FRAME);

        let tile = effect.mount_point().tiles().next().unwrap();
        // one smoothing step in: the origin lags at 10% of the way there
        assert_eq!(tile.origin(), pt2(60.0 - 87.5, 40.0 - 87.5));
        assert_eq!(tile.target(), pt2(600.0 - 87.5, 400.0 - 87.5));
    }

    #[test]
    fn test_resize_cycle() {
        let mut effect = desktop();
        effect.on_pointer_move(pt2(300.0, 300.0));
        effect.frame(FRAME);
        assert_eq!(effect.mount_point().len(), 1);

        effect.on_resize(900.0, ViewBox::new(0.0, 0.0, 900.0, 900.0));
        assert_eq!(effect.state(), ResponsiveState::Inactive);
        assert!(!effect.is_running());
        assert!(effect.mount_point().is_empty());
        assert_eq!(effect.manager().live_count(), 0);

        // moves while inactive are not recorded
        effect.on_pointer_move(pt2(800.0, 800.0));
        assert_eq!(effect.input().raw(), pt2(300.0, 300.0));

        effect.on_resize(1300.0, ViewBox::new(0.0, 0.0, 1300.0, 900.0));
        assert!(effect.is_running());
        assert!(effect.input().is_listening());
        assert_eq!(effect.manager().region().width, 1300.0);
    }

    #[test]
    fn test_unmount_leaves_nothing_behind() {
        let mut effect = desktop();
        let mut now = 0.0;
        for step in 0..30 {
            effect.on_pointer_move(pt2(100.0 + step as f32 * 40.0, 450.0));
            now += FRAME;
            effect.frame(now);
        }
        assert!(effect.manager().live_count() > 0);
        assert!(effect.manager().pending_timers() > 0);

        effect.unmount();
        effect.unmount();
        assert_eq!(effect.manager().live_count(), 0);
        assert!(effect.mount_point().is_empty());
        assert_eq!(effect.manager().pending_timers(), 0);

        // later frames are inert
        effect.frame(now + 10_000.0);
        assert!(effect.mount_point().is_empty());
    }

    #[test]
    fn test_resize_after_unmount_does_not_restart() {
        let mut effect = desktop();
        effect.unmount();

        effect.on_resize(800.0, ViewBox::new(0.0, 0.0, 800.0, 900.0));
        effect.on_resize(1440.0, ViewBox::new(0.0, 0.0, 1440.0, 900.0));
        effect.on_pointer_move(pt2(600.0, 400.0));
        effect.frame(FRAME);

        assert!(!effect.is_running());
        assert!(!effect.input().is_listening());
        assert_eq!(effect.manager().live_count(), 0);
        assert!(effect.mount_point().is_empty());
    }
}
