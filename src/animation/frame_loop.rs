// src/animation/frame_loop.rs
//
// The per-frame loop handle. nannou calls `update` once per frame whether
// or not the trail wants it; the handle decides whether that call counts
// as a scheduled tick. A frame that has started always completes: the
// handle is only checked on entry.

/// Opaque token for the currently scheduled frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LoopHandle(u64);

#[derive(Debug, Default)]
pub struct FrameLoop {
    handle: Option<LoopHandle>,
    issued: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    fn issue(&mut self) -> LoopHandle {
        self.issued += 1;
        LoopHandle(self.issued)
    }

    /// Schedules the first frame. Starting a running loop keeps its handle.
    pub fn start(&mut self) {
        if self.handle.is_some() {
            return;
        }
        self.handle = Some(self.issue());
        tracing::debug!("Frame loop started");
    }

    /// Cancels the pending frame. In-flight transitions and timers are untouched.
    pub fn stop(&mut self) {
        if self.handle.take().is_some() {
            tracing::debug!("Frame loop stopped");
        }
    }

    /// Called at frame entry. Returns false when no frame is scheduled.
    pub fn enter(&self) -> bool {
        self.handle.is_some()
    }

    /// Called at the end of a frame to schedule the next one.
    pub fn reschedule(&mut self) {
        if self.handle.is_some() {
            self.handle = Some(self.issue());
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_reschedule_stop() {
        let mut frame_loop = FrameLoop::new();
        assert!(!frame_loop.enter());

        frame_loop.start();
        let first = frame_loop.handle;
        assert!(frame_loop.enter());
        frame_loop.start();
        assert_eq!(frame_loop.handle, first);

        frame_loop.reschedule();
        assert!(frame_loop.handle.is_some());
        assert_ne!(frame_loop.handle, first);

        frame_loop.stop();
        assert!(!frame_loop.enter());
        assert!(frame_loop.handle.is_none());

        // a stopped loop is not revived by a late reschedule
        frame_loop.reschedule();
        assert!(!frame_loop.is_running());
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut frame_loop = FrameLoop::new();
        frame_loop.stop();
        frame_loop.start();
        frame_loop.stop();
        frame_loop.stop();
        assert!(!frame_loop.is_running());
    }
}
