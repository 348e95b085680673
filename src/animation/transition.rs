// src/animation/transition.rs
//
// A single animated scalar, the native counterpart of a CSS transition.
// Retargeting starts the new transition from wherever the value
// currently is, so an exit can interrupt a reveal that is still running.

use crate::utilities::EasingType;

#[derive(Debug, Clone, Copy)]
pub struct AnimatedValue {
    from: f32,
    to: f32,
    start_time: f64,
    duration: f64,
    easing: EasingType,
}

impl AnimatedValue {
    /// A value resting at `value` with no transition in flight.
    pub fn fixed(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            start_time: 0.0,
            duration: 0.0,
            easing: EasingType::Linear,
        }
    }

    pub fn value_at(&self, now: f64) -> f32 {
        if self.duration <= 0.0 || now >= self.start_time + self.duration {
            return self.to;
        }
        if now <= self.start_time {
            return self.from;
        }

        let t = ((now - self.start_time) / self.duration) as f32;
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    /// Starts a transition toward `to` from the value held at `now`.
    pub fn animate_to(&mut self, to: f32, now: f64, duration: f64, easing: EasingType) {
        self.from = self.value_at(now);
        self.to = to;
        self.start_time = now;
        self.duration = duration.max(0.0);
        self.easing = easing;
    }

}

impl Default for AnimatedValue {
    fn default() -> Self {
        Self::fixed(0.0)
    }
}
