//! Time-based tween that drives a smooth scroll towards a target offset

use std::time::{Duration, Instant};

use storefront_config::ScrollEasing;

#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    active: bool,
    start: f32,
    target: f32,
    started_at: Option<Instant>,
    duration: Duration,
    easing: ScrollEasing,
}

impl ScrollAnimator {
    pub fn new(duration: Duration, easing: ScrollEasing) -> Self {
        Self {
            active: false,
            start: 0.0,
            target: 0.0,
            started_at: None,
            duration,
            easing,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Destination of the running transition, if any.
    pub fn target(&self) -> Option<f32> {
        self.active.then_some(self.target)
    }

    /// Begin a transition from `current` to `target`. A running transition
    /// is replaced; the new one starts from `current`.
    pub fn start(&mut self, current: f32, target: f32, now: Instant) {
        self.active = true;
        self.start = current;
        self.target = target;
        self.started_at = Some(now);
    }

    /// Returns Some(next_offset) when animating, or None when finished/inactive
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        if !self.active {
            return None;
        }
        let started_at = self.started_at.unwrap_or(now);
        let elapsed = now.saturating_duration_since(started_at);
        if elapsed >= self.duration {
            self.active = false;
            return Some(self.target);
        }
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32())
            .clamp(0.0, 1.0);
        let te = apply_easing(t, self.easing);
        Some(self.start + (self.target - self.start) * te)
    }

    /// Cancel the current animation immediately.
    pub fn cancel(&mut self) {
        self.active = false;
    }
}

fn apply_easing(t: f32, easing: ScrollEasing) -> f32 {
    match easing {
        ScrollEasing::Linear => t,
        ScrollEasing::EaseIn => t * t,
        ScrollEasing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        ScrollEasing::EaseInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                1.0 - 2.0 * (1.0 - t) * (1.0 - t)
            }
        }
    }
}
