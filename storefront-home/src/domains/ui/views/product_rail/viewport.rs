//! Owned viewport handle for a rail's horizontal scroll strip.
//!
//! The strip's live offset belongs to iced's scrollable widget. A rail never
//! writes it directly: it reads the offset last reported through `on_scroll`
//! and asks for a new one through [`ViewportHandle::request_scroll_to`]. The
//! smooth behaviour is a tween advanced by frame ticks, each step becoming a
//! `scroll_to` operation on the widget.
//!
//! A new request while a tween is running replaces it, starting from the
//! offset reached so far. The widget clamps every applied offset to its
//! scrollable extent; the handle mirrors that clamp for the offset it reports
//! but never clamps requested targets.

use std::time::{Duration, Instant};

use iced::widget::Id as ScrollableId;
use storefront_config::ScrollEasing;

use super::animator::ScrollAnimator;

/// How a requested offset change should be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Apply in a single step.
    Instant,
    /// Animate over the configured duration.
    Smooth,
}

/// Outcome of a scroll request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollRequest {
    /// The strip has not reported its viewport yet; nothing happened.
    Unmounted,
    /// Apply this offset now.
    Immediate(f32),
    /// A tween towards `to` is running and will be advanced by ticks.
    Animating { from: f32, to: f32 },
}

impl ScrollRequest {
    /// Target offset of the request, if it was accepted.
    pub fn target(&self) -> Option<f32> {
        match *self {
            ScrollRequest::Unmounted => None,
            ScrollRequest::Immediate(to) | ScrollRequest::Animating { to, .. } => {
                Some(to)
            }
        }
    }
}

/// Read/request access to a scroll position owned by the host widget.
pub trait ViewportHandle {
    /// Current offset in pixels, or `None` before the strip is mounted.
    fn offset(&self) -> Option<f32>;

    /// Request a move to `target`. Fire-and-forget: completion is never
    /// reported back.
    fn request_scroll_to(
        &mut self,
        target: f32,
        behavior: ScrollBehavior,
        now: Instant,
    ) -> ScrollRequest;
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Mounted {
    offset: f32,
    viewport_width: f32,
    content_width: f32,
}

impl Mounted {
    fn max_offset(&self) -> f32 {
        (self.content_width - self.viewport_width).max(0.0)
    }
}

/// The handle each rail instance owns for its strip.
#[derive(Debug, Clone)]
pub struct RailViewport {
    id: ScrollableId,
    mounted: Option<Mounted>,
    animator: ScrollAnimator,
}

impl RailViewport {
    pub fn new(duration: Duration, easing: ScrollEasing) -> Self {
        Self {
            id: ScrollableId::unique(),
            mounted: None,
            animator: ScrollAnimator::new(duration, easing),
        }
    }

    /// Widget id the strip must be built with.
    pub fn id(&self) -> &ScrollableId {
        &self.id
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_active()
    }

    /// Largest offset the strip can rest at, once mounted.
    pub fn max_offset(&self) -> Option<f32> {
        self.mounted.map(|m| m.max_offset())
    }

    /// Record a viewport reported by the widget. The first report mounts the
    /// handle.
    pub fn report(&mut self, offset: f32, viewport_width: f32, content_width: f32) {
        self.mounted = Some(Mounted {
            offset,
            viewport_width,
            content_width,
        });
    }

    /// Forget the widget, e.g. when the page is rebuilt. Any running tween is
    /// dropped.
    pub fn unmount(&mut self) {
        self.mounted = None;
        self.animator.cancel();
    }

    /// Advance a running tween. Returns the offset to apply to the widget
    /// this frame.
    pub fn advance(&mut self, now: Instant) -> Option<f32> {
        let next = self.animator.tick(now)?;
        let Some(mounted) = self.mounted.as_mut() else {
            self.animator.cancel();
            return None;
        };
        mounted.offset = next.clamp(0.0, mounted.max_offset());
        Some(next)
    }
}

impl ViewportHandle for RailViewport {
    fn offset(&self) -> Option<f32> {
        self.mounted.map(|m| m.offset)
    }

    fn request_scroll_to(
        &mut self,
        target: f32,
        behavior: ScrollBehavior,
        now: Instant,
    ) -> ScrollRequest {
        let Some(mounted) = self.mounted.as_mut() else {
            return ScrollRequest::Unmounted;
        };
        match behavior {
            ScrollBehavior::Instant => {
                self.animator.cancel();
                mounted.offset = target.clamp(0.0, mounted.max_offset());
                ScrollRequest::Immediate(target)
            }
            ScrollBehavior::Smooth => {
                let from = mounted.offset;
                self.animator.start(from, target, now);
                ScrollRequest::Animating { from, to: target }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> RailViewport {
        RailViewport::new(Duration::from_millis(200), ScrollEasing::Linear)
    }

    #[test]
    fn unmounted_handle_ignores_requests() {
        let mut vp = viewport();
        assert_eq!(vp.offset(), None);
        assert_eq!(
            vp.request_scroll_to(400.0, ScrollBehavior::Smooth, Instant::now()),
            ScrollRequest::Unmounted
        );
        assert!(!vp.is_animating());
        assert!(vp.advance(Instant::now()).is_none());
    }

    #[test]
    fn first_report_mounts() {
        let mut vp = viewport();
        vp.report(0.0, 900.0, 2000.0);
        assert_eq!(vp.offset(), Some(0.0));
        assert_eq!(vp.max_offset(), Some(1100.0));
    }

    #[test]
    fn smooth_request_tweens_from_current_offset() {
        let t0 = Instant::now();
        let mut vp = viewport();
        vp.report(100.0, 900.0, 2000.0);

        let req = vp.request_scroll_to(500.0, ScrollBehavior::Smooth, t0);
        assert_eq!(req, ScrollRequest::Animating { from: 100.0, to: 500.0 });
        assert!(vp.is_animating());

        let mid = vp.advance(t0 + Duration::from_millis(100)).unwrap();
        assert!((mid - 300.0).abs() < 0.5);
        assert_eq!(vp.offset(), Some(mid));

        assert_eq!(vp.advance(t0 + Duration::from_millis(400)), Some(500.0));
        assert!(!vp.is_animating());
    }

    #[test]
    fn reported_offset_saturates_at_extent() {
        let t0 = Instant::now();
        let mut vp = viewport();
        vp.report(1000.0, 900.0, 2000.0);

        vp.request_scroll_to(1400.0, ScrollBehavior::Smooth, t0);
        assert_eq!(vp.advance(t0 + Duration::from_secs(1)), Some(1400.0));
        assert_eq!(vp.offset(), Some(1100.0));

        vp.request_scroll_to(-400.0, ScrollBehavior::Instant, t0);
        assert_eq!(vp.offset(), Some(0.0));
    }

    #[test]
    fn unmount_drops_running_tween() {
        let t0 = Instant::now();
        let mut vp = viewport();
        vp.report(0.0, 900.0, 2000.0);
        vp.request_scroll_to(400.0, ScrollBehavior::Smooth, t0);
        vp.unmount();
        assert!(!vp.is_animating());
        assert_eq!(vp.offset(), None);
    }
}
