//! Per-rail navigation state

use std::time::Instant;

use log::debug;
use storefront_config::RailSettings;

use super::types::{RailKey, ScrollDirection};
use super::viewport::{RailViewport, ScrollBehavior, ScrollRequest, ViewportHandle};

#[derive(Debug, Clone)]
pub struct RailState {
    pub key: RailKey,
    pub viewport: RailViewport,
    step: f32,
}

impl RailState {
    pub fn new(key: RailKey, settings: &RailSettings) -> Self {
        Self {
            key,
            viewport: RailViewport::new(
                settings.smooth_scroll_duration(),
                settings.easing,
            ),
            step: settings.scroll_step,
        }
    }

    /// Handle one activation of a directional control.
    ///
    /// The target is computed from the offset at invocation time, so repeated
    /// activations during a running transition chain from wherever the strip
    /// currently is rather than from the previous target.
    pub fn scroll(&mut self, direction: ScrollDirection, now: Instant) -> ScrollRequest {
        let Some(current) = self.viewport.offset() else {
            debug!("{}: {:?} ignored, strip not mounted", self.key, direction);
            return ScrollRequest::Unmounted;
        };
        let target = direction.target_from(current, self.step);
        debug!(
            "{}: {:?} from {current:.1} to {target:.1}",
            self.key, direction
        );
        self.viewport
            .request_scroll_to(target, ScrollBehavior::Smooth, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use storefront_config::ScrollEasing;
    use storefront_model::CollectionId;

    fn rail() -> RailState {
        let settings = RailSettings {
            scroll_step: 400.0,
            smooth_scroll_ms: 200,
            easing: ScrollEasing::Linear,
        };
        RailState::new(RailKey(CollectionId::new("pcol_1")), &settings)
    }

    #[test]
    fn next_from_zero_targets_one_step() {
        let mut rail = rail();
        rail.viewport.report(0.0, 900.0, 3000.0);
        let req = rail.scroll(ScrollDirection::Next, Instant::now());
        assert_eq!(req.target(), Some(400.0));
    }

    #[test]
    fn previous_from_one_step_targets_zero() {
        let mut rail = rail();
        rail.viewport.report(400.0, 900.0, 3000.0);
        let req = rail.scroll(ScrollDirection::Previous, Instant::now());
        assert_eq!(req.target(), Some(0.0));
    }

    #[test]
    fn activation_before_mount_is_a_no_op() {
        let mut rail = rail();
        for direction in [ScrollDirection::Previous, ScrollDirection::Next] {
            assert_eq!(
                rail.scroll(direction, Instant::now()),
                ScrollRequest::Unmounted
            );
        }
        assert!(!rail.viewport.is_animating());
    }

    #[test]
    fn repeated_activation_chains_from_live_offset() {
        let t0 = Instant::now();
        let mut rail = rail();
        rail.viewport.report(0.0, 900.0, 3000.0);

        rail.scroll(ScrollDirection::Next, t0);
        let t1 = t0 + Duration::from_millis(100);
        let mid = rail.viewport.advance(t1).unwrap();

        let req = rail.scroll(ScrollDirection::Next, t1);
        assert_eq!(req, ScrollRequest::Animating { from: mid, to: mid + 400.0 });
    }

    #[test]
    fn previous_at_start_is_not_clamped() {
        let mut rail = rail();
        rail.viewport.report(0.0, 900.0, 3000.0);
        let req = rail.scroll(ScrollDirection::Previous, Instant::now());
        assert_eq!(req.target(), Some(-400.0));
    }

    #[test]
    fn default_settings_drive_step_and_duration() {
        let t0 = Instant::now();
        let settings = RailSettings::default();
        let mut rail = RailState::new(RailKey(CollectionId::new("pcol_1")), &settings);
        rail.viewport.report(0.0, 900.0, 3000.0);

        let req = rail.scroll(ScrollDirection::Next, t0);
        assert_eq!(req.target(), Some(RailSettings::DEFAULT_SCROLL_STEP));

        let almost = Duration::from_millis(RailSettings::DEFAULT_SMOOTH_SCROLL_MS - 1);
        rail.viewport.advance(t0 + almost);
        assert!(rail.viewport.is_animating());

        let done = settings.smooth_scroll_duration();
        assert_eq!(
            rail.viewport.advance(t0 + done),
            Some(RailSettings::DEFAULT_SCROLL_STEP)
        );
        assert!(!rail.viewport.is_animating());
    }
}
