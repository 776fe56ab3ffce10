use std::time::Instant;

use iced::{
    Task,
    widget::{operation::scroll_to, scrollable::AbsoluteOffset},
};
use log::{debug, trace};

use crate::domains::ui::views::product_rail::{RailMessage, ScrollRequest};
use crate::messages::Message;
use crate::state::State;

/// Handle product rail messages
pub fn handle_rail_message(state: &mut State, msg: RailMessage) -> Task<Message> {
    match msg {
        RailMessage::Scroll(key, direction) => {
            let Some(rail) = state.rails.get_mut(&key) else {
                debug!("{key}: scroll for unknown rail ignored");
                return Task::none();
            };
            match rail.scroll(direction, Instant::now()) {
                // Smooth requests are driven by the frame subscription, which
                // turns on while any rail is animating.
                ScrollRequest::Animating { .. } | ScrollRequest::Unmounted => {
                    Task::none()
                }
                ScrollRequest::Immediate(target) => scroll_to::<Message>(
                    rail.viewport.id().clone(),
                    AbsoluteOffset { x: target, y: 0.0 },
                ),
            }
        }
        RailMessage::ViewportChanged(key, viewport) => {
            if let Some(rail) = state.rails.get_mut(&key) {
                let offset = viewport.absolute_offset().x;
                trace!("{key}: viewport at {offset:.1}");
                rail.viewport.report(
                    offset,
                    viewport.bounds().width,
                    viewport.content_bounds().width,
                );
            }
            Task::none()
        }
    }
}

/// Apply one frame of every running rail transition.
pub fn advance_rails(state: &mut State, now: Instant) -> Task<Message> {
    let frames = state.rails.advance_all(now);
    if frames.is_empty() {
        return Task::none();
    }
    Task::batch(frames.into_iter().map(|(id, x)| {
        scroll_to::<Message>(id, AbsoluteOffset { x, y: 0.0 })
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::domains::ui::views::product_rail::{
        RailKey, ScrollDirection, ViewportHandle,
    };
    use storefront_config::HomeConfig;

    fn loaded_state() -> (State, RailKey) {
        let mut state = State::new(HomeConfig::default());
        let catalog = Catalog::sample().expect("sample catalog");
        let key = RailKey::from(&catalog.collections[0].id);
        state.set_catalog(catalog);
        (state, key)
    }

    #[test]
    fn scroll_before_mount_does_not_animate() {
        let (mut state, key) = loaded_state();
        let _ = handle_rail_message(
            &mut state,
            RailMessage::Scroll(key.clone(), ScrollDirection::Next),
        );
        assert!(!state.rails.any_animating());
        assert_eq!(state.rails.get(&key).and_then(|r| r.viewport.offset()), None);
    }

    #[test]
    fn scroll_after_mount_starts_a_transition() {
        let (mut state, key) = loaded_state();
        if let Some(rail) = state.rails.get_mut(&key) {
            rail.viewport.report(0.0, 800.0, 2400.0);
        }
        let _ = handle_rail_message(
            &mut state,
            RailMessage::Scroll(key.clone(), ScrollDirection::Next),
        );
        assert!(state.rails.any_animating());
    }

    #[test]
    fn unknown_rail_is_ignored() {
        let (mut state, _) = loaded_state();
        let key = RailKey(storefront_model::CollectionId::new("pcol_missing"));
        let _ = handle_rail_message(
            &mut state,
            RailMessage::Scroll(key, ScrollDirection::Previous),
        );
        assert!(!state.rails.any_animating());
    }
}
