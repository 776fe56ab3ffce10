//! Root update function

use iced::Task;
use log::{debug, error, info, trace};

use crate::domains::ui::update_handlers::{advance_rails, handle_rail_message};
use crate::messages::Message;
use crate::state::{CatalogStatus, State};

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    trace!("update: {}", message.name());
    match message {
        Message::CatalogLoaded(Ok(catalog)) => {
            state.set_catalog(catalog);
            Task::none()
        }
        Message::CatalogLoaded(Err(err)) => {
            error!("catalog load failed: {err}");
            state.catalog = CatalogStatus::Failed(err);
            Task::none()
        }
        Message::Rail(msg) => handle_rail_message(state, msg),
        Message::Navigate(href) => {
            info!("navigate to {href}");
            state.route = Some(href);
            Task::none()
        }
        Message::WindowResized(size) => {
            debug!("window resized to {}x{}", size.width, size.height);
            state.window_size = size;
            Task::none()
        }
        Message::RailFrame(now) => advance_rails(state, now),
        Message::HeroFrame(now) => {
            state.now = now;
            Task::none()
        }
        Message::NoOp => Task::none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CatalogError};
    use iced::Size;
    use std::time::Duration;
    use storefront_config::HomeConfig;

    fn state() -> State {
        State::new(HomeConfig::default())
    }

    #[test]
    fn loaded_catalog_registers_one_rail_per_collection() {
        let mut state = state();
        let catalog = Catalog::sample().expect("sample catalog");
        let expected = catalog.collections.len();
        let _ = update(&mut state, Message::CatalogLoaded(Ok(catalog)));
        assert!(state.catalog().is_some());
        assert_eq!(state.rails.len(), expected);
    }

    #[test]
    fn failed_load_is_kept_for_display() {
        let mut state = state();
        let err = CatalogError::Parse {
            origin: "test".into(),
            message: "bad".into(),
        };
        let _ = update(&mut state, Message::CatalogLoaded(Err(err.clone())));
        assert!(matches!(state.catalog, CatalogStatus::Failed(ref e) if *e == err));
        assert!(state.rails.is_empty());
    }

    #[test]
    fn navigation_records_route() {
        let mut state = state();
        let _ = update(&mut state, Message::Navigate("/br/store".into()));
        assert_eq!(state.route.as_deref(), Some("/br/store"));
    }

    #[test]
    fn resize_and_hero_ticks_update_state() {
        let mut state = state();
        let _ = update(&mut state, Message::WindowResized(Size::new(600.0, 900.0)));
        assert_eq!(state.window_size, Size::new(600.0, 900.0));

        let later = state.started_at + Duration::from_millis(1500);
        let _ = update(&mut state, Message::HeroFrame(later));
        assert_eq!(state.hero_elapsed(), Duration::from_millis(1500));
    }
}
