//! Root-level subscription composition

use std::time::Duration;

use iced::Subscription;

use crate::infra::constants::{hero, product_rail};
use crate::messages::Message;
use crate::state::State;

pub fn subscription(state: &State) -> Subscription<Message> {
    let mut subscriptions = vec![
        iced::window::events().map(|(_id, event)| match event {
            iced::window::Event::Opened { size, .. }
            | iced::window::Event::Resized(size) => Message::WindowResized(size),
            _ => Message::NoOp,
        }),
        iced::time::every(Duration::from_millis(hero::motion::TICK_MS))
            .map(Message::HeroFrame),
    ];

    if state.rails.any_animating() {
        subscriptions.push(
            iced::time::every(Duration::from_nanos(product_rail::motion::TICK_NS))
                .map(Message::RailFrame),
        );
    }

    Subscription::batch(subscriptions)
}
