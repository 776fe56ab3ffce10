//! Root message type

use std::time::Instant;

use iced::Size;

use crate::catalog::{Catalog, CatalogError};
use crate::domains::ui::views::product_rail::RailMessage;

#[derive(Debug, Clone)]
pub enum Message {
    /// The catalog fixture finished loading.
    CatalogLoaded(Result<Catalog, CatalogError>),
    Rail(RailMessage),
    /// A link was activated. Carries the localized destination.
    Navigate(String),
    WindowResized(Size),
    /// Frame tick while a rail transition is running.
    RailFrame(Instant),
    /// Frame tick for the hero decoration.
    HeroFrame(Instant),
    NoOp,
}

impl From<RailMessage> for Message {
    fn from(msg: RailMessage) -> Self {
        Message::Rail(msg)
    }
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Message::CatalogLoaded(_) => "CatalogLoaded",
            Message::Rail(RailMessage::Scroll(..)) => "Rail::Scroll",
            Message::Rail(RailMessage::ViewportChanged(..)) => {
                "Rail::ViewportChanged"
            }
            Message::Navigate(_) => "Navigate",
            Message::WindowResized(_) => "WindowResized",
            Message::RailFrame(_) => "RailFrame",
            Message::HeroFrame(_) => "HeroFrame",
            Message::NoOp => "NoOp",
        }
    }
}
