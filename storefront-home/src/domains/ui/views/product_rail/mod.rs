//! Product rail
//!
//! A horizontally scrolling strip of product previews with previous/next
//! controls. State, viewport handling, layout and view composition live in
//! separate modules; the update side is in
//! `domains::ui::update_handlers::rail_updates`.

pub mod animator;
pub mod layout;
pub mod messages;
pub mod registry;
pub mod state;
pub mod types;
pub mod view;
pub mod viewport;

pub use layout::RailLayout;
pub use messages::RailMessage;
pub use registry::RailRegistry;
pub use state::RailState;
pub use types::*;
pub use view::product_rail;
pub use viewport::{RailViewport, ScrollBehavior, ScrollRequest, ViewportHandle};
