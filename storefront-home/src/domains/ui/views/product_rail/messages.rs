//! Local message types for product rail interactions

use iced::widget::scrollable;

use super::types::{RailKey, ScrollDirection};

#[derive(Debug, Clone)]
pub enum RailMessage {
    /// A directional control was activated.
    Scroll(RailKey, ScrollDirection),
    /// The strip reported its viewport (mount, user scroll, programmatic
    /// scroll or resize).
    ViewportChanged(RailKey, scrollable::Viewport),
}
