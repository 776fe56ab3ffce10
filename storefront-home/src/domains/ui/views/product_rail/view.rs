//! View builder for a product rail
//!
//! Header (title + "view all"), then the horizontal strip with the two
//! directional controls layered over it. The controls only exist while the
//! pointer is over the strip; that is derived by the `hover` widget and never
//! stored.

use iced::{
    Alignment, Element, Length,
    widget::{
        Space, button, column, container, hover, row, scrollable, text, tooltip,
    },
};
use lucide_icons::Icon;
use storefront_model::{Collection, RailItems, Region};

use crate::domains::ui::links::{LinkRenderer, LinkStyle, lucide_font};
use crate::domains::ui::preview::PreviewRenderer;
use crate::domains::ui::theme::{self, StorefrontTheme};
use crate::infra::constants::product_rail::{labels, layout as rail_layout};
use crate::messages::Message;

use super::{
    layout::RailLayout,
    messages::RailMessage,
    state::RailState,
    types::{RailKey, ScrollDirection},
};

/// Build the rail for `collection`.
///
/// Returns `None` when the collection's products were never loaded. An empty
/// product list still renders the header over an empty strip.
pub fn product_rail<'a, P, L>(
    collection: &'a Collection,
    region: &'a Region,
    state: &RailState,
    previews: &P,
    links: &L,
    layout: RailLayout,
) -> Option<Element<'a, Message>>
where
    P: PreviewRenderer + ?Sized,
    L: LinkRenderer + ?Sized,
{
    let items = match collection.rail_items() {
        RailItems::Unloaded => return None,
        items => items,
    };

    let header = row![
        text(collection.title.as_str())
            .size(rail_layout::TITLE_SIZE)
            .color(StorefrontTheme::TEXT_BASE),
        Space::new().width(Length::Fill),
        links.link(&collection.path(), labels::VIEW_ALL, LinkStyle::Interactive),
    ]
    .align_y(Alignment::Center)
    .width(Length::Fill);

    let cards = items.as_slice().iter().map(|product| {
        container(previews.preview(product, region, true))
            .width(Length::Fixed(layout.item_width))
            .into()
    });
    let strip_row = row(cards).spacing(layout.gap);

    let key_for_scroll = state.key.clone();
    let strip = scrollable(
        container(strip_row).padding(iced::Padding {
            bottom: rail_layout::STRIP_PADDING_BOTTOM,
            ..iced::Padding::ZERO
        }),
    )
    .id(state.viewport.id().clone())
    .direction(scrollable::Direction::Horizontal(
        scrollable::Scrollbar::new().width(0).scroller_width(0),
    ))
    .on_scroll(move |viewport| {
        Message::Rail(RailMessage::ViewportChanged(key_for_scroll.clone(), viewport))
    })
    .width(Length::Fill);

    let controls = row![
        control(&state.key, ScrollDirection::Previous),
        Space::new().width(Length::Fill),
        control(&state.key, ScrollDirection::Next),
    ]
    .align_y(Alignment::Center)
    .width(Length::Fill)
    .height(Length::Fill);

    let section = column![header, hover(strip, controls)]
        .spacing(rail_layout::HEADER_GAP)
        .width(Length::Fill);

    Some(
        container(section)
            .padding([layout.padding_y, 0.0])
            .width(Length::Fill)
            .into(),
    )
}

fn control<'a>(key: &RailKey, direction: ScrollDirection) -> Element<'a, Message> {
    let icon = match direction {
        ScrollDirection::Previous => Icon::ChevronLeft,
        ScrollDirection::Next => Icon::ChevronRight,
    };
    let control = button(
        text(icon.unicode().to_string())
            .font(lucide_font())
            .size(rail_layout::CONTROL_ICON_SIZE),
    )
    .padding(rail_layout::CONTROL_PADDING)
    .on_press(Message::Rail(RailMessage::Scroll(key.clone(), direction)))
    .style(theme::rail_control);

    tooltip(
        control,
        text(control_label(direction)).size(12.0),
        tooltip::Position::Bottom,
    )
    .into()
}

/// Accessible label of a directional control.
pub fn control_label(direction: ScrollDirection) -> &'static str {
    match direction {
        ScrollDirection::Previous => labels::PREVIOUS,
        ScrollDirection::Next => labels::NEXT,
    }
}
