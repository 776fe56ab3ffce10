//! Root view: hero banner over the featured product rails

use iced::{
    Element, Length,
    alignment::Horizontal,
    widget::{column, container, scrollable, text},
};

use crate::domains::ui::preview::ProductCard;
use crate::domains::ui::theme::StorefrontTheme;
use crate::domains::ui::views::{
    featured_products::featured_products,
    hero::{HERO, HeroFrame, hero_banner},
    product_rail::RailLayout,
};
use crate::infra::constants::page;
use crate::messages::Message;
use crate::state::{CatalogStatus, State};

pub fn view(state: &State) -> Element<'_, Message> {
    let frame = HeroFrame::at(&HERO, state.hero_elapsed());
    let hero = hero_banner(&HERO, &frame, &state.links, state.window_size);

    let body: Element<'_, Message> = match &state.catalog {
        CatalogStatus::Ready(catalog) => {
            let layout = RailLayout::for_window(state.window_size.width);
            let cards = ProductCard::new(layout.item_width, state.links.clone());
            featured_products(
                &catalog.collections,
                &catalog.region,
                &state.rails,
                &cards,
                &state.links,
                layout,
            )
        }
        CatalogStatus::Loading => status_line("Carregando produtos…".to_string()),
        CatalogStatus::Failed(err) => status_line(err.to_string()),
    };

    let content = container(body)
        .max_width(page::CONTENT_MAX_WIDTH)
        .padding([0.0, page::CONTENT_PADDING_X])
        .width(Length::Fill);

    scrollable(
        column![
            hero,
            container(content)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        ]
        .width(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn status_line<'a>(message: String) -> Element<'a, Message> {
    container(text(message).color(StorefrontTheme::TEXT_MUTED))
        .padding(48)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}
