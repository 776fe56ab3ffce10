//! Product preview cards shown inside rails.

use iced::{
    Element, Length,
    widget::{Space, button, column, container, text},
};
use storefront_model::{Product, Region};

use crate::domains::ui::links::LocalizedLinks;
use crate::domains::ui::theme::{self, StorefrontTheme};
use crate::messages::Message;

/// Renders the summary card of one product.
///
/// Rails call this once per item, in order, with the region they were given
/// and `is_featured` set.
pub trait PreviewRenderer {
    fn preview<'a>(
        &self,
        product: &'a Product,
        region: &'a Region,
        is_featured: bool,
    ) -> Element<'a, Message>;
}

/// Default card: thumbnail frame, title and "from" price. Clicking the card
/// navigates to the product page.
#[derive(Debug, Clone)]
pub struct ProductCard {
    width: f32,
    links: LocalizedLinks,
}

impl ProductCard {
    pub fn new(width: f32, links: LocalizedLinks) -> Self {
        Self { width, links }
    }

    /// Thumbnail height for this card width: 11:14 when featured, 9:16
    /// otherwise.
    pub fn thumbnail_height(&self, is_featured: bool) -> f32 {
        if is_featured {
            self.width * 14.0 / 11.0
        } else {
            self.width * 16.0 / 9.0
        }
    }
}

impl PreviewRenderer for ProductCard {
    fn preview<'a>(
        &self,
        product: &'a Product,
        region: &'a Region,
        is_featured: bool,
    ) -> Element<'a, Message> {
        let thumbnail = container(Space::new().height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fixed(self.thumbnail_height(is_featured)))
            .style(theme::thumbnail);

        // Prices are resolved for the region by the data layer; the region's
        // currency is only used when no variant carries a price.
        let price = match product.cheapest_price() {
            Some(money) => money.display(),
            None => format!("{} —", region.currency_code.symbol()),
        };

        let body = column![
            thumbnail,
            text(product.title.as_str())
                .size(14.0)
                .color(StorefrontTheme::TEXT_SUBTLE),
            text(price).size(14.0).color(StorefrontTheme::TEXT_BASE),
        ]
        .spacing(8)
        .width(Length::Fixed(self.width));

        button(body)
            .padding(0)
            .on_press(Message::Navigate(self.links.href(&product.path())))
            .style(theme::card_button)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_model::{CountryCode, CurrencyCode, ProductId, RegionId};

    fn card() -> ProductCard {
        ProductCard::new(
            220.0,
            LocalizedLinks::new(CountryCode::parse("br").unwrap()),
        )
    }

    #[test]
    fn featured_cards_use_taller_square_ratio() {
        let card = card();
        assert_eq!(card.thumbnail_height(true), 280.0);
        assert!(card.thumbnail_height(false) > card.thumbnail_height(true));
    }

    #[test]
    fn preview_builds_without_prices() {
        let product = Product {
            id: ProductId::new("prod_1"),
            title: "Caneca".into(),
            handle: "caneca".into(),
            thumbnail: None,
            variants: Vec::new(),
        };
        let region = Region {
            id: RegionId::new("reg_1"),
            name: "Brasil".into(),
            currency_code: CurrencyCode::parse("brl").unwrap(),
            countries: Vec::new(),
        };
        let element = card().preview(&product, &region, true);
        drop(element);
    }
}
