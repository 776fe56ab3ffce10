//! One product rail per catalog collection

use std::collections::HashSet;

use iced::{Element, Length, widget::column};
use log::warn;
use storefront_model::{Collection, Region};

use crate::domains::ui::links::LinkRenderer;
use crate::domains::ui::preview::PreviewRenderer;

use super::product_rail::{RailKey, RailLayout, RailRegistry, product_rail};
use crate::messages::Message;

/// Stack the rails of `collections` in order. Collections whose products are
/// not loaded, that have no registered rail state, or that repeat an earlier
/// collection's id are skipped.
pub fn featured_products<'a, P, L>(
    collections: &'a [Collection],
    region: &'a Region,
    rails: &RailRegistry,
    previews: &P,
    links: &L,
    layout: RailLayout,
) -> Element<'a, Message>
where
    P: PreviewRenderer + ?Sized,
    L: LinkRenderer + ?Sized,
{
    let mut seen = HashSet::new();
    let sections = collections.iter().filter_map(|collection| {
        let key = RailKey::from(&collection.id);
        let Some(state) = rails.get(&key) else {
            warn!("no rail state for collection {}", collection.id);
            return None;
        };
        // Two strips must never share one scrollable id.
        if !seen.insert(key) {
            warn!("{}: skipping duplicate collection", state.key);
            return None;
        }
        product_rail(collection, region, state, previews, links, layout)
    });

    column(sections).width(Length::Fill).into()
}
