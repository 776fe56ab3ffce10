//! Registry of rail states, one per collection shown on the page

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::time::Instant;

use iced::widget::Id as ScrollableId;
use log::warn;
use storefront_config::RailSettings;
use storefront_model::Collection;

use super::state::RailState;
use super::types::RailKey;

#[derive(Debug, Default)]
pub struct RailRegistry {
    rails: HashMap<RailKey, RailState>,
}

impl RailRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all rails with fresh state for `collections`. Offsets are not
    /// carried over: a rebuilt page starts every strip at its beginning.
    ///
    /// Collections sharing an id share one rail; the first keeps it.
    pub fn rebuild<'a>(
        &mut self,
        collections: impl IntoIterator<Item = &'a Collection>,
        settings: &RailSettings,
    ) {
        self.rails.clear();
        for collection in collections {
            let key = RailKey::from(&collection.id);
            match self.rails.entry(key) {
                Entry::Occupied(entry) => {
                    warn!(
                        "{}: duplicate collection id, \"{}\" shares its rail",
                        entry.key(),
                        collection.title
                    );
                }
                Entry::Vacant(entry) => {
                    let key = entry.key().clone();
                    entry.insert(RailState::new(key, settings));
                }
            }
        }
    }

    pub fn get(&self, key: &RailKey) -> Option<&RailState> {
        self.rails.get(key)
    }

    pub fn get_mut(&mut self, key: &RailKey) -> Option<&mut RailState> {
        self.rails.get_mut(key)
    }

    pub fn len(&self) -> usize {
        self.rails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rails.is_empty()
    }

    pub fn any_animating(&self) -> bool {
        self.rails.values().any(|rail| rail.viewport.is_animating())
    }

    /// Advance every running transition, returning the offsets to apply.
    pub fn advance_all(&mut self, now: Instant) -> Vec<(ScrollableId, f32)> {
        self.rails
            .values_mut()
            .filter_map(|rail| {
                rail.viewport
                    .advance(now)
                    .map(|offset| (rail.viewport.id().clone(), offset))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::ui::views::product_rail::types::ScrollDirection;
    use std::time::Duration;
    use storefront_model::{CollectionHandle, CollectionId};

    fn collection(id: &str) -> Collection {
        Collection {
            id: CollectionId::new(id),
            title: id.into(),
            handle: CollectionHandle::new(id),
            products: None,
        }
    }

    #[test]
    fn rebuild_creates_one_rail_per_collection() {
        let mut registry = RailRegistry::new();
        let collections = [collection("a"), collection("b")];
        registry.rebuild(&collections, &RailSettings::default());
        assert_eq!(registry.len(), 2);
        assert!(registry.get(&RailKey(CollectionId::new("a"))).is_some());
    }

    #[test]
    fn duplicate_ids_keep_the_first_rail() {
        let mut registry = RailRegistry::new();
        let mut second = collection("a");
        second.title = "Outra".into();
        let collections = [collection("a"), second, collection("b")];
        registry.rebuild(&collections, &RailSettings::default());

        assert_eq!(registry.len(), 2);
        let key = RailKey(CollectionId::new("a"));
        assert_eq!(registry.get(&key).map(|rail| &rail.key), Some(&key));
    }

    #[test]
    fn rebuild_resets_offsets() {
        let mut registry = RailRegistry::new();
        let collections = [collection("a")];
        let key = RailKey(CollectionId::new("a"));
        registry.rebuild(&collections, &RailSettings::default());
        registry
            .get_mut(&key)
            .unwrap()
            .viewport
            .report(800.0, 900.0, 3000.0);

        registry.rebuild(&collections, &RailSettings::default());
        assert!(!registry.get(&key).unwrap().viewport.is_mounted());
    }

    #[test]
    fn advance_only_reports_animating_rails() {
        let t0 = Instant::now();
        let mut registry = RailRegistry::new();
        let collections = [collection("a"), collection("b")];
        registry.rebuild(&collections, &RailSettings::default());

        let a = RailKey(CollectionId::new("a"));
        let rail = registry.get_mut(&a).unwrap();
        rail.viewport.report(0.0, 900.0, 3000.0);
        rail.scroll(ScrollDirection::Next, t0);
        assert!(registry.any_animating());

        let frames = registry.advance_all(t0 + Duration::from_millis(10));
        assert_eq!(frames.len(), 1);

        let frames = registry.advance_all(t0 + Duration::from_secs(5));
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].1, 400.0);
        assert!(!registry.any_animating());
    }
}
