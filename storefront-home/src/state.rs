//! Application state

use std::time::{Duration, Instant};

use iced::Size;
use log::info;
use storefront_config::HomeConfig;

use crate::catalog::{Catalog, CatalogError};
use crate::domains::ui::links::LocalizedLinks;
use crate::domains::ui::views::product_rail::RailRegistry;

/// Catalog lifecycle as seen by the page.
#[derive(Debug, Clone, Default)]
pub enum CatalogStatus {
    #[default]
    Loading,
    Ready(Catalog),
    Failed(CatalogError),
}

#[derive(Debug)]
pub struct State {
    pub config: HomeConfig,
    pub links: LocalizedLinks,
    pub catalog: CatalogStatus,
    pub rails: RailRegistry,
    pub window_size: Size,
    /// Origin of the hero animation clock.
    pub started_at: Instant,
    /// Latest hero frame time.
    pub now: Instant,
    /// Last localized destination a link navigated to.
    pub route: Option<String>,
}

impl State {
    pub fn new(config: HomeConfig) -> Self {
        let now = Instant::now();
        Self {
            links: LocalizedLinks::new(config.storefront.country_code.clone()),
            window_size: Size::new(config.window.width, config.window.height),
            config,
            catalog: CatalogStatus::default(),
            rails: RailRegistry::new(),
            started_at: now,
            now,
            route: None,
        }
    }

    /// Install a loaded catalog and give each collection fresh rail state.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        info!(
            "catalog ready: region {} with {} collections, {} products",
            catalog.region.name,
            catalog.collections.len(),
            catalog.product_count()
        );
        self.rails.rebuild(&catalog.collections, &self.config.rail);
        self.catalog = CatalogStatus::Ready(catalog);
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        match &self.catalog {
            CatalogStatus::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }

    /// Time since the hero animation started.
    pub fn hero_elapsed(&self) -> Duration {
        self.now.saturating_duration_since(self.started_at)
    }
}
