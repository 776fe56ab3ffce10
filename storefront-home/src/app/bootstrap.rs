use std::sync::Arc;

use iced::Task;
use log::info;
use storefront_config::{
    ConfigLoad, ConfigLoadError, ConfigLoader, ConfigSource, HomeConfig,
};

use crate::catalog::Catalog;
use crate::messages::Message;
use crate::state::State;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub home: Arc<HomeConfig>,
    pub source: ConfigSource,
}

impl AppConfig {
    pub fn new(home: HomeConfig) -> Self {
        Self {
            home: Arc::new(home),
            source: ConfigSource::Defaults,
        }
    }

    /// Resolve configuration from `.env`, the process environment and an
    /// optional `storefront.toml`.
    pub fn from_environment() -> Result<Self, ConfigLoadError> {
        let loader = ConfigLoader::from_process_env()?;
        Ok(Self::from_load(loader.load()?))
    }

    pub fn from_load(load: ConfigLoad) -> Self {
        if !load.overrides.is_empty() {
            info!("environment overrides: {}", load.overrides.join(", "));
        }
        Self {
            home: Arc::new(load.config),
            source: load.source,
        }
    }

    pub fn home(&self) -> &HomeConfig {
        &self.home
    }
}

/// Initial state plus the catalog load.
pub fn runtime_boot(config: &AppConfig) -> (State, Task<Message>) {
    let state = State::new(config.home().clone());
    let catalog_path = config.home().storefront.catalog_path.clone();
    match &catalog_path {
        Some(path) => info!("loading catalog from {}", path.display()),
        None => info!("loading bundled sample catalog"),
    }
    (
        state,
        Task::perform(Catalog::load(catalog_path), Message::CatalogLoaded),
    )
}
