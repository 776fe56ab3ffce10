//! Configuration library for the storefront home application.
//!
//! Resolves a [`HomeConfig`] from built-in defaults, an optional
//! `storefront.toml`, and `STOREFRONT_*` environment overrides (with `.env`
//! support), then validates it.

pub mod loader;
pub mod models;
mod util;

pub use loader::{ConfigLoad, ConfigLoader, ConfigSource, error::ConfigLoadError};
pub use models::{
    HomeConfig, RailSettings, ScrollEasing, StorefrontSettings, WindowSettings,
};
