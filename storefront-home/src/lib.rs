//! JF Imperadores storefront home page.
//!
//! An iced application rendering the home page of the store: a hero banner
//! followed by one horizontally scrolling product rail per collection.

pub mod app;
pub mod catalog;
pub mod domains;
pub mod infra;
pub mod messages;
pub mod state;
pub mod subscriptions;
pub mod update;
pub mod view;

pub use catalog::{Catalog, CatalogError};
pub use messages::Message;
