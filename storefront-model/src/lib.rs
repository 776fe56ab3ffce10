//! Catalog data models shared across the storefront crates.
#![allow(missing_docs)]

pub mod collection;
pub mod error;
pub mod ids;
pub mod money;
pub mod prelude;
pub mod product;
pub mod region;

// Intentionally curated re-exports for downstream consumers.
pub use collection::{Collection, CollectionHandle, RailItems};
pub use error::{ModelError, Result as ModelResult};
pub use ids::{CollectionId, ProductId, RegionId, VariantId};
pub use money::{CurrencyCode, Money};
pub use product::{Product, ProductVariant};
pub use region::{CountryCode, Region};
