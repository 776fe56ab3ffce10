pub use crate::collection::{Collection, CollectionHandle, RailItems};
pub use crate::ids::{CollectionId, ProductId, RegionId, VariantId};
pub use crate::money::{CurrencyCode, Money};
pub use crate::product::{Product, ProductVariant};
pub use crate::region::{CountryCode, Region};
