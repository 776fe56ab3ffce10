use crate::ids::{ProductId, VariantId};
use crate::money::Money;

/// A purchasable variant of a product, priced for the active region.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductVariant {
    pub id: VariantId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: Option<String>,
    /// Price resolved by the commerce backend for the requested region.
    /// Absent when the variant is not sold there.
    #[cfg_attr(feature = "serde", serde(default))]
    pub calculated_price: Option<Money>,
}

/// Product record shared by the rail and the preview renderer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub handle: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub thumbnail: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub variants: Vec<ProductVariant>,
}

impl Product {
    /// Lowest priced variant, as shown on preview cards ("from" price).
    pub fn cheapest_price(&self) -> Option<&Money> {
        self.variants
            .iter()
            .filter_map(|variant| variant.calculated_price.as_ref())
            .min_by_key(|price| price.amount)
    }

    /// Storefront path of the product detail page, before localization.
    pub fn path(&self) -> String {
        format!("/products/{}", self.handle)
    }
}
