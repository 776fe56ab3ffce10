//! Strongly typed catalog identifiers.
//!
//! Catalog ids are opaque prefixed strings (`prod_01H...`, `pcol_01H...`).
//! They are never parsed; the newtypes only keep a product id from being
//! passed where a collection id is expected.

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                $name(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                $name(id.to_string())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Identifier of a product record.
    ProductId
);
string_id!(
    /// Identifier of a single purchasable variant of a product.
    VariantId
);
string_id!(
    /// Identifier of a product collection.
    CollectionId
);
string_id!(
    /// Identifier of a pricing region.
    RegionId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_display_their_raw_value() {
        let id = ProductId::new("prod_01");
        assert_eq!(id.to_string(), "prod_01");
        assert_eq!(id.as_str(), "prod_01");
    }

    #[test]
    fn ids_of_different_kinds_are_distinct_types() {
        let product = ProductId::from("x");
        let collection = CollectionId::from("x");
        assert_eq!(product.as_str(), collection.as_str());
    }
}
