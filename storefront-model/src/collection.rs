use crate::ids::CollectionId;
use crate::product::Product;

/// URL handle of a collection (`/collections/{handle}`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CollectionHandle(String);

impl CollectionHandle {
    pub fn new(handle: impl Into<String>) -> Self {
        CollectionHandle(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CollectionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A titled, ordered group of products.
///
/// `products` stays `None` until the data layer has expanded the relation;
/// that is distinct from a collection that is known to be empty.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Collection {
    pub id: CollectionId,
    pub title: String,
    pub handle: CollectionHandle,
    #[cfg_attr(feature = "serde", serde(default))]
    pub products: Option<Vec<Product>>,
}

impl Collection {
    /// Storefront path of the collection listing, before localization.
    pub fn path(&self) -> String {
        format!("/collections/{}", self.handle)
    }

    pub fn rail_items(&self) -> RailItems<'_> {
        RailItems::from(self.products.as_deref())
    }
}

/// The three shapes a rail's item list can take at the component boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RailItems<'a> {
    /// The collection's products were never loaded.
    Unloaded,
    /// Loaded, and there are none.
    Empty,
    /// Loaded, in display order.
    Items(&'a [Product]),
}

impl<'a> RailItems<'a> {
    pub fn as_slice(&self) -> &'a [Product] {
        match self {
            RailItems::Items(items) => items,
            RailItems::Unloaded | RailItems::Empty => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl<'a> From<Option<&'a [Product]>> for RailItems<'a> {
    fn from(products: Option<&'a [Product]>) -> Self {
        match products {
            None => RailItems::Unloaded,
            Some([]) => RailItems::Empty,
            Some(items) => RailItems::Items(items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;

    fn collection(products: Option<Vec<Product>>) -> Collection {
        Collection {
            id: CollectionId::new("pcol_1"),
            title: "Destaques".into(),
            handle: CollectionHandle::new("destaques"),
            products,
        }
    }

    fn product(id: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: id.to_uppercase(),
            handle: id.into(),
            thumbnail: None,
            variants: Vec::new(),
        }
    }

    #[test]
    fn absent_products_are_unloaded() {
        assert_eq!(collection(None).rail_items(), RailItems::Unloaded);
    }

    #[test]
    fn empty_products_are_empty() {
        let c = collection(Some(Vec::new()));
        assert_eq!(c.rail_items(), RailItems::Empty);
        assert!(c.rail_items().is_empty());
    }

    #[test]
    fn populated_products_keep_order() {
        let c = collection(Some(vec![product("a"), product("b")]));
        let items = c.rail_items();
        let ids: Vec<_> = items.as_slice().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn path_uses_handle() {
        assert_eq!(collection(None).path(), "/collections/destaques");
    }
}
