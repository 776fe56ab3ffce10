//! Shared types for the product rail module

use storefront_model::CollectionId;

/// Identifies one rail instance on the page. Rails are keyed by the
/// collection they display, so each collection owns exactly one viewport.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RailKey(pub CollectionId);

impl RailKey {
    pub fn collection_id(&self) -> &CollectionId {
        &self.0
    }
}

impl From<&CollectionId> for RailKey {
    fn from(id: &CollectionId) -> Self {
        RailKey(id.clone())
    }
}

impl std::fmt::Display for RailKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rail:{}", self.0)
    }
}

/// Direction of a directional control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    Previous,
    Next,
}

impl ScrollDirection {
    /// Target offset for one activation from `current`. Not clamped: the
    /// scrollable saturates at its own extent.
    pub fn target_from(self, current: f32, step: f32) -> f32 {
        match self {
            ScrollDirection::Previous => current - step,
            ScrollDirection::Next => current + step,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_adds_or_subtracts_step() {
        assert_eq!(ScrollDirection::Next.target_from(0.0, 400.0), 400.0);
        assert_eq!(ScrollDirection::Previous.target_from(400.0, 400.0), 0.0);
        assert_eq!(ScrollDirection::Previous.target_from(0.0, 400.0), -400.0);
    }
}
