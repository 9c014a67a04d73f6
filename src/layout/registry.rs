//! Registry of available layout strategies.

use crate::layout::{grid, rows, LayoutDescriptor};

/// Maps strategy ids to their descriptors, in registration order.
///
/// # Example
///
/// ```
/// use dashboard_layout::layout::LayoutRegistry;
///
/// let registry = LayoutRegistry::new();
/// assert!(registry.get("responsive-grid").is_some());
/// assert!(registry.get("masonry").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct LayoutRegistry {
    descriptors: Vec<&'static LayoutDescriptor>,
}

impl LayoutRegistry {
    /// Registry holding the built-in strategies: responsive grid, then rows.
    pub fn new() -> Self {
        Self {
            descriptors: vec![&grid::DESCRIPTOR, &rows::DESCRIPTOR],
        }
    }

    /// Registers a strategy, replacing any existing one with the same id.
    pub fn register(&mut self, descriptor: &'static LayoutDescriptor) {
        match self.descriptors.iter_mut().find(|d| d.id == descriptor.id) {
            Some(slot) => *slot = descriptor,
            None => self.descriptors.push(descriptor),
        }
    }

    pub fn get(&self, id: &str) -> Option<&'static LayoutDescriptor> {
        self.descriptors.iter().copied().find(|d| d.id == id)
    }

    pub fn available_ids(&self) -> Vec<&'static str> {
        self.descriptors.iter().map(|d| d.id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static LayoutDescriptor> + '_ {
        self.descriptors.iter().copied()
    }
}

impl Default for LayoutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::PanelIdAllocator;
    use crate::layout::{LayoutManager, ResponsiveGridLayoutManager};

    fn stub_from_layout(_: &dyn LayoutManager, ids: PanelIdAllocator) -> Box<dyn LayoutManager> {
        stub_empty(ids)
    }

    fn stub_empty(ids: PanelIdAllocator) -> Box<dyn LayoutManager> {
        Box::new(ResponsiveGridLayoutManager::create_empty(ids))
    }

    static STUB: LayoutDescriptor = LayoutDescriptor {
        id: "rows-layout",
        name: "Stub rows",
        description: "Replacement for tests",
        create_from_layout: stub_from_layout,
        create_empty: stub_empty,
    };

    #[test]
    fn builtins_in_order() {
        let registry = LayoutRegistry::new();
        assert_eq!(registry.available_ids(), vec!["responsive-grid", "rows-layout"]);
    }

    #[test]
    fn get_unknown_returns_none() {
        let registry = LayoutRegistry::default();
        assert!(registry.get("").is_none());
        assert!(registry.get("Responsive-Grid").is_none());
    }

    #[test]
    fn register_replaces_same_id() {
        let mut registry = LayoutRegistry::new();
        registry.register(&STUB);
        assert_eq!(registry.available_ids().len(), 2);
        assert_eq!(registry.get("rows-layout").map(|d| d.name), Some("Stub rows"));
    }

    #[test]
    fn descriptors_build_empty_managers() {
        let registry = LayoutRegistry::new();
        for descriptor in registry.iter() {
            let layout = (descriptor.create_empty)(PanelIdAllocator::new());
            assert_eq!(layout.descriptor().id, descriptor.id);
            assert!(layout.panels().is_empty());
        }
    }
}
