//! Responsive grid layout.
//!
//! Panels are laid out as cells of a CSS-grid style container whose column
//! template and row sizing are the only layout-wide settings. New panels are
//! always placed first.

mod item;
pub mod options;


pub use item::{GridBlock, GridChild, ResponsiveGridItem};

use crate::ids::{max_panel_id, PanelIdAllocator};
use crate::layout::{
    ItemKey, LayoutDescriptor, LayoutError, LayoutManager, OptionsPaneItemDescriptor, SharedState,
};
use crate::panel::{PanelId, VizPanel};

/// Column template used by empty and converted grids.
pub const DEFAULT_TEMPLATE_COLUMNS: &str = "repeat(auto-fit, minmax(400px, auto))";

/// Row sizing used by empty and converted grids.
pub const DEFAULT_AUTO_ROWS: &str = "minmax(300px, auto)";

/// Descriptor of the responsive grid strategy.
pub static DESCRIPTOR: LayoutDescriptor = LayoutDescriptor {
    id: "responsive-grid",
    name: "Responsive grid",
    description: "CSS layout that adjusts to the available space",
    create_from_layout: boxed_from_layout,
    create_empty: boxed_empty,
};

fn boxed_from_layout(source: &dyn LayoutManager, ids: PanelIdAllocator) -> Box<dyn LayoutManager> {
    Box::new(ResponsiveGridLayoutManager::create_from_layout(source, ids))
}

fn boxed_empty(ids: PanelIdAllocator) -> Box<dyn LayoutManager> {
    Box::new(ResponsiveGridLayoutManager::create_empty(ids))
}

/// Grid-wide sizing tokens. Any string is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridTemplate {
    pub template_columns: String,
    pub auto_rows: String,
}

impl GridTemplate {
    pub fn new(template_columns: impl Into<String>, auto_rows: impl Into<String>) -> Self {
        Self {
            template_columns: template_columns.into(),
            auto_rows: auto_rows.into(),
        }
    }
}

impl Default for GridTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE_COLUMNS, DEFAULT_AUTO_ROWS)
    }
}

/// Layout manager arranging panels in a responsive grid.
#[derive(Debug)]
pub struct ResponsiveGridLayoutManager {
    children: Vec<GridChild>,
    template: SharedState<GridTemplate>,
    ids: PanelIdAllocator,
}

impl ResponsiveGridLayoutManager {
    /// Empty grid with the default template.
    pub fn create_empty(ids: PanelIdAllocator) -> Self {
        Self::with_template(GridTemplate::default(), ids)
    }

    /// Empty grid with a custom template.
    pub fn with_template(template: GridTemplate, ids: PanelIdAllocator) -> Self {
        Self {
            children: Vec::new(),
            template: SharedState::new(template),
            ids,
        }
    }

    /// Rebuilds a grid from any layout.
    ///
    /// Panels are cloned in display order and wrapped in new items; ids and
    /// options are unchanged. The source is not modified. Non-panel content of
    /// the source is not carried over, and the template is reset to default.
    pub fn create_from_layout(source: &dyn LayoutManager, ids: PanelIdAllocator) -> Self {
        let children = source
            .panels()
            .into_iter()
            .map(|panel| GridChild::Item(ResponsiveGridItem::new(panel.clone())))
            .collect();

        Self {
            children,
            template: SharedState::new(GridTemplate::default()),
            ids,
        }
    }

    /// Wraps panels from an imported dashboard, keeping their order and keys.
    ///
    /// Unkeyed panels and panels whose id is already taken get a fresh id.
    /// If no id is left, such panels stay unkeyed. Malformed keys are kept as
    /// they are.
    pub fn from_panels(
        panels: impl IntoIterator<Item = VizPanel>,
        template: GridTemplate,
        ids: PanelIdAllocator,
    ) -> Self {
        let panels: Vec<VizPanel> = panels.into_iter().collect();
        ids.observe(max_panel_id(&panels));

        let mut seen = std::collections::HashSet::new();
        let children = panels
            .into_iter()
            .map(|mut panel| {
                let needs_id = match (panel.key(), panel.id()) {
                    (None, _) => true,
                    (Some(_), Some(id)) => !seen.insert(id),
                    (Some(_), None) => false,
                };
                if needs_id {
                    match ids.next() {
                        Ok(id) => {
                            tracing::debug!(id, title = panel.title(), "assigning id to imported panel");
                            panel.set_id(id);
                            seen.insert(id);
                        }
                        Err(err) => {
                            tracing::warn!(%err, title = panel.title(), "imported panel left without id");
                            panel.clear_key();
                        }
                    }
                }
                panel.clear_parent();
                GridChild::Item(ResponsiveGridItem::new(panel))
            })
            .collect();

        Self {
            children,
            template: SharedState::new(template),
            ids,
        }
    }

    pub fn children(&self) -> &[GridChild] {
        &self.children
    }

    /// Current template snapshot.
    pub fn template(&self) -> GridTemplate {
        self.template.get().as_ref().clone()
    }

    pub fn set_template(&mut self, template: GridTemplate) {
        self.template.set(template);
    }

    /// Appends a non-panel block and returns its key.
    pub fn push_block(&mut self, label: impl Into<String>) -> ItemKey {
        let block = GridBlock::new(label);
        let key = block.key();
        let mut children = std::mem::take(&mut self.children);
        children.push(GridChild::Other(block));
        self.set_children(children);
        key
    }

    /// Mutable access to an owned panel, by id.
    pub fn panel_mut(&mut self, id: PanelId) -> Option<&mut VizPanel> {
        self.children
            .iter_mut()
            .filter_map(GridChild::panel_mut)
            .find(|p| p.id() == Some(id))
    }

    /// True when this grid owns the item `owner`.
    pub fn owns(&self, owner: ItemKey) -> bool {
        self.children.iter().any(|c| c.wraps(owner))
    }

    fn set_children(&mut self, children: Vec<GridChild>) {
        self.children = children;
    }
}

impl LayoutManager for ResponsiveGridLayoutManager {
    fn descriptor(&self) -> &'static LayoutDescriptor {
        &DESCRIPTOR
    }

    fn add_panel(&mut self, mut panel: VizPanel) -> Result<PanelId, LayoutError> {
        let id = self.next_panel_id()?;
        panel.set_id(id);
        panel.clear_parent();

        let mut children = Vec::with_capacity(self.children.len() + 1);
        children.push(GridChild::Item(ResponsiveGridItem::new(panel)));
        children.append(&mut self.children);
        self.set_children(children);

        tracing::debug!(id, layout = DESCRIPTOR.id, "panel added");
        Ok(id)
    }

    fn remove_panel(&mut self, panel: &VizPanel) {
        let Some(owner) = panel.parent() else {
            return;
        };
        if !self.owns(owner) {
            return;
        }
        let children = std::mem::take(&mut self.children)
            .into_iter()
            .filter(|child| !child.wraps(owner))
            .collect();
        self.set_children(children);
        tracing::debug!(key = ?panel.key(), layout = DESCRIPTOR.id, "panel removed");
    }

    fn duplicate_panel(&mut self, _panel: &VizPanel) -> Result<(), LayoutError> {
        Err(self.not_supported("duplicate_panel"))
    }

    fn panels(&self) -> Vec<&VizPanel> {
        self.children.iter().filter_map(GridChild::panel).collect()
    }

    fn id_allocator(&self) -> &PanelIdAllocator {
        &self.ids
    }

    fn options(&self) -> Vec<OptionsPaneItemDescriptor> {
        options::grid_options(&self.template)
    }
}
