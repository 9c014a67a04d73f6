//! Rows layout.
//!
//! Panels are grouped into titled, collapsible rows. Each row arranges its
//! own panels with a nested [`ResponsiveGridLayoutManager`]; all rows share
//! the dashboard's id allocator, so ids stay unique across them.

use crate::ids::PanelIdAllocator;
use crate::layout::{
    ItemKey, LayoutDescriptor, LayoutError, LayoutManager, OptionsPaneItemDescriptor,
    ResponsiveGridLayoutManager,
};
use crate::panel::{PanelId, VizPanel};

/// Title given to rows created without one.
pub const DEFAULT_ROW_TITLE: &str = "Row title";

/// Descriptor of the rows strategy.
pub static DESCRIPTOR: LayoutDescriptor = LayoutDescriptor {
    id: "rows-layout",
    name: "Rows",
    description: "Rows layout",
    create_from_layout: boxed_from_layout,
    create_empty: boxed_empty,
};

fn boxed_from_layout(source: &dyn LayoutManager, ids: PanelIdAllocator) -> Box<dyn LayoutManager> {
    Box::new(RowsLayoutManager::create_from_layout(source, ids))
}

fn boxed_empty(ids: PanelIdAllocator) -> Box<dyn LayoutManager> {
    Box::new(RowsLayoutManager::create_empty(ids))
}

/// A titled row holding a grid of panels.
#[derive(Debug)]
pub struct RowItem {
    key: ItemKey,
    title: String,
    is_collapsed: bool,
    layout: ResponsiveGridLayoutManager,
}

impl RowItem {
    pub fn new(title: impl Into<String>, layout: ResponsiveGridLayoutManager) -> Self {
        Self {
            key: ItemKey::next(),
            title: title.into(),
            is_collapsed: false,
            layout,
        }
    }

    pub fn key(&self) -> ItemKey {
        self.key
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_collapsed(&self) -> bool {
        self.is_collapsed
    }

    pub fn layout(&self) -> &ResponsiveGridLayoutManager {
        &self.layout
    }
}

/// Layout manager arranging panels in rows.
#[derive(Debug)]
pub struct RowsLayoutManager {
    rows: Vec<RowItem>,
    ids: PanelIdAllocator,
    is_editing: bool,
}

impl RowsLayoutManager {
    pub fn create_empty(ids: PanelIdAllocator) -> Self {
        Self {
            rows: Vec::new(),
            ids,
            is_editing: false,
        }
    }

    /// Single row containing a grid rebuilt from `source`.
    ///
    /// The source is not modified.
    pub fn create_from_layout(source: &dyn LayoutManager, ids: PanelIdAllocator) -> Self {
        let grid = ResponsiveGridLayoutManager::create_from_layout(source, ids.clone());
        Self {
            rows: vec![RowItem::new(DEFAULT_ROW_TITLE, grid)],
            ids,
            is_editing: false,
        }
    }

    pub fn rows(&self) -> &[RowItem] {
        &self.rows
    }

    pub fn is_editing(&self) -> bool {
        self.is_editing
    }

    /// Grid of the row at `index`.
    pub fn row_layout_mut(&mut self, index: usize) -> Option<&mut ResponsiveGridLayoutManager> {
        self.rows.get_mut(index).map(|row| &mut row.layout)
    }

    pub fn set_row_title(&mut self, index: usize, title: impl Into<String>) -> Result<(), LayoutError> {
        let row = self.row_mut(index)?;
        row.title = title.into();
        Ok(())
    }

    /// Flips the collapsed flag and returns the new value.
    pub fn toggle_row_collapse(&mut self, index: usize) -> Result<bool, LayoutError> {
        let row = self.row_mut(index)?;
        row.is_collapsed = !row.is_collapsed;
        Ok(row.is_collapsed)
    }

    fn row_mut(&mut self, index: usize) -> Result<&mut RowItem, LayoutError> {
        let len = self.rows.len();
        self.rows
            .get_mut(index)
            .ok_or(LayoutError::RowOutOfRange { index, len })
    }

    fn push_row(&mut self) -> &mut RowItem {
        let mut grid = ResponsiveGridLayoutManager::create_empty(self.ids.clone());
        grid.edit_mode_changed(self.is_editing);
        self.rows.push(RowItem::new(DEFAULT_ROW_TITLE, grid));
        let index = self.rows.len() - 1;
        &mut self.rows[index]
    }
}

impl LayoutManager for RowsLayoutManager {
    fn descriptor(&self) -> &'static LayoutDescriptor {
        &DESCRIPTOR
    }

    fn add_panel(&mut self, panel: VizPanel) -> Result<PanelId, LayoutError> {
        if self.rows.is_empty() {
            self.push_row();
        }
        self.rows[0].layout.add_panel(panel)
    }

    fn remove_panel(&mut self, panel: &VizPanel) {
        let Some(owner) = panel.parent() else {
            return;
        };
        if let Some(row) = self.rows.iter_mut().find(|row| row.layout.owns(owner)) {
            row.layout.remove_panel(panel);
        }
    }

    fn duplicate_panel(&mut self, _panel: &VizPanel) -> Result<(), LayoutError> {
        Err(self.not_supported("duplicate_panel"))
    }

    fn panels(&self) -> Vec<&VizPanel> {
        self.rows.iter().flat_map(|row| row.layout.panels()).collect()
    }

    fn id_allocator(&self) -> &PanelIdAllocator {
        &self.ids
    }

    fn edit_mode_changed(&mut self, is_editing: bool) {
        self.is_editing = is_editing;
        for row in &mut self.rows {
            row.layout.edit_mode_changed(is_editing);
        }
    }

    fn options(&self) -> Vec<OptionsPaneItemDescriptor> {
        Vec::new()
    }

    fn add_new_row(&mut self) -> Result<(), LayoutError> {
        let row = self.push_row();
        tracing::debug!(row = %row.key(), "row added");
        Ok(())
    }
}
