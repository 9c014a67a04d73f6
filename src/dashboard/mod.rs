//! Dashboard host.
//!
//! A [`Dashboard`] owns the panel id allocator and exactly one active layout.
//! Switching strategy converts the active layout, installs the result and
//! drops the old one.


use serde::Serialize;

use crate::config::Config;
use crate::ids::PanelIdAllocator;
use crate::layout::{
    convert, grid, rows, GridTemplate, LayoutError, LayoutManager, LayoutRegistry,
    OptionsPaneItemDescriptor, ResponsiveGridLayoutManager,
};
use crate::panel::{PanelId, VizPanel};

/// Folder and title context. Passed through, never read by layouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardMeta {
    pub title: String,
    pub folder_uid: Option<String>,
}

impl DashboardMeta {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            folder_uid: None,
        }
    }

    pub fn in_folder(mut self, folder_uid: impl Into<String>) -> Self {
        self.folder_uid = Some(folder_uid.into());
        self
    }
}

impl Default for DashboardMeta {
    fn default() -> Self {
        Self::new("New dashboard")
    }
}

/// One panel in a [`LayoutSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelSummary {
    pub id: Option<PanelId>,
    pub key: Option<String>,
    pub title: String,
}

/// Diagnostic view of the active layout, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutSnapshot {
    pub layout: &'static str,
    pub panels: Vec<PanelSummary>,
}

impl LayoutSnapshot {
    fn of(layout: &dyn LayoutManager) -> Self {
        let panels = layout
            .panels()
            .into_iter()
            .map(|panel| PanelSummary {
                id: panel.id(),
                key: panel.key().map(|k| k.to_string()),
                title: panel.title().to_string(),
            })
            .collect();
        Self {
            layout: layout.descriptor().id,
            panels,
        }
    }

    /// Panel ids in display order, skipping panels without a valid id.
    pub fn ids(&self) -> Vec<PanelId> {
        self.panels.iter().filter_map(|p| p.id).collect()
    }
}

/// A dashboard with one active layout strategy.
#[derive(Debug)]
pub struct Dashboard {
    meta: DashboardMeta,
    ids: PanelIdAllocator,
    registry: LayoutRegistry,
    body: Box<dyn LayoutManager>,
    is_editing: bool,
}

impl Dashboard {
    /// Empty dashboard laid out as a responsive grid.
    pub fn new(meta: DashboardMeta) -> Self {
        Self::load(meta, |ids| Box::new(ResponsiveGridLayoutManager::create_empty(ids)))
    }

    /// Dashboard with a pre-built layout.
    ///
    /// `build` receives the dashboard's allocator handle. The allocator is
    /// then seeded with the highest panel id found in the layout. A layout
    /// built on some other allocator is rebuilt onto the dashboard's.
    pub fn load(
        meta: DashboardMeta,
        build: impl FnOnce(PanelIdAllocator) -> Box<dyn LayoutManager>,
    ) -> Self {
        let ids = PanelIdAllocator::new();
        let body = adopt(&ids, build(ids.clone()));
        ids.observe(body.max_panel_id());
        tracing::debug!(
            layout = body.descriptor().id,
            max_id = ids.current(),
            "dashboard loaded"
        );
        Self {
            meta,
            ids,
            registry: LayoutRegistry::new(),
            body,
            is_editing: false,
        }
    }

    /// Empty dashboard using the strategy and grid sizing from `config`.
    pub fn from_config(config: &Config) -> Result<Self, LayoutError> {
        let registry = LayoutRegistry::new();
        let strategy = &config.dashboard.layout;
        let descriptor = registry
            .get(strategy)
            .ok_or_else(|| LayoutError::UnknownStrategy { id: strategy.clone() })?;

        let mut meta = DashboardMeta::new(config.dashboard.title.clone());
        meta.folder_uid = config.dashboard.folder.clone();

        let dashboard = if descriptor.id == grid::DESCRIPTOR.id {
            let template = GridTemplate::from(&config.grid);
            Self::load(meta, |ids| {
                Box::new(ResponsiveGridLayoutManager::with_template(template, ids))
            })
        } else {
            Self::load(meta, descriptor.create_empty)
        };
        Ok(dashboard.with_registry(registry))
    }

    /// Replaces the strategy registry used by [`Dashboard::switch_layout`].
    pub fn with_registry(mut self, registry: LayoutRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn meta(&self) -> &DashboardMeta {
        &self.meta
    }

    pub fn registry(&self) -> &LayoutRegistry {
        &self.registry
    }

    /// The active layout.
    pub fn body(&self) -> &dyn LayoutManager {
        self.body.as_ref()
    }

    pub fn body_mut(&mut self) -> &mut dyn LayoutManager {
        self.body.as_mut()
    }

    /// Handle to the dashboard's allocator, for building layouts.
    pub fn ids(&self) -> &PanelIdAllocator {
        &self.ids
    }

    pub fn allocate_next_id(&self) -> Result<PanelId, LayoutError> {
        self.ids.next()
    }

    pub fn is_editing(&self) -> bool {
        self.is_editing
    }

    /// Makes `layout` the active layout, dropping the previous one.
    ///
    /// The allocator is raised to at least the new layout's max id and the
    /// current edit mode is forwarded to it. A layout holding a different
    /// allocator is first rebuilt onto the dashboard's, so later ids cannot
    /// collide with its panels.
    pub fn install_layout(&mut self, layout: Box<dyn LayoutManager>) {
        let mut layout = adopt(&self.ids, layout);
        self.ids.observe(layout.max_panel_id());
        layout.edit_mode_changed(self.is_editing);

        let previous = std::mem::replace(&mut self.body, layout);
        tracing::info!(
            from = previous.descriptor().id,
            to = self.body.descriptor().id,
            panels = self.body.panels().len(),
            "layout installed"
        );
    }

    /// Converts the active layout to the strategy registered as `id`.
    ///
    /// No-op when that strategy is already active.
    pub fn switch_layout(&mut self, id: &str) -> Result<(), LayoutError> {
        let target = self
            .registry
            .get(id)
            .ok_or_else(|| LayoutError::UnknownStrategy { id: id.to_string() })?;
        if self.body.descriptor().id == target.id {
            return Ok(());
        }
        let layout = convert(self.body.as_ref(), target, self.ids.clone());
        self.install_layout(layout);
        Ok(())
    }

    pub fn add_panel(&mut self, panel: VizPanel) -> Result<PanelId, LayoutError> {
        self.body.add_panel(panel)
    }

    /// Removes the panel with `id`. Returns false if no such panel exists.
    pub fn remove_panel(&mut self, id: PanelId) -> bool {
        let Some(panel) = self.body.find_panel(id).cloned() else {
            return false;
        };
        self.body.remove_panel(&panel);
        true
    }

    pub fn duplicate_panel(&mut self, id: PanelId) -> Result<(), LayoutError> {
        let panel = self
            .body
            .find_panel(id)
            .cloned()
            .ok_or(LayoutError::PanelNotFound { id })?;
        self.body.duplicate_panel(&panel)
    }

    /// Appends an empty row, switching to the rows layout when the active
    /// strategy has no rows.
    pub fn add_new_row(&mut self) -> Result<(), LayoutError> {
        match self.body.add_new_row() {
            Err(err) if err.is_not_supported() => {
                tracing::debug!(layout = self.body.descriptor().id, "converting to rows to add a row");
                let mut layout = convert(self.body.as_ref(), &rows::DESCRIPTOR, self.ids.clone());
                layout.add_new_row()?;
                self.install_layout(layout);
                Ok(())
            }
            other => other,
        }
    }

    pub fn activate_repeaters(&mut self) -> Result<(), LayoutError> {
        self.body.activate_repeaters()
    }

    pub fn set_editing(&mut self, is_editing: bool) {
        if self.is_editing == is_editing {
            return;
        }
        self.is_editing = is_editing;
        self.body.edit_mode_changed(is_editing);
    }

    /// Option descriptors of the active layout.
    pub fn options(&self) -> Vec<OptionsPaneItemDescriptor> {
        self.body.options()
    }

    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot::of(self.body.as_ref())
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(DashboardMeta::default())
    }
}

/// Returns `layout` unchanged if it already allocates from `ids`; otherwise
/// converts it into the same strategy on `ids`.
fn adopt(ids: &PanelIdAllocator, layout: Box<dyn LayoutManager>) -> Box<dyn LayoutManager> {
    if layout.id_allocator().shares_counter_with(ids) {
        return layout;
    }
    tracing::warn!(
        layout = layout.descriptor().id,
        panels = layout.panels().len(),
        "rebuilding layout onto the dashboard id allocator"
    );
    convert(layout.as_ref(), layout.descriptor(), ids.clone())
}
