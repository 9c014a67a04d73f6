//! Layout strategies for dashboard panels.
//!
//! A dashboard arranges its panels through exactly one active
//! [`LayoutManager`]. Strategies are interchangeable: each one publishes a
//! static [`LayoutDescriptor`] whose `create_from_layout` rebuilds its own
//! state from any other manager, cloning the panels so the source is left
//! untouched.
//!
//! Two strategies ship with the crate:
//! - [`ResponsiveGridLayoutManager`] (`responsive-grid`): CSS-grid style cells
//! - [`RowsLayoutManager`] (`rows-layout`): titled rows, each holding a grid

mod error;
pub mod grid;
pub mod options;
pub mod registry;
pub mod rows;
mod state;

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

pub use error::LayoutError;
pub use grid::{GridBlock, GridChild, GridTemplate, ResponsiveGridItem, ResponsiveGridLayoutManager};
pub use options::{OptionsPaneItemDescriptor, SelectControl, SelectableValue};
pub use registry::LayoutRegistry;
pub use rows::{RowItem, RowsLayoutManager};
pub use state::SharedState;

use crate::ids::{max_panel_id, PanelIdAllocator};
use crate::panel::{PanelId, VizPanel};

/// Identity of a layout item, used as a panel's back-reference to its owner.
///
/// Keys are unique for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKey(u64);

impl ItemKey {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item-{}", self.0)
    }
}

/// Builds a strategy from another manager's panels.
pub type CreateFromLayout = fn(&dyn LayoutManager, PanelIdAllocator) -> Box<dyn LayoutManager>;

/// Builds an empty strategy.
pub type CreateEmpty = fn(PanelIdAllocator) -> Box<dyn LayoutManager>;

/// Static description of a layout strategy.
///
/// Used to present the strategy and to dispatch conversions to it.
pub struct LayoutDescriptor {
    /// Stable strategy id.
    pub id: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Conversion entry point.
    pub create_from_layout: CreateFromLayout,
    /// Empty instance with default settings.
    pub create_empty: CreateEmpty,
}

impl fmt::Debug for LayoutDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutDescriptor")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Capability set shared by every layout strategy.
///
/// Managers own their panels: adding moves a panel in, removing drops it.
/// Each manager carries a handle to the dashboard's [`PanelIdAllocator`],
/// injected at construction.
pub trait LayoutManager: fmt::Debug + Send + Sync {
    /// Descriptor of this manager's strategy.
    fn descriptor(&self) -> &'static LayoutDescriptor;

    /// Assigns a fresh id to `panel`, wraps it and puts it first.
    ///
    /// Returns the id assigned. Fails without changes when the allocator is
    /// exhausted.
    fn add_panel(&mut self, panel: VizPanel) -> Result<PanelId, LayoutError>;

    /// Removes the item wrapping `panel`. No-op if this manager does not own it.
    fn remove_panel(&mut self, panel: &VizPanel);

    /// Duplicates `panel` in place.
    fn duplicate_panel(&mut self, panel: &VizPanel) -> Result<(), LayoutError>;

    /// Owned panels in display order.
    fn panels(&self) -> Vec<&VizPanel>;

    /// Highest panel id in this manager, `0` when empty.
    fn max_panel_id(&self) -> PanelId {
        max_panel_id(self.panels())
    }

    /// Handle to the dashboard-wide allocator injected at construction.
    fn id_allocator(&self) -> &PanelIdAllocator;

    /// Allocates an id from the dashboard-wide allocator.
    fn next_panel_id(&self) -> Result<PanelId, LayoutError> {
        self.id_allocator().next()
    }

    /// Called when the dashboard enters or leaves edit mode.
    fn edit_mode_changed(&mut self, _is_editing: bool) {}

    /// Settings exposed to the options pane.
    fn options(&self) -> Vec<OptionsPaneItemDescriptor>;

    /// Appends an empty row.
    fn add_new_row(&mut self) -> Result<(), LayoutError> {
        Err(self.not_supported("add_new_row"))
    }

    /// Expands repeated panels and rows.
    fn activate_repeaters(&mut self) -> Result<(), LayoutError> {
        Err(self.not_supported("activate_repeaters"))
    }

    /// `NotSupported` error tagged with this strategy.
    fn not_supported(&self, operation: &'static str) -> LayoutError {
        LayoutError::NotSupported {
            layout: self.descriptor().id,
            operation,
        }
    }

    /// Finds an owned panel by id.
    fn find_panel(&self, id: PanelId) -> Option<&VizPanel> {
        self.panels().into_iter().find(|p| p.id() == Some(id))
    }
}

/// Converts `source` into the strategy described by `target`.
///
/// The source is only read. Callers discard it after installing the result.
pub fn convert(
    source: &dyn LayoutManager,
    target: &LayoutDescriptor,
    ids: PanelIdAllocator,
) -> Box<dyn LayoutManager> {
    tracing::debug!(
        from = source.descriptor().id,
        to = target.id,
        panels = source.panels().len(),
        "converting layout"
    );
    (target.create_from_layout)(source, ids)
}
