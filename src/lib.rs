//! Dashboard layout management core.
//!
//! A dashboard arranges its panels through one active layout strategy and
//! may swap strategy at any time. Conversion rebuilds the new strategy from
//! clones of the current panels, so ids, titles and options survive while the
//! wrapping changes. Panel ids come from one allocator per dashboard, shared
//! by every layout it holds.
//!
//! ```
//! use dashboard_layout::{Dashboard, DashboardMeta, VizPanel};
//!
//! let mut dashboard = Dashboard::new(DashboardMeta::new("Ops"));
//! dashboard.add_panel(VizPanel::new("stat", "CPU")).unwrap();
//! dashboard.add_panel(VizPanel::new("stat", "Memory")).unwrap();
//! dashboard.switch_layout("rows-layout").unwrap();
//! assert_eq!(dashboard.snapshot().ids(), vec![2, 1]);
//! ```

/// Action scripts applied by `dashctl simulate`.
pub mod commands;

/// TOML configuration with XDG path resolution.
pub mod config;

/// Dashboard host owning the id allocator and the active layout.
pub mod dashboard;

/// Panel id allocation.
pub mod ids;

/// Layout strategies and the conversion protocol.
pub mod layout;

/// Tracing subscriber setup.
pub mod logging;

/// Panels and their keys.
pub mod panel;

pub use dashboard::{Dashboard, DashboardMeta, LayoutSnapshot, PanelSummary};
pub use ids::PanelIdAllocator;
pub use layout::{LayoutDescriptor, LayoutError, LayoutManager, LayoutRegistry};
pub use panel::{PanelId, PanelKey, VizPanel};
