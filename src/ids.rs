//! Dashboard-wide panel id allocation.
//!
//! Every layout manager belonging to a dashboard holds a clone of the same
//! [`PanelIdAllocator`] handle. Ids handed out by [`PanelIdAllocator::next`]
//! are therefore unique across all of them, including layouts nested inside
//! rows.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use crate::layout::LayoutError;
use crate::panel::{PanelId, VizPanel};

/// Shared, monotonically increasing panel id counter.
///
/// Cloning the handle shares the counter. The counter only ever moves up:
/// [`observe`](Self::observe) raises it to a known maximum, and
/// [`next`](Self::next) bumps it by one and returns the new value.
#[derive(Debug, Clone, Default)]
pub struct PanelIdAllocator {
    last: Arc<AtomicU32>,
}

impl PanelIdAllocator {
    /// Creates a counter starting at zero. The first id is `1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a counter whose next id is `max + 1`.
    pub fn seeded(max: PanelId) -> Self {
        Self {
            last: Arc::new(AtomicU32::new(max)),
        }
    }

    /// Allocates the next id.
    ///
    /// Fails once `PanelId::MAX` has been handed out or observed; the counter
    /// never wraps.
    pub fn next(&self) -> Result<PanelId, LayoutError> {
        self.last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| last.checked_add(1))
            .map(|previous| previous + 1)
            .map_err(|last| LayoutError::IdsExhausted { last })
    }

    /// Raises the counter so the next id is greater than `max`.
    pub fn observe(&self, max: PanelId) {
        self.last.fetch_max(max, Ordering::SeqCst);
    }

    /// Highest id handed out or observed so far.
    pub fn current(&self) -> PanelId {
        self.last.load(Ordering::SeqCst)
    }

    /// True when both handles drive the same counter.
    pub fn shares_counter_with(&self, other: &PanelIdAllocator) -> bool {
        Arc::ptr_eq(&self.last, &other.last)
    }
}

/// Maximum panel id among `panels`, or `0` when there is none.
///
/// Panels without a parseable id are skipped.
pub fn max_panel_id<'a>(panels: impl IntoIterator<Item = &'a VizPanel>) -> PanelId {
    panels
        .into_iter()
        .filter_map(|panel| {
            let id = panel.id();
            if id.is_none() {
                if let Some(key) = panel.key() {
                    tracing::warn!(%key, "ignoring panel with malformed key in max id scan");
                }
            }
            id
        })
        .max()
        .unwrap_or(0)
}
