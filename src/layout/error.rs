//! Error types for layout operations.

use thiserror::Error;

use crate::panel::PanelId;

/// Errors returned by layout managers and the dashboard host.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The active strategy does not implement this operation.
    ///
    /// Distinct from a no-op: callers may branch on it, e.g. to switch to a
    /// strategy that does support the operation.
    #[error("{operation} is not supported by the {layout} layout")]
    NotSupported {
        /// Id of the strategy that rejected the call.
        layout: &'static str,
        /// Name of the rejected operation.
        operation: &'static str,
    },

    /// No strategy is registered under this id.
    #[error("Unknown layout strategy: {id}")]
    UnknownStrategy {
        /// Requested strategy id.
        id: String,
    },

    /// A select that does not accept custom values was given one.
    #[error("'{value}' is not a valid choice for {title}")]
    InvalidOption {
        /// Title of the option.
        title: String,
        /// Rejected value.
        value: String,
    },

    /// Row index past the end of a rows layout.
    #[error("Row {index} does not exist (layout has {len} rows)")]
    RowOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of rows present.
        len: usize,
    },

    /// The allocator has no id left above the highest one in use.
    #[error("No panel id available after {last}")]
    IdsExhausted {
        /// Highest id handed out or observed.
        last: PanelId,
    },

    /// No panel with this id exists in the active layout.
    #[error("Panel {id} not found")]
    PanelNotFound {
        /// Requested panel id.
        id: PanelId,
    },
}

impl LayoutError {
    /// True for [`LayoutError::NotSupported`].
    pub fn is_not_supported(&self) -> bool {
        matches!(self, LayoutError::NotSupported { .. })
    }
}
