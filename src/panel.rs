//! Dashboard panels as seen by the layout core.
//!
//! A [`VizPanel`] is the unit a layout arranges. The core only needs a narrow
//! slice of it: its key (from which the numeric id is derived), the
//! back-reference to the layout item currently wrapping it, and an opaque
//! options blob that must survive conversions untouched.

use std::fmt;

use serde_json::Value;

use crate::layout::ItemKey;

/// Numeric panel identifier, unique across a dashboard.
pub type PanelId = u32;

const KEY_PREFIX: &str = "panel-";

/// Stable addressing key derived from a panel id (`panel-<id>`).
///
/// Keys coming from imported dashboards are kept verbatim, so a key does not
/// always parse back to an id. See [`PanelKey::panel_id`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PanelKey(String);

impl PanelKey {
    /// Key for the given panel id.
    pub fn for_id(id: PanelId) -> Self {
        Self(format!("{KEY_PREFIX}{id}"))
    }

    /// Wraps an arbitrary key string without validation.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the panel id encoded in this key, or `None` when malformed.
    ///
    /// Only the canonical spelling produced by [`PanelKey::for_id`] counts,
    /// so `panel-05` and `panel-+5` have no id.
    pub fn panel_id(&self) -> Option<PanelId> {
        let id: PanelId = self.0.strip_prefix(KEY_PREFIX)?.parse().ok()?;
        (Self::for_id(id) == *self).then_some(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PanelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A renderable panel with identity and its own configuration.
///
/// `Clone` produces an independent copy: the options blob is deep-copied and
/// nothing mutable is shared with the original.
#[derive(Debug, Clone, PartialEq)]
pub struct VizPanel {
    key: Option<PanelKey>,
    title: String,
    plugin_id: String,
    options: Value,
    parent: Option<ItemKey>,
}

impl VizPanel {
    /// Creates an unkeyed panel. It receives an id when added to a layout.
    pub fn new(plugin_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: None,
            title: title.into(),
            plugin_id: plugin_id.into(),
            options: Value::Object(Default::default()),
            parent: None,
        }
    }

    /// Sets the options blob.
    pub fn with_options(mut self, options: Value) -> Self {
        self.options = options;
        self
    }

    /// Sets an explicit key, as found in an imported dashboard.
    pub fn with_key(mut self, key: PanelKey) -> Self {
        self.key = Some(key);
        self
    }

    pub fn key(&self) -> Option<&PanelKey> {
        self.key.as_ref()
    }

    /// Numeric id derived from the key. `None` for unkeyed or malformed keys.
    pub fn id(&self) -> Option<PanelId> {
        self.key.as_ref().and_then(PanelKey::panel_id)
    }

    /// Assigns a new id. Key and id are updated together.
    pub fn set_id(&mut self, id: PanelId) {
        self.key = Some(PanelKey::for_id(id));
    }

    pub(crate) fn clear_key(&mut self) {
        self.key = None;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn plugin_id(&self) -> &str {
        &self.plugin_id
    }

    pub fn options(&self) -> &Value {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut Value {
        &mut self.options
    }

    /// Key of the layout item wrapping this panel, if any.
    pub fn parent(&self) -> Option<ItemKey> {
        self.parent
    }

    /// Detaches the panel from its current owner.
    pub fn clear_parent(&mut self) {
        self.parent = None;
    }

    pub(crate) fn set_parent(&mut self, parent: ItemKey) {
        self.parent = Some(parent);
    }

    /// True when both panels carry the same id, title, plugin and options.
    ///
    /// Ignores the owning item, which always differs after a conversion.
    pub fn same_config(&self, other: &VizPanel) -> bool {
        self.key == other.key
            && self.title == other.title
            && self.plugin_id == other.plugin_id
            && self.options == other.options
    }
}
