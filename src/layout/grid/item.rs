//! Children of a responsive grid.

use crate::layout::ItemKey;
use crate::panel::VizPanel;

/// Grid cell wrapping exactly one panel.
///
/// Creating the item stamps the panel's back-reference with the item key.
#[derive(Debug, PartialEq)]
pub struct ResponsiveGridItem {
    key: ItemKey,
    body: VizPanel,
}

impl ResponsiveGridItem {
    pub fn new(mut body: VizPanel) -> Self {
        let key = ItemKey::next();
        body.set_parent(key);
        Self { key, body }
    }

    pub fn key(&self) -> ItemKey {
        self.key
    }

    pub fn body(&self) -> &VizPanel {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut VizPanel {
        &mut self.body
    }
}

/// Non-panel cell, e.g. a spacer or a text block.
#[derive(Debug, PartialEq)]
pub struct GridBlock {
    key: ItemKey,
    label: String,
}

impl GridBlock {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            key: ItemKey::next(),
            label: label.into(),
        }
    }

    pub fn key(&self) -> ItemKey {
        self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A grid child. Only [`GridChild::Item`] contributes panels.
#[derive(Debug, PartialEq)]
pub enum GridChild {
    Item(ResponsiveGridItem),
    Other(GridBlock),
}

impl GridChild {
    pub fn key(&self) -> ItemKey {
        match self {
            GridChild::Item(item) => item.key(),
            GridChild::Other(block) => block.key(),
        }
    }

    pub fn panel(&self) -> Option<&VizPanel> {
        match self {
            GridChild::Item(item) => Some(item.body()),
            GridChild::Other(_) => None,
        }
    }

    pub fn panel_mut(&mut self) -> Option<&mut VizPanel> {
        match self {
            GridChild::Item(item) => Some(item.body_mut()),
            GridChild::Other(_) => None,
        }
    }

    /// True when this child is the item with key `owner`.
    pub(crate) fn wraps(&self, owner: ItemKey) -> bool {
        matches!(self, GridChild::Item(item) if item.key() == owner)
    }
}

impl From<ResponsiveGridItem> for GridChild {
    fn from(item: ResponsiveGridItem) -> Self {
        GridChild::Item(item)
    }
}

impl From<GridBlock> for GridChild {
    fn from(block: GridBlock) -> Self {
        GridChild::Other(block)
    }
}
