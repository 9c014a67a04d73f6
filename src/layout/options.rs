//! Option descriptors handed to the options pane.
//!
//! A layout exposes its settings as a list of [`OptionsPaneItemDescriptor`]s.
//! Each descriptor pairs a title with a render callback; rendering reads the
//! layout's live settings and returns a [`SelectControl`] whose setter writes
//! back into the same layout. Presentation is left to the caller, with
//! [`SelectControl::line`] as a ready-made terminal rendering.

use std::fmt;
use std::sync::Arc;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::layout::LayoutError;

/// One preset choice of a select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectableValue {
    pub label: String,
    pub value: String,
}

impl SelectableValue {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Setter bound to a layout setting.
pub type OnChange = Arc<dyn Fn(String) + Send + Sync>;

/// A rendered select: presets, current value, and a bound setter.
#[derive(Clone)]
pub struct SelectControl {
    title: String,
    options: Vec<SelectableValue>,
    value: String,
    allow_custom_value: bool,
    on_change: OnChange,
}

impl fmt::Debug for SelectControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectControl")
            .field("title", &self.title)
            .field("value", &self.value)
            .field("options", &self.options.len())
            .field("allow_custom_value", &self.allow_custom_value)
            .finish()
    }
}

impl SelectControl {
    pub fn new(
        title: impl Into<String>,
        options: Vec<SelectableValue>,
        value: impl Into<String>,
        on_change: OnChange,
    ) -> Self {
        Self {
            title: title.into(),
            options,
            value: value.into(),
            allow_custom_value: false,
            on_change,
        }
    }

    /// Accept values outside the preset list.
    pub fn allow_custom_value(mut self, allow: bool) -> Self {
        self.allow_custom_value = allow;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn options(&self) -> &[SelectableValue] {
        &self.options
    }

    /// Value read from the layout when this control was rendered.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn allows_custom_value(&self) -> bool {
        self.allow_custom_value
    }

    /// Label of the preset matching the current value, if any.
    pub fn selected_label(&self) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == self.value)
            .map(|o| o.label.as_str())
    }

    /// Writes `value` back into the layout.
    ///
    /// Custom values are passed through unchecked when allowed.
    pub fn select(&self, value: impl Into<String>) -> Result<(), LayoutError> {
        let value = value.into();
        if !self.allow_custom_value && !self.options.iter().any(|o| o.value == value) {
            return Err(LayoutError::InvalidOption {
                title: self.title.clone(),
                value,
            });
        }
        (self.on_change)(value);
        Ok(())
    }

    /// Selects the preset with the given label.
    pub fn select_label(&self, label: &str) -> Result<(), LayoutError> {
        match self.options.iter().find(|o| o.label == label) {
            Some(option) => self.select(option.value.clone()),
            None => Err(LayoutError::InvalidOption {
                title: self.title.clone(),
                value: label.to_string(),
            }),
        }
    }

    /// Renders as `Title: label (value)`, or the raw value when custom.
    pub fn line(&self) -> Line<'static> {
        let shown = match self.selected_label() {
            Some(label) => format!("{label} ({})", self.value),
            None => format!("{} (custom)", self.value),
        };
        Line::from(vec![
            Span::styled(
                format!("{}: ", self.title),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(shown),
        ])
    }
}

type RenderFn = Box<dyn Fn() -> SelectControl + Send + Sync>;

/// Title plus render callback, consumed by the options pane.
pub struct OptionsPaneItemDescriptor {
    title: String,
    render: RenderFn,
}

impl fmt::Debug for OptionsPaneItemDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionsPaneItemDescriptor")
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

impl OptionsPaneItemDescriptor {
    pub fn new(
        title: impl Into<String>,
        render: impl Fn() -> SelectControl + Send + Sync + 'static,
    ) -> Self {
        Self {
            title: title.into(),
            render: Box::new(render),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Renders against the layout's current settings.
    pub fn render(&self) -> SelectControl {
        (self.render)()
    }
}
