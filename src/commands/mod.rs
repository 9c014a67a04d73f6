//! Action scripts for `dashctl simulate`.
//!
//! Each action is one CLI argument of the form `verb` or `verb:argument`:
//!
//! | Action                 | Effect                                   |
//! |------------------------|------------------------------------------|
//! | `add:<title>`          | add a panel titled `<title>`             |
//! | `remove:<id>`          | remove panel `<id>` (no-op if absent)    |
//! | `duplicate:<id>`       | duplicate panel `<id>`                   |
//! | `switch:<layout-id>`   | convert to another strategy              |
//! | `row`                  | add a row                                |
//! | `edit:on` / `edit:off` | enter or leave edit mode                 |
//! | `set:<title>=<value>`  | select a value in a layout option        |

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::dashboard::Dashboard;
use crate::layout::LayoutError;
use crate::panel::{PanelId, VizPanel};

/// Plugin assigned to panels created by `add:` actions.
pub const DEFAULT_PLUGIN: &str = "timeseries";

/// One step of a simulation script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add(String),
    Remove(PanelId),
    Duplicate(PanelId),
    Switch(String),
    AddRow,
    Edit(bool),
    SetOption { title: String, value: String },
}

/// Errors from parsing or applying an action.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("Invalid action '{input}': {reason}")]
    Parse { input: String, reason: String },

    #[error("The {layout} layout has no option titled '{title}'")]
    UnknownOption { layout: &'static str, title: String },

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

fn parse_error(input: &str, reason: impl Into<String>) -> ActionError {
    ActionError::Parse {
        input: input.to_string(),
        reason: reason.into(),
    }
}

fn parse_id(input: &str, raw: &str) -> Result<PanelId, ActionError> {
    raw.trim()
        .parse()
        .map_err(|_| parse_error(input, format!("'{raw}' is not a panel id")))
}

impl FromStr for Action {
    type Err = ActionError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (verb, arg) = match input.split_once(':') {
            Some((verb, arg)) => (verb, Some(arg)),
            None => (input, None),
        };

        match (verb, arg) {
            ("row", None) => Ok(Action::AddRow),
            ("add", Some(title)) if !title.is_empty() => Ok(Action::Add(title.to_string())),
            ("remove", Some(id)) => Ok(Action::Remove(parse_id(input, id)?)),
            ("duplicate", Some(id)) => Ok(Action::Duplicate(parse_id(input, id)?)),
            ("switch", Some(layout)) if !layout.is_empty() => {
                Ok(Action::Switch(layout.to_string()))
            }
            ("edit", Some("on")) => Ok(Action::Edit(true)),
            ("edit", Some("off")) => Ok(Action::Edit(false)),
            ("edit", Some(_)) => Err(parse_error(input, "expected edit:on or edit:off")),
            ("set", Some(assignment)) => match assignment.split_once('=') {
                Some((title, value)) if !title.is_empty() => Ok(Action::SetOption {
                    title: title.to_string(),
                    value: value.to_string(),
                }),
                _ => Err(parse_error(input, "expected set:<option>=<value>")),
            },
            (verb, None) if ["add", "remove", "duplicate", "switch", "edit", "set"].contains(&verb) => {
                Err(parse_error(input, format!("{verb} needs an argument")))
            }
            _ => Err(parse_error(input, "unknown action")),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Add(title) => write!(f, "add:{title}"),
            Action::Remove(id) => write!(f, "remove:{id}"),
            Action::Duplicate(id) => write!(f, "duplicate:{id}"),
            Action::Switch(layout) => write!(f, "switch:{layout}"),
            Action::AddRow => write!(f, "row"),
            Action::Edit(true) => write!(f, "edit:on"),
            Action::Edit(false) => write!(f, "edit:off"),
            Action::SetOption { title, value } => write!(f, "set:{title}={value}"),
        }
    }
}

impl Action {
    /// Applies the action to `dashboard`.
    ///
    /// Removing an absent panel succeeds without changes.
    pub fn apply(&self, dashboard: &mut Dashboard) -> Result<(), ActionError> {
        tracing::debug!(action = %self, "applying action");
        match self {
            Action::Add(title) => {
                dashboard.add_panel(VizPanel::new(DEFAULT_PLUGIN, title.clone()))?;
            }
            Action::Remove(id) => {
                if !dashboard.remove_panel(*id) {
                    tracing::warn!(id, "no panel to remove");
                }
            }
            Action::Duplicate(id) => dashboard.duplicate_panel(*id)?,
            Action::Switch(layout) => dashboard.switch_layout(layout)?,
            Action::AddRow => dashboard.add_new_row()?,
            Action::Edit(is_editing) => dashboard.set_editing(*is_editing),
            Action::SetOption { title, value } => {
                let descriptor = dashboard
                    .options()
                    .into_iter()
                    .find(|d| d.title().eq_ignore_ascii_case(title))
                    .ok_or_else(|| ActionError::UnknownOption {
                        layout: dashboard.body().descriptor().id,
                        title: title.clone(),
                    })?;
                let control = descriptor.render();
                if control.select_label(value).is_err() {
                    control.select(value.clone())?;
                }
            }
        }
        Ok(())
    }
}

/// Parses every action, stopping at the first invalid one.
pub fn parse_script<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<Action>, ActionError> {
    inputs.iter().map(|s| s.as_ref().parse()).collect()
}

/// Applies actions in order, stopping at the first failure.
pub fn run_script(dashboard: &mut Dashboard, actions: &[Action]) -> Result<(), ActionError> {
    actions.iter().try_for_each(|action| action.apply(dashboard))
}
