//! Column and row presets for the responsive grid options pane.

use std::sync::Arc;

use super::GridTemplate;
use crate::layout::{OptionsPaneItemDescriptor, SelectControl, SelectableValue, SharedState};

/// Pixel sizes offered for the `Min:` and `Fixed:` presets.
pub const SIZES: [u32; 11] = [100, 150, 200, 250, 300, 350, 400, 450, 500, 550, 650];

pub const COLUMNS_TITLE: &str = "Columns";
pub const ROWS_TITLE: &str = "Rows";

/// Fixed column counts followed by `Min: Npx` auto-fit templates.
pub fn column_options() -> Vec<SelectableValue> {
    let mut options = vec![
        SelectableValue::new("1 column", "1fr"),
        SelectableValue::new("2 columns", "1fr 1fr"),
        SelectableValue::new("3 columns", "1fr 1fr 1fr"),
    ];
    options.extend(SIZES.iter().map(|size| {
        SelectableValue::new(
            format!("Min: {size}px"),
            format!("repeat(auto-fit, minmax({size}px, auto))"),
        )
    }));
    options
}

/// `Min: Npx` row heights followed by `Fixed: Npx`.
pub fn row_options() -> Vec<SelectableValue> {
    let min = SIZES.iter().map(|size| {
        SelectableValue::new(format!("Min: {size}px"), format!("minmax({size}px, auto)"))
    });
    let fixed = SIZES
        .iter()
        .map(|size| SelectableValue::new(format!("Fixed: {size}px"), format!("{size}px")));
    min.chain(fixed).collect()
}

/// Descriptors bound to `template`: columns, then rows.
///
/// Both accept custom values verbatim.
pub fn grid_options(template: &SharedState<GridTemplate>) -> Vec<OptionsPaneItemDescriptor> {
    let columns = template.clone();
    let rows = template.clone();

    vec![
        OptionsPaneItemDescriptor::new(COLUMNS_TITLE, move || {
            let setter = columns.clone();
            SelectControl::new(
                COLUMNS_TITLE,
                column_options(),
                columns.get().template_columns.clone(),
                Arc::new(move |value| {
                    setter.update(|t| GridTemplate {
                        template_columns: value,
                        ..t.clone()
                    })
                }),
            )
            .allow_custom_value(true)
        }),
        OptionsPaneItemDescriptor::new(ROWS_TITLE, move || {
            let setter = rows.clone();
            SelectControl::new(
                ROWS_TITLE,
                row_options(),
                rows.get().auto_rows.clone(),
                Arc::new(move |value| {
                    setter.update(|t| GridTemplate {
                        auto_rows: value,
                        ..t.clone()
                    })
                }),
            )
            .allow_custom_value(true)
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_presets_start_with_fixed_counts() {
        let options = column_options();
        assert_eq!(options.len(), 3 + SIZES.len());
        assert_eq!(options[0], SelectableValue::new("1 column", "1fr"));
        assert_eq!(options[2].value, "1fr 1fr 1fr");
        assert_eq!(options[3].label, "Min: 100px");
        assert_eq!(options[3].value, "repeat(auto-fit, minmax(100px, auto))");
    }

    #[test]
    fn row_presets_list_min_then_fixed() {
        let options = row_options();
        assert_eq!(options.len(), SIZES.len() * 2);
        assert_eq!(options[0].value, "minmax(100px, auto)");
        assert_eq!(options[SIZES.len()].label, "Fixed: 100px");
        assert_eq!(options.last().map(|o| o.value.as_str()), Some("650px"));
    }

    #[test]
    fn default_template_is_a_preset() {
        let defaults = GridTemplate::default();
        assert!(column_options().iter().any(|o| o.value == defaults.template_columns));
        assert!(row_options().iter().any(|o| o.value == defaults.auto_rows));
    }

    #[test]
    fn writes_touch_only_their_own_field() {
        let template = SharedState::new(GridTemplate::default());
        let options = grid_options(&template);
        assert_eq!(options[0].title(), COLUMNS_TITLE);
        assert_eq!(options[1].title(), ROWS_TITLE);

        options[0].render().select("1fr 1fr").expect("preset");
        options[1].render().select("250px").expect("preset");

        let current = template.get();
        assert_eq!(current.template_columns, "1fr 1fr");
        assert_eq!(current.auto_rows, "250px");
    }

    #[test]
    fn custom_values_are_not_validated() {
        let template = SharedState::new(GridTemplate::default());
        let options = grid_options(&template);
        options[0].render().select("whatever you like").expect("custom");
        assert_eq!(template.get().template_columns, "whatever you like");
        assert_eq!(options[0].render().selected_label(), None);
    }
}
