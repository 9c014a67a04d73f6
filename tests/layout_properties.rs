//! Conversion and id allocation properties, exercised through the public API.

use dashboard_layout::layout::{
    convert, grid, rows, GridTemplate, ResponsiveGridLayoutManager, RowsLayoutManager,
};
use dashboard_layout::{
    Dashboard, DashboardMeta, LayoutManager, PanelId, PanelIdAllocator, PanelKey, VizPanel,
};
use serde_json::json;

fn ids_of(layout: &dyn LayoutManager) -> Vec<PanelId> {
    layout.panels().iter().filter_map(|p| p.id()).collect()
}

fn sample_panels(ids: &[PanelId]) -> Vec<VizPanel> {
    ids.iter()
        .map(|&id| {
            VizPanel::new("timeseries", format!("Panel {id}"))
                .with_key(PanelKey::for_id(id))
                .with_options(json!({ "legend": id % 2 == 0, "decimals": id }))
        })
        .collect()
}

/// Deterministic mix of adds and removes.
fn script(len: usize) -> Vec<Option<usize>> {
    (0..len)
        .map(|i| if i % 3 == 2 { Some(i * 7 % 5) } else { None })
        .collect()
}

#[test]
fn panel_count_matches_adds_minus_matched_removes() {
    for layout_id in ["responsive-grid", "rows-layout"] {
        let mut dashboard = Dashboard::default();
        dashboard.switch_layout(layout_id).expect("registered");
        let mut expected: Vec<PanelId> = Vec::new();

        for step in script(30) {
            match step {
                None => {
                    let id = dashboard.add_panel(VizPanel::new("stat", "p")).expect("id available");
                    expected.insert(0, id);
                }
                Some(index) => {
                    let target = expected.get(index).copied();
                    match target {
                        Some(id) => {
                            assert!(dashboard.remove_panel(id));
                            expected.retain(|&e| e != id);
                        }
                        None => assert!(!dashboard.remove_panel(999)),
                    }
                }
            }
            assert_eq!(dashboard.body().panels().len(), expected.len());
            assert_eq!(dashboard.snapshot().ids(), expected);
        }
    }
}

#[test]
fn next_id_exceeds_max_across_all_layouts() {
    let ids = PanelIdAllocator::new();
    let mut a = ResponsiveGridLayoutManager::from_panels(
        sample_panels(&[4, 11]),
        GridTemplate::default(),
        ids.clone(),
    );
    let mut b = RowsLayoutManager::create_empty(ids.clone());

    for round in 0..10 {
        if round % 2 == 0 {
            a.add_panel(VizPanel::new("stat", "a")).expect("id available");
        } else {
            b.add_panel(VizPanel::new("stat", "b")).expect("id available");
        }
        let max = a.max_panel_id().max(b.max_panel_id());
        assert!(a.next_panel_id().expect("id available") > max);
        assert!(b.next_panel_id().expect("id available") > max);
    }

    let mut all: Vec<PanelId> = ids_of(&a);
    all.extend(ids_of(&b));
    let before = all.len();
    all.sort_unstable();
    all.dedup();
    assert_eq!(all.len(), before, "ids are unique across layouts");
}

#[test]
fn round_trip_preserves_ids_and_payloads() {
    let ids = PanelIdAllocator::seeded(4);
    let original = ResponsiveGridLayoutManager::from_panels(
        sample_panels(&[3, 1, 4]),
        GridTemplate::default(),
        ids.clone(),
    );

    let as_rows = convert(&original, &rows::DESCRIPTOR, ids.clone());
    let back = convert(as_rows.as_ref(), &grid::DESCRIPTOR, ids);

    assert_eq!(ids_of(back.as_ref()), vec![3, 1, 4]);
    for (old, new) in original.panels().into_iter().zip(back.panels()) {
        assert!(old.same_config(new));
        assert!(!std::ptr::eq(old, new));
        assert_ne!(old.parent(), new.parent());
    }
}

#[test]
fn conversion_leaves_source_untouched() {
    let ids = PanelIdAllocator::new();
    let source = ResponsiveGridLayoutManager::from_panels(
        sample_panels(&[2, 5]),
        GridTemplate::default(),
        ids.clone(),
    );
    let before: Vec<VizPanel> = source.panels().into_iter().cloned().collect();

    let mut target = convert(&source, &rows::DESCRIPTOR, ids);
    let first = target.panels()[0].clone();
    target.remove_panel(&first);

    let after: Vec<VizPanel> = source.panels().into_iter().cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn removing_absent_panel_leaves_sequence_identical() {
    let ids = PanelIdAllocator::new();
    let mut grid = ResponsiveGridLayoutManager::from_panels(
        sample_panels(&[1, 2, 3]),
        GridTemplate::default(),
        ids.clone(),
    );
    let other = ResponsiveGridLayoutManager::from_panels(
        sample_panels(&[2]),
        GridTemplate::default(),
        PanelIdAllocator::new(),
    );
    let before: Vec<VizPanel> = grid.panels().into_iter().cloned().collect();

    grid.remove_panel(other.panels()[0]);
    grid.remove_panel(&VizPanel::new("stat", "loose"));

    let after: Vec<VizPanel> = grid.panels().into_iter().cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn imported_dashboard_continues_numbering() {
    let panels = sample_panels(&[7, 2]);
    let mut dashboard = Dashboard::load(DashboardMeta::new("Imported"), move |ids| {
        Box::new(ResponsiveGridLayoutManager::from_panels(
            panels,
            GridTemplate::default(),
            ids,
        ))
    });
    assert_eq!(dashboard.add_panel(VizPanel::new("stat", "new")).expect("id available"), 8);
    assert_eq!(dashboard.snapshot().ids(), vec![8, 7, 2]);
}
