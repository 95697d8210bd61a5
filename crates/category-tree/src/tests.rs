//! Forest Scenario Tests
//!
//! End-to-end checks across build, filter, count and expansion.

use crate::*;

fn scenario() -> Vec<CategoryRecord> {
    vec![
        CategoryRecord::new(1, "Groceries"),
        CategoryRecord::new_sub(2, "Beverages", vec![1]),
        CategoryRecord::new_sub(3, "Juices", vec![1, 2]),
    ]
}

#[test]
fn test_shared_child_under_every_parent() {
    let forest = build_forest(&scenario());

    assert_eq!(forest.root_ids(), vec![1]);
    let root = forest.roots()[0];
    assert_eq!(forest.child_ids(root), vec![2, 3]);

    let beverages = forest.children(root)[0];
    assert_eq!(forest.child_ids(beverages), vec![3]);

    assert_eq!(count_nodes(&forest), 4);
}

#[test]
fn test_double_placement_is_counted_twice() {
    let records = vec![
        CategoryRecord::new(1, "Fruit"),
        CategoryRecord::new(2, "Snacks"),
        CategoryRecord::new_sub(3, "Dried fruit", vec![1, 2]),
    ];
    let forest = build_forest(&records);

    assert_eq!(forest.child_ids(forest.roots()[0]), vec![3]);
    assert_eq!(forest.child_ids(forest.roots()[1]), vec![3]);
    assert_eq!(count_nodes(&forest), 4);
    assert_eq!(records.len(), 3);
}

#[test]
fn test_toggle_opens_every_placement() {
    let forest = build_forest(&[
        CategoryRecord::new(1, "Groceries"),
        CategoryRecord::new_sub(2, "Beverages", vec![1]),
        CategoryRecord::new_sub(3, "Juices", vec![1, 2]),
        CategoryRecord::new_sub(4, "Orange juice", vec![3]),
    ]);
    let state = ExpansionState::new().toggle(1).toggle(2).toggle(3);
    let rows = visible_rows(&forest, &state);

    let juice_rows: Vec<&TreeRow> = rows.iter().filter(|r| r.category_id() == 3).collect();
    assert_eq!(juice_rows.len(), 2);
    assert!(juice_rows.iter().all(|r| r.is_open));
    assert_eq!(rows.iter().filter(|r| r.category_id() == 4).count(), 2);

    let keys: Vec<String> = rows.iter().map(|r| r.key()).collect();
    assert_eq!(keys, vec!["1", "1/2", "1/2/3", "1/2/3/4", "1/3", "1/3/4"]);
}

#[test]
fn test_count_matches_fully_expanded_rows() {
    let forest = build_forest(&[
        CategoryRecord::new(1, "Root"),
        CategoryRecord::new_sub(2, "A", vec![1, 3]),
        CategoryRecord::new_sub(3, "B", vec![2, 1]),
        CategoryRecord::new_sub(4, "C", vec![3]),
    ]);
    let rows = visible_rows(&forest, &ExpansionState::expand_all(&forest));
    assert_eq!(count_nodes(&forest), rows.len());
}

#[test]
fn test_mutual_parents_terminate() {
    // Neither record is a root; both are unreachable but must not loop
    let forest = build_forest(&[
        CategoryRecord::new_sub(1, "A", vec![2]),
        CategoryRecord::new_sub(2, "B", vec![1]),
    ]);
    assert_eq!(count_nodes(&forest), 0);
    assert!(filter_forest(&forest, "", KindFilter::All).is_empty());

    // Reachable cycle through a root
    let forest = build_forest(&[
        CategoryRecord::new(9, "Root"),
        CategoryRecord::new_sub(1, "A", vec![2, 9]),
        CategoryRecord::new_sub(2, "B", vec![1]),
    ]);
    assert_eq!(count_nodes(&forest), 3);
    let filtered = filter_forest(&forest, "", KindFilter::All);
    assert_eq!(count_nodes(&filtered), 3);
}

#[test]
fn test_self_parent_not_duplicated() {
    let forest = build_forest(&[
        CategoryRecord::new(1, "Fruit"),
        CategoryRecord::new_sub(2, "Citrus", vec![2, 1]),
    ]);
    let citrus = forest.find(2).unwrap();
    assert!(!forest.child_ids(citrus).contains(&2));
    assert_eq!(count_nodes(&forest), 2);
}

#[test]
fn test_matching_leaf_survives_kind_mismatch_on_ancestors() {
    let forest = build_forest(&[
        CategoryRecord::new(1, "Household"),
        CategoryRecord::new_sub(2, "Cleaning", vec![1]),
        CategoryRecord::new_sub(3, "Sponges", vec![2]),
        CategoryRecord::new_sub(4, "Bleach", vec![2]),
    ]);
    let filtered = filter_forest(&forest, "sponge", KindFilter::Sub);

    assert_eq!(filtered.root_ids(), vec![1]);
    let root = filtered.roots()[0];
    assert_eq!(filtered.child_ids(root), vec![2]);
    assert_eq!(filtered.child_ids(filtered.children(root)[0]), vec![3]);
}

#[test]
fn test_filtered_count_never_exceeds_total() {
    let forest = build_forest(&scenario());
    for query in ["", "g", "juice", "xyz", "BEV"] {
        for kind in [KindFilter::All, KindFilter::Parent, KindFilter::Sub] {
            let filtered = filter_forest(&forest, query, kind);
            assert!(count_nodes(&filtered) <= count_nodes(&forest));
        }
    }
}

#[test]
fn test_expansion_survives_filter_changes() {
    let store = CategoryStore::from_records(scenario());
    let forest = store.forest();
    let state = ExpansionState::new().toggle(1);

    let filtered = filter_forest(&forest, "juice", KindFilter::All);
    let rows = visible_rows(&filtered, &state);
    // Beverages is collapsed, so only the direct Juices placement shows
    let keys: Vec<String> = rows.iter().map(|r| r.key()).collect();
    assert_eq!(keys, vec!["1", "1/2", "1/3"]);
    assert!(state.is_open(1));
}
