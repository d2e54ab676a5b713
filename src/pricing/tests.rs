// src/pricing/tests.rs
//! Tests for the price-matrix synchronizer.

use super::*;
use std::collections::HashSet;

fn dimension(name: &str, options: &[&str]) -> AttributeDimension {
    AttributeDimension {
        name: name.to_string(),
        options: options.iter().map(|o| OptionValue::new(*o)).collect(),
    }
}

fn cell(dim1: &str, dim2: &str, price: f64, inventory: u32) -> PriceCell {
    PriceCell {
        price,
        inventory,
        dim1_label: dim1.to_string(),
        dim2_label: dim2.to_string(),
    }
}

#[test]
fn test_empty_dimensions_produce_no_cells() {
    assert!(compute_combinations(&[]).is_empty());
    assert!(compute_combinations(&[dimension("Size", &[])]).is_empty());
    // A first dimension without options yields nothing even if the second
    // has options.
    assert!(compute_combinations(&[dimension("Size", &[]), dimension("Color", &["Red"])]).is_empty());
}

#[test]
fn test_single_dimension_one_cell_per_option() {
    let cells = compute_combinations(&[dimension("Size", &["S", "M", "L"])]);
    assert_eq!(cells.len(), 3);
    for (cell, expected) in cells.iter().zip(["S", "M", "L"]) {
        assert_eq!(cell.dim1_label, expected);
        assert_eq!(cell.dim2_label, "");
        assert_eq!(cell.price, 0.0);
        assert_eq!(cell.inventory, 0);
    }
}

#[test]
fn test_cross_product_size_and_order() {
    let dims = [
        dimension("Size", &["S", "M"]),
        dimension("Color", &["Red", "Blue"]),
    ];
    let cells = compute_combinations(&dims);
    let keys: Vec<(String, String)> = cells
        .iter()
        .map(|c| (c.dim1_label.clone(), c.dim2_label.clone()))
        .collect();
    // Dimension-1-major: all Color options for S precede those for M.
    assert_eq!(
        keys,
        vec![
            ("S".to_string(), "Red".to_string()),
            ("S".to_string(), "Blue".to_string()),
            ("M".to_string(), "Red".to_string()),
            ("M".to_string(), "Blue".to_string()),
        ]
    );
    assert!(cells.iter().all(|c| c.price == 0.0 && c.inventory == 0));
}

#[test]
fn test_cross_product_counts() {
    let dims = [
        dimension("Size", &["S", "M", "L"]),
        dimension("Color", &["Red", "Blue"]),
    ];
    assert_eq!(compute_combinations(&dims).len(), 6);
    assert_eq!(compute_combinations(&dims[..1]).len(), 3);
}

#[test]
fn test_keys_are_unique() {
    let dims = [
        dimension("Size", &["S", "M", "L"]),
        dimension("Color", &["Red", "Blue", "Green"]),
    ];
    let cells = compute_combinations(&dims);
    let keys: HashSet<(String, String)> = cells
        .iter()
        .map(|c| (c.dim1_label.clone(), c.dim2_label.clone()))
        .collect();
    assert_eq!(keys.len(), cells.len());
}

#[test]
fn test_third_dimension_is_ignored() {
    let dims = [
        dimension("Size", &["S"]),
        dimension("Color", &["Red"]),
        dimension("Material", &["Wool", "Cotton"]),
    ];
    let cells = compute_combinations(&dims);
    assert_eq!(cells.len(), 1);
    assert_eq!(cells[0].key(), ("S", "Red"));
}

#[test]
fn test_empty_second_dimension_falls_back_to_single() {
    let dims = [dimension("Size", &["S", "M"]), dimension("Color", &[])];
    let cells = compute_combinations(&dims);
    assert_eq!(cells.len(), 2);
    assert!(cells.iter().all(|c| c.dim2_label.is_empty()));
}

#[test]
fn test_reconcile_preserves_entered_values() {
    let previous = vec![cell("S", "Red", 100.0, 5)];
    let dims = [
        dimension("Size", &["S", "M"]),
        dimension("Color", &["Red", "Blue", "Green"]),
    ];
    let merged = reconcile(&previous, compute_combinations(&dims));
    assert_eq!(merged.len(), 6);
    let kept = merged.iter().find(|c| c.key() == ("S", "Red")).unwrap();
    assert_eq!(kept.price, 100.0);
    assert_eq!(kept.inventory, 5);
    for c in merged.iter().filter(|c| c.key() != ("S", "Red")) {
        assert_eq!(c.price, 0.0);
        assert_eq!(c.inventory, 0);
    }
}

#[test]
fn test_reconcile_drops_stale_keys() {
    let previous = vec![cell("S", "Red", 100.0, 5), cell("XL", "Red", 50.0, 2)];
    let dims = [dimension("Size", &["S"]), dimension("Color", &["Red"])];
    let merged = reconcile(&previous, compute_combinations(&dims));
    assert_eq!(merged.len(), 1);
    assert!(merged.iter().all(|c| c.dim1_label != "XL"));
}

#[test]
fn test_reconcile_is_idempotent() {
    let previous = vec![cell("S", "Red", 100.0, 5), cell("M", "Blue", 30.0, 9)];
    let dims = [
        dimension("Size", &["S", "M"]),
        dimension("Color", &["Red", "Blue"]),
    ];
    let once = reconcile(&previous, compute_combinations(&dims));
    let twice = reconcile(&once, compute_combinations(&dims));
    assert_eq!(once, twice);
}

#[test]
fn test_reconcile_with_identical_key_set_returns_previous_values() {
    let previous = vec![
        cell("S", "Red", 10.0, 1),
        cell("S", "Blue", 20.0, 2),
        cell("M", "Red", 30.0, 3),
        cell("M", "Blue", 40.0, 4),
    ];
    let dims = [
        dimension("Size", &["S", "M"]),
        dimension("Color", &["Red", "Blue"]),
    ];
    let merged = reconcile(&previous, compute_combinations(&dims));
    assert_eq!(merged, previous);
}

#[test]
fn test_removing_second_dimension_resets_values() {
    // No prior cell has an empty dim2 label, so every single-dimension key is
    // new and resets to zero.
    let previous = vec![cell("S", "Red", 100.0, 5), cell("M", "Blue", 200.0, 1)];
    let dims = [dimension("Size", &["S", "M"])];
    let merged = reconcile(&previous, compute_combinations(&dims));
    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].key(), ("S", ""));
    assert_eq!(merged[1].key(), ("M", ""));
    assert!(merged.iter().all(|c| c.price == 0.0 && c.inventory == 0));
}

#[test]
fn test_key_matching_is_case_sensitive() {
    let previous = vec![cell("s", "red", 100.0, 5)];
    let dims = [dimension("Size", &["S"]), dimension("Color", &["Red"])];
    let merged = reconcile(&previous, compute_combinations(&dims));
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].price, 0.0);
}

#[test]
fn test_sync_price_grid_replaces_wholesale() {
    let mut grid = vec![cell("S", "Red", 100.0, 5)];
    let dims = [
        dimension("Size", &["S", "M"]),
        dimension("Color", &["Red", "Blue"]),
    ];
    sync_price_grid(&dims, &mut grid);
    assert_eq!(grid.len(), 4);
    assert_eq!(
        grid.iter().find(|c| c.key() == ("S", "Red")).unwrap().price,
        100.0
    );

    // Unchanged configuration reproduces the grid exactly.
    let snapshot = grid.clone();
    sync_price_grid(&dims, &mut grid);
    assert_eq!(grid, snapshot);
}

#[test]
fn test_dimension_without_options_list_deserializes_as_empty() {
    let dim: AttributeDimension = serde_json::from_str(r#"{"name":"Size"}"#).unwrap();
    assert!(dim.options.is_empty());
    assert!(compute_combinations(&[dim]).is_empty());
}

#[test]
fn test_price_cell_wire_names() {
    let json = serde_json::to_value(cell("S", "Red", 12.5, 3)).unwrap();
    assert_eq!(json["productTypeDetails1"], "S");
    assert_eq!(json["productTypeDetails2"], "Red");
    assert_eq!(json["price"], 12.5);
    assert_eq!(json["inventory"], 3);
}
