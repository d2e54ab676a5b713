// src/pricing/mod.rs
//! Derived price-matrix logic for the product form.
//!
//! A product carries up to two attribute dimensions (e.g. Size, Color). The
//! price/inventory grid is keyed by one option from each dimension, and the
//! grid's row set must always equal the cross-product of the current option
//! names. These functions are pure and synchronous so the form can re-derive
//! the grid on every edit without losing values the user already typed.

use serde::{Deserialize, Serialize};

/// One selectable label within a dimension (e.g. "Medium").
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OptionValue {
    pub name: String,
}

impl OptionValue {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A named, ordered list of option labels for a product.
///
/// Wire shape matches the backend's `productTypes` entries. A dimension that
/// arrives without its option list deserializes as "zero options" rather than
/// failing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttributeDimension {
    pub name: String,
    #[serde(rename = "productTypeDetails", default)]
    pub options: Vec<OptionValue>,
}

impl AttributeDimension {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
        }
    }
}

/// One row of the price/inventory grid, keyed by one option from each of up
/// to two dimensions. `dim2_label` is the empty string when only one
/// dimension is populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceCell {
    pub price: f64,
    pub inventory: u32,
    #[serde(rename = "productTypeDetails1")]
    pub dim1_label: String,
    #[serde(rename = "productTypeDetails2", default)]
    pub dim2_label: String,
}

impl PriceCell {
    fn blank(dim1_label: String, dim2_label: String) -> Self {
        Self {
            price: 0.0,
            inventory: 0,
            dim1_label,
            dim2_label,
        }
    }

    /// Identity of the cell within the grid. Matching is exact and
    /// case-sensitive.
    pub fn key(&self) -> (&str, &str) {
        (&self.dim1_label, &self.dim2_label)
    }
}

/// Products carry at most two attribute dimensions. The form caps the
/// dimension editor at this count; `compute_combinations` ignores anything
/// beyond it.
pub const MAX_DIMENSIONS: usize = 2;

/// Computes the full set of grid rows for the given dimensions, every cell
/// zeroed.
///
/// - no dimensions, or the first has no options: empty result;
/// - one usable dimension: one cell per option, `dim2_label` empty;
/// - two usable dimensions: the cross-product, dimension-1-major.
pub fn compute_combinations(dimensions: &[AttributeDimension]) -> Vec<PriceCell> {
    let Some(first) = dimensions.first() else {
        return Vec::new();
    };
    if first.options.is_empty() {
        return Vec::new();
    }

    match dimensions.get(1).filter(|d| !d.options.is_empty()) {
        None => first
            .options
            .iter()
            .map(|a| PriceCell::blank(a.name.clone(), String::new()))
            .collect(),
        Some(second) => first
            .options
            .iter()
            .flat_map(|a| {
                second
                    .options
                    .iter()
                    .map(|b| PriceCell::blank(a.name.clone(), b.name.clone()))
            })
            .collect(),
    }
}

/// Merges previously entered cells into a freshly computed row set.
///
/// A fresh cell whose key pair also exists in `previous` is replaced wholesale
/// by the previous cell, keeping the user's price/inventory. Keys absent from
/// `fresh` are dropped. Output order is the fresh (dimension-1-major) order.
pub fn reconcile(previous: &[PriceCell], fresh: Vec<PriceCell>) -> Vec<PriceCell> {
    fresh
        .into_iter()
        .map(|cell| {
            previous
                .iter()
                .find(|p| p.key() == cell.key())
                .cloned()
                .unwrap_or(cell)
        })
        .collect()
}

/// Re-derives `grid` from `dimensions`, preserving values for surviving keys.
///
/// The grid is replaced wholesale; calling this every frame is safe because
/// an unchanged configuration reproduces the grid exactly.
pub fn sync_price_grid(dimensions: &[AttributeDimension], grid: &mut Vec<PriceCell>) {
    let fresh = compute_combinations(dimensions);
    *grid = reconcile(grid, fresh);
}

#[cfg(test)]
mod tests;
