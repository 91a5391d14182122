//! Reporting derivations: pure functions over a loaded product collection.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use stocktally_core::Money;

use crate::product::Product;

/// Products whose `category` equals `category` exactly (case-sensitive), in
/// original relative order.
///
/// No match yields an empty vector, not an error.
pub fn filter_by_category(products: &[Product], category: &str) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.category == category)
        .cloned()
        .collect()
}

/// Products currently in stock, in original relative order.
///
/// The lenient string interpretation of the `in_stock` field happened at
/// typed-conversion time; here the flag is authoritative.
pub fn in_stock(products: &[Product]) -> Vec<Product> {
    products.iter().filter(|p| p.in_stock).cloned().collect()
}

/// Total inventory value: sum over all products of price times stock.
///
/// The accumulator starts at exactly `0.0`; the empty collection totals
/// `0.0`, not an error.
pub fn total_inventory_value(products: &[Product]) -> f64 {
    products.iter().fold(0.0, |total, p| total + p.line_value())
}

/// Distinct category values.
///
/// Duplicates collapse; iteration order is unspecified.
pub fn distinct_categories(products: &[Product]) -> HashSet<String> {
    products.iter().map(|p| p.category.clone()).collect()
}

/// Summary of the report values over one product collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventorySummary {
    pub total_products: usize,
    /// Distinct categories, sorted for stable rendering.
    pub categories: Vec<String>,
    pub in_stock_count: usize,
    pub total_value: Money,
}

/// Compute the report summary for a product collection.
pub fn summarize(products: &[Product]) -> InventorySummary {
    let mut categories: Vec<String> = distinct_categories(products).into_iter().collect();
    categories.sort();

    InventorySummary {
        total_products: products.len(),
        categories,
        in_stock_count: in_stock(products).len(),
        total_value: Money::new(total_inventory_value(products)),
    }
}
