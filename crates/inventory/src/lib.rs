//! Inventory domain module.
//!
//! This crate contains the typed product record and the reporting
//! derivations, implemented purely as deterministic domain logic
//! (no IO, no rendering).

pub mod product;
pub mod report;

pub use product::Product;
pub use report::{
    InventorySummary, distinct_categories, filter_by_category, in_stock, summarize,
    total_inventory_value,
};
