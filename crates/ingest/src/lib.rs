//! File ingestion boundary.
//!
//! Loaders open, read, and parse source files into domain values. Every file
//! handle is scoped to the loading call; nothing is held open afterwards, on
//! success or failure.

pub mod csv_loader;
pub mod json_loader;

pub use csv_loader::{load_csv, load_products};
pub use json_loader::load_json;
