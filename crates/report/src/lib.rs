//! Report driver: load the inventory source, derive the report values, and
//! write the fixed sequence of report lines.

use std::io::Write;
use std::path::Path;

use anyhow::Context;

use stocktally_ingest::load_products;
use stocktally_inventory::{Product, filter_by_category, summarize};

/// Fixed inventory source, relative to the working directory.
pub const PRODUCTS_CSV: &str = "products.csv";

/// Category given a dedicated count line at the end of the report.
pub const FEATURED_CATEGORY: &str = "Electronics";

/// Write the report for `products` to `out`, one line per report value.
pub fn write_report<W: Write>(products: &[Product], out: &mut W) -> std::io::Result<()> {
    let summary = summarize(products);
    let featured = filter_by_category(products, FEATURED_CATEGORY);

    writeln!(out, "Inventory Report")?;
    writeln!(out, "{}", "=".repeat(30))?;
    writeln!(out, "Loaded {} products", summary.total_products)?;
    writeln!(out, "Categories: {}", summary.categories.join(", "))?;
    writeln!(out, "Products in stock: {}", summary.in_stock_count)?;
    writeln!(out, "Total inventory value: {}", summary.total_value)?;
    writeln!(out, "{FEATURED_CATEGORY} products: {}", featured.len())?;

    Ok(())
}

/// Load products from `path` and write the report to `out`.
pub fn generate_report<W: Write>(path: &Path, out: &mut W) -> anyhow::Result<()> {
    let products = load_products(path)
        .with_context(|| format!("loading inventory from {}", path.display()))?;

    tracing::info!(products = products.len(), "inventory loaded");

    write_report(&products, out).context("writing report")?;

    Ok(())
}

/// Run the report against the fixed [`PRODUCTS_CSV`] path, writing to
/// stdout.
pub fn run() -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    generate_report(Path::new(PRODUCTS_CSV), &mut stdout.lock())
}
