use serde::{Deserialize, Serialize};

use stocktally_core::{DomainError, DomainResult, Record};

/// Typed inventory record, converted from a raw [`Record`] exactly once at
/// load time.
///
/// Field policy (one explicit policy per field):
/// - `category`: required.
/// - `in_stock`: lenient - present and case-insensitively `"true"` means in
///   stock; anything else, including absence, means not in stock.
/// - `price` / `stock`: strict - the trimmed string must parse as the
///   required numeric type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub category: String,
    pub in_stock: bool,
    pub price: f64,
    pub stock: i64,
}

impl Product {
    /// Convert a raw record into a typed product.
    ///
    /// The first field that violates its policy aborts the conversion with a
    /// `Value` error; there are no partial/skip semantics.
    pub fn from_record(record: &Record) -> DomainResult<Self> {
        let category = record
            .get("category")
            .ok_or_else(|| DomainError::value("missing field 'category'"))?
            .to_string();

        let in_stock = record
            .get("in_stock")
            .is_some_and(|v| v.eq_ignore_ascii_case("true"));

        let price = parse_numeric_field::<f64>(record, "price")?;
        let stock = parse_numeric_field::<i64>(record, "stock")?;

        Ok(Self {
            category,
            in_stock,
            price,
            stock,
        })
    }

    /// Line value of this product: unit price times stock quantity.
    pub fn line_value(&self) -> f64 {
        self.price * self.stock as f64
    }
}

fn parse_numeric_field<T>(record: &Record, name: &str) -> DomainResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = record
        .get(name)
        .ok_or_else(|| DomainError::value(format!("missing field '{name}'")))?;

    raw.trim()
        .parse::<T>()
        .map_err(|e| DomainError::value(format!("field '{name}' ({raw:?}): {e}")))
}
