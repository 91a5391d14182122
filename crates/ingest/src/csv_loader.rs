//! Delimited (CSV) ingestion: header-driven rows into records.

use std::fs::File;
use std::path::Path;

use stocktally_core::{DomainError, DomainResult, Record};
use stocktally_inventory::Product;

/// Load raw records from a delimited file with a header row.
///
/// The header row defines the field names; each subsequent row becomes one
/// [`Record`], in file order. Empty input has no header row and is a parse
/// failure, as is a data row whose width disagrees with the header.
pub fn load_csv<P: AsRef<Path>>(path: P) -> DomainResult<Vec<Record>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| DomainError::io(format!("{}: {e}", path.display())))?;

    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| DomainError::parse(format!("{}: {e}", path.display())))?
        .clone();

    if headers.is_empty() {
        return Err(DomainError::parse(format!(
            "{}: missing header row",
            path.display()
        )));
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| DomainError::parse(format!("{}: {e}", path.display())))?;
        records.push(
            headers
                .iter()
                .zip(row.iter())
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        );
    }

    tracing::debug!(path = %path.display(), records = records.len(), "loaded csv");

    Ok(records)
}

/// Load typed products: [`load_csv`] followed by one typed conversion per
/// row.
///
/// The first row that violates its field policy aborts the whole load; the
/// error carries the 1-based data-row number.
pub fn load_products<P: AsRef<Path>>(path: P) -> DomainResult<Vec<Product>> {
    let records = load_csv(path)?;

    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            Product::from_record(record).map_err(|e| match e {
                DomainError::Value(msg) => DomainError::value(format!("row {}: {msg}", i + 1)),
                other => other,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_fixture(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("products.csv");
        std::fs::write(&path, contents).expect("failed to write fixture");
        path
    }

    #[test]
    fn loads_records_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            &dir,
            "category,in_stock,price,stock\n\
             Electronics,true,10.00,2\n\
             Tools,false,5.00,3\n",
        );

        let records = load_csv(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("category"), Some("Electronics"));
        assert_eq!(records[0].get("price"), Some("10.00"));
        assert_eq!(records[1].get("category"), Some("Tools"));
        assert_eq!(records[1].get("stock"), Some("3"));
    }

    #[test]
    fn extra_columns_are_preserved_in_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            &dir,
            "name,category,in_stock,price,stock\n\
             Laptop,Electronics,true,999.99,1\n",
        );

        let records = load_csv(&path).unwrap();
        assert_eq!(records[0].get("name"), Some("Laptop"));
        assert_eq!(records[0].len(), 5);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");

        let err = load_csv(&path).unwrap_err();
        assert!(matches!(err, DomainError::Io(_)));
    }

    #[test]
    fn empty_input_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "");

        let err = load_csv(&path).unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn ragged_row_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            &dir,
            "category,in_stock,price,stock\n\
             Electronics,true,10.00,2,extra\n",
        );

        let err = load_csv(&path).unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn load_products_converts_rows_to_typed_products() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            &dir,
            "category,in_stock,price,stock\n\
             Electronics,true,10.00,2\n\
             Tools,false,5.00,3\n",
        );

        let products = load_products(&path).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].category, "Electronics");
        assert!(products[0].in_stock);
        assert_eq!(products[1].price, 5.0);
        assert_eq!(products[1].stock, 3);
    }

    #[test]
    fn malformed_price_aborts_the_load_with_row_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            &dir,
            "category,in_stock,price,stock\n\
             Electronics,true,10.00,2\n\
             Tools,false,not-a-number,3\n",
        );

        let err = load_products(&path).unwrap_err();
        match err {
            DomainError::Value(msg) => {
                assert!(msg.contains("row 2"), "{msg}");
                assert!(msg.contains("price"), "{msg}");
            }
            _ => panic!("Expected Value error for malformed price"),
        }
    }
}
