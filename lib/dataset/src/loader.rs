//! CSV ingestion and cleaning
//!
//! Reads the marketplace service dataset and produces a [`Catalog`] the core
//! can score directly: every field trimmed, missing attribute values replaced
//! with the [`NOT_AVAILABLE`] sentinel. Rows that do not fit the expected
//! shape fail fast with a descriptive error instead of producing silently
//! wrong catalogs.

use recomatch_core::{Catalog, CatalogItem, NOT_AVAILABLE};
use serde::Deserialize;
use std::fs::File;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Column headers the dataset must carry
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Service_Name",
    "Description",
    "Target_Business_Type",
    "Price_Category",
    "Language_Support",
    "Location_Area",
];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),
}

/// One raw row as it appears in the source file
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Service_Name")]
    service_name: Option<String>,
    #[serde(rename = "Description")]
    description: Option<String>,
    #[serde(rename = "Target_Business_Type")]
    business_type: Option<String>,
    #[serde(rename = "Price_Category")]
    price_category: Option<String>,
    #[serde(rename = "Language_Support")]
    language_support: Option<String>,
    #[serde(rename = "Location_Area")]
    location_area: Option<String>,
}

/// Trim a raw field; empty or absent values become the sentinel
fn clean(value: Option<String>) -> String {
    match value {
        Some(v) => {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                NOT_AVAILABLE.to_string()
            } else {
                trimmed.to_string()
            }
        }
        None => NOT_AVAILABLE.to_string(),
    }
}

impl RawRecord {
    fn into_item(self) -> CatalogItem {
        CatalogItem::new(
            clean(self.service_name),
            clean(self.description),
            clean(self.business_type),
            clean(self.price_category),
            clean(self.language_support),
            clean(self.location_area),
        )
    }
}

/// Read a catalog from any CSV source
pub fn read_catalog<R: io::Read>(reader: R) -> Result<Catalog, LoaderError> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers = rdr.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h.trim() == column) {
            return Err(LoaderError::MissingColumn(column));
        }
    }

    let mut items = Vec::new();
    for result in rdr.deserialize() {
        let raw: RawRecord = result?;
        items.push(raw.into_item());
    }

    Ok(Catalog::new(items))
}

/// Load a catalog from a CSV file on disk
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, LoaderError> {
    let file = File::open(path)?;
    read_catalog(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use recomatch_core::Attribute;
    use std::io::Write;

    const HEADER: &str =
        "Service_Name,Description,Target_Business_Type,Price_Category,Language_Support,Location_Area";

    #[test]
    fn test_read_basic_catalog() {
        let csv = format!(
            "{HEADER}\n\
             Bookkeeping Plus,Accounting for shops,Retail,Low,EN,North\n\
             Cafe Payroll,Payroll for cafes,Cafe,High,AR,South\n"
        );

        let catalog = read_catalog(csv.as_bytes()).unwrap();

        assert_eq!(catalog.len(), 2);
        let first = catalog.get(0).unwrap();
        assert_eq!(first.name, "Bookkeeping Plus");
        assert_eq!(first.attribute(Attribute::BusinessType), "Retail");
        assert_eq!(catalog.get(1).unwrap().attribute(Attribute::LocationArea), "South");
    }

    #[test]
    fn test_fields_are_trimmed() {
        let csv = format!("{HEADER}\nA,desc,  Retail  , Low ,EN , North\n");

        let catalog = read_catalog(csv.as_bytes()).unwrap();
        let item = catalog.get(0).unwrap();

        assert_eq!(item.business_type, "Retail");
        assert_eq!(item.price_category, "Low");
        assert_eq!(item.location_area, "North");
    }

    #[test]
    fn test_empty_values_become_sentinel() {
        let csv = format!("{HEADER}\nA,desc,Retail,,EN,\n");

        let catalog = read_catalog(csv.as_bytes()).unwrap();
        let item = catalog.get(0).unwrap();

        assert_eq!(item.price_category, NOT_AVAILABLE);
        assert_eq!(item.location_area, NOT_AVAILABLE);
        assert_eq!(item.business_type, "Retail");
    }

    #[test]
    fn test_missing_column_fails_fast() {
        let csv = "Service_Name,Description,Price_Category,Language_Support,Location_Area\n\
                   A,desc,Low,EN,North\n";

        let err = read_catalog(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoaderError::MissingColumn("Target_Business_Type")));
    }

    #[test]
    fn test_header_only_yields_empty_catalog() {
        let csv = format!("{HEADER}\n");
        let catalog = read_catalog(csv.as_bytes()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_load_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        writeln!(file, "A,desc,Retail,Low,EN,North").unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let err = load_catalog("/nonexistent/services.csv").unwrap_err();
        assert!(matches!(err, LoaderError::Io(_)));
    }
}
