//! One-hot feature encoding over a catalog's category vocabulary
//!
//! Derives a fixed column layout from one catalog snapshot and encodes both
//! catalog rows and query preferences into that same space. Scores are only
//! meaningful when both sides come from the same [`EncodedSpace`] instance.

use ahash::AHashMap;
use recomatch_core::{Attribute, Catalog, CatalogItem, QueryPreference, Vector};

/// A deterministic `(attribute, value) -> column index` mapping derived from
/// one catalog snapshot
///
/// Columns are laid out attribute by attribute in [`Attribute::ALL`] order,
/// with values sorted lexicographically within each attribute, so repeated
/// derivations from the same catalog produce identical spaces.
#[derive(Debug, Clone)]
pub struct EncodedSpace {
    columns: Vec<(Attribute, String)>,
    index: AHashMap<Attribute, AHashMap<String, usize>>,
}

impl EncodedSpace {
    /// Derive the column layout from the catalog's observed vocabulary
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut columns = Vec::new();
        let mut index: AHashMap<Attribute, AHashMap<String, usize>> = AHashMap::new();

        for attr in Attribute::ALL {
            let by_value = index.entry(attr).or_default();
            for value in catalog.vocabulary(attr) {
                by_value.insert(value.clone(), columns.len());
                columns.push((attr, value));
            }
        }

        Self { columns, index }
    }

    /// Total number of indicator columns
    pub fn dim(&self) -> usize {
        self.columns.len()
    }

    /// The column layout as `(attribute, value)` pairs in column order
    pub fn columns(&self) -> &[(Attribute, String)] {
        &self.columns
    }

    /// Column index for an `(attribute, value)` pair, if the value was
    /// observed in the catalog
    pub fn column_of(&self, attr: Attribute, value: &str) -> Option<usize> {
        self.index.get(&attr).and_then(|m| m.get(value)).copied()
    }

    /// Encode one catalog item as a one-hot row in this space
    pub fn encode_item(&self, item: &CatalogItem) -> Vector {
        let mut row = vec![0.0f32; self.dim()];
        for attr in Attribute::ALL {
            if let Some(col) = self.column_of(attr, item.attribute(attr)) {
                row[col] = 1.0;
            }
        }
        Vector::new(row)
    }

    /// Encode a query preference as a one-hot row in this space
    ///
    /// A value never observed in the catalog contributes an all-zero
    /// sub-vector for its attribute. That is policy, not an error: selection
    /// UIs only offer observed values, but automated callers may substitute
    /// anything and the encoder must not fail.
    pub fn encode_query(&self, query: &QueryPreference) -> Vector {
        let mut row = vec![0.0f32; self.dim()];
        for attr in Attribute::ALL {
            if let Some(col) = self.column_of(attr, query.attribute(attr)) {
                row[col] = 1.0;
            }
        }
        Vector::new(row)
    }

    /// Encode the whole catalog, one row per item in catalog order
    pub fn encode_catalog(&self, catalog: &Catalog) -> Vec<Vector> {
        catalog.items().iter().map(|i| self.encode_item(i)).collect()
    }
}
