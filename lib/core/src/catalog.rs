use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Sentinel value used where the source data has no value for an attribute
pub const NOT_AVAILABLE: &str = "Not Available";

/// The four categorical axes carried by every catalog item and query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    BusinessType,
    PriceCategory,
    LanguageSupport,
    LocationArea,
}

impl Attribute {
    /// All attributes in their fixed encoding order
    pub const ALL: [Attribute; 4] = [
        Attribute::BusinessType,
        Attribute::PriceCategory,
        Attribute::LanguageSupport,
        Attribute::LocationArea,
    ];

    /// Stable string name for logs and serialized output
    pub fn name(&self) -> &'static str {
        match self {
            Attribute::BusinessType => "business_type",
            Attribute::PriceCategory => "price_category",
            Attribute::LanguageSupport => "language_support",
            Attribute::LocationArea => "location_area",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Attribute {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "business_type" => Ok(Attribute::BusinessType),
            "price_category" => Ok(Attribute::PriceCategory),
            "language_support" => Ok(Attribute::LanguageSupport),
            "location_area" => Ok(Attribute::LocationArea),
            other => Err(Error::UnknownAttribute(other.to_string())),
        }
    }
}

/// One marketplace service: an identifier, a description, and one normalized
/// value per [`Attribute`]. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    pub description: String,
    pub business_type: String,
    pub price_category: String,
    pub language_support: String,
    pub location_area: String,
}

impl CatalogItem {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        business_type: impl Into<String>,
        price_category: impl Into<String>,
        language_support: impl Into<String>,
        location_area: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            business_type: business_type.into(),
            price_category: price_category.into(),
            language_support: language_support.into(),
            location_area: location_area.into(),
        }
    }

    /// Get the value of a categorical attribute
    pub fn attribute(&self, attr: Attribute) -> &str {
        match attr {
            Attribute::BusinessType => &self.business_type,
            Attribute::PriceCategory => &self.price_category,
            Attribute::LanguageSupport => &self.language_support,
            Attribute::LocationArea => &self.location_area,
        }
    }
}

/// An ordered, read-only collection of catalog items
///
/// Built once per snapshot from an external source; scoring requests never
/// mutate it. Attach per-request scores to copies, not to the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    #[must_use]
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&CatalogItem> {
        self.items.get(index)
    }

    /// Sorted distinct values observed for one attribute
    ///
    /// Feeds both the encoding column layout and any UI selection lists.
    pub fn vocabulary(&self, attr: Attribute) -> Vec<String> {
        let mut values: Vec<String> = self
            .items
            .iter()
            .map(|item| item.attribute(attr).to_string())
            .collect();
        values.sort();
        values.dedup();
        values
    }
}

impl FromIterator<CatalogItem> for Catalog {
    fn from_iter<I: IntoIterator<Item = CatalogItem>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A user's stated preferences for one matching request
///
/// Same four axes as [`CatalogItem`]. Values should be drawn from the
/// catalog's vocabulary but this is not enforced; unknown values encode to
/// zero sub-vectors downstream. Never persisted across requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryPreference {
    pub business_type: String,
    pub price_category: String,
    pub language_support: String,
    pub location_area: String,
}

impl QueryPreference {
    #[must_use]
    pub fn new(
        business_type: impl Into<String>,
        price_category: impl Into<String>,
        language_support: impl Into<String>,
        location_area: impl Into<String>,
    ) -> Self {
        Self {
            business_type: business_type.into(),
            price_category: price_category.into(),
            language_support: language_support.into(),
            location_area: location_area.into(),
        }
    }

    /// Get the preferred value for a categorical attribute
    pub fn attribute(&self, attr: Attribute) -> &str {
        match attr {
            Attribute::BusinessType => &self.business_type,
            Attribute::PriceCategory => &self.price_category,
            Attribute::LanguageSupport => &self.language_support,
            Attribute::LocationArea => &self.location_area,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, biz: &str, price: &str, lang: &str, loc: &str) -> CatalogItem {
        CatalogItem::new(name, format!("{name} description"), biz, price, lang, loc)
    }

    #[test]
    fn test_attribute_roundtrip() {
        for attr in Attribute::ALL {
            let parsed: Attribute = attr.name().parse().unwrap();
            assert_eq!(parsed, attr);
        }
    }

    #[test]
    fn test_attribute_parse_unknown() {
        let err = "budget".parse::<Attribute>().unwrap_err();
        assert!(err.to_string().contains("budget"));
    }

    #[test]
    fn test_item_attribute_accessor() {
        let item = item("A", "Retail", "Low", "EN", "North");
        assert_eq!(item.attribute(Attribute::BusinessType), "Retail");
        assert_eq!(item.attribute(Attribute::PriceCategory), "Low");
        assert_eq!(item.attribute(Attribute::LanguageSupport), "EN");
        assert_eq!(item.attribute(Attribute::LocationArea), "North");
    }

    #[test]
    fn test_vocabulary_sorted_distinct() {
        let catalog = Catalog::new(vec![
            item("A", "Retail", "Low", "EN", "North"),
            item("B", "Cafe", "Low", "EN", "South"),
            item("C", "Retail", "High", "AR", "North"),
        ]);

        assert_eq!(catalog.vocabulary(Attribute::BusinessType), vec!["Cafe", "Retail"]);
        assert_eq!(catalog.vocabulary(Attribute::PriceCategory), vec!["High", "Low"]);
        assert_eq!(catalog.vocabulary(Attribute::LocationArea), vec!["North", "South"]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.vocabulary(Attribute::BusinessType).is_empty());
    }

    #[test]
    fn test_catalog_preserves_order() {
        let catalog: Catalog = vec![
            item("B", "Cafe", "Low", "EN", "South"),
            item("A", "Retail", "Low", "EN", "North"),
        ]
        .into_iter()
        .collect();

        assert_eq!(catalog.get(0).unwrap().name, "B");
        assert_eq!(catalog.get(1).unwrap().name, "A");
    }
}
