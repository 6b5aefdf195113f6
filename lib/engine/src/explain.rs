//! Human-readable justifications for recommended items
//!
//! Compares the original (pre-encoding) query fields against an item's
//! fields and produces one sentence per item. Output is both structured
//! (matched attribute/value pairs) and rendered text, so callers needing
//! localizable output can bring their own renderer.

use recomatch_core::{Attribute, CatalogItem, QueryPreference};
use serde::Serialize;

/// Attributes surfaced in explanation clauses, in clause order
///
/// Language support participates in scoring but never in clauses.
pub const EXPLAINED_ATTRIBUTES: [Attribute; 3] = [
    Attribute::BusinessType,
    Attribute::PriceCategory,
    Attribute::LocationArea,
];

/// Sentence returned when none of the explainable attributes match
pub const FALLBACK_EXPLANATION: &str =
    "This service matches your general preferences and language requirements.";

/// One matched attribute behind an explanation clause
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchReason {
    pub attribute: Attribute,
    pub value: String,
}

impl MatchReason {
    /// Render this reason as a sentence clause
    ///
    /// Returns `None` for attributes that are scored but never explained.
    pub fn clause(&self) -> Option<String> {
        match self.attribute {
            Attribute::BusinessType => {
                Some(format!("it specifically supports {} businesses", self.value))
            }
            Attribute::PriceCategory => Some(format!("it fits your {} budget", self.value)),
            Attribute::LocationArea => Some(format!("it is available in {}", self.value)),
            Attribute::LanguageSupport => None,
        }
    }
}

/// Collect the explainable attributes on which query and item agree
pub fn matched_reasons(query: &QueryPreference, item: &CatalogItem) -> Vec<MatchReason> {
    EXPLAINED_ATTRIBUTES
        .iter()
        .filter(|&&attr| query.attribute(attr) == item.attribute(attr))
        .map(|&attr| MatchReason {
            attribute: attr,
            value: item.attribute(attr).to_string(),
        })
        .collect()
}

/// Render reasons into a single sentence
///
/// Clauses are joined with "and"; zero clauses yield the fixed fallback.
pub fn render(reasons: &[MatchReason]) -> String {
    let clauses: Vec<String> = reasons.iter().filter_map(MatchReason::clause).collect();
    if clauses.is_empty() {
        FALLBACK_EXPLANATION.to_string()
    } else {
        format!("Recommended because {}.", clauses.join(" and "))
    }
}

/// A generated justification: the structured matches plus rendered text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanation {
    pub reasons: Vec<MatchReason>,
    pub text: String,
}

impl Explanation {
    /// Generate the explanation for one item against the query
    ///
    /// Pure function of the raw attribute values; called once per selected
    /// item.
    pub fn generate(query: &QueryPreference, item: &CatalogItem) -> Self {
        let reasons = matched_reasons(query, item);
        let text = render(&reasons);
        Self { reasons, text }
    }
}
