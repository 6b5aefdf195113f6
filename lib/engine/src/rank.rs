//! Cosine similarity ranking with quality labels
//!
//! Scores every catalog row against the query row, sorts descending, and
//! keeps the top-K with a two-level quality tag. There is no "Low" tier;
//! every returned item is presented positively.

use recomatch_core::{Catalog, CatalogItem, Vector};
use serde::{Deserialize, Serialize};

/// Number of results returned by default
pub const DEFAULT_TOP_K: usize = 3;

/// Scores above this threshold are labelled High
pub const HIGH_QUALITY_THRESHOLD: f32 = 0.7;

/// Two-level quality summary of a similarity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchQuality {
    High,
    Medium,
}

impl MatchQuality {
    /// Label for a score given the High threshold
    pub fn from_score(score: f32, high_threshold: f32) -> Self {
        if score > high_threshold {
            MatchQuality::High
        } else {
            MatchQuality::Medium
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchQuality::High => "High",
            MatchQuality::Medium => "Medium",
        }
    }
}

impl std::fmt::Display for MatchQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A catalog item with its per-request score and quality label
#[derive(Debug, Clone, Serialize)]
pub struct ScoredItem {
    pub item: CatalogItem,
    pub score: f32,
    pub quality: MatchQuality,
}

/// Configuration for the ranker
#[derive(Debug, Clone)]
pub struct RankerConfig {
    /// Maximum number of results to return
    pub limit: usize,
    /// Score threshold above which a result is labelled High
    pub high_threshold: f32,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_TOP_K,
            high_threshold: HIGH_QUALITY_THRESHOLD,
        }
    }
}

/// Ranker that scores encoded catalog rows against an encoded query
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    config: RankerConfig,
}

impl Ranker {
    #[must_use]
    pub fn new(config: RankerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    /// Rank catalog items by cosine similarity to the query row
    ///
    /// `rows` must be the catalog encoded in the same space as `query_row`,
    /// one row per item in catalog order. Returns at most `limit` scored
    /// items sorted by score descending; equal scores keep catalog order
    /// (stable sort). An empty catalog yields an empty result.
    pub fn rank(&self, catalog: &Catalog, rows: &[Vector], query_row: &Vector) -> Vec<ScoredItem> {
        debug_assert_eq!(catalog.len(), rows.len());

        let mut scored: Vec<ScoredItem> = catalog
            .items()
            .iter()
            .zip(rows)
            .map(|(item, row)| {
                // Cosine of non-negative one-hot rows is already in [0, 1];
                // the clamp guards against float drift and degenerate rows.
                let score = row.cosine_similarity(query_row).clamp(0.0, 1.0);
                ScoredItem {
                    item: item.clone(),
                    score,
                    quality: MatchQuality::from_score(score, self.config.high_threshold),
                }
            })
            .collect();

        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(self.config.limit);
        scored
    }
}
