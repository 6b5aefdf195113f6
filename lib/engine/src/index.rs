//! Per-snapshot composition of encoder, ranker and explainer
//!
//! The encoded space and the catalog matrix are computed once when a catalog
//! snapshot is indexed, then reused by every request against that snapshot.

use crate::encoder::EncodedSpace;
use crate::explain::Explanation;
use crate::rank::{MatchQuality, Ranker, RankerConfig, ScoredItem};
use recomatch_core::{Catalog, CatalogItem, QueryPreference, Vector};
use serde::Serialize;
use std::sync::Arc;

/// One fully annotated result: item, score, quality label and explanation
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub item: CatalogItem,
    pub score: f32,
    pub quality: MatchQuality,
    pub explanation: Explanation,
}

impl Recommendation {
    /// Attach an explanation to a scored item
    pub fn from_scored(scored: ScoredItem, query: &QueryPreference) -> Self {
        let explanation = Explanation::generate(query, &scored.item);
        Self {
            item: scored.item,
            score: scored.score,
            quality: scored.quality,
            explanation,
        }
    }
}

/// A catalog snapshot with its precomputed encoding
///
/// Holds the snapshot, its [`EncodedSpace`] and the encoded matrix. Requests
/// are pure reads; refreshing the catalog means building a new index from
/// the new snapshot.
pub struct CatalogIndex {
    catalog: Arc<Catalog>,
    space: EncodedSpace,
    rows: Vec<Vector>,
    ranker: Ranker,
}

impl CatalogIndex {
    /// Index a catalog snapshot with the default ranker configuration
    #[must_use]
    pub fn build(catalog: Arc<Catalog>) -> Self {
        Self::with_config(catalog, RankerConfig::default())
    }

    /// Index a catalog snapshot with a custom ranker configuration
    #[must_use]
    pub fn with_config(catalog: Arc<Catalog>, config: RankerConfig) -> Self {
        let space = EncodedSpace::from_catalog(&catalog);
        let rows = space.encode_catalog(&catalog);
        Self {
            catalog,
            space,
            rows,
            ranker: Ranker::new(config),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn space(&self) -> &EncodedSpace {
        &self.space
    }

    /// Run one matching request: encode, rank, explain
    ///
    /// Returns at most `limit` recommendations sorted by score descending.
    /// Never fails: empty catalogs yield empty results and unknown query
    /// values score as zero sub-vectors.
    pub fn recommend(&self, query: &QueryPreference) -> Vec<Recommendation> {
        let query_row = self.space.encode_query(query);
        self.ranker
            .rank(&self.catalog, &self.rows, &query_row)
            .into_iter()
            .map(|scored| Recommendation::from_scored(scored, query))
            .collect()
    }

    /// Run one request with a per-request configuration override
    pub fn recommend_with(&self, query: &QueryPreference, config: RankerConfig) -> Vec<Recommendation> {
        let query_row = self.space.encode_query(query);
        Ranker::new(config)
            .rank(&self.catalog, &self.rows, &query_row)
            .into_iter()
            .map(|scored| Recommendation::from_scored(scored, query))
            .collect()
    }
}
