//! # recomatch
//!
//! A recommendation engine matching a user's stated business preferences
//! against a catalog of marketplace services, returning the top matches with
//! human-readable justifications.
//!
//! ## Quick Start
//!
//! ```rust
//! use recomatch::prelude::*;
//! use std::sync::Arc;
//!
//! // Build a catalog (normally loaded from CSV via recomatch-dataset)
//! let catalog = Catalog::new(vec![
//!     CatalogItem::new("Bookkeeping Plus", "Accounting for shops", "Retail", "Low", "EN", "North"),
//!     CatalogItem::new("Cafe Payroll", "Payroll for cafes", "Cafe", "High", "EN", "South"),
//! ]);
//!
//! // Index the snapshot once, then serve requests against it
//! let index = CatalogIndex::build(Arc::new(catalog));
//! let query = QueryPreference::new("Retail", "Low", "EN", "North");
//!
//! for rec in index.recommend(&query) {
//!     println!("{} [{}] {:.2}: {}", rec.item.name, rec.quality, rec.score, rec.explanation.text);
//! }
//! ```
//!
//! ## Crate Structure
//!
//! - `recomatch-core` - Data model (catalog, preferences, vectors, snapshot store)
//! - `recomatch-engine` - Encoder, ranker and explanation generator
//! - `recomatch-dataset` - CSV ingestion and cleaning

// Re-export core types
pub use recomatch_core::{
    Attribute, Catalog, CatalogItem, CatalogStore, Error, QueryPreference, Result, Vector,
    NOT_AVAILABLE,
};

// Re-export engine
pub use recomatch_engine::{
    CatalogIndex, EncodedSpace, Explanation, MatchQuality, MatchReason, Ranker, RankerConfig,
    Recommendation, ScoredItem, DEFAULT_TOP_K, FALLBACK_EXPLANATION, HIGH_QUALITY_THRESHOLD,
};

// Re-export dataset loading
pub use recomatch_dataset::{load_catalog, read_catalog, LoaderError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Attribute, Catalog, CatalogIndex, CatalogItem, CatalogStore, EncodedSpace, Explanation,
        MatchQuality, MatchReason, QueryPreference, Ranker, RankerConfig, Recommendation,
        ScoredItem,
    };
}
