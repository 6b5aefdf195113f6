//! # recomatch Engine
//!
//! The recommendation engine for recomatch: one-hot categorical encoding,
//! cosine similarity ranking and explanation generation over a marketplace
//! service catalog.
//!
//! ## Features
//!
//! - **Encoded Space**: deterministic one-hot column layout derived from a
//!   catalog snapshot's vocabulary
//! - **Ranking**: cosine scoring against the query with top-K selection and
//!   High/Medium quality labels
//! - **Explainability**: per-item justification sentences built from raw
//!   attribute matches
//! - **Catalog Index**: per-snapshot composition so the space and matrix are
//!   computed once and reused across requests
//!
//! ## Example
//!
//! ```rust
//! use recomatch_core::{Catalog, CatalogItem, QueryPreference};
//! use recomatch_engine::CatalogIndex;
//! use std::sync::Arc;
//!
//! let catalog = Catalog::new(vec![
//!     CatalogItem::new("A", "Retail bookkeeping", "Retail", "Low", "EN", "North"),
//!     CatalogItem::new("B", "Cafe payroll", "Cafe", "High", "EN", "South"),
//! ]);
//!
//! let index = CatalogIndex::build(Arc::new(catalog));
//! let query = QueryPreference::new("Retail", "Low", "EN", "North");
//!
//! let results = index.recommend(&query);
//! assert_eq!(results[0].item.name, "A");
//! assert_eq!(results[0].quality.as_str(), "High");
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Catalog   │────>│   Encoder   │────>│   Ranker    │
//! │  (snapshot) │     │  (one-hot)  │     │ (cosine,K=3)│
//! └─────────────┘     └─────────────┘     └─────────────┘
//!       ^                                        │
//!       │                                 ┌──────┴──────┐
//!  QueryPreference ───────────────────────│   Explain   │
//!                                         │ (sentences) │
//!                                         └─────────────┘
//! ```

pub mod encoder;
pub mod explain;
pub mod index;
pub mod rank;

// Re-export main types for convenience
pub use encoder::EncodedSpace;
pub use explain::{matched_reasons, render, Explanation, MatchReason, EXPLAINED_ATTRIBUTES, FALLBACK_EXPLANATION};
pub use index::{CatalogIndex, Recommendation};
pub use rank::{MatchQuality, Ranker, RankerConfig, ScoredItem, DEFAULT_TOP_K, HIGH_QUALITY_THRESHOLD};
