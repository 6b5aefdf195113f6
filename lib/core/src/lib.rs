//! # recomatch Core
//!
//! Core data model for the recomatch recommendation engine.
//!
//! This crate provides the fundamental types shared by the pipeline:
//!
//! - [`CatalogItem`] - One marketplace service with its categorical attributes
//! - [`Catalog`] - Ordered, read-only collection of items
//! - [`QueryPreference`] - A user's stated preferences for one request
//! - [`Attribute`] - The four categorical axes used for matching
//! - [`Vector`] - Dense vector with cosine similarity
//! - [`CatalogStore`] - Atomic snapshot holder for catalog refreshes
//!
//! ## Example
//!
//! ```rust
//! use recomatch_core::{Attribute, Catalog, CatalogItem, QueryPreference};
//!
//! let catalog = Catalog::new(vec![CatalogItem::new(
//!     "Bookkeeping Plus",
//!     "Accounting for small shops",
//!     "Retail",
//!     "Low",
//!     "EN",
//!     "North",
//! )]);
//!
//! let query = QueryPreference::new("Retail", "Low", "EN", "North");
//!
//! assert_eq!(catalog.vocabulary(Attribute::PriceCategory), vec!["Low"]);
//! assert_eq!(query.attribute(Attribute::LocationArea), "North");
//! ```

pub mod catalog;
pub mod error;
pub mod store;
pub mod vector;

pub use catalog::{Attribute, Catalog, CatalogItem, QueryPreference, NOT_AVAILABLE};
pub use error::{Error, Result};
pub use store::CatalogStore;
pub use vector::Vector;
