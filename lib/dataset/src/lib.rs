//! # recomatch Dataset
//!
//! Ingestion layer for the recomatch recommendation engine.
//!
//! Loads the marketplace service dataset from CSV and cleans it into a
//! [`recomatch_core::Catalog`]: fields trimmed, missing attribute values
//! replaced with the `"Not Available"` sentinel. The core engine assumes a
//! cleaned catalog; this crate is where that assumption is made true.
//!
//! ## Example
//!
//! ```rust,no_run
//! use recomatch_dataset::load_catalog;
//!
//! let catalog = load_catalog("service_recommendation_data.csv")?;
//! println!("{} services loaded", catalog.len());
//! # Ok::<(), recomatch_dataset::LoaderError>(())
//! ```

pub mod loader;

pub use loader::{load_catalog, read_catalog, LoaderError, REQUIRED_COLUMNS};
