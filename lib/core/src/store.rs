use crate::Catalog;
use parking_lot::RwLock;
use std::sync::Arc;

/// Shared holder of the current immutable catalog snapshot
///
/// Scoring requests take a snapshot and work against it for their whole
/// lifetime; a refresh swaps in a new catalog atomically without disturbing
/// in-flight requests. The snapshot an encoded space was derived from must
/// be the one it scores against, so the swap is the only mutation point.
pub struct CatalogStore {
    current: RwLock<Arc<Catalog>>,
}

impl CatalogStore {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    /// Get the current catalog snapshot
    pub fn snapshot(&self) -> Arc<Catalog> {
        self.current.read().clone()
    }

    /// Atomically replace the catalog, returning the new snapshot
    pub fn replace(&self, catalog: Catalog) -> Arc<Catalog> {
        let next = Arc::new(catalog);
        *self.current.write() = next.clone();
        next
    }
}
