use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::error::Result;
use crate::loader::LoaderSettings;

/// Process-wide handle to the current catalog.
///
/// Readers take an `Arc` snapshot and never block a reload for longer than
/// the pointer swap. A reload builds the replacement fully before swapping.
#[derive(Debug, Default)]
pub struct SharedCatalog {
    current: RwLock<Arc<Catalog>>,
}

impl SharedCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    /// Current catalog; stays valid across later reloads.
    pub fn snapshot(&self) -> Arc<Catalog> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Swap in an already built catalog, returning the previous one.
    pub fn replace(&self, catalog: Catalog) -> Arc<Catalog> {
        let next = Arc::new(catalog);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, next)
    }

    /// Load and index a source, then swap it in. On error the current
    /// catalog is left untouched.
    pub fn reload<P: AsRef<Path>>(
        &self,
        path: P,
        settings: &LoaderSettings,
    ) -> Result<Arc<Catalog>> {
        let path = path.as_ref();
        let catalog = match Catalog::load(path, settings) {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "reload failed, keeping current catalog");
                return Err(e);
            }
        };
        info!(path = %path.display(), items = catalog.len(), "catalog reloaded");
        self.replace(catalog);
        Ok(self.snapshot())
    }
}
