use super::{Catalog, Category, Part};
use crate::error::{RigError, RigResult};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::time::Duration;
use tracing::{debug, error, info};

/// Reads one category file: a JSON array of parts.
pub fn load_category_file<P: AsRef<Path>>(path: P) -> RigResult<Vec<Part>> {
    let path = path.as_ref();
    debug!("   Loading parts from: {}", path.display());
    let content = fs::read_to_string(path)?;
    let parts: Vec<Part> = serde_json::from_str(&content)?;
    Ok(parts)
}

/// Loads every category concurrently and waits for all of them.
///
/// A category whose file is missing or malformed is logged and loaded as
/// an empty list, so one bad file never blocks the rest of the catalog.
pub fn load_all<P: AsRef<Path>>(data_dir: P) -> Catalog {
    load_with_failures(data_dir).0
}

/// Like `load_all`, also returning the categories that fell back to an
/// empty list, in table order.
pub fn load_with_failures<P: AsRef<Path>>(data_dir: P) -> (Catalog, Vec<Category>) {
    let data_dir = data_dir.as_ref();
    let categories: Vec<Category> = Category::all().collect();

    let loaded: Vec<(Category, RigResult<Vec<Part>>)> = categories
        .par_iter()
        .map(|&category| (category, load_category_file(data_dir.join(category.file_name()))))
        .collect();

    let mut catalog = Catalog::new();
    let mut failed = Vec::new();
    for (category, result) in loaded {
        let parts = match result {
            Ok(parts) => parts,
            Err(e) => {
                error!("Failed to load {}: {}", category.file_name(), e);
                failed.push(category);
                Vec::new()
            }
        };
        catalog.insert(category, parts);
    }

    info!(
        "📦 Catalog ready: {} parts, {}/{} categories loaded",
        catalog.len(),
        categories.len() - failed.len(),
        categories.len()
    );
    (catalog, failed)
}

/// Handle to a catalog load running in the background.
///
/// The catalog is delivered exactly once; after it has been taken every
/// further call reports `CatalogUnavailable`.
pub struct PendingCatalog {
    rx: Receiver<Catalog>,
}

impl PendingCatalog {
    /// Blocks until the load completes.
    pub fn wait(self) -> RigResult<Catalog> {
        self.rx.recv().map_err(|_| RigError::CatalogUnavailable)
    }

    /// Blocks for at most `timeout`; `Ok(None)` means still loading.
    pub fn wait_timeout(&self, timeout: Duration) -> RigResult<Option<Catalog>> {
        match self.rx.recv_timeout(timeout) {
            Ok(catalog) => Ok(Some(catalog)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(RigError::CatalogUnavailable),
        }
    }

    /// Non-blocking check.
    pub fn try_take(&self) -> RigResult<Option<Catalog>> {
        match self.rx.try_recv() {
            Ok(catalog) => Ok(Some(catalog)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(RigError::CatalogUnavailable),
        }
    }
}

/// Starts `load_all` on the rayon pool and returns a completion handle.
pub fn spawn_load(data_dir: impl Into<PathBuf>) -> PendingCatalog {
    let data_dir = data_dir.into();
    let (tx, rx) = mpsc::sync_channel(1);
    rayon::spawn(move || {
        let catalog = load_all(&data_dir);
        // The receiver may have been dropped; nothing is waiting then.
        let _ = tx.send(catalog);
    });
    PendingCatalog { rx }
}
