use crate::models::{Dataset, DatasetLoader};
use crate::Error;
use log::debug;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Memoizes dataset loads by path for the lifetime of one run.
///
/// Entries stay until explicitly invalidated; the cache never checks the file
/// for changes.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: HashMap<PathBuf, Arc<Dataset>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached dataset for `path`, loading it on first use.
    ///
    /// Failed loads are not cached, so a later call retries.
    pub fn get_or_load<P: AsRef<Path>>(&mut self, path: P) -> Result<Arc<Dataset>, Error> {
        let path = path.as_ref();

        if let Some(dataset) = self.entries.get(path) {
            debug!("Dataset cache hit for {}", path.display());
            return Ok(Arc::clone(dataset));
        }

        let dataset = Arc::new(DatasetLoader::load(path)?);
        self.entries.insert(path.to_path_buf(), Arc::clone(&dataset));

        Ok(dataset)
    }

    /// Drops the cached entry for `path`. Returns whether one was present.
    pub fn invalidate<P: AsRef<Path>>(&mut self, path: P) -> bool {
        self.entries.remove(path.as_ref()).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains<P: AsRef<Path>>(&self, path: P) -> bool {
        self.entries.contains_key(path.as_ref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
