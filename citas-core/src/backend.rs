//! Loading and saving the store.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{CitasError, CitasResult};
use crate::store::Store;

/// Where a [`Store`] is persisted.
pub trait StoreBackend {
    /// Load the persisted store, or an empty one if nothing was saved yet.
    fn load(&self) -> CitasResult<Store>;

    /// Replace the persisted store with `store`.
    fn save(&mut self, store: &Store) -> CitasResult<()>;
}

/// A store kept in a single pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl StoreBackend for JsonFile {
    fn load(&self) -> CitasResult<Store> {
        if !self.path.exists() {
            log::debug!("No data file at {}, starting empty", self.path.display());
            return Ok(Store::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let store: Store = serde_json::from_str(&content).map_err(|e| {
            CitasError::Serialization(format!("{}: {}", self.path.display(), e))
        })?;

        log::debug!(
            "Loaded {} clients and {} appointments from {}",
            store.clients.len(),
            store.appointments.len(),
            self.path.display()
        );
        Ok(store)
    }

    fn save(&mut self, store: &Store) -> CitasResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = to_pretty_json(store)?;

        // Write next to the target and rename so the file is never half-written.
        let tmp = self.temp_path();
        std::fs::write(&tmp, content)?;
        std::fs::rename(&tmp, &self.path)?;

        log::debug!("Saved store to {}", self.path.display());
        Ok(())
    }
}

/// Serialize with a two-space indent and a trailing newline.
fn to_pretty_json<T: Serialize>(value: &T) -> CitasResult<String> {
    let mut content =
        serde_json::to_string_pretty(value).map_err(|e| CitasError::Serialization(e.to_string()))?;
    content.push('\n');
    Ok(content)
}

/// A store held in memory, for tests and dry runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    store: Option<Store>,
    saves: usize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already persisted store.
    pub fn with_store(store: Store) -> Self {
        MemoryBackend {
            store: Some(store),
            saves: 0,
        }
    }

    /// The last saved store, if any.
    pub fn stored(&self) -> Option<&Store> {
        self.store.as_ref()
    }

    /// Number of times `save` was called.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl StoreBackend for MemoryBackend {
    fn load(&self) -> CitasResult<Store> {
        Ok(self.store.clone().unwrap_or_default())
    }

    fn save(&mut self, store: &Store) -> CitasResult<()> {
        self.store = Some(store.clone());
        self.saves += 1;
        Ok(())
    }
}
