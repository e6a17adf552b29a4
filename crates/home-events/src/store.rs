//! Slot storage for the event log.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::StorageError;

/// A key-value store holding whole slots as bytes.
pub trait EventStore: Send + Sync {
    /// Read a slot. Returns `None` if it was never written.
    fn read(&self, slot: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replace a slot's content.
    fn write(&self, slot: &str, bytes: &[u8]) -> Result<(), StorageError>;
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventStore for MemoryStore {
    fn read(&self, slot: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let slots = self
            .slots
            .lock()
            .map_err(|e| StorageError::StoreError(e.to_string()))?;
        Ok(slots.get(slot).cloned())
    }

    fn write(&self, slot: &str, bytes: &[u8]) -> Result<(), StorageError> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|e| StorageError::StoreError(e.to_string()))?;
        slots.insert(slot.to_string(), bytes.to_vec());
        Ok(())
    }
}

/// Directory of `<slot>.json` files.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing a slot.
    pub fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{}.json", slot))
    }
}

impl EventStore for FileStore {
    fn read(&self, slot: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let path = self.slot_path(slot);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    fn write(&self, slot: &str, bytes: &[u8]) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.slot_path(slot);
        fs::write(&path, bytes).map_err(|source| StorageError::Io { path, source })
    }
}

/// Spin key-value store. The store is opened on each call.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct SpinStore {
    label: Option<String>,
}

#[cfg(target_arch = "wasm32")]
impl SpinStore {
    /// Use the component's default store.
    pub fn open_default() -> Self {
        Self { label: None }
    }

    /// Use a named store.
    pub fn open(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
        }
    }

    fn store(&self) -> Result<spin_sdk::key_value::Store, StorageError> {
        let store = match &self.label {
            Some(label) => spin_sdk::key_value::Store::open(label),
            None => spin_sdk::key_value::Store::open_default(),
        };
        store.map_err(|e| StorageError::OpenError(e.to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl EventStore for SpinStore {
    fn read(&self, slot: &str) -> Result<Option<Vec<u8>>, StorageError> {
        self.store()?
            .get(slot)
            .map_err(|e| StorageError::StoreError(e.to_string()))
    }

    fn write(&self, slot: &str, bytes: &[u8]) -> Result<(), StorageError> {
        self.store()?
            .set(slot, bytes)
            .map_err(|e| StorageError::StoreError(e.to_string()))
    }
}
