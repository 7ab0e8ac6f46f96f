//! Storage Backends
//!
//! The task collection lives in one named key-value slot. Backends are
//! injected into the store so tests can run against an in-memory slot.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::StoreError;

/// Name of the slot holding the serialized task collection.
pub const STORAGE_KEY: &str = "TASKS";

/// A single named slot of persistent text storage.
pub trait StorageBackend {
    /// Current contents of the slot, or `None` if nothing was ever written.
    fn read(&self) -> Option<String>;

    /// Overwrites the slot with `payload`.
    fn write(&self, payload: &str) -> Result<(), StoreError>;
}

/// Backend over `window.localStorage`.
///
/// Acquiring the storage object is fallible; when it is absent, reads see
/// an empty slot and writes are a silent no-op.
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }

    fn slot(&self) -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl StorageBackend for BrowserStorage {
    fn read(&self) -> Option<String> {
        self.slot()?.get_item(STORAGE_KEY).ok().flatten()
    }

    fn write(&self, payload: &str) -> Result<(), StoreError> {
        let Some(slot) = self.slot() else {
            return Ok(());
        };
        slot.set_item(STORAGE_KEY, payload)
            .map_err(|err| StoreError::Storage(format!("{err:?}")))
    }
}

/// In-memory backend for tests and headless use.
///
/// Clones share the same slot, so a second store created over a clone
/// observes everything the first one persisted. Writes are counted so
/// tests can assert that rejected mutations never touch storage.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    inner: Rc<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    slot: RefCell<Option<String>>,
    writes: Cell<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates the slot, as if a previous session had persisted.
    pub fn seed(&self, payload: &str) {
        *self.inner.slot.borrow_mut() = Some(payload.to_string());
    }

    /// Number of writes issued against the slot.
    pub fn write_count(&self) -> usize {
        self.inner.writes.get()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self) -> Option<String> {
        self.inner.slot.borrow().clone()
    }

    fn write(&self, payload: &str) -> Result<(), StoreError> {
        *self.inner.slot.borrow_mut() = Some(payload.to_string());
        self.inner.writes.set(self.inner.writes.get() + 1);
        Ok(())
    }
}
