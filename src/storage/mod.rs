//! Persistence of the insight working set
//!
//! [`Storage`] keeps the whole [`ExtractedData`] as one JSON document under a
//! fixed key of a [`KeyValueStore`]. Persistence is best-effort: read
//! problems degrade to "nothing was saved" and write problems are logged and
//! otherwise ignored, so the in-memory state stays authoritative.

mod file_store;
mod store;

pub use file_store::FileStore;
pub use store::{KeyValueStore, MemoryStore, StoreError};

use crate::insight::ExtractedData;
use crate::sanitize::sanitize_container;
use tracing::{debug, error, warn};

/// Key under which the working set is stored
pub const STORAGE_KEY: &str = "insight_map_data";

pub struct Storage {
    store: Box<dyn KeyValueStore>,
}

impl Storage {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Storage backed by a fresh [`MemoryStore`]
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Access the underlying store
    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Load and sanitize the persisted working set
    ///
    /// # Returns
    /// `None` if nothing is stored, the store cannot be read, or the stored
    /// value is badly encoded or not a JSON object. In the last two cases the
    /// entry is removed so the same corrupt value is not read again.
    pub fn load(&self) -> Option<ExtractedData> {
        let serialized = match self.store.get(STORAGE_KEY) {
            Ok(Some(s)) => s,
            Ok(None) => return None,
            Err(e @ StoreError::Corrupt { .. }) => {
                error!("Could not decode stored state, discarding it: {}", e);
                self.discard();
                return None;
            }
            Err(e) => {
                warn!("Could not read stored state: {}", e);
                return None;
            }
        };

        let parsed: serde_json::Value = match serde_json::from_str(&serialized) {
            Ok(v) => v,
            Err(e) => {
                error!("Could not parse stored state, discarding it: {}", e);
                self.discard();
                return None;
            }
        };

        match sanitize_container(&parsed) {
            Some(data) => {
                debug!("Loaded {} item(s) from storage", data.len());
                Some(data)
            }
            None => {
                warn!("Invalid stored state: not an object, discarding it");
                self.discard();
                None
            }
        }
    }

    /// Persist the working set, or remove it when `state` is `None`
    ///
    /// Every write is a full overwrite. Failures are logged and ignored.
    pub fn save(&self, state: Option<&ExtractedData>) {
        let result = match state {
            Some(data) => match serde_json::to_string(data) {
                Ok(serialized) => self.store.set(STORAGE_KEY, &serialized),
                Err(e) => {
                    error!("Could not serialize state: {}", e);
                    return;
                }
            },
            None => self.store.remove(STORAGE_KEY),
        };

        if let Err(e) = result {
            error!("Error writing state to storage: {}", e);
        }
    }

    fn discard(&self) {
        if let Err(e) = self.store.remove(STORAGE_KEY) {
            warn!("Could not remove corrupt stored state: {}", e);
        }
    }
}
