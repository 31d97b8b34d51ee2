pub mod disk;
pub mod memory;
pub mod watchlist;

use crate::core::cache::KeyValueCollection;
use disk::DiskCollection;
use fjall::{Keyspace, PartitionCreateOptions};
use memory::MemoryCollection;
use std::path::Path;
use std::sync::Arc;
use tracing::warn;

/// Opens named key/value collections, on disk when possible.
pub struct KeyValueStore {
    keyspace: Option<Keyspace>,
}

impl KeyValueStore {
    /// Opens the on-disk store at `path`. Falls back to memory-only
    /// collections if the store cannot be opened.
    pub fn open(path: &Path) -> Self {
        let keyspace = match fjall::Config::new(path).open() {
            Ok(keyspace) => Some(keyspace),
            Err(e) => {
                warn!(
                    "Could not open cache at {}: {}. Using in-memory cache",
                    path.display(),
                    e
                );
                None
            }
        };
        Self { keyspace }
    }

    pub fn collection(&self, name: &str) -> Arc<dyn KeyValueCollection> {
        let partition = self.keyspace.as_ref().and_then(|ks| {
            ks.open_partition(name, PartitionCreateOptions::default())
                .inspect_err(|e| warn!("Could not open cache partition {}: {}", name, e))
                .ok()
        });

        match partition {
            Some(partition) => Arc::new(DiskCollection::new(partition)),
            None => Arc::new(MemoryCollection::new()),
        }
    }
}
