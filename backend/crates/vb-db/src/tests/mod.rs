mod file_store;
mod local_store;
mod remote_errors;
mod repositories;

use crate::{Backend, KeyValueStore, LocalRecordStore, MemoryStore};

use std::sync::Arc;

/// Local backend over a memory store, plus the raw store for poking at
/// persisted text directly.
pub(crate) fn memory_backend() -> (Backend, Arc<MemoryStore>) {
    let kv = Arc::new(MemoryStore::new());
    let local = LocalRecordStore::new(kv.clone() as Arc<dyn KeyValueStore>);
    (Backend::local(local), kv)
}
