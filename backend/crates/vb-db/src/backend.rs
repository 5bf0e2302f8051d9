use crate::store::file_store::FileStore;
use crate::store::local::LocalRecordStore;
use crate::store::memory_store::MemoryStore;
use crate::store::remote::RemoteRowStore;
use crate::{Result, RowStore, SessionToken};

use vb_config::{BackendMode, Config};

use std::sync::Arc;
use std::time::Duration;

use log::info;

/// The storage handles for one process, built once at start.
///
/// `store` is what every repository talks to. `local` is always present
/// because password-reset bookkeeping is local-only regardless of mode.
#[derive(Clone)]
pub struct Backend {
    pub mode: BackendMode,
    pub store: Arc<dyn RowStore>,
    pub local: LocalRecordStore,
    pub session: Option<Arc<dyn SessionToken>>,
}

impl Backend {
    pub fn from_config(config: &Config) -> Result<Self> {
        let local_dir = config.local_dir()?;
        let local = LocalRecordStore::new(Arc::new(FileStore::open(&local_dir)?));

        match config.remote.credentials() {
            Some((url, anon_key)) => {
                let timeout = Duration::from_secs(config.remote.request_timeout_secs);
                let remote = Arc::new(RemoteRowStore::new(url, anon_key, timeout)?);
                info!("Using remote backend at {url} (local bookkeeping in {local_dir:?})");
                Ok(Self {
                    mode: BackendMode::Remote,
                    store: remote.clone(),
                    local,
                    session: Some(remote),
                })
            }
            None => {
                info!("No remote configured; using local backend in {local_dir:?}");
                Ok(Self::local(local))
            }
        }
    }

    pub fn local(local: LocalRecordStore) -> Self {
        Self {
            mode: BackendMode::Local,
            store: Arc::new(local.clone()),
            local,
            session: None,
        }
    }

    /// Local backend over an in-memory store.
    pub fn in_memory() -> Self {
        Self::local(LocalRecordStore::new(Arc::new(MemoryStore::new())))
    }
}
