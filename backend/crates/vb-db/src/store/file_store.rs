use crate::store::key_value::{KeyValueStore, validate_key};
use crate::{DbError, Result};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::debug;

/// One `<key>.json` file per key inside `dir`.
///
/// Writes go to a temp file that is synced and then renamed over the
/// target, so a crash mid-write leaves the previous document intact.
/// Separate processes writing the same key are not coordinated; the last
/// rename wins.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| DbError::io(dir.clone(), e))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DbError::io(path, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let final_path = self.path_for(key)?;
        let temp_path = self
            .dir
            .join(format!("{key}.json.tmp.{}", std::process::id()));

        {
            let mut file =
                fs::File::create(&temp_path).map_err(|e| DbError::io(temp_path.clone(), e))?;
            file.write_all(value.as_bytes())
                .map_err(|e| DbError::io(temp_path.clone(), e))?;
            file.sync_all()
                .map_err(|e| DbError::io(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            DbError::atomic_rename(temp_path.clone(), final_path.clone(), e)
        })?;

        debug!("Wrote {} bytes to {final_path:?}", value.len());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DbError::io(path, e)),
        }
    }
}
