use crate::{DbError, Result};

/// Textual persistence addressed by key, one document per key.
///
/// This is the injected handle behind the local fallback store. Writes
/// replace the whole value; a reader never observes a partial write.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Keys double as file names, so keep them boring.
#[track_caller]
pub(crate) fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(DbError::invalid_key(key))
    }
}
