//! File-backed store.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, Result, StoreError};

/// Store persisted as a flat JSON object of strings.
///
/// # File Format
///
/// ```text
/// {"bestTime": "42"}
/// ```
///
/// Writes go to a temp file first and are renamed into place, so a crash
/// mid-write leaves the previous contents intact. A missing file reads as an
/// empty store. A file that does not parse is reported by `get` and
/// replaced by the next `set`.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open a store at `path`, creating parent directories.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let bytes = fs::read(&self.path)?;
        let value: serde_json::Value = serde_json::from_slice(&bytes)?;
        let serde_json::Value::Object(object) = value else {
            return Err(StoreError::CorruptedData(format!(
                "{} does not hold a JSON object",
                self.path.display()
            )));
        };

        object
            .into_iter()
            .map(|(key, value)| match value {
                serde_json::Value::String(s) => Ok((key, s)),
                other => Err(StoreError::CorruptedData(format!(
                    "value for {key:?} is not a string: {other}"
                ))),
            })
            .collect()
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut values = match self.read_all() {
            Ok(values) => values,
            Err(err @ (StoreError::Json(_) | StoreError::CorruptedData(_))) => {
                tracing::warn!(path = %self.path.display(), %err, "replacing unreadable store");
                BTreeMap::new()
            }
            Err(err) => return Err(err),
        };
        values.insert(key.to_string(), value.to_string());

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, serde_json::to_vec_pretty(&values)?)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!(key, path = %self.path.display(), "store value written");
        Ok(())
    }
}
