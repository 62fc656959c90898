//! Persistent key-value storage.
//!
//! The game persists exactly one value, the best time, under a single key.
//! Stores only deal in strings; parsing belongs to the session tracker so a
//! store can be shared with whatever else the host keeps there.
//!
//! - [`MemoryStore`]: process-local, for tests and throwaway sessions
//! - [`FileStore`]: a JSON object on disk, survives restarts

mod error;
mod file;
mod memory;

pub use error::{Result, StoreError};
pub use file::FileStore;
pub use memory::MemoryStore;

/// String key-value store.
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` means the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
