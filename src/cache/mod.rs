//! Device-local key/value cache.
//!
//! Registration and the room directory persist small JSON blobs (the current
//! user, the selected room) through this capability instead of touching the
//! file system directly, so they can be exercised with [`MemoryStore`].

mod file_store;
mod memory;

pub use file_store::FileStore;
pub use memory::MemoryStore;

use crate::errors::AppResult;
use crate::ui::messages::warning;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Cache key holding the last registered user.
pub const USER_DATA_KEY: &str = "userData";
/// Cache key holding the room picked in the directory.
pub const SELECTED_ROOM_KEY: &str = "selectedRoom";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&mut self, key: &str) -> AppResult<()>;
}

/// Read and decode a JSON value stored under `key`.
///
/// Malformed content is reported and treated as absent.
pub fn get_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warning(format!("Error loading saved data ({key}): {e}"));
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(v) => Some(v),
        Err(e) => {
            warning(format!("Error loading saved data ({key}): {e}"));
            None
        }
    }
}

pub fn set_json<T: Serialize>(store: &mut dyn KeyValueStore, key: &str, value: &T) -> AppResult<()> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}
