//! JSON values in localStorage.
//!
//! Unlike session caches, entries here survive reloads; submitted
//! inquiries are kept this way until a backend collects them.

use serde::{Serialize, de::DeserializeOwned};

use super::dom;
use crate::core::error::StorageError;

/// Read a JSON value from localStorage.
///
/// Returns `None` if storage is unavailable, the key is missing, or the
/// stored text does not deserialize.
pub fn load<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = dom::local_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

/// Write a JSON value to localStorage.
pub fn save<T: Serialize>(key: &str, data: &T) -> Result<(), StorageError> {
    let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
    let json =
        serde_json::to_string(data).map_err(|e| StorageError::Serialization(e.to_string()))?;
    storage
        .set_item(key, &json)
        .map_err(|_| StorageError::WriteFailed)
}

/// Append `item` to the JSON array stored under `key`.
///
/// A missing or unreadable entry starts a new array.
pub fn append<T>(key: &str, item: T) -> Result<usize, StorageError>
where
    T: Serialize + DeserializeOwned,
{
    let mut items: Vec<T> = load(key).unwrap_or_default();
    items.push(item);
    save(key, &items)?;
    Ok(items.len())
}
