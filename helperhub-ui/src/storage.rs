//! Browser localStorage access
//!
//! Every call degrades to a no-op when storage is unavailable (private
//! browsing, disabled cookies).

use serde::{de::DeserializeOwned, Serialize};

pub use helperhub::store::{CACHED_USER_KEY, REVIEWS_CACHE_KEY, WELCOME_SEEN_KEY};

/// Overrides the compiled API base URL
pub const API_URL_KEY: &str = "helperhub_api_url";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn get(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

pub fn set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(key, value).is_err() {
            web_sys::console::warn_1(&format!("Could not write {} to localStorage", key).into());
        }
    }
}

pub fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

pub fn get_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(_) => {
            remove(key);
            None
        }
    }
}

pub fn set_json<T: Serialize>(key: &str, value: &T) {
    if let Ok(raw) = serde_json::to_string(value) {
        set(key, &raw);
    }
}
