//! Web Storage backend
//!
//! `sessionStorage` plays tab storage and `localStorage` durable storage.

use sterling::storage::{KeyValueStore, StoreError, StoreResult};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageArea {
    /// Survives browser restarts
    Local,
    /// Lives as long as the tab
    Session,
}

/// [`KeyValueStore`] over the browser's Web Storage API
#[derive(Debug, Clone, Copy)]
pub struct WebStorage {
    area: StorageArea,
}

impl WebStorage {
    pub fn local() -> Self {
        Self {
            area: StorageArea::Local,
        }
    }

    pub fn session() -> Self {
        Self {
            area: StorageArea::Session,
        }
    }

    fn storage(&self) -> StoreResult<web_sys::Storage> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        let storage = match self.area {
            StorageArea::Local => window.local_storage(),
            StorageArea::Session => window.session_storage(),
        };
        storage
            .map_err(js_error)?
            .ok_or_else(|| StoreError::Unavailable(format!("{:?} storage disabled", self.area)))
    }
}

fn js_error(err: JsValue) -> StoreError {
    StoreError::Unavailable(
        err.as_string()
            .unwrap_or_else(|| format!("{:?}", err)),
    )
}

impl KeyValueStore for WebStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        // Throws QuotaExceededError when full
        self.storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.storage()?.remove_item(key).map_err(js_error)
    }

    fn clear(&self) -> StoreResult<()> {
        self.storage()?.clear().map_err(js_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_session_storage_round_trip() {
        let store = WebStorage::session();
        store.clear().unwrap();

        store.set("sterling_authenticated", "true").unwrap();
        assert_eq!(
            store.get("sterling_authenticated").unwrap().as_deref(),
            Some("true")
        );

        store.remove("sterling_authenticated").unwrap();
        assert_eq!(store.get("sterling_authenticated").unwrap(), None);
    }

    #[wasm_bindgen_test]
    fn test_areas_are_separate() {
        let tab = WebStorage::session();
        let durable = WebStorage::local();
        tab.clear().unwrap();
        durable.clear().unwrap();

        durable.set("sterling_username", "sterlingdentalclinic").unwrap();
        assert_eq!(tab.get("sterling_username").unwrap(), None);

        tab.clear().unwrap();
        assert_eq!(
            durable.get("sterling_username").unwrap().as_deref(),
            Some("sterlingdentalclinic")
        );
        durable.clear().unwrap();
    }
}
