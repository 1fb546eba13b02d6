//! Browser localStorage Adapter

use todo_core::{Storage, StoreError, StoreResult};
use wasm_bindgen::JsValue;

/// `window.localStorage`, looked up on every access
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> StoreResult<web_sys::Storage> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::Storage("no window".to_string()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StoreError::Storage("localStorage is disabled".to_string()))
    }
}

impl Storage for BrowserStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Self::local_storage()?.get_item(key).map_err(js_error)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        Self::local_storage()?.set_item(key, value).map_err(js_error)
    }
}

fn js_error(value: JsValue) -> StoreError {
    StoreError::Storage(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}
