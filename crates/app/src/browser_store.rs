use std::cell::RefCell;
use std::collections::HashMap;

use dioxus::prelude::*;
use session::{SessionStore, StoreError};

/// [`SessionStore`] backed by `window.localStorage`.
///
/// Script evaluation is asynchronous, so reads are answered from a snapshot
/// taken by [`BrowserStore::load`]. Writes update the snapshot and are sent
/// to the page without waiting for completion.
#[derive(Debug, Default)]
pub struct BrowserStore {
    snapshot: RefCell<HashMap<String, String>>,
}

impl BrowserStore {
    pub async fn load(key: &str) -> Self {
        let store = Self::default();
        let js = match serde_json::to_string(key) {
            Ok(quoted) => format!("return window.localStorage.getItem({quoted});"),
            Err(e) => {
                tracing::warn!(key, error = %e, "unencodable storage key");
                return store;
            }
        };
        match document::eval(&js).join::<Option<String>>().await {
            Ok(Some(raw)) => {
                store.snapshot.borrow_mut().insert(key.to_string(), raw);
            }
            Ok(None) => {}
            Err(e) => tracing::warn!(key, error = %e, "local storage unavailable"),
        }
        store
    }
}

impl SessionStore for BrowserStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.snapshot.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let js = format!(
            "window.localStorage.setItem({}, {});",
            serde_json::to_string(key)?,
            serde_json::to_string(value)?
        );
        self.snapshot
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        document::eval(&js);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let js = format!(
            "window.localStorage.removeItem({});",
            serde_json::to_string(key)?
        );
        self.snapshot.borrow_mut().remove(key);
        document::eval(&js);
        Ok(())
    }
}
