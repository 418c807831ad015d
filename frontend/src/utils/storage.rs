use std::{cell::RefCell, collections::HashMap, rc::Rc};

use web_sys::{Storage, Window};

use crate::data::AppError;

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

/// Key/value persistence used by the session store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&self, key: &str) -> Result<(), AppError>;
}

/// `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        local_storage()
            .map_err(AppError::storage)?
            .get_item(key)
            .map_err(|_| AppError::storage(format!("failed to read {key}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        local_storage()
            .map_err(AppError::storage)?
            .set_item(key, value)
            .map_err(|_| AppError::storage(format!("failed to write {key}")))
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        local_storage()
            .map_err(AppError::storage)?
            .remove_item(key)
            .map_err(|_| AppError::storage(format!("failed to remove {key}")))
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Browser storage in the wasm build, an in-memory map on the host.
pub fn default_store() -> Rc<dyn KeyValueStore> {
    if cfg!(target_arch = "wasm32") {
        Rc::new(BrowserStorage)
    } else {
        Rc::new(MemoryStorage::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_set_get_remove() {
        let store = MemoryStorage::new();
        assert_eq!(store.get("user").unwrap(), None);
        store.set("user", "{}").unwrap();
        assert_eq!(store.get("user").unwrap().as_deref(), Some("{}"));
        store.remove("user").unwrap();
        assert_eq!(store.get("user").unwrap(), None);
    }

    #[test]
    fn memory_storage_clones_share_items() {
        let store = MemoryStorage::new();
        let other = store.clone();
        store.set("k", "v").unwrap();
        assert_eq!(other.get("k").unwrap().as_deref(), Some("v"));
    }
}
