use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::warn;
use web_sys::Storage;

use crate::dom;
use crate::error::{js_message, Result, SiteError};

/// String key-value storage that survives page loads.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
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

/// `window.localStorage`.
pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    pub fn open() -> Result<Self> {
        let storage = dom::window()?
            .local_storage()
            .map_err(|e| SiteError::Storage(js_message(&e)))?
            .ok_or(SiteError::StorageUnavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| SiteError::Storage(js_message(&e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| SiteError::Storage(js_message(&e)))
    }
}

/// In-memory store. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Local storage when the browser allows it, otherwise a store that only lives
/// as long as the current page.
pub fn browser_store() -> Box<dyn KeyValueStore> {
    match LocalStore::open() {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!("Falling back to in-memory storage: {}", e);
            Box::new(MemoryStore::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_clones_share_entries() {
        let mut writer = MemoryStore::default();
        let reader = writer.clone();

        assert_eq!(reader.get("k").unwrap(), None);
        writer.set("k", "v").unwrap();
        assert_eq!(reader.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn boxed_store_delegates() {
        let shared = MemoryStore::default();
        let mut boxed: Box<dyn KeyValueStore> = Box::new(shared.clone());

        boxed.set("cookiesAccepted", "true").unwrap();
        assert_eq!(shared.get("cookiesAccepted").unwrap().as_deref(), Some("true"));
    }
}
