// ============================================================================
// TOKEN STORE - The single persistent slot holding the session token
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::utils::{get_local_storage, load_raw_from_storage, remove_from_storage, save_raw_to_storage, TOKEN_STORAGE_KEY};

pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), String>;
    fn clear(&self) -> Result<(), String>;
}

/// Browser localStorage, key `token`, stored raw
pub struct LocalStorageTokenStore;

impl LocalStorageTokenStore {
    pub fn is_available() -> bool {
        get_local_storage().is_some()
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        load_raw_from_storage(TOKEN_STORAGE_KEY).filter(|token| !token.is_empty())
    }

    fn save(&self, token: &str) -> Result<(), String> {
        save_raw_to_storage(TOKEN_STORAGE_KEY, token)
    }

    fn clear(&self) -> Result<(), String> {
        remove_from_storage(TOKEN_STORAGE_KEY)
    }
}

/// Page-lifetime slot, used when localStorage is blocked
#[derive(Default)]
pub struct MemoryTokenStore {
    slot: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            slot: RefCell::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn save(&self, token: &str) -> Result<(), String> {
        *self.slot.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), String> {
        *self.slot.borrow_mut() = None;
        Ok(())
    }
}

/// localStorage when the browser allows it, memory otherwise
pub fn default_token_store() -> Rc<dyn TokenStore> {
    if LocalStorageTokenStore::is_available() {
        Rc::new(LocalStorageTokenStore)
    } else {
        log::warn!("⚠️ [SESSION] localStorage unavailable, the session will not survive a reload");
        Rc::new(MemoryTokenStore::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.load(), None);

        store.save("abc").unwrap();
        assert_eq!(store.load().as_deref(), Some("abc"));

        store.save("def").unwrap();
        assert_eq!(store.load().as_deref(), Some("def"));

        store.clear().unwrap();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn seeded_store_returns_token() {
        let store = MemoryTokenStore::with_token("seed");
        assert_eq!(store.load().as_deref(), Some("seed"));
    }
}
