use crate::error::{AppError, AppResult};
use web_sys::{window, Storage};

/// Almacén clave/valor persistente (localStorage en el navegador)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&self, key: &str) -> AppResult<()>;
}

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// localStorage con valores en crudo (sin JSON), legibles desde el host
pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    pub fn new() -> AppResult<Self> {
        let storage = get_local_storage()
            .ok_or_else(|| AppError::Storage("localStorage is not available".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("⚠️ [STORAGE] Error leyendo {}: {:?}", key, e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|_| AppError::Storage(format!("could not write {}", key)))
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.storage
            .remove_item(key)
            .map_err(|_| AppError::Storage(format!("could not remove {}", key)))
    }
}
