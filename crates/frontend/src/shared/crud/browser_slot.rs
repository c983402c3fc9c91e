use contracts::shared::crud::{KeyValueSlot, StoreError};

/// `window.localStorage` as a persisted slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSlot;

fn storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .ok_or_else(|| StoreError::Storage("no window".to_string()))?
        .local_storage()
        .map_err(|_| StoreError::Storage("localStorage access denied".to_string()))?
        .ok_or_else(|| StoreError::Storage("localStorage unavailable".to_string()))
}

impl KeyValueSlot for BrowserSlot {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        storage()?
            .get_item(key)
            .map_err(|_| StoreError::Storage(format!("cannot read {}", key)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        storage()?
            .set_item(key, value)
            .map_err(|_| StoreError::Storage(format!("cannot write {}", key)))
    }
}
