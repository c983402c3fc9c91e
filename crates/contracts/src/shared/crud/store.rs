use super::record::RecordId;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Network failure or non-success HTTP status.
    #[error("{0}")]
    Transport(String),
    /// Body could not be encoded or decoded.
    #[error("malformed data: {0}")]
    Decode(String),
    /// Persisted slot could not be read or written.
    #[error("storage unavailable: {0}")]
    Storage(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Decode(err.to_string())
    }
}

/// Reply to add/update: `{ success, message }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl ActionResponse {
    pub fn accepted(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

/// Reply to delete. Only `message` is consumed; a `success` flag, when the
/// server sends one, is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    #[serde(default)]
    pub message: Option<String>,
}

impl DeleteResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

/// Body of `<prefix>/delete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub id: RecordId,
}

/// Authoritative collection of records of one entity.
///
/// Futures are not `Send`: implementations run on the browser's single
/// thread.
#[async_trait(?Send)]
pub trait RecordRepository<R>: Send + Sync {
    async fn list(&self) -> Result<Vec<R>, StoreError>;

    async fn add(&self, record: R) -> Result<ActionResponse, StoreError>;

    async fn update(&self, id: RecordId, record: R) -> Result<ActionResponse, StoreError>;

    async fn delete(&self, id: RecordId) -> Result<DeleteResponse, StoreError>;
}

/// A persisted key/value slot (browser `localStorage` in the app).
pub trait KeyValueSlot: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory slot.
#[derive(Debug, Default)]
pub struct MemorySlot {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let slot = Self::default();
        if let Ok(mut entries) = slot.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        slot
    }
}

impl KeyValueSlot for MemorySlot {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Storage("slot lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Storage("slot lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_response_tolerates_missing_fields() {
        let resp: ActionResponse = serde_json::from_str(r#"{"message":"Request ID is required."}"#).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.message.as_deref(), Some("Request ID is required."));

        let resp: ActionResponse = serde_json::from_str(r#"{"success":true,"item":{"id":3}}"#).unwrap();
        assert!(resp.success);
        assert!(resp.message.is_none());
    }

    #[test]
    fn test_delete_response_ignores_success_flag() {
        let resp: DeleteResponse =
            serde_json::from_str(r#"{"success":false,"message":"Item not found."}"#).unwrap();
        assert_eq!(resp.message.as_deref(), Some("Item not found."));
    }

    #[test]
    fn test_delete_request_body() {
        let body = serde_json::to_string(&DeleteRequest { id: RecordId(12) }).unwrap();
        assert_eq!(body, r#"{"id":12}"#);
    }

    #[test]
    fn test_memory_slot_round_trip() {
        let slot = MemorySlot::new();
        assert_eq!(slot.read("k").unwrap(), None);
        slot.write("k", "[]").unwrap();
        assert_eq!(slot.read("k").unwrap().as_deref(), Some("[]"));
    }
}
