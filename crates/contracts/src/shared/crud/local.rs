//! Record store over a single persisted slot holding the whole collection
//! as one JSON array.

use super::messages;
use super::record::{CrudEntity, RecordId};
use super::store::{
    ActionResponse, DeleteResponse, KeyValueSlot, RecordRepository, StoreError,
};
use async_trait::async_trait;
use std::marker::PhantomData;

fn next_id<R: CrudEntity>(records: &[R]) -> RecordId {
    let max = records
        .iter()
        .filter_map(|r| r.id())
        .map(|id| id.value())
        .max()
        .unwrap_or(0);
    RecordId(max.saturating_add(1))
}

/// Gives every record without an id (data written by index-addressed
/// versions) a fresh one. Returns whether anything changed.
fn assign_missing_ids<R: CrudEntity>(records: &mut [R]) -> bool {
    let mut changed = false;
    for i in 0..records.len() {
        if records[i].id().is_none() {
            let id = next_id(records);
            records[i].set_id(Some(id));
            changed = true;
        }
    }
    changed
}

fn seeded<R: CrudEntity>() -> Vec<R> {
    let mut records = R::defaults();
    for r in records.iter_mut() {
        r.set_id(None);
    }
    assign_missing_ids(&mut records);
    records
}

pub struct LocalRecordStore<R, S> {
    slot: S,
    _entity: PhantomData<fn() -> R>,
}

impl<R, S> LocalRecordStore<R, S>
where
    R: CrudEntity,
    S: KeyValueSlot,
{
    pub fn new(slot: S) -> Self {
        Self {
            slot,
            _entity: PhantomData,
        }
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Reads the collection. An empty slot is seeded with the default
    /// dataset; unreadable content falls back to the defaults without
    /// overwriting the slot.
    pub fn load(&self) -> Result<Vec<R>, StoreError> {
        let Some(raw) = self.slot.read(R::STORAGE_KEY)? else {
            let defaults = seeded::<R>();
            self.save(&defaults)?;
            return Ok(defaults);
        };

        match serde_json::from_str::<Vec<R>>(&raw) {
            Ok(mut records) => {
                if assign_missing_ids(&mut records) {
                    self.save(&records)?;
                }
                Ok(records)
            }
            Err(err) => {
                log::warn!(
                    "stored {} unreadable ({}), using defaults",
                    R::STORAGE_KEY,
                    err
                );
                Ok(seeded::<R>())
            }
        }
    }

    fn save(&self, records: &[R]) -> Result<(), StoreError> {
        let json = serde_json::to_string(records)?;
        self.slot.write(R::STORAGE_KEY, &json)
    }

    /// Inserts a record after a case-insensitive uniqueness check on its
    /// identifier.
    pub fn insert(&self, mut record: R) -> Result<ActionResponse, StoreError> {
        record.normalize();
        let identifier = record.identifier().to_string();
        if identifier.is_empty() {
            return Ok(ActionResponse::rejected(messages::invalid_identifier::<R>()));
        }

        let mut records = self.load()?;
        let lowered = identifier.to_lowercase();
        if records
            .iter()
            .any(|r| r.identifier().to_lowercase() == lowered)
        {
            return Ok(ActionResponse::rejected(messages::duplicate::<R>()));
        }

        record.set_id(Some(next_id(&records)));
        records.push(record);
        self.save(&records)?;
        Ok(ActionResponse::accepted(messages::added::<R>(&identifier)))
    }

    pub fn replace(&self, id: RecordId, mut record: R) -> Result<ActionResponse, StoreError> {
        let mut records = self.load()?;
        let Some(target) = records.iter_mut().find(|r| r.id() == Some(id)) else {
            return Ok(ActionResponse::rejected(messages::not_found::<R>()));
        };

        record.normalize();
        record.set_id(Some(id));
        let identifier = record.identifier().to_string();
        *target = record;
        self.save(&records)?;
        Ok(ActionResponse::accepted(messages::updated::<R>(&identifier)))
    }

    pub fn remove(&self, id: RecordId) -> Result<DeleteResponse, StoreError> {
        let mut records = self.load()?;
        let Some(pos) = records.iter().position(|r| r.id() == Some(id)) else {
            return Ok(DeleteResponse::new(messages::not_found::<R>()));
        };

        let removed = records.remove(pos);
        self.save(&records)?;
        Ok(DeleteResponse::new(messages::deleted::<R>(removed.identifier())))
    }
}

#[async_trait(?Send)]
impl<R, S> RecordRepository<R> for LocalRecordStore<R, S>
where
    R: CrudEntity,
    S: KeyValueSlot,
{
    async fn list(&self) -> Result<Vec<R>, StoreError> {
        self.load()
    }

    async fn add(&self, record: R) -> Result<ActionResponse, StoreError> {
        self.insert(record)
    }

    async fn update(&self, id: RecordId, record: R) -> Result<ActionResponse, StoreError> {
        self.replace(id, record)
    }

    async fn delete(&self, id: RecordId) -> Result<DeleteResponse, StoreError> {
        self.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_inventory_item::aggregate::InventoryItem;
    use crate::domain::a003_maintenance_ticket::aggregate::MaintenanceTicket;
    use crate::shared::crud::MemorySlot;

    fn towels() -> InventoryItem {
        InventoryItem {
            item: "Hand Towels".to_string(),
            category: "Towels".to_string(),
            unit: "Pieces".to_string(),
            in_stock: 40,
            min_level: 25,
            ..InventoryItem::default()
        }
    }

    #[test]
    fn test_empty_slot_is_seeded_with_defaults() {
        let store = LocalRecordStore::<InventoryItem, _>::new(MemorySlot::new());
        let records = store.load().unwrap();

        assert_eq!(records.len(), InventoryItem::defaults().len());
        assert_eq!(records[0].id, Some(RecordId(1)));
        assert!(store.slot().read(InventoryItem::STORAGE_KEY).unwrap().is_some());
    }

    #[test]
    fn test_malformed_content_falls_back_to_defaults() {
        let slot = MemorySlot::with_entry(InventoryItem::STORAGE_KEY, "{not json");
        let store = LocalRecordStore::<InventoryItem, _>::new(slot);
        let records = store.load().unwrap();

        assert_eq!(records.len(), InventoryItem::defaults().len());
        // the unreadable slot is left as it was
        assert_eq!(
            store.slot().read(InventoryItem::STORAGE_KEY).unwrap().as_deref(),
            Some("{not json")
        );

        let slot = MemorySlot::with_entry(InventoryItem::STORAGE_KEY, r#"{"item":"x"}"#);
        let store = LocalRecordStore::<InventoryItem, _>::new(slot);
        assert_eq!(store.load().unwrap().len(), InventoryItem::defaults().len());
    }

    #[test]
    fn test_legacy_records_without_ids_get_stable_ids() {
        let legacy = r#"[
            {"ticket":"MT-1","location":"Lobby","issue":"AC","assignedTo":"T. Perera","status":"Open"},
            {"id":5,"ticket":"MT-2","location":"Room 2","issue":"Lamp","assignedTo":"M. Khan","status":"Repaired"}
        ]"#;
        let store =
            LocalRecordStore::<MaintenanceTicket, _>::new(MemorySlot::with_entry(MaintenanceTicket::STORAGE_KEY, legacy));
        let records = store.load().unwrap();

        assert_eq!(records[0].id, Some(RecordId(6)));
        assert_eq!(records[1].id, Some(RecordId(5)));
        // ids are persisted, so a second load sees the same ones
        assert_eq!(store.load().unwrap(), records);
    }

    #[test]
    fn test_next_id_saturates_at_max() {
        let mut item = towels();
        item.id = Some(RecordId(i64::MAX));
        assert_eq!(next_id(&[item]), RecordId(i64::MAX));
        assert_eq!(next_id::<InventoryItem>(&[]), RecordId(1));
    }

    #[test]
    fn test_insert_assigns_next_id() {
        let store = LocalRecordStore::<InventoryItem, _>::new(MemorySlot::new());
        let before = store.load().unwrap();
        let resp = store.insert(towels()).unwrap();

        assert!(resp.success);
        assert_eq!(resp.message.as_deref(), Some("Added item Hand Towels."));
        let after = store.load().unwrap();
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after.last().unwrap().id, Some(RecordId(before.len() as i64 + 1)));
    }

    #[test]
    fn test_duplicate_identifier_is_rejected_case_insensitively() {
        let store = LocalRecordStore::<InventoryItem, _>::new(MemorySlot::new());
        let before = store.load().unwrap();
        let mut dup = towels();
        dup.item = "bath TOWELS".to_string();

        let resp = store.insert(dup).unwrap();
        assert!(!resp.success);
        assert_eq!(
            resp.message.as_deref(),
            Some("Item name already exists. Please use a unique item name.")
        );
        assert_eq!(store.load().unwrap(), before);
    }

    #[test]
    fn test_ids_are_stable_across_deletes() {
        let store = LocalRecordStore::<InventoryItem, _>::new(MemorySlot::new());
        let records = store.load().unwrap();
        let first = records[0].id.unwrap();
        let third = records[2].clone();

        store.remove(first).unwrap();
        let mut edited = third.clone();
        edited.in_stock = 5;
        let resp = store.replace(third.id.unwrap(), edited).unwrap();
        assert!(resp.success);

        let after = store.load().unwrap();
        let updated = after.iter().find(|r| r.id == third.id).unwrap();
        assert_eq!(updated.item, third.item);
        assert_eq!(updated.in_stock, 5);
    }

    #[test]
    fn test_stale_id_is_not_found_and_nothing_changes() {
        let store = LocalRecordStore::<InventoryItem, _>::new(MemorySlot::new());
        let before = store.load().unwrap();

        let resp = store.replace(RecordId(404), towels()).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.message.as_deref(), Some("Item not found."));

        let resp = store.remove(RecordId(404)).unwrap();
        assert_eq!(resp.message.as_deref(), Some("Item not found."));
        assert_eq!(store.load().unwrap(), before);
    }

    #[test]
    fn test_writes_clamp_counts() {
        let store = LocalRecordStore::<InventoryItem, _>::new(MemorySlot::new());
        let mut item = towels();
        item.in_stock = -3;
        item.damaged = -1;
        store.insert(item).unwrap();

        let stored = store.load().unwrap().pop().unwrap();
        assert_eq!(stored.in_stock, 0);
        assert_eq!(stored.damaged, 0);
    }
}
