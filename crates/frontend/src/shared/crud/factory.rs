use super::browser_slot::BrowserSlot;
use super::remote::RemoteRecordStore;
use crate::shared::api_utils::api_base;
use contracts::shared::config::{AppConfig, StoreKind};
use contracts::shared::crud::{CrudEntity, LocalRecordStore, RecordRepository};
use std::sync::Arc;

/// Record store of one module as selected by configuration.
pub fn record_store<R: CrudEntity>(
    kind: StoreKind,
    config: &AppConfig,
) -> Arc<dyn RecordRepository<R>> {
    match kind {
        StoreKind::Local => {
            log::debug!("{}: local store ({})", R::ENDPOINT, R::STORAGE_KEY);
            Arc::new(LocalRecordStore::<R, _>::new(BrowserSlot))
        }
        StoreKind::Remote => {
            let base = api_base(config);
            log::debug!("{}: remote store at {}", R::ENDPOINT, base);
            Arc::new(RemoteRecordStore::<R>::new(base))
        }
    }
}
