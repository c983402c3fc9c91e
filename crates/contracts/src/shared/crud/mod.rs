//! Generic list-view CRUD pattern shared by every back-office module.
//!
//! - `store` / `local`: record store contract and the persisted-slot variant
//! - `metrics`: summary counts derived from the collection
//! - `rows`: table rows with escaped content and action buttons
//! - `form`: add/update dialog state and validation
//! - `dispatch`: decoding of row clicks
//! - `cycle`: mutation followed by the reload that observes it

pub mod cycle;
pub mod dispatch;
pub mod form;
pub mod local;
pub mod messages;
pub mod metrics;
pub mod record;
pub mod rows;
pub mod status;
pub mod store;

pub use cycle::{load_records, lookup_for_edit, run_mutation, CycleOutcome, Mutation};
pub use dispatch::{dispatch, RowCommand};
pub use form::{DialogState, FormController, FormDraft, FormMode};
pub use local::LocalRecordStore;
pub use metrics::{MetricCard, Metrics};
pub use record::{
    parse_count, Column, ColumnKind, CrudEntity, FieldDef, FieldKind, RecordId, TableEntity,
};
pub use rows::{escape_html, ActionKind, Cell, RowAction, RowView, TableBody};
pub use status::{StatusTag, StatusVocabulary};
pub use store::{
    ActionResponse, DeleteRequest, DeleteResponse, KeyValueSlot, MemorySlot, RecordRepository,
    StoreError,
};
