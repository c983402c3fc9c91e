//! Browser side of the list-view CRUD pattern.
//!
//! Entity behaviour lives in `contracts::shared::crud`; this module adds the
//! record stores that need a browser and the generic page built on them.

pub mod browser_slot;
pub mod factory;
pub mod form_dialog;
pub mod page;
pub mod remote;
pub mod view_model;

pub use browser_slot::BrowserSlot;
pub use factory::record_store;
pub use page::CrudPage;
pub use remote::RemoteRecordStore;
pub use view_model::CrudListVm;
