//! Tab management
//!
//! - `page`: TabPage wrapper around a tab's content
//! - `registry`: tab.key to view mapping
//! - `tab_labels`: tab titles

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::tab_label_for_key;
