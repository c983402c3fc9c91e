pub mod aggregate;

pub use aggregate::PurchaseOrder;
