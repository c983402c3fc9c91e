pub mod a001_guest_request;
pub mod a002_inventory_item;
pub mod a003_maintenance_ticket;
pub mod a004_housekeeping_task;
pub mod a005_purchase_order;
