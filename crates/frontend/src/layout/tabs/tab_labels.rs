//! Tab titles. Module screens reuse the list titles declared in contracts.

use contracts::domain::a001_guest_request::GuestRequest;
use contracts::domain::a002_inventory_item::InventoryItem;
use contracts::domain::a003_maintenance_ticket::MaintenanceTicket;
use contracts::domain::a004_housekeeping_task::HousekeepingTask;
use contracts::domain::a005_purchase_order::PurchaseOrder;
use contracts::shared::crud::TableEntity;
use contracts::system::users::StaffAccount;

/// Readable title for a tab key, `None` for keys no screen handles.
pub fn tab_label_for_key(key: &str) -> Option<&'static str> {
    match key {
        "a001_guest_request" => Some(GuestRequest::LIST_TITLE),
        "a002_inventory_item" => Some(InventoryItem::LIST_TITLE),
        "a003_maintenance_ticket" => Some(MaintenanceTicket::LIST_TITLE),
        "a004_housekeeping_task" => Some(HousekeepingTask::LIST_TITLE),
        "a005_purchase_order" => Some(PurchaseOrder::LIST_TITLE),
        "sys_users" => Some(StaffAccount::LIST_TITLE),
        _ => None,
    }
}
