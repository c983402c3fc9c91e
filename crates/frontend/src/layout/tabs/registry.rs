//! Maps a tab key to the view rendered inside the tab.

use crate::domain::a001_guest_request::ui::list::GuestRequestList;
use crate::domain::a002_inventory_item::ui::list::InventoryList;
use crate::domain::a003_maintenance_ticket::ui::list::MaintenanceList;
use crate::domain::a004_housekeeping_task::ui::list::HousekeepingList;
use crate::domain::a005_purchase_order::ui::list::PurchaseOrderList;
use crate::system::users::ui::list::AccountsPage;
use leptos::prelude::*;

pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "a001_guest_request" => view! { <GuestRequestList /> }.into_any(),
        "a002_inventory_item" => view! { <InventoryList /> }.into_any(),
        "a003_maintenance_ticket" => view! { <MaintenanceList /> }.into_any(),
        "a004_housekeeping_task" => view! { <HousekeepingList /> }.into_any(),
        "a005_purchase_order" => view! { <PurchaseOrderList /> }.into_any(),
        "sys_users" => view! { <AccountsPage /> }.into_any(),
        _ => {
            log::warn!("Unknown tab type: {}", key);
            view! { <div class="placeholder">"Not implemented yet"</div> }.into_any()
        }
    }
}
