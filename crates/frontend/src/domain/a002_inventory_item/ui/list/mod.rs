use crate::shared::config::use_config;
use crate::shared::crud::{record_store, CrudPage};
use contracts::domain::a002_inventory_item::InventoryItem;
use leptos::prelude::*;

#[component]
pub fn InventoryList() -> impl IntoView {
    let config = use_config();
    let store = record_store::<InventoryItem>(config.stores.inventory, &config);

    view! {
        <CrudPage
            store=store
            add_label="Add Item"
            subtitle="Stock levels against minimums, with damaged and missing units"
        />
    }
}
