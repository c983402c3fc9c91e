use crate::shared::config::use_config;
use crate::shared::crud::{record_store, CrudPage};
use contracts::domain::a005_purchase_order::PurchaseOrder;
use leptos::prelude::*;

#[component]
pub fn PurchaseOrderList() -> impl IntoView {
    let config = use_config();
    let store = record_store::<PurchaseOrder>(config.stores.purchase_orders, &config);

    view! {
        <CrudPage
            store=store
            add_label="Add PO"
            subtitle="Supplier orders and delivery status"
        />
    }
}
