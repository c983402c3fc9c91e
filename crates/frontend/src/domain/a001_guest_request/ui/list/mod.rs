use crate::shared::config::use_config;
use crate::shared::crud::{record_store, CrudPage};
use contracts::domain::a001_guest_request::GuestRequest;
use leptos::prelude::*;

#[component]
pub fn GuestRequestList() -> impl IntoView {
    let config = use_config();
    let store = record_store::<GuestRequest>(config.stores.guest_requests, &config);

    view! {
        <CrudPage
            store=store
            add_label="Add Request"
            subtitle="Requests logged by the front desk and their assignment"
        />
    }
}
