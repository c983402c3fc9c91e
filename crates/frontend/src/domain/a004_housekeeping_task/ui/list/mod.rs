use crate::shared::config::use_config;
use crate::shared::crud::{record_store, CrudPage};
use contracts::domain::a004_housekeeping_task::HousekeepingTask;
use leptos::prelude::*;

#[component]
pub fn HousekeepingList() -> impl IntoView {
    let config = use_config();
    let store = record_store::<HousekeepingTask>(config.stores.housekeeping, &config);

    view! {
        <CrudPage
            store=store
            add_label="Add Task"
            subtitle="Room service tasks assigned to housekeeping staff"
        />
    }
}
