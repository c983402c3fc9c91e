use crate::shared::config::use_config;
use crate::shared::crud::{record_store, CrudPage};
use contracts::domain::a003_maintenance_ticket::MaintenanceTicket;
use leptos::prelude::*;

#[component]
pub fn MaintenanceList() -> impl IntoView {
    let config = use_config();
    let store = record_store::<MaintenanceTicket>(config.stores.maintenance, &config);

    view! {
        <CrudPage
            store=store
            add_label="Log Ticket"
            subtitle="Reported faults and their repair progress"
        />
    }
}
