use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::config::load_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Configuration is read once; pages pick their record store from it.
    provide_context(load_config());

    provide_context(AppGlobalContext::new());

    view! {
        <AppRoutes />
    }
}
