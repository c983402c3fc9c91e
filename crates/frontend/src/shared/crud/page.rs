//! Generic list page: header, summary cards, table and form dialog.

use super::form_dialog::FormDialog;
use super::view_model::CrudListVm;
use crate::shared::components::{PageHeader, StatCards};
use crate::shared::icons::icon;
use crate::shared::notice::NoticeBar;
use contracts::shared::crud::{CrudEntity, RecordRepository, TableBody};
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

#[component]
pub fn CrudPage<R: CrudEntity>(
    store: Arc<dyn RecordRepository<R>>,
    /// Caption of the add button
    #[prop(into)]
    add_label: String,
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
) -> impl IntoView {
    let vm = CrudListVm::new(store);
    log::debug!("{} page mounted", R::ENDPOINT);
    vm.load();

    let cards = Signal::derive(move || vm.records.with(|records| R::metrics(records).cards()));
    // Rows carry escaped markup; clicks are handled once on the body.
    let body_html = move || vm.records.with(|records| TableBody::render(records).to_html());

    view! {
        <div class="page">
            <PageHeader title=R::LIST_TITLE subtitle=subtitle>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.open_add()>
                    {icon("plus")}
                    {add_label}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || vm.loading.get())
                    on_click=move |_| vm.load()
                >
                    {icon("refresh")}
                    "Refresh"
                </Button>
            </PageHeader>

            <NoticeBar notice=vm.notice />

            {move || vm.error.get().map(|message| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{message}</span>
                </div>
            })}

            <StatCards cards=cards />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {R::columns().iter().map(|column| view! {
                                <th class="table__header-cell">{column.title}</th>
                            }).collect_view()}
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody inner_html=body_html on:click=move |ev| vm.handle_click(ev)></tbody>
                </table>
            </div>

            <FormDialog vm=vm />
        </div>
    }
}
