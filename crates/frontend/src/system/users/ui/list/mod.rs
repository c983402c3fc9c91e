mod view_model;

use crate::shared::components::{PageHeader, StatCards};
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::notice::NoticeBar;
use crate::system::users::api::account_directory;
use contracts::shared::crud::{TableBody, TableEntity};
use contracts::system::users::{username_options, StaffAccount, STAFF_ROLES};
use leptos::prelude::*;
use thaw::*;
use view_model::AccountsVm;

fn inline_message(message: RwSignal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{text}</span>
                </div>
            }
        })
    }
}

const USERNAMES_LIST_ID: &str = "account-usernames";

/// Text input suggesting existing usernames.
fn username_input(value: RwSignal<String>) -> impl IntoView {
    view! {
        <input
            class="form__input"
            type="text"
            list=USERNAMES_LIST_ID
            autocomplete="off"
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}

/// Staff account management: account table with activate/deactivate
/// toggles and the create, assign-role and deactivate forms.
#[component]
pub fn AccountsPage() -> impl IntoView {
    let config = use_config();
    let vm = AccountsVm::new(account_directory(&config));
    vm.load();

    let cards = Signal::derive(move || {
        vm.accounts
            .with(|accounts| StaffAccount::metrics(accounts).cards())
    });
    let body_html = move || vm.accounts.with(|accounts| TableBody::render(accounts).to_html());
    let usernames = move || {
        vm.accounts
            .with(|accounts| username_options(accounts))
            .into_iter()
            .map(|name| view! { <option value=name></option> })
            .collect_view()
    };

    view! {
        <div class="page">
            <PageHeader title=StaffAccount::LIST_TITLE subtitle="Logins, roles and account status">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.load()>
                    {icon("refresh")}
                    "Refresh"
                </Button>
            </PageHeader>

            <NoticeBar notice=vm.notice />
            {inline_message(vm.error)}

            <StatCards cards=cards />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {StaffAccount::columns().iter().map(|column| view! {
                                <th class="table__header-cell">{column.title}</th>
                            }).collect_view()}
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody inner_html=body_html on:click=move |ev| vm.handle_click(ev)></tbody>
                </table>
            </div>

            <datalist id=USERNAMES_LIST_ID>{usernames}</datalist>

            <div class="account-forms">
                <Card>
                    <h3 class="account-forms__title">"Create Account"</h3>
                    <div class="form__group">
                        <label class="form__label">"Username"</label>
                        <Input value=vm.new_username placeholder="e.g. silva.nimal" />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Email"</label>
                        <Input value=vm.new_email placeholder="name@flametreehotel.local" />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Temporary Password"</label>
                        <Input value=vm.new_password input_type=InputType::Password />
                    </div>
                    {inline_message(vm.create_message)}
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.create()>
                        {icon("plus")}
                        "Create Account"
                    </Button>
                </Card>

                <Card>
                    <h3 class="account-forms__title">"Assign Role"</h3>
                    <div class="form__group">
                        <label class="form__label">"Username"</label>
                        {username_input(vm.role_username)}
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Role"</label>
                        <Select value=vm.role>
                            <option value="">"Select a role"</option>
                            {STAFF_ROLES.iter().map(|&role| view! {
                                <option value=role>{role}</option>
                            }).collect_view()}
                        </Select>
                    </div>
                    {inline_message(vm.role_message)}
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.assign()>
                        "Assign Role"
                    </Button>
                </Card>

                <Card>
                    <h3 class="account-forms__title">"Deactivate Account"</h3>
                    <div class="form__group">
                        <label class="form__label">"Username"</label>
                        {username_input(vm.deactivate_username)}
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Reason"</label>
                        <Input value=vm.deactivate_reason placeholder="e.g. Left the hotel" />
                    </div>
                    {inline_message(vm.deactivate_message)}
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.deactivate()>
                        "Deactivate"
                    </Button>
                </Card>
            </div>
        </div>
    }
}
