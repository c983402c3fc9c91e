//! Add/update dialog generated from an entity's field definitions.

use super::view_model::CrudListVm;
use crate::shared::modal::Modal;
use contracts::shared::crud::{CrudEntity, FieldDef, FieldKind, FormMode};
use leptos::prelude::*;
use thaw::*;

fn dialog_title<R: CrudEntity>(mode: FormMode) -> String {
    let verb = match mode {
        FormMode::Add => "Add",
        FormMode::Update(_) => "Update",
    };
    let mut noun = R::NOUN.chars();
    let noun = match noun.next() {
        Some(first) => first.to_uppercase().chain(noun).collect::<String>(),
        None => String::new(),
    };
    format!("{} {}", verb, noun)
}

/// One labelled input. The initial value is read untracked so typing never
/// re-renders the input.
fn field_input<R: CrudEntity>(vm: CrudListVm<R>, field: &'static FieldDef) -> AnyView {
    let name = field.name;
    let initial = vm.form.with_untracked(|f| f.value(name));
    let on_input = move |ev: leptos::ev::Event| vm.set_field(name, event_target_value(&ev));

    let control = match field.kind {
        FieldKind::Text => view! {
            <input class="form__input" type="text" prop:value=initial on:input=on_input />
        }
        .into_any(),
        FieldKind::Count => view! {
            <input
                class="form__input"
                type="number"
                min="0"
                step="1"
                prop:value=initial
                on:input=on_input
            />
        }
        .into_any(),
        FieldKind::Select(options) => {
            // Keep a stored value outside the vocabulary selectable on update.
            let extra = (!initial.is_empty() && !options.contains(&initial.as_str()))
                .then(|| initial.clone());
            view! {
                <select class="form__select" on:change=on_input>
                    {extra.map(|value| view! {
                        <option value=value.clone() selected=true>{value.clone()}</option>
                    })}
                    {options.iter().map(|&option| {
                        let selected = option == initial;
                        view! { <option value=option selected=selected>{option}</option> }
                    }).collect_view()}
                </select>
            }
            .into_any()
        }
    };

    view! {
        <div class="form__group">
            <label class="form__label">{field.label}</label>
            {control}
        </div>
    }
    .into_any()
}

#[component]
pub fn FormDialog<R: CrudEntity>(vm: CrudListVm<R>) -> impl IntoView {
    // Rebuilt only when the dialog opens, closes or switches mode.
    let mode = Memo::new(move |_| vm.form.with(|f| f.mode()));

    move || {
        mode.get().map(|mode| {
            let fields = vm.form.with_untracked(|f| f.visible_fields());
            view! {
                <Modal title={dialog_title::<R>(mode)} on_close=Callback::new(move |_| vm.cancel())>
                    <div class="form">
                        {fields.into_iter().map(|field| field_input(vm, field)).collect_view()}
                    </div>
                    {move || vm.form.with(|f| f.message()).map(|message| view! {
                        <div class="warning-box warning-box--error">
                            <span class="warning-box__icon">"⚠"</span>
                            <span class="warning-box__text">{message}</span>
                        </div>
                    })}
                    <div class="form__actions">
                        <Flex gap=FlexGap::Small>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.cancel()>
                                "Cancel"
                            </Button>
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.submit()>
                                "Save"
                            </Button>
                        </Flex>
                    </div>
                </Modal>
            }
        })
    }
}
