//! View model of one list page: records, messages and the form dialog.

use contracts::shared::crud::{
    dispatch, load_records, lookup_for_edit, run_mutation, ActionKind, CrudEntity,
    CycleOutcome, FormController, Mutation, RecordId, RecordRepository, RowCommand,
};
use crate::shared::notice::Notice;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use std::sync::Arc;
use wasm_bindgen::JsCast;

pub struct CrudListVm<R: CrudEntity> {
    store: StoredValue<Arc<dyn RecordRepository<R>>>,
    /// Last loaded collection, in storage order
    pub records: RwSignal<Vec<R>>,
    /// Load error shown above the table
    pub error: RwSignal<Option<String>>,
    pub notice: Notice,
    pub form: RwSignal<FormController<R>>,
    pub loading: RwSignal<bool>,
}

impl<R: CrudEntity> Clone for CrudListVm<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: CrudEntity> Copy for CrudListVm<R> {}

impl<R: CrudEntity> CrudListVm<R> {
    pub fn new(store: Arc<dyn RecordRepository<R>>) -> Self {
        Self {
            store: StoredValue::new(store),
            records: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            notice: Notice::new(),
            form: RwSignal::new(FormController::new()),
            loading: RwSignal::new(false),
        }
    }

    pub fn load(&self) {
        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            let store = this.store.get_value();
            match load_records(store.as_ref()).await {
                Ok(records) => {
                    this.records.set(records);
                    this.error.set(None);
                }
                Err(message) => this.error.set(Some(message)),
            }
            this.loading.set(false);
        });
    }

    pub fn open_add(&self) {
        self.form.update(|f| f.open_add());
    }

    /// Opens the update dialog after a fresh lookup of the record.
    pub fn edit(&self, id: RecordId) {
        let this = *self;
        spawn_local(async move {
            let store = this.store.get_value();
            let opened = match lookup_for_edit(store.as_ref(), id).await {
                Ok(record) => this
                    .form
                    .try_update(|f| f.open_update(&record))
                    .unwrap_or(Ok(())),
                Err(message) => Err(message),
            };
            if let Err(message) = opened {
                this.notice.show(message);
            }
        });
    }

    pub fn set_field(&self, field: &'static str, value: String) {
        self.form.update(|f| f.set_field(field, &value));
    }

    pub fn cancel(&self) {
        self.form.update(|f| f.cancel());
    }

    /// Validates the open dialog and runs its mutation. Validation failures
    /// stay inline and never reach the store.
    pub fn submit(&self) {
        let Some(mutation) = self.form.try_update(|f| f.prepare()).flatten() else {
            return;
        };
        let this = *self;
        spawn_local(async move {
            let store = this.store.get_value();
            let outcome = run_mutation(store.as_ref(), mutation).await;
            this.form.update(|f| f.finish(&outcome));
            if outcome.accepted {
                this.notice.show(outcome.message.clone());
            }
            this.apply_reload(outcome);
        });
    }

    /// Deletes after the user confirms. The reload follows any answer.
    pub fn delete(&self, command: RowCommand) {
        let Some(id) = command.record_id() else {
            log::warn!("{}: delete without record id '{}'", R::ENDPOINT, command.key);
            return;
        };
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message(&command.confirm_prompt(R::NOUN)).ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let label = command.label.clone().unwrap_or_default();
        let this = *self;
        spawn_local(async move {
            let store = this.store.get_value();
            let outcome = run_mutation(store.as_ref(), Mutation::Delete { id, label }).await;
            this.notice.show(outcome.message.clone());
            this.apply_reload(outcome);
        });
    }

    fn apply_reload(&self, outcome: CycleOutcome<R>) {
        if let Some(records) = outcome.records {
            self.records.set(records);
            self.error.set(None);
        }
        if let Some(message) = outcome.reload_error {
            self.error.set(Some(message));
        }
    }

    /// Delegated click listener of the table body.
    pub fn handle_click(&self, ev: leptos::ev::MouseEvent) {
        let Some(command) = row_command(&ev) else {
            return;
        };
        match command.kind {
            ActionKind::Edit => match command.record_id() {
                Some(id) => self.edit(id),
                None => log::warn!("{}: edit without record id '{}'", R::ENDPOINT, command.key),
            },
            ActionKind::Delete => self.delete(command),
            ActionKind::Toggle => {}
        }
    }
}

/// Decodes the action button (if any) under a click.
pub fn row_command(ev: &leptos::ev::MouseEvent) -> Option<RowCommand> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let button = target.closest("[data-action]").ok()??;
    dispatch(
        button.get_attribute("data-action").as_deref(),
        button.get_attribute("data-id").as_deref(),
        button.get_attribute("data-label").as_deref(),
    )
}
