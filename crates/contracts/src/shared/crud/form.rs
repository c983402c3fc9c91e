//! Form controller: add/update dialog state and client-side validation.
//!
//! Dialog lifecycle:
//! - `Closed -> Open(blank)` on the add trigger
//! - `Closed -> Open(prefilled)` on edit, after a successful lookup
//! - `Open -> Closed` on cancel or on an accepted submit
//! - a rejected submit keeps the dialog `Open` with an inline message

use super::cycle::{CycleOutcome, Mutation};
use super::messages;
use super::record::{CrudEntity, FieldDef, RecordId};
use std::collections::BTreeMap;
use std::marker::PhantomData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Update(RecordId),
}

impl FormMode {
    pub fn includes(&self, field: &FieldDef) -> bool {
        match self {
            FormMode::Add => field.on_add,
            FormMode::Update(_) => field.on_update,
        }
    }
}

/// Raw input values of an open dialog, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    values: BTreeMap<&'static str, String>,
}

impl FormDraft {
    fn from_record<R: CrudEntity>(record: &R, mode: FormMode) -> Self {
        let values = R::fields()
            .iter()
            .filter(|f| mode.includes(f))
            .map(|f| (f.name, record.form_value(f.name)))
            .collect();
        Self { values }
    }

    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    fn set(&mut self, field: &str, value: &str) {
        if let Some(slot) = self.values.get_mut(field) {
            *slot = value.to_string();
        }
    }

    fn build<R: CrudEntity>(&self) -> R {
        let mut record = R::default();
        for (name, value) in &self.values {
            record.apply_form_value(name, value);
        }
        record.normalize();
        record
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogState {
    Closed,
    Open {
        mode: FormMode,
        draft: FormDraft,
        message: Option<String>,
    },
}

/// Component-scoped dialog state of one list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormController<R> {
    state: DialogState,
    _entity: PhantomData<fn() -> R>,
}

impl<R: CrudEntity> Default for FormController<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CrudEntity> FormController<R> {
    pub fn new() -> Self {
        Self {
            state: DialogState::Closed,
            _entity: PhantomData,
        }
    }

    pub fn state(&self) -> &DialogState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, DialogState::Open { .. })
    }

    pub fn mode(&self) -> Option<FormMode> {
        match &self.state {
            DialogState::Open { mode, .. } => Some(*mode),
            DialogState::Closed => None,
        }
    }

    pub fn value(&self, field: &str) -> String {
        match &self.state {
            DialogState::Open { draft, .. } => draft.get(field).to_string(),
            DialogState::Closed => String::new(),
        }
    }

    pub fn message(&self) -> Option<String> {
        match &self.state {
            DialogState::Open { message, .. } => message.clone(),
            DialogState::Closed => None,
        }
    }

    /// Fields shown by the open dialog, in declaration order.
    pub fn visible_fields(&self) -> Vec<&'static FieldDef> {
        match self.mode() {
            Some(mode) => R::fields().iter().filter(|f| mode.includes(f)).collect(),
            None => Vec::new(),
        }
    }

    pub fn open_add(&mut self) {
        self.state = DialogState::Open {
            mode: FormMode::Add,
            draft: FormDraft::from_record(&R::default(), FormMode::Add),
            message: None,
        };
    }

    /// Opens the update dialog pre-filled from a looked-up record.
    pub fn open_update(&mut self, record: &R) -> Result<(), String> {
        let id = record.id().ok_or_else(messages::not_found::<R>)?;
        let mode = FormMode::Update(id);
        self.state = DialogState::Open {
            mode,
            draft: FormDraft::from_record(record, mode),
            message: None,
        };
        Ok(())
    }

    pub fn set_field(&mut self, field: &str, value: &str) {
        if let DialogState::Open { draft, .. } = &mut self.state {
            draft.set(field, value);
        }
    }

    pub fn cancel(&mut self) {
        self.state = DialogState::Closed;
    }

    /// Validates the draft and turns it into a mutation.
    ///
    /// A blank identifier sets the inline message and returns `None`; the
    /// store is never contacted in that case.
    pub fn prepare(&mut self) -> Option<Mutation<R>> {
        let DialogState::Open {
            mode,
            draft,
            message,
        } = &mut self.state
        else {
            return None;
        };

        let mut record: R = draft.build();
        if record.identifier().trim().is_empty() {
            *message = Some(messages::invalid_identifier::<R>());
            return None;
        }
        *message = None;

        match *mode {
            FormMode::Add => {
                record.set_id(None);
                Some(Mutation::Add(record))
            }
            FormMode::Update(id) => {
                record.set_id(Some(id));
                Some(Mutation::Update(id, record))
            }
        }
    }

    /// Applies the outcome of a submitted mutation: closes on acceptance,
    /// otherwise stays open with the outcome's message inline.
    pub fn finish(&mut self, outcome: &CycleOutcome<R>) {
        if outcome.accepted {
            self.state = DialogState::Closed;
        } else if let DialogState::Open { message, .. } = &mut self.state {
            *message = Some(outcome.message.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_guest_request::aggregate::GuestRequest;
    use crate::domain::a002_inventory_item::aggregate::InventoryItem;

    #[test]
    fn test_open_add_starts_blank() {
        let mut form = FormController::<GuestRequest>::new();
        assert!(!form.is_open());
        form.open_add();
        assert_eq!(form.mode(), Some(FormMode::Add));
        assert_eq!(form.value("requestId"), "");
        assert!(form.message().is_none());
    }

    #[test]
    fn test_blank_identifier_keeps_dialog_open() {
        let mut form = FormController::<GuestRequest>::new();
        form.open_add();
        form.set_field("requestId", "   ");
        form.set_field("guestRoom", "101");

        assert!(form.prepare().is_none());
        assert!(form.is_open());
        assert_eq!(
            form.message().as_deref(),
            Some("Please enter a valid Request ID.")
        );
    }

    #[test]
    fn test_prepare_add_builds_trimmed_record() {
        let mut form = FormController::<GuestRequest>::new();
        form.open_add();
        form.set_field("requestId", " GS-010 ");
        form.set_field("guestRoom", " 305 ");
        form.set_field("status", "In Progress");

        match form.prepare() {
            Some(Mutation::Add(record)) => {
                assert_eq!(record.request_id, "GS-010");
                assert_eq!(record.guest_room, "305");
                assert_eq!(record.status, "In Progress");
                assert!(record.id.is_none());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_update_is_prefilled_and_addressed_by_id() {
        let existing = InventoryItem {
            id: Some(RecordId(4)),
            item: "Bath Towels".to_string(),
            category: "Towels".to_string(),
            unit: "Pieces".to_string(),
            in_stock: 128,
            min_level: 70,
            damaged: 2,
            missing: 1,
            status: None,
        };
        let mut form = FormController::<InventoryItem>::new();
        form.open_update(&existing).unwrap();
        assert_eq!(form.value("damaged"), "2");
        assert_eq!(form.value("inStock"), "128");

        form.set_field("damaged", "-5");
        form.set_field("missing", "");
        match form.prepare() {
            Some(Mutation::Update(id, record)) => {
                assert_eq!(id, RecordId(4));
                assert_eq!(record.id, Some(RecordId(4)));
                assert_eq!(record.damaged, 0);
                assert_eq!(record.missing, 0);
                assert_eq!(record.in_stock, 128);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_add_form_hides_update_only_fields() {
        let mut form = FormController::<InventoryItem>::new();
        form.open_add();
        let names: Vec<_> = form.visible_fields().iter().map(|f| f.name).collect();
        assert!(!names.contains(&"damaged"));
        assert!(!names.contains(&"missing"));
        assert!(names.contains(&"inStock"));
    }

    #[test]
    fn test_open_update_without_id_fails() {
        let mut form = FormController::<GuestRequest>::new();
        assert!(form.open_update(&GuestRequest::default()).is_err());
        assert!(!form.is_open());
    }

    #[test]
    fn test_finish_closes_only_on_acceptance() {
        let mut form = FormController::<GuestRequest>::new();
        form.open_add();
        form.finish(&CycleOutcome::rejected("Request ID already exists."));
        assert!(form.is_open());
        assert_eq!(form.message().as_deref(), Some("Request ID already exists."));

        form.finish(&CycleOutcome::accepted("Added request GS-1.", None, None));
        assert!(!form.is_open());
    }

    #[test]
    fn test_cancel_closes() {
        let mut form = FormController::<GuestRequest>::new();
        form.open_add();
        form.cancel();
        assert_eq!(form.state(), &DialogState::Closed);
        assert!(form.prepare().is_none());
    }
}
