use crate::shared::crud::view_model::row_command;
use crate::shared::notice::Notice;
use contracts::shared::crud::{ActionKind, CycleOutcome};
use contracts::system::accounts::{
    assign_role, create_account, deactivate_account, load_accounts, toggle_account,
    AccountDirectory,
};
use contracts::system::users::{AssignRoleDto, DeactivateRequest, RegisterAccountDto, StaffAccount};
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;

/// Which of the three account forms produced an outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AccountForm {
    Create,
    AssignRole,
    Deactivate,
}

#[derive(Clone, Copy)]
pub struct AccountsVm {
    directory: StoredValue<Arc<dyn AccountDirectory>>,
    pub accounts: RwSignal<Vec<StaffAccount>>,
    pub error: RwSignal<Option<String>>,
    pub notice: Notice,

    // Create account
    pub new_username: RwSignal<String>,
    pub new_email: RwSignal<String>,
    pub new_password: RwSignal<String>,
    pub create_message: RwSignal<Option<String>>,

    // Assign role
    pub role_username: RwSignal<String>,
    pub role: RwSignal<String>,
    pub role_message: RwSignal<Option<String>>,

    // Deactivate
    pub deactivate_username: RwSignal<String>,
    pub deactivate_reason: RwSignal<String>,
    pub deactivate_message: RwSignal<Option<String>>,
}

impl AccountsVm {
    pub fn new(directory: Arc<dyn AccountDirectory>) -> Self {
        Self {
            directory: StoredValue::new(directory),
            accounts: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            notice: Notice::new(),
            new_username: RwSignal::new(String::new()),
            new_email: RwSignal::new(String::new()),
            new_password: RwSignal::new(String::new()),
            create_message: RwSignal::new(None),
            role_username: RwSignal::new(String::new()),
            role: RwSignal::new(String::new()),
            role_message: RwSignal::new(None),
            deactivate_username: RwSignal::new(String::new()),
            deactivate_reason: RwSignal::new(String::new()),
            deactivate_message: RwSignal::new(None),
        }
    }

    pub fn load(&self) {
        let this = *self;
        spawn_local(async move {
            let directory = this.directory.get_value();
            match load_accounts(directory.as_ref()).await {
                Ok(accounts) => {
                    this.accounts.set(accounts);
                    this.error.set(None);
                }
                Err(message) => this.error.set(Some(message)),
            }
        });
    }

    pub fn create(&self) {
        let form = RegisterAccountDto {
            username: self.new_username.get_untracked(),
            staff_email: self.new_email.get_untracked(),
            password: self.new_password.get_untracked(),
            role: String::new(),
        };
        let this = *self;
        spawn_local(async move {
            let directory = this.directory.get_value();
            let outcome = create_account(directory.as_ref(), &form).await;
            this.apply(AccountForm::Create, outcome);
        });
    }

    pub fn assign(&self) {
        let form = AssignRoleDto {
            username: self.role_username.get_untracked(),
            role: self.role.get_untracked(),
        };
        let this = *self;
        spawn_local(async move {
            let directory = this.directory.get_value();
            let outcome = assign_role(directory.as_ref(), &form).await;
            this.apply(AccountForm::AssignRole, outcome);
        });
    }

    pub fn deactivate(&self) {
        let form = DeactivateRequest {
            username: self.deactivate_username.get_untracked(),
            reason: self.deactivate_reason.get_untracked(),
        };
        let this = *self;
        spawn_local(async move {
            let directory = this.directory.get_value();
            let outcome = deactivate_account(directory.as_ref(), &form).await;
            this.apply(AccountForm::Deactivate, outcome);
        });
    }

    pub fn toggle(&self, username: String) {
        let this = *self;
        spawn_local(async move {
            let directory = this.directory.get_value();
            let outcome = toggle_account(directory.as_ref(), &username).await;
            if outcome.accepted {
                this.notice.show(outcome.message.clone());
            } else {
                this.error.set(Some(outcome.message.clone()));
            }
            this.apply_reload(outcome);
        });
    }

    /// Rejections stay inline next to the form; an accepted form is cleared.
    fn apply(&self, form: AccountForm, outcome: CycleOutcome<StaffAccount>) {
        let inline = match form {
            AccountForm::Create => self.create_message,
            AccountForm::AssignRole => self.role_message,
            AccountForm::Deactivate => self.deactivate_message,
        };
        if outcome.accepted {
            inline.set(None);
            match form {
                AccountForm::Create => {
                    self.new_username.set(String::new());
                    self.new_email.set(String::new());
                    self.new_password.set(String::new());
                }
                AccountForm::AssignRole => {
                    self.role_username.set(String::new());
                    self.role.set(String::new());
                }
                AccountForm::Deactivate => {
                    self.deactivate_username.set(String::new());
                    self.deactivate_reason.set(String::new());
                }
            }
            self.notice.show(outcome.message.clone());
        } else {
            inline.set(Some(outcome.message.clone()));
        }
        self.apply_reload(outcome);
    }

    fn apply_reload(&self, outcome: CycleOutcome<StaffAccount>) {
        if let Some(accounts) = outcome.records {
            self.accounts.set(accounts);
            self.error.set(None);
        }
        if let Some(message) = outcome.reload_error {
            self.error.set(Some(message));
        }
    }

    pub fn handle_click(&self, ev: leptos::ev::MouseEvent) {
        if let Some(command) = row_command(&ev) {
            if command.kind == ActionKind::Toggle {
                self.toggle(command.key);
            }
        }
    }
}
