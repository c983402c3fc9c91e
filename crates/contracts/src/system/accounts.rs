//! Staff account directory and the account-management operations built on
//! top of it.
//!
//! Every operation validates its form first; a failed validation never
//! reaches the directory. Accepted operations are followed by a reload.

use super::users::{
    AssignRoleDto, DeactivateRequest, RegisterAccountDto, SetAccountStatusDto, StaffAccount,
};
use crate::shared::crud::{ActionResponse, CycleOutcome, KeyValueSlot, RecordId, StoreError};
use async_trait::async_trait;

pub const ACCOUNTS_STORAGE_KEY: &str = "staffAccounts";

fn user_not_found() -> String {
    "User not found".to_string()
}

fn status_changed(username: &str, active: bool) -> String {
    let action = if active { "reactivated" } else { "deactivated" };
    format!("Account {} for {}", action, username)
}

#[async_trait(?Send)]
pub trait AccountDirectory: Send + Sync {
    async fn list(&self) -> Result<Vec<StaffAccount>, StoreError>;

    async fn register(&self, dto: RegisterAccountDto) -> Result<ActionResponse, StoreError>;

    async fn assign_role(&self, dto: AssignRoleDto) -> Result<ActionResponse, StoreError>;

    async fn set_status(&self, dto: SetAccountStatusDto) -> Result<ActionResponse, StoreError>;
}

// ============================================================================
// Local directory
// ============================================================================

/// Account directory kept in the `staffAccounts` slot.
pub struct LocalAccountDirectory<S> {
    slot: S,
}

impl<S: KeyValueSlot> LocalAccountDirectory<S> {
    pub fn new(slot: S) -> Self {
        Self { slot }
    }

    pub fn load(&self) -> Result<Vec<StaffAccount>, StoreError> {
        let Some(raw) = self.slot.read(ACCOUNTS_STORAGE_KEY)? else {
            let defaults = StaffAccount::defaults();
            self.save(&defaults)?;
            return Ok(defaults);
        };

        serde_json::from_str(&raw).or_else(|err| {
            log::warn!("stored accounts unreadable ({}), using defaults", err);
            Ok(StaffAccount::defaults())
        })
    }

    fn save(&self, accounts: &[StaffAccount]) -> Result<(), StoreError> {
        let json = serde_json::to_string(accounts)?;
        self.slot.write(ACCOUNTS_STORAGE_KEY, &json)
    }

    fn next_id(accounts: &[StaffAccount]) -> RecordId {
        let max = accounts
            .iter()
            .filter_map(|a| a.id)
            .map(|id| id.value())
            .max()
            .unwrap_or(0);
        RecordId(max.saturating_add(1))
    }

    pub fn insert(&self, dto: RegisterAccountDto) -> Result<ActionResponse, StoreError> {
        let dto = match dto.validated() {
            Ok(dto) => dto,
            Err(message) => return Ok(ActionResponse::rejected(message)),
        };

        let mut accounts = self.load()?;
        if accounts.iter().any(|a| a.matches(&dto.username)) {
            return Ok(ActionResponse::rejected("Username already exists"));
        }

        let mut account = StaffAccount::new(&dto.username, &dto.staff_email, &dto.role);
        account.id = Some(Self::next_id(&accounts));
        account.created_date = Some(chrono::Utc::now().format("%Y-%m-%d").to_string());
        accounts.push(account);
        self.save(&accounts)?;
        Ok(ActionResponse::accepted(format!(
            "Account created for {}",
            dto.username
        )))
    }

    pub fn change_role(&self, dto: AssignRoleDto) -> Result<ActionResponse, StoreError> {
        let mut accounts = self.load()?;
        let Some(account) = accounts.iter_mut().find(|a| a.matches(&dto.username)) else {
            return Ok(ActionResponse::rejected(user_not_found()));
        };

        account.role = dto.role.trim().to_string();
        let message = format!("Role assigned: {} is now {}", account.username, account.role);
        self.save(&accounts)?;
        Ok(ActionResponse::accepted(message))
    }

    pub fn change_status(&self, dto: SetAccountStatusDto) -> Result<ActionResponse, StoreError> {
        let mut accounts = self.load()?;
        let Some(account) = accounts.iter_mut().find(|a| a.matches(&dto.username)) else {
            return Ok(ActionResponse::rejected(user_not_found()));
        };

        account.status = dto.is_active();
        let message = status_changed(&account.username, account.status);
        self.save(&accounts)?;
        Ok(ActionResponse::accepted(message))
    }
}

#[async_trait(?Send)]
impl<S: KeyValueSlot> AccountDirectory for LocalAccountDirectory<S> {
    async fn list(&self) -> Result<Vec<StaffAccount>, StoreError> {
        self.load()
    }

    async fn register(&self, dto: RegisterAccountDto) -> Result<ActionResponse, StoreError> {
        self.insert(dto)
    }

    async fn assign_role(&self, dto: AssignRoleDto) -> Result<ActionResponse, StoreError> {
        self.change_role(dto)
    }

    async fn set_status(&self, dto: SetAccountStatusDto) -> Result<ActionResponse, StoreError> {
        self.change_status(dto)
    }
}

// ============================================================================
// Operations
// ============================================================================

pub async fn load_accounts<D>(directory: &D) -> Result<Vec<StaffAccount>, String>
where
    D: AccountDirectory + ?Sized,
{
    directory.list().await.map_err(|err| {
        log::error!("account list failed: {}", err);
        format!("Error loading accounts: {}", err)
    })
}

async fn finish<D>(
    directory: &D,
    response: Result<ActionResponse, StoreError>,
    fallback: String,
) -> CycleOutcome<StaffAccount>
where
    D: AccountDirectory + ?Sized,
{
    match response {
        Ok(resp) if resp.success => {
            let message = resp.message.unwrap_or(fallback);
            match load_accounts(directory).await {
                Ok(accounts) => CycleOutcome::accepted(message, Some(accounts), None),
                Err(err) => CycleOutcome::accepted(message, None, Some(err)),
            }
        }
        Ok(resp) => CycleOutcome::rejected(
            resp.message
                .unwrap_or_else(|| "The request was rejected.".to_string()),
        ),
        Err(err) => {
            log::error!("account request failed: {}", err);
            CycleOutcome::rejected(format!("Error contacting the server: {}", err))
        }
    }
}

pub async fn create_account<D>(
    directory: &D,
    form: &RegisterAccountDto,
) -> CycleOutcome<StaffAccount>
where
    D: AccountDirectory + ?Sized,
{
    let dto = match form.validated() {
        Ok(dto) => dto,
        Err(message) => return CycleOutcome::rejected(message),
    };
    let fallback = format!("Account created for {}", dto.username);
    log::info!("registering account {}", dto.username);
    let response = directory.register(dto).await;
    finish(directory, response, fallback).await
}

pub async fn assign_role<D>(directory: &D, form: &AssignRoleDto) -> CycleOutcome<StaffAccount>
where
    D: AccountDirectory + ?Sized,
{
    let dto = match form.validated() {
        Ok(dto) => dto,
        Err(message) => return CycleOutcome::rejected(message),
    };
    let fallback = format!("Role assigned: {} is now {}", dto.username, dto.role);
    let response = directory.assign_role(dto).await;
    finish(directory, response, fallback).await
}

/// Deactivates an account named in the deactivation form. An account that
/// is already inactive is reported and left untouched.
pub async fn deactivate_account<D>(
    directory: &D,
    form: &DeactivateRequest,
) -> CycleOutcome<StaffAccount>
where
    D: AccountDirectory + ?Sized,
{
    let req = match form.validated() {
        Ok(req) => req,
        Err(message) => return CycleOutcome::rejected(message),
    };

    let accounts = match load_accounts(directory).await {
        Ok(accounts) => accounts,
        Err(err) => return CycleOutcome::rejected(err),
    };
    let Some(account) = accounts.iter().find(|a| a.matches(&req.username)) else {
        return CycleOutcome::rejected(user_not_found());
    };
    if !account.is_active() {
        let message = format!("Account is already inactive: {}", account.username);
        return CycleOutcome::accepted(message, Some(accounts), None);
    }

    let username = account.username.clone();
    log::info!("deactivating account {}", username);
    let response = directory
        .set_status(SetAccountStatusDto::new(username.clone(), false))
        .await;
    finish(directory, response, status_changed(&username, false)).await
}

/// Flips the active flag of the account addressed by a row's toggle button.
pub async fn toggle_account<D>(directory: &D, username: &str) -> CycleOutcome<StaffAccount>
where
    D: AccountDirectory + ?Sized,
{
    let accounts = match load_accounts(directory).await {
        Ok(accounts) => accounts,
        Err(err) => return CycleOutcome::rejected(err),
    };
    let Some(account) = accounts.iter().find(|a| a.matches(username)) else {
        return CycleOutcome::rejected(user_not_found());
    };

    let active = !account.is_active();
    let username = account.username.clone();
    log::info!("setting account {} active={}", username, active);
    let response = directory
        .set_status(SetAccountStatusDto::new(username.clone(), active))
        .await;
    finish(directory, response, status_changed(&username, active)).await
}
