//! Staff account endpoints under `/auth`.

use crate::shared::api_utils::api_base;
use crate::shared::crud::remote::{get_json, post_json, put_json};
use crate::shared::crud::BrowserSlot;
use async_trait::async_trait;
use contracts::shared::config::{AppConfig, StoreKind};
use contracts::shared::crud::{ActionResponse, StoreError};
use contracts::system::accounts::{AccountDirectory, LocalAccountDirectory};
use contracts::system::users::{AssignRoleDto, RegisterAccountDto, SetAccountStatusDto, StaffAccount};
use std::sync::Arc;

pub struct RemoteAccountDirectory {
    base: String,
}

impl RemoteAccountDirectory {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            base: api_base.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/auth/{}", self.base, path)
    }
}

#[async_trait(?Send)]
impl AccountDirectory for RemoteAccountDirectory {
    async fn list(&self) -> Result<Vec<StaffAccount>, StoreError> {
        get_json(&self.url("users")).await
    }

    async fn register(&self, dto: RegisterAccountDto) -> Result<ActionResponse, StoreError> {
        post_json(&self.url("register"), &dto).await
    }

    async fn assign_role(&self, dto: AssignRoleDto) -> Result<ActionResponse, StoreError> {
        put_json(&self.url("assign-role"), &dto).await
    }

    async fn set_status(&self, dto: SetAccountStatusDto) -> Result<ActionResponse, StoreError> {
        put_json(&self.url("status"), &dto).await
    }
}

/// Account directory as selected by configuration.
pub fn account_directory(config: &AppConfig) -> Arc<dyn AccountDirectory> {
    match config.stores.accounts {
        StoreKind::Local => Arc::new(LocalAccountDirectory::new(BrowserSlot)),
        StoreKind::Remote => Arc::new(RemoteAccountDirectory::new(api_base(config))),
    }
}
