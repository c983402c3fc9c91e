use crate::shared::crud::{
    ActionKind, Column, RecordId, RowAction, StatusTag, StatusVocabulary, TableEntity,
};
use crate::shared::serde_utils::null_to_default;
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;

pub const ACTIVE: &str = "Active";
pub const INACTIVE: &str = "Inactive";

pub const NO_ROLE: &str = "(No role assigned)";

pub const STAFF_ROLES: &[&str] = &[
    "Manager",
    "Front Desk",
    "Housekeeping Staff",
    "Inventory / Store Manager",
    "Maintenance Staff",
    "Supplier Coordinator",
];

const STATUS_TAGS: &[StatusTag] = &[
    StatusTag::new(ACTIVE, "active"),
    StatusTag::new(INACTIVE, "inactive"),
];

static VOCABULARY: StatusVocabulary = StatusVocabulary::new(STATUS_TAGS);

static COLUMNS: &[Column] = &[
    Column::text("username", "Username"),
    Column::text("staffEmail", "Email"),
    Column::text("role", "Role"),
    Column::status("status", "Status"),
];

/// Accepts the server's boolean as well as the `"Active"`/`"Inactive"`
/// strings written by older local data.
fn active_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(b)) => b,
        Some(Flag::Text(s)) => s.eq_ignore_ascii_case(ACTIVE) || s.eq_ignore_ascii_case("true"),
        None => false,
    })
}

fn active_by_default() -> bool {
    true
}

/// Staff login account as listed by `GET /auth/users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffAccount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub username: String,
    #[serde(default, alias = "email", deserialize_with = "null_to_default")]
    pub staff_email: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub role: String,
    #[serde(default = "active_by_default", deserialize_with = "active_flag")]
    pub status: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,
}

impl StaffAccount {
    pub fn new(username: &str, staff_email: &str, role: &str) -> Self {
        Self {
            id: None,
            username: username.to_string(),
            staff_email: staff_email.to_string(),
            role: role.to_string(),
            status: true,
            created_date: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status
    }

    pub fn status_label(&self) -> &'static str {
        if self.status {
            ACTIVE
        } else {
            INACTIVE
        }
    }

    pub fn matches(&self, username: &str) -> bool {
        self.username.eq_ignore_ascii_case(username.trim())
    }

    /// Seed accounts of an empty local directory.
    pub fn defaults() -> Vec<Self> {
        [
            ("silva.nimal", "Housekeeping Staff", "2026-02-15"),
            ("perera.asha", "Inventory / Store Manager", "2026-02-10"),
            ("fernando.rex", "Maintenance Staff", "2026-02-08"),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (username, role, created))| Self {
            id: Some(RecordId(i as i64 + 1)),
            staff_email: format!("{}@flametreehotel.local", username),
            created_date: Some(created.to_string()),
            ..Self::new(username, "", role)
        })
        .collect()
    }
}

/// Usernames offered as suggestions by the role and deactivate forms, in
/// table order.
pub fn username_options(accounts: &[StaffAccount]) -> Vec<String> {
    accounts
        .iter()
        .map(|a| a.username.trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

impl TableEntity for StaffAccount {
    const LIST_TITLE: &'static str = "Staff Accounts";
    const TOTAL_LABEL: &'static str = "Total Accounts";
    const EMPTY_MESSAGE: &'static str = "No accounts created yet.";

    fn columns() -> &'static [Column] {
        COLUMNS
    }

    fn vocabulary() -> &'static StatusVocabulary {
        &VOCABULARY
    }

    fn row_key(&self) -> String {
        self.username.clone()
    }

    fn label(&self) -> &str {
        &self.username
    }

    fn status(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.status_label())
    }

    fn cell(&self, column: &str) -> String {
        match column {
            "username" => self.username.clone(),
            "staffEmail" => self.staff_email.clone(),
            "role" if self.role.trim().is_empty() => NO_ROLE.to_string(),
            "role" => self.role.clone(),
            _ => String::new(),
        }
    }

    fn actions(&self) -> Vec<RowAction> {
        let caption = if self.status { "Deactivate" } else { "Activate" };
        vec![RowAction::new(ActionKind::Toggle, self.username.clone(), caption)
            .with_label(self.username.clone())]
    }
}

// ============================================================================
// Request bodies
// ============================================================================

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterAccountDto {
    pub username: String,
    pub staff_email: String,
    pub password: String,
    pub role: String,
}

impl RegisterAccountDto {
    /// Trimmed copy, or the inline message when any required field is blank.
    pub fn validated(&self) -> Result<Self, String> {
        let dto = Self {
            username: self.username.trim().to_string(),
            staff_email: self.staff_email.trim().to_string(),
            password: self.password.trim().to_string(),
            role: self.role.trim().to_string(),
        };
        if dto.username.is_empty() || dto.staff_email.is_empty() || dto.password.is_empty() {
            return Err("Please fill in all fields".to_string());
        }
        Ok(dto)
    }
}

/// Body of `PUT /auth/assign-role`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignRoleDto {
    pub username: String,
    pub role: String,
}

impl AssignRoleDto {
    pub fn validated(&self) -> Result<Self, String> {
        let dto = Self {
            username: self.username.trim().to_string(),
            role: self.role.trim().to_string(),
        };
        if dto.username.is_empty() || dto.role.is_empty() {
            return Err("Please select a username and role".to_string());
        }
        Ok(dto)
    }
}

/// Body of `PUT /auth/status`. The server expects `active` as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetAccountStatusDto {
    pub username: String,
    pub active: String,
}

impl SetAccountStatusDto {
    pub fn new(username: impl Into<String>, active: bool) -> Self {
        Self {
            username: username.into(),
            active: active.to_string(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.trim().eq_ignore_ascii_case("true")
    }
}

/// Deactivation form. The reason is required but is not sent anywhere.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeactivateRequest {
    pub username: String,
    pub reason: String,
}

impl DeactivateRequest {
    pub fn validated(&self) -> Result<Self, String> {
        let req = Self {
            username: self.username.trim().to_string(),
            reason: self.reason.trim().to_string(),
        };
        if req.username.is_empty() || req.reason.is_empty() {
            return Err("Please enter a username and reason".to_string());
        }
        Ok(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::TableBody;

    #[test]
    fn test_status_accepts_bool_and_legacy_strings() {
        let accounts: Vec<StaffAccount> = serde_json::from_str(
            r#"[
                {"username":"a","staffEmail":"a@x","role":"Manager","status":true},
                {"username":"b","email":"b@x","role":"","status":"Inactive"},
                {"id":3,"username":"c","staffEmail":"c@x","role":null,"status":"Active","createdDate":"2026-02-08"}
            ]"#,
        )
        .unwrap();

        assert!(accounts[0].is_active());
        assert!(!accounts[1].is_active());
        assert_eq!(accounts[1].staff_email, "b@x");
        assert!(accounts[2].is_active());
        assert_eq!(accounts[2].role, "");
    }

    #[test]
    fn test_status_is_written_as_bool() {
        let json = serde_json::to_value(StaffAccount::new("x", "x@y", "")).unwrap();
        assert_eq!(json["status"], true);
        assert_eq!(json["staffEmail"], "x@y");
    }

    #[test]
    fn test_row_shows_missing_role_and_toggle_caption() {
        let mut account = StaffAccount::new("kumari.d", "kumari@flametreehotel.local", "");
        account.status = false;
        let html = TableBody::render(&[account]).to_html();

        assert!(html.contains(NO_ROLE));
        assert!(html.contains(r#"<span class="tag inactive">Inactive</span>"#));
        assert!(html.contains(r#"data-action="toggle" data-id="kumari.d""#));
        assert!(html.contains(">Activate</button>"));
    }

    #[test]
    fn test_username_options_skip_blank_names() {
        let mut accounts = StaffAccount::defaults();
        accounts.push(StaffAccount::new("  ", "ghost@x", ""));
        assert_eq!(
            username_options(&accounts),
            vec!["silva.nimal", "perera.asha", "fernando.rex"]
        );
        assert!(username_options(&[]).is_empty());
    }

    #[test]
    fn test_defaults() {
        let accounts = StaffAccount::defaults();
        assert_eq!(accounts.len(), 3);
        assert_eq!(accounts[1].staff_email, "perera.asha@flametreehotel.local");
        assert!(accounts.iter().all(StaffAccount::is_active));
    }

    #[test]
    fn test_form_validation() {
        let blank = RegisterAccountDto {
            username: "new.user".to_string(),
            staff_email: " ".to_string(),
            password: "tmp".to_string(),
            role: String::new(),
        };
        assert_eq!(blank.validated().unwrap_err(), "Please fill in all fields");

        let role = AssignRoleDto {
            username: "silva.nimal".to_string(),
            role: String::new(),
        };
        assert_eq!(role.validated().unwrap_err(), "Please select a username and role");

        let deactivate = DeactivateRequest {
            username: " silva.nimal ".to_string(),
            reason: "Left".to_string(),
        };
        assert_eq!(deactivate.validated().unwrap().username, "silva.nimal");
    }

    #[test]
    fn test_status_body_carries_string_flag() {
        let body = SetAccountStatusDto::new("silva.nimal", false);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["active"], "false");
        assert!(!body.is_active());
    }
}
