use crate::shared::crud::{
    Column, CrudEntity, FieldDef, RecordId, StatusTag, StatusVocabulary, TableEntity,
};
use crate::shared::serde_utils::null_to_default;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

pub const STATUS_OPTIONS: &[&str] = &["Assigned", "In Progress", "Completed"];

pub const REQUEST_TYPES: &[&str] = &[
    "Room Cleaning",
    "Extra Towels",
    "Extra Pillows",
    "Room Service",
    "Wake-up Call",
    "Late Checkout",
    "Transport",
    "Other",
];

const STATUS_TAGS: &[StatusTag] = &[
    StatusTag::new("Assigned", "assigned"),
    StatusTag::new("In Progress", "in-progress"),
    StatusTag::new("Completed", "completed"),
];

static VOCABULARY: StatusVocabulary = StatusVocabulary::new(STATUS_TAGS);

static COLUMNS: &[Column] = &[
    Column::text("requestId", "Request ID"),
    Column::text("guestRoom", "Room"),
    Column::text("request", "Request"),
    Column::text("assignedStaff", "Assigned Staff"),
    Column::status("status", "Status"),
];

static FIELDS: &[FieldDef] = &[
    FieldDef::text("requestId", "Request ID"),
    FieldDef::text("guestRoom", "Room No"),
    FieldDef::select("request", "Request Type", REQUEST_TYPES),
    FieldDef::text("assignedStaff", "Staff Name"),
    FieldDef::select("status", "Status", STATUS_OPTIONS),
];

/// Guest service request (`/guestservice`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuestRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(deserialize_with = "null_to_default")]
    pub request_id: String,
    #[serde(deserialize_with = "null_to_default")]
    pub guest_room: String,
    #[serde(deserialize_with = "null_to_default")]
    pub request: String,
    #[serde(deserialize_with = "null_to_default")]
    pub assigned_staff: String,
    #[serde(deserialize_with = "null_to_default")]
    pub status: String,
}

impl Default for GuestRequest {
    fn default() -> Self {
        Self {
            id: None,
            request_id: String::new(),
            guest_room: String::new(),
            request: REQUEST_TYPES[0].to_string(),
            assigned_staff: String::new(),
            status: STATUS_OPTIONS[0].to_string(),
        }
    }
}

impl GuestRequest {
    fn sample(request_id: &str, room: &str, request: &str, staff: &str, status: &str) -> Self {
        Self {
            id: None,
            request_id: request_id.to_string(),
            guest_room: room.to_string(),
            request: request.to_string(),
            assigned_staff: staff.to_string(),
            status: status.to_string(),
        }
    }
}

impl TableEntity for GuestRequest {
    const LIST_TITLE: &'static str = "Guest Service Requests";
    const TOTAL_LABEL: &'static str = "Total Requests";
    const EMPTY_MESSAGE: &'static str =
        "No service requests recorded. Click \"Add Request\" to create one.";

    fn columns() -> &'static [Column] {
        COLUMNS
    }

    fn vocabulary() -> &'static StatusVocabulary {
        &VOCABULARY
    }

    fn row_key(&self) -> String {
        self.id.map(|id| id.to_string()).unwrap_or_default()
    }

    fn label(&self) -> &str {
        &self.request_id
    }

    fn status(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.status)
    }

    fn cell(&self, column: &str) -> String {
        match column {
            "requestId" => self.request_id.clone(),
            "guestRoom" => self.guest_room.clone(),
            "request" => self.request.clone(),
            "assignedStaff" => self.assigned_staff.clone(),
            _ => String::new(),
        }
    }
}

impl CrudEntity for GuestRequest {
    const ENDPOINT: &'static str = "/guestservice";
    const STORAGE_KEY: &'static str = "flameTreeGuestRequests";
    const NOUN: &'static str = "request";
    const PLURAL: &'static str = "requests";
    const IDENTIFIER_LABEL: &'static str = "Request ID";

    fn fields() -> &'static [FieldDef] {
        FIELDS
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: Option<RecordId>) {
        self.id = id;
    }

    fn identifier(&self) -> &str {
        &self.request_id
    }

    fn form_value(&self, field: &str) -> String {
        match field {
            "status" => self.status.clone(),
            other => self.cell(other),
        }
    }

    fn apply_form_value(&mut self, field: &str, value: &str) {
        match field {
            "requestId" => self.request_id = value.to_string(),
            "guestRoom" => self.guest_room = value.to_string(),
            "request" => self.request = value.to_string(),
            "assignedStaff" => self.assigned_staff = value.to_string(),
            "status" => self.status = value.to_string(),
            _ => {}
        }
    }

    fn normalize(&mut self) {
        self.request_id = self.request_id.trim().to_string();
        self.guest_room = self.guest_room.trim().to_string();
        self.request = self.request.trim().to_string();
        self.assigned_staff = self.assigned_staff.trim().to_string();
    }

    fn defaults() -> Vec<Self> {
        vec![
            Self::sample("GS-1001", "204", "Extra Towels", "N. Silva", "Assigned"),
            Self::sample("GS-1002", "118", "Room Service", "A. Perera", "In Progress"),
            Self::sample("GS-1003", "305", "Wake-up Call", "K. Fernando", "Completed"),
        ]
    }
}
