use crate::shared::crud::{
    Column, CrudEntity, FieldDef, RecordId, StatusTag, StatusVocabulary, TableEntity,
};
use crate::shared::serde_utils::null_to_default;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

pub const TASK_STATUSES: &[&str] = &["Assigned", "In Progress", "Completed"];

pub const TASK_TYPES: &[&str] = &[
    "Room Cleaning",
    "Turndown Service",
    "Linen Change",
    "Deep Cleaning",
    "Restock Amenities",
    "Other",
];

// "In Progress" rooms are shown with the cleaning tag.
const STATUS_TAGS: &[StatusTag] = &[
    StatusTag::new("Assigned", "assigned"),
    StatusTag::new("In Progress", "clean"),
    StatusTag::new("Completed", "completed"),
];

static VOCABULARY: StatusVocabulary = StatusVocabulary::new(STATUS_TAGS);

static COLUMNS: &[Column] = &[
    Column::text("requestId", "Task ID"),
    Column::text("room", "Room"),
    Column::text("requestType", "Task"),
    Column::text("assignedStaff", "Assigned Staff"),
    Column::status("taskStatus", "Status"),
];

static FIELDS: &[FieldDef] = &[
    FieldDef::text("requestId", "Task ID"),
    FieldDef::text("room", "Room No"),
    FieldDef::select("requestType", "Task Type", TASK_TYPES),
    FieldDef::text("assignedStaff", "Staff Name"),
    FieldDef::select("taskStatus", "Status", TASK_STATUSES),
];

/// Housekeeping task (`/housekeeping`). Its status lives in `taskStatus`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HousekeepingTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(deserialize_with = "null_to_default")]
    pub request_id: String,
    #[serde(deserialize_with = "null_to_default")]
    pub room: String,
    #[serde(deserialize_with = "null_to_default")]
    pub request_type: String,
    #[serde(deserialize_with = "null_to_default")]
    pub assigned_staff: String,
    #[serde(deserialize_with = "null_to_default")]
    pub task_status: String,
}

impl Default for HousekeepingTask {
    fn default() -> Self {
        Self {
            id: None,
            request_id: String::new(),
            room: String::new(),
            request_type: TASK_TYPES[0].to_string(),
            assigned_staff: String::new(),
            task_status: TASK_STATUSES[0].to_string(),
        }
    }
}

impl HousekeepingTask {
    fn sample(request_id: &str, room: &str, request_type: &str, staff: &str, status: &str) -> Self {
        Self {
            id: None,
            request_id: request_id.to_string(),
            room: room.to_string(),
            request_type: request_type.to_string(),
            assigned_staff: staff.to_string(),
            task_status: status.to_string(),
        }
    }
}

impl TableEntity for HousekeepingTask {
    const LIST_TITLE: &'static str = "Housekeeping Tasks";
    const TOTAL_LABEL: &'static str = "Total Tasks";
    const EMPTY_MESSAGE: &'static str =
        "No housekeeping tasks recorded. Click \"Add Task\" to create one.";

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
        Cow::Borrowed(&self.task_status)
    }

    fn cell(&self, column: &str) -> String {
        match column {
            "requestId" => self.request_id.clone(),
            "room" => self.room.clone(),
            "requestType" => self.request_type.clone(),
            "assignedStaff" => self.assigned_staff.clone(),
            _ => String::new(),
        }
    }
}

impl CrudEntity for HousekeepingTask {
    const ENDPOINT: &'static str = "/housekeeping";
    const STORAGE_KEY: &'static str = "flameTreeHousekeepingTasks";
    const NOUN: &'static str = "task";
    const PLURAL: &'static str = "housekeeping tasks";
    const IDENTIFIER_LABEL: &'static str = "task ID";

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
            "taskStatus" => self.task_status.clone(),
            other => self.cell(other),
        }
    }

    fn apply_form_value(&mut self, field: &str, value: &str) {
        match field {
            "requestId" => self.request_id = value.to_string(),
            "room" => self.room = value.to_string(),
            "requestType" => self.request_type = value.to_string(),
            "assignedStaff" => self.assigned_staff = value.to_string(),
            "taskStatus" => self.task_status = value.to_string(),
            _ => {}
        }
    }

    fn normalize(&mut self) {
        self.request_id = self.request_id.trim().to_string();
        self.room = self.room.trim().to_string();
        self.assigned_staff = self.assigned_staff.trim().to_string();
    }

    fn defaults() -> Vec<Self> {
        vec![
            Self::sample("HK-2001", "101", "Room Cleaning", "S. Nimal", "Assigned"),
            Self::sample("HK-2002", "214", "Linen Change", "D. Kumari", "In Progress"),
            Self::sample("HK-2003", "305", "Turndown Service", "S. Nimal", "Completed"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::{FormController, Mutation};

    #[test]
    fn test_status_comes_from_task_status() {
        let task = HousekeepingTask {
            task_status: "In Progress".to_string(),
            ..HousekeepingTask::default()
        };
        assert_eq!(task.status(), "In Progress");
        assert_eq!(VOCABULARY.classify(&task.status()).class, "clean");
    }

    #[test]
    fn test_metrics_count_task_status() {
        let metrics = HousekeepingTask::metrics(&HousekeepingTask::defaults());
        assert_eq!(metrics.total, 3);
        assert_eq!(metrics.count("Assigned"), 1);
        assert_eq!(metrics.count("In Progress"), 1);
        assert_eq!(metrics.count("Completed"), 1);
    }

    #[test]
    fn test_form_edits_task_status() {
        let mut task = HousekeepingTask::defaults().remove(0);
        task.id = Some(RecordId(8));
        let mut form = FormController::<HousekeepingTask>::new();
        form.open_update(&task).unwrap();
        form.set_field("taskStatus", "Completed");

        match form.prepare() {
            Some(Mutation::Update(id, updated)) => {
                assert_eq!(id, RecordId(8));
                assert_eq!(updated.task_status, "Completed");
                assert_eq!(updated.request_id, "HK-2001");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_value(HousekeepingTask::defaults().remove(1)).unwrap();
        assert_eq!(json["requestType"], "Linen Change");
        assert_eq!(json["taskStatus"], "In Progress");
    }
}
