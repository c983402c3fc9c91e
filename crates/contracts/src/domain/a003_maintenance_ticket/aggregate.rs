use crate::shared::crud::{
    Column, CrudEntity, FieldDef, RecordId, StatusTag, StatusVocabulary, TableEntity,
};
use crate::shared::serde_utils::null_to_default;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

pub const STATUS_OPTIONS: &[&str] = &["Open", "In Progress", "Repaired", "Replacement Needed"];

const STATUS_TAGS: &[StatusTag] = &[
    StatusTag::new("Open", "open"),
    StatusTag::new("In Progress", "in-progress"),
    StatusTag::new("Repaired", "repaired"),
    StatusTag::new("Replacement Needed", "replacement"),
];

static VOCABULARY: StatusVocabulary = StatusVocabulary::new(STATUS_TAGS);

static COLUMNS: &[Column] = &[
    Column::text("ticket", "Ticket"),
    Column::text("location", "Location"),
    Column::text("issue", "Issue"),
    Column::text("assignedTo", "Assigned To"),
    Column::status("status", "Status"),
];

static FIELDS: &[FieldDef] = &[
    FieldDef::text("ticket", "Ticket ID"),
    FieldDef::text("location", "Room / Area"),
    FieldDef::text("issue", "Issue"),
    FieldDef::text("assignedTo", "Assigned To"),
    FieldDef::select("status", "Status", STATUS_OPTIONS),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MaintenanceTicket {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(deserialize_with = "null_to_default")]
    pub ticket: String,
    #[serde(deserialize_with = "null_to_default")]
    pub location: String,
    #[serde(deserialize_with = "null_to_default")]
    pub issue: String,
    #[serde(deserialize_with = "null_to_default")]
    pub assigned_to: String,
    #[serde(deserialize_with = "null_to_default")]
    pub status: String,
}

impl Default for MaintenanceTicket {
    fn default() -> Self {
        Self {
            id: None,
            ticket: String::new(),
            location: String::new(),
            issue: String::new(),
            assigned_to: String::new(),
            status: STATUS_OPTIONS[0].to_string(),
        }
    }
}

impl MaintenanceTicket {
    fn sample(ticket: &str, location: &str, issue: &str, assigned_to: &str, status: &str) -> Self {
        Self {
            id: None,
            ticket: ticket.to_string(),
            location: location.to_string(),
            issue: issue.to_string(),
            assigned_to: assigned_to.to_string(),
            status: status.to_string(),
        }
    }
}

impl TableEntity for MaintenanceTicket {
    const LIST_TITLE: &'static str = "Maintenance Tickets";
    const TOTAL_LABEL: &'static str = "Total Tickets";
    const EMPTY_MESSAGE: &'static str = "No maintenance tickets. Log an issue to get started.";

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
        &self.ticket
    }

    fn status(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.status)
    }

    fn cell(&self, column: &str) -> String {
        match column {
            "ticket" => self.ticket.clone(),
            "location" => self.location.clone(),
            "issue" => self.issue.clone(),
            "assignedTo" => self.assigned_to.clone(),
            _ => String::new(),
        }
    }
}

impl CrudEntity for MaintenanceTicket {
    const ENDPOINT: &'static str = "/maintenance";
    const STORAGE_KEY: &'static str = "flameTreeMaintenanceTickets";
    const NOUN: &'static str = "ticket";
    const PLURAL: &'static str = "tickets";
    const IDENTIFIER_LABEL: &'static str = "ticket ID";

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
        &self.ticket
    }

    fn form_value(&self, field: &str) -> String {
        match field {
            "status" => self.status.clone(),
            other => self.cell(other),
        }
    }

    fn apply_form_value(&mut self, field: &str, value: &str) {
        match field {
            "ticket" => self.ticket = value.to_string(),
            "location" => self.location = value.to_string(),
            "issue" => self.issue = value.to_string(),
            "assignedTo" => self.assigned_to = value.to_string(),
            "status" => self.status = value.to_string(),
            _ => {}
        }
    }

    fn normalize(&mut self) {
        self.ticket = self.ticket.trim().to_string();
        self.location = self.location.trim().to_string();
        self.issue = self.issue.trim().to_string();
        self.assigned_to = self.assigned_to.trim().to_string();
    }

    fn defaults() -> Vec<Self> {
        vec![
            Self::sample("MT-2026-011", "Room 202", "Leaking faucet", "R. Silva", "In Progress"),
            Self::sample(
                "MT-2026-012",
                "Room 118",
                "Damaged reading lamp",
                "M. Khan",
                "Replacement Needed",
            ),
            Self::sample("MT-2026-013", "Lobby", "AC not cooling", "T. Perera", "Open"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::TableBody;

    #[test]
    fn test_every_status_has_its_own_class() {
        let classes: Vec<_> = STATUS_OPTIONS
            .iter()
            .map(|s| VOCABULARY.classify(s).class)
            .collect();
        assert_eq!(classes, vec!["open", "in-progress", "repaired", "replacement"]);
    }

    #[test]
    fn test_defaults_render_in_order() {
        let mut tickets = MaintenanceTicket::defaults();
        for (i, t) in tickets.iter_mut().enumerate() {
            t.id = Some(RecordId(i as i64 + 1));
        }
        let html = TableBody::render(&tickets).to_html();
        let first = html.find("MT-2026-011").unwrap();
        let last = html.find("MT-2026-013").unwrap();
        assert!(first < last);
        assert!(html.contains(r#"<span class="tag replacement">Replacement Needed</span>"#));
    }

    #[test]
    fn test_reads_assigned_to_in_camel_case() {
        let t: MaintenanceTicket = serde_json::from_str(
            r#"{"id":4,"ticket":"MT-9","location":"Spa","issue":"Tile","assignedTo":"R. Silva","status":"Open"}"#,
        )
        .unwrap();
        assert_eq!(t.assigned_to, "R. Silva");
        assert_eq!(t.id, Some(RecordId(4)));
    }
}
