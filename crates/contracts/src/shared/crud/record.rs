use super::metrics::Metrics;
use super::rows::{ActionKind, RowAction};
use super::status::StatusVocabulary;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

// ============================================================================
// Identity
// ============================================================================

/// Stable integer identity of a record (server `id`, or the id the local
/// store assigns on insert).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl RecordId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Parses an id taken from a `data-id` attribute. Zero and negatives are
    /// never assigned, so they are rejected.
    pub fn parse(s: &str) -> Option<Self> {
        s.trim().parse::<i64>().ok().filter(|v| *v > 0).map(Self)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Column and field definitions
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    /// Rendered as a tag using the entity's status vocabulary.
    Status,
}

/// Display column of a list table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub title: &'static str,
    pub kind: ColumnKind,
}

impl Column {
    pub const fn text(key: &'static str, title: &'static str) -> Self {
        Self {
            key,
            title,
            kind: ColumnKind::Text,
        }
    }

    pub const fn status(key: &'static str, title: &'static str) -> Self {
        Self {
            key,
            title,
            kind: ColumnKind::Status,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Physical count: coerced to a non-negative integer.
    Count,
    Select(&'static [&'static str]),
}

/// One input of the add/update dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub on_add: bool,
    pub on_update: bool,
}

impl FieldDef {
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
            on_add: true,
            on_update: true,
        }
    }

    pub const fn count(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Count,
            on_add: true,
            on_update: true,
        }
    }

    pub const fn select(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Select(options),
            on_add: true,
            on_update: true,
        }
    }

    pub const fn add_only(mut self) -> Self {
        self.on_update = false;
        self
    }

    pub const fn update_only(mut self) -> Self {
        self.on_add = false;
        self
    }
}

/// Coerces a form input into a physical count: blank or unparsable input is
/// zero, negatives are floored at zero.
pub fn parse_count(value: &str) -> i64 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return 0;
    }
    trimmed
        .parse::<i64>()
        .or_else(|_| trimmed.parse::<f64>().map(|v| v.trunc() as i64))
        .unwrap_or(0)
        .max(0)
}

// ============================================================================
// Entity configuration
// ============================================================================

/// Everything the projector and the list renderer need to know about an
/// entity.
pub trait TableEntity: Clone + PartialEq + Send + Sync + 'static {
    /// Heading of the list page.
    const LIST_TITLE: &'static str;
    /// Label of the metric that counts every record.
    const TOTAL_LABEL: &'static str;
    /// Call-to-action text of the placeholder row for an empty collection.
    const EMPTY_MESSAGE: &'static str;

    fn columns() -> &'static [Column];

    fn vocabulary() -> &'static StatusVocabulary;

    /// Identity carried by the row's action buttons.
    fn row_key(&self) -> String;

    /// Human-readable label used in confirmation prompts.
    fn label(&self) -> &str;

    fn status(&self) -> Cow<'_, str>;

    /// Display value of a text column.
    fn cell(&self, column: &str) -> String;

    fn actions(&self) -> Vec<RowAction> {
        let key = self.row_key();
        vec![
            RowAction::new(ActionKind::Edit, key.clone(), "Edit"),
            RowAction::new(ActionKind::Delete, key, "Delete").with_label(self.label()),
        ]
    }

    fn metrics(records: &[Self]) -> Metrics {
        Metrics::by_status(records)
    }
}

/// A record that is listed, added, updated and deleted through a record
/// store.
pub trait CrudEntity: TableEntity + Default + Serialize + DeserializeOwned {
    /// REST path prefix, e.g. `/guestservice`.
    const ENDPOINT: &'static str;
    /// Key of the persisted slot used by the local store.
    const STORAGE_KEY: &'static str;
    /// Singular noun for messages ("request", "ticket").
    const NOUN: &'static str;
    /// Plural noun for load errors.
    const PLURAL: &'static str;
    /// Name of the human-entered identifier as shown to the user.
    const IDENTIFIER_LABEL: &'static str;

    fn fields() -> &'static [FieldDef];

    fn id(&self) -> Option<RecordId>;

    fn set_id(&mut self, id: Option<RecordId>);

    /// Human-entered identifier (request ID, ticket ID, PO ID, item name).
    fn identifier(&self) -> &str;

    fn form_value(&self, field: &str) -> String;

    fn apply_form_value(&mut self, field: &str, value: &str);

    /// Trims text and floors counts; applied before every store write.
    fn normalize(&mut self) {}

    /// Dataset used when the local slot is empty or unreadable.
    fn defaults() -> Vec<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count_floors_at_zero() {
        assert_eq!(parse_count("12"), 12);
        assert_eq!(parse_count(" 7 "), 7);
        assert_eq!(parse_count("-4"), 0);
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("abc"), 0);
        assert_eq!(parse_count("3.9"), 3);
    }

    #[test]
    fn test_record_id_parse() {
        assert_eq!(RecordId::parse("42"), Some(RecordId(42)));
        assert_eq!(RecordId::parse("0"), None);
        assert_eq!(RecordId::parse("x"), None);
        assert_eq!(RecordId(5).to_string(), "5");
    }

    #[test]
    fn test_record_id_is_transparent_in_json() {
        let json = serde_json::to_string(&RecordId(9)).unwrap();
        assert_eq!(json, "9");
        let back: RecordId = serde_json::from_str("9").unwrap();
        assert_eq!(back, RecordId(9));
    }
}
