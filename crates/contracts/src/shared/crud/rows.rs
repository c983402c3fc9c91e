//! List renderer: turns a record collection into table rows.
//!
//! Field values are untrusted (guest names, free-text requests), so every
//! text node and attribute value passes through [`escape_html`] before it is
//! placed into markup.

use super::record::{ColumnKind, TableEntity};

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Edit,
    Delete,
    /// Activate/deactivate, used by the staff account table.
    Toggle,
}

impl ActionKind {
    pub fn as_attr(&self) -> &'static str {
        match self {
            ActionKind::Edit => "edit",
            ActionKind::Delete => "delete",
            ActionKind::Toggle => "toggle",
        }
    }

    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "edit" => Some(ActionKind::Edit),
            "delete" => Some(ActionKind::Delete),
            "toggle" => Some(ActionKind::Toggle),
            _ => None,
        }
    }

    fn button_class(&self) -> &'static str {
        match self {
            ActionKind::Edit => "small-btn edit-btn",
            ActionKind::Delete => "small-btn delete-btn",
            ActionKind::Toggle => "small-btn toggle-btn",
        }
    }
}

/// Button in the trailing actions cell of a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowAction {
    pub kind: ActionKind,
    pub key: String,
    pub caption: String,
    /// Label shown in the delete confirmation prompt.
    pub label: Option<String>,
}

impl RowAction {
    pub fn new(kind: ActionKind, key: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            kind,
            key: key.into(),
            caption: caption.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn to_html(&self) -> String {
        let label_attr = self
            .label
            .as_deref()
            .map(|l| format!(r#" data-label="{}""#, escape_html(l)))
            .unwrap_or_default();
        format!(
            r#"<button type="button" class="{}" data-action="{}" data-id="{}"{}>{}</button>"#,
            self.kind.button_class(),
            self.kind.as_attr(),
            escape_html(&self.key),
            label_attr,
            escape_html(&self.caption),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Tag { label: String, class: &'static str },
}

impl Cell {
    pub fn to_html(&self) -> String {
        match self {
            Cell::Text(text) => format!("<td>{}</td>", escape_html(text)),
            Cell::Tag { label, class } => format!(
                r#"<td><span class="tag {}">{}</span></td>"#,
                class,
                escape_html(label)
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub key: String,
    pub cells: Vec<Cell>,
    pub actions: Vec<RowAction>,
}

impl RowView {
    pub fn from_record<R: TableEntity>(record: &R) -> Self {
        let cells = R::columns()
            .iter()
            .map(|column| match column.kind {
                ColumnKind::Text => Cell::Text(record.cell(column.key)),
                ColumnKind::Status => {
                    let status = record.status();
                    let tag = R::vocabulary().classify(&status);
                    Cell::Tag {
                        label: status.into_owned(),
                        class: tag.class,
                    }
                }
            })
            .collect();

        Self {
            key: record.row_key(),
            cells,
            actions: record.actions(),
        }
    }

    pub fn to_html(&self) -> String {
        let mut html = String::from("<tr>");
        for cell in &self.cells {
            html.push_str(&cell.to_html());
        }
        html.push_str(r#"<td><div class="row-actions">"#);
        for action in &self.actions {
            html.push_str(&action.to_html());
        }
        html.push_str("</div></td></tr>");
        html
    }
}

/// Rendered body of a list table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    /// Single call-to-action row spanning every column.
    Placeholder { message: &'static str, colspan: usize },
    Rows(Vec<RowView>),
}

impl TableBody {
    /// Renders rows in storage order; no sorting is applied.
    pub fn render<R: TableEntity>(records: &[R]) -> Self {
        if records.is_empty() {
            return TableBody::Placeholder {
                message: R::EMPTY_MESSAGE,
                colspan: R::columns().len() + 1,
            };
        }
        TableBody::Rows(records.iter().map(RowView::from_record).collect())
    }

    pub fn row_count(&self) -> usize {
        match self {
            TableBody::Placeholder { .. } => 1,
            TableBody::Rows(rows) => rows.len(),
        }
    }

    pub fn to_html(&self) -> String {
        match self {
            TableBody::Placeholder { message, colspan } => format!(
                r#"<tr><td class="table__placeholder" colspan="{}">{}</td></tr>"#,
                colspan,
                escape_html(message)
            ),
            TableBody::Rows(rows) => rows.iter().map(RowView::to_html).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_guest_request::aggregate::GuestRequest;
    use crate::domain::a002_inventory_item::aggregate::InventoryItem;
    use crate::shared::crud::RecordId;

    fn request(id: i64, request_id: &str, text: &str) -> GuestRequest {
        GuestRequest {
            id: Some(RecordId(id)),
            request_id: request_id.to_string(),
            guest_room: "204".to_string(),
            request: text.to_string(),
            assigned_staff: "N. Silva".to_string(),
            status: "In Progress".to_string(),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x")</script> & 'y'"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; &#39;y&#39;"
        );
        assert_eq!(escape_html("Room 12"), "Room 12");
    }

    #[test]
    fn test_empty_collection_renders_one_placeholder_row() {
        let body = TableBody::render::<GuestRequest>(&[]);
        assert_eq!(body.row_count(), 1);
        let html = body.to_html();
        assert!(html.contains(r#"colspan="6""#));
        assert!(html.contains("No service requests recorded"));
    }

    #[test]
    fn test_row_carries_actions_with_identity() {
        let body = TableBody::render(&[request(7, "GS-001", "Extra towels")]);
        let TableBody::Rows(rows) = &body else {
            panic!("expected rows");
        };
        assert_eq!(rows[0].key, "7");
        assert_eq!(rows[0].actions.len(), 2);
        assert_eq!(rows[0].actions[1].label.as_deref(), Some("GS-001"));

        let html = body.to_html();
        assert!(html.contains(r#"data-action="edit" data-id="7""#));
        assert!(html.contains(r#"data-action="delete" data-id="7" data-label="GS-001""#));
        assert!(html.contains(r#"<span class="tag in-progress">In Progress</span>"#));
    }

    #[test]
    fn test_untrusted_values_are_escaped() {
        let body = TableBody::render(&[request(1, "GS-\"2\"", "<img src=x onerror=alert(1)>")]);
        let html = body.to_html();
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(html.contains(r#"data-label="GS-&quot;2&quot;""#));
    }

    #[test]
    fn test_rows_keep_storage_order() {
        let records = vec![request(3, "GS-3", "a"), request(1, "GS-1", "b"), request(2, "GS-2", "c")];
        let TableBody::Rows(rows) = TableBody::render(&records) else {
            panic!("expected rows");
        };
        let keys: Vec<_> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_render_is_idempotent() {
        let records = vec![request(1, "GS-1", "a"), request(2, "GS-2", "b")];
        assert_eq!(TableBody::render(&records), TableBody::render(&records));
        assert_eq!(
            TableBody::render(&records).to_html(),
            TableBody::render(&records).to_html()
        );
    }

    #[test]
    fn test_unknown_status_uses_default_class() {
        let mut record = request(1, "GS-1", "a");
        record.status = "Escalated".to_string();
        let TableBody::Rows(rows) = TableBody::render(&[record]) else {
            panic!("expected rows");
        };
        assert!(rows[0].cells.contains(&Cell::Tag {
            label: "Escalated".to_string(),
            class: "assigned",
        }));
    }

    #[test]
    fn test_inventory_row_shows_derived_status() {
        let item = InventoryItem {
            id: Some(RecordId(1)),
            item: "Glass Cleaner".to_string(),
            in_stock: 10,
            min_level: 20,
            damaged: 3,
            ..InventoryItem::default()
        };
        let html = TableBody::render(&[item]).to_html();
        assert!(html.contains(r#"<span class="tag low">Low Stock</span>"#));
    }
}
