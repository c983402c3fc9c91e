use crate::shared::crud::{
    parse_count, Column, CrudEntity, FieldDef, RecordId, StatusTag, StatusVocabulary,
    TableEntity,
};
use crate::shared::serde_utils::null_to_default;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

pub const PO_STATUSES: &[&str] = &["Pending", "Partial", "Complete"];

const STATUS_TAGS: &[StatusTag] = &[
    StatusTag::new("Pending", "pending"),
    StatusTag::new("Partial", "partial"),
    StatusTag::new("Complete", "done"),
];

static VOCABULARY: StatusVocabulary = StatusVocabulary::new(STATUS_TAGS);

static COLUMNS: &[Column] = &[
    Column::text("poid", "PO ID"),
    Column::text("supplier", "Supplier"),
    Column::text("item", "Item"),
    Column::text("qty", "Qty"),
    Column::status("status", "Status"),
];

static FIELDS: &[FieldDef] = &[
    FieldDef::text("poid", "PO ID"),
    FieldDef::text("supplier", "Supplier Name"),
    FieldDef::text("item", "Item"),
    FieldDef::count("qty", "Ordered Qty"),
    FieldDef::select("status", "Status", PO_STATUSES),
];

/// Supplier purchase order (`/orders`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PurchaseOrder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(deserialize_with = "null_to_default")]
    pub poid: String,
    #[serde(deserialize_with = "null_to_default")]
    pub supplier: String,
    #[serde(deserialize_with = "null_to_default")]
    pub item: String,
    #[serde(deserialize_with = "null_to_default")]
    pub qty: i64,
    #[serde(deserialize_with = "null_to_default")]
    pub status: String,
}

impl Default for PurchaseOrder {
    fn default() -> Self {
        Self {
            id: None,
            poid: String::new(),
            supplier: String::new(),
            item: String::new(),
            qty: 0,
            status: PO_STATUSES[0].to_string(),
        }
    }
}

impl PurchaseOrder {
    fn sample(poid: &str, supplier: &str, item: &str, qty: i64, status: &str) -> Self {
        Self {
            id: None,
            poid: poid.to_string(),
            supplier: supplier.to_string(),
            item: item.to_string(),
            qty,
            status: status.to_string(),
        }
    }
}

impl TableEntity for PurchaseOrder {
    const LIST_TITLE: &'static str = "Purchase Orders";
    const TOTAL_LABEL: &'static str = "Total POs";
    const EMPTY_MESSAGE: &'static str =
        "No purchase orders recorded. Click \"Add PO\" to create one.";

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
        &self.poid
    }

    fn status(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.status)
    }

    fn cell(&self, column: &str) -> String {
        match column {
            "poid" => self.poid.clone(),
            "supplier" => self.supplier.clone(),
            "item" => self.item.clone(),
            "qty" => self.qty.to_string(),
            _ => String::new(),
        }
    }
}

impl CrudEntity for PurchaseOrder {
    const ENDPOINT: &'static str = "/orders";
    const STORAGE_KEY: &'static str = "flameTreePurchaseOrders";
    const NOUN: &'static str = "purchase order";
    const PLURAL: &'static str = "purchase orders";
    const IDENTIFIER_LABEL: &'static str = "PO ID";

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
        &self.poid
    }

    fn form_value(&self, field: &str) -> String {
        match field {
            "status" => self.status.clone(),
            other => self.cell(other),
        }
    }

    fn apply_form_value(&mut self, field: &str, value: &str) {
        match field {
            "poid" => self.poid = value.to_string(),
            "supplier" => self.supplier = value.to_string(),
            "item" => self.item = value.to_string(),
            "qty" => self.qty = parse_count(value),
            "status" => self.status = value.to_string(),
            _ => {}
        }
    }

    fn normalize(&mut self) {
        self.poid = self.poid.trim().to_string();
        self.supplier = self.supplier.trim().to_string();
        self.item = self.item.trim().to_string();
        self.qty = self.qty.max(0);
    }

    fn defaults() -> Vec<Self> {
        vec![
            Self::sample("PO-3001", "Lanka Linen Co.", "Bath Towels", 200, "Pending"),
            Self::sample("PO-3002", "Ceylon Clean Supplies", "Glass Cleaner", 48, "Partial"),
            Self::sample("PO-3003", "Island Paper Mills", "Toilet Tissue Packs", 120, "Complete"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::{dispatch, messages, LocalRecordStore, MemorySlot, TableBody};

    #[test]
    fn test_qty_never_negative() {
        let mut po = PurchaseOrder::default();
        po.apply_form_value("qty", "-12");
        assert_eq!(po.qty, 0);

        let mut po = PurchaseOrder {
            poid: "PO-1".to_string(),
            qty: -4,
            ..PurchaseOrder::default()
        };
        po.normalize();
        assert_eq!(po.qty, 0);
    }

    #[test]
    fn test_complete_uses_done_class() {
        let mut po = PurchaseOrder::defaults().remove(2);
        po.id = Some(RecordId(3));
        let html = TableBody::render(&[po]).to_html();
        assert!(html.contains(r#"<span class="tag done">Complete</span>"#));
        assert!(html.contains(r#"data-label="PO-3003""#));
    }

    #[test]
    fn test_messages_use_noun() {
        assert_eq!(messages::not_found::<PurchaseOrder>(), "Purchase order not found.");
        let cmd = dispatch(Some("delete"), Some("2"), Some("PO-3002")).unwrap();
        assert_eq!(
            cmd.confirm_prompt(PurchaseOrder::NOUN),
            "Delete purchase order PO-3002? This cannot be undone."
        );
    }

    #[test]
    fn test_local_store_rejects_blank_poid() {
        let store = LocalRecordStore::<PurchaseOrder, _>::new(MemorySlot::new());
        let resp = store.insert(PurchaseOrder::default()).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.message.as_deref(), Some("Please enter a valid PO ID."));
    }
}
