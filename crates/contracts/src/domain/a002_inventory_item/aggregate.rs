use crate::shared::crud::{
    parse_count, Column, CrudEntity, FieldDef, Metrics, RecordId, StatusTag, StatusVocabulary,
    TableEntity,
};
use crate::shared::serde_utils::null_to_default;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

pub const LOW_STOCK: &str = "Low Stock";
pub const MONITOR: &str = "Monitor";
pub const HEALTHY: &str = "Healthy";

pub const DEFAULT_UNIT: &str = "Units";

pub const CATEGORIES: &[&str] = &[
    "Towels",
    "Bedding",
    "Toiletries",
    "Cleaning Supplies",
    "Minibar",
    "Amenities",
    "Other",
];

const STATUS_TAGS: &[StatusTag] = &[
    StatusTag::new(HEALTHY, "ok"),
    StatusTag::new(MONITOR, "watch"),
    StatusTag::new(LOW_STOCK, "low"),
];

static VOCABULARY: StatusVocabulary = StatusVocabulary::new(STATUS_TAGS);

static COLUMNS: &[Column] = &[
    Column::text("item", "Item"),
    Column::text("category", "Category"),
    Column::text("inStock", "In Stock"),
    Column::text("minLevel", "Min Level"),
    Column::text("damaged", "Damaged"),
    Column::text("missing", "Missing"),
    Column::status("status", "Status"),
];

static FIELDS: &[FieldDef] = &[
    FieldDef::text("item", "Item Name"),
    FieldDef::select("category", "Category", CATEGORIES),
    FieldDef::text("unit", "Unit"),
    FieldDef::count("inStock", "Opening Quantity").add_only(),
    FieldDef::count("inStock", "In Stock").update_only(),
    FieldDef::count("minLevel", "Min Level"),
    FieldDef::count("damaged", "Damaged").update_only(),
    FieldDef::count("missing", "Missing").update_only(),
];

/// Stock status rule. The low-stock check always wins over damage/missing.
pub fn stock_status(in_stock: i64, min_level: i64, damaged: i64, missing: i64) -> &'static str {
    if in_stock <= min_level {
        LOW_STOCK
    } else if damaged > 0 || missing > 0 {
        MONITOR
    } else {
        HEALTHY
    }
}

/// Sum of non-negative counts, saturating instead of overflowing.
fn unit_total(counts: impl Iterator<Item = i64>) -> usize {
    let total = counts.fold(0i64, |acc, n| acc.saturating_add(n.max(0)));
    usize::try_from(total).unwrap_or(usize::MAX)
}

fn default_unit() -> String {
    DEFAULT_UNIT.to_string()
}

/// Inventory item (`/inventory`).
///
/// The server stores a computed `status`; it is carried through untouched
/// but the displayed status is always derived from the counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InventoryItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(alias = "name", deserialize_with = "null_to_default")]
    pub item: String,
    #[serde(deserialize_with = "null_to_default")]
    pub category: String,
    #[serde(default = "default_unit")]
    pub unit: String,
    #[serde(deserialize_with = "null_to_default")]
    pub in_stock: i64,
    #[serde(deserialize_with = "null_to_default")]
    pub min_level: i64,
    #[serde(deserialize_with = "null_to_default")]
    pub damaged: i64,
    #[serde(deserialize_with = "null_to_default")]
    pub missing: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Default for InventoryItem {
    fn default() -> Self {
        Self {
            id: None,
            item: String::new(),
            category: CATEGORIES[0].to_string(),
            unit: default_unit(),
            in_stock: 0,
            min_level: 0,
            damaged: 0,
            missing: 0,
            status: None,
        }
    }
}

impl InventoryItem {
    pub fn derived_status(&self) -> &'static str {
        stock_status(self.in_stock, self.min_level, self.damaged, self.missing)
    }

    fn sample(
        item: &str,
        category: &str,
        unit: &str,
        in_stock: i64,
        min_level: i64,
        damaged: i64,
        missing: i64,
    ) -> Self {
        Self {
            id: None,
            item: item.to_string(),
            category: category.to_string(),
            unit: unit.to_string(),
            in_stock,
            min_level,
            damaged,
            missing,
            status: None,
        }
    }
}

impl TableEntity for InventoryItem {
    const LIST_TITLE: &'static str = "Inventory";
    const TOTAL_LABEL: &'static str = "Total Items";
    const EMPTY_MESSAGE: &'static str = "No inventory items yet. Add your first item.";

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
        &self.item
    }

    fn status(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.derived_status())
    }

    fn cell(&self, column: &str) -> String {
        match column {
            "item" => self.item.clone(),
            "category" => self.category.clone(),
            "unit" => self.unit.clone(),
            "inStock" => self.in_stock.to_string(),
            "minLevel" => self.min_level.to_string(),
            "damaged" => self.damaged.to_string(),
            "missing" => self.missing.to_string(),
            _ => String::new(),
        }
    }

    fn metrics(records: &[Self]) -> Metrics {
        Metrics::by_status(records)
            .with_extra("Damaged Units", unit_total(records.iter().map(|r| r.damaged)))
            .with_extra("Missing Units", unit_total(records.iter().map(|r| r.missing)))
    }
}

impl CrudEntity for InventoryItem {
    const ENDPOINT: &'static str = "/inventory";
    const STORAGE_KEY: &'static str = "flameTreeInventoryItems";
    const NOUN: &'static str = "item";
    const PLURAL: &'static str = "inventory items";
    const IDENTIFIER_LABEL: &'static str = "item name";

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
        &self.item
    }

    fn form_value(&self, field: &str) -> String {
        self.cell(field)
    }

    fn apply_form_value(&mut self, field: &str, value: &str) {
        match field {
            "item" => self.item = value.to_string(),
            "category" => self.category = value.to_string(),
            "unit" => self.unit = value.to_string(),
            "inStock" => self.in_stock = parse_count(value),
            "minLevel" => self.min_level = parse_count(value),
            "damaged" => self.damaged = parse_count(value),
            "missing" => self.missing = parse_count(value),
            _ => {}
        }
    }

    fn normalize(&mut self) {
        self.item = self.item.trim().to_string();
        self.category = self.category.trim().to_string();
        self.unit = match self.unit.trim() {
            "" => default_unit(),
            unit => unit.to_string(),
        };
        self.in_stock = self.in_stock.max(0);
        self.min_level = self.min_level.max(0);
        self.damaged = self.damaged.max(0);
        self.missing = self.missing.max(0);
    }

    fn defaults() -> Vec<Self> {
        vec![
            Self::sample("Bath Towels", "Towels", "Pieces", 128, 70, 2, 1),
            Self::sample("Toilet Tissue Packs", "Toiletries", "Packs", 45, 50, 1, 0),
            Self::sample("Bed Sheets - King", "Bedding", "Pieces", 66, 60, 1, 1),
            Self::sample("Glass Cleaner", "Cleaning Supplies", "Bottles", 22, 20, 0, 0),
        ]
    }
}
