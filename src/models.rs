// Data structures for search and detail responses.

use serde_json::Value;

use crate::error::ScrapeError;

/// One entry in the detail field mapping: CSV column name, JSON pointer
/// into the detail response, and the sentinel used when the field is
/// absent. Keeping this as a single table means header, extraction, and
/// fallbacks cannot drift apart.
pub struct FieldSpec {
    pub name: &'static str,
    pub path: &'static str,
    pub default: &'static str,
}

pub const ITEM_FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "item_id", path: "/id", default: "No ID" },
    FieldSpec { name: "title", path: "/title", default: "No Title" },
    FieldSpec { name: "price", path: "/price", default: "No Price" },
    FieldSpec { name: "currency_id", path: "/currency_id", default: "No Currency" },
    FieldSpec { name: "condition", path: "/condition", default: "No Condition" },
    FieldSpec { name: "available_quantity", path: "/initial_quantity", default: "No Quantity" },
    FieldSpec { name: "seller_id", path: "/seller_id", default: "No Seller ID" },
    FieldSpec { name: "seller_reputation", path: "/seller/reputation/level_id", default: "No Reputation" },
    FieldSpec { name: "location", path: "/seller_address/state/name", default: "No location info" },
    FieldSpec { name: "url", path: "/permalink", default: "No URL" },
];

/// Normalized flat record for one listing. `values` holds one rendered
/// string per `ITEM_FIELDS` entry, in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRecord {
    values: Vec<String>,
}

impl ItemRecord {
    /// CSV header, in field-table order.
    pub fn field_names() -> impl Iterator<Item = &'static str> {
        ITEM_FIELDS.iter().map(|f| f.name)
    }

    /// Builds a record from a detail response body by applying the field
    /// table uniformly. A body that is not a JSON object is a structural
    /// error and no record is produced; a merely missing field falls back
    /// to its sentinel.
    pub fn from_detail(detail: &Value) -> Result<Self, ScrapeError> {
        if !detail.is_object() {
            return Err(ScrapeError::Extraction(format!(
                "detail body is not an object: {detail}"
            )));
        }

        let values = ITEM_FIELDS
            .iter()
            .map(|field| {
                detail
                    .pointer(field.path)
                    .and_then(render_scalar)
                    .unwrap_or_else(|| field.default.to_string())
            })
            .collect();

        Ok(ItemRecord { values })
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        ITEM_FIELDS
            .iter()
            .position(|f| f.name == name)
            .map(|idx| self.values[idx].as_str())
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

// Renders a scalar JSON value for CSV output. Null and non-scalar values
// fall through to the field's sentinel.
fn render_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
