//! Input transaction record
//!
//! Records arrive as loosely-typed JSON objects. Each of the six keys the
//! exporter reads is held as an optional raw value; absent and `null` keys
//! both render as the empty string.

use serde_json::{Map, Value};

/// The `type` value that marks a record as an expense entry
pub const EXPENSE_TYPE: &str = "EXPENSE";

/// One transaction from the input dump
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionRecord {
    /// `type` key ("EXPENSE", "INCOME", ...)
    pub kind: Option<Value>,
    /// `date` key, expected as `YYYY-MM-DD HH:MM:SS`
    pub date: Option<Value>,
    /// `bankname` key
    pub bank_name: Option<Value>,
    /// `category` key, raw key before normalization
    pub category: Option<Value>,
    /// `amount` key, number or string, never interpreted
    pub amount: Option<Value>,
    /// `description` key, free text
    pub description: Option<Value>,
}

impl TransactionRecord {
    /// True iff `type` is exactly the JSON string "EXPENSE"
    pub fn is_expense(&self) -> bool {
        matches!(&self.kind, Some(Value::String(kind)) if kind == EXPENSE_TYPE)
    }

    pub fn date_text(&self) -> String {
        cell_text(self.date.as_ref())
    }

    pub fn bank_name_text(&self) -> String {
        cell_text(self.bank_name.as_ref())
    }

    pub fn category_text(&self) -> String {
        cell_text(self.category.as_ref())
    }

    pub fn amount_text(&self) -> String {
        cell_text(self.amount.as_ref())
    }

    pub fn description_text(&self) -> String {
        cell_text(self.description.as_ref())
    }
}

impl From<Map<String, Value>> for TransactionRecord {
    fn from(mut object: Map<String, Value>) -> Self {
        Self {
            kind: object.remove("type"),
            date: object.remove("date"),
            bank_name: object.remove("bankname"),
            category: object.remove("category"),
            amount: object.remove("amount"),
            description: object.remove("description"),
        }
    }
}

/// Render a raw JSON field as CSV cell text
///
/// Strings are taken verbatim, numbers keep their source text, and absent or
/// `null` values become the empty string.
pub fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => other.to_string(),
    }
}
