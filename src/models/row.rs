//! Output expense row

use serde::Serialize;

/// Column names of the exported CSV, in output order
pub const EXPENSE_HEADERS: [&str; 5] = ["Account", "Category", "Amount", "Date", "Description"];

/// One CSV row describing an expense entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExpenseRow {
    /// Bank or account name
    pub account: String,
    /// Canonical display category
    pub category: String,
    /// Amount text exactly as it appeared in the input
    pub amount: String,
    /// `YYYY-MM-DD`, or empty if the source date did not parse
    pub date: String,
    pub description: String,
}
