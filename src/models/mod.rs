//! Core data models for expense-export
//!
//! Input transaction records, output expense rows, and the category table
//! that connects them.

pub mod category;
pub mod record;
pub mod row;

pub use category::{normalize_category, CATEGORY_TABLE};
pub use record::{cell_text, TransactionRecord, EXPENSE_TYPE};
pub use row::{ExpenseRow, EXPENSE_HEADERS};
