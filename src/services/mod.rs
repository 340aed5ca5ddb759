//! Service layer for expense-export
//!
//! The service layer holds the transform: filtering expense entries,
//! normalizing their fields and reformatting dates.

pub mod date;
pub mod expense;

pub use date::{format_date, DateFormatter};
pub use expense::{project_expenses, ExpenseService, ProjectionSummary};
