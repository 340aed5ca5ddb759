//! Export module for expense-export
//!
//! Encodes projected expense rows as CSV.

pub mod csv;

pub use self::csv::write_expenses_csv;
