//! Expense projection service
//!
//! Filters a decoded transaction dump down to expense entries and projects
//! each one onto the fixed CSV row shape.

use tracing::info;

use crate::models::{normalize_category, ExpenseRow, TransactionRecord};
use crate::services::date::DateFormatter;

/// Counts gathered while projecting a dump
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectionSummary {
    /// Records in the input
    pub records_seen: usize,
    /// Records kept as expense rows
    pub expenses: usize,
    /// Expense rows whose date did not parse
    pub dates_blanked: usize,
}

/// Service for turning transaction records into expense rows
#[derive(Debug, Clone, Default)]
pub struct ExpenseService {
    dates: DateFormatter,
}

impl ExpenseService {
    /// Create a new expense service
    pub fn new() -> Self {
        Self::default()
    }

    /// Project a single record, or `None` if it is not an expense
    pub fn project(&self, record: &TransactionRecord) -> Option<ExpenseRow> {
        if !record.is_expense() {
            return None;
        }

        Some(ExpenseRow {
            account: record.bank_name_text(),
            category: normalize_category(&record.category_text()),
            amount: record.amount_text(),
            date: self.dates.format(&record.date_text()),
            description: record.description_text(),
        })
    }

    /// Project every expense record, preserving input order
    pub fn project_all(&self, records: &[TransactionRecord]) -> (Vec<ExpenseRow>, ProjectionSummary) {
        let rows: Vec<ExpenseRow> = records.iter().filter_map(|r| self.project(r)).collect();

        let summary = ProjectionSummary {
            records_seen: records.len(),
            expenses: rows.len(),
            dates_blanked: rows.iter().filter(|row| row.date.is_empty()).count(),
        };

        info!(
            records = summary.records_seen,
            expenses = summary.expenses,
            dates_blanked = summary.dates_blanked,
            "projected transaction dump"
        );

        (rows, summary)
    }
}

/// Filter and project records with the fixed date patterns
pub fn project_expenses(records: &[TransactionRecord]) -> Vec<ExpenseRow> {
    ExpenseService::default().project_all(records).0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn records(value: Value) -> Vec<TransactionRecord> {
        let objects: Vec<serde_json::Map<String, Value>> = serde_json::from_value(value).unwrap();
        objects.into_iter().map(TransactionRecord::from).collect()
    }

    #[test]
    fn test_projects_full_record() {
        let input = records(json!([{
            "type": "EXPENSE",
            "date": "2025-01-01 14:01:15",
            "bankname": "Chase",
            "category": "misc",
            "amount": 42.5,
            "description": "coffee"
        }]));

        let rows = project_expenses(&input);
        assert_eq!(
            rows,
            vec![ExpenseRow {
                account: "Chase".into(),
                category: "Others".into(),
                amount: "42.5".into(),
                date: "2025-01-01".into(),
                description: "coffee".into(),
            }]
        );
    }

    #[test]
    fn test_row_count_matches_expense_count() {
        let input = records(json!([
            {"type": "EXPENSE", "amount": 1},
            {"type": "INCOME", "amount": 2},
            {"type": "expense", "amount": 3},
            {"amount": 4},
            {"type": "EXPENSE", "amount": 5},
            {"type": "TRANSFER", "amount": 6}
        ]));

        let (rows, summary) = ExpenseService::default().project_all(&input);
        let expected = input.iter().filter(|r| r.is_expense()).count();
        assert_eq!(rows.len(), expected);
        assert_eq!(summary.records_seen, 6);
        assert_eq!(summary.expenses, 2);
    }

    #[test]
    fn test_order_is_stable() {
        let input = records(json!([
            {"type": "EXPENSE", "description": "first"},
            {"type": "INCOME", "description": "skipped"},
            {"type": "EXPENSE", "description": "second"},
            {"type": "EXPENSE", "description": "third"}
        ]));

        let descriptions: Vec<String> = project_expenses(&input)
            .into_iter()
            .map(|row| row.description)
            .collect();
        assert_eq!(descriptions, ["first", "second", "third"]);
    }

    #[test]
    fn test_bad_date_blanks_only_date() {
        let input = records(json!([{
            "type": "EXPENSE",
            "date": "not-a-date",
            "bankname": "HDFC",
            "category": "Travel",
            "amount": "120",
            "description": "cab"
        }]));

        let (rows, summary) = ExpenseService::default().project_all(&input);
        assert_eq!(rows[0].date, "");
        assert_eq!(rows[0].account, "HDFC");
        assert_eq!(rows[0].category, "Travel");
        assert_eq!(rows[0].amount, "120");
        assert_eq!(rows[0].description, "cab");
        assert_eq!(summary.dates_blanked, 1);
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let input = records(json!([{"type": "EXPENSE"}]));

        let rows = project_expenses(&input);
        assert_eq!(rows, vec![ExpenseRow::default()]);
    }

    #[test]
    fn test_amount_is_verbatim() {
        let input = records(json!([
            {"type": "EXPENSE", "amount": "1,200.00"},
            {"type": "EXPENSE", "amount": 7},
            {"type": "EXPENSE", "amount": "abc"}
        ]));

        let amounts: Vec<String> = project_expenses(&input)
            .into_iter()
            .map(|row| row.amount)
            .collect();
        assert_eq!(amounts, ["1,200.00", "7", "abc"]);
    }

    #[test]
    fn test_input_is_untouched() {
        let input = records(json!([{"type": "EXPENSE", "category": "GROOMING"}]));
        let before = input.clone();

        let rows = project_expenses(&input);
        assert_eq!(rows[0].category, "Personal Care");
        assert_eq!(input, before);
    }
}
