use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{BudgetError, Result};
use crate::ledger::category::{Category, EntryKind};

/// One revenue or expense record inside a month ledger.
///
/// Ids are unique within their list for the lifetime of the ledger; deleting
/// an entry never frees its id for reuse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    pub id: u64,
    pub category: Category,
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
}

/// Checks the parts of a prospective entry before any list is touched.
pub(crate) fn validate(kind: EntryKind, category: Category, amount: Decimal) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(BudgetError::Validation(format!(
            "amount must be greater than zero (got {amount})"
        )));
    }
    if category.kind() != kind {
        return Err(BudgetError::Validation(format!(
            "category `{category}` is not a {kind} category"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::category::{ExpenseCategory, RevenueCategory};

    #[test]
    fn rejects_non_positive_amounts() {
        let category = Category::from(RevenueCategory::ChildcareFees);
        assert!(validate(EntryKind::Revenue, category, Decimal::ZERO).is_err());
        assert!(validate(EntryKind::Revenue, category, Decimal::from(-5)).is_err());
        assert!(validate(EntryKind::Revenue, category, Decimal::ONE).is_ok());
    }

    #[test]
    fn rejects_category_from_the_other_list() {
        let expense = Category::from(ExpenseCategory::Food);
        let err = validate(EntryKind::Revenue, expense, Decimal::ONE).unwrap_err();
        assert!(err.to_string().contains("Alimentation"), "unexpected error: {err}");
    }

    #[test]
    fn entry_round_trips_through_json() {
        let entry = Entry {
            id: 3,
            category: Category::from(RevenueCategory::GovernmentGrants),
            description: "Subvention août".into(),
            amount: "1534.25".parse().unwrap(),
            date: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
