//! Year-level aggregation over the month map.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::ledger::category::{Category, EntryKind, ExpenseCategory, RevenueCategory};
use crate::ledger::ledger::Ledger;
use crate::ledger::month::{MonthKey, Totals};

/// One row of the month-by-month summary, in calendar order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MonthlyTotals {
    pub month: &'static str,
    pub totals: Totals,
}

/// Derived, read-only view of a full year. Rebuilding it never touches the
/// ledger it was computed from.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AnnualReport {
    pub year: i32,
    pub monthly_totals: Vec<MonthlyTotals>,
    pub revenue_by_category: BTreeMap<RevenueCategory, Decimal>,
    pub expense_by_category: BTreeMap<ExpenseCategory, Decimal>,
    pub grand_totals: Totals,
}

impl AnnualReport {
    pub(crate) fn for_year(ledger: &Ledger, year: i32) -> Self {
        let mut revenue_by_category: BTreeMap<RevenueCategory, Decimal> = RevenueCategory::ALL
            .iter()
            .map(|&category| (category, Decimal::ZERO))
            .collect();
        let mut expense_by_category: BTreeMap<ExpenseCategory, Decimal> = ExpenseCategory::ALL
            .iter()
            .map(|&category| (category, Decimal::ZERO))
            .collect();

        let mut monthly_totals = Vec::with_capacity(12);
        let mut revenues = Decimal::ZERO;
        let mut expenses = Decimal::ZERO;

        for key in MonthKey::months_of(year) {
            let totals = match ledger.month(key) {
                Some(month) => {
                    for entry in month.entries(EntryKind::Revenue) {
                        if let Category::Revenue(category) = entry.category {
                            *revenue_by_category.entry(category).or_insert(Decimal::ZERO) +=
                                entry.amount;
                        }
                    }
                    for entry in month.entries(EntryKind::Expense) {
                        if let Category::Expense(category) = entry.category {
                            *expense_by_category.entry(category).or_insert(Decimal::ZERO) +=
                                entry.amount;
                        }
                    }
                    month.totals()
                }
                None => Totals::default(),
            };
            revenues += totals.revenues;
            expenses += totals.expenses;
            monthly_totals.push(MonthlyTotals {
                month: key.label(),
                totals,
            });
        }

        // Grand net is derived once from the folded sums rather than
        // accumulated month by month.
        AnnualReport {
            year,
            monthly_totals,
            revenue_by_category,
            expense_by_category,
            grand_totals: Totals::from_parts(revenues, expenses),
        }
    }
}
