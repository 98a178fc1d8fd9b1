use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{BudgetError, Result};
use crate::ledger::category::{Category, EntryKind, MONTH_LABELS};
use crate::ledger::entry::{self, Entry};

/// Addresses one month of ledger activity.
///
/// The month index is zero-based, matching the persisted `"{year}-{month}"`
/// storage keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthKey {
    year: i32,
    month0: u32,
}

impl MonthKey {
    pub fn new(year: i32, month0: u32) -> Result<Self> {
        if month0 > 11 {
            return Err(BudgetError::Validation(format!(
                "month index {month0} is out of range (expected 0-11)"
            )));
        }
        Ok(Self { year, month0 })
    }

    /// Iterates the twelve months of `year` in calendar order.
    pub fn months_of(year: i32) -> impl Iterator<Item = MonthKey> {
        (0..12).map(move |month0| MonthKey { year, month0 })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month0(&self) -> u32 {
        self.month0
    }

    pub fn label(&self) -> &'static str {
        MONTH_LABELS[self.month0 as usize]
    }

    /// Key under which this month is stored in the persisted mapping.
    pub fn storage_key(&self) -> String {
        format!("{}-{}", self.year, self.month0)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label(), self.year)
    }
}

/// Derived revenue/expense/net sums, always recomputed from the entry lists.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct Totals {
    pub revenues: Decimal,
    pub expenses: Decimal,
    pub net: Decimal,
}

impl Totals {
    pub fn from_parts(revenues: Decimal, expenses: Decimal) -> Self {
        Self {
            revenues,
            expenses,
            net: revenues - expenses,
        }
    }
}

/// Entries and notes for one `(year, month)` slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthLedger {
    #[serde(default)]
    pub revenues: Vec<Entry>,
    #[serde(default)]
    pub expenses: Vec<Entry>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    next_revenue_id: u64,
    #[serde(default)]
    next_expense_id: u64,
}

impl MonthLedger {
    pub fn entries(&self, kind: EntryKind) -> &[Entry] {
        match kind {
            EntryKind::Revenue => &self.revenues,
            EntryKind::Expense => &self.expenses,
        }
    }

    /// Validates and appends a new entry, returning the stored record.
    pub fn add_entry(
        &mut self,
        kind: EntryKind,
        category: Category,
        description: impl Into<String>,
        amount: Decimal,
        date: NaiveDate,
    ) -> Result<Entry> {
        entry::validate(kind, category, amount)?;
        let entry = Entry {
            id: self.allocate_id(kind),
            category,
            description: description.into(),
            amount,
            date,
        };
        match kind {
            EntryKind::Revenue => self.revenues.push(entry.clone()),
            EntryKind::Expense => self.expenses.push(entry.clone()),
        }
        Ok(entry)
    }

    /// Removes the entry with the matching id. Missing ids are a no-op so
    /// that a retried delete stays idempotent.
    pub fn delete_entry(&mut self, kind: EntryKind, id: u64) -> Option<Entry> {
        let list = match kind {
            EntryKind::Revenue => &mut self.revenues,
            EntryKind::Expense => &mut self.expenses,
        };
        let position = list.iter().position(|entry| entry.id == id)?;
        Some(list.remove(position))
    }

    pub fn totals(&self) -> Totals {
        let revenues = self.revenues.iter().map(|entry| entry.amount).sum();
        let expenses = self.expenses.iter().map(|entry| entry.amount).sum();
        Totals::from_parts(revenues, expenses)
    }

    pub fn is_empty(&self) -> bool {
        self.revenues.is_empty() && self.expenses.is_empty() && self.notes.trim().is_empty()
    }

    fn allocate_id(&mut self, kind: EntryKind) -> u64 {
        match kind {
            EntryKind::Revenue => next_id(&mut self.next_revenue_id, &self.revenues),
            EntryKind::Expense => next_id(&mut self.next_expense_id, &self.expenses),
        }
    }
}

// A counter that lags behind its list (hand-edited file, pre-counter data)
// repairs itself before handing out the next id.
fn next_id(counter: &mut u64, entries: &[Entry]) -> u64 {
    let highest = entries.iter().map(|entry| entry.id).max().unwrap_or(0);
    *counter = (*counter).max(highest) + 1;
    *counter
}
