use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::ledger::annual::AnnualReport;
use crate::ledger::category::{Category, EntryKind};
use crate::ledger::entry::{self, Entry};
use crate::ledger::month::{MonthKey, MonthLedger, Totals};

/// All recorded months for one user, keyed by `"{year}-{month}"`.
///
/// Serializes transparently as the bare month mapping, which is exactly the
/// persisted file format.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Ledger {
    months: BTreeMap<String, MonthLedger>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn month(&self, key: MonthKey) -> Option<&MonthLedger> {
        self.months.get(&key.storage_key())
    }

    /// Materializes the month slot with empty defaults on first access.
    pub fn get_or_create(&mut self, key: MonthKey) -> &mut MonthLedger {
        self.months.entry(key.storage_key()).or_default()
    }

    /// Validates and records a new entry, materializing the month only once
    /// the input has passed validation.
    pub fn add_entry(
        &mut self,
        key: MonthKey,
        kind: EntryKind,
        category: Category,
        description: impl Into<String>,
        amount: Decimal,
        date: NaiveDate,
    ) -> Result<Entry> {
        entry::validate(kind, category, amount)?;
        self.get_or_create(key)
            .add_entry(kind, category, description, amount, date)
    }

    /// Removes an entry by id. Absent months and unknown ids are no-ops and
    /// leave the month map untouched.
    pub fn delete_entry(&mut self, key: MonthKey, kind: EntryKind, id: u64) -> Option<Entry> {
        self.months
            .get_mut(&key.storage_key())?
            .delete_entry(kind, id)
    }

    /// Totals for a month, reading absent months as zeros without
    /// materializing them.
    pub fn totals(&self, key: MonthKey) -> Totals {
        self.month(key).map(MonthLedger::totals).unwrap_or_default()
    }

    /// Replaces the month's free-text notes verbatim.
    pub fn set_notes(&mut self, key: MonthKey, notes: impl Into<String>) {
        self.get_or_create(key).notes = notes.into();
    }

    pub fn notes(&self, key: MonthKey) -> &str {
        self.month(key).map(|month| month.notes.as_str()).unwrap_or("")
    }

    /// Read-only fold of the year's twelve months.
    pub fn annual_report(&self, year: i32) -> AnnualReport {
        AnnualReport::for_year(self, year)
    }

    pub fn month_count(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}
