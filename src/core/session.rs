use std::path::PathBuf;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::export;
use crate::ledger::{AnnualReport, Category, Entry, EntryKind, Ledger, MonthKey, MonthLedger, Totals};
use crate::report::{self, ReportScope};
use crate::storage::StorageBackend;

/// Facade that coordinates one user's ledger state, persistence, and exports.
///
/// The session owns the in-memory ledger for its whole lifetime; mutations are
/// visible immediately but reach disk only through [`BudgetSession::save`].
pub struct BudgetSession {
    user: String,
    ledger: Ledger,
    storage: Box<dyn StorageBackend>,
}

impl BudgetSession {
    /// Opens a session for `user`, loading persisted state. Unreadable or
    /// malformed content degrades to an empty ledger with a logged warning
    /// instead of failing the session.
    pub fn open(storage: Box<dyn StorageBackend>, user: impl Into<String>) -> Self {
        let user = user.into();
        let ledger = match storage.load(&user) {
            Ok(ledger) => ledger,
            Err(err) => {
                tracing::warn!(%err, %user, "falling back to an empty ledger");
                Ledger::new()
            }
        };
        Self {
            user,
            ledger,
            storage,
        }
    }

    /// Persists the full ledger. On failure the in-memory state is left
    /// untouched so the caller can retry.
    pub fn save(&self) -> Result<PathBuf> {
        let path = self.storage.save(&self.ledger, &self.user)?;
        tracing::info!(path = %path.display(), "ledger saved");
        Ok(path)
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Month accessor with get-or-create semantics.
    pub fn month(&mut self, key: MonthKey) -> &MonthLedger {
        self.ledger.get_or_create(key)
    }

    pub fn add_entry(
        &mut self,
        key: MonthKey,
        kind: EntryKind,
        category: Category,
        description: impl Into<String>,
        amount: Decimal,
        date: NaiveDate,
    ) -> Result<Entry> {
        let entry = self
            .ledger
            .add_entry(key, kind, category, description, amount, date)?;
        tracing::debug!(month = %key, id = entry.id, %kind, "entry recorded");
        Ok(entry)
    }

    pub fn delete_entry(&mut self, key: MonthKey, kind: EntryKind, id: u64) -> Option<Entry> {
        self.ledger.delete_entry(key, kind, id)
    }

    pub fn totals(&self, key: MonthKey) -> Totals {
        self.ledger.totals(key)
    }

    pub fn set_notes(&mut self, key: MonthKey, notes: impl Into<String>) {
        self.ledger.set_notes(key, notes);
    }

    pub fn notes(&self, key: MonthKey) -> &str {
        self.ledger.notes(key)
    }

    pub fn annual_report(&self, year: i32) -> AnnualReport {
        self.ledger.annual_report(year)
    }

    /// Renders the printable report for a month or a full year.
    pub fn render_pdf(&self, scope: ReportScope) -> Result<Vec<u8>> {
        report::render_pdf(&self.ledger, scope)
    }

    /// Spreadsheet export of every entry recorded in `year`.
    pub fn export_csv(&self, year: i32) -> Result<Vec<u8>> {
        export::csv::export_year(&self.ledger, year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::RevenueCategory;
    use crate::storage::JsonStorage;
    use tempfile::TempDir;

    fn session_with_temp_dir() -> (BudgetSession, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let storage = JsonStorage::new(Some(temp.path().to_path_buf())).expect("storage");
        (BudgetSession::open(Box::new(storage), "tests"), temp)
    }

    #[test]
    fn open_degrades_to_an_empty_ledger_on_corrupt_state() {
        let temp = TempDir::new().unwrap();
        let storage = JsonStorage::new(Some(temp.path().to_path_buf())).unwrap();
        std::fs::write(storage.ledger_path("tests"), "][").unwrap();
        let session = BudgetSession::open(Box::new(storage), "tests");
        assert!(session.ledger().is_empty());
    }

    #[test]
    fn month_accessor_materializes_the_slot() {
        let (mut session, _guard) = session_with_temp_dir();
        let key = MonthKey::new(2025, 0).unwrap();
        assert!(session.month(key).is_empty());
        assert_eq!(session.ledger().month_count(), 1);
    }

    #[test]
    fn entries_flow_through_the_facade() {
        let (mut session, _guard) = session_with_temp_dir();
        let key = MonthKey::new(2025, 6).unwrap();
        let entry = session
            .add_entry(
                key,
                EntryKind::Revenue,
                RevenueCategory::ChildcareFees.into(),
                "Juillet",
                "1200.00".parse().unwrap(),
                NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            )
            .expect("valid entry");

        let totals = session.totals(key);
        assert_eq!(totals.revenues, "1200.00".parse::<Decimal>().unwrap());
        assert_eq!(totals.net, totals.revenues);

        assert!(session.delete_entry(key, EntryKind::Revenue, entry.id).is_some());
        assert_eq!(session.totals(key), Totals::default());
    }
}
