//! Ledger domain models, persistence-friendly types, and helpers.

pub mod annual;
pub mod category;
pub mod entry;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod month;

pub use annual::{AnnualReport, MonthlyTotals};
pub use category::{Category, EntryKind, ExpenseCategory, RevenueCategory, MONTH_LABELS};
pub use entry::Entry;
pub use ledger::Ledger;
pub use month::{MonthKey, MonthLedger, Totals};
