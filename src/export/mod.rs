//! Spreadsheet-friendly exports of ledger data.

pub mod csv;
