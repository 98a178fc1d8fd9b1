//! Persistence of the month mapping, one JSON file per user namespace.

pub mod json_backend;

use std::path::PathBuf;

use crate::errors::Result;
use crate::ledger::Ledger;

pub use json_backend::{namespace, JsonStorage};

/// Trait that abstracts interaction with the persistence layer.
pub trait StorageBackend: Send + Sync {
    /// Loads the user's ledger; a missing file yields an empty ledger.
    fn load(&self, user: &str) -> Result<Ledger>;
    /// Writes the full ledger and returns the path it landed on.
    fn save(&self, ledger: &Ledger, user: &str) -> Result<PathBuf>;
    fn ledger_path(&self, user: &str) -> PathBuf;
}
