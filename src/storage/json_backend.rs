use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::Result;
use crate::ledger::Ledger;
use crate::storage::StorageBackend;

const FILE_PREFIX: &str = "garderie_budget";
const TMP_SUFFIX: &str = "tmp";
const NAMESPACE_LIMIT: usize = 30;
const FALLBACK_NAMESPACE: &str = "garderie";

/// File-per-user JSON persistence rooted at a single directory.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    /// Opens (and creates if needed) the storage root. `None` resolves to the
    /// platform data directory.
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(default_root);
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self, user: &str) -> Result<Ledger> {
        let path = self.ledger_path(user);
        if !path.exists() {
            return Ok(Ledger::new());
        }
        let data = fs::read_to_string(&path)?;
        let ledger: Ledger = serde_json::from_str(&data)?;
        Ok(ledger)
    }

    fn save(&self, ledger: &Ledger, user: &str) -> Result<PathBuf> {
        let path = self.ledger_path(user);
        let json = serde_json::to_string_pretty(ledger)?;
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        Ok(path)
    }

    fn ledger_path(&self, user: &str) -> PathBuf {
        self.root
            .join(format!("{}_{}.json", FILE_PREFIX, namespace(user)))
    }
}

/// Derives the filesystem namespace for a raw user identifier: lowercase,
/// every run of non-word characters collapsed to one underscore, truncated
/// to thirty characters.
///
/// Distinct identifiers can still collide after sanitization; the caller is
/// a single-user tool, so collisions are logged rather than rejected.
pub fn namespace(raw: &str) -> String {
    let mut sanitized = String::new();
    let mut last_was_gap = false;
    for ch in raw.to_lowercase().chars() {
        if ch.is_alphanumeric() || ch == '_' {
            sanitized.push(ch);
            last_was_gap = false;
        } else if !last_was_gap {
            sanitized.push('_');
            last_was_gap = true;
        }
    }
    let truncated: String = sanitized.chars().take(NAMESPACE_LIMIT).collect();
    if truncated.trim_matches('_').is_empty() {
        FALLBACK_NAMESPACE.into()
    } else {
        truncated
    }
}

fn default_root() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("garderie_budget")
}

fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
