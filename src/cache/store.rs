//! Persistent resolution cache.
//!
//! Strategy: remember remote-lookup results keyed by the extracted symbol
//! name, so a re-run never repeats a lookup for the same solution.
//!
//! Cache structure:
//! - File: a single JSON object at the configured path
//! - Key: symbol name (or "no-key" when extraction found nothing)
//! - Value: the resolved `ProblemRecord`
//!
//! Lifecycle is load-once / get / put / explicit flush: the file is read
//! wholesale at startup and overwritten wholesale after every insertion.
//! Entries are never invalidated. A missing file is an empty cache; a
//! corrupt file is an empty cache plus a `CacheWarning` the caller can
//! report - corruption is surfaced, not silently swallowed.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::types::ProblemRecord;

/// Resolution key used when no symbol could be extracted from a file.
pub const NO_KEY: &str = "no-key";

/// A non-fatal problem noticed while loading the cache file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheWarning {
    pub path: PathBuf,
    pub detail: String,
}

impl std::fmt::Display for CacheWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "cache file {} is unreadable, starting empty: {}",
            self.path.display(),
            self.detail
        )
    }
}

/// Symbol-name -> record map, persisted as one JSON object.
///
/// BTreeMap keeps the on-disk ordering stable across flushes, so repeated
/// runs produce byte-identical cache files for identical contents.
pub struct ResolutionCache {
    path: PathBuf,
    entries: BTreeMap<String, ProblemRecord>,
}

impl ResolutionCache {
    /// Load the cache from `path`.
    ///
    /// Missing file: empty cache, no warning. Unreadable or unparseable
    /// file: empty cache plus a warning for the caller to surface.
    pub fn load(path: &Path) -> (Self, Option<CacheWarning>) {
        let empty = Self {
            path: path.to_path_buf(),
            entries: BTreeMap::new(),
        };

        if !path.exists() {
            return (empty, None);
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                let warning = CacheWarning {
                    path: path.to_path_buf(),
                    detail: err.to_string(),
                };
                return (empty, Some(warning));
            }
        };

        match serde_json::from_str::<BTreeMap<String, ProblemRecord>>(&content) {
            Ok(entries) => (
                Self {
                    path: path.to_path_buf(),
                    entries,
                },
                None,
            ),
            Err(err) => {
                let warning = CacheWarning {
                    path: path.to_path_buf(),
                    detail: err.to_string(),
                };
                (empty, Some(warning))
            }
        }
    }

    /// Cached record for a resolution key, if any.
    pub fn get(&self, key: &str) -> Option<&ProblemRecord> {
        self.entries.get(key)
    }

    /// Insert or overwrite an entry. Does not write to disk - call
    /// `flush` afterwards.
    pub fn put(&mut self, key: &str, record: ProblemRecord) {
        self.entries.insert(key.to_string(), record);
    }

    /// Overwrite the cache file wholesale with the current entries.
    pub fn flush(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)
            .context("Failed to serialize resolution cache")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write cache file: {}", self.path.display()))?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
