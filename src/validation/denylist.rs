//! Preloaded set of known-common passwords.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::PolicyError;

/// Default list compiled into the crate: the high-frequency head of the
/// usual breach corpora, one entry per line, already lowercase.
const DEFAULT_LIST: &str = include_str!("common_passwords.txt");

/// Immutable set of disallowed passwords.
///
/// Entries are trimmed and lowercased on construction; membership checks
/// are O(1) expected. The set is never mutated after construction and is
/// safe to share across threads.
#[derive(Debug, Clone)]
pub struct Denylist {
    passwords: HashSet<String>,
}

impl Denylist {
    /// Builds a denylist from raw entries. Each entry is trimmed and
    /// lowercased; blank entries and `#` comments are skipped.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let passwords = entries
            .into_iter()
            .filter_map(|entry| {
                let entry = entry.as_ref().trim();
                if entry.is_empty() || entry.starts_with('#') {
                    None
                } else {
                    Some(entry.to_lowercase())
                }
            })
            .collect();
        Self { passwords }
    }

    /// Reads a one-password-per-line file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PolicyError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| PolicyError::DenylistRead {
            path: path.to_path_buf(),
            source,
        })?;
        let list = Self::from_entries(contents.lines());
        tracing::debug!(
            path = %path.display(),
            entries = list.len(),
            "loaded password denylist"
        );
        Ok(list)
    }

    /// The list compiled into the crate.
    pub fn embedded() -> Self {
        Self::from_entries(DEFAULT_LIST.lines())
    }

    /// Exact membership test. Callers fold and trim the candidate first.
    pub fn contains(&self, candidate: &str) -> bool {
        self.passwords.contains(candidate)
    }

    pub fn len(&self) -> usize {
        self.passwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passwords.is_empty()
    }
}

impl Default for Denylist {
    fn default() -> Self {
        Self::embedded()
    }
}
