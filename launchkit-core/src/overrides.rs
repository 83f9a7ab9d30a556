//! The system-wide launchd overrides document.
//!
//! One plist maps job label → `{Disabled: bool}`. There is no partial-write
//! API: every mutation reads the whole document, changes one entry, and
//! atomically replaces the file. Lost updates between two concurrent writers
//! are out of scope; partial-write corruption is not (tmp + rename).

use std::path::{Path, PathBuf};

use plist::{Dictionary, Value};

use crate::error::CoreError;
use crate::paths::{overrides_path, DISABLED_KEY};
use crate::plist_io;

/// What the overrides document says about one label.
///
/// Entry presence is significant on its own: once a label has an entry, the
/// descriptor's `Disabled` flag is fully shadowed and only an explicit
/// `Disabled = false` in the entry enables the job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideState {
    /// No entry for the label (or overrides are not consulted at all).
    Absent,
    /// An entry exists; `disabled` is its `Disabled` key, if present.
    Present { disabled: Option<bool> },
}

#[derive(Debug, Clone)]
pub struct OverrideStore {
    path: PathBuf,
}

impl OverrideStore {
    /// Store at the fixed well-known system path.
    pub fn system() -> Self {
        Self {
            path: overrides_path(),
        }
    }

    /// Store rooted at an explicit path (tests, alternate roots).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole document; an absent file reads as an empty document.
    /// A malformed file is `CoreError::OverrideRead`.
    pub fn read(&self) -> Result<Dictionary, CoreError> {
        if !self.path.exists() {
            return Ok(Dictionary::new());
        }
        let value = Value::from_file(&self.path).map_err(|e| CoreError::OverrideRead {
            path: self.path.clone(),
            source: e,
        })?;
        value
            .into_dictionary()
            .ok_or_else(|| CoreError::NotDictionary {
                path: self.path.clone(),
            })
    }

    /// Atomically replace the whole document.
    pub fn write(&self, doc: &Dictionary) -> Result<(), CoreError> {
        plist_io::write_dictionary_atomic(&self.path, doc)
    }

    /// The override state for `label` in the current document.
    pub fn state_for(&self, label: &str) -> Result<OverrideState, CoreError> {
        let doc = self.read()?;
        Ok(entry_state(&doc, label))
    }

    /// Read-modify-write: set `label`'s entry to `{Disabled: disabled}`.
    ///
    /// The entry is replaced wholesale, matching the daemon manager's own
    /// treatment of override entries.
    pub fn set_disabled(&self, label: &str, disabled: bool) -> Result<(), CoreError> {
        let mut doc = self.read()?;
        let mut entry = Dictionary::new();
        entry.insert(DISABLED_KEY.to_string(), Value::Boolean(disabled));
        doc.insert(label.to_string(), Value::Dictionary(entry));
        self.write(&doc)
    }
}

/// Extract `label`'s [`OverrideState`] from a parsed overrides document.
pub fn entry_state(doc: &Dictionary, label: &str) -> OverrideState {
    match doc.get(label).and_then(Value::as_dictionary) {
        Some(entry) => OverrideState::Present {
            disabled: entry.get(DISABLED_KEY).and_then(Value::as_boolean),
        },
        None => OverrideState::Absent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store(tmp: &TempDir) -> OverrideStore {
        OverrideStore::at(tmp.path().join("overrides.plist"))
    }

    #[test]
    fn missing_file_reads_as_empty_document() {
        let tmp = TempDir::new().unwrap();
        let doc = store(&tmp).read().unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn set_disabled_then_state_for() {
        let tmp = TempDir::new().unwrap();
        let s = store(&tmp);
        s.set_disabled("com.example.a", true).unwrap();
        assert_eq!(
            s.state_for("com.example.a").unwrap(),
            OverrideState::Present {
                disabled: Some(true)
            }
        );
        assert_eq!(
            s.state_for("com.example.other").unwrap(),
            OverrideState::Absent
        );
    }

    #[test]
    fn set_disabled_preserves_other_entries() {
        let tmp = TempDir::new().unwrap();
        let s = store(&tmp);
        s.set_disabled("com.example.a", true).unwrap();
        s.set_disabled("com.example.b", false).unwrap();
        assert_eq!(
            s.state_for("com.example.a").unwrap(),
            OverrideState::Present {
                disabled: Some(true)
            }
        );
        assert_eq!(
            s.state_for("com.example.b").unwrap(),
            OverrideState::Present {
                disabled: Some(false)
            }
        );
    }

    #[test]
    fn entry_without_disabled_key_is_present_none() {
        let mut doc = Dictionary::new();
        doc.insert("com.example.a".to_string(), Value::Dictionary(Dictionary::new()));
        assert_eq!(
            entry_state(&doc, "com.example.a"),
            OverrideState::Present { disabled: None }
        );
    }

    #[test]
    fn malformed_document_is_override_read_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("overrides.plist");
        std::fs::write(&path, "<xml but not a plist").unwrap();
        let err = OverrideStore::at(&path).read().unwrap_err();
        assert!(matches!(err, CoreError::OverrideRead { .. }));
    }

    #[test]
    fn write_is_atomic_no_tmp_left_behind() {
        let tmp = TempDir::new().unwrap();
        let s = store(&tmp);
        s.set_disabled("com.example.a", true).unwrap();
        assert!(!s.path().with_extension("plist.tmp").exists());
    }
}
