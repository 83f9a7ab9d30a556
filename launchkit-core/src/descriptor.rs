//! A single launchd job descriptor plist.
//!
//! Jobs are enabled by default; they are only disabled when the `Disabled`
//! key is present and true (an explicit `false` also counts as enabled, but
//! the distinction from "absent" matters to the enablement resolver, so
//! [`JobDescriptor::disabled`] returns an `Option<bool>`).

use std::path::{Path, PathBuf};

use plist::{Dictionary, Value};

use crate::error::CoreError;
use crate::paths::{DISABLED_KEY, LABEL_KEY};
use crate::plist_io;

#[derive(Debug, Clone)]
pub struct JobDescriptor {
    path: PathBuf,
    body: Dictionary,
}

impl JobDescriptor {
    /// Parse the descriptor at `path` (binary or XML encoding).
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let body = plist_io::read_dictionary(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            body,
        })
    }

    /// Build a descriptor in memory without touching disk.
    pub fn new(path: impl Into<PathBuf>, body: Dictionary) -> Self {
        Self {
            path: path.into(),
            body,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The job's unique label, if the descriptor declares one.
    pub fn label(&self) -> Option<&str> {
        self.body.get(LABEL_KEY).and_then(Value::as_string)
    }

    /// The descriptor-level `Disabled` flag; `None` when the key is absent.
    pub fn disabled(&self) -> Option<bool> {
        self.body.get(DISABLED_KEY).and_then(Value::as_boolean)
    }

    /// Set `Disabled = true` in the document body.
    pub fn set_disabled(&mut self) {
        self.body
            .insert(DISABLED_KEY.to_string(), Value::Boolean(true));
    }

    /// Remove the `Disabled` key entirely (delete-on-enable).
    pub fn clear_disabled(&mut self) {
        self.body.remove(DISABLED_KEY);
    }

    /// Rewrite the descriptor in place (atomic replace at the same path).
    pub fn save(&self) -> Result<(), CoreError> {
        plist_io::write_dictionary_atomic(&self.path, &self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    fn body(label: &str, disabled: Option<bool>) -> Dictionary {
        let mut doc = Dictionary::new();
        doc.insert(LABEL_KEY.to_string(), Value::String(label.to_string()));
        if let Some(flag) = disabled {
            doc.insert(DISABLED_KEY.to_string(), Value::Boolean(flag));
        }
        doc
    }

    #[test]
    fn label_accessor() {
        let d = JobDescriptor::new("/tmp/a.plist", body("com.example.a", None));
        assert_eq!(d.label(), Some("com.example.a"));
    }

    // present-true, present-false, and absent are three distinct states
    #[rstest]
    #[case(Some(true), Some(true))]
    #[case(Some(false), Some(false))]
    #[case(None, None)]
    fn disabled_accessor_is_tristate(
        #[case] on_disk: Option<bool>,
        #[case] expected: Option<bool>,
    ) {
        let d = JobDescriptor::new("/tmp/a.plist", body("com.example.a", on_disk));
        assert_eq!(d.disabled(), expected);
    }

    #[test]
    fn clear_disabled_removes_the_key() {
        let mut d = JobDescriptor::new("/tmp/a.plist", body("com.example.a", Some(false)));
        d.clear_disabled();
        assert_eq!(d.disabled(), None);
    }

    #[test]
    fn save_rewrites_in_place() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("com.example.a.plist");
        plist_io::write_dictionary_atomic(&path, &body("com.example.a", None)).unwrap();

        let mut d = JobDescriptor::load(&path).unwrap();
        d.set_disabled();
        d.save().unwrap();

        let reread = JobDescriptor::load(&path).unwrap();
        assert_eq!(reread.disabled(), Some(true));
        assert_eq!(reread.label(), Some("com.example.a"));
    }
}
