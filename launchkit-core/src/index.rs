//! Label → path index over the descriptor directories.
//!
//! The scan walks [`crate::paths::DESCRIPTOR_DIRS`] in priority order and
//! records the first path seen for each label; duplicates later in scan
//! order are silently ignored. A completed scan is cached for the life of
//! the index — [`DescriptorIndex::flush`] is the only invalidation, there is
//! no filesystem change detection.

use std::collections::BTreeMap;
use std::path::PathBuf;

use plist::Value;

use crate::error::{io_err, CoreError};
use crate::paths::{descriptor_dirs, LABEL_KEY};
use crate::plist_io;

#[derive(Debug)]
pub struct DescriptorIndex {
    dirs: Vec<PathBuf>,
    cache: BTreeMap<String, PathBuf>,
    complete: bool,
}

impl Default for DescriptorIndex {
    fn default() -> Self {
        Self::system()
    }
}

impl DescriptorIndex {
    /// Index over the standard descriptor directories.
    pub fn system() -> Self {
        Self::with_dirs(descriptor_dirs())
    }

    /// Index over an explicit directory list, highest priority first.
    pub fn with_dirs(dirs: Vec<PathBuf>) -> Self {
        Self {
            dirs,
            cache: BTreeMap::new(),
            complete: false,
        }
    }

    /// The descriptor path for `label`.
    ///
    /// A cold lookup may short-circuit the directory scan as soon as the
    /// label is seen; the partially filled cache is kept but not marked
    /// complete, so a later [`all`](Self::all) still finishes the walk.
    pub fn resolve(&mut self, label: &str) -> Result<PathBuf, CoreError> {
        if !self.complete {
            if let Some(path) = self.cache.get(label) {
                return Ok(path.clone());
            }
            if let Some(path) = self.scan(Some(label))? {
                return Ok(path);
            }
        }
        self.cache
            .get(label)
            .cloned()
            .ok_or_else(|| CoreError::JobNotFound {
                label: label.to_string(),
            })
    }

    /// The full label → path mapping, one entry per unique label.
    pub fn all(&mut self) -> Result<&BTreeMap<String, PathBuf>, CoreError> {
        if !self.complete {
            self.scan(None)?;
        }
        Ok(&self.cache)
    }

    /// Drop the cache so the next lookup rescans the directories.
    pub fn flush(&mut self) {
        self.cache.clear();
        self.complete = false;
    }

    /// Walk the directories in priority order, filling the cache.
    ///
    /// With a `target` label, returns its path as soon as it is encountered,
    /// leaving the scan incomplete. Without one, the scan runs to the end
    /// and marks the cache complete. Entries within a directory are visited
    /// in sorted filename order so duplicate resolution is deterministic.
    fn scan(&mut self, target: Option<&str>) -> Result<Option<PathBuf>, CoreError> {
        for dir in &self.dirs {
            if !dir.is_dir() {
                continue;
            }
            let mut entries: Vec<_> = std::fs::read_dir(dir)
                .map_err(|e| io_err(dir, e))?
                .filter_map(|e| e.ok())
                .collect();
            entries.sort_by_key(|e| e.file_name());

            for entry in entries {
                if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
                    continue;
                }
                let path = entry.path();
                let body = plist_io::read_dictionary(&path)?;
                let Some(label) = body.get(LABEL_KEY).and_then(Value::as_string) else {
                    tracing::debug!(path = %path.display(), "descriptor has no Label, skipping");
                    continue;
                };
                if !self.cache.contains_key(label) {
                    self.cache.insert(label.to_string(), path.clone());
                }
                if target == Some(label) {
                    return Ok(Some(path));
                }
            }
        }
        tracing::debug!(labels = self.cache.len(), "descriptor scan complete");
        self.complete = true;
        Ok(None)
    }
}
