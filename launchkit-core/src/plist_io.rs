//! Plist read/write helpers shared by descriptors and the overrides store.
//!
//! Reads accept either on-disk encoding (binary or XML); writes always emit
//! XML. Write flow: serialize → `.tmp` sibling → `rename`, so a reader never
//! observes a partially written document.

use std::path::Path;

use plist::{Dictionary, Value};

use crate::error::{io_err, CoreError};

/// Read the plist at `path` and return its root dictionary.
pub fn read_dictionary(path: &Path) -> Result<Dictionary, CoreError> {
    let value = Value::from_file(path).map_err(|e| CoreError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    value
        .into_dictionary()
        .ok_or_else(|| CoreError::NotDictionary {
            path: path.to_path_buf(),
        })
}

/// Atomically replace the plist at `path` with `doc`, serialized as XML.
///
/// The `.tmp` sibling lives in the target's directory (same filesystem, so
/// the rename cannot hit EXDEV). Parent directories are created if absent.
pub fn write_dictionary_atomic(path: &Path, doc: &Dictionary) -> Result<(), CoreError> {
    let mut buf = Vec::new();
    Value::Dictionary(doc.clone())
        .to_writer_xml(&mut buf)
        .map_err(|e| CoreError::Serialize {
            path: path.to_path_buf(),
            source: e,
        })?;

    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            std::fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;
        }
    }

    let tmp = path.with_extension("plist.tmp");
    std::fs::write(&tmp, &buf).map_err(|e| io_err(&tmp, e))?;
    std::fs::rename(&tmp, path).map_err(|e| io_err(path, e))?;
    Ok(())
}
