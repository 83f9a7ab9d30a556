//! Error types for launchkit-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from descriptor and override persistence.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Underlying I/O failure, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A plist could not be parsed (either binary or XML encoding).
    #[error("failed to parse plist at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: plist::Error,
    },

    /// A plist parsed, but its root is not a dictionary.
    #[error("plist at {path} does not have a dictionary at its root")]
    NotDictionary { path: PathBuf },

    /// A document could not be serialized back to plist XML.
    #[error("failed to serialize plist for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: plist::Error,
    },

    /// No descriptor in any scanned directory carries this label.
    #[error("unable to find launchd job descriptor for label '{label}'")]
    JobNotFound { label: String },

    /// The overrides document exists but is malformed.
    #[error("malformed overrides document at {path}: {source}")]
    OverrideRead {
        path: PathBuf,
        #[source]
        source: plist::Error,
    },
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> CoreError {
    CoreError::Io {
        path: path.into(),
        source,
    }
}
