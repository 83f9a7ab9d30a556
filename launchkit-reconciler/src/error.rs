//! Error types for launchkit-reconciler.

use std::path::PathBuf;

use thiserror::Error;

use launchkit_core::CoreError;
use launchkit_launchctl::LaunchctlError;

/// All errors that can arise from reconciliation operations.
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// Descriptor or overrides persistence failure.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Command execution or version detection failure.
    #[error(transparent)]
    Launchctl(#[from] LaunchctlError),

    /// `launchctl load` failed for a resolved job.
    #[error("unable to start service '{name}' at path {path}: {source}")]
    StartFailed {
        name: String,
        path: PathBuf,
        #[source]
        source: LaunchctlError,
    },

    /// `launchctl unload` failed for a resolved job.
    #[error("unable to stop service '{name}' at path {path}: {source}")]
    StopFailed {
        name: String,
        path: PathBuf,
        #[source]
        source: LaunchctlError,
    },
}
