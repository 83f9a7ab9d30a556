use thiserror::Error;

/// Error surface for command execution, listing, and version detection.
#[derive(Debug, Error)]
pub enum LaunchctlError {
    /// The command could not be spawned at all.
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The command ran and exited non-zero.
    #[error("`{command}` failed (status {status}): {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// `launchctl list` errored or produced no output.
    #[error("unable to query loaded jobs: {0}")]
    ListingFailed(String),

    /// No source yielded an OS product version.
    #[error("could not determine OS product version: {0}")]
    VersionUnavailable(String),

    /// The detected version predates launchd job management support.
    #[error("macOS {version} is not supported")]
    UnsupportedVersion { version: String },
}
