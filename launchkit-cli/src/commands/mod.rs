pub mod list;
pub mod service;
pub mod status;

use anyhow::Result;

use launchkit_launchctl::SystemRunner;
use launchkit_reconciler::ServiceManager;

/// A manager over the real system paths and a real process runner.
///
/// launchd only exists on macOS; everywhere else the commands fail fast
/// with a clear message instead of scanning directories that cannot exist.
pub(crate) fn system_manager() -> Result<ServiceManager<SystemRunner>> {
    ensure_macos()?;
    Ok(ServiceManager::system(SystemRunner))
}

#[cfg(target_os = "macos")]
fn ensure_macos() -> Result<()> {
    Ok(())
}

#[cfg(not(target_os = "macos"))]
fn ensure_macos() -> Result<()> {
    anyhow::bail!("launchd service management is only supported on macOS")
}
