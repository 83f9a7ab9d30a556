//! OS version detection and the override-support gate.
//!
//! launchd gained the system-wide overrides document in 10.6; on earlier
//! releases the `Disabled` flag lives in the job plist alone. Versions
//! 10.0–10.3 predate usable job management entirely and are rejected.

use crate::error::LaunchctlError;
use crate::runner::CommandRunner;

pub const SW_VERS: &str = "/usr/bin/sw_vers";

/// Majors rejected outright at detection time.
const UNSUPPORTED_MAJORS: [&str; 4] = ["10.0", "10.1", "10.2", "10.3"];

/// Majors whose descriptor files alone govern enablement (no overrides).
const PRE_OVERRIDE_MAJORS: [&str; 6] = ["10.0", "10.1", "10.2", "10.3", "10.4", "10.5"];

/// Detects the OS major version once and memoizes it for its lifetime.
///
/// Not thread-safe by contract; give each worker its own detector or
/// serialize access.
#[derive(Debug, Default)]
pub struct VersionDetector {
    cached: Option<String>,
}

impl VersionDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// The OS major version (`"10.6"`, `"14"`), detected on first call via
    /// `sw_vers -productVersion` and memoized until [`flush`](Self::flush).
    pub fn major_version(
        &mut self,
        runner: &dyn CommandRunner,
    ) -> Result<String, LaunchctlError> {
        if let Some(cached) = &self.cached {
            return Ok(cached.clone());
        }

        let raw = runner
            .run(SW_VERS, &["-productVersion"])
            .map_err(|e| LaunchctlError::VersionUnavailable(e.to_string()))?;
        let product = raw.trim();
        let major = major_of(product).ok_or_else(|| {
            LaunchctlError::VersionUnavailable(format!("'{product}' is not a product version"))
        })?;

        if UNSUPPORTED_MAJORS.contains(&major.as_str()) {
            return Err(LaunchctlError::UnsupportedVersion { version: major });
        }

        tracing::debug!(major = %major, "detected OS version");
        self.cached = Some(major.clone());
        Ok(major)
    }

    /// True when the detected version consults the overrides document.
    pub fn supports_overrides(
        &mut self,
        runner: &dyn CommandRunner,
    ) -> Result<bool, LaunchctlError> {
        let major = self.major_version(runner)?;
        Ok(supports_overrides(&major))
    }

    /// Drop the memoized version so the next call re-detects.
    pub fn flush(&mut self) {
        self.cached = None;
    }
}

/// Derive the major version from a full product version string.
///
/// `10.x` releases are identified by their first two components (`10.6.8` →
/// `10.6`); later releases by the first alone (`14.2.1` → `14`). A bare
/// two-component `10.6` is a deprecated fact shape that is still accepted.
pub fn major_of(product: &str) -> Option<String> {
    let mut parts = product.split('.');
    let first = parts.next().filter(|p| is_numeric(p))?;
    if first != "10" {
        return Some(first.to_string());
    }
    let minor = parts.next().filter(|p| is_numeric(p))?;
    Some(format!("10.{minor}"))
}

/// False exactly for the pre-override majors `10.0`–`10.5`.
pub fn supports_overrides(major: &str) -> bool {
    !PRE_OVERRIDE_MAJORS.contains(&major)
}

fn is_numeric(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
}
