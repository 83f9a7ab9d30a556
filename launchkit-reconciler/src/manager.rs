//! The service state facade.
//!
//! launchd couples two independent state axes: running (loaded/unloaded)
//! and enabled (`Disabled` flag). `load -w` clears the flag as a side
//! effect; `unload -w` sets it. Start and stop therefore follow a
//! compensating-action pattern: perform the primitive, note the implied
//! enablement change, and issue a corrective enable/disable when it
//! contradicts the caller's stated intent.

use launchkit_core::{
    DescriptorIndex, JobDescriptor, OverrideState, OverrideStore, ServiceName, ServiceRecord,
    ServiceStatus,
};
use launchkit_launchctl::{jobs, CommandRunner, VersionDetector};

use crate::enablement;
use crate::error::ReconcileError;

/// Single-threaded reconciler over one runner, one descriptor index, one
/// overrides store, and one memoized version detector.
///
/// Caches live for the manager's lifetime; call
/// [`flush_cache`](Self::flush_cache) between logically independent work
/// units to force a rescan and re-detection.
#[derive(Debug)]
pub struct ServiceManager<R: CommandRunner> {
    runner: R,
    index: DescriptorIndex,
    overrides: OverrideStore,
    version: VersionDetector,
}

impl<R: CommandRunner> ServiceManager<R> {
    /// Manager over the standard system paths.
    pub fn system(runner: R) -> Self {
        Self::with_parts(runner, DescriptorIndex::system(), OverrideStore::system())
    }

    /// Manager over explicit index and overrides locations (tests, roots).
    pub fn with_parts(runner: R, index: DescriptorIndex, overrides: OverrideStore) -> Self {
        Self {
            runner,
            index,
            overrides,
            version: VersionDetector::new(),
        }
    }

    /// One record per descriptor label, tagged with live running state.
    ///
    /// The live listing is captured once per call; records are ephemeral
    /// and recomputed on the next enumeration.
    pub fn list_services(&mut self) -> Result<Vec<ServiceRecord>, ReconcileError> {
        let running = jobs::running_labels(&self.runner)?;
        let all = self.index.all()?;
        Ok(all
            .iter()
            .map(|(label, path)| ServiceRecord {
                name: ServiceName::from(label.as_str()),
                path: path.clone(),
                status: if running.contains(label) {
                    ServiceStatus::Running
                } else {
                    ServiceStatus::Stopped
                },
            })
            .collect())
    }

    /// Live status of one named service.
    pub fn get_status(&mut self, name: &str) -> Result<ServiceStatus, ReconcileError> {
        self.index.resolve(name)?;
        let running = jobs::running_labels(&self.runner)?;
        Ok(if running.contains(name) {
            ServiceStatus::Running
        } else {
            ServiceStatus::Stopped
        })
    }

    /// Start or stop without any opinion on the enabled axis.
    pub fn set_running(&mut self, name: &str, desired: bool) -> Result<(), ReconcileError> {
        if desired {
            self.start(name, None)
        } else {
            self.stop(name, None)
        }
    }

    /// Load the job, preserving `enable_intent` on the enabled axis.
    ///
    /// launchctl refuses to load disabled jobs without `-w`, and `-w`
    /// clears the `Disabled` flag; when that implicit enable contradicts an
    /// explicit `enable_intent` of false, a compensating disable follows.
    pub fn start(&mut self, name: &str, enable_intent: Option<bool>) -> Result<(), ReconcileError> {
        let path = self.index.resolve(name)?;
        let implicit_enable = !self.get_enabled(name)?;

        jobs::load(&self.runner, &path, implicit_enable).map_err(|source| {
            ReconcileError::StartFailed {
                name: name.to_string(),
                path: path.clone(),
                source,
            }
        })?;
        tracing::info!(service = name, "started");

        if implicit_enable && enable_intent == Some(false) {
            tracing::debug!(service = name, "load -w cleared Disabled; restoring disable");
            self.disable(name)?;
        }
        Ok(())
    }

    /// Unload the job, preserving `enable_intent` on the enabled axis.
    ///
    /// Keepalive jobs cannot be stopped without `-w`, which sets the
    /// `Disabled` flag; a compensating enable follows when the caller
    /// wanted the job to stay enabled.
    pub fn stop(&mut self, name: &str, enable_intent: Option<bool>) -> Result<(), ReconcileError> {
        let path = self.index.resolve(name)?;
        let implicit_disable = self.get_enabled(name)?;

        jobs::unload(&self.runner, &path, implicit_disable).map_err(|source| {
            ReconcileError::StopFailed {
                name: name.to_string(),
                path: path.clone(),
                source,
            }
        })?;
        tracing::info!(service = name, "stopped");

        if implicit_disable && enable_intent == Some(true) {
            tracing::debug!(service = name, "unload -w set Disabled; restoring enable");
            self.enable(name)?;
        }
        Ok(())
    }

    /// Stop then start, carrying the same enable intent through both.
    pub fn restart(
        &mut self,
        name: &str,
        enable_intent: Option<bool>,
    ) -> Result<(), ReconcileError> {
        self.stop(name, enable_intent)?;
        self.start(name, enable_intent)
    }

    /// Resolved enablement for one named service.
    pub fn get_enabled(&mut self, name: &str) -> Result<bool, ReconcileError> {
        let path = self.index.resolve(name)?;
        let descriptor = JobDescriptor::load(&path)?;
        let override_state = if self.version.supports_overrides(&self.runner)? {
            self.overrides.state_for(name)?
        } else {
            OverrideState::Absent
        };
        Ok(enablement::resolve(descriptor.disabled(), override_state))
    }

    pub fn set_enabled(&mut self, name: &str, desired: bool) -> Result<(), ReconcileError> {
        if desired {
            self.enable(name)
        } else {
            self.disable(name)
        }
    }

    /// Enable the job. Skips the write entirely when already enabled.
    ///
    /// With override support this writes the overrides document; the job
    /// plist is never touched. Pre-overrides, the `Disabled` key is deleted
    /// from the descriptor itself.
    pub fn enable(&mut self, name: &str) -> Result<(), ReconcileError> {
        let path = self.index.resolve(name)?;
        if self.get_enabled(name)? {
            return Ok(());
        }
        if self.version.supports_overrides(&self.runner)? {
            self.overrides.set_disabled(name, false)?;
        } else {
            let mut descriptor = JobDescriptor::load(&path)?;
            descriptor.clear_disabled();
            descriptor.save()?;
        }
        tracing::info!(service = name, "enabled");
        Ok(())
    }

    /// Disable the job. Always writes.
    pub fn disable(&mut self, name: &str) -> Result<(), ReconcileError> {
        let path = self.index.resolve(name)?;
        if self.version.supports_overrides(&self.runner)? {
            self.overrides.set_disabled(name, true)?;
        } else {
            let mut descriptor = JobDescriptor::load(&path)?;
            descriptor.set_disabled();
            descriptor.save()?;
        }
        tracing::info!(service = name, "disabled");
        Ok(())
    }

    /// The underlying runner (used by callers inspecting issued commands).
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Drop the descriptor index and version memo so the next operation
    /// rescans the directories and re-detects the OS version.
    pub fn flush_cache(&mut self) {
        self.index.flush();
        self.version.flush();
    }
}
