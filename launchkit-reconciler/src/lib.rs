//! # launchkit-reconciler
//!
//! Reconciles desired service state against launchd's two sources of truth:
//! job descriptor plists on disk and the live `launchctl list` output.
//!
//! [`ServiceManager`] is the facade; [`enablement`] holds the pure tri-state
//! merge of descriptor- and override-level `Disabled` flags.

pub mod enablement;
mod error;
mod manager;

pub use error::ReconcileError;
pub use manager::ServiceManager;
