//! External collaborators: process execution, `launchctl` invocation, and
//! OS version detection.
//!
//! Everything goes through the [`CommandRunner`] seam so the reconciler can
//! be exercised against scripted fakes; [`SystemRunner`] is the real
//! implementation over `std::process::Command`.

mod error;
pub mod jobs;
pub mod runner;
pub mod version;

pub use error::LaunchctlError;
pub use runner::{CommandRunner, SystemRunner};
pub use version::VersionDetector;
