//! Launchkit core library — domain types, plist persistence, errors.
//!
//! Public API surface:
//! - [`types`] — newtypes and domain structs
//! - [`error`] — [`CoreError`]
//! - [`descriptor`] — one launchd job plist, addressed by file path
//! - [`overrides`] — the system-wide overrides document
//! - [`index`] — label → path cache over the descriptor directories
//! - [`paths`] — well-known directory constants and scan order

pub mod descriptor;
pub mod error;
pub mod index;
pub mod overrides;
pub mod paths;
pub mod plist_io;
pub mod types;

pub use descriptor::JobDescriptor;
pub use error::CoreError;
pub use index::DescriptorIndex;
pub use overrides::{OverrideState, OverrideStore};
pub use types::{ServiceName, ServiceRecord, ServiceStatus};
