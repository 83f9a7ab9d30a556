//! Domain types for launchkit.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem paths.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed launchd job label, e.g. `com.example.mydaemon`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceName(pub String);

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ServiceName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ServiceName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Whether the daemon manager currently reports a job as loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Running,
    Stopped,
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceStatus::Running => write!(f, "running"),
            ServiceStatus::Stopped => write!(f, "stopped"),
        }
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// One enumerated service: descriptor label and path joined with the live
/// job listing. Recomputed per enumeration call, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceRecord {
    pub name: ServiceName,
    /// Absolute path of the job descriptor plist on disk.
    pub path: PathBuf,
    pub status: ServiceStatus,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newtype_display() {
        assert_eq!(ServiceName::from("com.example.foo").to_string(), "com.example.foo");
    }

    #[test]
    fn newtype_equality() {
        let a = ServiceName::from("x");
        let b = ServiceName::from(String::from("x"));
        assert_eq!(a, b);
    }

    #[test]
    fn status_display() {
        assert_eq!(ServiceStatus::Running.to_string(), "running");
        assert_eq!(ServiceStatus::Stopped.to_string(), "stopped");
    }

    #[test]
    fn record_serializes_with_lowercase_status() {
        let record = ServiceRecord {
            name: ServiceName::from("com.example.foo"),
            path: PathBuf::from("/Library/LaunchDaemons/com.example.foo.plist"),
            status: ServiceStatus::Stopped,
        };
        let json = serde_json::to_string(&record).expect("serialize");
        assert!(json.contains("\"stopped\""));
    }
}
