use std::path::PathBuf;

/// Plist key holding a job's unique label.
pub const LABEL_KEY: &str = "Label";

/// Plist key holding a job's disabled flag.
pub const DISABLED_KEY: &str = "Disabled";

/// Descriptor directories in scan priority order. The order is a design
/// constant: local agents, local daemons, system agents, system daemons.
/// The first directory containing a label wins on duplicates.
pub const DESCRIPTOR_DIRS: [&str; 4] = [
    "/Library/LaunchAgents",
    "/Library/LaunchDaemons",
    "/System/Library/LaunchAgents",
    "/System/Library/LaunchDaemons",
];

/// The single system-wide overrides document.
pub const OVERRIDES_PATH: &str = "/var/db/launchd.db/com.apple.launchd/overrides.plist";

/// `DESCRIPTOR_DIRS` as owned paths, in scan order.
pub fn descriptor_dirs() -> Vec<PathBuf> {
    DESCRIPTOR_DIRS.iter().map(PathBuf::from).collect()
}

/// `OVERRIDES_PATH` as an owned path.
pub fn overrides_path() -> PathBuf {
    PathBuf::from(OVERRIDES_PATH)
}
