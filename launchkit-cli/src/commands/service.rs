//! `launchkit start/stop/restart/enable/disable` — state transitions.

use anyhow::{Context, Result};

pub fn start(label: &str, keep_disabled: bool) -> Result<()> {
    let mut manager = super::system_manager()?;
    let enable_intent = keep_disabled.then_some(false);
    manager
        .start(label, enable_intent)
        .with_context(|| format!("failed to start '{label}'"))?;
    println!("started {label}");
    Ok(())
}

pub fn stop(label: &str, keep_enabled: bool) -> Result<()> {
    let mut manager = super::system_manager()?;
    let enable_intent = keep_enabled.then_some(true);
    manager
        .stop(label, enable_intent)
        .with_context(|| format!("failed to stop '{label}'"))?;
    println!("stopped {label}");
    Ok(())
}

pub fn restart(label: &str) -> Result<()> {
    let mut manager = super::system_manager()?;
    manager
        .restart(label, None)
        .with_context(|| format!("failed to restart '{label}'"))?;
    println!("restarted {label}");
    Ok(())
}

pub fn set_enabled(label: &str, desired: bool) -> Result<()> {
    let mut manager = super::system_manager()?;
    manager
        .set_enabled(label, desired)
        .with_context(|| format!("failed to update enablement of '{label}'"))?;
    println!("{} {label}", if desired { "enabled" } else { "disabled" });
    Ok(())
}
