//! `launchkit status` — one service's running state and enablement.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use launchkit_core::ServiceStatus;

/// Arguments for `launchkit status`.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Job label, e.g. com.example.mydaemon.
    pub label: String,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct StatusJson {
    name: String,
    status: ServiceStatus,
    enabled: bool,
}

impl StatusArgs {
    pub fn run(self) -> Result<()> {
        let mut manager = super::system_manager()?;
        let status = manager
            .get_status(&self.label)
            .with_context(|| format!("failed to query status of '{}'", self.label))?;
        let enabled = manager
            .get_enabled(&self.label)
            .with_context(|| format!("failed to resolve enablement of '{}'", self.label))?;

        if self.json {
            let row = StatusJson {
                name: self.label,
                status,
                enabled,
            };
            println!("{}", serde_json::to_string_pretty(&row)?);
            return Ok(());
        }

        let status_str = match status {
            ServiceStatus::Running => "running".green().to_string(),
            ServiceStatus::Stopped => "stopped".red().to_string(),
        };
        let enabled_str = if enabled { "enabled" } else { "disabled" };
        println!("{} is {status_str} ({enabled_str})", self.label.bold());
        Ok(())
    }
}
