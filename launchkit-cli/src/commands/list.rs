//! `launchkit list` — service enumeration.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use launchkit_core::{ServiceRecord, ServiceStatus};

/// Arguments for `launchkit list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ServiceJson {
    name: String,
    path: String,
    status: ServiceStatus,
}

#[derive(Tabled)]
struct ServiceTableRow {
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "LABEL")]
    label: String,
    #[tabled(rename = "PATH")]
    path: String,
}

impl ListArgs {
    pub fn run(self) -> Result<()> {
        let mut manager = super::system_manager()?;
        let records = manager
            .list_services()
            .context("failed to enumerate launchd services")?;

        if self.json {
            print_json(&records)?;
        } else {
            print_table(&records);
        }
        Ok(())
    }
}

fn print_json(records: &[ServiceRecord]) -> Result<()> {
    let rows: Vec<ServiceJson> = records
        .iter()
        .map(|r| ServiceJson {
            name: r.name.to_string(),
            path: r.path.display().to_string(),
            status: r.status,
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

fn print_table(records: &[ServiceRecord]) {
    let rows: Vec<ServiceTableRow> = records
        .iter()
        .map(|r| ServiceTableRow {
            status: match r.status {
                ServiceStatus::Running => "running".green().to_string(),
                ServiceStatus::Stopped => "stopped".dimmed().to_string(),
            },
            label: r.name.to_string(),
            path: r.path.display().to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::blank());
    println!("{table}");
    println!("{} services", records.len());
}
