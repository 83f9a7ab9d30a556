//! Launchkit — launchd service state CLI.
//!
//! # Usage
//!
//! ```text
//! launchkit list [--json]
//! launchkit status <label> [--json]
//! launchkit start <label> [--keep-disabled]
//! launchkit stop <label> [--keep-enabled]
//! launchkit restart <label>
//! launchkit enable <label>
//! launchkit disable <label>
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{list::ListArgs, status::StatusArgs};

#[derive(Parser, Debug)]
#[command(
    name = "launchkit",
    version,
    about = "Inspect and reconcile launchd service state",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Enumerate all services with their running state.
    List(ListArgs),

    /// Show running state and enablement of one service.
    Status(StatusArgs),

    /// Load a service (compensating for the implicit enable of `load -w`).
    Start {
        /// Job label, e.g. com.example.mydaemon.
        label: String,
        /// Keep the service disabled even though loading required `-w`.
        #[arg(long)]
        keep_disabled: bool,
    },

    /// Unload a service (compensating for the implicit disable of `unload -w`).
    Stop {
        /// Job label.
        label: String,
        /// Keep the service enabled even though unloading required `-w`.
        #[arg(long)]
        keep_enabled: bool,
    },

    /// Stop then start a service.
    Restart {
        /// Job label.
        label: String,
    },

    /// Mark a service enabled (no-op if already enabled).
    Enable {
        /// Job label.
        label: String,
    },

    /// Mark a service disabled.
    Disable {
        /// Job label.
        label: String,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::List(args) => args.run(),
        Commands::Status(args) => args.run(),
        Commands::Start {
            label,
            keep_disabled,
        } => commands::service::start(&label, keep_disabled),
        Commands::Stop {
            label,
            keep_enabled,
        } => commands::service::stop(&label, keep_enabled),
        Commands::Restart { label } => commands::service::restart(&label),
        Commands::Enable { label } => commands::service::set_enabled(&label, true),
        Commands::Disable { label } => commands::service::set_enabled(&label, false),
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
