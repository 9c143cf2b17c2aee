//! CLI command definitions for the `relay` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod admin;
pub mod history;
pub mod user;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use relay_types::config::RelayConfig;

/// Two-party chat relay with a lorem-ipsum bot.
#[derive(Parser)]
#[command(name = "relay", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Directory holding `relay.db` and `config.toml`.
    #[arg(long, global = true, env = "RELAY_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Apply command-line flags on top of values loaded from config.toml.
    pub fn apply_overrides(&self, config: &mut RelayConfig) {
        if let Commands::Serve { host, port } = &self.command {
            if let Some(host) = host {
                config.server.host = host.clone();
            }
            if let Some(port) = port {
                config.server.port = *port;
            }
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Seed users and start the HTTP + WebSocket server.
    Serve {
        /// Address to bind (overrides config.toml).
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides config.toml).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Insert the seed users if fewer than two exist.
    Seed,

    /// Drop and recreate all tables.
    Reset {
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the current user.
    Whoami,

    /// Show message history.
    History {
        /// Only messages sent or received by this user.
        #[arg(long)]
        user_id: Option<i64>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
