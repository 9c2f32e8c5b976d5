//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// Schedulify - session-backed daily schedule storage with AI suggestions
#[derive(Parser, Debug)]
#[command(name = "schedulify")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the schedule backend server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
}
