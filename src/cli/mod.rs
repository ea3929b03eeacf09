//! CLI module for the VMH model gateway

pub mod serve;

use clap::{Parser, Subcommand};

/// VMH Model Gateway - resolves organism names to AGORA reconstructions
#[derive(Parser)]
#[command(name = "vmh-model-gateway")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the resolution API server
    Serve,
}
