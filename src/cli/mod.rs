//! Command-line interface for wharf.
//!
//! Subcommands are grouped by noun (`wharf artifact list`), matching the
//! registry's resource model.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod artifact;

/// wharf - inspect artifacts pushed to a deployment registry
#[derive(Parser, Debug)]
#[command(name = "wharf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect pushed artifacts
    Artifact {
        #[command(subcommand)]
        command: artifact::ArtifactCommands,
    },
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Artifact { command } => artifact::execute(command).await,
        }
    }
}
