use crate::commands::{build::BuildArgs, inspect::InspectArgs};

pub mod build;
pub mod inspect;

/// Subcommands for treelm.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Learn a vocabulary and its word classes from sentence files.
    Build(BuildArgs),

    /// Summarize a saved vocabulary table.
    Inspect(InspectArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Build(cmd) => cmd.run(),
            Commands::Inspect(cmd) => cmd.run(),
        }
    }
}
