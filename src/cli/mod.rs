pub mod batch;
pub mod completions;
pub mod init;
pub mod parse;

use clap::{Parser, Subcommand};

/// typesift - Type annotation inference from API documentation
#[derive(Parser, Debug)]
#[command(name = "typesift")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Infer the annotation for a single description
    Parse(parse::ParseArgs),

    /// Process description files in bulk
    Batch(batch::BatchArgs),

    /// Initialize a typesift project (generates typesift.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
