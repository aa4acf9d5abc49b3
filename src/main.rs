use clap::Parser;
use miette::Result;
use typesift::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse(args) => typesift::cli::parse::run(args)?,
        Commands::Batch(args) => typesift::cli::batch::run(args)?,
        Commands::Init(args) => typesift::cli::init::run(args)?,
        Commands::Completions(args) => typesift::cli::completions::run(args)?,
    }

    Ok(())
}
