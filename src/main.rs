use clap::Parser;
use erd::cli::{Cli, Commands};
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Export(args) => erd::cli::export::run(args)?,
        Commands::List(args) => erd::cli::list::run(args)?,
        Commands::Validate(args) => erd::cli::validate::run(args)?,
        Commands::Completions(args) => erd::cli::completions::run(args)?,
    }

    Ok(())
}
