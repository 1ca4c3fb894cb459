use clap::Parser;
use miette::Result;
use pif::cli::{Cli, Commands};
use pif::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .init();

    let printer = Printer::new();
    match cli.command {
        Commands::Info(args) => pif::cli::info::run(args, &printer)?,
        Commands::Export(args) => pif::cli::export::run(args, &printer)?,
        Commands::Import(args) => pif::cli::import::run(args, &printer)?,
        Commands::Palette(args) => pif::cli::palette::run(args, &printer)?,
        Commands::Text(args) => pif::cli::text::run(args, &printer)?,
    }

    Ok(())
}
