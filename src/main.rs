use clap::Parser;
use env_logger::Env;
use miette::Result;
use rgbsvg::cli::{Cli, Commands};
use rgbsvg::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(cli.log_level()))
        .format_timestamp(None)
        .init();

    let printer = Printer::new();

    match cli.command {
        Commands::Convert(args) => {
            rgbsvg::cli::convert::run(args, &printer)?;
        }
        Commands::Run(args) => {
            rgbsvg::cli::run::run(args, &printer)?;
        }
        Commands::Inspect(args) => rgbsvg::cli::inspect::run(args, &printer)?,
        Commands::Completions(args) => rgbsvg::cli::completions::run(args)?,
    }

    Ok(())
}
