pub mod completions;
pub mod convert;
pub mod inspect;
pub mod run;

use clap::{ArgAction, Parser, Subcommand};

/// rgbsvg - Rasterize simple SVG drawings and script image edits
#[derive(Parser, Debug)]
#[command(name = "rgbsvg")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Default log filter for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert SVG drawings to PNG images
    Convert(convert::ConvertArgs),

    /// Run an image script
    Run(run::RunArgs),

    /// Print the shapes parsed from an SVG file as JSON
    Inspect(inspect::InspectArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
