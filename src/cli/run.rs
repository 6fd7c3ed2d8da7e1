//! Run command implementation.
//!
//! Executes an image script.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::Manifest;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::script::Script;

/// Run an image script
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Script file to run
    pub script: PathBuf,

    /// Directory that file names in the script are resolved against
    #[arg(long)]
    pub root: Option<PathBuf>,
}

/// Returns the number of commands executed.
pub fn run(args: RunArgs, printer: &Printer) -> Result<usize> {
    let root = match args.root {
        Some(root) => root,
        None => default_root(&args.script)?,
    };
    log::debug!("Script root: {}", root.display());

    printer.status("Running", &display_path(&args.script));

    let mut script = Script::new(root);
    script.run_file(&args.script)?;

    printer.status(
        "Finished",
        &plural(script.executed(), "command", "commands"),
    );
    Ok(script.executed())
}

/// The manifest's `root` if one sits next to the script, else the script's directory.
fn default_root(script: &Path) -> Result<PathBuf> {
    let dir = script
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let root = Manifest::find(dir)?
        .and_then(|m| m.root)
        .map(|root| dir.join(root))
        .unwrap_or_else(|| dir.to_path_buf());

    Ok(root)
}
