//! `threadgen init` command - write a starter configuration

use std::path::PathBuf;

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::config::Config;

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Where to write the configuration
    #[arg(default_value = "./config.json")]
    pub path: PathBuf,

    /// Overwrite an existing configuration
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs) -> Result<()> {
    if args.path.exists() && !args.force {
        println!(
            "{} {} already exists",
            style("!").yellow(),
            style(args.path.display()).cyan()
        );
        println!();
        println!(
            "Use {} to overwrite it",
            style("threadgen init --force").yellow()
        );
        return Ok(());
    }

    if let Some(parent) = args.path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .into_diagnostic()
                .wrap_err_with(|| format!("cannot create directory {}", parent.display()))?;
        }
    }

    std::fs::write(&args.path, Config::starter())
        .into_diagnostic()
        .wrap_err_with(|| format!("cannot write {}", args.path.display()))?;

    println!(
        "{} Wrote starter configuration to {}",
        style("✓").green(),
        style(args.path.display()).cyan()
    );
    println!();
    println!("Next steps:");
    println!(
        "  {} Preview the threads it describes",
        style("threadgen show").yellow()
    );
    println!(
        "  {} Generate the XML files",
        style("threadgen generate").yellow()
    );
    Ok(())
}
