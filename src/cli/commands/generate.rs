//! `threadgen generate` command - render configured profiles to XML files

use std::path::PathBuf;

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::GlobalOpts;
use crate::config::Config;
use crate::document;
use crate::format::designator;

#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// Path to the configuration JSON file
    #[arg(default_value = "./config.json", env = "THREADGEN_CONFIG")]
    pub config: PathBuf,

    /// Directory the XML files are written to
    #[arg(long, short = 'o', default_value = ".")]
    pub out_dir: PathBuf,
}

pub fn run(args: GenerateArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load(&args.config)?;

    if config.profiles.is_empty() {
        if !global.quiet {
            println!(
                "{} {} lists no profiles, nothing to generate",
                style("!").yellow(),
                style(args.config.display()).cyan()
            );
        }
        return Ok(());
    }

    std::fs::create_dir_all(&args.out_dir)
        .into_diagnostic()
        .wrap_err_with(|| format!("cannot create output directory {}", args.out_dir.display()))?;

    for entry in &config.profiles {
        let profile = entry
            .build_profile()
            .into_diagnostic()
            .wrap_err_with(|| format!("profile '{}'", entry.name))?;

        if global.verbose && !global.quiet {
            println!("Generating {}", style(entry.display_name()).cyan());
        }

        let mut designation_count = 0usize;
        let mut thread_count = 0usize;
        for &size in profile.sizes() {
            let designations = profile.designations(size);
            let size_threads: usize = designations
                .iter()
                .map(|designation| profile.threads(designation).len())
                .sum();
            designation_count += designations.len();
            thread_count += size_threads;
            if global.verbose && !global.quiet {
                println!(
                    "  size {}: {} designations, {} threads",
                    style(designator(size)).bold(),
                    designations.len(),
                    size_threads
                );
            }
        }

        let xml = document::render(entry, profile.as_ref())
            .into_diagnostic()
            .wrap_err_with(|| format!("profile '{}'", entry.name))?;

        let path = args.out_dir.join(format!("{}.xml", entry.name));
        std::fs::write(&path, &xml)
            .into_diagnostic()
            .wrap_err_with(|| format!("cannot write {}", path.display()))?;

        if !global.quiet {
            println!(
                "{} Wrote {} ({} sizes, {} designations, {} threads)",
                style("✓").green(),
                style(path.display()).cyan(),
                profile.sizes().len(),
                designation_count,
                thread_count
            );
        }
    }

    Ok(())
}
