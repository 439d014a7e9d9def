//! `threadgen show` command - tabular preview of configured threads

use std::path::PathBuf;

use miette::{IntoDiagnostic, Result, WrapErr};
use tabled::{builder::Builder, settings::Style};

use crate::cli::commands::write_output;
use crate::cli::GlobalOpts;
use crate::config::{Config, ProfileConfig};
use crate::document::DIA_SIG_DIGITS;
use crate::format::{designator, format_sig};

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Path to the configuration JSON file
    #[arg(default_value = "./config.json", env = "THREADGEN_CONFIG")]
    pub config: PathBuf,

    /// Only show the profile with this name
    #[arg(long, short = 'p')]
    pub profile: Option<String>,

    /// Output to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: ShowArgs, _global: &GlobalOpts) -> Result<()> {
    let config = Config::load(&args.config)?;

    let selected: Vec<&ProfileConfig> = match &args.profile {
        Some(name) => {
            let found: Vec<&ProfileConfig> = config
                .profiles
                .iter()
                .filter(|entry| &entry.name == name)
                .collect();
            if found.is_empty() {
                return Err(miette::miette!(
                    "no profile named '{}' in {}",
                    name,
                    args.config.display()
                ));
            }
            found
        }
        None => config.profiles.iter().collect(),
    };

    let mut output = String::new();
    for (i, entry) in selected.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        let profile = entry
            .build_profile()
            .into_diagnostic()
            .wrap_err_with(|| format!("profile '{}'", entry.name))?;

        output.push_str(&format!(
            "# {} ({}, {} deg, {})\n\n",
            entry.display_name(),
            entry.family,
            designator(entry.angle),
            entry.unit
        ));

        let mut builder = Builder::default();
        builder.push_record([
            "Designation",
            "Gender",
            "Class",
            "MajorDia",
            "PitchDia",
            "MinorDia",
            "TapDrill",
        ]);
        for &size in profile.sizes() {
            for designation in profile.designations(size) {
                for thread in profile.threads(&designation) {
                    builder.push_record([
                        designation.name.clone(),
                        thread.gender.to_string(),
                        thread.class.clone(),
                        format_sig(thread.major_dia, DIA_SIG_DIGITS),
                        format_sig(thread.pitch_dia, DIA_SIG_DIGITS),
                        format_sig(thread.minor_dia, DIA_SIG_DIGITS),
                        thread
                            .tap_drill
                            .map(|drill| format_sig(drill, DIA_SIG_DIGITS))
                            .unwrap_or_default(),
                    ]);
                }
            }
        }
        output.push_str(&builder.build().with(Style::markdown()).to_string());
        output.push('\n');
    }

    write_output(&output, args.output)
}
