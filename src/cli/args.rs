//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand};

use crate::cli::commands::{
    completions::CompletionsArgs, generate::GenerateArgs, init::InitArgs, show::ShowArgs,
};

#[derive(Parser)]
#[command(name = "threadgen")]
#[command(author, version, about = "Custom thread profiles for Fusion 360")]
#[command(
    long_about = "Generates thread-library XML files for Fusion 360 from a JSON configuration, \
with fit offsets sized for 3d-printed parts instead of standardized tolerance classes."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate thread-library XML files from a configuration
    #[command(visible_alias = "gen")]
    Generate(GenerateArgs),

    /// Preview the threads a configuration describes
    Show(ShowArgs),

    /// Write a starter configuration file
    Init(InitArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}
