//! CLI command implementations

pub mod completions;
pub mod generate;
pub mod init;
pub mod show;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use miette::{IntoDiagnostic, Result};

/// Write command output to a file, or to stdout when no path is given.
pub(crate) fn write_output(content: &str, output_path: Option<PathBuf>) -> Result<()> {
    match output_path {
        Some(path) => {
            let file = File::create(&path).into_diagnostic()?;
            let mut writer = BufWriter::new(file);
            writer.write_all(content.as_bytes()).into_diagnostic()?;
            println!("Preview written to: {}", path.display());
        }
        None => {
            print!("{content}");
        }
    }
    Ok(())
}
