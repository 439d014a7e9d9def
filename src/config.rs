//! Configuration file loading and per-profile parameters

use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::profile::{ProfileError, ProfileFamily, SizeSpec, SizeSpecError, ThreadProfile};

/// Top-level configuration: a list of thread profiles to generate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub profiles: Vec<ProfileConfig>,
}

/// One profile entry in the configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProfileConfig {
    /// Profile name; also the stem of the generated file.
    pub name: String,

    /// Display name shown inside the CAD library; defaults to `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_name: Option<String>,

    /// Measurement unit recorded in the document, e.g. "mm".
    pub unit: String,

    /// Nominal sizes, as an explicit list or a "start:end[,step]" range.
    pub sizes: SizeSpec,

    /// Thread flank angle in degrees.
    pub angle: f64,

    /// Pitches offered for every size.
    pub pitches: Vec<f64>,

    /// Fit offsets; each yields one external/internal pair per designation.
    pub offsets: Vec<f64>,

    /// Which geometry engine interprets the parameters.
    #[serde(default)]
    pub family: ProfileFamily,
}

impl Config {
    /// Load a configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source, &path.to_string_lossy())
    }

    /// Parse a configuration from JSON text. `filename` labels the source
    /// in error reports.
    pub fn parse(source: &str, filename: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(source)
            .map_err(|err| ConfigParseError::from_serde_error(&err, source, filename).into())
    }

    /// Starter configuration written by `threadgen init`.
    pub fn starter() -> &'static str {
        r#"{
  "profiles": [
    {
      "name": "Metric-3D-printed",
      "customName": "Metric 3D printed",
      "unit": "mm",
      "angle": 60,
      "sizes": "3:12",
      "pitches": [0.5, 0.75, 1, 1.25, 1.5, 1.75, 2],
      "offsets": [0.1, 0.15, 0.2, 0.25]
    }
  ]
}
"#
    }
}

impl ProfileConfig {
    /// Name shown inside the CAD library; falls back to the profile name.
    pub fn display_name(&self) -> &str {
        self.custom_name.as_deref().unwrap_or(&self.name)
    }

    /// Expand the size specification and construct the geometry engine.
    pub fn build_profile(&self) -> Result<Box<dyn ThreadProfile>, ProfileBuildError> {
        let sizes = self.sizes.expand()?;
        Ok(self.family.build(
            sizes,
            self.pitches.clone(),
            self.offsets.clone(),
            self.angle,
        )?)
    }
}

/// Errors from loading a configuration file.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("cannot read configuration file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ConfigParseError),
}

/// Configuration parse error with source location.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid configuration: {message}")]
#[diagnostic(code(threadgen::config::parse))]
pub struct ConfigParseError {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    #[help]
    help: Option<String>,

    /// The underlying error message
    message: String,
}

impl ConfigParseError {
    /// Create a parse error from a serde_json error.
    pub fn from_serde_error(err: &serde_json::Error, source: &str, filename: &str) -> Self {
        let offset = line_col_to_offset(source, err.line().max(1), err.column().max(1));
        let message = err.to_string();
        let help = generate_help(&message);

        Self {
            src: NamedSource::new(filename, source.to_string()),
            span: SourceSpan::from(offset..offset.saturating_add(1)),
            help,
            message,
        }
    }
}

/// Errors from turning a profile entry into a geometry engine.
#[derive(Debug, Error)]
pub enum ProfileBuildError {
    #[error(transparent)]
    Sizes(#[from] SizeSpecError),

    #[error(transparent)]
    Profile(#[from] ProfileError),
}

/// Convert line/column to byte offset
fn line_col_to_offset(source: &str, line: usize, column: usize) -> usize {
    let line_start: usize = source
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(source.len())
}

/// Generate helpful suggestions based on error message
fn generate_help(message: &str) -> Option<String> {
    let msg_lower = message.to_lowercase();

    if msg_lower.contains("trailing comma") {
        return Some("Remove the comma after the last item in the list or object.".to_string());
    }

    if msg_lower.contains("key must be a string") {
        return Some("JSON object keys need double quotes: {\"profiles\": [...]}".to_string());
    }

    if msg_lower.contains("expected `,` or `]`") || msg_lower.contains("expected `,` or `}`") {
        return Some("Add commas between items: [0.1, 0.2, 0.3]".to_string());
    }

    if msg_lower.contains("missing field") {
        return Some(
            "Every profile needs name, unit, sizes, angle, pitches and offsets.".to_string(),
        );
    }

    if msg_lower.contains("unknown field") {
        return Some("Check the field spelling against the names listed above.".to_string());
    }

    if msg_lower.contains("invalid type") {
        return Some(
            "Check the value's type; sizes takes a list of numbers or a range string.".to_string(),
        );
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Gender;

    const MINIMAL: &str = r#"{
        "profiles": [
            {
                "name": "test-threads",
                "unit": "mm",
                "sizes": [8],
                "angle": 60,
                "pitches": [1],
                "offsets": [0.1]
            }
        ]
    }"#;

    #[test]
    fn test_parse_minimal_config() {
        let config = Config::parse(MINIMAL, "test.json").unwrap();
        assert_eq!(config.profiles.len(), 1);
        let entry = &config.profiles[0];
        assert_eq!(entry.name, "test-threads");
        assert_eq!(entry.unit, "mm");
        assert_eq!(entry.angle, 60.0);
        assert_eq!(entry.family, ProfileFamily::Metric3dPrinted);
        // no customName, so the profile name stands in
        assert_eq!(entry.display_name(), "test-threads");
    }

    #[test]
    fn test_custom_name_overrides_display_name() {
        let source = MINIMAL.replace(
            "\"name\": \"test-threads\",",
            "\"name\": \"test-threads\", \"customName\": \"Test Threads\",",
        );
        let config = Config::parse(&source, "test.json").unwrap();
        assert_eq!(config.profiles[0].display_name(), "Test Threads");
        assert_eq!(config.profiles[0].name, "test-threads");
    }

    #[test]
    fn test_explicit_family_name() {
        let source = MINIMAL.replace(
            "\"unit\": \"mm\",",
            "\"unit\": \"mm\", \"family\": \"metric_3d_printed\",",
        );
        let config = Config::parse(&source, "test.json").unwrap();
        assert_eq!(config.profiles[0].family, ProfileFamily::Metric3dPrinted);
    }

    #[test]
    fn test_build_profile_expands_range_sizes() {
        let source = MINIMAL.replace("\"sizes\": [8],", "\"sizes\": \"4:10,2\",");
        let config = Config::parse(&source, "test.json").unwrap();
        let profile = config.profiles[0].build_profile().unwrap();
        assert_eq!(profile.sizes(), &[4.0, 6.0, 8.0, 10.0]);
        let threads = profile.threads(&profile.designations(8.0)[0]);
        assert_eq!(threads[0].gender, Gender::External);
    }

    #[test]
    fn test_build_profile_rejects_bad_size_spec() {
        let source = MINIMAL.replace("\"sizes\": [8],", "\"sizes\": \"bogus\",");
        let config = Config::parse(&source, "test.json").unwrap();
        let err = config.profiles[0].build_profile().unwrap_err();
        assert!(matches!(err, ProfileBuildError::Sizes(_)));
    }

    #[test]
    fn test_build_profile_rejects_bad_angle() {
        let source = MINIMAL.replace("\"angle\": 60,", "\"angle\": 180,");
        let config = Config::parse(&source, "test.json").unwrap();
        let err = config.profiles[0].build_profile().unwrap_err();
        assert!(matches!(
            err,
            ProfileBuildError::Profile(ProfileError::InvalidAngle { .. })
        ));
    }

    #[test]
    fn test_syntax_error_reports_parse_diagnostic() {
        let err = Config::parse("{\"profiles\": [}", "broken.json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_field_mentions_the_field() {
        let source = MINIMAL.replace("\"unit\": \"mm\",", "");
        let err = Config::parse(&source, "test.json").unwrap_err();
        assert!(err.to_string().contains("unit"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let source = MINIMAL.replace("\"pitches\"", "\"pitch\"");
        let err = Config::parse(&source, "test.json").unwrap_err();
        assert!(err.to_string().contains("unknown field"));
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nope.json");
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn test_load_round_trip_through_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, MINIMAL).unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.profiles[0].name, "test-threads");
    }

    #[test]
    fn test_starter_config_is_usable() {
        let config = Config::parse(Config::starter(), "starter.json").unwrap();
        assert_eq!(config.profiles.len(), 1);
        let entry = &config.profiles[0];
        assert_eq!(entry.name, "Metric-3D-printed");
        assert_eq!(entry.display_name(), "Metric 3D printed");
        let profile = entry.build_profile().unwrap();
        assert_eq!(profile.sizes().len(), 10);
    }

    #[test]
    fn test_line_col_to_offset() {
        let source = "line1\nline2\nline3";
        assert_eq!(line_col_to_offset(source, 1, 1), 0);
        assert_eq!(line_col_to_offset(source, 2, 1), 6);
        assert_eq!(line_col_to_offset(source, 3, 1), 12);
        // out of range clamps to the end
        assert_eq!(line_col_to_offset(source, 9, 9), source.len());
    }

    #[test]
    fn test_help_generation() {
        assert!(generate_help("trailing comma at line 3").is_some());
        assert!(generate_help("missing field `unit`").is_some());
        assert!(generate_help("unknown field `pitch`").is_some());
        assert!(generate_help("some random error").is_none());
    }
}
