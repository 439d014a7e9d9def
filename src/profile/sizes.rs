//! Size-specification parsing
//!
//! Profile configurations give nominal sizes either as an explicit list or
//! as a compact `"start:end[,step]"` range string. `SizeSpec` deserializes
//! both shapes and expands them into the ordered size sequence the geometry
//! engine iterates.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A size field as it appears in a profile configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeSpec {
    /// Explicit ordered list, passed through unchanged (order and
    /// duplicates preserved).
    List(Vec<f64>),

    /// Compact range shorthand: `"start:end"` or `"start:end,step"`,
    /// inclusive integer bounds, step defaults to 1.
    Range(String),
}

impl SizeSpec {
    /// Expand into the ordered sequence of nominal sizes.
    ///
    /// Lists come back unchanged. Range strings produce the inclusive
    /// integer range; a start past the end yields an empty sequence. Any
    /// string that is not a range is an error so that a typo in a config
    /// surfaces instead of generating an empty document.
    pub fn expand(&self) -> Result<Vec<f64>, SizeSpecError> {
        match self {
            SizeSpec::List(values) => Ok(values.clone()),
            SizeSpec::Range(spec) => expand_range(spec),
        }
    }
}

/// Errors from expanding a size specification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SizeSpecError {
    #[error("size spec {spec:?} is not a list or a \"start:end[,step]\" range")]
    UnrecognizedFormat { spec: String },

    #[error("size spec {spec:?} is invalid: {reason}")]
    InvalidRange { spec: String, reason: String },
}

fn expand_range(spec: &str) -> Result<Vec<f64>, SizeSpecError> {
    if !spec.contains(':') {
        return Err(SizeSpecError::UnrecognizedFormat {
            spec: spec.to_string(),
        });
    }

    let segments: Vec<&str> = spec.split(',').collect();
    if segments.len() > 2 {
        return Err(invalid(spec, "expected at most one comma (\"start:end,step\")"));
    }

    let bounds: Vec<&str> = segments[0].split(':').collect();
    if bounds.len() != 2 {
        return Err(invalid(spec, "expected exactly one colon (\"start:end\")"));
    }
    let start = parse_int(spec, bounds[0], "start")?;
    let end = parse_int(spec, bounds[1], "end")?;

    let step = match segments.get(1) {
        Some(raw) => parse_int(spec, raw, "step")?,
        None => 1,
    };
    if step < 1 {
        return Err(invalid(spec, "step must be a positive integer"));
    }

    let mut sizes = Vec::new();
    let mut value = start;
    while value <= end {
        sizes.push(value as f64);
        value += step;
    }
    Ok(sizes)
}

fn parse_int(spec: &str, raw: &str, part: &str) -> Result<i64, SizeSpecError> {
    raw.trim()
        .parse()
        .map_err(|_| invalid(spec, &format!("{part} {raw:?} is not an integer")))
}

fn invalid(spec: &str, reason: &str) -> SizeSpecError {
    SizeSpecError::InvalidRange {
        spec: spec.to_string(),
        reason: reason.to_string(),
    }
}
