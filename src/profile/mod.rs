//! Thread-profile families and the records they produce
//!
//! A thread profile turns configured pitches and fit offsets into named
//! designations per nominal size, and thread records per designation. The
//! profile is pure computation: it knows nothing about configuration files
//! or output documents, and it returns full-precision values. Display
//! rounding belongs to the rendering boundary.

pub mod metric;
pub mod sizes;

pub use metric::Metric3dPrinted;
pub use sizes::{SizeSpec, SizeSpecError};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which side of the mating pair a thread record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Bolt side: diameters shrink by the fit offset.
    External,
    /// Nut side: diameters grow by the fit offset.
    Internal,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::External => write!(f, "external"),
            Gender::Internal => write!(f, "internal"),
        }
    }
}

/// One named (nominal diameter, pitch) pairing within a family.
#[derive(Debug, Clone, PartialEq)]
pub struct Designation {
    /// Nominal (major) diameter the designation is built on.
    pub nominal_diameter: f64,

    /// Thread pitch.
    pub pitch: f64,

    /// Family-specific display name, e.g. "M8x1".
    pub name: String,
}

/// One manufacturable thread: a (designation, gender, offset) combination.
#[derive(Debug, Clone, PartialEq)]
pub struct Thread {
    /// Which side of the mating pair.
    pub gender: Gender,

    /// Fit-class label derived from the offset, e.g. "O.2".
    pub class: String,

    /// Major (outside) diameter.
    pub major_dia: f64,

    /// Pitch (effective) diameter.
    pub pitch_dia: f64,

    /// Minor (root) diameter.
    pub minor_dia: f64,

    /// Pilot-hole drill diameter; internal threads only. An explicit value
    /// of 0 is still a value, not "absent".
    pub tap_drill: Option<f64>,
}

/// Capability set every thread-profile family provides.
///
/// A family is constructed once per profile configuration, is immutable
/// afterwards, and may be queried from any number of threads concurrently.
pub trait ThreadProfile: std::fmt::Debug {
    /// The nominal sizes this profile covers, in configured order.
    fn sizes(&self) -> &[f64];

    /// All designations for one nominal size, in pitch-list order.
    fn designations(&self, size: f64) -> Vec<Designation>;

    /// All thread records for one designation: one external and one
    /// internal record per configured offset, external first, in
    /// offset-list order.
    fn threads(&self, designation: &Designation) -> Vec<Thread>;
}

/// Errors from constructing a thread profile.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    /// The height formula divides by tan(angle/2), which is zero, negative
    /// or undefined outside (0°, 180°).
    #[error("thread angle must be strictly between 0 and 180 degrees, got {angle}")]
    InvalidAngle { angle: f64 },
}

/// Registry of thread-profile families a configuration can select.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileFamily {
    /// ISO-style metric triangular threads with additive-manufacturing
    /// fit-offset classes.
    #[default]
    #[serde(rename = "metric_3d_printed")]
    Metric3dPrinted,
}

impl ProfileFamily {
    /// Construct the family's engine over the given parameters.
    pub fn build(
        self,
        sizes: Vec<f64>,
        pitches: Vec<f64>,
        offsets: Vec<f64>,
        angle_deg: f64,
    ) -> Result<Box<dyn ThreadProfile>, ProfileError> {
        match self {
            ProfileFamily::Metric3dPrinted => Ok(Box::new(Metric3dPrinted::new(
                sizes, pitches, offsets, angle_deg,
            )?)),
        }
    }
}

impl std::fmt::Display for ProfileFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileFamily::Metric3dPrinted => write!(f, "metric_3d_printed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_display() {
        assert_eq!(Gender::External.to_string(), "external");
        assert_eq!(Gender::Internal.to_string(), "internal");
    }

    #[test]
    fn test_family_default_is_metric() {
        assert_eq!(ProfileFamily::default(), ProfileFamily::Metric3dPrinted);
    }

    #[test]
    fn test_family_serde_name() {
        let family: ProfileFamily = serde_json::from_str("\"metric_3d_printed\"").unwrap();
        assert_eq!(family, ProfileFamily::Metric3dPrinted);
        assert!(serde_json::from_str::<ProfileFamily>("\"unified\"").is_err());
    }

    #[test]
    fn test_family_builds_usable_engine() {
        let profile = ProfileFamily::Metric3dPrinted
            .build(vec![8.0], vec![1.0], vec![0.1], 60.0)
            .unwrap();
        assert_eq!(profile.sizes(), &[8.0]);
        let designations = profile.designations(8.0);
        assert_eq!(designations.len(), 1);
        assert_eq!(profile.threads(&designations[0]).len(), 2);
    }

    #[test]
    fn test_family_build_rejects_bad_angle() {
        let err = ProfileFamily::Metric3dPrinted
            .build(vec![8.0], vec![1.0], vec![0.1], 180.0)
            .unwrap_err();
        assert!(matches!(err, ProfileError::InvalidAngle { .. }));
    }
}
