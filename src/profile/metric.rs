//! Metric triangular threads with printed-part fit offsets
//!
//! Geometry follows the ISO metric screw-thread relations (see
//! https://en.wikipedia.org/wiki/ISO_metric_screw_thread): the fundamental
//! triangle height H derived from pitch and flank angle fixes the pitch and
//! minor diameters. Instead of standardized tolerance classes, each
//! configured fit offset shifts all three diameters inward for bolts and
//! outward for nuts, producing one mating pair per offset.

use super::{Designation, Gender, ProfileError, Thread, ThreadProfile};
use crate::format::{designator, fraction_digits};

/// Metric thread profile sized for 3d-printed parts.
#[derive(Debug, Clone)]
pub struct Metric3dPrinted {
    sizes: Vec<f64>,
    pitches: Vec<f64>,
    offsets: Vec<f64>,
    angle_deg: f64,
}

impl Metric3dPrinted {
    /// Build a profile over the given sizes, pitches and fit offsets.
    ///
    /// The thread angle must lie strictly inside (0°, 180°); anything else
    /// fails here, before any geometry is derived from it.
    pub fn new(
        sizes: Vec<f64>,
        pitches: Vec<f64>,
        offsets: Vec<f64>,
        angle_deg: f64,
    ) -> Result<Self, ProfileError> {
        if !angle_deg.is_finite() || angle_deg <= 0.0 || angle_deg >= 180.0 {
            return Err(ProfileError::InvalidAngle { angle: angle_deg });
        }
        Ok(Self {
            sizes,
            pitches,
            offsets,
            angle_deg,
        })
    }

    /// Height of the fundamental thread triangle for one pitch.
    fn height(&self, pitch: f64) -> f64 {
        let half_angle = (self.angle_deg / 2.0).to_radians();
        (pitch / 2.0) / half_angle.tan()
    }
}

impl ThreadProfile for Metric3dPrinted {
    fn sizes(&self) -> &[f64] {
        &self.sizes
    }

    fn designations(&self, size: f64) -> Vec<Designation> {
        self.pitches
            .iter()
            .map(|&pitch| Designation {
                nominal_diameter: size,
                pitch,
                name: format!("M{}x{}", designator(size), designator(pitch)),
            })
            .collect()
    }

    fn threads(&self, designation: &Designation) -> Vec<Thread> {
        let nominal = designation.nominal_diameter;
        let height = self.height(designation.pitch);
        let pitch_dia = nominal - 2.0 * (3.0 * height / 8.0);
        let minor_dia = nominal - 2.0 * (5.0 * height / 8.0);

        let mut threads = Vec::with_capacity(self.offsets.len() * 2);
        for &offset in &self.offsets {
            let class = format!("O.{}", fraction_digits(offset));
            threads.push(Thread {
                gender: Gender::External,
                class: class.clone(),
                major_dia: nominal - offset,
                pitch_dia: pitch_dia - offset,
                minor_dia: minor_dia - offset,
                tap_drill: None,
            });
            threads.push(Thread {
                gender: Gender::Internal,
                class,
                major_dia: nominal + offset,
                pitch_dia: pitch_dia + offset,
                minor_dia: minor_dia + offset,
                tap_drill: Some(nominal - designation.pitch),
            });
        }
        threads
    }
}
