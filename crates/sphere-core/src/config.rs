//! Caller-facing configuration.
//!
//! No function in the workspace reads a global radius; each takes a
//! [`Radius`](crate::Radius).  `SphereConfig` is where an application keeps
//! the values it threads through those calls.

use crate::{GeoError, GeoResult, Radius};

/// Top-level configuration for a `sphere_stats` application.
///
/// Typically loaded from a TOML/JSON file by the application crate (with the
/// `serde` feature) and validated once before use.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SphereConfig {
    /// Sphere radius in the caller's distance unit.  Default: 6371 (km).
    pub radius: f64,

    /// Number of points sampled along a great-circle arc when the caller
    /// does not choose one.  Must be ≥ 2.  Default: 100.
    pub arc_samples: usize,

    /// Cruise speed for travel-time estimates, in radius units per hour.
    /// Default: 900 (a commercial jet, km/h).
    pub cruise_speed: f64,

    /// Absolute tolerance for geometric predicates on the unit sphere
    /// (coincidence, coplanarity).  Default: 1e-12.
    pub tolerance: f64,
}

impl SphereConfig {
    /// Check every field.  Returns the first violation found.
    pub fn validate(&self) -> GeoResult<()> {
        Radius::new(self.radius)?;
        if self.arc_samples < 2 {
            return Err(GeoError::invalid(format!(
                "arc_samples must be at least 2, got {}",
                self.arc_samples
            )));
        }
        if !(self.cruise_speed.is_finite() && self.cruise_speed > 0.0) {
            return Err(GeoError::invalid(format!(
                "cruise_speed must be positive and finite, got {}",
                self.cruise_speed
            )));
        }
        if !(self.tolerance.is_finite() && self.tolerance >= 0.0) {
            return Err(GeoError::invalid(format!(
                "tolerance must be non-negative, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }

    /// The configured radius as a validated [`Radius`].
    pub fn radius(&self) -> GeoResult<Radius> {
        Radius::new(self.radius)
    }
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            radius:       Radius::EARTH.get(),
            arc_samples:  100,
            cruise_speed: 900.0,
            tolerance:    1e-12,
        }
    }
}
