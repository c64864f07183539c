//! Deterministic point-set generation.
//!
//! # Determinism strategy
//!
//! A `PointSampler` wraps a `SmallRng` seeded from a single `u64`.  Child
//! samplers are derived with the same golden-ratio mixing the seed uses, so
//! a test or batch job can hand each worker its own stream and still
//! reproduce every point set from the root seed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{GeoError, GeoPoint, GeoResult};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded generator of points on the sphere.
pub struct PointSampler(SmallRng);

impl PointSampler {
    pub fn new(seed: u64) -> Self {
        PointSampler(SmallRng::seed_from_u64(seed))
    }

    /// Derive an independent child stream.
    pub fn child(&mut self, offset: u64) -> PointSampler {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        PointSampler(SmallRng::seed_from_u64(child_seed))
    }

    /// One point drawn uniformly over the sphere's surface (area-uniform,
    /// not uniform in latitude).
    pub fn uniform(&mut self) -> GeoPoint {
        // z = sin(lat) uniform in [-1, 1] is the Archimedes equal-area map.
        let z: f64 = self.0.gen_range(-1.0..=1.0);
        let lon: f64 = self.0.gen_range(-180.0..180.0);
        let lat = z.asin().to_degrees().clamp(-90.0, 90.0);
        GeoPoint::new_unchecked(lat, lon)
    }

    /// `n` points drawn uniformly over the sphere.
    pub fn uniform_points(&mut self, n: usize) -> Vec<GeoPoint> {
        (0..n).map(|_| self.uniform()).collect()
    }

    /// `n` points scattered within `half_deg` degrees (lat and lon) of
    /// `center`, latitude clamped to the poles.
    ///
    /// # Errors
    /// [`GeoError::InvalidArgument`] if `half_deg` is negative or not finite.
    pub fn cluster(&mut self, center: GeoPoint, half_deg: f64, n: usize) -> GeoResult<Vec<GeoPoint>> {
        if !(half_deg.is_finite() && half_deg >= 0.0) {
            return Err(GeoError::invalid(format!(
                "cluster half-width must be non-negative, got {half_deg}"
            )));
        }
        (0..n)
            .map(|_| {
                let d_lat: f64 = self.0.gen_range(-half_deg..=half_deg);
                let d_lon: f64 = self.0.gen_range(-half_deg..=half_deg);
                GeoPoint::new((center.lat() + d_lat).clamp(-90.0, 90.0), center.lon() + d_lon)
            })
            .collect()
    }
}
