//! Geographic and Cartesian value types.
//!
//! Everything here is `f64`; cross-track distances and hull orientation
//! tests need the precision.

use std::fmt;

use nalgebra::Vector3;

use crate::{GeoError, GeoResult};

// ── GeoPoint ──────────────────────────────────────────────────────────────────

/// A latitude/longitude pair in degrees on a sphere.
///
/// Latitude is checked against `[-90, 90]` at construction.  Longitude only
/// has to be finite: values outside `(-180, 180]` are kept as given, so two
/// points 360° apart compare unequal even though they are the same place.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(f64, f64)", into = "(f64, f64)"))]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> GeoResult<Self> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(GeoError::invalid(format!(
                "coordinates must be finite, got ({lat}, {lon})"
            )));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(GeoError::invalid(format!(
                "latitude {lat} outside [-90, 90]"
            )));
        }
        Ok(Self { lat, lon })
    }

    /// Skip validation; for in-crate callers whose inputs are in range by
    /// construction.
    #[inline]
    pub(crate) fn new_unchecked(lat: f64, lon: f64) -> Self {
        debug_assert!((-90.0..=90.0).contains(&lat) && lon.is_finite());
        Self { lat, lon }
    }

    #[inline]
    pub fn lat(self) -> f64 {
        self.lat
    }

    #[inline]
    pub fn lon(self) -> f64 {
        self.lon
    }

    /// `(lat, lon)` in radians.
    #[inline]
    pub fn to_radians(self) -> (f64, f64) {
        (self.lat.to_radians(), self.lon.to_radians())
    }

    /// Unit vector pointing at this location.
    #[inline]
    pub fn unit_vector(self) -> Vector3<f64> {
        let (phi, lambda) = self.to_radians();
        let (sin_phi, cos_phi) = phi.sin_cos();
        let (sin_lambda, cos_lambda) = lambda.sin_cos();
        Vector3::new(cos_phi * cos_lambda, cos_phi * sin_lambda, sin_phi)
    }

    /// Bit-exact key for hashing.  `-0.0` and `0.0` are folded together so
    /// the key agrees with `PartialEq`.
    #[inline]
    pub fn bits(self) -> (u64, u64) {
        ((self.lat + 0.0).to_bits(), (self.lon + 0.0).to_bits())
    }
}

impl TryFrom<(f64, f64)> for GeoPoint {
    type Error = GeoError;

    fn try_from((lat, lon): (f64, f64)) -> GeoResult<Self> {
        GeoPoint::new(lat, lon)
    }
}

impl From<GeoPoint> for (f64, f64) {
    #[inline]
    fn from(p: GeoPoint) -> (f64, f64) {
        (p.lat, p.lon)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

// ── CartesianPoint ────────────────────────────────────────────────────────────

/// A 3-D position in the same linear unit as the radius that produced it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CartesianPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CartesianPoint {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn as_vector(self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn as_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Distance from the sphere centre.
    #[inline]
    pub fn norm(self) -> f64 {
        self.as_vector().norm()
    }

    /// Straight-line distance to `other`.
    #[inline]
    pub fn distance(self, other: CartesianPoint) -> f64 {
        (self.as_vector() - other.as_vector()).norm()
    }
}

impl From<Vector3<f64>> for CartesianPoint {
    #[inline]
    fn from(v: Vector3<f64>) -> Self {
        Self { x: v.x, y: v.y, z: v.z }
    }
}

impl fmt::Display for CartesianPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.3}, {:.3}, {:.3}]", self.x, self.y, self.z)
    }
}

// ── Radius ────────────────────────────────────────────────────────────────────

/// Sphere radius.  Always positive and finite.
///
/// All distances returned by the workspace scale linearly with this value and
/// are in its unit (kilometres for [`Radius::EARTH`]).
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct Radius(f64);

impl Radius {
    /// Mean Earth radius in kilometres.
    pub const EARTH: Radius = Radius(6_371.0);

    /// The unit sphere.
    pub const UNIT: Radius = Radius(1.0);

    pub fn new(value: f64) -> GeoResult<Self> {
        if value.is_finite() && value > 0.0 {
            Ok(Radius(value))
        } else {
            Err(GeoError::invalid(format!(
                "radius must be positive and finite, got {value}"
            )))
        }
    }

    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Radius {
    fn default() -> Self {
        Radius::EARTH
    }
}

impl TryFrom<f64> for Radius {
    type Error = GeoError;

    fn try_from(value: f64) -> GeoResult<Self> {
        Radius::new(value)
    }
}

impl From<Radius> for f64 {
    #[inline]
    fn from(r: Radius) -> f64 {
        r.0
    }
}

impl fmt::Display for Radius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
