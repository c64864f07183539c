//! Coordinate transforms and the two canonical distance metrics.
//!
//! Higher crates call these rather than re-deriving the trigonometry.

use crate::{CartesianPoint, GeoError, GeoPoint, GeoResult, Radius};

/// Geodetic → Cartesian on a sphere of the given radius.
///
/// `x` points at (0°, 0°), `y` at (0°, 90°E), `z` at the north pole.
#[inline]
pub fn to_cartesian(point: GeoPoint, radius: Radius) -> CartesianPoint {
    CartesianPoint::from(point.unit_vector() * radius.get())
}

/// Cartesian → geodetic.  The radius is implied by the vector length and
/// does not need to match any particular sphere.
///
/// The `asin` argument is clamped to `[-1, 1]` to absorb rounding.
///
/// # Errors
/// [`GeoError::DegenerateInput`] for the zero vector (no direction) and
/// [`GeoError::InvalidArgument`] for non-finite components.
pub fn to_geodetic(point: CartesianPoint) -> GeoResult<GeoPoint> {
    let norm = point.norm();
    if !norm.is_finite() {
        return Err(GeoError::invalid(format!(
            "cartesian point {point} is not finite"
        )));
    }
    if norm == 0.0 {
        return Err(GeoError::degenerate("zero vector has no geodetic direction"));
    }
    let lat = (point.z / norm).clamp(-1.0, 1.0).asin().to_degrees();
    let lon = point.y.atan2(point.x).to_degrees();
    GeoPoint::new(lat, lon)
}

/// Central angle between two points in radians (haversine form).
///
/// The intermediate `a` is clamped to `[0, 1]` before the `atan2`, so
/// near-antipodal inputs cannot produce NaN.  Equal points give exactly 0.
pub fn central_angle(p1: GeoPoint, p2: GeoPoint) -> f64 {
    let (lat1, lon1) = p1.to_radians();
    let (lat2, lon2) = p2.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let a = (d_lat * 0.5).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);
    let a = a.clamp(0.0, 1.0);

    2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Haversine great-circle distance, in the unit of `radius`.
///
/// Symmetric in its arguments.  Antipodal points are `π · radius` apart.
#[inline]
pub fn great_circle_distance(p1: GeoPoint, p2: GeoPoint, radius: Radius) -> f64 {
    radius.get() * central_angle(p1, p2)
}

/// Straight-line distance through the sphere's interior.
///
/// Never exceeds [`great_circle_distance`] for the same inputs (a chord is
/// shorter than its arc); the two agree only for equal points.
#[inline]
pub fn chord_distance(p1: GeoPoint, p2: GeoPoint, radius: Radius) -> f64 {
    to_cartesian(p1, radius).distance(to_cartesian(p2, radius))
}
