//! Unit-vector helpers shared by the arc and projection engines.

use nalgebra::Vector3;
use sphere_core::{GeoError, GeoPoint, GeoResult};

/// `|û₁ × û₂|` below this is treated as zero: the endpoints are coincident
/// or antipodal and span no unique plane.
pub(crate) const PLANE_EPS: f64 = 1e-12;

/// Angle between two unit vectors in radians, in `[0, π]`.
///
/// `atan2(|a × b|, a · b)` stays accurate for nearly parallel and nearly
/// opposite vectors, where `acos(a · b)` loses half its digits.
#[inline]
pub(crate) fn angle_between(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    a.cross(b).norm().atan2(a.dot(b))
}

/// Unit normal of the great circle through `a` and `b`, oriented so that
/// walking from `a` to `b` along the minor arc is counter-clockwise about it.
pub(crate) fn great_circle_normal(a: GeoPoint, b: GeoPoint) -> GeoResult<Vector3<f64>> {
    let n = a.unit_vector().cross(&b.unit_vector());
    let len = n.norm();
    if len < PLANE_EPS {
        return Err(GeoError::DegenerateInput(format!(
            "{a} and {b} are coincident or antipodal; no unique great circle"
        )));
    }
    Ok(n / len)
}
