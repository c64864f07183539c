//! Minimum distance from a point to great circles, arcs and polygons.
//!
//! # Great circle vs. bounded segment
//!
//! [`point_to_segment_distance`] measures the cross-track distance to the
//! *whole* great circle through the two endpoints.  A point far beyond one
//! end of a short segment can therefore report a small distance.  Callers
//! that need the distance to the arc itself use
//! [`point_to_bounded_segment_distance`], which falls back to the nearer
//! endpoint when the foot of the perpendicular lies outside the arc.
//! Polygon distance is built on the great-circle form.

use std::f64::consts::FRAC_PI_2;

use nalgebra::Vector3;
use sphere_core::{GeoPoint, GeoResult, Radius, great_circle_distance};

use crate::Polygon;
use crate::vecmath::great_circle_normal;

/// Projection of `p` onto the plane with unit normal `n`.  `None` when `p`
/// is the plane's pole (the projection has no direction).
fn foot_of_perpendicular(p: &Vector3<f64>, n: &Vector3<f64>) -> Option<Vector3<f64>> {
    let proj = p - n * p.dot(n);
    let len = proj.norm();
    if len == 0.0 { None } else { Some(proj / len) }
}

/// Distance from `point` to the great circle through `seg_a` and `seg_b`.
///
/// `radius · acos(û_p · foot)` with the cosine clamped to `[-1, 1]`.  A
/// point at the circle's pole is a quarter circumference from every point
/// on it and returns exactly `π/2 · radius`.
///
/// # Errors
/// [`GeoError::DegenerateInput`](sphere_core::GeoError::DegenerateInput)
/// when `seg_a` and `seg_b` are equal or antipodal.
pub fn point_to_segment_distance(
    point: GeoPoint,
    seg_a: GeoPoint,
    seg_b: GeoPoint,
    radius: Radius,
) -> GeoResult<f64> {
    let n = great_circle_normal(seg_a, seg_b)?;
    let p = point.unit_vector();
    let angle = match foot_of_perpendicular(&p, &n) {
        Some(foot) => p.dot(&foot).clamp(-1.0, 1.0).acos(),
        None => FRAC_PI_2,
    };
    Ok(radius.get() * angle)
}

/// Distance from `point` to the minor arc from `seg_a` to `seg_b`.
///
/// Equal to [`point_to_segment_distance`] when the perpendicular foot lies
/// on the arc; otherwise the great-circle distance to the nearer endpoint.
///
/// # Errors
/// Same as [`point_to_segment_distance`].
pub fn point_to_bounded_segment_distance(
    point: GeoPoint,
    seg_a: GeoPoint,
    seg_b: GeoPoint,
    radius: Radius,
) -> GeoResult<f64> {
    let n = great_circle_normal(seg_a, seg_b)?;
    let p = point.unit_vector();

    if let Some(foot) = foot_of_perpendicular(&p, &n) {
        let ua = seg_a.unit_vector();
        let ub = seg_b.unit_vector();
        // On the arc iff a → foot and foot → b both turn the same way as a → b.
        let after_a = ua.cross(&foot).dot(&n) >= 0.0;
        let before_b = foot.cross(&ub).dot(&n) >= 0.0;
        if after_a && before_b {
            return Ok(radius.get() * p.dot(&foot).clamp(-1.0, 1.0).acos());
        }
    }

    let to_a = great_circle_distance(point, seg_a, radius);
    let to_b = great_circle_distance(point, seg_b, radius);
    Ok(to_a.min(to_b))
}

/// Minimum great-circle cross-track distance from `point` to any edge of
/// the closed polygon `vertices` (last vertex joins the first).
///
/// # Errors
/// - [`GeoError::InvalidArgument`](sphere_core::GeoError::InvalidArgument)
///   for fewer than 3 vertices.
/// - [`GeoError::DegenerateInput`](sphere_core::GeoError::DegenerateInput)
///   if any edge joins equal or antipodal vertices.
pub fn point_to_polygon_distance(point: GeoPoint, vertices: &[GeoPoint], radius: Radius) -> GeoResult<f64> {
    Polygon::check_vertex_count(vertices.len())?;
    let n = vertices.len();
    (0..n).try_fold(f64::INFINITY, |best, i| {
        let d = point_to_segment_distance(point, vertices[i], vertices[(i + 1) % n], radius)?;
        Ok(best.min(d))
    })
}
