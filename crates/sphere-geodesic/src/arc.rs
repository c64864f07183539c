//! Great-circle interpolation.
//!
//! # Sampling schemes
//!
//! [`arc_points`] is spherical linear interpolation: samples are evenly
//! spaced in arc length.  [`nlerp_points`] interpolates the chord and pushes
//! each sample back onto the sphere; the samples lie on the same great
//! circle but bunch towards the middle of long arcs.

use std::f64::consts::FRAC_PI_2;

use nalgebra::Vector3;
use sphere_core::{
    CartesianPoint, GeoError, GeoPoint, GeoResult, Radius, great_circle_distance, to_geodetic,
};

use crate::vecmath::{PLANE_EPS, angle_between};

fn check_count(count: usize) -> GeoResult<()> {
    if count < 2 {
        return Err(GeoError::InvalidArgument(format!(
            "arc sampling needs at least 2 points, got {count}"
        )));
    }
    Ok(())
}

/// `count` points along the minor great-circle arc from `p1` to `p2`.
///
/// The first element is `p1` and the last is `p2`, exactly.  When the two
/// endpoints coincide every element is `p1` (or `p2` for the last one);
/// there is no division by `sin 0`.
///
/// # Errors
/// - [`GeoError::InvalidArgument`] if `count < 2`.
/// - [`GeoError::DegenerateInput`] if the endpoints are antipodal, since
///   every great circle through them splits into two equal half arcs.
pub fn arc_points(p1: GeoPoint, p2: GeoPoint, radius: Radius, count: usize) -> GeoResult<Vec<GeoPoint>> {
    check_count(count)?;

    let u1 = p1.unit_vector();
    let u2 = p2.unit_vector();
    let omega = angle_between(&u1, &u2);
    let sin_omega = omega.sin();

    let mut out = Vec::with_capacity(count);
    out.push(p1);

    if sin_omega < PLANE_EPS {
        if omega > FRAC_PI_2 {
            return Err(GeoError::DegenerateInput(format!(
                "{p1} and {p2} are antipodal; the minor arc is undefined"
            )));
        }
        out.extend(std::iter::repeat_n(p1, count - 2));
        out.push(p2);
        return Ok(out);
    }

    let r = radius.get();
    let last = (count - 1) as f64;
    for i in 1..count - 1 {
        let t = i as f64 / last;
        let a = ((1.0 - t) * omega).sin() / sin_omega;
        let b = (t * omega).sin() / sin_omega;
        let v: Vector3<f64> = (u1 * a + u2 * b) * r;
        out.push(to_geodetic(CartesianPoint::from(v))?);
    }
    out.push(p2);
    Ok(out)
}

/// `count` points from `p1` to `p2` by normalised linear interpolation of
/// the unit vectors.
///
/// # Errors
/// Same conditions as [`arc_points`].
pub fn nlerp_points(p1: GeoPoint, p2: GeoPoint, count: usize) -> GeoResult<Vec<GeoPoint>> {
    check_count(count)?;

    let u1 = p1.unit_vector();
    let u2 = p2.unit_vector();
    if (u1 + u2).norm() < PLANE_EPS {
        return Err(GeoError::DegenerateInput(format!(
            "{p1} and {p2} are antipodal; the chord passes through the centre"
        )));
    }

    let last = (count - 1) as f64;
    let mut out = Vec::with_capacity(count);
    out.push(p1);
    for i in 1..count - 1 {
        let t = i as f64 / last;
        let v = u1 * (1.0 - t) + u2 * t;
        out.push(to_geodetic(CartesianPoint::from(v))?);
    }
    out.push(p2);
    Ok(out)
}

/// Point halfway along the minor arc, at distance `radius` from the centre.
///
/// # Errors
/// [`GeoError::DegenerateInput`] when the endpoints are antipodal (the
/// unit vectors sum to zero).
pub fn midpoint(p1: GeoPoint, p2: GeoPoint, radius: Radius) -> GeoResult<CartesianPoint> {
    let sum = p1.unit_vector() + p2.unit_vector();
    let len = sum.norm();
    if len < PLANE_EPS {
        return Err(GeoError::DegenerateInput(format!(
            "{p1} and {p2} are antipodal; the midpoint is undefined"
        )));
    }
    Ok(CartesianPoint::from(sum * (radius.get() / len)))
}

/// Sum of great-circle distances between consecutive waypoints.
/// Zero for fewer than two waypoints.
pub fn total_path_distance(waypoints: &[GeoPoint], radius: Radius) -> f64 {
    waypoints
        .windows(2)
        .map(|w| great_circle_distance(w[0], w[1], radius))
        .sum()
}
