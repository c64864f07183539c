//! Convex hull of geodetic points lifted onto the sphere.
//!
//! Every point on a sphere is an extreme point of the set, so for valid
//! input the hull keeps all of them; the interesting output is the
//! triangulation (faces) and the derived area and volume.
//!
//! A hull face whose three corners share a great circle (its plane passes
//! through the centre) is `DegenerateInput`.  So is a face whose circle
//! carries a fourth input point; the solver reports that one.

use nalgebra::Vector3;
use sphere_core::{
    CartesianPoint, GeoError, GeoPoint, GeoResult, Radius, SphereConfig, to_cartesian,
};
use tracing::debug;

use crate::quickhull::convex_hull_3d;

/// Tolerance for the unit-sphere solver when no configuration is given.
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// Hull of a spherical point set.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvexHullResult {
    /// Sorted indices into the input of the points on the hull.
    pub vertices: Vec<usize>,
    /// Outward-oriented triangles, by input index.
    pub faces:    Vec<[usize; 3]>,
    /// All input points, lifted to the hull radius.
    pub points:   Vec<CartesianPoint>,
}

impl ConvexHullResult {
    /// Cartesian coordinates of the hull vertices, in `vertices` order.
    pub fn vertex_points(&self) -> Vec<CartesianPoint> {
        self.vertices.iter().map(|&i| self.points[i]).collect()
    }

    #[inline]
    fn corners(&self, [a, b, c]: [usize; 3]) -> [Vector3<f64>; 3] {
        [self.points[a].as_vector(), self.points[b].as_vector(), self.points[c].as_vector()]
    }

    /// Outward unit normal of face `face`, or `None` if out of range.
    pub fn face_normal(&self, face: usize) -> Option<Vector3<f64>> {
        let [a, b, c] = self.corners(*self.faces.get(face)?);
        (b - a).cross(&(c - a)).try_normalize(0.0)
    }

    /// Total area of the (flat) hull faces.
    pub fn surface_area(&self) -> f64 {
        self.faces
            .iter()
            .map(|&f| {
                let [a, b, c] = self.corners(f);
                0.5 * (b - a).cross(&(c - a)).norm()
            })
            .sum()
    }

    /// Enclosed volume, summed as signed tetrahedra against the origin.
    pub fn volume(&self) -> f64 {
        self.faces
            .iter()
            .map(|&f| {
                let [a, b, c] = self.corners(f);
                a.dot(&b.cross(&c)) / 6.0
            })
            .sum::<f64>()
            .abs()
    }
}

/// Convex hull of `points` on a sphere of `radius`.
///
/// # Errors
/// * [`GeoError::InsufficientPoints`] for fewer than four points or a set
///   confined to one plane (a single great or small circle).
/// * [`GeoError::DegenerateInput`] for repeated points or points that land
///   on an existing hull face.
pub fn hull(points: &[GeoPoint], radius: Radius) -> GeoResult<ConvexHullResult> {
    solve(points, radius, DEFAULT_TOLERANCE)
}

/// [`hull`] with radius and tolerance taken from `config`.
pub fn hull_with_config(points: &[GeoPoint], config: &SphereConfig) -> GeoResult<ConvexHullResult> {
    config.validate()?;
    solve(points, config.radius()?, config.tolerance)
}

fn solve(points: &[GeoPoint], radius: Radius, tolerance: f64) -> GeoResult<ConvexHullResult> {
    if points.len() < 4 {
        return Err(GeoError::InsufficientPoints(format!(
            "spherical hull needs at least 4 points, got {}",
            points.len()
        )));
    }

    let unit: Vec<[f64; 3]> =
        points.iter().map(|p| to_cartesian(*p, Radius::UNIT).as_array()).collect();
    let solved = convex_hull_3d(&unit, tolerance)?;

    for &[a, b, c] in &solved.faces {
        let [pa, pb, pc] = [a, b, c].map(|i| Vector3::from(unit[i]));
        let normal = (pb - pa).cross(&(pc - pa)).normalize();
        if normal.dot(&pa).abs() <= tolerance {
            return Err(GeoError::DegenerateInput(format!(
                "points {a}, {b} and {c} lie on one great circle"
            )));
        }
    }

    debug!(
        points = points.len(),
        vertices = solved.vertices.len(),
        faces = solved.faces.len(),
        "computed spherical hull"
    );

    Ok(ConvexHullResult {
        vertices: solved.vertices,
        faces:    solved.faces,
        points:   points.iter().map(|p| to_cartesian(*p, radius)).collect(),
    })
}
