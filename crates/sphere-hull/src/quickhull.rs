//! General incremental (beneath-beyond) convex hull in three dimensions.
//!
//! # Algorithm
//!
//! 1. Seed a tetrahedron from extreme points: the lowest-x point, the point
//!    farthest from it, the point farthest from that line, and the point
//!    farthest from that plane.  Failure at any step means the input spans
//!    fewer than three dimensions.
//! 2. Insert the remaining points in input order.  A point strictly above at
//!    least one face is *beyond*: the faces it sees are removed and the
//!    horizon (edges between a visible and an invisible face) is coned to
//!    the new point.  A point on or below every face is skipped.
//! 3. Check the finished hull: no input point other than a face's own
//!    corners may lie on that face's plane.  A repeated point, a point on a
//!    face or edge, and four coplanar hull points all fail here.
//!
//! Faces are kept counter-clockwise seen from outside, so the right-hand
//! normal `(b - a) × (c - a)` points outward.  Every directed edge belongs
//! to exactly one live face; its twin `(b, a)` belongs to the neighbour.
//!
//! Work is `O(n · F)`; adequate for the few thousand points a spherical
//! scatter usually holds.

use nalgebra::Vector3;
use rustc_hash::FxHashMap;
use sphere_core::{GeoError, GeoResult};

/// Hull of a 3-D point set, by index into the input slice.
#[derive(Clone, Debug, PartialEq)]
pub struct Hull3 {
    /// Sorted, deduplicated indices of input points on the hull.
    pub vertices: Vec<usize>,
    /// Outward-oriented triangles.
    pub faces:    Vec<[usize; 3]>,
}

#[derive(Clone, Debug)]
struct Face {
    v:      [usize; 3],
    normal: Vector3<f64>,
    offset: f64,
    alive:  bool,
}

impl Face {
    #[inline]
    fn signed_distance(&self, p: &Vector3<f64>) -> f64 {
        self.normal.dot(p) - self.offset
    }

    #[inline]
    fn edges(&self) -> [(usize, usize); 3] {
        let [a, b, c] = self.v;
        [(a, b), (b, c), (c, a)]
    }
}

/// Unit normal and plane offset of triangle `(a, b, c)`, or `None` when the
/// three points are (nearly) collinear.
fn plane(pts: &[Vector3<f64>], [a, b, c]: [usize; 3], eps: f64) -> Option<(Vector3<f64>, f64)> {
    let n = (pts[b] - pts[a]).cross(&(pts[c] - pts[a]));
    let len = n.norm();
    if len <= eps {
        return None;
    }
    let n = n / len;
    Some((n, n.dot(&pts[a])))
}

/// Convex hull of `points`.
///
/// `eps` is the absolute distance below which a point counts as lying on a
/// plane; scale it to the spread of the input.
///
/// # Errors
/// * [`GeoError::InsufficientPoints`] for fewer than four points, or points
///   that are all coincident, collinear or coplanar.
/// * [`GeoError::DegenerateInput`] for an input point on the plane of a hull
///   face it is not a corner of (a repeated point, a point on a face or
///   edge, or a fourth vertex coplanar with a face).
/// * [`GeoError::InvalidArgument`] for a non-finite coordinate or `eps`.
pub fn convex_hull_3d(points: &[[f64; 3]], eps: f64) -> GeoResult<Hull3> {
    if !(eps.is_finite() && eps >= 0.0) {
        return Err(GeoError::InvalidArgument(format!(
            "hull tolerance must be non-negative, got {eps}"
        )));
    }
    if points.len() < 4 {
        return Err(GeoError::InsufficientPoints(format!(
            "a 3-D hull needs at least 4 points, got {}",
            points.len()
        )));
    }
    if let Some(i) = points.iter().position(|p| p.iter().any(|c| !c.is_finite())) {
        return Err(GeoError::InvalidArgument(format!("point {i} has a non-finite coordinate")));
    }

    let pts: Vec<Vector3<f64>> = points.iter().map(|p| Vector3::from(*p)).collect();
    let seed = initial_simplex(&pts, eps)?;

    // Strictly interior for the lifetime of the hull.
    let inside = seed.iter().map(|&i| pts[i]).sum::<Vector3<f64>>() / 4.0;

    let mut faces: Vec<Face> = Vec::with_capacity(2 * pts.len());
    let mut edges: FxHashMap<(usize, usize), usize> = FxHashMap::default();

    let [s0, s1, s2, s3] = seed;
    for tri in [[s0, s1, s2], [s0, s1, s3], [s0, s2, s3], [s1, s2, s3]] {
        let (mut normal, mut offset) = plane(&pts, tri, eps).ok_or_else(|| {
            GeoError::InsufficientPoints("seed triangle is degenerate".into())
        })?;
        let mut v = tri;
        if normal.dot(&inside) - offset > 0.0 {
            v.swap(1, 2);
            normal = -normal;
            offset = -offset;
        }
        push_face(&mut faces, &mut edges, Face { v, normal, offset, alive: true });
    }

    for (i, p) in pts.iter().enumerate() {
        if seed.contains(&i) {
            continue;
        }

        let mut visible = Vec::new();
        let mut is_visible = vec![false; faces.len()];
        for (f, face) in faces.iter().enumerate().filter(|(_, f)| f.alive) {
            if face.signed_distance(p) > eps {
                visible.push(f);
                is_visible[f] = true;
            }
        }

        // Inside or on the partial hull; boundary cases are caught by the
        // coplanarity check below.
        if visible.is_empty() {
            continue;
        }

        // Horizon edges keep the orientation they had in the visible face.
        let mut horizon = Vec::new();
        for &f in &visible {
            for (a, b) in faces[f].edges() {
                let twin = edges.get(&(b, a)).copied();
                if twin.is_none_or(|t| !is_visible[t]) {
                    horizon.push((a, b));
                }
            }
        }
        for &f in &visible {
            faces[f].alive = false;
            for e in faces[f].edges() {
                edges.remove(&e);
            }
        }
        for (a, b) in horizon {
            let v = [a, b, i];
            let (normal, offset) = plane(&pts, v, eps).ok_or_else(|| {
                GeoError::DegenerateInput(format!(
                    "point {i} is collinear with hull edge ({a}, {b})"
                ))
            })?;
            push_face(&mut faces, &mut edges, Face { v, normal, offset, alive: true });
        }
    }

    let faces: Vec<Face> = faces.into_iter().filter(|f| f.alive).collect();
    for face in &faces {
        let on_plane = (0..pts.len())
            .find(|j| !face.v.contains(j) && face.signed_distance(&pts[*j]).abs() <= eps);
        if let Some(j) = on_plane {
            let [a, b, c] = face.v;
            return Err(GeoError::DegenerateInput(format!(
                "point {j} lies on the plane of hull face ({a}, {b}, {c})"
            )));
        }
    }

    let faces: Vec<[usize; 3]> = faces.into_iter().map(|f| f.v).collect();
    let mut vertices: Vec<usize> = faces.iter().flatten().copied().collect();
    vertices.sort_unstable();
    vertices.dedup();

    Ok(Hull3 { vertices, faces })
}

fn push_face(faces: &mut Vec<Face>, edges: &mut FxHashMap<(usize, usize), usize>, face: Face) {
    let idx = faces.len();
    for e in face.edges() {
        edges.insert(e, idx);
    }
    faces.push(face);
}

/// Four affinely independent points, chosen from the extremes.  Ties go to
/// the lowest index.
fn initial_simplex(pts: &[Vector3<f64>], eps: f64) -> GeoResult<[usize; 4]> {
    let argmax = |score: &dyn Fn(&Vector3<f64>) -> f64| -> (usize, f64) {
        pts.iter()
            .enumerate()
            .map(|(i, p)| (i, score(p)))
            .fold((0, f64::NEG_INFINITY), |best, cur| if cur.1 > best.1 { cur } else { best })
    };

    let (i0, _) = argmax(&|p| -p.x);
    let p0 = pts[i0];

    let (i1, d1) = argmax(&|p| (p - p0).norm());
    if d1 <= eps {
        return Err(GeoError::InsufficientPoints("all points coincide".into()));
    }
    let axis = (pts[i1] - p0) / d1;

    let (i2, d2) = argmax(&|p| (p - p0).cross(&axis).norm());
    if d2 <= eps {
        return Err(GeoError::InsufficientPoints("all points are collinear".into()));
    }
    let normal = axis.cross(&(pts[i2] - p0)).normalize();

    let (i3, d3) = argmax(&|p| normal.dot(&(p - p0)).abs());
    if d3 <= eps {
        return Err(GeoError::InsufficientPoints("all points are coplanar".into()));
    }

    Ok([i0, i1, i2, i3])
}
