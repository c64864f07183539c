//! Segment and polygon value types.

use sphere_core::{
    CartesianPoint, GeoError, GeoPoint, GeoResult, Radius, SphereConfig, great_circle_distance,
};

use crate::{arc, projection};

// ── GeodesicSegment ───────────────────────────────────────────────────────────

/// Minor great-circle arc from `start` to `end`.
///
/// Direction only matters for [`interpolate`](Self::interpolate); distance
/// queries are symmetric.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeodesicSegment {
    pub start: GeoPoint,
    pub end:   GeoPoint,
}

impl GeodesicSegment {
    #[inline]
    pub fn new(start: GeoPoint, end: GeoPoint) -> Self {
        Self { start, end }
    }

    /// The same arc walked the other way.
    #[inline]
    pub fn reversed(self) -> Self {
        Self { start: self.end, end: self.start }
    }

    #[inline]
    pub fn length(self, radius: Radius) -> f64 {
        great_circle_distance(self.start, self.end, radius)
    }

    pub fn midpoint(self, radius: Radius) -> GeoResult<CartesianPoint> {
        arc::midpoint(self.start, self.end, radius)
    }

    /// `count` evenly spaced points from `start` to `end`.
    pub fn interpolate(self, radius: Radius, count: usize) -> GeoResult<Vec<GeoPoint>> {
        arc::arc_points(self.start, self.end, radius, count)
    }

    /// `config.arc_samples` points along the arc on a sphere of
    /// `config.radius`.
    pub fn sample(self, config: &SphereConfig) -> GeoResult<Vec<GeoPoint>> {
        config.validate()?;
        self.interpolate(config.radius()?, config.arc_samples)
    }

    /// Distance from `point` to the great circle carrying this segment.
    pub fn distance_to(self, point: GeoPoint, radius: Radius) -> GeoResult<f64> {
        projection::point_to_segment_distance(point, self.start, self.end, radius)
    }

    /// Distance from `point` to the arc itself.
    pub fn bounded_distance_to(self, point: GeoPoint, radius: Radius) -> GeoResult<f64> {
        projection::point_to_bounded_segment_distance(point, self.start, self.end, radius)
    }
}

// ── Polygon ───────────────────────────────────────────────────────────────────

/// Closed ring of at least three vertices.  Edge `i` joins vertex `i` to
/// vertex `(i + 1) % n`; the closing vertex is never repeated.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<GeoPoint>", into = "Vec<GeoPoint>"))]
pub struct Polygon {
    vertices: Vec<GeoPoint>,
}

impl Polygon {
    pub const MIN_VERTICES: usize = 3;

    pub(crate) fn check_vertex_count(n: usize) -> GeoResult<()> {
        if n < Self::MIN_VERTICES {
            return Err(GeoError::InvalidArgument(format!(
                "polygon needs at least {} vertices, got {n}",
                Self::MIN_VERTICES
            )));
        }
        Ok(())
    }

    pub fn new(vertices: Vec<GeoPoint>) -> GeoResult<Self> {
        Self::check_vertex_count(vertices.len())?;
        Ok(Self { vertices })
    }

    #[inline]
    pub fn vertices(&self) -> &[GeoPoint] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`; a polygon cannot be built with fewer than three
    /// vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Every edge including the closing one, in vertex order.
    pub fn edges(&self) -> impl Iterator<Item = GeodesicSegment> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| GeodesicSegment::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Total boundary length along great circles.
    pub fn perimeter(&self, radius: Radius) -> f64 {
        self.edges().map(|e| e.length(radius)).sum()
    }

    /// Minimum distance from `point` to the boundary (edge great circles).
    pub fn distance_to(&self, point: GeoPoint, radius: Radius) -> GeoResult<f64> {
        projection::point_to_polygon_distance(point, &self.vertices, radius)
    }
}

impl TryFrom<Vec<GeoPoint>> for Polygon {
    type Error = GeoError;

    fn try_from(vertices: Vec<GeoPoint>) -> GeoResult<Self> {
        Polygon::new(vertices)
    }
}

impl From<Polygon> for Vec<GeoPoint> {
    fn from(p: Polygon) -> Vec<GeoPoint> {
        p.vertices
    }
}
