//! Unit tests for sphere-geodesic.
//!
//! City coordinates are fixed so that expected distances can be checked
//! against published great-circle figures.

#[cfg(test)]
mod helpers {
    use sphere_core::GeoPoint;

    pub fn pt(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    pub fn new_york() -> GeoPoint { pt(40.7128, -74.0060) }
    pub fn london()   -> GeoPoint { pt(51.5074, -0.1278) }
    pub fn paris()    -> GeoPoint { pt(48.8566, 2.3522) }
    pub fn tokyo()    -> GeoPoint { pt(35.6895, 139.6917) }
    pub fn la()       -> GeoPoint { pt(34.0522, -118.2437) }
}

// ── Arc engine ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod arc {
    use sphere_core::{GeoError, Radius, great_circle_distance, to_geodetic};

    use super::helpers::*;
    use crate::{arc_points, midpoint, nlerp_points, point_to_segment_distance, total_path_distance};

    #[test]
    fn endpoints_are_exact() {
        for n in [2, 3, 10, 100] {
            let arc = arc_points(new_york(), paris(), Radius::EARTH, n).unwrap();
            assert_eq!(arc.len(), n);
            assert_eq!(arc[0], new_york());
            assert_eq!(arc[n - 1], paris());
        }
    }

    #[test]
    fn samples_are_evenly_spaced() {
        let arc = arc_points(new_york(), tokyo(), Radius::EARTH, 11).unwrap();
        let total = great_circle_distance(new_york(), tokyo(), Radius::EARTH);
        for w in arc.windows(2) {
            let step = great_circle_distance(w[0], w[1], Radius::EARTH);
            assert!((step - total / 10.0).abs() < 1e-6, "step {step}");
        }
    }

    #[test]
    fn samples_lie_on_the_great_circle() {
        let arc = arc_points(new_york(), paris(), Radius::EARTH, 25).unwrap();
        for p in &arc[1..24] {
            let off = point_to_segment_distance(*p, new_york(), paris(), Radius::EARTH).unwrap();
            assert!(off < 1e-6, "{p} is {off} km off the arc");
        }
        let len = total_path_distance(&arc, Radius::EARTH);
        let direct = great_circle_distance(new_york(), paris(), Radius::EARTH);
        assert!((len - direct).abs() < 1e-6);
    }

    #[test]
    fn coincident_endpoints_copy() {
        let p = london();
        let arc = arc_points(p, p, Radius::EARTH, 5).unwrap();
        assert!(arc.iter().all(|q| *q == p));
    }

    #[test]
    fn antipodal_endpoints_rejected() {
        let r = arc_points(pt(0.0, 0.0), pt(0.0, 180.0), Radius::EARTH, 5);
        assert!(matches!(r, Err(GeoError::DegenerateInput(_))));
    }

    #[test]
    fn too_few_samples_rejected() {
        let r = arc_points(new_york(), paris(), Radius::EARTH, 1);
        assert!(matches!(r, Err(GeoError::InvalidArgument(_))));
        assert!(nlerp_points(new_york(), paris(), 0).is_err());
    }

    #[test]
    fn nlerp_waypoints_follow_the_arc() {
        let wps = nlerp_points(new_york(), paris(), 5).unwrap();
        assert_eq!(wps.len(), 5);
        assert!((wps[0].lat() - new_york().lat()).abs() < 0.5);
        assert!((wps[4].lat() - paris().lat()).abs() < 0.5);

        let total = total_path_distance(&wps, Radius::EARTH);
        assert!((total - 5837.0).abs() < 50.0, "got {total}");
    }

    #[test]
    fn nlerp_rejects_antipodes() {
        let r = nlerp_points(pt(10.0, 20.0), pt(-10.0, -160.0), 4);
        assert!(matches!(r, Err(GeoError::DegenerateInput(_))));
    }

    #[test]
    fn midpoint_on_sphere_and_equidistant() {
        let m = midpoint(new_york(), la(), Radius::EARTH).unwrap();
        assert!((m.norm() - 6371.0).abs() < 1e-2);

        let m = to_geodetic(m).unwrap();
        let to_ny = great_circle_distance(m, new_york(), Radius::EARTH);
        let to_la = great_circle_distance(m, la(), Radius::EARTH);
        assert!((to_ny - to_la).abs() < 1e-6);
    }

    #[test]
    fn midpoint_of_antipodes_is_degenerate() {
        let r = midpoint(pt(90.0, 0.0), pt(-90.0, 0.0), Radius::EARTH);
        assert!(matches!(r, Err(GeoError::DegenerateInput(_))));
    }

    #[test]
    fn path_distance_of_short_inputs_is_zero() {
        assert_eq!(total_path_distance(&[], Radius::EARTH), 0.0);
        assert_eq!(total_path_distance(&[london()], Radius::EARTH), 0.0);
    }

    #[test]
    fn segment_sampling_follows_config() {
        let seg = crate::GeodesicSegment::new(london(), tokyo());
        let config = sphere_core::SphereConfig { arc_samples: 7, ..Default::default() };
        let pts = seg.sample(&config).unwrap();
        assert_eq!(pts.len(), 7);
        assert_eq!(pts[6], tokyo());

        let bad = sphere_core::SphereConfig { arc_samples: 1, ..Default::default() };
        assert!(matches!(seg.sample(&bad), Err(GeoError::InvalidArgument(_))));
    }
}

// ── Projection engine ─────────────────────────────────────────────────────────

#[cfg(test)]
mod projection {
    use std::f64::consts::FRAC_PI_2;

    use sphere_core::{GeoError, Radius, great_circle_distance};

    use super::helpers::*;
    use crate::{
        GeodesicSegment, Polygon, point_to_bounded_segment_distance, point_to_polygon_distance,
        point_to_segment_distance,
    };

    #[test]
    fn delhi_to_london_singapore() {
        let d = point_to_segment_distance(
            pt(28.6139, 77.2090),
            london(),
            pt(1.3521, 103.8198),
            Radius::EARTH,
        )
        .unwrap();
        assert!((d - 199.6).abs() < 5.0, "got {d}");
    }

    #[test]
    fn point_on_circle_is_zero() {
        let d = point_to_segment_distance(pt(0.0, 5.0), pt(0.0, 0.0), pt(0.0, 10.0), Radius::EARTH)
            .unwrap();
        assert!(d < 1e-9);
    }

    #[test]
    fn pole_is_quarter_circumference() {
        let d = point_to_segment_distance(pt(90.0, 0.0), pt(0.0, 0.0), pt(0.0, 10.0), Radius::EARTH)
            .unwrap();
        assert!((d - FRAC_PI_2 * 6371.0).abs() < 1e-6);
    }

    #[test]
    fn degenerate_segments_rejected() {
        let same = point_to_segment_distance(paris(), london(), london(), Radius::EARTH);
        assert!(matches!(same, Err(GeoError::DegenerateInput(_))));
        let opposite = point_to_segment_distance(paris(), pt(0.0, 0.0), pt(0.0, 180.0), Radius::EARTH);
        assert!(matches!(opposite, Err(GeoError::DegenerateInput(_))));
    }

    #[test]
    fn bounded_matches_unbounded_inside_the_arc() {
        let p = pt(1.0, 5.0);
        let a = pt(0.0, 0.0);
        let b = pt(0.0, 10.0);
        let unbounded = point_to_segment_distance(p, a, b, Radius::EARTH).unwrap();
        let bounded = point_to_bounded_segment_distance(p, a, b, Radius::EARTH).unwrap();
        assert!((unbounded - bounded).abs() < 1e-9);
        assert!((bounded - 111.19).abs() < 0.1, "got {bounded}");
    }

    #[test]
    fn bounded_uses_endpoint_beyond_the_arc() {
        let p = pt(1.0, 50.0);
        let a = pt(0.0, 0.0);
        let b = pt(0.0, 10.0);
        let unbounded = point_to_segment_distance(p, a, b, Radius::EARTH).unwrap();
        let bounded = point_to_bounded_segment_distance(p, a, b, Radius::EARTH).unwrap();
        assert!(unbounded < 112.0);
        let to_b = great_circle_distance(p, b, Radius::EARTH);
        assert!((bounded - to_b).abs() < 1e-9);

        let seg = GeodesicSegment::new(a, b);
        assert_eq!(seg.bounded_distance_to(p, Radius::EARTH).unwrap(), bounded);
        assert_eq!(seg.reversed().bounded_distance_to(p, Radius::EARTH).unwrap(), bounded);
    }

    #[test]
    fn triangle_near_monterey() {
        let tri = [pt(35.0, -120.0), pt(37.0, -122.0), pt(36.0, -123.0)];
        let d = point_to_polygon_distance(pt(36.5, -121.0), &tri, Radius::EARTH).unwrap();
        assert!((d - 33.8).abs() < 1.0, "got {d}");

        let poly = Polygon::new(tri.to_vec()).unwrap();
        assert_eq!(poly.distance_to(pt(36.5, -121.0), Radius::EARTH).unwrap(), d);
    }

    #[test]
    fn polygon_distance_is_minimum_over_edges() {
        let poly = Polygon::new(vec![pt(0.0, 0.0), pt(0.0, 10.0), pt(10.0, 10.0), pt(10.0, 0.0)]).unwrap();
        let p = pt(5.0, 1.0);
        let by_edge: f64 = poly
            .edges()
            .map(|e| e.distance_to(p, Radius::EARTH).unwrap())
            .fold(f64::INFINITY, f64::min);
        assert_eq!(poly.distance_to(p, Radius::EARTH).unwrap(), by_edge);
        // Nearest edge is the lon = 0 meridian, one degree of longitude away.
        assert!((by_edge - 110.8).abs() < 1.0, "got {by_edge}");
    }

    #[test]
    fn polygon_needs_three_vertices() {
        let two = [london(), paris()];
        let r = point_to_polygon_distance(new_york(), &two, Radius::EARTH);
        assert!(matches!(r, Err(GeoError::InvalidArgument(_))));
        assert!(Polygon::new(two.to_vec()).is_err());
    }

    #[test]
    fn polygon_edges_wrap_around() {
        let poly = Polygon::new(vec![london(), paris(), new_york()]).unwrap();
        let edges: Vec<_> = poly.edges().collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2].start, new_york());
        assert_eq!(edges[2].end, london());

        let perimeter = poly.perimeter(Radius::EARTH);
        let sum = great_circle_distance(london(), paris(), Radius::EARTH)
            + great_circle_distance(paris(), new_york(), Radius::EARTH)
            + great_circle_distance(new_york(), london(), Radius::EARTH);
        assert!((perimeter - sum).abs() < 1e-9);
    }
}

// ── Travel ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod travel {
    use sphere_core::{GeoError, Radius, SphereConfig};

    use super::helpers::*;
    use crate::{Itinerary, plan_legs, travel_time_hours};

    #[test]
    fn transatlantic_flight_time() {
        let it = plan_legs(&[new_york(), london()], Radius::EARTH, 900.0).unwrap();
        assert_eq!(it.legs.len(), 1);
        let hours = it.total_hours();
        assert!((hours - 5570.0 / 900.0).abs() < 0.1, "got {hours}");
    }

    #[test]
    fn multi_leg_route() {
        let dubai = pt(25.276987, 55.296249);
        let sydney = pt(-33.8688, 151.2093);
        let stops = [new_york(), london(), dubai, tokyo(), sydney];
        let it = Itinerary::from_config(&stops, &SphereConfig::default()).unwrap();
        assert_eq!(it.legs.len(), 4);
        assert!(it.legs.iter().all(|l| l.distance > 0.0 && l.hours > 0.0));
        assert!((it.total_hours() * 900.0 - it.total_distance()).abs() < 1e-6);
        assert_eq!(it.legs[1].from, london());
        assert_eq!(it.legs[1].to, dubai);
    }

    #[test]
    fn invalid_speed_rejected() {
        assert!(matches!(travel_time_hours(100.0, 0.0), Err(GeoError::InvalidArgument(_))));
        assert!(travel_time_hours(-1.0, 10.0).is_err());
        assert!(plan_legs(&[], Radius::EARTH, -5.0).is_err());
    }

    #[test]
    fn single_stop_is_empty() {
        let it = plan_legs(&[paris()], Radius::EARTH, 900.0).unwrap();
        assert!(it.is_empty());
        assert_eq!(it.total_hours(), 0.0);
    }
}

// ── Distance fields ───────────────────────────────────────────────────────────

#[cfg(test)]
mod field {
    use std::f64::consts::PI;

    use sphere_core::{GeoError, Radius, great_circle_distance};

    use super::helpers::*;
    use crate::{distance_grid, linspace, reachable_bands};

    #[test]
    fn linspace_is_inclusive() {
        let v = linspace(-90.0, 90.0, 181).unwrap();
        assert_eq!(v.len(), 181);
        assert_eq!(v[0], -90.0);
        assert_eq!(v[180], 90.0);
        assert!((v[90]).abs() < 1e-12);
        assert!(matches!(linspace(0.0, 1.0, 1), Err(GeoError::InvalidArgument(_))));
    }

    #[test]
    fn global_grid_shape_and_bounds() {
        let grid = distance_grid(new_york(), 90, 180, Radius::EARTH).unwrap();
        assert_eq!(grid.values().len(), 90 * 180);
        assert!(grid.max() <= PI * 6371.0 + 1e-6);
        assert!(grid.values().iter().all(|d| *d >= 0.0));
        assert!(grid.get(90, 0).is_none());

        let (i, j) = (30, 70);
        let expected = great_circle_distance(new_york(), pt(grid.lats[i], grid.lons[j]), Radius::EARTH);
        assert_eq!(grid.get(i, j), Some(expected));
    }

    #[test]
    fn percentile_is_monotone() {
        let grid = distance_grid(london(), 19, 37, Radius::EARTH).unwrap();
        let p0 = grid.percentile(0.0).unwrap();
        let p95 = grid.percentile(95.0).unwrap();
        let p100 = grid.percentile(100.0).unwrap();
        assert!(p0 <= p95 && p95 <= p100);
        assert_eq!(p100, grid.max());
        assert!(grid.percentile(101.0).is_err());
    }

    #[test]
    fn reachable_bands_are_nested() {
        let bands = reachable_bands(new_york(), 5.0, 200, 60.0, &[1.0, 2.0, 3.0], Radius::EARTH).unwrap();
        assert_eq!(bands.len(), 3);
        assert!(!bands[0].points.is_empty());
        assert!(bands[0].points.len() < bands[1].points.len());
        assert!(bands[1].points.len() < bands[2].points.len());
        for band in &bands {
            let limit = 60.0 * band.max_hours;
            for p in &band.points {
                assert!(great_circle_distance(new_york(), *p, Radius::EARTH) <= limit + 1e-9);
            }
        }
    }

    #[test]
    fn reachable_bands_skip_rows_past_the_pole() {
        let bands = reachable_bands(pt(89.0, 0.0), 3.0, 13, 100.0, &[100.0], Radius::EARTH).unwrap();
        assert!(bands[0].points.iter().all(|p| p.lat() <= 90.0));
        // 13 rows from 86 to 92 in half-degree steps; the last four are past the pole.
        assert_eq!(bands[0].points.len(), 9 * 13);
    }

    #[test]
    fn reachable_bands_validate_inputs() {
        assert!(reachable_bands(paris(), -1.0, 10, 60.0, &[1.0], Radius::EARTH).is_err());
        assert!(reachable_bands(paris(), 1.0, 10, 0.0, &[1.0], Radius::EARTH).is_err());
        assert!(reachable_bands(paris(), 1.0, 10, 60.0, &[-1.0], Radius::EARTH).is_err());
    }
}
