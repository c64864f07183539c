//! Sampled distance fields.
//!
//! A [`DistanceGrid`] is the raw material for a distance heat map: the
//! great-circle distance from one origin to every node of a regular
//! lat/lon grid.  [`reachable_bands`] thresholds a local grid by travel time
//! to give nested "how far can I get in N hours" point sets.  Turning either
//! into pixels or polygons is left to the caller.

use sphere_core::{GeoError, GeoPoint, GeoResult, Radius, great_circle_distance};
use tracing::debug;

use crate::travel_time_hours;

/// `n` evenly spaced values from `start` to `end` inclusive.
///
/// # Errors
/// [`GeoError::InvalidArgument`] for `n < 2`.
pub fn linspace(start: f64, end: f64, n: usize) -> GeoResult<Vec<f64>> {
    if n < 2 {
        return Err(GeoError::InvalidArgument(format!(
            "grid needs at least 2 steps per axis, got {n}"
        )));
    }
    let step = (end - start) / (n - 1) as f64;
    let mut out: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
    // Pin the end exactly so rounding never pushes a pole past ±90.
    out[n - 1] = end;
    Ok(out)
}

// ── DistanceGrid ──────────────────────────────────────────────────────────────

/// Row-major grid of distances: row `i` is `lats[i]`, column `j` is `lons[j]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceGrid {
    pub origin: GeoPoint,
    pub lats:   Vec<f64>,
    pub lons:   Vec<f64>,
    values:     Vec<f64>,
}

impl DistanceGrid {
    #[inline]
    pub fn get(&self, lat_idx: usize, lon_idx: usize) -> Option<f64> {
        if lat_idx >= self.lats.len() || lon_idx >= self.lons.len() {
            return None;
        }
        Some(self.values[lat_idx * self.lons.len() + lon_idx])
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    /// Linear-interpolated percentile (`q` in `[0, 100]`) of all cell
    /// values.  Colour scales are usually capped at the 95th.
    ///
    /// # Errors
    /// [`GeoError::InvalidArgument`] if `q` is outside `[0, 100]`.
    pub fn percentile(&self, q: f64) -> GeoResult<f64> {
        if !(0.0..=100.0).contains(&q) {
            return Err(GeoError::InvalidArgument(format!(
                "percentile must be within [0, 100], got {q}"
            )));
        }
        let mut sorted = self.values.clone();
        sorted.sort_by(f64::total_cmp);
        let rank = q / 100.0 * (sorted.len() - 1) as f64;
        let lo = rank.floor() as usize;
        let hi = rank.ceil() as usize;
        let frac = rank - lo as f64;
        Ok(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
    }
}

/// Distance from `origin` to every node of a global grid spanning latitude
/// `[-90, 90]` (`lat_steps` rows) by longitude `[-180, 180]` (`lon_steps`
/// columns).
///
/// # Errors
/// [`GeoError::InvalidArgument`] for fewer than 2 steps on either axis.
pub fn distance_grid(
    origin: GeoPoint,
    lat_steps: usize,
    lon_steps: usize,
    radius: Radius,
) -> GeoResult<DistanceGrid> {
    let lats = linspace(-90.0, 90.0, lat_steps)?;
    let lons = linspace(-180.0, 180.0, lon_steps)?;

    let mut values = Vec::with_capacity(lats.len() * lons.len());
    for &lat in &lats {
        for &lon in &lons {
            values.push(great_circle_distance(origin, GeoPoint::new(lat, lon)?, radius));
        }
    }
    debug!(%origin, cells = values.len(), "built distance grid");

    Ok(DistanceGrid { origin, lats, lons, values })
}

// ── Reachable bands ───────────────────────────────────────────────────────────

/// Grid points reachable from the centre within `max_hours`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReachBand {
    pub max_hours: f64,
    pub points:    Vec<GeoPoint>,
}

/// For each travel-time threshold, the nodes of a `steps × steps` grid
/// spanning `center ± half_span_deg` that lie within `speed · threshold`
/// great-circle distance of `center`.
///
/// Grid rows beyond the poles are skipped.  Bands are returned in the order
/// of `thresholds`; for increasing thresholds each band contains the
/// previous one.
///
/// # Errors
/// [`GeoError::InvalidArgument`] for `steps < 2`, a negative or non-finite
/// span, an invalid speed, or a negative threshold.
pub fn reachable_bands(
    center: GeoPoint,
    half_span_deg: f64,
    steps: usize,
    speed: f64,
    thresholds: &[f64],
    radius: Radius,
) -> GeoResult<Vec<ReachBand>> {
    if !(half_span_deg.is_finite() && half_span_deg >= 0.0) {
        return Err(GeoError::InvalidArgument(format!(
            "span must be non-negative, got {half_span_deg}"
        )));
    }
    // Validates the speed up front.
    travel_time_hours(0.0, speed)?;

    let lats = linspace(center.lat() - half_span_deg, center.lat() + half_span_deg, steps)?;
    let lons = linspace(center.lon() - half_span_deg, center.lon() + half_span_deg, steps)?;

    let mut cells = Vec::with_capacity(steps * steps);
    for &lat in lats.iter().filter(|lat| (-90.0..=90.0).contains(*lat)) {
        for &lon in &lons {
            let p = GeoPoint::new(lat, lon)?;
            let hours = travel_time_hours(great_circle_distance(center, p, radius), speed)?;
            cells.push((p, hours));
        }
    }

    thresholds
        .iter()
        .map(|&max_hours| {
            if max_hours.is_nan() || max_hours < 0.0 {
                return Err(GeoError::InvalidArgument(format!(
                    "travel-time threshold must be non-negative, got {max_hours}"
                )));
            }
            let points: Vec<GeoPoint> = cells
                .iter()
                .filter(|(_, h)| *h <= max_hours)
                .map(|(p, _)| *p)
                .collect();
            debug!(%center, max_hours, reachable = points.len(), "reachable band");
            Ok(ReachBand { max_hours, points })
        })
        .collect()
}
