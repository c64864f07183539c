//! Constant-speed travel time along great-circle legs.
//!
//! Units follow the radius: with [`Radius::EARTH`](sphere_core::Radius::EARTH)
//! distances are kilometres and speeds are km/h, so times come out in hours.

use sphere_core::{GeoError, GeoPoint, GeoResult, Radius, SphereConfig, great_circle_distance};

/// Hours needed to cover `distance` at `speed` (distance units per hour).
///
/// # Errors
/// [`GeoError::InvalidArgument`] for a non-positive or non-finite speed, or a
/// negative distance.
pub fn travel_time_hours(distance: f64, speed: f64) -> GeoResult<f64> {
    if !(speed.is_finite() && speed > 0.0) {
        return Err(GeoError::InvalidArgument(format!(
            "speed must be positive and finite, got {speed}"
        )));
    }
    if distance.is_nan() || distance < 0.0 {
        return Err(GeoError::InvalidArgument(format!(
            "distance must be non-negative, got {distance}"
        )));
    }
    Ok(distance / speed)
}

// ── Leg / Itinerary ───────────────────────────────────────────────────────────

/// One great-circle hop between consecutive stops.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg {
    pub from:     GeoPoint,
    pub to:       GeoPoint,
    pub distance: f64,
    pub hours:    f64,
}

/// Ordered legs through a list of stops.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Itinerary {
    pub legs: Vec<Leg>,
}

impl Itinerary {
    pub fn total_distance(&self) -> f64 {
        self.legs.iter().map(|l| l.distance).sum()
    }

    pub fn total_hours(&self) -> f64 {
        self.legs.iter().map(|l| l.hours).sum()
    }

    /// `true` for fewer than two stops.
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Uses the configured radius and cruise speed.
    pub fn from_config(stops: &[GeoPoint], config: &SphereConfig) -> GeoResult<Self> {
        config.validate()?;
        plan_legs(stops, config.radius()?, config.cruise_speed)
    }
}

/// Split `stops` into consecutive legs flown at a constant `speed`.
///
/// # Errors
/// [`GeoError::InvalidArgument`] for an invalid speed.
pub fn plan_legs(stops: &[GeoPoint], radius: Radius, speed: f64) -> GeoResult<Itinerary> {
    // Checked up front so an empty itinerary still rejects a bad speed.
    travel_time_hours(0.0, speed)?;
    let legs = stops
        .windows(2)
        .map(|w| {
            let distance = great_circle_distance(w[0], w[1], radius);
            Ok(Leg { from: w[0], to: w[1], distance, hours: travel_time_hours(distance, speed)? })
        })
        .collect::<GeoResult<Vec<_>>>()?;
    Ok(Itinerary { legs })
}
