//! `sphere-geodesic` — everything that walks along or measures against
//! great circles.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`arc`]        | slerp arc sampling, midpoint, path length, nlerp sampling |
//! | [`projection`] | point → great circle / bounded segment / polygon distance |
//! | [`shape`]      | `GeodesicSegment`, `Polygon`                              |
//! | [`travel`]     | travel time, `Leg`, `Itinerary`                           |
//! | [`field`]      | distance grids and reachable-area bands                   |
//!
//! All fallible operations return [`sphere_core::GeoResult`].
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod arc;
pub mod field;
pub mod projection;
pub mod shape;
pub mod travel;

mod vecmath;

#[cfg(test)]
mod tests;

pub use arc::{arc_points, midpoint, nlerp_points, total_path_distance};
pub use field::{DistanceGrid, ReachBand, distance_grid, linspace, reachable_bands};
pub use projection::{point_to_bounded_segment_distance, point_to_polygon_distance, point_to_segment_distance};
pub use shape::{GeodesicSegment, Polygon};
pub use travel::{Itinerary, Leg, plan_legs, travel_time_hours};
