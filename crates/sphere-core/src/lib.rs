//! `sphere-core` — foundational types for the `sphere_stats` workspace.
//!
//! This crate is a dependency of every other `sphere-*` crate.  It has no
//! `sphere-*` dependencies and few external ones (`nalgebra`, `rand`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`geo`]      | `GeoPoint`, `CartesianPoint`, `Radius`                    |
//! | [`kernel`]   | geodetic ↔ Cartesian, great-circle and chord distance     |
//! | [`config`]   | `SphereConfig`                                            |
//! | [`sample`]   | `PointSampler` (seeded, uniform on the sphere)            |
//! | [`error`]    | `GeoError`, `GeoResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod config;
pub mod error;
pub mod geo;
pub mod kernel;
pub mod sample;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SphereConfig;
pub use error::{GeoError, GeoResult};
pub use geo::{CartesianPoint, GeoPoint, Radius};
pub use kernel::{central_angle, chord_distance, great_circle_distance, to_cartesian, to_geodetic};
pub use sample::PointSampler;
