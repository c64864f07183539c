//! `sphere-hull` — convex hull of geodetic point sets.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`quickhull`]   | General incremental 3-D hull over `[f64; 3]`             |
//! | [`spherical`]   | `hull`, `ConvexHullResult` — lift to the sphere + solve  |
//!
//! The solver knows nothing about spheres; the spherical layer lifts the
//! input onto the unit sphere (so the solver's tolerance is scale-free),
//! hands the vectors over, and rescales the result to the caller's radius.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `ConvexHullResult`.     |

pub mod quickhull;
pub mod spherical;


pub use quickhull::{Hull3, convex_hull_3d};
pub use spherical::{ConvexHullResult, hull, hull_with_config};
