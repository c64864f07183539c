//! `sphere-route` — great-circle graphs and shortest paths.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                       |
//! |------------|----------------------------------------------------------------|
//! | [`ids`]    | `NodeId`                                                       |
//! | [`graph`]  | `WeightedGraph` (CSR + R-tree), builder, `build_graph`        |
//! | [`router`] | `Router` trait, `DijkstraRouter`, `Path`, `shortest_path`     |
//! | [`error`]  | `RouteError`, `RouteResult<T>`                                |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                      |
//! |------------|-------------------------------------------------------------|
//! | `parallel` | Pairwise distance rows are computed on the Rayon pool.      |
//! | `serde`    | Derives `Serialize`/`Deserialize` on `NodeId`, `Path`, and  |
//! |            | `RouteOutcome`.                                             |

pub mod error;
pub mod graph;
pub mod ids;
pub mod router;


pub use error::{RouteError, RouteResult};
pub use graph::{WeightedGraph, WeightedGraphBuilder, build_graph, pairwise_distances};
pub use ids::NodeId;
pub use router::{DijkstraRouter, Path, RouteOutcome, Router, shortest_path};
