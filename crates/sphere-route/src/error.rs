//! Routing error type.

use sphere_core::{GeoError, GeoPoint};
use thiserror::Error;

use crate::NodeId;

/// Errors produced by `sphere-route`.
///
/// An unreachable goal is not an error; see
/// [`RouteOutcome::Unreachable`](crate::RouteOutcome::Unreachable).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    #[error("point {0} is not a node of the graph")]
    NodeNotFound(GeoPoint),

    #[error("{id} is out of range for a graph of {node_count} nodes")]
    UnknownNode { id: NodeId, node_count: usize },

    #[error(transparent)]
    Geo(#[from] GeoError),
}

pub type RouteResult<T> = Result<T, RouteError>;
