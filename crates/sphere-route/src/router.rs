//! Routing trait and default Dijkstra implementation.
//!
//! # Outcomes
//!
//! A query between two nodes either reaches the goal ([`RouteOutcome::Reached`])
//! or proves it unreachable ([`RouteOutcome::Unreachable`]).  Both are normal
//! results; errors are reserved for asking about nodes the graph does not
//! have.
//!
//! # Determinism
//!
//! The frontier is a binary min-heap on `(cost, NodeId)`.  Equal costs pop in
//! node insertion order, so a fixed graph always yields the same path.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use sphere_core::GeoPoint;
use tracing::{debug, trace};

use crate::graph::WeightedGraph;
use crate::{NodeId, RouteError, RouteResult};

// ── Path / RouteOutcome ───────────────────────────────────────────────────────

/// Node positions from source to goal, plus the summed edge weight.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub nodes:        Vec<GeoPoint>,
    pub total_weight: f64,
}

impl Path {
    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// `true` if source and goal are the same node.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() == 1
    }
}

/// Result of a routing query.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RouteOutcome {
    Reached(Path),
    /// No sequence of edges leads from source to goal.
    Unreachable,
}

impl RouteOutcome {
    /// Path weight, or `f64::INFINITY` when unreachable.
    pub fn total_weight(&self) -> f64 {
        match self {
            RouteOutcome::Reached(p) => p.total_weight,
            RouteOutcome::Unreachable => f64::INFINITY,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            RouteOutcome::Reached(p) => Some(p),
            RouteOutcome::Unreachable => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            RouteOutcome::Reached(p) => Some(p),
            RouteOutcome::Unreachable => None,
        }
    }

    pub fn is_reached(&self) -> bool {
        matches!(self, RouteOutcome::Reached(_))
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// Implement this trait to swap Dijkstra for A* (great-circle distance is an
/// admissible heuristic on geodesic graphs) or a precomputed index.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one router can serve queries
/// from Rayon workers against a shared graph.
pub trait Router: Send + Sync {
    /// Shortest path from `from` to `to`.
    ///
    /// `from == to` yields a single-node path of weight 0.
    ///
    /// # Errors
    /// [`RouteError::UnknownNode`] if either id is not in `graph`.
    fn route(&self, graph: &WeightedGraph, from: NodeId, to: NodeId) -> RouteResult<RouteOutcome>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard Dijkstra over the CSR graph, stopping as soon as the goal is
/// settled.
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route(&self, graph: &WeightedGraph, from: NodeId, to: NodeId) -> RouteResult<RouteOutcome> {
        graph.check(from)?;
        graph.check(to)?;
        Ok(dijkstra(graph, from, to))
    }
}

/// Shortest path between two node positions with [`DijkstraRouter`].
///
/// # Errors
/// [`RouteError::NodeNotFound`] if `start` or `goal` is not exactly a node of
/// `graph`.  Snap arbitrary points first with
/// [`WeightedGraph::nearest_node`].
pub fn shortest_path(
    graph: &WeightedGraph,
    start: GeoPoint,
    goal: GeoPoint,
) -> RouteResult<RouteOutcome> {
    let from = graph.node_id(start).ok_or(RouteError::NodeNotFound(start))?;
    let to = graph.node_id(goal).ok_or(RouteError::NodeNotFound(goal))?;
    DijkstraRouter.route(graph, from, to)
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Tentative distance with a total order; weights are validated finite and
/// non-negative at build time.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Cost(f64);

impl Eq for Cost {}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn dijkstra(graph: &WeightedGraph, from: NodeId, to: NodeId) -> RouteOutcome {
    let n = graph.node_count();
    // dist[v] = best known cost; INFINITY while unvisited.
    let mut dist    = vec![f64::INFINITY; n];
    let mut settled = vec![false; n];
    // prev[v] = node that reached v; INVALID for the source and unvisited.
    let mut prev    = vec![NodeId::INVALID; n];

    dist[from.index()] = 0.0;

    let mut heap: BinaryHeap<Reverse<(Cost, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((Cost(0.0), from)));

    while let Some(Reverse((Cost(cost), node))) = heap.pop() {
        // Stale entry for a node already finalised.
        if settled[node.index()] {
            continue;
        }
        settled[node.index()] = true;
        trace!(%node, cost, "settled");

        if node == to {
            let path = reconstruct(graph, &prev, to, cost);
            debug!(%from, %to, hops = path.hops(), weight = cost, "route found");
            return RouteOutcome::Reached(path);
        }

        for (neighbor, weight) in graph.out_edges(node) {
            if settled[neighbor.index()] {
                continue;
            }
            let new_cost = cost + weight;
            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                prev[neighbor.index()] = node;
                heap.push(Reverse((Cost(new_cost), neighbor)));
            }
        }
    }

    debug!(%from, %to, "goal unreachable");
    RouteOutcome::Unreachable
}

fn reconstruct(graph: &WeightedGraph, prev: &[NodeId], to: NodeId, total_weight: f64) -> Path {
    let mut ids = vec![to];
    let mut cur = to;
    while prev[cur.index()] != NodeId::INVALID {
        cur = prev[cur.index()];
        ids.push(cur);
    }
    ids.reverse();
    Path {
        nodes: ids.iter().map(|id| graph.nodes()[id.index()]).collect(),
        total_weight,
    }
}
