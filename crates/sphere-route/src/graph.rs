//! Weighted geodesic graph and builder.
//!
//! # Data layout
//!
//! Outgoing edges are stored in **Compressed Sparse Row (CSR)** form.  Given
//! a `NodeId n`, its edges occupy
//!
//! ```text
//! edge_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! with the matching weights in `edge_weight`.  Within one node, edges keep
//! the order in which they were added.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) over unit vectors snaps arbitrary points to the
//! nearest node.  Chord length is monotone in great-circle distance, so
//! Euclidean nearest on the unit sphere is geodesic nearest, with no seam at
//! the antimeridian and no distortion near the poles.

use rstar::{AABB, PointDistance, RTree, RTreeObject};
use rustc_hash::FxHashMap;
use sphere_core::{GeoError, GeoPoint, Radius, great_circle_distance};
use tracing::{debug, warn};

use crate::{NodeId, RouteError, RouteResult};

// ── R-tree node entry ─────────────────────────────────────────────────────────

#[derive(Clone)]
struct NodeEntry {
    point: [f64; 3], // unit vector
    id:    NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 3]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    /// Squared chord length on the unit sphere.
    fn distance_2(&self, point: &[f64; 3]) -> f64 {
        self.point.iter().zip(point).map(|(a, b)| (a - b) * (a - b)).sum()
    }
}

#[inline]
fn unit_array(p: GeoPoint) -> [f64; 3] {
    let v = p.unit_vector();
    [v.x, v.y, v.z]
}

// ── WeightedGraph ─────────────────────────────────────────────────────────────

/// Directed graph whose nodes are distinct geodetic points.
///
/// Immutable once built; share it freely across threads for concurrent
/// queries.  Construct with [`WeightedGraphBuilder`] or [`build_graph`].
pub struct WeightedGraph {
    nodes:          Vec<GeoPoint>,
    lookup:         FxHashMap<(u64, u64), NodeId>,
    node_out_start: Vec<u32>,
    edge_to:        Vec<NodeId>,
    edge_weight:    Vec<f64>,
    spatial_idx:    RTree<NodeEntry>,
}

impl WeightedGraph {
    pub fn empty() -> Self {
        WeightedGraphBuilder::new().build()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ── Nodes ─────────────────────────────────────────────────────────────

    /// Node positions, indexed by `NodeId`.
    #[inline]
    pub fn nodes(&self) -> &[GeoPoint] {
        &self.nodes
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<GeoPoint> {
        self.nodes.get(id.index()).copied()
    }

    /// The node at exactly `point`, if any.
    #[inline]
    pub fn node_id(&self, point: GeoPoint) -> Option<NodeId> {
        self.lookup.get(&point.bits()).copied()
    }

    pub(crate) fn check(&self, id: NodeId) -> RouteResult<()> {
        if id.index() >= self.nodes.len() {
            return Err(RouteError::UnknownNode { id, node_count: self.nodes.len() });
        }
        Ok(())
    }

    // ── Edges ─────────────────────────────────────────────────────────────

    /// `(target, weight)` for every outgoing edge of `node`.
    ///
    /// # Panics
    /// If `node` is out of range.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(move |e| (self.edge_to[e], self.edge_weight[e]))
    }

    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    /// Weight of the edge `from → to` between two node positions.
    pub fn weight(&self, from: GeoPoint, to: GeoPoint) -> Option<f64> {
        let (a, b) = (self.node_id(from)?, self.node_id(to)?);
        self.out_edges(a).find(|&(t, _)| t == b).map(|(_, w)| w)
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Node nearest to `point` along the sphere; `None` only for an empty
    /// graph.
    pub fn nearest_node(&self, point: GeoPoint) -> Option<NodeId> {
        self.spatial_idx.nearest_neighbor(&unit_array(point)).map(|e| e.id)
    }

    /// Up to `k` nodes nearest to `point`, by ascending distance.
    pub fn k_nearest_nodes(&self, point: GeoPoint, k: usize) -> Vec<NodeId> {
        self.spatial_idx
            .nearest_neighbor_iter(&unit_array(point))
            .take(k)
            .map(|e| e.id)
            .collect()
    }
}

// ── WeightedGraphBuilder ──────────────────────────────────────────────────────

/// Construct a [`WeightedGraph`] incrementally, then call
/// [`build`](Self::build).
///
/// Nodes are keyed by position: adding a point twice returns the id it got
/// the first time.  Adding an edge twice overwrites its weight.
///
/// # Example
///
/// ```
/// use sphere_core::GeoPoint;
/// use sphere_route::WeightedGraphBuilder;
///
/// let mut b = WeightedGraphBuilder::new();
/// let a = b.add_node(GeoPoint::new(48.8566, 2.3522).unwrap()).unwrap();
/// let c = b.add_node(GeoPoint::new(51.5074, -0.1278).unwrap()).unwrap();
/// b.add_undirected_edge(a, c, 343.5).unwrap();
/// let g = b.build();
/// assert_eq!(g.node_count(), 2);
/// assert_eq!(g.edge_count(), 2);
/// ```
pub struct WeightedGraphBuilder {
    nodes:     Vec<GeoPoint>,
    lookup:    FxHashMap<(u64, u64), NodeId>,
    raw_edges: Vec<RawEdge>,
    edge_slot: FxHashMap<(NodeId, NodeId), usize>,
}

struct RawEdge {
    from:   NodeId,
    to:     NodeId,
    weight: f64,
}

impl WeightedGraphBuilder {
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes:     Vec::with_capacity(nodes),
            lookup:    FxHashMap::with_capacity_and_hasher(nodes, Default::default()),
            raw_edges: Vec::with_capacity(edges),
            edge_slot: FxHashMap::with_capacity_and_hasher(edges, Default::default()),
        }
    }

    /// Add a node and return its `NodeId` (sequential from 0).  A point
    /// already present keeps its original id.
    ///
    /// # Errors
    /// [`RouteError::Geo`] wrapping `InvalidArgument` once every `u32` id
    /// below [`NodeId::INVALID`] is taken.
    pub fn add_node(&mut self, point: GeoPoint) -> RouteResult<NodeId> {
        if let Some(&id) = self.lookup.get(&point.bits()) {
            return Ok(id);
        }
        let id = NodeId::from_index(self.nodes.len()).ok_or_else(|| {
            GeoError::InvalidArgument(format!(
                "graph is full: {} nodes is the most a u32 id can address",
                self.nodes.len()
            ))
        })?;
        self.lookup.insert(point.bits(), id);
        self.nodes.push(point);
        Ok(id)
    }

    /// Add (or re-weight) the directed edge `from → to`.
    ///
    /// # Errors
    /// * [`RouteError::UnknownNode`] if either id was not issued by this
    ///   builder.
    /// * [`RouteError::Geo`] wrapping `InvalidArgument` for a negative or
    ///   non-finite weight.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: f64) -> RouteResult<()> {
        for id in [from, to] {
            if id.index() >= self.nodes.len() {
                return Err(RouteError::UnknownNode { id, node_count: self.nodes.len() });
            }
        }
        if !(weight.is_finite() && weight >= 0.0) {
            return Err(GeoError::InvalidArgument(format!(
                "edge weight must be non-negative and finite, got {weight}"
            ))
            .into());
        }
        match self.edge_slot.get(&(from, to)) {
            Some(&slot) => self.raw_edges[slot].weight = weight,
            None => self.push_edge(from, to, weight),
        }
        Ok(())
    }

    /// Add `a → b` and `b → a` with the same weight.
    pub fn add_undirected_edge(&mut self, a: NodeId, b: NodeId, weight: f64) -> RouteResult<()> {
        self.add_edge(a, b, weight)?;
        self.add_edge(b, a, weight)
    }

    fn push_edge(&mut self, from: NodeId, to: NodeId, weight: f64) {
        self.edge_slot.insert((from, to), self.raw_edges.len());
        self.raw_edges.push(RawEdge { from, to, weight });
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.raw_edges.len()
    }

    /// Consume the builder and produce a [`WeightedGraph`].
    ///
    /// Time complexity: O(E log E) for the edge sort + O(N log N) for the
    /// R-tree bulk load.
    pub fn build(self) -> WeightedGraph {
        let node_count = self.nodes.len();
        let edge_count = self.raw_edges.len();

        // Stable, so each node's edges keep insertion order.
        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| e.from);

        let edge_to:     Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let edge_weight: Vec<f64>    = raw.iter().map(|e| e.weight).collect();

        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        let entries: Vec<NodeEntry> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, &p)| NodeEntry { point: unit_array(p), id: NodeId(i as u32) })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        debug!(nodes = node_count, edges = edge_count, "built weighted graph");

        WeightedGraph {
            nodes: self.nodes,
            lookup: self.lookup,
            node_out_start,
            edge_to,
            edge_weight,
            spatial_idx,
        }
    }
}

impl Default for WeightedGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ── Complete graphs ───────────────────────────────────────────────────────────

/// Dense great-circle distance matrix: `m[i][j]` is the distance from
/// `points[i]` to `points[j]`.  Exactly symmetric with a zero diagonal.
pub fn pairwise_distances(points: &[GeoPoint], radius: Radius) -> Vec<Vec<f64>> {
    let n = points.len();
    let upper_row = |i: usize| -> Vec<f64> {
        points[i + 1..].iter().map(|&q| great_circle_distance(points[i], q, radius)).collect()
    };

    #[cfg(not(feature = "parallel"))]
    let upper: Vec<Vec<f64>> = (0..n).map(upper_row).collect();

    #[cfg(feature = "parallel")]
    let upper: Vec<Vec<f64>> = {
        use rayon::prelude::*;
        (0..n).into_par_iter().map(upper_row).collect()
    };

    let mut m = vec![vec![0.0; n]; n];
    for (i, row) in upper.into_iter().enumerate() {
        for (k, d) in row.into_iter().enumerate() {
            let j = i + 1 + k;
            m[i][j] = d;
            m[j][i] = d;
        }
    }
    m
}

/// Fully connected graph over `points`: one edge per ordered pair of distinct
/// nodes, weighted by great-circle distance.  No self-loops.
///
/// Repeated points collapse onto their first occurrence, so node ids follow
/// the order of first appearance.
///
/// # Errors
/// [`RouteError::Geo`] wrapping `InvalidArgument` if the distinct points
/// outnumber the available [`NodeId`]s.
pub fn build_graph(points: &[GeoPoint], radius: Radius) -> RouteResult<WeightedGraph> {
    let mut b = WeightedGraphBuilder::with_capacity(points.len(), 0);
    let mut ids = Vec::with_capacity(points.len());
    for &p in points {
        let id = b.add_node(p)?;
        if id.index() == ids.len() {
            ids.push(id);
        }
    }

    let collapsed = points.len() - b.node_count();
    if collapsed > 0 {
        warn!(
            points = points.len(),
            nodes = b.node_count(),
            collapsed,
            "duplicate points collapsed onto their first occurrence"
        );
    }

    // Every pair is distinct, so the overwrite table is not needed.
    let n = b.node_count();
    let dist = pairwise_distances(&b.nodes, radius);
    b.raw_edges.reserve(n * n.saturating_sub(1));
    for (i, row) in dist.iter().enumerate() {
        for (j, &d) in row.iter().enumerate() {
            if i != j {
                b.raw_edges.push(RawEdge { from: ids[i], to: ids[j], weight: d });
            }
        }
    }
    Ok(b.build())
}
