//! In-memory undirected graph store.
//!
//! Nodes live in a key-indexed map and carry their own adjacency sets; edge
//! records (with weights) live in a second map keyed by the unordered pair.
//! Both maps are kept in lockstep so that adjacency is always symmetric and
//! every edge references two present nodes.

use rustc_hash::FxHashMap;
use std::fmt;

use crate::config::{GraphConfig, RemoveEdgePolicy};
use crate::error::{Error, Result};

use super::types::{is_valid_weight, Edge, EdgeKey, Node, NodeKey, DEFAULT_WEIGHT};

/// Undirected graph with O(1) node/edge mutation and queries.
///
/// Every accepted structural change (node add, edge add, node removal, edge
/// removal, weight change) bumps [`mod_count`](Self::mod_count) by exactly one.
///
/// # Example
///
/// ```rust
/// use ugraph_core::{Graph, Node};
///
/// let mut graph = Graph::new();
/// graph.add_node(Node::new(1));
/// graph.add_node(Node::new(2));
/// assert!(graph.connect(1, 2));
/// assert!(graph.has_edge(2, 1));
/// assert_eq!(graph.mod_count(), 3);
/// ```
#[derive(Debug, Default)]
pub struct Graph {
    nodes: FxHashMap<NodeKey, Node>,
    /// Edge records: unordered pair -> weight.
    edges: FxHashMap<EdgeKey, f64>,
    /// Number of edges whose weight differs from `DEFAULT_WEIGHT`.
    weighted_edges: usize,
    mod_count: u64,
    remove_edge_policy: RemoveEdgePolicy,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(expected_nodes: usize, expected_edges: usize) -> Self {
        Self {
            nodes: FxHashMap::with_capacity_and_hasher(expected_nodes, Default::default()),
            edges: FxHashMap::with_capacity_and_hasher(expected_edges, Default::default()),
            ..Self::default()
        }
    }

    /// Creates an empty graph from configuration.
    #[must_use]
    pub fn with_config(config: &GraphConfig) -> Self {
        let mut graph = Self::with_capacity(config.node_capacity, config.edge_capacity);
        graph.remove_edge_policy = config.remove_edge_policy;
        graph
    }

    /// Returns the counter policy applied by [`remove_edge`](Self::remove_edge).
    #[must_use]
    pub fn remove_edge_policy(&self) -> RemoveEdgePolicy {
        self.remove_edge_policy
    }

    // ── Node operations ────────────────────────────────────────────────

    /// Registers `node` unless a node with the same key is already present.
    ///
    /// Any adjacency the node carries (for example after being removed from
    /// another graph) is discarded. Returns true if the node was added.
    pub fn add_node(&mut self, mut node: Node) -> bool {
        let key = node.key();
        if self.nodes.contains_key(&key) {
            return false;
        }
        node.clear_neighbors();
        self.nodes.insert(key, node);
        self.bump();
        tracing::trace!(key, mod_count = self.mod_count, "Node added");
        true
    }

    /// Returns the node with the given key.
    #[must_use]
    pub fn get_node(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(&key)
    }

    /// Replaces the label of node `key`. `None` clears it.
    ///
    /// Labels are payload, not structure: the modification counter is
    /// untouched. Returns false if the node is absent.
    pub fn set_label(&mut self, key: NodeKey, label: Option<&str>) -> bool {
        match self.nodes.get_mut(&key) {
            Some(node) => {
                node.set_label(label);
                true
            }
            None => false,
        }
    }

    /// Returns true if a node with the given key exists.
    #[must_use]
    pub fn contains_node(&self, key: NodeKey) -> bool {
        self.nodes.contains_key(&key)
    }

    /// Removes a node and every incident edge.
    ///
    /// The returned node still lists its former neighbors.
    ///
    /// Runs in O(degree): the node's own adjacency set names exactly the
    /// edges to drop. Counts as one modification however many edges go.
    pub fn remove_node(&mut self, key: NodeKey) -> Option<Node> {
        let node = self.nodes.remove(&key)?;
        for other in node.neighbors() {
            if let Some(weight) = self.edges.remove(&EdgeKey::new(key, other)) {
                self.forget_weight(weight);
            }
            let detached = self
                .nodes
                .get_mut(&other)
                .is_some_and(|n| n.remove_neighbor(key));
            debug_assert!(detached, "adjacency of {other} did not list {key}");
        }
        self.bump();
        tracing::trace!(
            key,
            dropped_edges = node.degree(),
            mod_count = self.mod_count,
            "Node removed"
        );
        Some(node)
    }

    /// Returns the total number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterates over all nodes (unordered).
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.values()
    }

    /// Returns all node keys in ascending order.
    #[must_use]
    pub fn node_keys(&self) -> Vec<NodeKey> {
        let mut keys: Vec<NodeKey> = self.nodes.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Iterates over the nodes adjacent to `key`. Empty if `key` is absent.
    pub fn neighbors(&self, key: NodeKey) -> impl Iterator<Item = &Node> + '_ {
        self.nodes
            .get(&key)
            .into_iter()
            .flat_map(|n| n.neighbors())
            .filter_map(move |k| self.nodes.get(&k))
    }

    /// Number of edges incident to `key` (0 if absent).
    #[must_use]
    pub fn degree(&self, key: NodeKey) -> usize {
        self.nodes.get(&key).map_or(0, Node::degree)
    }

    // ── Edge operations ────────────────────────────────────────────────

    /// Connects `u` and `v` with the default weight.
    ///
    /// No-op (returns false) for self-loops, missing endpoints, or an edge
    /// that already exists.
    pub fn connect(&mut self, u: NodeKey, v: NodeKey) -> bool {
        self.insert_edge(u, v, DEFAULT_WEIGHT)
    }

    /// Connects `u` and `v` with weight `weight`.
    ///
    /// Same no-op rules as [`connect`](Self::connect); an invalid weight
    /// (negative, NaN, infinite) is also rejected.
    pub fn connect_weighted(&mut self, u: NodeKey, v: NodeKey, weight: f64) -> bool {
        if !is_valid_weight(weight) {
            tracing::warn!(u, v, weight, "Rejected edge with invalid weight");
            return false;
        }
        self.insert_edge(u, v, weight)
    }

    /// Like [`connect_weighted`](Self::connect_weighted) but reports why an
    /// edge was rejected. `Ok(false)` means the edge already existed or
    /// `u == v`.
    pub fn try_connect_weighted(&mut self, u: NodeKey, v: NodeKey, weight: f64) -> Result<bool> {
        if !is_valid_weight(weight) {
            return Err(Error::InvalidWeight(weight));
        }
        for key in [u, v] {
            if !self.nodes.contains_key(&key) {
                return Err(Error::NodeNotFound(key));
            }
        }
        Ok(self.insert_edge(u, v, weight))
    }

    fn insert_edge(&mut self, u: NodeKey, v: NodeKey, weight: f64) -> bool {
        if u == v || !self.nodes.contains_key(&u) || !self.nodes.contains_key(&v) {
            return false;
        }
        let edge_key = EdgeKey::new(u, v);
        if self.edges.contains_key(&edge_key) {
            return false;
        }
        self.edges.insert(edge_key, weight);
        self.remember_weight(weight);
        if let Some(node) = self.nodes.get_mut(&u) {
            node.add_neighbor(v);
        }
        if let Some(node) = self.nodes.get_mut(&v) {
            node.add_neighbor(u);
        }
        self.bump();
        tracing::trace!(u, v, weight, mod_count = self.mod_count, "Edge added");
        true
    }

    /// Changes the weight of an existing edge.
    ///
    /// Returns false if the edge is absent, the weight is invalid, or the
    /// weight is unchanged; only an actual change bumps the counter.
    pub fn set_weight(&mut self, u: NodeKey, v: NodeKey, weight: f64) -> bool {
        self.try_set_weight(u, v, weight).unwrap_or(false)
    }

    /// Like [`set_weight`](Self::set_weight) but reports an invalid weight
    /// as an error. `Ok(false)` means no edge or no change; `0.0` and `-0.0`
    /// are the same weight.
    #[allow(clippy::float_cmp)] // NaN is rejected before comparing
    pub fn try_set_weight(&mut self, u: NodeKey, v: NodeKey, weight: f64) -> Result<bool> {
        if !is_valid_weight(weight) {
            return Err(Error::InvalidWeight(weight));
        }
        let Some(slot) = self.edges.get_mut(&EdgeKey::new(u, v)) else {
            return Ok(false);
        };
        let previous = *slot;
        if previous == weight {
            return Ok(false);
        }
        *slot = weight;
        self.forget_weight(previous);
        self.remember_weight(weight);
        self.bump();
        tracing::trace!(u, v, weight, mod_count = self.mod_count, "Edge weight changed");
        Ok(true)
    }

    /// Removes the edge between `u` and `v`. Returns true if one was removed.
    ///
    /// Under [`RemoveEdgePolicy::AlwaysCount`] the modification counter is
    /// bumped even when no edge existed.
    pub fn remove_edge(&mut self, u: NodeKey, v: NodeKey) -> bool {
        let removed = match self.edges.remove(&EdgeKey::new(u, v)) {
            Some(weight) => {
                self.forget_weight(weight);
                if let Some(node) = self.nodes.get_mut(&u) {
                    node.remove_neighbor(v);
                }
                if let Some(node) = self.nodes.get_mut(&v) {
                    node.remove_neighbor(u);
                }
                true
            }
            None => false,
        };
        if removed || self.remove_edge_policy == RemoveEdgePolicy::AlwaysCount {
            self.bump();
        }
        tracing::trace!(u, v, removed, mod_count = self.mod_count, "Edge removal");
        removed
    }

    /// Returns true if `u` and `v` are adjacent. Symmetric.
    #[must_use]
    pub fn has_edge(&self, u: NodeKey, v: NodeKey) -> bool {
        self.edges.contains_key(&EdgeKey::new(u, v))
    }

    /// Returns the edge between `u` and `v`.
    #[must_use]
    pub fn get_edge(&self, u: NodeKey, v: NodeKey) -> Option<Edge> {
        let key = EdgeKey::new(u, v);
        self.edges.get(&key).map(|&w| Edge::new(key, w))
    }

    /// Returns the weight of the edge `u`-`v`, or +infinity if there is none.
    #[must_use]
    pub fn edge_weight(&self, u: NodeKey, v: NodeKey) -> f64 {
        self.edges
            .get(&EdgeKey::new(u, v))
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    /// Returns the total number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterates over all edges (unordered).
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().map(|(&key, &w)| Edge::new(key, w))
    }

    /// Returns true if every edge carries the default weight.
    #[must_use]
    pub fn is_unweighted(&self) -> bool {
        self.weighted_edges == 0
    }

    /// Current modification counter. Never decreases.
    #[must_use]
    pub fn mod_count(&self) -> u64 {
        self.mod_count
    }

    fn bump(&mut self) {
        self.mod_count += 1;
    }

    #[allow(clippy::float_cmp)] // exact sentinel comparison
    fn remember_weight(&mut self, weight: f64) {
        if weight != DEFAULT_WEIGHT {
            self.weighted_edges += 1;
        }
    }

    #[allow(clippy::float_cmp)] // exact sentinel comparison
    fn forget_weight(&mut self, weight: f64) {
        if weight != DEFAULT_WEIGHT {
            self.weighted_edges -= 1;
        }
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "UndirectedGraph (mod count {})", self.mod_count)?;
        let keys: Vec<String> = self.node_keys().iter().map(ToString::to_string).collect();
        writeln!(f, "V={{{}}}", keys.join(", "))?;
        let mut edges: Vec<EdgeKey> = self.edges.keys().copied().collect();
        edges.sort_unstable();
        let edges: Vec<String> = edges.iter().map(ToString::to_string).collect();
        write!(f, "E={{{}}}", edges.join(", "))
    }
}
