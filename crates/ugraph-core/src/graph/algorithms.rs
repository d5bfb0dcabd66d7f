//! Shortest-path and connectivity engine bound to one [`Graph`].
//!
//! The engine only reads the graph. Traversal scratch state (tags) and the
//! per-source memo of [`ShortestPathTree`]s belong to the engine and are
//! discarded by [`GraphAlgorithms::init`]. Because the engine borrows the
//! graph, the graph cannot change underneath a memoized tree.

use rustc_hash::FxHashMap;

use crate::config::{AlgorithmsConfig, GraphConfig};

use super::store::Graph;
use super::strategy::{strategy_for, PathStrategy, WeightAware};
use super::traversal::{DenseIndex, ShortestPathTree, Tag};
use super::types::{Edge, Node, NodeKey};

/// Algorithms engine: shortest paths, distances, connectivity and copies.
///
/// # Example
///
/// ```rust
/// use ugraph_core::{Graph, GraphAlgorithms, Node};
///
/// let mut graph = Graph::new();
/// for key in 0..3 {
///     graph.add_node(Node::new(key));
/// }
/// graph.connect(0, 1);
/// graph.connect(1, 2);
///
/// let mut algo = GraphAlgorithms::new(&graph);
/// assert!(algo.is_connected());
/// assert_eq!(algo.shortest_path(0, 2), vec![0, 1, 2]);
/// assert_eq!(algo.shortest_path_dist(0, 2), Some(2.0));
/// assert!(algo.shortest_path(1, 1).is_empty());
/// ```
#[derive(Debug)]
pub struct GraphAlgorithms<'g> {
    graph: &'g Graph,
    index: DenseIndex,
    tags: Vec<Tag>,
    trees: FxHashMap<NodeKey, ShortestPathTree>,
    strategy: Box<dyn PathStrategy>,
}

impl<'g> GraphAlgorithms<'g> {
    /// Binds a new engine to `graph` with the [`WeightAware`] strategy.
    #[must_use]
    pub fn new(graph: &'g Graph) -> Self {
        Self::with_strategy(graph, Box::new(WeightAware))
    }

    /// Binds a new engine to `graph` with a custom traversal strategy.
    #[must_use]
    pub fn with_strategy(graph: &'g Graph, strategy: Box<dyn PathStrategy>) -> Self {
        let mut engine = Self {
            graph,
            index: DenseIndex::default(),
            tags: Vec::new(),
            trees: FxHashMap::default(),
            strategy,
        };
        engine.init(graph);
        engine
    }

    /// Binds a new engine to `graph` using the configured strategy.
    #[must_use]
    pub fn with_config(graph: &'g Graph, config: &AlgorithmsConfig) -> Self {
        Self::with_strategy(graph, strategy_for(config.strategy))
    }

    /// Rebinds the engine to `graph`, resetting tags and dropping every
    /// memoized tree.
    pub fn init(&mut self, graph: &'g Graph) {
        self.graph = graph;
        self.index = DenseIndex::build(graph);
        self.tags.clear();
        self.tags.resize(self.index.len(), Tag::Unvisited);
        self.trees.clear();
        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            mod_count = graph.mod_count(),
            strategy = self.strategy.name(),
            "Algorithms engine bound to graph"
        );
    }

    /// Replaces the traversal strategy and drops memoized trees.
    pub fn set_strategy(&mut self, strategy: Box<dyn PathStrategy>) {
        self.strategy = strategy;
        self.trees.clear();
    }

    /// Returns the bound graph.
    #[must_use]
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Number of sources with a memoized tree.
    #[must_use]
    pub fn memoized_sources(&self) -> usize {
        self.trees.len()
    }

    /// Scratch tag left on `key` by the most recent traversal.
    #[must_use]
    pub fn tag(&self, key: NodeKey) -> Option<Tag> {
        self.index.slot(key).map(|slot| self.tags[slot])
    }

    /// Builds an independent graph with the same keys, labels, adjacency and
    /// weights as the bound graph.
    #[must_use]
    pub fn copy(&self) -> Graph {
        let source = self.graph;
        let mut copy = Graph::with_config(&GraphConfig {
            node_capacity: source.node_count(),
            edge_capacity: source.edge_count(),
            remove_edge_policy: source.remove_edge_policy(),
        });
        for key in source.node_keys() {
            let mut node = Node::new(key);
            if let Some(label) = source.get_node(key).and_then(Node::label) {
                node.set_label(Some(label));
            }
            copy.add_node(node);
        }
        let mut edges: Vec<_> = source.edges().collect();
        edges.sort_unstable_by_key(Edge::key);
        for edge in edges {
            let key = edge.key();
            let added = copy.connect_weighted(key.low(), key.high(), edge.weight());
            debug_assert!(added, "copy rejected edge {key}");
        }
        tracing::debug!(
            nodes = copy.node_count(),
            edges = copy.edge_count(),
            "Graph copied"
        );
        copy
    }

    /// Returns true iff every pair of distinct nodes is joined by a path.
    ///
    /// One traversal from the smallest key: O(V+E). Graphs with zero or one
    /// node are connected.
    pub fn is_connected(&mut self) -> bool {
        if self.index.len() <= 1 {
            return true;
        }
        let total = self.index.len();
        let first = self.index.key(0);
        self.tree_for(first)
            .is_some_and(|tree| tree.reached() == total)
    }

    /// Keys on a shortest path `src, .., dest` (both inclusive).
    ///
    /// Empty when `src == dest`, when `dest` is unreachable, or when either
    /// key is absent.
    pub fn shortest_path(&mut self, src: NodeKey, dest: NodeKey) -> Vec<NodeKey> {
        if src == dest {
            return Vec::new();
        }
        let Some(dest_slot) = self.index.slot(dest) else {
            return Vec::new();
        };
        let Some(tree) = self.tree_for(src) else {
            return Vec::new();
        };
        let slots = tree.path_to(dest_slot);
        slots.into_iter().map(|slot| self.index.key(slot)).collect()
    }

    /// Like [`shortest_path`](Self::shortest_path) but yields the nodes.
    pub fn shortest_path_nodes(&mut self, src: NodeKey, dest: NodeKey) -> Vec<&'g Node> {
        let graph = self.graph;
        self.shortest_path(src, dest)
            .into_iter()
            .filter_map(|key| graph.get_node(key))
            .collect()
    }

    /// Length of the shortest path from `src` to `dest`.
    ///
    /// `Some(0.0)` when `src == dest` and the node exists; `None` when `dest`
    /// is unreachable or a key is absent. On unit-weight graphs this is the
    /// number of edges in [`shortest_path`](Self::shortest_path); otherwise it
    /// is that path's weight sum.
    pub fn shortest_path_dist(&mut self, src: NodeKey, dest: NodeKey) -> Option<f64> {
        let dest_slot = self.index.slot(dest)?;
        if src == dest {
            return Some(0.0);
        }
        self.tree_for(src)?.distance(dest_slot)
    }

    fn tree_for(&mut self, src: NodeKey) -> Option<&ShortestPathTree> {
        let source = self.index.slot(src)?;
        if self.trees.contains_key(&src) {
            tracing::trace!(src, "Shortest-path tree memo hit");
        } else {
            let traversal = self.strategy.select(self.graph);
            let tree = traversal.run(self.graph, &self.index, source, &mut self.tags);
            tracing::debug!(
                src,
                ?traversal,
                strategy = self.strategy.name(),
                reached = tree.reached(),
                "Shortest-path tree computed"
            );
            self.trees.insert(src, tree);
        }
        self.trees.get(&src)
    }
}
