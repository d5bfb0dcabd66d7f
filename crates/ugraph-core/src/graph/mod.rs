//! In-memory undirected graph store and algorithms engine.
//!
//! # Example
//!
//! ```rust
//! use ugraph_core::graph::{Graph, GraphAlgorithms, Node};
//!
//! let mut graph = Graph::new();
//! graph.add_node(Node::new(1).with_label("a"));
//! graph.add_node(Node::new(2).with_label("b"));
//! graph.add_node(Node::new(3));
//! graph.connect(1, 2);
//! graph.connect_weighted(2, 3, 2.5);
//!
//! let mut algo = GraphAlgorithms::new(&graph);
//! assert_eq!(algo.shortest_path(1, 3), vec![1, 2, 3]);
//! assert_eq!(algo.shortest_path_dist(1, 3), Some(3.5));
//! ```

pub mod algorithms;
mod store;
pub mod strategy;
pub mod traversal;
mod types;

#[cfg(test)]
mod strategy_tests;

pub use algorithms::GraphAlgorithms;
pub use store::Graph;
pub use strategy::{CostEstimate, Fixed, PathStrategy, WeightAware};
pub use traversal::{ShortestPathTree, Tag, Traversal};
pub use types::{is_valid_weight, Edge, EdgeKey, KeyAllocator, Node, NodeKey, DEFAULT_WEIGHT};
