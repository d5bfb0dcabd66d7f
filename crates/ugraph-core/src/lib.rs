//! # ugraph Core
//!
//! In-memory undirected graph store with O(1) structural mutation and an
//! algorithms engine for shortest paths and global connectivity.
//!
//! ## Features
//!
//! - **Compact adjacency**: per-node key sets plus an unordered-pair edge map, no dense matrix
//! - **Change detection**: a modification counter bumped once per accepted mutation
//! - **Shortest paths**: BFS on unit weights, Dijkstra on weighted graphs, pluggable selection
//! - **Memoization**: one traversal per source, reused until the engine is rebound
//! - **Silent failure**: bad keys yield `false`, `None` or empty results, never panics
//!
//! ## Quick Start
//!
//! ```rust
//! use ugraph_core::{Graph, GraphAlgorithms, Node};
//!
//! let mut graph = Graph::new();
//! for key in 0..4 {
//!     graph.add_node(Node::new(key));
//! }
//! graph.connect(0, 1);
//! graph.connect(1, 2);
//! graph.connect(2, 3);
//!
//! let mut algo = GraphAlgorithms::new(&graph);
//! assert!(algo.is_connected());
//! assert_eq!(algo.shortest_path(0, 3), vec![0, 1, 2, 3]);
//! assert_eq!(algo.shortest_path_dist(3, 0), Some(3.0));
//!
//! // Snapshot before mutating.
//! let mut snapshot = algo.copy();
//! snapshot.remove_node(1);
//! assert_eq!(graph.node_count(), 4);
//! ```

#![warn(missing_docs)]
// Clippy lints configured in workspace Cargo.toml [workspace.lints.clippy]
#![cfg_attr(test, allow(clippy::float_cmp, clippy::cast_precision_loss))]

pub mod config;
#[cfg(test)]
mod config_tests;
pub mod error;
pub mod graph;

pub use config::{AlgorithmsConfig, Config, GraphConfig, RemoveEdgePolicy, StrategyKind};
pub use error::{Error, Result};
pub use graph::{
    Edge, EdgeKey, Graph, GraphAlgorithms, KeyAllocator, Node, NodeKey, PathStrategy, Traversal,
};
