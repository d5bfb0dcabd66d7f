//! Tests for traversal selection strategies.

use super::store::Graph;
use super::strategy::{strategy_for, CostEstimate, Fixed, PathStrategy, WeightAware};
use super::traversal::Traversal;
use super::types::Node;
use crate::config::StrategyKind;

fn path_graph(len: u64) -> Graph {
    let mut graph = Graph::new();
    for key in 0..len {
        graph.add_node(Node::new(key));
    }
    for key in 1..len {
        graph.connect(key - 1, key);
    }
    graph
}

#[test]
fn test_weight_aware_selection() {
    let mut graph = path_graph(4);
    assert_eq!(WeightAware.select(&graph), Traversal::Bfs);
    graph.set_weight(0, 1, 2.0);
    assert_eq!(WeightAware.select(&graph), Traversal::Dijkstra);
}

#[test]
fn test_cost_estimate_prefers_bfs_on_sparse_graphs() {
    let graph = path_graph(100);
    assert_eq!(CostEstimate::dijkstra_cost(&graph), 10_000);
    assert_eq!(CostEstimate::bfs_cost(&graph), 199);
    assert_eq!(CostEstimate.select(&graph), Traversal::Bfs);
}

#[test]
fn test_cost_estimate_dense_unweighted_graph_still_bfs() {
    // Complete graph K5: V² = 25 against V + E = 15.
    let mut graph = path_graph(5);
    for a in 0..5 {
        for b in (a + 1)..5 {
            graph.connect(a, b);
        }
    }
    assert_eq!(graph.edge_count(), 10);
    assert_eq!(CostEstimate.select(&graph), Traversal::Bfs);
    assert_eq!(CostEstimate.select(&Graph::new()), Traversal::Bfs);
}

#[test]
fn test_cost_estimate_weighted_graph_uses_dijkstra() {
    let mut graph = path_graph(100);
    graph.set_weight(10, 11, 0.25);
    assert_eq!(CostEstimate.select(&graph), Traversal::Dijkstra);
}

#[test]
fn test_fixed_strategy() {
    let mut graph = path_graph(3);
    graph.set_weight(0, 1, 5.0);
    assert_eq!(Fixed(Traversal::Bfs).select(&graph), Traversal::Bfs);
    assert_eq!(Fixed(Traversal::Dijkstra).select(&graph), Traversal::Dijkstra);
    assert_eq!(Fixed(Traversal::Bfs).name(), "fixed_bfs");
}

#[test]
fn test_strategy_for_config_kind() {
    let graph = path_graph(5);
    assert_eq!(strategy_for(StrategyKind::WeightAware).name(), "weight_aware");
    assert_eq!(strategy_for(StrategyKind::CostEstimate).name(), "cost_estimate");
    assert_eq!(
        strategy_for(StrategyKind::Dijkstra).select(&graph),
        Traversal::Dijkstra
    );
    assert_eq!(strategy_for(StrategyKind::Bfs).select(&graph), Traversal::Bfs);
}
