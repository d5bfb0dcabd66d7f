//! Pluggable choice of traversal for shortest-path queries.

use std::fmt;

use crate::config::StrategyKind;

use super::store::Graph;
use super::traversal::Traversal;

/// Picks the traversal the engine runs for a graph.
pub trait PathStrategy: fmt::Debug {
    /// Chooses a traversal for `graph`.
    fn select(&self, graph: &Graph) -> Traversal;

    /// Short name used in log events.
    fn name(&self) -> &'static str;
}

/// BFS when every edge has the default weight, Dijkstra otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightAware;

impl PathStrategy for WeightAware {
    fn select(&self, graph: &Graph) -> Traversal {
        if graph.is_unweighted() {
            Traversal::Bfs
        } else {
            Traversal::Dijkstra
        }
    }

    fn name(&self) -> &'static str {
        "weight_aware"
    }
}

/// Compares the estimated cost of Dijkstra (V²) with BFS (V+E).
///
/// On sparse graphs this nearly always picks BFS. Weighted graphs always get
/// Dijkstra since BFS would not minimise total weight there.
#[derive(Debug, Clone, Copy, Default)]
pub struct CostEstimate;

impl CostEstimate {
    /// Estimated Dijkstra cost for `graph`.
    #[must_use]
    pub fn dijkstra_cost(graph: &Graph) -> u128 {
        let v = graph.node_count() as u128;
        v * v
    }

    /// Estimated BFS cost for `graph`.
    #[must_use]
    pub fn bfs_cost(graph: &Graph) -> u128 {
        graph.node_count() as u128 + graph.edge_count() as u128
    }
}

impl PathStrategy for CostEstimate {
    fn select(&self, graph: &Graph) -> Traversal {
        if !graph.is_unweighted() || Self::dijkstra_cost(graph) < Self::bfs_cost(graph) {
            Traversal::Dijkstra
        } else {
            Traversal::Bfs
        }
    }

    fn name(&self) -> &'static str {
        "cost_estimate"
    }
}

/// Always runs the same traversal.
#[derive(Debug, Clone, Copy)]
pub struct Fixed(pub Traversal);

impl PathStrategy for Fixed {
    fn select(&self, _graph: &Graph) -> Traversal {
        self.0
    }

    fn name(&self) -> &'static str {
        match self.0 {
            Traversal::Bfs => "fixed_bfs",
            Traversal::Dijkstra => "fixed_dijkstra",
        }
    }
}

/// Builds the strategy named by configuration.
#[must_use]
pub fn strategy_for(kind: StrategyKind) -> Box<dyn PathStrategy> {
    match kind {
        StrategyKind::WeightAware => Box::new(WeightAware),
        StrategyKind::CostEstimate => Box::new(CostEstimate),
        StrategyKind::Bfs => Box::new(Fixed(Traversal::Bfs)),
        StrategyKind::Dijkstra => Box::new(Fixed(Traversal::Dijkstra)),
    }
}
