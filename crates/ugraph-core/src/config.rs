//! Layered configuration for graph stores and the algorithms engine.
//!
//! Priority (lowest to highest): built-in defaults, `ugraph.toml`, then
//! environment variables prefixed `UGRAPH_` (`__` separates nested keys).
//!
//! ```toml
//! [graph]
//! node_capacity = 1000000
//! edge_capacity = 5000000
//! remove_edge_policy = "strict"
//!
//! [algorithms]
//! strategy = "weight_aware"
//! ```

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "ugraph.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "UGRAPH_";

const MAX_NODE_CAPACITY: u64 = 1 << 32;
const MAX_EDGE_CAPACITY: u64 = 1 << 36;

/// How [`Graph::remove_edge`](crate::Graph::remove_edge) accounts for a
/// request naming an edge that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoveEdgePolicy {
    /// The modification counter moves only when an edge is actually removed.
    #[default]
    Strict,
    /// Every call bumps the modification counter, even when nothing was removed.
    AlwaysCount,
}

/// Which traversal the engine uses for shortest-path queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// BFS on unit-weight graphs, Dijkstra otherwise.
    #[default]
    WeightAware,
    /// Compare V² against V+E and pick the cheaper estimate.
    CostEstimate,
    /// Always breadth-first.
    Bfs,
    /// Always Dijkstra.
    Dijkstra,
}

/// Graph store settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Expected number of nodes (pre-allocation hint).
    pub node_capacity: usize,
    /// Expected number of edges (pre-allocation hint).
    pub edge_capacity: usize,
    /// Counter policy for removing absent edges.
    pub remove_edge_policy: RemoveEdgePolicy,
}

/// Algorithms engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AlgorithmsConfig {
    /// Traversal selection strategy.
    pub strategy: StrategyKind,
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Graph store section.
    pub graph: GraphConfig,
    /// Algorithms engine section.
    pub algorithms: AlgorithmsConfig,
}

impl Config {
    /// Loads configuration from defaults, the TOML file at `path` (skipped
    /// when missing), and `UGRAPH_*` environment variables.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;
        config.validate()?;
        tracing::debug!(path = %path.as_ref().display(), ?config, "Loaded configuration");
        Ok(config)
    }

    /// Loads configuration from `ugraph.toml` in the working directory.
    pub fn load_default() -> Result<Self> {
        Self::load(CONFIG_FILE_NAME)
    }

    /// Parses configuration from a TOML string layered over defaults.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::string(toml_str))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Checks that capacity hints are within sane bounds.
    pub fn validate(&self) -> Result<()> {
        if self.graph.node_capacity as u64 > MAX_NODE_CAPACITY {
            return Err(Error::Config(format!(
                "graph.node_capacity {} exceeds maximum {}",
                self.graph.node_capacity, MAX_NODE_CAPACITY
            )));
        }
        if self.graph.edge_capacity as u64 > MAX_EDGE_CAPACITY {
            return Err(Error::Config(format!(
                "graph.edge_capacity {} exceeds maximum {}",
                self.graph.edge_capacity, MAX_EDGE_CAPACITY
            )));
        }
        Ok(())
    }
}
