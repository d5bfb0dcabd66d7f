//! Tests for configuration loading and validation.

use super::config::{
    AlgorithmsConfig, Config, GraphConfig, RemoveEdgePolicy, StrategyKind, CONFIG_FILE_NAME,
};
use super::error::Error;
use std::io::Write;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.graph.node_capacity, 0);
    assert_eq!(config.graph.edge_capacity, 0);
    assert_eq!(config.graph.remove_edge_policy, RemoveEdgePolicy::Strict);
    assert_eq!(config.algorithms.strategy, StrategyKind::WeightAware);
    assert!(config.validate().is_ok());
}

#[test]
fn test_from_toml_str() {
    let config = Config::from_toml_str(
        r#"
        [graph]
        node_capacity = 1000
        remove_edge_policy = "always_count"

        [algorithms]
        strategy = "cost_estimate"
        "#,
    )
    .unwrap();

    assert_eq!(config.graph.node_capacity, 1000);
    assert_eq!(config.graph.edge_capacity, 0, "missing keys keep defaults");
    assert_eq!(config.graph.remove_edge_policy, RemoveEdgePolicy::AlwaysCount);
    assert_eq!(config.algorithms.strategy, StrategyKind::CostEstimate);
}

#[test]
fn test_from_empty_toml_is_default() {
    let config = Config::from_toml_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_unknown_enum_value_fails() {
    let result = Config::from_toml_str(
        r#"
        [algorithms]
        strategy = "a_star"
        "#,
    );
    assert!(matches!(result, Err(Error::ConfigLoad(_))));
}

#[test]
fn test_validate_rejects_huge_capacity() {
    let config = Config {
        graph: GraphConfig {
            edge_capacity: usize::MAX,
            ..GraphConfig::default()
        },
        algorithms: AlgorithmsConfig::default(),
    };
    assert!(matches!(config.validate(), Err(Error::Config(_))));
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "[graph]\nedge_capacity = 5000\n[algorithms]\nstrategy = \"dijkstra\"").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.graph.edge_capacity, 5000);
    assert_eq!(config.algorithms.strategy, StrategyKind::Dijkstra);
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.graph, GraphConfig::default());
}

#[test]
fn test_toml_round_trip() {
    let config = Config {
        graph: GraphConfig {
            node_capacity: 10,
            edge_capacity: 20,
            remove_edge_policy: RemoveEdgePolicy::AlwaysCount,
        },
        algorithms: AlgorithmsConfig {
            strategy: StrategyKind::Bfs,
        },
    };
    let rendered = config.to_toml_string().unwrap();
    assert!(rendered.contains("remove_edge_policy = \"always_count\""));
    assert_eq!(Config::from_toml_str(&rendered).unwrap(), config);
}

#[test]
fn test_load_default_without_file() {
    // No ugraph.toml ships with the crate, so only defaults and env apply.
    let config = Config::load_default().unwrap();
    assert!(config.validate().is_ok());
}
