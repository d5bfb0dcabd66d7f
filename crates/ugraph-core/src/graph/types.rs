//! Node, edge and key types for the undirected graph store.
//!
//! Identity is defined by key alone: two [`Node`]s are equal iff their keys
//! are equal, and two [`Edge`]s are equal iff they join the same unordered
//! pair of keys.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Stable integer identity of a node within one graph.
pub type NodeKey = u64;

/// Weight assigned by [`Graph::connect`](super::Graph::connect).
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Returns true if `weight` can be stored on an edge.
#[must_use]
pub fn is_valid_weight(weight: f64) -> bool {
    weight.is_finite() && weight >= 0.0
}

/// A vertex of the graph.
///
/// The adjacency set is owned by the store: it is filled by `connect`,
/// drained by `remove_edge`/`remove_node`, and cleared when a node is
/// registered through `add_node`.
///
/// # Example
///
/// ```rust
/// use ugraph_core::Node;
///
/// let node = Node::new(7).with_label("router");
/// assert_eq!(node.key(), 7);
/// assert_eq!(node.label(), Some("router"));
/// assert_eq!(node.degree(), 0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    key: NodeKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(skip)]
    neighbors: FxHashSet<NodeKey>,
}

impl Node {
    /// Creates a node with the given key and no label.
    #[must_use]
    pub fn new(key: NodeKey) -> Self {
        Self {
            key,
            label: None,
            neighbors: FxHashSet::default(),
        }
    }

    /// Attaches a label (builder pattern).
    #[must_use]
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    /// Returns the node key.
    #[must_use]
    pub fn key(&self) -> NodeKey {
        self.key
    }

    /// Returns the label, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Replaces the label. `None` clears it.
    pub fn set_label(&mut self, label: Option<&str>) {
        self.label = label.map(str::to_string);
    }

    /// Iterates over the keys of adjacent nodes (unordered).
    pub fn neighbors(&self) -> impl Iterator<Item = NodeKey> + '_ {
        self.neighbors.iter().copied()
    }

    /// Returns true if `key` is adjacent to this node.
    #[must_use]
    pub fn has_neighbor(&self, key: NodeKey) -> bool {
        self.neighbors.contains(&key)
    }

    /// Number of adjacent nodes.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    pub(crate) fn add_neighbor(&mut self, key: NodeKey) -> bool {
        self.neighbors.insert(key)
    }

    pub(crate) fn remove_neighbor(&mut self, key: NodeKey) -> bool {
        self.neighbors.remove(&key)
    }

    pub(crate) fn clear_neighbors(&mut self) {
        self.neighbors.clear();
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node {}", self.key)?;
        if let Some(label) = &self.label {
            write!(f, " [{label}]")?;
        }
        let mut keys: Vec<NodeKey> = self.neighbors().collect();
        keys.sort_unstable();
        let joined: Vec<String> = keys.iter().map(ToString::to_string).collect();
        write!(f, " -> {{{}}}", joined.join(", "))
    }
}

/// Unordered pair of node keys, normalized so that `low() <= high()`.
///
/// `EdgeKey::new(a, b) == EdgeKey::new(b, a)` and both hash identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeKey {
    low: NodeKey,
    high: NodeKey,
}

impl EdgeKey {
    /// Creates the key for the edge joining `a` and `b`.
    #[must_use]
    pub fn new(a: NodeKey, b: NodeKey) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// Smaller endpoint.
    #[must_use]
    pub fn low(&self) -> NodeKey {
        self.low
    }

    /// Larger endpoint.
    #[must_use]
    pub fn high(&self) -> NodeKey {
        self.high
    }

    /// Returns true if `key` is one of the endpoints.
    #[must_use]
    pub fn contains(&self, key: NodeKey) -> bool {
        self.low == key || self.high == key
    }

    /// Returns the endpoint opposite to `key`, or `None` if `key` is not an endpoint.
    #[must_use]
    pub fn other(&self, key: NodeKey) -> Option<NodeKey> {
        if key == self.low {
            Some(self.high)
        } else if key == self.high {
            Some(self.low)
        } else {
            None
        }
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{},{}}}", self.low, self.high)
    }
}

/// An undirected, optionally weighted edge.
///
/// Equality and hashing use the endpoint pair only; the weight is payload.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Edge {
    key: EdgeKey,
    weight: f64,
}

impl Edge {
    pub(crate) fn new(key: EdgeKey, weight: f64) -> Self {
        Self { key, weight }
    }

    /// Returns the endpoint pair.
    #[must_use]
    pub fn key(&self) -> EdgeKey {
        self.key
    }

    /// Returns the stored weight.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.key.fmt(f)
    }
}

/// Per-instance source of fresh node keys.
///
/// Callers that do not manage keys themselves hand one allocator to the code
/// that builds a graph; there is no process-wide counter.
///
/// # Example
///
/// ```rust
/// use ugraph_core::{Graph, KeyAllocator};
///
/// let mut keys = KeyAllocator::new();
/// let mut graph = Graph::new();
/// let a = keys.node();
/// let b = keys.node();
/// let (ka, kb) = (a.key(), b.key());
/// graph.add_node(a);
/// graph.add_node(b);
/// assert!(graph.connect(ka, kb));
/// assert_eq!(keys.peek(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct KeyAllocator {
    next: NodeKey,
}

impl KeyAllocator {
    /// Creates an allocator starting at key 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an allocator whose first key is `start`.
    #[must_use]
    pub fn starting_at(start: NodeKey) -> Self {
        Self { next: start }
    }

    /// Returns the next key and advances.
    pub fn next_key(&mut self) -> NodeKey {
        let key = self.next;
        self.next = self.next.saturating_add(1);
        key
    }

    /// Returns the key the next call to [`next_key`](Self::next_key) will hand out.
    #[must_use]
    pub fn peek(&self) -> NodeKey {
        self.next
    }

    /// Makes sure a caller-supplied `key` is never handed out later.
    pub fn observe(&mut self, key: NodeKey) {
        if key >= self.next {
            self.next = key.saturating_add(1);
        }
    }

    /// Allocates a key and wraps it in a fresh [`Node`].
    pub fn node(&mut self) -> Node {
        Node::new(self.next_key())
    }
}
