//! Single-source shortest-path traversals (BFS and Dijkstra).
//!
//! Traversals work on dense slots `0..n` handed out by a `DenseIndex`, so
//! scratch tags, predecessors and distances are plain vectors sized to the
//! graph. Slots are minted only by the engine; the traversal entry points are
//! crate-private and callers outside the crate work with node keys.

use rustc_hash::FxHashMap;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use super::store::Graph;
use super::types::NodeKey;

/// Read-only adjacency surface a traversal needs.
pub(crate) trait GraphTraversal {
    /// Calls `visit(neighbor, weight)` for every edge incident to `key`.
    fn for_each_neighbor<F: FnMut(NodeKey, f64)>(&self, key: NodeKey, visit: F);
}

impl GraphTraversal for Graph {
    fn for_each_neighbor<F: FnMut(NodeKey, f64)>(&self, key: NodeKey, mut visit: F) {
        if let Some(node) = self.get_node(key) {
            for other in node.neighbors() {
                visit(other, self.edge_weight(key, other));
            }
        }
    }
}

/// Per-node traversal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tag {
    /// Not discovered yet.
    #[default]
    Unvisited,
    /// Discovered, waiting in the queue.
    Frontier,
    /// Expanded; its distance is final.
    Settled,
}

/// Traversal algorithm used to build a [`ShortestPathTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// Breadth-first search: fewest hops.
    Bfs,
    /// Dijkstra relaxation: least total weight.
    Dijkstra,
}

impl Traversal {
    /// Runs this traversal from `source`, reusing `tags` as scratch space.
    ///
    /// `source` must be a slot of `index` and `tags` must hold one entry per
    /// indexed node.
    pub(crate) fn run<G: GraphTraversal>(
        self,
        graph: &G,
        index: &DenseIndex,
        source: usize,
        tags: &mut [Tag],
    ) -> ShortestPathTree {
        match self {
            Self::Bfs => bfs(graph, index, source, tags),
            Self::Dijkstra => dijkstra(graph, index, source, tags),
        }
    }
}

/// Bijection between node keys and dense slots `0..n` (ascending key order).
#[derive(Debug, Clone, Default)]
pub(crate) struct DenseIndex {
    keys: Vec<NodeKey>,
    slots: FxHashMap<NodeKey, usize>,
}

impl DenseIndex {
    /// Indexes every node of `graph`.
    #[must_use]
    pub(crate) fn build(graph: &Graph) -> Self {
        let keys = graph.node_keys();
        let slots = keys.iter().enumerate().map(|(i, &k)| (k, i)).collect();
        Self { keys, slots }
    }

    /// Slot of `key`, if indexed.
    #[must_use]
    pub(crate) fn slot(&self, key: NodeKey) -> Option<usize> {
        self.slots.get(&key).copied()
    }

    /// Key stored at `slot`. `slot` must be below [`len`](Self::len).
    #[must_use]
    pub(crate) fn key(&self, slot: usize) -> NodeKey {
        self.keys[slot]
    }

    /// Number of indexed nodes.
    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }
}

/// Predecessor and distance tables computed from one source.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: usize,
    predecessors: Vec<Option<usize>>,
    distances: Vec<f64>,
    reached: usize,
    traversal: Traversal,
}

impl ShortestPathTree {
    fn new(source: usize, len: usize, traversal: Traversal) -> Self {
        let mut distances = vec![f64::INFINITY; len];
        distances[source] = 0.0;
        Self {
            source,
            predecessors: vec![None; len],
            distances,
            reached: 0,
            traversal,
        }
    }

    /// Slot the tree was grown from.
    #[must_use]
    pub fn source(&self) -> usize {
        self.source
    }

    /// Distance to `slot`, or `None` if unreachable.
    #[must_use]
    pub fn distance(&self, slot: usize) -> Option<f64> {
        self.distances
            .get(slot)
            .copied()
            .filter(|d| d.is_finite())
    }

    /// Predecessor table indexed by slot.
    #[must_use]
    pub fn predecessors(&self) -> &[Option<usize>] {
        &self.predecessors
    }

    /// Number of nodes reachable from the source, the source included.
    #[must_use]
    pub fn reached(&self) -> usize {
        self.reached
    }

    /// Algorithm that produced this tree.
    #[must_use]
    pub fn traversal(&self) -> Traversal {
        self.traversal
    }

    /// Slots on the path from the source to `dest`, both inclusive.
    #[must_use]
    pub fn path_to(&self, dest: usize) -> Vec<usize> {
        reconstruct_path(self.source, dest, &self.predecessors)
    }
}

/// Breadth-first search from `source`.
///
/// Records each node's predecessor on first discovery. Distances are the
/// weight sums along the discovered (fewest-hop) paths, which equal hop
/// counts on unit-weight graphs. The whole component is explored so the
/// tree can answer every destination.
pub(crate) fn bfs<G: GraphTraversal>(
    graph: &G,
    index: &DenseIndex,
    source: usize,
    tags: &mut [Tag],
) -> ShortestPathTree {
    let mut tree = ShortestPathTree::new(source, index.len(), Traversal::Bfs);
    tags.fill(Tag::Unvisited);

    let mut queue = VecDeque::new();
    tags[source] = Tag::Frontier;
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        let current_key = index.key(current);
        let current_dist = tree.distances[current];
        graph.for_each_neighbor(current_key, |neighbor_key, weight| {
            let Some(neighbor) = index.slot(neighbor_key) else {
                return;
            };
            if tags[neighbor] == Tag::Unvisited {
                tags[neighbor] = Tag::Frontier;
                tree.predecessors[neighbor] = Some(current);
                tree.distances[neighbor] = current_dist + weight;
                queue.push_back(neighbor);
            }
        });
        tags[current] = Tag::Settled;
        tree.reached += 1;
    }

    tree
}

/// Priority-queue entry ordered by tentative distance.
#[derive(Debug, Clone, Copy, PartialEq)]
struct OrderedDist(f64);

impl Eq for OrderedDist {}

impl PartialOrd for OrderedDist {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderedDist {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Dijkstra relaxation from `source`. Weights must be non-negative.
///
/// A node is pushed once per improvement; stale heap entries for settled
/// nodes are skipped on pop.
pub(crate) fn dijkstra<G: GraphTraversal>(
    graph: &G,
    index: &DenseIndex,
    source: usize,
    tags: &mut [Tag],
) -> ShortestPathTree {
    let mut tree = ShortestPathTree::new(source, index.len(), Traversal::Dijkstra);
    tags.fill(Tag::Unvisited);

    let mut heap: BinaryHeap<Reverse<(OrderedDist, usize)>> = BinaryHeap::new();
    tags[source] = Tag::Frontier;
    heap.push(Reverse((OrderedDist(0.0), source)));

    while let Some(Reverse((OrderedDist(dist), current))) = heap.pop() {
        if tags[current] == Tag::Settled {
            continue;
        }
        tags[current] = Tag::Settled;
        tree.reached += 1;

        graph.for_each_neighbor(index.key(current), |neighbor_key, weight| {
            let Some(neighbor) = index.slot(neighbor_key) else {
                return;
            };
            if tags[neighbor] == Tag::Settled {
                return;
            }
            let alt = dist + weight;
            if alt < tree.distances[neighbor] {
                tree.distances[neighbor] = alt;
                tree.predecessors[neighbor] = Some(current);
                tags[neighbor] = Tag::Frontier;
                heap.push(Reverse((OrderedDist(alt), neighbor)));
            }
        });
    }

    tree
}

/// Walks predecessor links back from `dest` to `source`.
///
/// Returns the slots `source, .., dest`, or an empty vector if the walk does
/// not end at `source` (unreachable `dest`, or out-of-range slots).
#[must_use]
pub fn reconstruct_path(source: usize, dest: usize, predecessors: &[Option<usize>]) -> Vec<usize> {
    if dest >= predecessors.len() || source >= predecessors.len() {
        return Vec::new();
    }
    let mut path = vec![dest];
    let mut at = dest;
    while let Some(prev) = predecessors[at] {
        // A well-formed tree never revisits a slot; stop instead of looping.
        if path.len() > predecessors.len() {
            return Vec::new();
        }
        path.push(prev);
        at = prev;
    }
    if at != source {
        return Vec::new();
    }
    path.reverse();
    path
}
