//! Mind-map graph data model.

use serde::{Deserialize, Serialize};

/// Undirected edge between two named nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

/// A star graph: one hub and leaves connected only to the hub.
///
/// Node order is the hub followed by the leaves in lexicographic order.
/// The structure is immutable once built, which keeps the star invariants
/// (leaf degree 1, no self-loops, no duplicate edges) true by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MindMapGraph {
    hub: String,
    leaves: Vec<String>,
}

impl MindMapGraph {
    /// Assemble a graph from a hub and already sorted, distinct leaves.
    pub(crate) fn from_parts(hub: String, leaves: Vec<String>) -> Self {
        debug_assert!(leaves.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(!leaves.contains(&hub));
        Self { hub, leaves }
    }

    /// The hub (title) node.
    pub fn hub(&self) -> &str {
        &self.hub
    }

    /// Leaf (keyword) nodes in insertion order.
    pub fn leaves(&self) -> &[String] {
        &self.leaves
    }

    /// All nodes, hub first.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.hub.as_str()).chain(self.leaves.iter().map(String::as_str))
    }

    /// All edges, one per leaf, hub as source.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.leaves.iter().map(move |leaf| Edge {
            source: self.hub.clone(),
            target: leaf.clone(),
        })
    }

    pub fn node_count(&self) -> usize {
        1 + self.leaves.len()
    }

    pub fn edge_count(&self) -> usize {
        self.leaves.len()
    }

    /// Position of a node in `nodes()` order.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        if name == self.hub {
            return Some(0);
        }
        self.leaves
            .binary_search_by(|leaf| leaf.as_str().cmp(name))
            .ok()
            .map(|i| i + 1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    pub fn is_hub(&self, name: &str) -> bool {
        name == self.hub
    }

    /// Number of edges touching a node; 0 for unknown nodes.
    pub fn degree(&self, name: &str) -> usize {
        match self.index_of(name) {
            Some(0) => self.leaves.len(),
            Some(_) => 1,
            None => 0,
        }
    }

    /// Neighbors of a node.
    pub fn neighbors(&self, name: &str) -> Vec<&str> {
        match self.index_of(name) {
            Some(0) => self.leaves.iter().map(String::as_str).collect(),
            Some(_) => vec![self.hub.as_str()],
            None => Vec::new(),
        }
    }

    /// Whether nodes `a` and `b` (by index) share an edge.
    pub fn is_adjacent(&self, a: usize, b: usize) -> bool {
        let n = self.node_count();
        a != b && a < n && b < n && (a == 0 || b == 0)
    }
}
