//! Dependency graph storage
//!
//! Petgraph-backed directed graph keyed by `name@version`. Edges are
//! append-only and parallel edges are kept: a dependency discovered twice
//! through different parents (or twice through one parent) is two edges.
//! The adjacency view only lists nodes whose dependency fetch actually
//! ran, so filtered or depth-stopped packages appear as edge targets but
//! never as mapping keys.

use crate::primitives::{DepKind, PackageRef};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::BTreeMap;
use std::collections::HashMap;

/// Directed dependency graph with `name@version` node identity
pub struct DependencyGraph {
    /// Nodes = packages, edges = dependency relationships
    graph: DiGraph<PackageRef, DepKind>,
    /// Map from node key to node index for fast lookup
    node_map: HashMap<String, NodeIndex>,
    /// Keys whose fetch completed, in discovery order
    expanded: Vec<String>,
}

impl DependencyGraph {
    /// Create a new empty dependency graph
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_map: HashMap::new(),
            expanded: Vec::new(),
        }
    }

    /// Add a package node (idempotent - same key resolves to the same index)
    pub fn ensure_node(&mut self, package: &PackageRef) -> NodeIndex {
        let key = package.key();
        if let Some(&idx) = self.node_map.get(&key) {
            return idx;
        }

        let idx = self.graph.add_node(package.clone());
        self.node_map.insert(key, idx);
        idx
    }

    /// Record that a package's dependency fetch ran
    ///
    /// Only expanded packages get an entry in [`adjacency`](Self::adjacency),
    /// even when the fetch produced no dependencies.
    pub fn mark_expanded(&mut self, package: &PackageRef) {
        self.ensure_node(package);
        let key = package.key();
        if !self.expanded.contains(&key) {
            self.expanded.push(key);
        }
    }

    /// Append a dependency edge, unconditionally
    ///
    /// Both endpoints are created on demand; duplicates are kept.
    pub fn add_edge(&mut self, parent: &PackageRef, child: &PackageRef, kind: DepKind) {
        let parent_idx = self.ensure_node(parent);
        let child_idx = self.ensure_node(child);
        self.graph.add_edge(parent_idx, child_idx, kind);
    }

    /// Number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges in the graph
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Check if a node key exists in the graph
    pub fn contains(&self, key: &str) -> bool {
        self.node_map.contains_key(key)
    }

    /// Get a node by key
    pub fn get_node(&self, key: &str) -> Option<&PackageRef> {
        let idx = self.node_map.get(key)?;
        Some(&self.graph[*idx])
    }

    /// Iterate over all package nodes
    pub fn all_nodes(&self) -> impl Iterator<Item = &PackageRef> {
        self.graph.node_weights()
    }

    /// All edges as (source key, target key) pairs in discovery order
    pub fn edge_list(&self) -> Vec<(String, String)> {
        self.graph
            .edge_references()
            .map(|edge| {
                (
                    self.graph[edge.source()].key(),
                    self.graph[edge.target()].key(),
                )
            })
            .collect()
    }

    /// Node-key to ordered-target-keys mapping over expanded nodes
    ///
    /// Target sequences preserve discovery order and keep duplicates.
    pub fn adjacency(&self) -> HashMap<String, Vec<String>> {
        let mut adjacency: HashMap<String, Vec<String>> = self
            .expanded
            .iter()
            .map(|key| (key.clone(), Vec::new()))
            .collect();

        for edge in self.graph.edge_references() {
            let source = self.graph[edge.source()].key();
            if let Some(targets) = adjacency.get_mut(&source) {
                targets.push(self.graph[edge.target()].key());
            }
        }

        adjacency
    }

    /// Build a graph from a static node to edge-list mapping
    ///
    /// Used in test mode, where a fixture file replaces registry traversal.
    /// Every mapping key counts as expanded.
    pub fn from_adjacency(mapping: &BTreeMap<String, Vec<String>>) -> Self {
        let mut graph = Self::new();

        for (key, targets) in mapping {
            let parent = PackageRef::from_key(key);
            graph.mark_expanded(&parent);
            for target in targets {
                let child = PackageRef::from_key(target);
                graph.add_edge(&parent, &child, DepKind::Normal);
            }
        }

        graph
    }
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    include!("dependency_graph.test.rs");
}
