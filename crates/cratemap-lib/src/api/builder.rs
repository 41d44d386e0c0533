//! Depth-bounded dependency graph traversal
//!
//! Walks the registry's dependency relation from one root package,
//! recording every discovered edge and flagging re-entered nodes. The
//! walk is iterative: an explicit worklist carries (package, depth)
//! pairs, so pathological registry data cannot exhaust the call stack.

use crate::api::crates_io::{RegistryClient, fetch_or_empty};
use crate::api::dependency_graph::DependencyGraph;
use crate::api::version_req::normalize_requirement;
use crate::primitives::PackageRef;
use std::collections::HashSet;
use tracing::{debug, trace, warn};

// Depth already bounds the walk; this guards the worklist itself against
// registry responses wide enough to outrun memory.
const MAX_PENDING: usize = 100_000;

/// Result of one graph build run
pub struct BuildOutcome {
    /// Every edge whose source was traversed
    pub graph: DependencyGraph,
    /// Node keys at which a re-entry was detected, in detection order
    ///
    /// Re-entry means the walk reached an already-visited node, which
    /// covers shared dependencies as well as true cycles. One entry is
    /// recorded per re-entry, so duplicates are possible.
    pub cycles: Vec<String>,
}

/// Depth-bounded traversal over the registry dependency relation
pub struct GraphBuilder {
    max_depth: u32,
    filter: Option<String>,
}

impl GraphBuilder {
    /// Create a builder that descends at most `max_depth` levels below the root
    pub fn new(max_depth: u32) -> Self {
        Self {
            max_depth,
            filter: None,
        }
    }

    /// Skip expansion of packages whose name contains `filter`
    ///
    /// Matching is case-insensitive; an empty string disables filtering.
    /// A matching package is still recorded as an edge target by its
    /// parent, but its own dependencies are never fetched.
    pub fn with_filter(mut self, filter: &str) -> Self {
        let trimmed = filter.trim();
        self.filter = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        };
        self
    }

    fn filter_matches(&self, name: &str) -> bool {
        match &self.filter {
            Some(filter) => name.to_lowercase().contains(filter),
            None => false,
        }
    }

    /// Build the dependency graph rooted at (name, version)
    ///
    /// Fetches are issued strictly one at a time. Fetch failures are
    /// absorbed at the client boundary, so a run always terminates with
    /// whatever structure was reachable.
    pub async fn build<C: RegistryClient>(&self, client: &C, root: PackageRef) -> BuildOutcome {
        let mut graph = DependencyGraph::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut cycles: Vec<String> = Vec::new();
        let mut worklist: Vec<(PackageRef, u32)> = vec![(root.clone(), 0)];

        debug!(root = %root, max_depth = self.max_depth, "building dependency graph");

        while let Some((package, depth)) = worklist.pop() {
            if depth > self.max_depth {
                trace!(package = %package, depth, "depth bound reached");
                continue;
            }

            let key = package.key();
            if !visited.insert(key.clone()) {
                trace!(package = %package, "re-entered, recording cycle");
                cycles.push(key);
                continue;
            }

            if self.filter_matches(&package.name) {
                trace!(package = %package, "filtered, not expanding");
                continue;
            }

            let dependencies = fetch_or_empty(client, &package).await;
            graph.mark_expanded(&package);

            // Record edges before descending; children are scheduled in
            // reverse so the walk visits them in registry order.
            let mut children = Vec::with_capacity(dependencies.len());
            for dependency in &dependencies {
                let child = PackageRef::new(
                    dependency.crate_id.clone(),
                    normalize_requirement(&dependency.req),
                );
                graph.add_edge(&package, &child, dependency.kind);
                children.push(child);
            }

            for child in children.into_iter().rev() {
                if worklist.len() >= MAX_PENDING {
                    warn!(
                        package = %package,
                        pending = worklist.len(),
                        "worklist bound reached, dropping remaining branches"
                    );
                    break;
                }
                worklist.push((child, depth + 1));
            }
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            cycles = cycles.len(),
            "graph build finished"
        );

        BuildOutcome { graph, cycles }
    }
}

#[cfg(test)]
mod tests {
    include!("builder.test.rs");
}
