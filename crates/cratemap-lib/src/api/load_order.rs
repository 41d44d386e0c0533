//! Dependency-first load ordering
//!
//! Re-walks the registry relation from the root with a post-order
//! traversal: a package is emitted only after everything it was observed
//! to depend on. This walk owns its visited set and, by default, ignores
//! the depth bound and name filter applied to the graph view, so the two
//! outputs can legitimately disagree about which packages they include.
//!
//! Cyclic data gets no protection beyond the visited-set skip: inside a
//! cycle the dependency-first guarantee does not hold. That is a known
//! limitation of the ordering, not something this module papers over.

use crate::api::crates_io::{RegistryClient, fetch_or_empty};
use crate::api::version_req::normalize_requirement;
use crate::primitives::PackageRef;
use std::collections::HashSet;
use tracing::{debug, trace};

/// Bounding policy for the load-order walk
///
/// The default reproduces the historical behavior: unbounded depth, no
/// filter. Turning `bounded` on applies the same limits as the graph
/// view, for callers that want both outputs over the same node set.
#[derive(Debug, Clone, Default)]
pub struct LoadOrderPolicy {
    pub bounded: bool,
    pub max_depth: u32,
    pub filter: Option<String>,
}

impl LoadOrderPolicy {
    /// Bound the walk with the given depth and filter
    pub fn bounded(max_depth: u32, filter: &str) -> Self {
        let trimmed = filter.trim();
        Self {
            bounded: true,
            max_depth,
            filter: if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_lowercase())
            },
        }
    }

    fn stops_at(&self, depth: u32) -> bool {
        self.bounded && depth > self.max_depth
    }

    fn filters_out(&self, name: &str) -> bool {
        match (&self.filter, self.bounded) {
            (Some(filter), true) => name.to_lowercase().contains(filter),
            _ => false,
        }
    }
}

// Post-order via explicit two-phase stack: Enter fetches and schedules
// children, Exit emits the key after its whole subtree.
enum Frame {
    Enter(PackageRef, u32),
    Exit(String),
}

/// Post-order traversal computing a dependency-first node sequence
pub struct LoadOrderComputer {
    policy: LoadOrderPolicy,
}

impl LoadOrderComputer {
    /// Create an unbounded computer (historical behavior)
    pub fn new() -> Self {
        Self {
            policy: LoadOrderPolicy::default(),
        }
    }

    /// Create a computer with an explicit bounding policy
    pub fn with_policy(policy: LoadOrderPolicy) -> Self {
        Self { policy }
    }

    /// Compute the load order for the tree rooted at (name, version)
    ///
    /// For every edge (a -> b) discovered by this walk over acyclic data,
    /// b precedes a in the returned sequence; the root comes last.
    /// Relative order of unrelated nodes is unspecified.
    pub async fn order<C: RegistryClient>(&self, client: &C, root: PackageRef) -> Vec<String> {
        let mut order: Vec<String> = Vec::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut stack: Vec<Frame> = vec![Frame::Enter(root.clone(), 0)];

        debug!(root = %root, bounded = self.policy.bounded, "computing load order");

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Enter(package, depth) => {
                    if self.policy.stops_at(depth) {
                        trace!(package = %package, depth, "depth bound reached");
                        continue;
                    }

                    let key = package.key();
                    if !visited.insert(key.clone()) {
                        continue;
                    }

                    if self.policy.filters_out(&package.name) {
                        trace!(package = %package, "filtered from load order");
                        continue;
                    }

                    stack.push(Frame::Exit(key));

                    let dependencies = fetch_or_empty(client, &package).await;
                    for dependency in dependencies.into_iter().rev() {
                        let child = PackageRef::new(
                            dependency.crate_id,
                            normalize_requirement(&dependency.req),
                        );
                        stack.push(Frame::Enter(child, depth + 1));
                    }
                }
                Frame::Exit(key) => order.push(key),
            }
        }

        debug!(nodes = order.len(), "load order finished");
        order
    }
}

impl Default for LoadOrderComputer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    include!("load_order.test.rs");
}
