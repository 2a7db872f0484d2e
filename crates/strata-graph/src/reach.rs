//! Reach analysis over relationships.
//!
//! Breadth-first traversal from an element in both directions. It answers
//! "which elements depend on this one?" (upstream) and "which elements
//! does this one depend on?" (downstream), with the hop distance and the
//! relationship through which each element was first reached.

use crate::model::Model;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::{HashSet, VecDeque};
use strata_core::{ElementId, ModelError, RelationshipId, Result};

/// Direction of reach from the target element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReachDirection {
    /// Elements with relationships leading to the target.
    Upstream,
    /// Elements the target has relationships leading to.
    Downstream,
}

impl std::fmt::Display for ReachDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReachDirection::Upstream => write!(f, "upstream"),
            ReachDirection::Downstream => write!(f, "downstream"),
        }
    }
}

/// An element reached from the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReachedElement {
    pub element: ElementId,
    /// Number of relationships between the target and this element.
    pub hops: usize,
    /// The relationship whose traversal first reached this element.
    pub via: RelationshipId,
    pub direction: ReachDirection,
}

/// Complete reach analysis result.
#[derive(Debug, Clone)]
pub struct ReachAnalysis {
    pub target: ElementId,
    pub upstream: Vec<ReachedElement>,
    pub downstream: Vec<ReachedElement>,
    /// Maximum depth searched (0 = unlimited).
    pub max_depth: usize,
}

impl ReachAnalysis {
    /// Total count of reached elements in both directions.
    pub fn total(&self) -> usize {
        self.upstream.len() + self.downstream.len()
    }

    /// Returns all reached elements ordered by hop distance.
    pub fn all(&self) -> Vec<&ReachedElement> {
        let mut all: Vec<&ReachedElement> =
            self.upstream.iter().chain(self.downstream.iter()).collect();
        all.sort_by(|a, b| {
            a.hops
                .cmp(&b.hops)
                .then_with(|| a.element.value().cmp(&b.element.value()))
        });
        all
    }

    /// Returns only the directly related elements.
    pub fn direct_only(&self) -> Vec<&ReachedElement> {
        self.all().into_iter().filter(|r| r.hops == 1).collect()
    }

    /// Returns a summary suitable for CLI output.
    pub fn summary(&self) -> String {
        format!(
            "Reach: {} elements (upstream: {}, downstream: {}, direct: {})",
            self.total(),
            self.upstream.len(),
            self.downstream.len(),
            self.direct_only().len()
        )
    }
}

impl Model {
    /// Analyzes which elements are connected to `target` through relationships.
    ///
    /// # Arguments
    /// * `target` - The element to analyze
    /// * `max_depth` - Maximum hop distance to traverse (0 = unlimited)
    pub fn analyze_reach(&self, target: ElementId, max_depth: usize) -> Result<ReachAnalysis> {
        if target.model() != self.id() {
            return Err(ModelError::ForeignElement(target));
        }
        let start = self
            .node_of(target)
            .ok_or(ModelError::UnknownElement(target))?;

        let effective_depth = if max_depth == 0 {
            usize::MAX
        } else {
            max_depth
        };

        Ok(ReachAnalysis {
            target,
            upstream: self.bfs_reach(start, Direction::Incoming, effective_depth),
            downstream: self.bfs_reach(start, Direction::Outgoing, effective_depth),
            max_depth,
        })
    }

    /// BFS traversal in one direction from the start node.
    fn bfs_reach(
        &self,
        start: NodeIndex,
        direction: Direction,
        max_depth: usize,
    ) -> Vec<ReachedElement> {
        let graph = self.graph();
        let reach_direction = match direction {
            Direction::Incoming => ReachDirection::Upstream,
            Direction::Outgoing => ReachDirection::Downstream,
        };

        let mut result = Vec::new();
        let mut visited: HashSet<NodeIndex> = HashSet::from([start]);
        let mut queue: VecDeque<(NodeIndex, usize)> = VecDeque::from([(start, 0)]);

        while let Some((current, depth)) = queue.pop_front() {
            if depth >= max_depth {
                continue;
            }

            // Oldest relationship first, so `via` is stable.
            let mut edges: Vec<_> = graph.edges_directed(current, direction).collect();
            edges.sort_by_key(|edge| edge.weight().id().value());

            for edge in edges {
                let neighbor = match direction {
                    Direction::Incoming => edge.source(),
                    Direction::Outgoing => edge.target(),
                };

                if !visited.insert(neighbor) {
                    continue;
                }

                result.push(ReachedElement {
                    element: graph[neighbor].id(),
                    hops: depth + 1,
                    via: edge.weight().id(),
                    direction: reach_direction,
                });
                queue.push_back((neighbor, depth + 1));
            }
        }

        result.sort_by(|a, b| {
            a.hops
                .cmp(&b.hops)
                .then_with(|| a.element.value().cmp(&b.element.value()))
        });
        result
    }
}
