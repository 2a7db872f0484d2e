use petgraph::graph::NodeIndex;
use std::collections::HashMap;
use strata_core::CanonicalName;

/// Index of canonical names for the elements of one model.
///
/// Maps each canonical name to the graph node holding the element.
/// Example: "Container://Internet Banking/API" -> NodeIndex(4)
#[derive(Debug, Default, Clone)]
pub struct NameIndex {
    by_name: HashMap<CanonicalName, NodeIndex>,
}

impl NameIndex {
    /// Creates a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a canonical name. Returns the node previously holding it.
    pub fn insert(&mut self, name: CanonicalName, node: NodeIndex) -> Option<NodeIndex> {
        self.by_name.insert(name, node)
    }

    /// Resolves a canonical name to a node.
    pub fn resolve(&self, name: &str) -> Option<NodeIndex> {
        self.by_name.get(name).copied()
    }

    pub fn remove(&mut self, name: &str) -> Option<NodeIndex> {
        self.by_name.remove(name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
