//! The capability graph and leaf computation.
//!
//! The graph is implicit: nodes are stored by id in first-insertion order and
//! edges are the `parent_id` references between stored nodes. Leaves are found
//! in two passes (collect referenced ids, then subtract) so cycles and
//! dangling references need no special handling.

use std::collections::HashSet;

use indexmap::IndexMap;
use log::{debug, trace};

use crate::{labels, node::CapabilityNode};

/// Insertion-ordered store of [`CapabilityNode`]s keyed by id.
///
/// Iteration order is the order in which ids were first inserted. Inserting an
/// id a second time replaces the node but keeps its original position, which
/// for a single document scan equals first-encounter document order.
#[derive(Debug, Clone, Default)]
pub struct CapabilityGraph {
    nodes: IndexMap<String, CapabilityNode>,
}

impl CapabilityGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node, returning the node it replaced if the id was present.
    pub fn insert(&mut self, node: CapabilityNode) -> Option<CapabilityNode> {
        let replaced = self.nodes.insert(node.id().to_string(), node);
        if let Some(old) = &replaced {
            debug!(id = old.id(); "Duplicate capability id, later definition wins");
        }
        replaced
    }

    /// Returns the node stored under `id`.
    pub fn get(&self, id: &str) -> Option<&CapabilityNode> {
        self.nodes.get(id)
    }

    /// Returns `true` if a node is stored under `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of stored nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no nodes are stored.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates nodes in first-insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &CapabilityNode> {
        self.nodes.values()
    }

    /// Collects the ids that are the parent of some stored node.
    ///
    /// A parent reference only counts when it names a stored node. A node
    /// naming itself as parent references itself.
    pub fn referenced_parents(&self) -> HashSet<&str> {
        self.nodes
            .values()
            .filter_map(|node| node.parent_id())
            .filter(|parent| self.nodes.contains_key(*parent))
            .collect()
    }

    /// Iterates leaf nodes in first-insertion order.
    ///
    /// A leaf is a node whose id is not referenced as the parent of any stored
    /// node, itself included.
    pub fn leaves(&self) -> impl Iterator<Item = &CapabilityNode> {
        let referenced = self.referenced_parents();
        trace!(referenced = referenced.len(); "Computed referenced parent ids");
        self.nodes
            .values()
            .filter(move |node| !referenced.contains(node.id()))
    }

    /// Returns the unique, non-empty leaf labels.
    ///
    /// Labels appear in first-encounter order unless `sort` is set, in which
    /// case they are stably ordered case-insensitively.
    pub fn leaf_labels(&self, sort: bool) -> Vec<String> {
        let mut result = labels::unique_non_empty(self.leaves().map(CapabilityNode::label));
        if sort {
            labels::sort_case_insensitive(&mut result);
        }
        debug!(nodes = self.len(), leaves = result.len(), sorted = sort; "Leaf labels computed");
        result
    }
}

impl FromIterator<CapabilityNode> for CapabilityGraph {
    fn from_iter<I: IntoIterator<Item = CapabilityNode>>(iter: I) -> Self {
        let mut graph = Self::new();
        for node in iter {
            graph.insert(node);
        }
        graph
    }
}
