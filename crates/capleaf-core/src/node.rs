//! Business Capability nodes.
//!
//! A [`CapabilityNode`] is the in-memory form of one diagram `object` element
//! tagged as a Business Capability fact sheet.

use std::fmt;

/// A single Business Capability read from a diagram.
///
/// Nodes are immutable once built. The parent id is recorded as written in
/// the diagram, so it may name a non-capability cell or a cell that does not
/// exist at all.
///
/// # Examples
///
/// ```
/// use capleaf_core::CapabilityNode;
///
/// let node = CapabilityNode::new("bc-2", "  Scientific  ", Some("bc-1"));
/// assert_eq!(node.id(), "bc-2");
/// assert_eq!(node.label(), "Scientific");
/// assert_eq!(node.parent_id(), Some("bc-1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityNode {
    id: String,
    label: String,
    parent_id: Option<String>,
}

impl CapabilityNode {
    /// Creates a node. The label is trimmed of surrounding whitespace.
    ///
    /// # Arguments
    ///
    /// * `id` - Diagram-assigned cell id
    /// * `label` - Display label of the capability
    /// * `parent_id` - Id of the cell this object is nested under, if any
    pub fn new(
        id: impl Into<String>,
        label: impl AsRef<str>,
        parent_id: Option<impl Into<String>>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.as_ref().trim().to_string(),
            parent_id: parent_id.map(Into::into),
        }
    }

    /// Returns the diagram id of this node.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the trimmed label, possibly empty.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the id of the enclosing diagram cell, if one was recorded.
    pub fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }
}

impl fmt::Display for CapabilityNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?})", self.id, self.label)
    }
}
