//! Hierarchical-node capability set.
//!
//! `DocumentNode` is the node shape a document library exposes: naming,
//! a text value, tree edges (parent, children, siblings), attributes,
//! namespace information, document-order comparison and user-data slots.
//!
//! The contract for the default implementation is fixed here: every
//! query returns the canonical empty value for its return type and
//! every mutator is a no-op. Mutators take `&self` — the default is a
//! stateless shared singleton, and real nodes downstream use interior
//! mutability; this trait constrains observable behavior only.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Classification of document nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Element,
    Attribute,
    Text,
    Comment,
    Document,
    ProcessingInstruction,
}

/// A node in a document hierarchy.
///
/// Implementations fall into two camps: real nodes backed by a concrete
/// document, and the [`EmptyNode`] default standing in for an absent
/// collaborator. Callers are not expected to distinguish the two.
pub trait DocumentNode: Send + Sync {
    /// The qualified name of this node. Empty when absent.
    fn name(&self) -> &str;

    /// The local part of the name (no namespace prefix). Empty when absent.
    fn local_name(&self) -> &str;

    /// The text value carried by this node, if any.
    fn text_value(&self) -> Option<String>;

    /// What kind of node this is.
    fn node_kind(&self) -> Option<NodeKind>;

    /// The parent node, if this node is attached to a tree.
    fn parent(&self) -> Option<&dyn DocumentNode>;

    /// Child nodes in document order.
    fn children(&self) -> Vec<&dyn DocumentNode>;

    /// The next sibling in document order.
    fn next_sibling(&self) -> Option<&dyn DocumentNode>;

    /// The previous sibling in document order.
    fn prev_sibling(&self) -> Option<&dyn DocumentNode>;

    /// Look up an attribute value by qualified name.
    fn attribute(&self, name: &str) -> Option<String>;

    /// The qualified names of all attributes, in document order.
    fn attribute_names(&self) -> Vec<String>;

    /// The document that owns this node.
    fn owner_document(&self) -> Option<&dyn DocumentNode>;

    /// The namespace URI of this node.
    fn namespace_uri(&self) -> Option<String>;

    /// The namespace prefix of this node.
    fn prefix(&self) -> Option<String>;

    /// Resolve a namespace prefix in scope at this node.
    fn lookup_namespace(&self, prefix: &str) -> Option<String>;

    /// Whether this node has any children.
    fn has_children(&self) -> bool;

    /// Whether this node has any attributes.
    fn has_attributes(&self) -> bool;

    /// Whether `other` is the same underlying node as `self`.
    fn same_node(&self, other: &dyn DocumentNode) -> bool;

    /// Document-order position of `self` relative to `other`, when both
    /// belong to the same document.
    fn compare_position(&self, other: &dyn DocumentNode) -> Option<Ordering>;

    /// Read a user-data slot.
    fn user_data(&self, key: &str) -> Option<String>;

    /// Set the text value, returning the previous value.
    fn set_text_value(&self, value: &str) -> Option<String>;

    /// Insert `child` before the child at `index`. Returns whether the
    /// tree changed.
    fn insert_child(&self, index: usize, child: &dyn DocumentNode) -> bool;

    /// Replace the child at `index`. Returns whether the tree changed.
    fn replace_child(&self, index: usize, child: &dyn DocumentNode) -> bool;

    /// Remove the child at `index`. Returns whether the tree changed.
    fn remove_child(&self, index: usize) -> bool;

    /// Append `child` after the last child. Returns whether the tree
    /// changed.
    fn append_child(&self, child: &dyn DocumentNode) -> bool;

    /// Set the namespace prefix.
    fn set_prefix(&self, prefix: &str);

    /// Write a user-data slot, returning the previous value.
    fn set_user_data(&self, key: &str, value: &str) -> Option<String>;
}

/// The null-object document node.
///
/// Total and side-effect free: queries return canonical empties,
/// mutators report that nothing changed. Stateless, hence freely
/// shareable across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyNode;

static EMPTY_NODE: EmptyNode = EmptyNode;

impl EmptyNode {
    /// The shared default instance.
    pub fn shared() -> &'static EmptyNode {
        &EMPTY_NODE
    }
}

impl DocumentNode for EmptyNode {
    fn name(&self) -> &str {
        ""
    }

    fn local_name(&self) -> &str {
        ""
    }

    fn text_value(&self) -> Option<String> {
        None
    }

    fn node_kind(&self) -> Option<NodeKind> {
        None
    }

    fn parent(&self) -> Option<&dyn DocumentNode> {
        None
    }

    fn children(&self) -> Vec<&dyn DocumentNode> {
        Vec::new()
    }

    fn next_sibling(&self) -> Option<&dyn DocumentNode> {
        None
    }

    fn prev_sibling(&self) -> Option<&dyn DocumentNode> {
        None
    }

    fn attribute(&self, _name: &str) -> Option<String> {
        None
    }

    fn attribute_names(&self) -> Vec<String> {
        Vec::new()
    }

    fn owner_document(&self) -> Option<&dyn DocumentNode> {
        None
    }

    fn namespace_uri(&self) -> Option<String> {
        None
    }

    fn prefix(&self) -> Option<String> {
        None
    }

    fn lookup_namespace(&self, _prefix: &str) -> Option<String> {
        None
    }

    fn has_children(&self) -> bool {
        false
    }

    fn has_attributes(&self) -> bool {
        false
    }

    fn same_node(&self, _other: &dyn DocumentNode) -> bool {
        false
    }

    fn compare_position(&self, _other: &dyn DocumentNode) -> Option<Ordering> {
        None
    }

    fn user_data(&self, _key: &str) -> Option<String> {
        None
    }

    fn set_text_value(&self, _value: &str) -> Option<String> {
        None
    }

    fn insert_child(&self, _index: usize, _child: &dyn DocumentNode) -> bool {
        false
    }

    fn replace_child(&self, _index: usize, _child: &dyn DocumentNode) -> bool {
        false
    }

    fn remove_child(&self, _index: usize) -> bool {
        false
    }

    fn append_child(&self, _child: &dyn DocumentNode) -> bool {
        false
    }

    fn set_prefix(&self, _prefix: &str) {}

    fn set_user_data(&self, _key: &str, _value: &str) -> Option<String> {
        None
    }
}
