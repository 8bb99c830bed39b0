//! Type relation: `is-a` comparison across a type hierarchy.
//!
//! A type descriptor is an immutable value object identified by a
//! content-addressed [`TypeId`] and carrying the transitively-closed set
//! of its ancestors. Closure is maintained at construction (a descriptor
//! inherits every parent's full ancestor set), never derived lazily, so
//! the `is` relation stays a set lookup and transitivity holds
//! structurally.
//!
//! [`AbsentType`] is the distinguished terminal: it satisfies `is` only
//! for itself and never appears in any concrete descriptor's ancestry.
//! Hierarchy algorithms therefore never need a null case — where a type
//! is structurally required but semantically missing, the absent
//! sentinel stands in. It additionally implements the document-node,
//! reflective-type and element facets with canonical empties, so one
//! absent value can double as a node or element stand-in.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::any::Any;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;
use underlay_facets::element::{Element, EmptyElement};
use underlay_facets::mirror::{EmptyTypeMirror, MirrorKind, MirrorValue, TypeMirror, TypeVisitor};
use underlay_facets::node::{DocumentNode, EmptyNode, NodeKind};

/// Content-addressed identity of a type.
///
/// Two descriptors with the same `TypeId` represent the same type.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TypeId(pub String);

impl TypeId {
    /// Derive an id from a qualified type name.
    pub fn derive(name: &str) -> Self {
        let hash = Sha256::digest(name.as_bytes());
        Self(format!("{hash:x}"))
    }

    /// The reserved id of the absent sentinel.
    ///
    /// Not a hash, so it can never collide with a derived id.
    pub fn absent() -> Self {
        Self("absent".to_string())
    }

    /// Whether this is the absent sentinel's id.
    pub fn is_absent(&self) -> bool {
        self.0 == "absent"
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The `is-a` relation over type descriptors.
///
/// `self.is(candidate)` holds iff `candidate` is `self` or a declared
/// subtype of `self`. Reflexive by the identity arm; transitive because
/// ancestor sets are transitively closed at construction. No side
/// effects.
pub trait TypeRelation: Send + Sync {
    /// The identity of this type.
    fn type_id(&self) -> &TypeId;

    /// Every supertype of this type, transitively closed.
    fn ancestor_ids(&self) -> &BTreeSet<TypeId>;

    /// Whether `candidate` is this type or one of its declared subtypes.
    fn is(&self, candidate: &dyn TypeRelation) -> bool {
        candidate.type_id() == self.type_id()
            || candidate.ancestor_ids().contains(self.type_id())
    }
}

/// An immutable descriptor of a concrete type in the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    id: TypeId,
    name: String,
    ancestors: BTreeSet<TypeId>,
}

impl TypeDescriptor {
    /// A descriptor with no supertypes.
    pub fn root(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: TypeId::derive(&name),
            name,
            ancestors: BTreeSet::new(),
        }
    }

    /// A descriptor extending one or more parents.
    ///
    /// The ancestor set is the union of every parent's id and ancestors,
    /// which keeps the closure invariant without recomputation. The
    /// absent sentinel is not a [`TypeDescriptor`], so it can never be
    /// named as a parent.
    pub fn extending(name: impl Into<String>, parents: &[&TypeDescriptor]) -> Self {
        let name = name.into();
        let mut ancestors = BTreeSet::new();
        for parent in parents {
            ancestors.insert(parent.id.clone());
            ancestors.extend(parent.ancestors.iter().cloned());
        }
        Self {
            id: TypeId::derive(&name),
            name,
            ancestors,
        }
    }

    /// The qualified name this descriptor was built from.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl TypeRelation for TypeDescriptor {
    fn type_id(&self) -> &TypeId {
        &self.id
    }

    fn ancestor_ids(&self) -> &BTreeSet<TypeId> {
        &self.ancestors
    }
}

static ABSENT_ID: LazyLock<TypeId> = LazyLock::new(TypeId::absent);
static NO_ANCESTORS: LazyLock<BTreeSet<TypeId>> = LazyLock::new(BTreeSet::new);
static ABSENT: AbsentType = AbsentType;

/// The terminal "absent" type.
///
/// Satisfies `is` only for itself; never supertypes or subtypes any
/// concrete descriptor. Also a composite null-object: its node, mirror
/// and element facets answer with canonical empties, so the same shared
/// instance serves wherever an absent node or element is needed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AbsentType;

impl AbsentType {
    /// The shared sentinel instance.
    pub fn shared() -> &'static AbsentType {
        &ABSENT
    }

    /// The absent stand-in for a missing document node.
    ///
    /// Converges with [`AbsentType::from_element`] on the one shared
    /// instance — the result carries no data either way.
    pub fn from_node() -> &'static AbsentType {
        &ABSENT
    }

    /// The absent stand-in for a missing element.
    pub fn from_element() -> &'static AbsentType {
        &ABSENT
    }
}

impl TypeRelation for AbsentType {
    fn type_id(&self) -> &TypeId {
        &ABSENT_ID
    }

    fn ancestor_ids(&self) -> &BTreeSet<TypeId> {
        &NO_ANCESTORS
    }
}

impl DocumentNode for AbsentType {
    fn name(&self) -> &str {
        EmptyNode::shared().name()
    }

    fn local_name(&self) -> &str {
        EmptyNode::shared().local_name()
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

    fn attribute(&self, name: &str) -> Option<String> {
        EmptyNode::shared().attribute(name)
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

    fn lookup_namespace(&self, prefix: &str) -> Option<String> {
        EmptyNode::shared().lookup_namespace(prefix)
    }

    fn has_children(&self) -> bool {
        false
    }

    fn has_attributes(&self) -> bool {
        false
    }

    fn same_node(&self, other: &dyn DocumentNode) -> bool {
        EmptyNode::shared().same_node(other)
    }

    fn compare_position(&self, other: &dyn DocumentNode) -> Option<Ordering> {
        EmptyNode::shared().compare_position(other)
    }

    fn user_data(&self, key: &str) -> Option<String> {
        EmptyNode::shared().user_data(key)
    }

    fn set_text_value(&self, value: &str) -> Option<String> {
        EmptyNode::shared().set_text_value(value)
    }

    fn insert_child(&self, index: usize, child: &dyn DocumentNode) -> bool {
        EmptyNode::shared().insert_child(index, child)
    }

    fn replace_child(&self, index: usize, child: &dyn DocumentNode) -> bool {
        EmptyNode::shared().replace_child(index, child)
    }

    fn remove_child(&self, index: usize) -> bool {
        EmptyNode::shared().remove_child(index)
    }

    fn append_child(&self, child: &dyn DocumentNode) -> bool {
        EmptyNode::shared().append_child(child)
    }

    fn set_prefix(&self, prefix: &str) {
        EmptyNode::shared().set_prefix(prefix);
    }

    fn set_user_data(&self, key: &str, value: &str) -> Option<String> {
        EmptyNode::shared().set_user_data(key, value)
    }
}

impl TypeMirror for AbsentType {
    fn kind(&self) -> Option<MirrorKind> {
        None
    }

    fn type_name(&self) -> Option<String> {
        None
    }

    fn annotation(&self, name: &str) -> Option<String> {
        EmptyTypeMirror::shared().annotation(name)
    }

    fn annotations(&self) -> Vec<String> {
        Vec::new()
    }

    fn accept(&self, visitor: &dyn TypeVisitor) -> Option<MirrorValue> {
        EmptyTypeMirror::shared().accept(visitor)
    }
}

impl Element for AbsentType {
    fn char_at(&self, index: usize) -> Option<char> {
        EmptyElement::shared().char_at(index)
    }

    fn len(&self) -> usize {
        0
    }

    fn subsequence(&self, start: usize, end: usize) -> Option<String> {
        EmptyElement::shared().subsequence(start, end)
    }

    fn value_kind(&self) -> Option<NodeKind> {
        None
    }

    fn underlying(&self) -> Option<&dyn Any> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_reflexive() {
        let node = TypeDescriptor::root("doc.Node");
        assert!(node.is(&node));

        let absent = AbsentType::shared();
        assert!(absent.is(absent));
    }

    #[test]
    fn is_follows_declared_edges() {
        let node = TypeDescriptor::root("doc.Node");
        let element = TypeDescriptor::extending("doc.Element", &[&node]);

        assert!(node.is(&element));
        assert!(!element.is(&node));
    }

    #[test]
    fn is_transitive_through_closure() {
        let node = TypeDescriptor::root("doc.Node");
        let element = TypeDescriptor::extending("doc.Element", &[&node]);
        let cell = TypeDescriptor::extending("doc.Cell", &[&element]);

        assert!(element.is(&cell));
        assert!(node.is(&element));
        assert!(node.is(&cell));
    }

    #[test]
    fn multiple_parents_union_ancestry() {
        let node = TypeDescriptor::root("doc.Node");
        let styled = TypeDescriptor::root("doc.Styled");
        let cell = TypeDescriptor::extending("doc.Cell", &[&node, &styled]);

        assert!(node.is(&cell));
        assert!(styled.is(&cell));
        assert!(!node.is(&styled));
    }

    #[test]
    fn absent_excluded_from_hierarchy() {
        let node = TypeDescriptor::root("doc.Node");
        let absent = AbsentType::shared();

        assert!(!node.is(absent));
        assert!(!absent.is(&node));
    }

    #[test]
    fn absent_id_never_collides_with_derived() {
        // Derived ids are 64 hex chars; the sentinel is the literal word.
        let id = TypeId::derive("absent");
        assert_ne!(id, TypeId::absent());
        assert!(TypeId::absent().is_absent());
        assert!(!id.is_absent());
    }

    #[test]
    fn descriptor_identity_is_content_addressed() {
        let a = TypeDescriptor::root("doc.Node");
        let b = TypeDescriptor::root("doc.Node");
        assert_eq!(a, b);
        assert_eq!(TypeRelation::type_id(&a), TypeRelation::type_id(&b));
    }

    #[test]
    fn descriptor_survives_transport() {
        let node = TypeDescriptor::root("doc.Node");
        let element = TypeDescriptor::extending("doc.Element", &[&node]);

        let json = serde_json::to_string(&element).unwrap();
        let back: TypeDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(element, back);
        // The relation holds against the deserialized copy.
        assert!(node.is(&back));
    }

    #[test]
    fn absent_construction_paths_converge() {
        assert!(std::ptr::eq(AbsentType::from_node(), AbsentType::from_element()));
    }

    #[test]
    fn absent_composite_is_empty_everywhere() {
        let absent = AbsentType::shared();

        // Node facet.
        assert_eq!(DocumentNode::name(absent), "");
        assert!(absent.children().is_empty());
        assert!(!absent.append_child(absent));

        // Mirror facet.
        assert_eq!(TypeMirror::kind(absent), None);
        assert_eq!(TypeMirror::type_name(absent), None);

        // Element facet.
        assert_eq!(Element::len(absent), 0);
        assert_eq!(absent.subsequence(0, 0), Some(String::new()));
        assert_eq!(absent.char_at(0), None);
    }
}
