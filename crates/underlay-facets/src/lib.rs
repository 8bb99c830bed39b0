//! # Underlay Facets
//!
//! The capability sets this toolkit must satisfy at its boundary, and a
//! null-object default for each. Three facets:
//!
//! ```text
//! DocumentNode     ← hierarchical-node shape (name, value, tree edges,
//!     │              attributes, namespaces, user data)
//! TypeMirror       ← reflective-type shape (kind, name, annotations,
//!     │              visitor dispatch)
//! Element          ← character-sequence shape over a JSON/XML element
//! ```
//!
//! Each facet carries a shared, stateless `Empty*` implementation whose
//! every query returns the canonical empty value for its return type and
//! whose every mutator is a no-op. The defaults never fail and never
//! mutate anything, which is what lets downstream code drop "is it
//! absent?" checks entirely.

pub mod element;
pub mod mirror;
pub mod node;

pub use element::{Element, EmptyElement, IntermediaryElement};
pub use mirror::{EmptyTypeMirror, MirrorKind, MirrorValue, TypeMirror, TypeVisitor};
pub use node::{DocumentNode, EmptyNode, NodeKind};
