//! Reflective-type capability set.
//!
//! `TypeMirror` is a deliberately narrow type-visitor shape: kind and
//! name queries, annotation lookup, and visitor dispatch. It captures
//! only the queries the toolkit needs; platform reflection facilities
//! are adapted to this trait at the boundary rather than carried in
//! whole.

use serde::{Deserialize, Serialize};

/// Classification of reflected types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MirrorKind {
    Primitive,
    Declared,
    Array,
    TypeVariable,
    Wildcard,
    NoType,
}

/// A small owned value produced by a visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MirrorValue {
    Str(String),
    Bool(bool),
    Int(i64),
}

/// The visitor side of the reflective-type facet.
///
/// Every `visit_*` method has a provided body returning `None`, so a
/// visitor implements only the kinds it cares about. `visit` routes a
/// mirror to the method matching its kind; a mirror without a kind
/// visits nothing.
pub trait TypeVisitor {
    /// Dispatch on the mirror's kind.
    fn visit(&self, mirror: &dyn TypeMirror) -> Option<MirrorValue> {
        match mirror.kind()? {
            MirrorKind::Primitive => self.visit_primitive(mirror),
            MirrorKind::Declared => self.visit_declared(mirror),
            MirrorKind::Array => self.visit_array(mirror),
            MirrorKind::TypeVariable => self.visit_type_variable(mirror),
            MirrorKind::Wildcard => self.visit_wildcard(mirror),
            MirrorKind::NoType => self.visit_no_type(mirror),
        }
    }

    fn visit_primitive(&self, _mirror: &dyn TypeMirror) -> Option<MirrorValue> {
        None
    }

    fn visit_declared(&self, _mirror: &dyn TypeMirror) -> Option<MirrorValue> {
        None
    }

    fn visit_array(&self, _mirror: &dyn TypeMirror) -> Option<MirrorValue> {
        None
    }

    fn visit_type_variable(&self, _mirror: &dyn TypeMirror) -> Option<MirrorValue> {
        None
    }

    fn visit_wildcard(&self, _mirror: &dyn TypeMirror) -> Option<MirrorValue> {
        None
    }

    fn visit_no_type(&self, _mirror: &dyn TypeMirror) -> Option<MirrorValue> {
        None
    }
}

/// A reflected type.
pub trait TypeMirror: Send + Sync {
    /// What kind of type this mirror reflects.
    fn kind(&self) -> Option<MirrorKind>;

    /// The canonical name of the reflected type.
    fn type_name(&self) -> Option<String>;

    /// Look up an annotation value by name.
    fn annotation(&self, name: &str) -> Option<String>;

    /// The names of all annotations present on the type.
    fn annotations(&self) -> Vec<String>;

    /// Dispatch `visitor` against this mirror.
    fn accept(&self, visitor: &dyn TypeVisitor) -> Option<MirrorValue>;
}

/// The null-object type mirror: no kind, no name, no annotations, and
/// visiting it produces nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyTypeMirror;

static EMPTY_MIRROR: EmptyTypeMirror = EmptyTypeMirror;

impl EmptyTypeMirror {
    /// The shared default instance.
    pub fn shared() -> &'static EmptyTypeMirror {
        &EMPTY_MIRROR
    }
}

impl TypeMirror for EmptyTypeMirror {
    fn kind(&self) -> Option<MirrorKind> {
        None
    }

    fn type_name(&self) -> Option<String> {
        None
    }

    fn annotation(&self, _name: &str) -> Option<String> {
        None
    }

    fn annotations(&self) -> Vec<String> {
        Vec::new()
    }

    fn accept(&self, _visitor: &dyn TypeVisitor) -> Option<MirrorValue> {
        None
    }
}
