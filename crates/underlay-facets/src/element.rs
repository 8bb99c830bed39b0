//! Element capability set.
//!
//! `Element` gives character-sequence-style access over a document
//! element regardless of whether the element came from a JSON or an XML
//! source: indexed characters, length, bounds-checked subsequences, a
//! value-kind query and access to the underlying source object.
//!
//! `IntermediaryElement` is the construction boundary: `of_json` and
//! `of_xml` accept either source kind and yield a substitutable,
//! semantically empty element. Because the result carries no data, both
//! paths converge on one shared instance.

use crate::node::NodeKind;
use std::any::Any;

/// Character-sequence access over a document element.
pub trait Element: Send + Sync {
    /// The character at `index`, if in bounds.
    fn char_at(&self, index: usize) -> Option<char>;

    /// Number of characters in the element's textual form.
    fn len(&self) -> usize;

    /// Whether the textual form is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The characters in `start..end`, when `start <= end <= len()`.
    fn subsequence(&self, start: usize, end: usize) -> Option<String>;

    /// The kind of value this element holds.
    fn value_kind(&self) -> Option<NodeKind>;

    /// The source object this element was built from.
    fn underlying(&self) -> Option<&dyn Any>;
}

/// The null-object element: zero length, no value kind, no source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyElement;

static EMPTY_ELEMENT: EmptyElement = EmptyElement;

impl EmptyElement {
    /// The shared default instance.
    pub fn shared() -> &'static EmptyElement {
        &EMPTY_ELEMENT
    }
}

impl Element for EmptyElement {
    fn char_at(&self, _index: usize) -> Option<char> {
        None
    }

    fn len(&self) -> usize {
        0
    }

    fn subsequence(&self, start: usize, end: usize) -> Option<String> {
        // The only valid range over an empty sequence.
        if start == 0 && end == 0 {
            Some(String::new())
        } else {
            None
        }
    }

    fn value_kind(&self) -> Option<NodeKind> {
        None
    }

    fn underlying(&self) -> Option<&dyn Any> {
        None
    }
}

/// An element standing between a raw JSON/XML source and the document
/// layer above it.
///
/// Construction accepts either source kind; the result is semantically
/// empty either way, so every call site downstream sees one shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntermediaryElement;

static INTERMEDIARY: IntermediaryElement = IntermediaryElement;

impl IntermediaryElement {
    /// Build an intermediary element from a JSON source.
    pub fn of_json(_source: &serde_json::Value) -> &'static IntermediaryElement {
        &INTERMEDIARY
    }

    /// Build an intermediary element from an XML source.
    pub fn of_xml(_source: &str) -> &'static IntermediaryElement {
        &INTERMEDIARY
    }
}

impl Element for IntermediaryElement {
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
