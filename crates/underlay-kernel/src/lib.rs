//! # Underlay Kernel
//!
//! The foundational capability layer of Underlay: a small set of
//! cross-cutting abstractions a document/data-processing library builds
//! upon. Nothing here performs I/O and nothing here is asynchronous —
//! every operation completes or fails synchronously.
//!
//! ## Architecture
//!
//! ```text
//! TypeRelation          ← is-a comparison across a type hierarchy
//!     │
//! AbsentType            ← terminal sentinel, doubles as a node/element
//!     │                   stand-in (null-object composite)
//! Operable<V>           ← add/subtract/multiply/divide contract,
//!     │                   Free (unconditional) and Locked (identity-only)
//! Chain<C>              ← context-carrying call chains terminated by a
//!                         single subject call
//! ```
//!
//! The null-object defaults the kernel leans on (`EmptyNode`,
//! `EmptyTypeMirror`, `EmptyElement`) live in `underlay-facets`.

pub mod chain;
pub mod error;
pub mod operable;
pub mod relation;

pub use chain::{Chain, Context, Link};
pub use error::{ChainError, KernelError, OperableError};
pub use operable::{Free, Locked, Numeric, Operable, Operation};
pub use relation::{AbsentType, TypeDescriptor, TypeId, TypeRelation};
