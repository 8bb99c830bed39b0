//! Error vocabulary for kernel operations.
//!
//! All failures are synchronous and propagate immediately to the direct
//! caller. The kernel performs no retries and substitutes no defaults —
//! the null-object pattern in `underlay-facets` is a declared
//! substitution made at construction time, not error recovery.

use crate::operable::Operation;

/// Failures of the operability contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OperableError {
    /// The operand required by an operation was absent.
    ///
    /// Checked before any identity or arithmetic check.
    #[error("missing argument: {operation} requires an operand")]
    MissingArgument { operation: Operation },

    /// A locked value was asked to perform a real mutation.
    #[error("invariant violation: {operation} on a locked value with operand {operand}")]
    InvariantViolation {
        operation: Operation,
        /// Rendering of the offending operand.
        operand: String,
    },

    /// Division by the additive identity.
    #[error("arithmetic error: division by zero")]
    DivisionByZero,

    /// The operation left the value type's representable range.
    #[error("arithmetic error: {operation} overflowed")]
    Overflow { operation: Operation },
}

/// Failures raised inside a chain transition.
///
/// The first failing link aborts the whole chain; the subject is never
/// evaluated after a failed link.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    /// A link applied an operability operation and it failed.
    ///
    /// `step` is the 1-based position of the failing link in its chain.
    #[error("chain link failed at step {step}: {source}")]
    Link {
        step: usize,
        #[source]
        source: OperableError,
    },

    /// A link aborted for a reason of its own.
    #[error("chain aborted: {description}")]
    Aborted { description: String },
}

impl From<OperableError> for ChainError {
    fn from(source: OperableError) -> Self {
        // Step 0 is a placeholder; the carrier stamps the real step when
        // the error escapes a link transition.
        Self::Link { step: 0, source }
    }
}

impl ChainError {
    /// Record the chain step this error escaped from.
    pub(crate) fn at_step(self, step: usize) -> Self {
        match self {
            Self::Link { source, .. } => Self::Link { step, source },
            other => other,
        }
    }
}

/// Umbrella error for callers that cross component boundaries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KernelError {
    #[error(transparent)]
    Operable(#[from] OperableError),

    #[error(transparent)]
    Chain(#[from] ChainError),
}
