//! Contextual chaining: fluent, context-carrying call chains.
//!
//! A chain starts over an initial context, takes zero or more *link*
//! transitions, and ends in exactly one *subject* transition:
//!
//! ```text
//! start ──link──▶ ... ──link──▶ ──subject──▶ done
//! ```
//!
//! Each link takes the current context by value and either mutates and
//! returns it (accumulation in place) or builds a replacement (context
//! replacement); which of the two a concrete link does is the link's
//! decision, not the framework's. The subject consumes the carrier and
//! reads the final context immutably, so no link can run after it and
//! no chain can be replayed — both are enforced by ownership rather
//! than by a runtime flag.
//!
//! A carrier is itself a context, so a whole chain can serve as one
//! link's worth of context in an enclosing chain.
//!
//! Failure in any link aborts the chain immediately; the subject is
//! never evaluated after a failed link.

use crate::error::ChainError;

/// Accumulated state a chain carries between transitions.
///
/// Deliberately a marker: the framework needs nothing from a context
/// beyond its identity as a type. The richness lives in the links.
pub trait Context {}

/// One chain transition.
///
/// Implemented for any `FnOnce(C) -> Result<C, ChainError>`, so ad-hoc
/// links are closures and reusable links are named types.
pub trait Link<C: Context> {
    /// Consume the current context and produce the next one.
    fn apply(self, context: C) -> Result<C, ChainError>;
}

impl<C, F> Link<C> for F
where
    C: Context,
    F: FnOnce(C) -> Result<C, ChainError>,
{
    fn apply(self, context: C) -> Result<C, ChainError> {
        self(context)
    }
}

/// A context carrier: owns the accumulated context and extends the
/// chain one transition at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain<C: Context> {
    context: C,
    step: usize,
}

impl<C: Context> Chain<C> {
    /// Start a chain over an initial context.
    pub fn over(context: C) -> Self {
        Self { context, step: 0 }
    }

    /// The accumulated context so far.
    pub fn context(&self) -> &C {
        &self.context
    }

    /// How many link transitions this chain has taken.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Perform one chain transition.
    ///
    /// The returned carrier owns whatever context the link produced;
    /// the previous carrier is gone, so no link is shared by two
    /// independent chains. Steps are numbered from 1, and a failing
    /// link's error carries the step it aborted at.
    pub fn link(self, link: impl Link<C>) -> Result<Self, ChainError> {
        let step = self.step + 1;
        match link.apply(self.context) {
            Ok(context) => Ok(Self { context, step }),
            Err(err) => Err(err.at_step(step)),
        }
    }

    /// The terminal subject transition.
    ///
    /// Consumes the carrier and reads the final accumulated context
    /// without mutating it.
    pub fn subject<R>(self, subject: impl FnOnce(&C) -> R) -> R {
        subject(&self.context)
    }

    /// Release the accumulated context without a subject call, for
    /// callers that want to reuse it as the start of a new chain.
    pub fn into_context(self) -> C {
        self.context
    }
}

// A carrier is usable wherever a context is expected.
impl<C: Context> Context for Chain<C> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OperableError;
    use crate::operable::{Free, Operable};

    #[test]
    fn links_accumulate_and_subject_reads() {
        let total = Chain::over(Free::new(0_i64))
            .link(|mut ctx: Free<i64>| {
                ctx.add(Some(4))?;
                Ok(ctx)
            })
            .and_then(|chain| {
                chain.link(|mut ctx: Free<i64>| {
                    ctx.multiply(Some(3))?;
                    Ok(ctx)
                })
            })
            .map(|chain| chain.subject(|ctx| ctx.value()))
            .unwrap();
        assert_eq!(total, 12);
    }

    #[test]
    fn replacing_and_mutating_links_are_equivalent() {
        let mutated = Chain::over(Free::new(2_i64))
            .link(|mut ctx: Free<i64>| {
                ctx.add(Some(3))?;
                Ok(ctx)
            })
            .unwrap()
            .subject(|ctx| ctx.value());

        // Same transition expressed as context replacement.
        let replaced = Chain::over(Free::new(2_i64))
            .link(|ctx: Free<i64>| Ok(Free::new(ctx.value() + 3)))
            .unwrap()
            .subject(|ctx| ctx.value());

        assert_eq!(mutated, replaced);
    }

    #[test]
    fn failed_link_aborts_chain() {
        let result = Chain::over(Free::new(1_i64)).link(|mut ctx: Free<i64>| {
            ctx.divide(Some(0))?;
            Ok(ctx)
        });
        assert_eq!(
            result.unwrap_err(),
            ChainError::Link {
                step: 1,
                source: OperableError::DivisionByZero
            }
        );
    }

    #[test]
    fn failing_step_is_reported() {
        let result = Chain::over(Free::new(4_i64))
            .link(|mut ctx: Free<i64>| {
                ctx.add(Some(1))?;
                Ok(ctx)
            })
            .and_then(|chain| {
                chain.link(|mut ctx: Free<i64>| {
                    ctx.divide(Some(0))?;
                    Ok(ctx)
                })
            });
        assert_eq!(
            result.unwrap_err(),
            ChainError::Link {
                step: 2,
                source: OperableError::DivisionByZero
            }
        );
    }

    #[test]
    fn steps_count_link_transitions() {
        let chain = Chain::over(Free::new(0_i64));
        assert_eq!(chain.step(), 0);
        let chain = chain
            .link(|ctx: Free<i64>| Ok(ctx))
            .unwrap()
            .link(|ctx: Free<i64>| Ok(ctx))
            .unwrap();
        assert_eq!(chain.step(), 2);
    }

    #[test]
    fn named_links_via_the_trait() {
        struct Scale(i64);

        impl Link<Free<i64>> for Scale {
            fn apply(self, mut context: Free<i64>) -> Result<Free<i64>, ChainError> {
                context.multiply(Some(self.0))?;
                Ok(context)
            }
        }

        let total = Chain::over(Free::new(5_i64))
            .link(Scale(4))
            .unwrap()
            .subject(|ctx| ctx.value());
        assert_eq!(total, 20);
    }

    #[test]
    fn a_chain_is_itself_a_context() {
        let inner = Chain::over(Free::new(7_i64));
        let outer = Chain::over(inner)
            .link(|chain: Chain<Free<i64>>| {
                let mut ctx = chain.into_context();
                ctx.add(Some(1))?;
                Ok(Chain::over(ctx))
            })
            .unwrap();
        assert_eq!(outer.subject(|chain| chain.context().value()), 8);
    }

    #[test]
    fn abort_reason_of_a_links_own() {
        let result = Chain::over(Free::new(0_i64)).link(|_ctx: Free<i64>| {
            Err(ChainError::Aborted {
                description: "upstream collaborator refused".to_string(),
            })
        });
        assert!(matches!(result, Err(ChainError::Aborted { .. })));
    }
}
