//! Operability contract for numeric-like values.
//!
//! The contract surface is eight operations: four in-place mutations
//! (`add`, `subtract`, `multiply`, `divide`) and four value-returning
//! forms (`plus`, `minus`, `times`, `by`). The value-returning forms
//! apply the same mutation and then return the post-operation state —
//! both forms have the side effect.
//!
//! Two variants, never mixed at runtime for the same value:
//!
//! - [`Free`]: unconditional application. Division by zero fails.
//! - [`Locked`]: identity-only algebra. Add/subtract accept only zero,
//!   multiply/divide accept only one; anything else is an invariant
//!   violation that leaves the value untouched. A locked value's
//!   observable state never changes across its lifetime, yet it still
//!   satisfies the full contract and can be passed wherever an operable
//!   value is expected.
//!
//! Operands are `Option`al: `None` is the missing-argument failure,
//! checked before any identity or arithmetic check.

use crate::chain::Context;
use crate::error::OperableError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four algebraic operations of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Subtract => write!(f, "subtract"),
            Self::Multiply => write!(f, "multiply"),
            Self::Divide => write!(f, "divide"),
        }
    }
}

/// A numeric value type with defined zero and one constants.
pub trait Numeric: Copy + PartialEq + fmt::Debug + fmt::Display + Send + Sync {
    /// The additive identity.
    const ZERO: Self;

    /// The multiplicative identity.
    const ONE: Self;

    /// Addition, `None` on overflow.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Subtraction, `None` on overflow.
    fn checked_sub(self, rhs: Self) -> Option<Self>;

    /// Multiplication, `None` on overflow.
    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// Division by a non-zero divisor, `None` on overflow.
    fn checked_div(self, rhs: Self) -> Option<Self>;
}

impl Numeric for i64 {
    const ZERO: Self = 0;
    const ONE: Self = 1;

    fn checked_add(self, rhs: Self) -> Option<Self> {
        i64::checked_add(self, rhs)
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        i64::checked_sub(self, rhs)
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        i64::checked_mul(self, rhs)
    }

    fn checked_div(self, rhs: Self) -> Option<Self> {
        i64::checked_div(self, rhs)
    }
}

impl Numeric for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    // IEEE arithmetic saturates to infinity rather than overflowing.
    fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        Some(self - rhs)
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        Some(self * rhs)
    }

    fn checked_div(self, rhs: Self) -> Option<Self> {
        Some(self / rhs)
    }
}

/// A value participating in add/subtract/multiply/divide.
///
/// The value-returning forms are provided: they delegate to the
/// corresponding in-place form and return the post-operation state.
pub trait Operable {
    type Value: Numeric;

    /// The current value.
    fn value(&self) -> Self::Value;

    /// Add the operand in place.
    fn add(&mut self, operand: Option<Self::Value>) -> Result<(), OperableError>;

    /// Subtract the operand in place.
    fn subtract(&mut self, operand: Option<Self::Value>) -> Result<(), OperableError>;

    /// Multiply by the operand in place.
    fn multiply(&mut self, operand: Option<Self::Value>) -> Result<(), OperableError>;

    /// Divide by the operand in place.
    fn divide(&mut self, operand: Option<Self::Value>) -> Result<(), OperableError>;

    /// Add, then return the resulting value. Mutates like [`Operable::add`].
    fn plus(&mut self, operand: Option<Self::Value>) -> Result<Self::Value, OperableError> {
        self.add(operand)?;
        Ok(self.value())
    }

    /// Subtract, then return the resulting value.
    fn minus(&mut self, operand: Option<Self::Value>) -> Result<Self::Value, OperableError> {
        self.subtract(operand)?;
        Ok(self.value())
    }

    /// Multiply, then return the resulting value.
    fn times(&mut self, operand: Option<Self::Value>) -> Result<Self::Value, OperableError> {
        self.multiply(operand)?;
        Ok(self.value())
    }

    /// Divide, then return the resulting value.
    fn by(&mut self, operand: Option<Self::Value>) -> Result<Self::Value, OperableError> {
        self.divide(operand)?;
        Ok(self.value())
    }
}

fn require<V: Numeric>(
    operation: Operation,
    operand: Option<V>,
) -> Result<V, OperableError> {
    operand.ok_or(OperableError::MissingArgument { operation })
}

/// An operable value with unconditional algebra.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Free<V: Numeric> {
    value: V,
}

impl<V: Numeric> Free<V> {
    pub fn new(value: V) -> Self {
        Self { value }
    }

    fn apply(&mut self, operation: Operation, operand: Option<V>) -> Result<(), OperableError> {
        let x = require(operation, operand)?;
        if operation == Operation::Divide && x == V::ZERO {
            return Err(OperableError::DivisionByZero);
        }
        let next = match operation {
            Operation::Add => self.value.checked_add(x),
            Operation::Subtract => self.value.checked_sub(x),
            Operation::Multiply => self.value.checked_mul(x),
            Operation::Divide => self.value.checked_div(x),
        };
        self.value = next.ok_or(OperableError::Overflow { operation })?;
        Ok(())
    }
}

impl<V: Numeric> Operable for Free<V> {
    type Value = V;

    fn value(&self) -> V {
        self.value
    }

    fn add(&mut self, operand: Option<V>) -> Result<(), OperableError> {
        self.apply(Operation::Add, operand)
    }

    fn subtract(&mut self, operand: Option<V>) -> Result<(), OperableError> {
        self.apply(Operation::Subtract, operand)
    }

    fn multiply(&mut self, operand: Option<V>) -> Result<(), OperableError> {
        self.apply(Operation::Multiply, operand)
    }

    fn divide(&mut self, operand: Option<V>) -> Result<(), OperableError> {
        self.apply(Operation::Divide, operand)
    }
}

/// An operable value with identity-only algebra.
///
/// Created once with a fixed value. Every accepted operation is a
/// provable no-op; any real mutation attempt fails loudly instead of
/// miscalculating silently, and the value is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Locked<V: Numeric> {
    value: V,
}

impl<V: Numeric> Locked<V> {
    pub fn new(value: V) -> Self {
        Self { value }
    }

    fn accept_identity(
        &self,
        operation: Operation,
        operand: Option<V>,
        identity: V,
    ) -> Result<(), OperableError> {
        let x = require(operation, operand)?;
        if x == identity {
            Ok(())
        } else {
            Err(OperableError::InvariantViolation {
                operation,
                operand: x.to_string(),
            })
        }
    }
}

impl<V: Numeric> Operable for Locked<V> {
    type Value = V;

    fn value(&self) -> V {
        self.value
    }

    fn add(&mut self, operand: Option<V>) -> Result<(), OperableError> {
        self.accept_identity(Operation::Add, operand, V::ZERO)
    }

    fn subtract(&mut self, operand: Option<V>) -> Result<(), OperableError> {
        self.accept_identity(Operation::Subtract, operand, V::ZERO)
    }

    fn multiply(&mut self, operand: Option<V>) -> Result<(), OperableError> {
        self.accept_identity(Operation::Multiply, operand, V::ONE)
    }

    fn divide(&mut self, operand: Option<V>) -> Result<(), OperableError> {
        self.accept_identity(Operation::Divide, operand, V::ONE)
    }
}

// Operable values are usable as chain contexts.
impl<V: Numeric> Context for Free<V> {}
impl<V: Numeric> Context for Locked<V> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_applies_unconditionally() {
        let mut v = Free::new(6_i64);
        v.add(Some(4)).unwrap();
        assert_eq!(v.value(), 10);
        v.subtract(Some(3)).unwrap();
        assert_eq!(v.value(), 7);
        v.multiply(Some(2)).unwrap();
        assert_eq!(v.value(), 14);
        v.divide(Some(7)).unwrap();
        assert_eq!(v.value(), 2);
    }

    #[test]
    fn value_returning_forms_also_mutate() {
        let mut v = Free::new(1_i64);
        assert_eq!(v.plus(Some(2)).unwrap(), 3);
        assert_eq!(v.value(), 3);
        assert_eq!(v.times(Some(4)).unwrap(), 12);
        assert_eq!(v.value(), 12);
        assert_eq!(v.minus(Some(2)).unwrap(), 10);
        assert_eq!(v.by(Some(5)).unwrap(), 2);
        assert_eq!(v.value(), 2);
    }

    #[test]
    fn free_division_by_zero_fails() {
        let mut v = Free::new(10_i64);
        assert_eq!(v.divide(Some(0)), Err(OperableError::DivisionByZero));
        assert_eq!(v.value(), 10);
    }

    #[test]
    fn free_overflow_surfaces() {
        let mut v = Free::new(i64::MAX);
        assert_eq!(
            v.add(Some(1)),
            Err(OperableError::Overflow {
                operation: Operation::Add
            })
        );
        assert_eq!(v.value(), i64::MAX);
    }

    #[test]
    fn missing_operand_checked_first() {
        // A locked value reports the missing argument, not the
        // invariant, when the operand is absent.
        let mut locked = Locked::new(5_i64);
        assert_eq!(
            locked.add(None),
            Err(OperableError::MissingArgument {
                operation: Operation::Add
            })
        );

        let mut free = Free::new(5_i64);
        assert_eq!(
            free.divide(None),
            Err(OperableError::MissingArgument {
                operation: Operation::Divide
            })
        );
    }

    #[test]
    fn locked_accepts_additive_identity_only() {
        let mut v = Locked::new(5_i64);
        v.add(Some(0)).unwrap();
        v.subtract(Some(0)).unwrap();
        assert_eq!(v.value(), 5);

        assert_eq!(
            v.add(Some(3)),
            Err(OperableError::InvariantViolation {
                operation: Operation::Add,
                operand: "3".to_string()
            })
        );
        assert_eq!(v.value(), 5);
    }

    #[test]
    fn locked_accepts_multiplicative_identity_only() {
        let mut v = Locked::new(5_i64);
        v.multiply(Some(1)).unwrap();
        v.divide(Some(1)).unwrap();
        assert_eq!(v.value(), 5);

        assert_eq!(
            v.multiply(Some(2)),
            Err(OperableError::InvariantViolation {
                operation: Operation::Multiply,
                operand: "2".to_string()
            })
        );
        assert_eq!(v.value(), 5);
    }

    #[test]
    fn locked_value_returning_forms_return_fixed_value() {
        let mut v = Locked::new(7_i64);
        assert_eq!(v.plus(Some(0)).unwrap(), 7);
        assert_eq!(v.times(Some(1)).unwrap(), 7);
        assert!(v.by(Some(2)).is_err());
        assert_eq!(v.value(), 7);
    }

    #[test]
    fn float_identities() {
        let mut v = Locked::new(2.5_f64);
        v.add(Some(0.0)).unwrap();
        v.multiply(Some(1.0)).unwrap();
        assert_eq!(v.value(), 2.5);
        assert!(v.add(Some(0.1)).is_err());
    }
}
