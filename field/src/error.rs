//! Error types for field construction and arithmetic.

use num_bigint::{BigInt, BigUint};
use thiserror::Error;

/// Errors surfaced by [`FieldElement`](crate::FieldElement) construction and
/// arithmetic.
///
/// Every failure is immediate and final: there is no retry and no partial
/// result. Each binary operator gets its own incompatibility variant so
/// diagnostics name the operation that failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Construction with a value outside `[0, order)`.
    #[error("value {value} out of field range [0, {order})")]
    OutOfRange {
        /// The rejected value.
        value: BigInt,
        /// The modulus it was checked against, as given by the caller.
        order: BigInt,
    },

    /// Addition of elements drawn from different fields.
    #[error("cannot add elements of different fields (orders {lhs} and {rhs})")]
    IncompatibleAdd { lhs: BigUint, rhs: BigUint },

    /// Multiplication of elements drawn from different fields.
    #[error("cannot multiply elements of different fields (orders {lhs} and {rhs})")]
    IncompatibleMul { lhs: BigUint, rhs: BigUint },

    /// Division of elements drawn from different fields.
    #[error("cannot divide elements of different fields (orders {lhs} and {rhs})")]
    IncompatibleDiv { lhs: BigUint, rhs: BigUint },

    /// Division by the zero element.
    #[error("division by the zero element of F_{order}")]
    DivisionByZero { order: BigUint },

    /// A checked constructor was handed a composite modulus.
    #[error("field order {order} is not prime")]
    NonPrimeOrder { order: BigUint },
}

/// Result type alias for field operations.
pub type FieldResult<T> = core::result::Result<T, FieldError>;
