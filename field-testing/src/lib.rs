//! Utilities for testing prime field implementations.
//!
//! Every check here is exhaustive over the whole field, so callers should
//! stick to small prime orders.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use fp_field::{FieldElement, FieldError, ZeroDivisorPolicy, batch_inverse};

fn elements(order: u64) -> impl Iterator<Item = FieldElement> {
    (0..order).map(move |value| FieldElement::new(value, order).unwrap())
}

fn nonzero(order: u64) -> impl Iterator<Item = FieldElement> {
    elements(order).skip(1)
}

/// Add, mul and div never leave the field.
pub fn test_closure(order: u64) {
    for a in elements(order) {
        for b in elements(order) {
            let sum = a.add(&b).unwrap();
            assert!(sum.value() < sum.order());
            let product = a.mul(&b).unwrap();
            assert!(product.value() < product.order());
            if !b.is_zero() {
                let quotient = a.div(&b).unwrap();
                assert!(quotient.value() < quotient.order());
            }
        }
    }
}

pub fn test_commutativity(order: u64) {
    for a in elements(order) {
        for b in elements(order) {
            assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
            assert_eq!(a.mul(&b).unwrap(), b.mul(&a).unwrap());
        }
    }
}

pub fn test_identities(order: u64) {
    let zero = FieldElement::zero(order).unwrap();
    for a in elements(order) {
        assert_eq!(a.add(&zero).unwrap(), a);
    }
    if order > 1 {
        let one = FieldElement::one(order).unwrap();
        for a in elements(order) {
            assert_eq!(a.mul(&one).unwrap(), a);
        }
    }
}

/// `a * a^(order - 2) = 1` for every nonzero `a`, and `try_inverse` agrees.
pub fn test_fermat_inverse(order: u64) {
    let one = FieldElement::one(order).unwrap();
    for a in nonzero(order) {
        let inverse = a.pow(order - 2);
        assert_eq!(a.mul(&inverse).unwrap(), one);
        assert_eq!(a.try_inverse().unwrap(), inverse);
    }
}

/// `a / b` agrees with `a * b^(order - 2)` for every nonzero `b`.
pub fn test_division_matches_inverse_multiplication(order: u64) {
    for a in elements(order) {
        for b in nonzero(order) {
            let expected = a.mul(&b.pow(order - 2)).unwrap();
            assert_eq!(a.div(&b).unwrap(), expected);
        }
    }
}

/// `a^(-k)` agrees with `(a^k)^(order - 2)` for `0 < k < order - 1`.
pub fn test_negative_exponents(order: u64) {
    for a in nonzero(order) {
        for k in 1..order.saturating_sub(1) {
            let expected = a.pow(k).pow(order - 2);
            assert_eq!(a.pow(-(k as i64)), expected);
        }
    }
}

/// Every binary operator refuses operands from different fields, each with
/// its own error identity.
pub fn test_cross_field_rejection(order_a: u64, order_b: u64) {
    assert_ne!(order_a, order_b);
    for a in elements(order_a) {
        for b in elements(order_b) {
            assert!(matches!(
                a.add(&b),
                Err(FieldError::IncompatibleAdd { .. })
            ));
            assert!(matches!(
                a.mul(&b),
                Err(FieldError::IncompatibleMul { .. })
            ));
            assert!(matches!(
                a.div(&b),
                Err(FieldError::IncompatibleDiv { .. })
            ));
        }
    }
}

/// `order - 1` is the last valid residue; `order` and `-1` are both out.
pub fn test_construction_boundaries(order: u64) {
    assert!(FieldElement::new(order - 1, order).is_ok());
    assert!(matches!(
        FieldElement::new(order, order),
        Err(FieldError::OutOfRange { .. })
    ));
    assert!(matches!(
        FieldElement::new(-1, order),
        Err(FieldError::OutOfRange { .. })
    ));
}

/// Batch inversion agrees with element-wise Fermat inversion.
pub fn test_batch_inverse(order: u64) {
    let elements: Vec<_> = nonzero(order).collect();
    let inverses = batch_inverse(&elements).unwrap();
    for (x, inv) in elements.iter().zip(&inverses) {
        assert_eq!(x.try_inverse().as_ref(), Some(inv));
    }
}

/// Zero divisors are rejected by default and yield zero under the lenient
/// policy.
pub fn test_zero_divisor_policies(order: u64) {
    let zero = FieldElement::zero(order).unwrap();
    for a in elements(order) {
        assert!(matches!(
            a.div(&zero),
            Err(FieldError::DivisionByZero { .. })
        ));
        let lenient = a
            .div_with_policy(&zero, ZeroDivisorPolicy::ZeroQuotient)
            .unwrap();
        assert!(lenient.is_zero());
    }
}
