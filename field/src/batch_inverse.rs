use alloc::vec::Vec;

use num_bigint::BigUint;
use num_traits::One;
use tracing::instrument;

use crate::element::FieldElement;
use crate::error::{FieldError, FieldResult};

/// Batch multiplicative inverses with Montgomery's trick.
///
/// At a high level, we invert the product of the given field elements, then
/// derive the individual inverses from that via multiplication. One Fermat
/// exponentiation is paid for the whole slice instead of one per element.
///
/// Fails with [`FieldError::DivisionByZero`] if any input is zero and with
/// [`FieldError::IncompatibleMul`] if the inputs live in different fields.
#[instrument(level = "debug", skip_all)]
pub fn batch_inverse(elements: &[FieldElement]) -> FieldResult<Vec<FieldElement>> {
    let Some(first) = elements.first() else {
        return Ok(Vec::new());
    };
    // A single zero poisons the whole running product, so reject it up front.
    if let Some(zero) = elements.iter().find(|x| x.is_zero()) {
        return Err(FieldError::DivisionByZero {
            order: zero.order().clone(),
        });
    }

    // Forward pass: result[i] holds the product of elements[..i]. Any order
    // mismatch surfaces here through `mul`.
    let mut result = Vec::with_capacity(elements.len());
    let mut acc = first.bind(BigUint::one());
    for x in elements {
        result.push(acc.clone());
        acc = acc.mul(x)?;
    }

    // With a prime order the product of nonzero elements is nonzero; a
    // composite order smuggled past the caller obligation still fails
    // cleanly here instead of inverting garbage.
    let mut inv = acc.try_inverse().ok_or_else(|| FieldError::DivisionByZero {
        order: first.order().clone(),
    })?;

    // Backward pass: peel one factor off the inverted product per step.
    for i in (0..elements.len()).rev() {
        let inverted = result[i].mul(&inv)?;
        inv = inv.mul(&elements[i])?;
        result[i] = inverted;
    }
    Ok(result)
}
