use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

/// Maps a signed exponent onto the canonical non-negative exponent with the
/// same meaning in a field of the given order.
///
/// Fermat's little theorem gives `a^(order - 1) = 1` for every nonzero `a`,
/// so exponents act modulo `order - 1`: a negative exponent `-k` reduces to
/// `order - 1 - (k mod (order - 1))`. Non-negative exponents pass through
/// untouched; the modular exponentiation downstream handles them at any
/// magnitude.
pub(crate) fn normalize_exponent(exponent: BigInt, order: &BigUint) -> BigUint {
    let (sign, magnitude) = exponent.into_parts();
    if sign != Sign::Minus {
        return magnitude;
    }
    let group_order = order - 1u32;
    if group_order.is_zero() {
        // The trivial field F_1, where every exponent collapses to zero.
        return BigUint::zero();
    }
    let remainder = magnitude % &group_order;
    if remainder.is_zero() {
        BigUint::zero()
    } else {
        group_order - remainder
    }
}
