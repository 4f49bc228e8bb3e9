use core::fmt::{self, Debug, Display, Formatter};

use num_bigint::{BigInt, BigUint, RandBigInt};
use num_traits::Zero;
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{FieldError, FieldResult};
use crate::exponentiation::normalize_exponent;
use crate::primality::is_probable_prime;

/// An element of the prime field `F_order`, stored as its canonical residue.
///
/// The residue always satisfies `0 <= value < order`; the constructors are
/// the only validation gate and an out-of-range element is never observable.
/// Elements are immutable, every operation returns a fresh element, and two
/// elements are equal exactly when both residue and order match.
///
/// The order is trusted to be prime. Nothing here verifies that by default —
/// a composite order silently breaks inversion and division, so callers who
/// cannot vouch for their modulus should construct through
/// [`FieldElement::new_in_checked_field`].
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[must_use]
pub struct FieldElement {
    value: BigUint,
    order: BigUint,
}

/// How division treats a zero divisor.
///
/// Fermat inversion maps zero to zero (`0^(p-2) = 0`), so the historical
/// behavior of this construction is a silent zero quotient. Rejection is the
/// default; the legacy quotient stays available behind an explicit opt-in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ZeroDivisorPolicy {
    /// Fail with [`FieldError::DivisionByZero`].
    #[default]
    Reject,
    /// Return the zero element, matching `a * 0^(p-2) mod p`.
    ZeroQuotient,
}

impl FieldElement {
    /// Creates the element `value` of `F_order`.
    ///
    /// Succeeds only when `value >= 0`, `order > 0` and `value < order`.
    /// The conditions are checked independently so a malformed (non-positive)
    /// modulus can never make the range check vacuous.
    pub fn new(value: impl Into<BigInt>, order: impl Into<BigInt>) -> FieldResult<Self> {
        let value = value.into();
        let order = order.into();
        match (value.to_biguint(), order.to_biguint()) {
            (Some(value), Some(order)) if !order.is_zero() && value < order => {
                Ok(Self { value, order })
            }
            _ => Err(FieldError::OutOfRange { value, order }),
        }
    }

    /// Like [`FieldElement::new`], for callers already holding unsigned
    /// big integers.
    pub fn from_biguint(value: BigUint, order: BigUint) -> FieldResult<Self> {
        if order.is_zero() || value >= order {
            return Err(FieldError::OutOfRange {
                value: value.into(),
                order: order.into(),
            });
        }
        Ok(Self { value, order })
    }

    /// Validated construction that additionally checks the order for
    /// primality (Miller-Rabin), failing with
    /// [`FieldError::NonPrimeOrder`] on a composite modulus.
    ///
    /// This trades a one-time cost for safety; the plain constructors keep
    /// the order a caller obligation.
    pub fn new_in_checked_field(
        value: impl Into<BigInt>,
        order: impl Into<BigInt>,
    ) -> FieldResult<Self> {
        let element = Self::new(value, order)?;
        if !is_probable_prime(&element.order) {
            return Err(FieldError::NonPrimeOrder {
                order: element.order,
            });
        }
        Ok(element)
    }

    /// The additive identity of `F_order`.
    pub fn zero(order: impl Into<BigInt>) -> FieldResult<Self> {
        Self::new(0, order)
    }

    /// The multiplicative identity of `F_order`.
    pub fn one(order: impl Into<BigInt>) -> FieldResult<Self> {
        Self::new(1, order)
    }

    /// Samples a uniformly random element of `F_order`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, order: &BigUint) -> FieldResult<Self> {
        if order.is_zero() {
            return Err(FieldError::OutOfRange {
                value: BigInt::zero(),
                order: order.clone().into(),
            });
        }
        Ok(Self {
            value: rng.gen_biguint_below(order),
            order: order.clone(),
        })
    }

    /// The canonical residue in `[0, order)`.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// The field order this element lives in.
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Wraps an already-reduced residue in this element's field.
    pub(crate) fn bind(&self, value: BigUint) -> Self {
        debug_assert!(value < self.order);
        Self {
            value,
            order: self.order.clone(),
        }
    }

    /// Field addition: `(self + rhs) mod order`.
    ///
    /// Both operands must come from the same field.
    pub fn add(&self, rhs: &Self) -> FieldResult<Self> {
        if self.order != rhs.order {
            return Err(FieldError::IncompatibleAdd {
                lhs: self.order.clone(),
                rhs: rhs.order.clone(),
            });
        }
        Ok(self.bind((&self.value + &rhs.value) % &self.order))
    }

    /// Field multiplication: `(self * rhs) mod order`.
    ///
    /// Both operands must come from the same field.
    pub fn mul(&self, rhs: &Self) -> FieldResult<Self> {
        if self.order != rhs.order {
            return Err(FieldError::IncompatibleMul {
                lhs: self.order.clone(),
                rhs: rhs.order.clone(),
            });
        }
        Ok(self.bind((&self.value * &rhs.value) % &self.order))
    }

    /// Field exponentiation by a signed integer of any magnitude.
    ///
    /// Negative exponents mean repeated division: `a^(-k) = (a^(-1))^k`,
    /// realized by reducing the exponent modulo `order - 1` (Fermat) before
    /// square-and-multiply exponentiation. Raising the zero element to a
    /// negative exponent is mathematically undefined; use
    /// [`FieldElement::try_inverse`] where that case must be caught.
    pub fn pow(&self, exponent: impl Into<BigInt>) -> Self {
        let exponent = normalize_exponent(exponent.into(), &self.order);
        self.bind(self.value.modpow(&exponent, &self.order))
    }

    /// The multiplicative inverse `a^(order - 2)`, or `None` for zero.
    pub fn try_inverse(&self) -> Option<Self> {
        (!self.value.is_zero()).then(|| self.pow(&self.order - 2u32))
    }

    /// Field division via Fermat inversion of the divisor.
    ///
    /// Both operands must come from the same field, and the divisor must be
    /// nonzero. See [`FieldElement::div_with_policy`] for the lenient
    /// treatment of zero divisors.
    pub fn div(&self, rhs: &Self) -> FieldResult<Self> {
        self.div_with_policy(rhs, ZeroDivisorPolicy::Reject)
    }

    /// Field division with an explicit [`ZeroDivisorPolicy`].
    pub fn div_with_policy(&self, rhs: &Self, policy: ZeroDivisorPolicy) -> FieldResult<Self> {
        if self.order != rhs.order {
            return Err(FieldError::IncompatibleDiv {
                lhs: self.order.clone(),
                rhs: rhs.order.clone(),
            });
        }
        match rhs.try_inverse() {
            Some(inverse) => Ok(self.bind((&self.value * &inverse.value) % &self.order)),
            None => match policy {
                ZeroDivisorPolicy::Reject => Err(FieldError::DivisionByZero {
                    order: self.order.clone(),
                }),
                ZeroDivisorPolicy::ZeroQuotient => Ok(self.bind(BigUint::zero())),
            },
        }
    }
}

impl Display for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value, f)
    }
}

impl Debug for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement_{}({})", self.order, self.value)
    }
}

#[derive(Deserialize)]
struct FieldElementRepr {
    value: BigUint,
    order: BigUint,
}

impl<'de> Deserialize<'de> for FieldElement {
    /// Decoding runs through the validation gate, so a tampered encoding can
    /// never produce an out-of-range element.
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let repr = FieldElementRepr::deserialize(d)?;
        Self::from_biguint(repr.value, repr.order).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    fn fe(value: i64, order: i64) -> FieldElement {
        FieldElement::new(value, order).unwrap()
    }

    #[test]
    fn construction_boundaries() {
        assert!(FieldElement::new(12, 13).is_ok());
        assert!(matches!(
            FieldElement::new(13, 13),
            Err(FieldError::OutOfRange { .. })
        ));
        assert!(matches!(
            FieldElement::new(-1, 13),
            Err(FieldError::OutOfRange { .. })
        ));
    }

    #[test]
    fn malformed_modulus_is_rejected() {
        // A non-positive order must trip the same gate even when the
        // chained-comparison reading of the check would let it through.
        assert!(matches!(
            FieldElement::new(0, 0),
            Err(FieldError::OutOfRange { .. })
        ));
        assert!(matches!(
            FieldElement::new(-3, -2),
            Err(FieldError::OutOfRange { .. })
        ));
        assert!(matches!(
            FieldElement::new(5, -7),
            Err(FieldError::OutOfRange { .. })
        ));
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(fe(3, 13), fe(3, 13));
        assert_ne!(fe(3, 13), fe(4, 13));
        // Same residue, different field.
        assert_ne!(fe(3, 13), fe(3, 17));
        // Comparison against an absent counterpart reports non-equality.
        assert_ne!(Some(fe(3, 13)), None);
    }

    #[test]
    fn mul_matches_reference_scenario() {
        // 3 * 12 = 36 = 10 (mod 13)
        assert_eq!(fe(3, 13).mul(&fe(12, 13)).unwrap(), fe(10, 13));
    }

    #[test]
    fn pow_matches_reference_scenario() {
        // 3^3 = 27 = 1 (mod 13)
        assert_eq!(fe(3, 13).pow(3), fe(1, 13));
    }

    #[test]
    fn div_matches_reference_scenario() {
        // 7 * 2 = 1 (mod 13), so 3 / 7 = 3 * 2 = 6.
        assert_eq!(fe(3, 13).div(&fe(7, 13)).unwrap(), fe(6, 13));
    }

    #[test]
    fn negative_exponent_is_inverse_power() {
        let a = fe(7, 13);
        assert_eq!(a.pow(-1), a.try_inverse().unwrap());
        assert_eq!(a.pow(-3), a.try_inverse().unwrap().pow(3));
        assert_eq!(a.pow(-3).mul(&a.pow(3)).unwrap(), fe(1, 13));
    }

    #[test]
    fn zero_has_no_inverse() {
        assert_eq!(fe(0, 13).try_inverse(), None);
        assert!(matches!(
            fe(5, 13).div(&fe(0, 13)),
            Err(FieldError::DivisionByZero { .. })
        ));
        assert_eq!(
            fe(5, 13)
                .div_with_policy(&fe(0, 13), ZeroDivisorPolicy::ZeroQuotient)
                .unwrap(),
            fe(0, 13)
        );
    }

    #[test]
    fn checked_field_requires_prime_order() {
        assert!(FieldElement::new_in_checked_field(3, 13).is_ok());
        assert!(matches!(
            FieldElement::new_in_checked_field(3, 15),
            Err(FieldError::NonPrimeOrder { .. })
        ));
    }

    #[test]
    fn trivial_field_is_closed() {
        let zero = fe(0, 1);
        assert_eq!(zero.add(&zero).unwrap(), zero);
        assert_eq!(zero.mul(&zero).unwrap(), zero);
        assert_eq!(zero.pow(-5), zero);
    }

    #[test]
    fn debug_names_the_field() {
        assert_eq!(format!("{:?}", fe(3, 13)), "FieldElement_13(3)");
        assert_eq!(format!("{}", fe(3, 13)), "3");
    }
}
