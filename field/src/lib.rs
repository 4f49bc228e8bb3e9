//! Arithmetic over a prime field `F_p` with a runtime-chosen modulus.
//!
//! [`FieldElement`] couples a canonical residue with its modulus, so elements
//! of different fields can never be combined by accident. Residues are
//! arbitrary-precision, so arithmetic stays exact at any modulus size and
//! every operation reduces before returning. The modulus is trusted to be
//! prime; [`FieldElement::new_in_checked_field`] is the opt-in gate for
//! callers who want that verified.

#![no_std]

extern crate alloc;

mod batch_inverse;
mod element;
mod error;
mod exponentiation;
mod primality;

pub use batch_inverse::batch_inverse;
pub use element::{FieldElement, ZeroDivisorPolicy};
pub use error::{FieldError, FieldResult};
pub use primality::is_probable_prime;
