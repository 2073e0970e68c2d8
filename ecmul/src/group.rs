//! Group law capability shared by every curve family.

use core::ops::{Add, Neg};
use elliptic_curve::subtle::ConditionallySelectable;

/// Group law of a prime-order elliptic curve group in a redundant (non-affine)
/// coordinate system.
///
/// Addition must be complete: it has to return the correct sum for every pair
/// of inputs, including `P + P`, `P + (-P)` and the identity, without branching
/// on the operands. The lookup tables and multiplication algorithms in this
/// crate rely on that.
pub trait GroupLaw:
    Copy + Default + ConditionallySelectable + Add<Output = Self> + Neg<Output = Self>
{
    /// The neutral element.
    fn identity() -> Self;

    /// The canonical generator of the prime-order group.
    fn generator() -> Self;

    /// Returns `self + self`.
    fn double(&self) -> Self;

    /// Returns `2^k * self` using `k` doublings.
    fn double_n(&self, k: usize) -> Self {
        let mut acc = *self;
        for _ in 0..k {
            acc = acc.double();
        }
        acc
    }
}

/// Scalar multiplication engine of a curve.
pub trait ScalarMul: GroupLaw {
    /// Scalar field element type.
    type Scalar;

    /// Computes `k * point` in constant time.
    ///
    /// Safe to use with a secret `k`.
    fn scalar_mult(k: &Self::Scalar, point: &Self) -> Self;

    /// Computes `k * G` for the canonical generator in constant time using the
    /// precomputed generator tables.
    ///
    /// Safe to use with a secret `k`.
    fn scalar_base_mult(k: &Self::Scalar) -> Self;

    /// Computes `a * point + b * G`.
    ///
    /// Meant for public inputs only, i.e. signature verification.
    fn double_scalar_base_mult(a: &Self::Scalar, point: &Self, b: &Self::Scalar) -> Self {
        Self::scalar_mult(a, point) + Self::scalar_base_mult(b)
    }
}
