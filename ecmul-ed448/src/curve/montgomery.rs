//! Curve448 in Montgomery form, `v^2 = u^3 + 156326 u^2 + u`, and the
//! x-only ladder behind X448.

#![allow(non_snake_case)]

use crate::curve::edwards::EdwardsPoint;
use crate::field::{FieldElement, Scalar};
use core::fmt;
use core::ops::Mul;
use ecmul::ScalarMul;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// A point in Montgomery form, as its 56-byte little-endian u-coordinate.
///
/// The bytes are kept as given. They are reduced modulo `p` only when the
/// point is used, so non-canonical encodings behave like their reduced value.
#[derive(Copy, Clone)]
pub struct MontgomeryPoint(pub [u8; 56]);

impl Default for MontgomeryPoint {
    fn default() -> MontgomeryPoint {
        Self([0u8; 56])
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for MontgomeryPoint {}

impl fmt::Debug for MontgomeryPoint {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0[..], formatter)
    }
}

impl ConstantTimeEq for MontgomeryPoint {
    fn ct_eq(&self, other: &MontgomeryPoint) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl PartialEq for MontgomeryPoint {
    fn eq(&self, other: &MontgomeryPoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for MontgomeryPoint {}

impl Mul<&Scalar> for &MontgomeryPoint {
    type Output = MontgomeryPoint;

    fn mul(self, scalar: &Scalar) -> MontgomeryPoint {
        let bytes = scalar.to_bytes();
        let mut k = [0u8; 56];
        k.copy_from_slice(&bytes[..56]);
        self.ladder(&k)
    }
}

impl Mul<&MontgomeryPoint> for &Scalar {
    type Output = MontgomeryPoint;

    fn mul(self, point: &MontgomeryPoint) -> MontgomeryPoint {
        point * self
    }
}

impl MontgomeryPoint {
    /// The generator of RFC 7748, `u = 5`
    pub const GENERATOR: Self = Self([
        0x05, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ]);

    /// `u = 0`, of order 2
    pub const LOW_A: Self = Self([0u8; 56]);

    /// `u = 1`, of order 4
    pub const LOW_B: Self = Self([
        0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ]);

    /// `u = -1`, of order 4
    pub const LOW_C: Self = Self([
        0xfe, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    ]);

    /// Is this one of the small-order points `u ∈ {0, 1, -1}` of Curve448 and
    /// its twist, in any encoding?
    pub fn is_low_order(&self) -> Choice {
        let u = FieldElement::from_bytes_mod_p(&self.0);
        u.is_zero() | u.ct_eq(&FieldElement::ONE) | u.ct_eq(&FieldElement::MINUS_ONE)
    }

    /// View the point as a byte slice
    pub fn as_bytes(&self) -> &[u8; 56] {
        &self.0
    }

    /// Convert the point to a ProjectiveMontgomeryPoint
    pub fn to_projective(&self) -> ProjectiveMontgomeryPoint {
        ProjectiveMontgomeryPoint {
            U: FieldElement::from_bytes_mod_p(&self.0),
            W: FieldElement::ONE,
        }
    }

    /// The X448 function of RFC 7748 § 5: clamp `scalar` and run the ladder.
    pub fn mul_clamped(&self, scalar: [u8; 56]) -> MontgomeryPoint {
        let mut k = clamp(scalar);
        let out = self.ladder(&k);

        #[cfg(feature = "zeroize")]
        zeroize::Zeroize::zeroize(&mut k);

        out
    }

    /// `X448(scalar, 5)` through the fixed-base Edwards tables.
    ///
    /// The generator has prime order, so the clamped integer can be reduced
    /// modulo `ℓ` first and the result mapped back with the birational map.
    pub fn mul_base_clamped(scalar: [u8; 56]) -> MontgomeryPoint {
        let mut wide = [0u8; 57];
        wide[..56].copy_from_slice(&clamp(scalar));
        let k = Scalar::from_bytes_mod_order(&wide);

        #[cfg(feature = "zeroize")]
        zeroize::Zeroize::zeroize(&mut wide);

        EdwardsPoint::scalar_base_mult(&k).to_montgomery()
    }

    /// Montgomery ladder over all 448 bits of `k`, little-endian.
    ///
    /// Algorithm 8 of Costello-Smith 2017, with the final conditional swap.
    fn ladder(&self, k: &[u8; 56]) -> MontgomeryPoint {
        let affine_u = FieldElement::from_bytes_mod_p(&self.0);
        let mut x0 = ProjectiveMontgomeryPoint::identity();
        let mut x1 = ProjectiveMontgomeryPoint {
            U: affine_u,
            W: FieldElement::ONE,
        };

        let mut swap = 0u8;
        for s in (0..448).rev() {
            let bit = (k[s >> 3] >> (s & 7)) & 1;
            let choice: u8 = swap ^ bit;

            ProjectiveMontgomeryPoint::conditional_swap(&mut x0, &mut x1, Choice::from(choice));
            differential_add_and_double(&mut x0, &mut x1, &affine_u);

            swap = bit;
        }
        ProjectiveMontgomeryPoint::conditional_swap(&mut x0, &mut x1, Choice::from(swap));

        x0.to_affine()
    }
}

/// Clear the cofactor bits and set bit 447.
fn clamp(mut scalar: [u8; 56]) -> [u8; 56] {
    scalar[0] &= 252;
    scalar[55] |= 128;
    scalar
}

/// A Projective point in Montgomery form
#[derive(Copy, Clone, Debug)]
pub struct ProjectiveMontgomeryPoint {
    U: FieldElement,
    W: FieldElement,
}

impl ConditionallySelectable for ProjectiveMontgomeryPoint {
    fn conditional_select(
        a: &ProjectiveMontgomeryPoint,
        b: &ProjectiveMontgomeryPoint,
        choice: Choice,
    ) -> ProjectiveMontgomeryPoint {
        ProjectiveMontgomeryPoint {
            U: FieldElement::conditional_select(&a.U, &b.U, choice),
            W: FieldElement::conditional_select(&a.W, &b.W, choice),
        }
    }
}

fn differential_add_and_double(
    P: &mut ProjectiveMontgomeryPoint,
    Q: &mut ProjectiveMontgomeryPoint,
    affine_PmQ: &FieldElement,
) {
    let t0 = P.U + P.W;
    let t1 = P.U - P.W;
    let t2 = Q.U + Q.W;
    let t3 = Q.U - Q.W;

    let t4 = t0.square(); // (U_P + W_P)^2 = U_P^2 + 2 U_P W_P + W_P^2
    let t5 = t1.square(); // (U_P - W_P)^2 = U_P^2 - 2 U_P W_P + W_P^2

    let t6 = t4 - t5; // 4 U_P W_P

    let t7 = t0 * t3; // (U_P + W_P) (U_Q - W_Q) = U_P U_Q + W_P U_Q - U_P W_Q - W_P W_Q
    let t8 = t1 * t2; // (U_P - W_P) (U_Q + W_Q) = U_P U_Q - W_P U_Q + U_P W_Q - W_P W_Q

    let t9 = t7 + t8; // 2 (U_P U_Q - W_P W_Q)
    let t10 = t7 - t8; // 2 (W_P U_Q - U_P W_Q)

    let t11 = t9.square(); // 4 (U_P U_Q - W_P W_Q)^2
    let t12 = t10.square(); // 4 (W_P U_Q - U_P W_Q)^2
    let t13 = FieldElement::A_PLUS_TWO_OVER_FOUR * t6; // (A + 2) U_P U_Q

    let t14 = t4 * t5; // ((U_P + W_P)(U_P - W_P))^2 = (U_P^2 - W_P^2)^2
    let t15 = t13 + t5; // (U_P - W_P)^2 + (A + 2) U_P W_P

    let t16 = t6 * t15; // 4 (U_P W_P) ((U_P - W_P)^2 + (A + 2) U_P W_P)
    let t17 = *affine_PmQ * t12; // U_D * 4 (W_P U_Q - U_P W_Q)^2
    let t18 = t11; // W_D * 4 (U_P U_Q - W_P W_Q)^2

    P.U = t14; // U_{P'} = (U_P + W_P)^2 (U_P - W_P)^2
    P.W = t16; // W_{P'} = (4 U_P W_P) ((U_P - W_P)^2 + ((A + 2)/4) 4 U_P W_P)
    Q.U = t18; // U_{Q'} = W_D * 4 (U_P U_Q - W_P W_Q)^2
    Q.W = t17; // W_{Q'} = U_D * 4 (W_P U_Q - U_P W_Q)^2
}

impl ProjectiveMontgomeryPoint {
    /// The identity element of the group: the point at infinity.
    pub fn identity() -> ProjectiveMontgomeryPoint {
        ProjectiveMontgomeryPoint {
            U: FieldElement::ONE,
            W: FieldElement::ZERO,
        }
    }

    /// Convert the point to affine form.
    ///
    /// The point at infinity maps to `u = 0`.
    pub fn to_affine(&self) -> MontgomeryPoint {
        let x = self.U * self.W.invert();
        MontgomeryPoint(x.to_bytes())
    }
}
