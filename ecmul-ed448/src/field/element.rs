use core::fmt::{self, Debug, Display, Formatter, LowerHex, UpperHex};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use elliptic_curve::bigint::{modular::constant_mod::ResidueParams, Encoding, Limb, U448};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

#[cfg(feature = "zeroize")]
use zeroize::DefaultIsZeroes;

use super::{FieldModulus, ResidueType};

/// An element of the Goldilocks field `p = 2^448 - 2^224 - 1`, kept in
/// Montgomery form.
///
/// The canonical encoding is 56 bytes little-endian.
#[derive(Clone, Copy, Default)]
pub struct FieldElement(pub(crate) ResidueType);

impl Display for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0.retrieve())
    }
}

impl Debug for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement({:x})", self.0.retrieve())
    }
}

impl LowerHex for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0.retrieve())
    }
}

impl UpperHex for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}", self.0.retrieve())
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(ResidueType::conditional_select(&a.0, &b.0, choice))
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &FieldElement) -> bool {
        self.ct_eq(other).into()
    }
}
impl Eq for FieldElement {}

#[cfg(feature = "zeroize")]
impl DefaultIsZeroes for FieldElement {}

impl Add<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn add(self, other: &FieldElement) -> FieldElement {
        FieldElement(self.0.add(&other.0))
    }
}

define_binop_variants!(Add, add, LHS = FieldElement, RHS = FieldElement, Output = FieldElement);
define_assign_variants!(AddAssign, add_assign, Add, add, LHS = FieldElement, RHS = FieldElement);

impl Sub<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn sub(self, other: &FieldElement) -> FieldElement {
        FieldElement(self.0.sub(&other.0))
    }
}

define_binop_variants!(Sub, sub, LHS = FieldElement, RHS = FieldElement, Output = FieldElement);
define_assign_variants!(SubAssign, sub_assign, Sub, sub, LHS = FieldElement, RHS = FieldElement);

impl Mul<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn mul(self, other: &FieldElement) -> FieldElement {
        FieldElement(self.0.mul(&other.0))
    }
}

define_binop_variants!(Mul, mul, LHS = FieldElement, RHS = FieldElement, Output = FieldElement);
define_assign_variants!(MulAssign, mul_assign, Mul, mul, LHS = FieldElement, RHS = FieldElement);

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        -*self
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        Self(self.0.neg())
    }
}

impl FieldElement {
    /// Zero element.
    pub const ZERO: Self = Self(ResidueType::ZERO);
    /// Multiplicative identity.
    pub const ONE: Self = Self(ResidueType::ONE);
    /// `-1 mod p`.
    pub const MINUS_ONE: Self = Self::from_be_hex("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffffffffffffffffffffffffffffffffffffffffffffffffffffe");
    /// `d = -39081` of the curve equation `x^2 + y^2 = 1 + d x^2 y^2`.
    pub const EDWARDS_D: Self = Self::from_be_hex("fffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffffffffffffffffffffffffffffffffffffffffffffffff6756");
    /// `(A + 2) / 4` for the Montgomery form `v^2 = u^3 + A u^2 + u` of Curve448.
    pub(crate) const A_PLUS_TWO_OVER_FOUR: Self = Self(ResidueType::new(&U448::from_u64(39082)));

    /// Build a constant from a 112 character big-endian hex string.
    pub(crate) const fn from_be_hex(hex: &str) -> Self {
        Self(ResidueType::new(&U448::from_be_hex(hex)))
    }

    /// Decode a field element from its canonical little-endian encoding.
    ///
    /// Returns none if the value is not below the modulus.
    pub fn from_bytes(bytes: &[u8; 56]) -> CtOption<Self> {
        let uint = U448::from_le_slice(bytes);
        let (_, borrow) = uint.sbb(&FieldModulus::MODULUS, Limb::ZERO);
        let in_range = Choice::from((borrow.0 >> (Limb::BITS - 1)) as u8);
        CtOption::new(Self(ResidueType::new(&uint)), in_range)
    }

    /// Decode a little-endian integer of up to 448 bits, reducing it modulo `p`.
    ///
    /// X448 u-coordinates are accepted in this non-canonical form.
    pub(crate) fn from_bytes_mod_p(bytes: &[u8; 56]) -> Self {
        Self(ResidueType::new(&U448::from_le_slice(bytes)))
    }

    /// Returns the little-endian encoding of the canonical representative.
    pub fn to_bytes(self) -> [u8; 56] {
        let mut bytes = [0u8; 56];
        bytes.copy_from_slice(&self.0.retrieve().to_le_bytes()[..56]);
        bytes
    }

    /// Is the canonical representative odd?
    pub fn is_negative(&self) -> Choice {
        let bytes = self.to_bytes();
        (bytes[0] & 1).into()
    }

    /// Is this element zero?
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Inverts a field element via Fermat's little theorem.
    ///
    /// Zero maps to zero.
    pub fn invert(&self) -> Self {
        const INV_EXP: U448 = U448::from_be_hex("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffffffffffffffffffffffffffffffffffffffffffffffffffffd");
        Self(self.0.pow(&INV_EXP))
    }

    /// Returns `self * self`.
    pub fn square(&self) -> Self {
        Self(self.0.square())
    }

    /// Squares a field element `n` times
    fn square_n(&self, n: u32) -> FieldElement {
        let mut result = self.square();
        for _ in 1..n {
            result = result.square();
        }
        result
    }

    /// Returns `self + self`.
    pub fn double(&self) -> Self {
        Self(self.0.add(&self.0))
    }

    /// Computes `1 / sqrt(self)` with an addition chain for `(p - 3) / 4`.
    ///
    /// The flag is set iff `self` is a nonzero quadratic residue.
    fn inverse_square_root(&self) -> (FieldElement, Choice) {
        let (mut l0, mut l1, mut l2);

        l1 = self.square();
        l2 = l1 * self;
        l1 = l2.square();
        l2 = l1 * self;
        l1 = l2.square_n(3);
        l0 = l2 * l1;
        l1 = l0.square_n(3);
        l0 = l2 * l1;
        l2 = l0.square_n(9);
        l1 = l0 * l2;
        l0 = l1 * l1;
        l2 = l0 * self;
        l0 = l2.square_n(18);
        l2 = l1 * l0;
        l0 = l2.square_n(37);
        l1 = l2 * l0;
        l0 = l1.square_n(37);
        l1 = l2 * l0;
        l0 = l1.square_n(111);
        l2 = l1 * l0;
        l0 = l2.square();
        l1 = l0 * self;
        l0 = l1.square_n(223);
        l1 = l2 * l0;
        l2 = l1.square();
        l0 = l2 * self;

        let is_residue = l0.ct_eq(&FieldElement::ONE);
        (l1, is_residue)
    }

    /// Computes `sqrt(u / v)`.
    ///
    /// The flag is set iff `u / v` is a square, with `u = 0` counting as a
    /// square. `v` must be nonzero. The sign of the returned root is not
    /// normalized.
    pub fn sqrt_ratio(u: &FieldElement, v: &FieldElement) -> (FieldElement, Choice) {
        // u * 1/sqrt(uv) == sqrt(u/v). For u == 0 the inverse square root is
        // zero as wanted, but its residue flag is not set.
        let x = *u * v;
        let (inv_sqrt_x, is_res) = x.inverse_square_root();
        let zero_u = u.ct_eq(&FieldElement::ZERO);
        (inv_sqrt_x * u, zero_u | is_res)
    }
}
