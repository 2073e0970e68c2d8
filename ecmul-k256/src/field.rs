//! Field arithmetic modulo p = 2^256 - 2^32 - 977

use core::fmt::{self, Debug, Display, Formatter, LowerHex, UpperHex};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use elliptic_curve::bigint::{
    impl_modulus,
    modular::constant_mod::{Residue, ResidueParams},
    Encoding, Limb, U256,
};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

#[cfg(feature = "zeroize")]
use zeroize::DefaultIsZeroes;

impl_modulus!(
    FieldModulus,
    U256,
    "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f"
);
type ResidueType = Residue<FieldModulus, { FieldModulus::LIMBS }>;

/// An element of the secp256k1 base field, kept in Montgomery form.
///
/// The canonical encoding is 32 bytes big-endian, as in SEC1 and JWK.
#[derive(Clone, Copy, Default)]
pub struct FieldElement(ResidueType);

impl FieldElement {
    /// Zero element.
    pub const ZERO: Self = Self(ResidueType::ZERO);

    /// Multiplicative identity.
    pub const ONE: Self = Self(ResidueType::ONE);

    /// `b` of the curve equation `y^2 = x^3 + 7`.
    pub(crate) const B: Self = Self::from_be_hex(
        "0000000000000000000000000000000000000000000000000000000000000007",
    );

    /// `3 * b`, as used by the complete projective formulas.
    pub(crate) const B3: Self = Self::from_be_hex(
        "0000000000000000000000000000000000000000000000000000000000000015",
    );

    /// Build a constant from a 64 character big-endian hex string.
    pub(crate) const fn from_be_hex(hex: &str) -> Self {
        Self(ResidueType::new(&U256::from_be_hex(hex)))
    }

    /// Decode a field element from its big-endian encoding.
    ///
    /// Returns none if the value is not below the modulus.
    pub fn from_bytes(bytes: &[u8; 32]) -> CtOption<Self> {
        let uint = U256::from_be_slice(bytes);
        let (_, borrow) = uint.sbb(&FieldModulus::MODULUS, Limb::ZERO);
        let in_range = Choice::from((borrow.0 >> (Limb::BITS - 1)) as u8);
        CtOption::new(Self(ResidueType::new(&uint)), in_range)
    }

    /// Returns the big-endian encoding of the canonical representative.
    pub fn to_bytes(self) -> [u8; 32] {
        self.0.retrieve().to_be_bytes()
    }

    /// Is this element zero?
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Is the canonical representative odd?
    pub fn is_odd(&self) -> Choice {
        (self.to_bytes()[31] & 1).into()
    }

    /// Returns `self + self`.
    pub fn double(&self) -> Self {
        Self(self.0.add(&self.0))
    }

    /// Returns `self * self`.
    pub fn square(&self) -> Self {
        Self(self.0.square())
    }

    /// Inverts a field element via Fermat's little theorem.
    ///
    /// Returns none for zero.
    pub fn invert(&self) -> CtOption<Self> {
        const INV_EXP: U256 =
            U256::from_be_hex("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2d");
        CtOption::new(Self(self.0.pow(&INV_EXP)), !self.is_zero())
    }

    /// Square root, using `p = 3 mod 4`.
    ///
    /// Returns none if `self` is not a quadratic residue.
    pub fn sqrt(&self) -> CtOption<Self> {
        const SQRT_EXP: U256 =
            U256::from_be_hex("3fffffffffffffffffffffffffffffffffffffffffffffffffffffffbfffff0c");
        let root = Self(self.0.pow(&SQRT_EXP));
        CtOption::new(root, root.square().ct_eq(self))
    }
}

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
    fn eq(&self, other: &Self) -> bool {
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

impl Add for FieldElement {
    type Output = FieldElement;

    fn add(self, other: FieldElement) -> FieldElement {
        &self + &other
    }
}

impl AddAssign for FieldElement {
    fn add_assign(&mut self, other: FieldElement) {
        *self = *self + other;
    }
}

impl Sub<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn sub(self, other: &FieldElement) -> FieldElement {
        FieldElement(self.0.sub(&other.0))
    }
}

impl Sub for FieldElement {
    type Output = FieldElement;

    fn sub(self, other: FieldElement) -> FieldElement {
        &self - &other
    }
}

impl SubAssign for FieldElement {
    fn sub_assign(&mut self, other: FieldElement) {
        *self = *self - other;
    }
}

impl Mul<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn mul(self, other: &FieldElement) -> FieldElement {
        FieldElement(self.0.mul(&other.0))
    }
}

impl Mul for FieldElement {
    type Output = FieldElement;

    fn mul(self, other: FieldElement) -> FieldElement {
        &self * &other
    }
}

impl MulAssign for FieldElement {
    fn mul_assign(&mut self, other: FieldElement) {
        *self = *self * other;
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        Self(self.0.neg())
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        -*self
    }
}
