//! Scalars modulo the secp256k1 group order.

use core::fmt::{self, Debug, Formatter, LowerHex, UpperHex};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use ecmul::{Error, Result};
use elliptic_curve::bigint::{
    impl_modulus,
    modular::constant_mod::{Residue, ResidueParams},
    Encoding, Limb, U256,
};
use rand_core::{CryptoRng, RngCore};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

#[cfg(feature = "zeroize")]
use zeroize::DefaultIsZeroes;

impl_modulus!(
    ScalarModulus,
    U256,
    "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141"
);
type ResidueType = Residue<ScalarModulus, { ScalarModulus::LIMBS }>;

/// Order of the secp256k1 group.
pub const ORDER: U256 = ScalarModulus::MODULUS;

/// `2^256 mod n`, used to fold the upper half of a wide input.
const R256: ResidueType = ResidueType::new(&U256::from_be_hex(
    "000000000000000000000000000000014551231950b75fc4402da1732fc9bebf",
));

/// Number of signed radix-16 digits of a scalar.
pub(crate) const RADIX_16_DIGITS: usize = 65;

/// An integer modulo the secp256k1 group order `n`.
///
/// The canonical encoding is 32 bytes little-endian. The JWK `d` parameter
/// uses the big-endian encoding, see [`Scalar::from_be_bytes`].
#[derive(Clone, Copy, Default)]
pub struct Scalar(ResidueType);

impl Scalar {
    /// Zero scalar.
    pub const ZERO: Self = Self(ResidueType::ZERO);

    /// Multiplicative identity.
    pub const ONE: Self = Self(ResidueType::ONE);

    fn from_uint_checked(uint: U256) -> Result<Self> {
        let (_, borrow) = uint.sbb(&ORDER, Limb::ZERO);
        let in_range = Choice::from((borrow.0 >> (Limb::BITS - 1)) as u8);
        Option::from(CtOption::new(Self(ResidueType::new(&uint)), in_range))
            .ok_or(Error::InvalidScalar)
    }

    /// Decode a scalar from its canonical 32-byte little-endian encoding.
    ///
    /// Fails with [`Error::InvalidScalar`] if the input is not 32 bytes long
    /// or encodes a value that is not below the group order.
    pub fn from_canonical_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != 32 {
            return Err(Error::InvalidScalar);
        }
        Self::from_uint_checked(U256::from_le_slice(bytes))
    }

    /// Decode a scalar from a 32-byte big-endian encoding, as used by JWK.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != 32 {
            return Err(Error::InvalidScalar);
        }
        Self::from_uint_checked(U256::from_be_slice(bytes))
    }

    /// Reduce a 64-byte little-endian integer modulo the group order.
    pub fn from_uniform_bytes(wide: &[u8; 64]) -> Self {
        let lo = ResidueType::new(&U256::from_le_slice(&wide[..32]));
        let hi = ResidueType::new(&U256::from_le_slice(&wide[32..]));
        Self(lo.add(&hi.mul(&R256)))
    }

    /// Generate a uniformly random scalar.
    pub fn random(rng: &mut (impl CryptoRng + RngCore)) -> Self {
        let mut wide = [0u8; 64];
        rng.fill_bytes(&mut wide);
        Self::from_uniform_bytes(&wide)
    }

    /// Canonical little-endian encoding.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.retrieve().to_le_bytes()
    }

    /// Big-endian encoding, as used by JWK.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        self.0.retrieve().to_be_bytes()
    }

    /// Is this scalar zero?
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Returns `self * self`.
    pub fn square(&self) -> Self {
        Self(self.0.square())
    }

    /// Returns `self * y + z`.
    pub fn mul_add(&self, y: &Self, z: &Self) -> Self {
        Self(self.0.mul(&y.0).add(&z.0))
    }

    /// Inverts a scalar via Fermat's little theorem.
    ///
    /// Returns none for zero.
    pub fn invert(&self) -> CtOption<Self> {
        const INV_EXP: U256 =
            U256::from_be_hex("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd036413f");
        CtOption::new(Self(self.0.pow(&INV_EXP)), !self.is_zero())
    }

    /// Signed radix-16 digits `d_i` with `self = sum(d_i * 16^i)`.
    ///
    /// All digits but the last are in `[-8, 8)`, the last one is the final
    /// carry.
    pub(crate) fn to_radix_16(self) -> [i8; RADIX_16_DIGITS] {
        let mut digits = [0i8; RADIX_16_DIGITS];
        ecmul::mul::recode_signed_radix16(&self.to_bytes(), &mut digits);
        digits
    }
}

impl From<u64> for Scalar {
    fn from(n: u64) -> Self {
        Self(ResidueType::new(&U256::from_u64(n)))
    }
}

impl Debug for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar({:x})", self.0.retrieve())
    }
}

impl LowerHex for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0.retrieve())
    }
}

impl UpperHex for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}", self.0.retrieve())
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.to_bytes()[..].ct_eq(&other.to_bytes()[..])
    }
}

impl ConditionallySelectable for Scalar {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(ResidueType::conditional_select(&a.0, &b.0, choice))
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Scalar {}

#[cfg(feature = "zeroize")]
impl DefaultIsZeroes for Scalar {}

impl Add<&Scalar> for &Scalar {
    type Output = Scalar;

    fn add(self, other: &Scalar) -> Scalar {
        Scalar(self.0.add(&other.0))
    }
}

impl Add for Scalar {
    type Output = Scalar;

    fn add(self, other: Scalar) -> Scalar {
        &self + &other
    }
}

impl AddAssign for Scalar {
    fn add_assign(&mut self, other: Scalar) {
        *self = *self + other;
    }
}

impl Sub<&Scalar> for &Scalar {
    type Output = Scalar;

    fn sub(self, other: &Scalar) -> Scalar {
        Scalar(self.0.sub(&other.0))
    }
}

impl Sub for Scalar {
    type Output = Scalar;

    fn sub(self, other: Scalar) -> Scalar {
        &self - &other
    }
}

impl SubAssign for Scalar {
    fn sub_assign(&mut self, other: Scalar) {
        *self = *self - other;
    }
}

impl Mul<&Scalar> for &Scalar {
    type Output = Scalar;

    fn mul(self, other: &Scalar) -> Scalar {
        Scalar(self.0.mul(&other.0))
    }
}

impl Mul for Scalar {
    type Output = Scalar;

    fn mul(self, other: Scalar) -> Scalar {
        &self * &other
    }
}

impl MulAssign for Scalar {
    fn mul_assign(&mut self, other: Scalar) {
        *self = *self * other;
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        Scalar(self.0.neg())
    }
}

impl Neg for &Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        -*self
    }
}
