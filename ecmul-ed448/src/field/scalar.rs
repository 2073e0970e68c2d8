use core::fmt::{self, Debug, Formatter, LowerHex, UpperHex};
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use ecmul::{Error, Result};
use elliptic_curve::bigint::{
    impl_modulus,
    modular::constant_mod::{Residue, ResidueParams},
    Encoding, Limb, U448,
};
use rand_core::{CryptoRng, RngCore};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

#[cfg(feature = "zeroize")]
use zeroize::DefaultIsZeroes;

impl_modulus!(ScalarModulus, U448, "3fffffffffffffffffffffffffffffffffffffffffffffffffffffff7cca23e9c44edb49aed63690216cc2728dc58f552378c292ab5844f3");
type ResidueType = Residue<ScalarModulus, { ScalarModulus::LIMBS }>;

/// Order of the Ed448 prime-order subgroup,
/// `2^446 - 0x8335dc163bb124b65129c96fde933d8d723a70aadc873d6d54a7bb0d`.
pub const ORDER: U448 = ScalarModulus::MODULUS;

/// `2^448 mod ℓ`
const R448: ResidueType = ResidueType::new(&U448::from_be_hex("000000000000000000000000000000000000000000000000000000020cd77058eec492d944a725bf7a4cf635c8e9c2ab721cf5b5529eec34"));

/// `2^896 mod ℓ`
const R896: ResidueType = ResidueType::new(&U448::from_be_hex("3402a939f823b7292052bcb7e4d070af1a9cc14ba3c47c44ae17cf725ee4d8380d66de2388ea18597af32c4bc1b195d9e3539257049b9b60"));

/// Number of signed radix-16 digits of a scalar.
pub(crate) const RADIX_16_DIGITS: usize = 113;

/// The serialized form of a scalar: 57 bytes, little-endian, last byte zero.
pub type ScalarBytes = [u8; 57];

/// A byte string wide enough to be reduced into a uniformly distributed scalar.
pub type WideScalarBytes = [u8; 114];

/// An integer modulo the Ed448 group order `ℓ`.
#[derive(Clone, Copy, Default)]
pub struct Scalar(ResidueType);

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
    fn eq(&self, other: &Scalar) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Scalar {}

#[cfg(feature = "zeroize")]
impl DefaultIsZeroes for Scalar {}

impl From<u64> for Scalar {
    fn from(a: u64) -> Self {
        Self(ResidueType::new(&U448::from_u64(a)))
    }
}

impl Add<&Scalar> for &Scalar {
    type Output = Scalar;

    fn add(self, rhs: &Scalar) -> Scalar {
        Scalar(self.0.add(&rhs.0))
    }
}

define_binop_variants!(Add, add, LHS = Scalar, RHS = Scalar, Output = Scalar);
define_assign_variants!(AddAssign, add_assign, Add, add, LHS = Scalar, RHS = Scalar);

impl Sub<&Scalar> for &Scalar {
    type Output = Scalar;

    fn sub(self, rhs: &Scalar) -> Scalar {
        Scalar(self.0.sub(&rhs.0))
    }
}

define_binop_variants!(Sub, sub, LHS = Scalar, RHS = Scalar, Output = Scalar);
define_assign_variants!(SubAssign, sub_assign, Sub, sub, LHS = Scalar, RHS = Scalar);

impl Mul<&Scalar> for &Scalar {
    type Output = Scalar;

    fn mul(self, rhs: &Scalar) -> Scalar {
        Scalar(self.0.mul(&rhs.0))
    }
}

define_binop_variants!(Mul, mul, LHS = Scalar, RHS = Scalar, Output = Scalar);
define_assign_variants!(MulAssign, mul_assign, Mul, mul, LHS = Scalar, RHS = Scalar);

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

impl Sum for Scalar {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Scalar::ZERO, |acc, s| acc + s)
    }
}

impl Product for Scalar {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Scalar::ONE, |acc, s| acc * s)
    }
}

impl Scalar {
    /// The additive identity element
    pub const ZERO: Scalar = Scalar(ResidueType::ZERO);
    /// The multiplicative identity element
    pub const ONE: Scalar = Scalar(ResidueType::ONE);

    /// Decode a scalar from its canonical 57-byte little-endian encoding.
    ///
    /// Fails with [`Error::InvalidScalar`] if the input is not 57 bytes long,
    /// the last byte is not zero, or the value is not below `ℓ`.
    pub fn from_canonical_bytes(bytes: &[u8]) -> Result<Self> {
        let bytes: &ScalarBytes = bytes.try_into().map_err(|_| Error::InvalidScalar)?;

        let uint = U448::from_le_slice(&bytes[..56]);
        let (_, borrow) = uint.sbb(&ORDER, Limb::ZERO);
        let in_range = Choice::from((borrow.0 >> (Limb::BITS - 1)) as u8);
        let top_clear = bytes[56].ct_eq(&0);

        Option::from(CtOption::new(
            Self(ResidueType::new(&uint)),
            in_range & top_clear,
        ))
        .ok_or(Error::InvalidScalar)
    }

    /// Reduce a 114-byte little-endian integer modulo `ℓ`.
    ///
    /// The input is split into 448-bit chunks that are folded with the
    /// precomputed powers `2^448` and `2^896` modulo `ℓ`.
    pub fn from_uniform_bytes(wide: &WideScalarBytes) -> Self {
        let lo = ResidueType::new(&U448::from_le_slice(&wide[..56]));
        let mid = ResidueType::new(&U448::from_le_slice(&wide[56..112]));

        let mut top = [0u8; 56];
        top[..2].copy_from_slice(&wide[112..]);
        let top = ResidueType::new(&U448::from_le_slice(&top));

        Self(lo.add(&mid.mul(&R448)).add(&top.mul(&R896)))
    }

    /// Reduce a 57-byte little-endian integer modulo `ℓ`.
    pub fn from_bytes_mod_order(bytes: &ScalarBytes) -> Self {
        let mut wide = [0u8; 114];
        wide[..57].copy_from_slice(bytes);
        Self::from_uniform_bytes(&wide)
    }

    /// Derive a scalar from a 57-byte secret as in RFC 8032 § 5.2.5.
    ///
    /// The two least significant bits are cleared, the last byte is zeroed
    /// and bit 447 is set before reducing modulo `ℓ`. Fails with
    /// [`Error::InvalidScalar`] if the input is not 57 bytes long.
    pub fn from_bytes_with_clamping(bytes: &[u8]) -> Result<Self> {
        let bytes: &ScalarBytes = bytes.try_into().map_err(|_| Error::InvalidScalar)?;
        Ok(Self::clamp_and_reduce(bytes))
    }

    pub(crate) fn clamp_and_reduce(bytes: &ScalarBytes) -> Self {
        let mut clamped = *bytes;
        clamped[0] &= 0xfc;
        clamped[56] = 0;
        clamped[55] |= 0x80;
        let scalar = Self::from_bytes_mod_order(&clamped);

        #[cfg(feature = "zeroize")]
        zeroize::Zeroize::zeroize(&mut clamped);

        scalar
    }

    /// Generate a uniformly random scalar.
    pub fn random(rng: &mut (impl CryptoRng + RngCore)) -> Self {
        let mut wide = [0u8; 114];
        rng.fill_bytes(&mut wide);
        Self::from_uniform_bytes(&wide)
    }

    /// Canonical 57-byte little-endian encoding.
    pub fn to_bytes(&self) -> ScalarBytes {
        let mut bytes = [0u8; 57];
        bytes[..56].copy_from_slice(&self.0.retrieve().to_le_bytes());
        bytes
    }

    /// Is this scalar equal to zero?
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Square this scalar
    pub fn square(&self) -> Self {
        Self(self.0.square())
    }

    /// Returns `self * y + z`.
    pub fn mul_add(&self, y: &Self, z: &Self) -> Self {
        Self(self.0.mul(&y.0).add(&z.0))
    }

    /// Invert this scalar via Fermat's little theorem.
    ///
    /// Returns none for zero.
    pub fn invert(&self) -> CtOption<Self> {
        const INV_EXP: U448 = U448::from_be_hex("3fffffffffffffffffffffffffffffffffffffffffffffffffffffff7cca23e9c44edb49aed63690216cc2728dc58f552378c292ab5844f1");
        CtOption::new(Self(self.0.pow(&INV_EXP)), !self.is_zero())
    }

    /// Signed radix-16 digits `d_i` with `self = sum(d_i * 16^i)`.
    pub(crate) fn to_radix_16(self) -> [i8; RADIX_16_DIGITS] {
        let bytes = self.to_bytes();
        let mut digits = [0i8; RADIX_16_DIGITS];
        ecmul::mul::recode_signed_radix16(&bytes[..56], &mut digits);
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use proptest::prelude::*;

    const L_MINUS_ONE: ScalarBytes = hex!("f24458ab92c27823558fc58d72c26c219036d6ae49db4ec4e923ca7cffffffffffffffffffffffffffffffffffffffffffffffffffffff3f00");
    const L: ScalarBytes = hex!("f34458ab92c27823558fc58d72c26c219036d6ae49db4ec4e923ca7cffffffffffffffffffffffffffffffffffffffffffffffffffffff3f00");

    #[test]
    fn canonical_bounds() {
        let max = Scalar::from_canonical_bytes(&L_MINUS_ONE).unwrap();
        assert_eq!(max, -Scalar::ONE);
        assert_eq!(max.to_bytes(), L_MINUS_ONE);
        assert_eq!(max + Scalar::ONE, Scalar::ZERO);

        assert_eq!(Scalar::from_canonical_bytes(&L), Err(Error::InvalidScalar));
        assert_eq!(
            Scalar::from_canonical_bytes(&[0xff; 57]),
            Err(Error::InvalidScalar)
        );
    }

    #[test]
    fn reserved_byte_must_be_zero() {
        let mut bytes = [0u8; 57];
        bytes[0] = 1;
        assert_eq!(Scalar::from_canonical_bytes(&bytes), Ok(Scalar::ONE));
        bytes[56] = 1;
        assert_eq!(Scalar::from_canonical_bytes(&bytes), Err(Error::InvalidScalar));
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            Scalar::from_canonical_bytes(&[0u8; 56]),
            Err(Error::InvalidScalar)
        );
        assert_eq!(
            Scalar::from_canonical_bytes(&[0u8; 58]),
            Err(Error::InvalidScalar)
        );
        assert_eq!(
            Scalar::from_bytes_with_clamping(&[0u8; 56]),
            Err(Error::InvalidScalar)
        );
    }

    #[test]
    fn clamping() {
        // 2^448 - 4 mod ℓ
        let s = Scalar::from_bytes_with_clamping(&[0xff; 57]).unwrap();
        assert_eq!(
            s.to_bytes(),
            hex!("30ec9e52b5f51c72abc2e9c835f64c7abf25a744d992c4ee5870d70c0200000000000000000000000000000000000000000000000000000000")
        );

        // 2^447 mod ℓ
        let s = Scalar::from_bytes_with_clamping(&[0u8; 57]).unwrap();
        assert_eq!(
            s.to_bytes(),
            hex!("1a764fa9da7a0eb955e174e41a7b26bddf9253a26c4962772cb86b060100000000000000000000000000000000000000000000000000000000")
        );
    }

    #[test]
    fn uniform_reduction() {
        let mut wide = [0u8; 114];
        wide[..57].copy_from_slice(&L);
        assert_eq!(Scalar::from_uniform_bytes(&wide), Scalar::ZERO);

        // 2^896 - 1
        let mut wide = [0xff; 114];
        wide[112..].fill(0);
        assert_eq!(
            Scalar::from_uniform_bytes(&wide).to_bytes(),
            hex!("5f9b9b04579253e3d995b1c14b2cf37a5918ea8823de660d38d8e45e72cf17ae447cc4a34bc19c1aaf70d0e4b7bc522029b723f839a9023400")
        );

        // 2^912 - 1
        assert_eq!(
            Scalar::from_uniform_bytes(&[0xff; 114]).to_bytes(),
            hex!("81dee731a93f88112e1dad8707160f80293ea637fb19e320c5b624bb85c972cf17ae447cc4a34bc19c1aaf70d0e4b7bc522029b723f8392900")
        );
    }

    #[test]
    fn invert() {
        assert!(bool::from(Scalar::ZERO.invert().is_none()));
        let k = Scalar::from(0xdead_beef);
        assert_eq!(k * k.invert().unwrap(), Scalar::ONE);
    }

    #[test]
    fn radix_16_reconstructs() {
        let k = Scalar::from(0x8f);
        let digits = k.to_radix_16();
        assert_eq!(digits[0], -1);
        assert_eq!(digits[1], -7);
        assert_eq!(digits[2], 1);
        assert!(digits[3..].iter().all(|&d| d == 0));

        // The top digit of any reduced scalar stays within the table range.
        let digits = (-Scalar::ONE).to_radix_16();
        assert!(digits.iter().all(|d| (-8..=8).contains(d)));
    }

    proptest! {
        #[test]
        fn field_laws(a in any::<u64>(), b in any::<u64>(), c in any::<u64>()) {
            let (a, b, c) = (Scalar::from(a), Scalar::from(b), Scalar::from(c));
            prop_assert_eq!(a.mul_add(&b, &c), a * b + c);
            prop_assert_eq!(a - b, a + (-b));
            prop_assert_eq!(a.square(), a * a);
            prop_assert_eq!([a, b, c].into_iter().sum::<Scalar>(), a + b + c);
            prop_assert_eq!([a, b, c].into_iter().product::<Scalar>(), a * b * c);
        }

        #[test]
        fn canonical_encoding_is_stable(bytes in proptest::collection::vec(any::<u8>(), 114)) {
            let mut wide = [0u8; 114];
            wide.copy_from_slice(&bytes);
            let k = Scalar::from_uniform_bytes(&wide);
            prop_assert_eq!(Scalar::from_canonical_bytes(&k.to_bytes()).unwrap(), k);
        }
    }
}
