use core::fmt::{Display, Formatter, LowerHex, Result as FmtResult, UpperHex};
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::AffinePoint;
use crate::curve::montgomery::MontgomeryPoint;
use crate::field::{FieldElement, Scalar, ORDER};
use ecmul::{
    mul::{mul_double_and_add, mul_windowed},
    BasepointTable, Error, GroupLaw, Result, ScalarMul,
};
use elliptic_curve::bigint::Encoding;
use subtle::{Choice, ConditionallyNegatable, ConditionallySelectable, ConstantTimeEq};

/// Lookup tables of `256^i * G` for `i < 57`, covering all 113 scalar digits.
static GEN_LOOKUP_TABLE: BasepointTable<EdwardsPoint, 57> = BasepointTable::new();

/// The compressed representation of an Ed448 point.
pub type PointBytes = [u8; 57];

/// A compressed point: the 56-byte little-endian y-coordinate followed by a
/// byte whose most significant bit is the sign of x. The other seven bits of
/// that byte are reserved and must be zero.
#[derive(Copy, Clone, Debug)]
pub struct CompressedEdwardsY(pub PointBytes);

#[cfg(feature = "zeroize")]
impl zeroize::Zeroize for CompressedEdwardsY {
    fn zeroize(&mut self) {
        zeroize::Zeroize::zeroize(&mut self.0)
    }
}

impl Display for CompressedEdwardsY {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for b in &self.0[..] {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl LowerHex for CompressedEdwardsY {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for b in &self.0[..] {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl UpperHex for CompressedEdwardsY {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for b in &self.0[..] {
            write!(f, "{:02X}", b)?;
        }
        Ok(())
    }
}

impl Default for CompressedEdwardsY {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ConstantTimeEq for CompressedEdwardsY {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl PartialEq for CompressedEdwardsY {
    fn eq(&self, other: &CompressedEdwardsY) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for CompressedEdwardsY {}

impl AsRef<[u8]> for CompressedEdwardsY {
    fn as_ref(&self) -> &[u8] {
        &self.0[..]
    }
}

impl TryFrom<&[u8]> for CompressedEdwardsY {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        Self::from_slice(value)
    }
}

impl From<CompressedEdwardsY> for PointBytes {
    fn from(value: CompressedEdwardsY) -> Self {
        value.0
    }
}

impl CompressedEdwardsY {
    /// The compressed generator point
    pub const GENERATOR: Self = Self([
        20, 250, 48, 242, 91, 121, 8, 152, 173, 200, 215, 78, 44, 19, 189, 253, 196, 57, 124, 230,
        28, 255, 211, 58, 215, 194, 160, 5, 30, 156, 120, 135, 64, 152, 163, 108, 115, 115, 234,
        75, 98, 199, 201, 86, 55, 32, 118, 136, 36, 188, 182, 110, 113, 70, 63, 105, 0,
    ]);
    /// The compressed identity point, `y = 1` with a clear sign bit
    pub const IDENTITY: Self = Self([
        1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ]);

    /// Copy a 57-byte slice.
    ///
    /// Fails with [`Error::Encoding`] on any other length. No point
    /// validation happens here.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        PointBytes::try_from(bytes)
            .map(Self)
            .map_err(|_| Error::Encoding)
    }

    /// Decompress to an [`EdwardsPoint`] in the prime-order subgroup.
    ///
    /// # Errors
    ///
    /// - [`Error::Encoding`] if a reserved bit is set, the y-coordinate is
    ///   not below `p`, or x would be zero while the sign bit is set.
    /// - [`Error::InvalidPoint`] if no x satisfies the curve equation, or if
    ///   the point has a nonzero torsion component.
    pub fn decompress(&self) -> Result<EdwardsPoint> {
        let point = self.decompress_unchecked()?;
        if bool::from(point.is_torsion_free()) {
            Ok(point)
        } else {
            Err(Error::InvalidPoint)
        }
    }

    /// Decompress following RFC 8032 § 5.2.3 alone.
    ///
    /// Points with a small-order component are accepted. Scalar
    /// multiplication reduces scalars modulo `ℓ`, so it is not a group
    /// homomorphism on such points.
    pub fn decompress_unchecked(&self) -> Result<EdwardsPoint> {
        let sign = self.0[56];
        if sign & 0x7f != 0 {
            return Err(Error::Encoding);
        }

        let mut y_bytes = [0u8; 56];
        y_bytes.copy_from_slice(&self.0[..56]);
        let y = Option::<FieldElement>::from(FieldElement::from_bytes(&y_bytes))
            .ok_or(Error::Encoding)?;

        // Recover x using y
        let yy = y.square();
        let dyy = FieldElement::EDWARDS_D * yy;
        let numerator = FieldElement::ONE - yy;
        let denominator = FieldElement::ONE - dyy;

        let (mut x, is_square) = FieldElement::sqrt_ratio(&numerator, &denominator);
        if !bool::from(is_square) {
            return Err(Error::InvalidPoint);
        }

        let sign_bit = Choice::from(sign >> 7);
        if bool::from(x.is_zero() & sign_bit) {
            return Err(Error::Encoding);
        }

        // Compute correct sign of x
        let flip = sign_bit ^ x.is_negative();
        x.conditional_negate(flip);

        Ok(AffinePoint { x, y }.to_edwards())
    }

    /// View this `CompressedEdwardsY` as an array of bytes.
    pub const fn as_bytes(&self) -> &PointBytes {
        &self.0
    }

    /// Copy this `CompressedEdwardsY` to an array of bytes.
    pub const fn to_bytes(&self) -> PointBytes {
        self.0
    }
}

/// A point on Ed448 in extended homogeneous coordinates.
///
/// `(X : Y : Z : T)` stands for the affine point `(X/Z, Y/Z)` with
/// `T = XY/Z`. The identity is `(0 : 1 : 1 : 0)`.
#[derive(Copy, Clone, Debug)]
pub struct EdwardsPoint {
    pub(crate) X: FieldElement,
    pub(crate) Y: FieldElement,
    pub(crate) Z: FieldElement,
    pub(crate) T: FieldElement,
}

impl Default for EdwardsPoint {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Display for EdwardsPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{{ X: {}, Y: {}, Z: {}, T: {} }}",
            self.X, self.Y, self.Z, self.T
        )
    }
}

impl LowerHex for EdwardsPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{{ X: {:x}, Y: {:x}, Z: {:x}, T: {:x} }}",
            self.X, self.Y, self.Z, self.T
        )
    }
}

impl UpperHex for EdwardsPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{{ X: {:X}, Y: {:X}, Z: {:X}, T: {:X} }}",
            self.X, self.Y, self.Z, self.T
        )
    }
}

impl ConditionallySelectable for EdwardsPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        EdwardsPoint {
            X: FieldElement::conditional_select(&a.X, &b.X, choice),
            Y: FieldElement::conditional_select(&a.Y, &b.Y, choice),
            Z: FieldElement::conditional_select(&a.Z, &b.Z, choice),
            T: FieldElement::conditional_select(&a.T, &b.T, choice),
        }
    }
}

impl ConstantTimeEq for EdwardsPoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        let XZ = self.X * other.Z;
        let ZX = self.Z * other.X;

        let YZ = self.Y * other.Z;
        let ZY = self.Z * other.Y;

        (XZ.ct_eq(&ZX)) & (YZ.ct_eq(&ZY))
    }
}

impl PartialEq for EdwardsPoint {
    fn eq(&self, other: &EdwardsPoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for EdwardsPoint {}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for EdwardsPoint {}

impl GroupLaw for EdwardsPoint {
    fn identity() -> Self {
        Self::IDENTITY
    }

    fn generator() -> Self {
        Self::GENERATOR
    }

    fn double(&self) -> Self {
        EdwardsPoint::double(self)
    }
}

impl ScalarMul for EdwardsPoint {
    type Scalar = Scalar;

    fn scalar_mult(k: &Scalar, point: &Self) -> Self {
        mul_windowed(point, &k.to_radix_16())
    }

    fn scalar_base_mult(k: &Scalar) -> Self {
        GEN_LOOKUP_TABLE.mul(&k.to_radix_16())
    }
}

impl From<AffinePoint> for EdwardsPoint {
    fn from(value: AffinePoint) -> Self {
        value.to_edwards()
    }
}

impl From<EdwardsPoint> for AffinePoint {
    fn from(value: EdwardsPoint) -> Self {
        value.to_affine()
    }
}

impl TryFrom<&[u8]> for EdwardsPoint {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        Self::from_bytes(value)
    }
}

impl From<EdwardsPoint> for PointBytes {
    fn from(value: EdwardsPoint) -> Self {
        value.to_bytes()
    }
}

impl EdwardsPoint {
    /// Base point of RFC 8032, generating the subgroup of order `ℓ`.
    pub const GENERATOR: Self = Self {
        X: FieldElement::from_be_hex("4f1970c66bed0ded221d15a622bf36da9e146570470f1767ea6de324a3d3a46412ae1af72ab66511433b80e18b00938e2626a82bc70cc05e"),
        Y: FieldElement::from_be_hex("693f46716eb6bc248876203756c9c7624bea73736ca3984087789c1e05a0c2d73ad3ff1ce67c39c4fdbd132c4ed7c8ad9808795bf230fa14"),
        Z: FieldElement::ONE,
        T: FieldElement::from_be_hex("c75eb58aee221c6ccec39d2d508d91c9c5056a183f8451d260d71667e2356d58f179de90b5b27da1f78fa07d85662d1deb06624e82af95f3"),
    };
    /// Identity point
    pub const IDENTITY: Self = Self {
        X: FieldElement::ZERO,
        Y: FieldElement::ONE,
        Z: FieldElement::ONE,
        T: FieldElement::ZERO,
    };

    /// Build a point from raw extended coordinates.
    ///
    /// Fails with [`Error::Uninitialized`] for the all-zero tuple and with
    /// [`Error::InvalidPoint`] if the coordinates do not describe a curve
    /// point.
    pub fn from_extended_coordinates(
        X: FieldElement,
        Y: FieldElement,
        Z: FieldElement,
        T: FieldElement,
    ) -> Result<Self> {
        if bool::from(X.is_zero() & Y.is_zero() & Z.is_zero() & T.is_zero()) {
            return Err(Error::Uninitialized);
        }

        let point = Self { X, Y, Z, T };
        if point.is_on_curve().into() {
            Ok(point)
        } else {
            Err(Error::InvalidPoint)
        }
    }

    /// Decode a 57-byte compressed point in the prime-order subgroup.
    ///
    /// Fails with [`Error::Encoding`] on any other length; see
    /// [`CompressedEdwardsY::decompress`] for the remaining rules.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        CompressedEdwardsY::from_slice(bytes)?.decompress()
    }

    /// The 57-byte compressed encoding.
    pub fn to_bytes(&self) -> PointBytes {
        self.compress().0
    }

    /// Convert this point to [`MontgomeryPoint`]
    pub fn to_montgomery(&self) -> MontgomeryPoint {
        // u = y^2 * [(1-dy^2)/(1-y^2)]

        let affine = self.to_affine();

        let yy = affine.y.square();
        let dyy = FieldElement::EDWARDS_D * yy;

        let u = yy * (FieldElement::ONE - dyy) * (FieldElement::ONE - yy).invert();

        MontgomeryPoint(u.to_bytes())
    }

    /// Standard compression; store Y and sign of X
    pub fn compress(&self) -> CompressedEdwardsY {
        self.to_affine().compress()
    }

    /// Add two points
    // https://iacr.org/archive/asiacrypt2008/53500329/53500329.pdf (3.1)
    // These formulas are unified and, with d a non-square, complete.
    fn add(&self, other: &EdwardsPoint) -> Self {
        let aXX = self.X * other.X; // aX1X2
        let dTT = FieldElement::EDWARDS_D * self.T * other.T; // dT1T2
        let ZZ = self.Z * other.Z; // Z1Z2
        let YY = self.Y * other.Y;
        let XY = (self.X * other.Y) + (self.Y * other.X);

        EdwardsPoint {
            X: XY * (ZZ - dTT),
            Y: (YY - aXX) * (ZZ + dTT),
            Z: (ZZ - dTT) * (ZZ + dTT),
            T: (YY - aXX) * XY,
        }
    }

    /// Double this point
    // dbl-2008-hwcd with a = 1
    pub fn double(&self) -> Self {
        let A = self.X.square();
        let B = self.Y.square();
        let C = self.Z.square().double();
        let E = (self.X + self.Y).square() - A - B;
        let G = A + B;
        let F = G - C;
        let H = A - B;

        EdwardsPoint {
            X: E * F,
            Y: G * H,
            Z: F * G,
            T: E * H,
        }
    }

    /// Returns `-self`.
    pub fn negate(&self) -> Self {
        EdwardsPoint {
            X: -self.X,
            Y: self.Y,
            Z: self.Z,
            T: -self.T,
        }
    }

    /// Is this point the identity?
    pub fn is_identity(&self) -> Choice {
        self.ct_eq(&Self::IDENTITY)
    }

    /// Check if this point is on the curve
    pub fn is_on_curve(&self) -> Choice {
        let XY = self.X * self.Y;
        let ZT = self.Z * self.T;

        // Y^2 + X^2 == Z^2 + T^2 * D

        let YY = self.Y.square();
        let XX = self.X.square();
        let ZZ = self.Z.square();
        let TT = self.T.square();
        let lhs = YY + XX;
        let rhs = ZZ + TT * FieldElement::EDWARDS_D;

        XY.ct_eq(&ZT) & lhs.ct_eq(&rhs)
    }

    /// Convert this point to an [`AffinePoint`].
    ///
    /// Costs one field inversion.
    pub fn to_affine(&self) -> AffinePoint {
        let INV_Z = self.Z.invert();

        let x = self.X * INV_Z;
        let y = self.Y * INV_Z;

        AffinePoint { x, y }
    }

    /// Multiply by the cofactor 4.
    pub fn mul_by_cofactor(&self) -> Self {
        self.double().double()
    }

    /// Does this point lie in the subgroup of order `ℓ`?
    ///
    /// Runs a plain double-and-add by the group order, so it costs about
    /// three times a windowed scalar multiplication.
    pub fn is_torsion_free(&self) -> Choice {
        mul_double_and_add(self, &ORDER.to_le_bytes()).is_identity()
    }
}

impl Add<&EdwardsPoint> for &EdwardsPoint {
    type Output = EdwardsPoint;

    fn add(self, other: &EdwardsPoint) -> EdwardsPoint {
        EdwardsPoint::add(self, other)
    }
}

define_binop_variants!(Add, add, LHS = EdwardsPoint, RHS = EdwardsPoint, Output = EdwardsPoint);
define_assign_variants!(AddAssign, add_assign, Add, add, LHS = EdwardsPoint, RHS = EdwardsPoint);

impl Sub<&EdwardsPoint> for &EdwardsPoint {
    type Output = EdwardsPoint;

    fn sub(self, other: &EdwardsPoint) -> EdwardsPoint {
        EdwardsPoint::add(self, &other.negate())
    }
}

define_binop_variants!(Sub, sub, LHS = EdwardsPoint, RHS = EdwardsPoint, Output = EdwardsPoint);
define_assign_variants!(SubAssign, sub_assign, Sub, sub, LHS = EdwardsPoint, RHS = EdwardsPoint);

impl Mul<&Scalar> for &EdwardsPoint {
    type Output = EdwardsPoint;

    fn mul(self, k: &Scalar) -> EdwardsPoint {
        EdwardsPoint::scalar_mult(k, self)
    }
}

define_binop_variants!(Mul, mul, LHS = EdwardsPoint, RHS = Scalar, Output = EdwardsPoint);
define_assign_variants!(MulAssign, mul_assign, Mul, mul, LHS = EdwardsPoint, RHS = Scalar);

impl Mul<&EdwardsPoint> for &Scalar {
    type Output = EdwardsPoint;

    fn mul(self, point: &EdwardsPoint) -> EdwardsPoint {
        EdwardsPoint::scalar_mult(self, point)
    }
}

define_binop_variants!(Mul, mul, LHS = Scalar, RHS = EdwardsPoint, Output = EdwardsPoint);

impl Neg for &EdwardsPoint {
    type Output = EdwardsPoint;

    fn neg(self) -> EdwardsPoint {
        self.negate()
    }
}

impl Neg for EdwardsPoint {
    type Output = EdwardsPoint;

    fn neg(self) -> EdwardsPoint {
        self.negate()
    }
}

impl Sum for EdwardsPoint {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(EdwardsPoint::IDENTITY, |acc, p| acc + p)
    }
}

impl<'a> Sum<&'a EdwardsPoint> for EdwardsPoint {
    fn sum<I: Iterator<Item = &'a EdwardsPoint>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
