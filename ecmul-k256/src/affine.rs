//! Affine points

use crate::{FieldElement, ProjectivePoint};
use core::ops::Neg;
use ecmul::{Error, Result};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

#[cfg(feature = "alloc")]
use alloc::boxed::Box;

/// SEC1 tag of a compressed point with an even y-coordinate.
const TAG_COMPRESSED_EVEN: u8 = 0x02;
/// SEC1 tag of a compressed point with an odd y-coordinate.
const TAG_COMPRESSED_ODD: u8 = 0x03;
/// SEC1 tag of an uncompressed point.
const TAG_UNCOMPRESSED: u8 = 0x04;

/// secp256k1 curve point expressed in affine coordinates.
#[derive(Clone, Copy, Debug)]
pub struct AffinePoint {
    /// x-coordinate
    pub(crate) x: FieldElement,

    /// y-coordinate
    pub(crate) y: FieldElement,

    /// Is this point the point at infinity? 0 = no, 1 = yes
    ///
    /// This is a proxy for [`Choice`], but uses `u8` instead to permit `const`
    /// constructors for `IDENTITY` and `GENERATOR`.
    pub(crate) infinity: u8,
}

impl AffinePoint {
    /// Additive identity of the group: the point at infinity.
    pub const IDENTITY: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ZERO,
        infinity: 1,
    };

    /// Base point of secp256k1.
    ///
    /// ```text
    /// Gₓ = 79be667e f9dcbbac 55a06295 ce870b07 029bfcdb 2dce28d9 59f2815b 16f81798
    /// Gᵧ = 483ada77 26a3c465 5da4fbfc 0e1108a8 fd17b448 a6855419 9c47d08f fb10d4b8
    /// ```
    pub const GENERATOR: Self = Self {
        x: FieldElement::from_be_hex(
            "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
        ),
        y: FieldElement::from_be_hex(
            "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
        ),
        infinity: 0,
    };

    pub(crate) const fn new(x: FieldElement, y: FieldElement) -> Self {
        Self { x, y, infinity: 0 }
    }

    /// Build a point from big-endian affine coordinates.
    ///
    /// Fails with [`Error::Encoding`] if a coordinate is not a canonical
    /// field element and with [`Error::InvalidPoint`] if `(x, y)` is not on
    /// the curve.
    pub fn from_coordinates(x: &[u8; 32], y: &[u8; 32]) -> Result<Self> {
        let x = Option::<FieldElement>::from(FieldElement::from_bytes(x)).ok_or(Error::Encoding)?;
        let y = Option::<FieldElement>::from(FieldElement::from_bytes(y)).ok_or(Error::Encoding)?;
        let point = Self::new(x, y);

        if point.is_on_curve().into() {
            Ok(point)
        } else {
            Err(Error::InvalidPoint)
        }
    }

    /// Big-endian x-coordinate. Zero for the identity.
    pub fn x(&self) -> [u8; 32] {
        self.x.to_bytes()
    }

    /// Big-endian y-coordinate. Zero for the identity.
    pub fn y(&self) -> [u8; 32] {
        self.y.to_bytes()
    }

    /// Is this point the identity?
    pub fn is_identity(&self) -> Choice {
        Choice::from(self.infinity)
    }

    /// Checks `y^2 = x^3 + 7`. The identity is considered on the curve.
    pub fn is_on_curve(&self) -> Choice {
        let rhs = self.x.square() * self.x + FieldElement::B;
        self.is_identity() | self.y.square().ct_eq(&rhs)
    }

    /// Recover a point from its x-coordinate and the parity of y.
    pub fn decompress(x: &[u8; 32], y_is_odd: Choice) -> CtOption<Self> {
        FieldElement::from_bytes(x).and_then(|x| {
            let alpha = x.square() * x + FieldElement::B;
            alpha.sqrt().map(|beta| {
                let y = FieldElement::conditional_select(&beta, &-beta, beta.is_odd() ^ y_is_odd);
                Self::new(x, y)
            })
        })
    }

    /// Decode a SEC1 point: `00` for the identity, `02`/`03` followed by x, or
    /// `04` followed by x and y.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        match bytes {
            [0x00] => Ok(Self::IDENTITY),
            [tag @ (TAG_COMPRESSED_EVEN | TAG_COMPRESSED_ODD), x @ ..] if x.len() == 32 => {
                let mut xb = [0u8; 32];
                xb.copy_from_slice(x);
                if bool::from(FieldElement::from_bytes(&xb).is_none()) {
                    return Err(Error::Encoding);
                }
                let y_is_odd = Choice::from(tag & 1);
                Option::from(Self::decompress(&xb, y_is_odd)).ok_or(Error::InvalidPoint)
            }
            [TAG_UNCOMPRESSED, xy @ ..] if xy.len() == 64 => {
                let mut x = [0u8; 32];
                let mut y = [0u8; 32];
                x.copy_from_slice(&xy[..32]);
                y.copy_from_slice(&xy[32..]);
                Self::from_coordinates(&x, &y)
            }
            _ => Err(Error::Encoding),
        }
    }

    /// Encode as a SEC1 point, compressed (33 bytes) or uncompressed (65 bytes).
    /// The identity encodes as the single byte `00`.
    #[cfg(feature = "alloc")]
    pub fn to_sec1_bytes(&self, compress: bool) -> Box<[u8]> {
        if self.is_identity().into() {
            return Box::new([0u8]);
        }

        if compress {
            let mut out = [0u8; 33];
            out[0] = TAG_COMPRESSED_EVEN | self.y.is_odd().unwrap_u8();
            out[1..].copy_from_slice(&self.x());
            Box::new(out)
        } else {
            let mut out = [0u8; 65];
            out[0] = TAG_UNCOMPRESSED;
            out[1..33].copy_from_slice(&self.x());
            out[33..].copy_from_slice(&self.y());
            Box::new(out)
        }
    }

    /// Returns the projective representation of this point.
    pub fn to_projective(&self) -> ProjectivePoint {
        ProjectivePoint::from(*self)
    }
}

impl ConditionallySelectable for AffinePoint {
    fn conditional_select(a: &AffinePoint, b: &AffinePoint, choice: Choice) -> AffinePoint {
        AffinePoint {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            infinity: u8::conditional_select(&a.infinity, &b.infinity, choice),
        }
    }
}

impl ConstantTimeEq for AffinePoint {
    fn ct_eq(&self, other: &AffinePoint) -> Choice {
        (self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y))
            & self.infinity.ct_eq(&other.infinity)
    }
}

impl Default for AffinePoint {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl PartialEq for AffinePoint {
    fn eq(&self, other: &AffinePoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for AffinePoint {}

impl Neg for AffinePoint {
    type Output = AffinePoint;

    fn neg(self) -> Self::Output {
        AffinePoint {
            x: self.x,
            y: -self.y,
            infinity: self.infinity,
        }
    }
}
