//! secp256k1 keys in JSON Web Key form.
//!
//! A JWK carries the public point as raw big-endian `x` and `y` coordinates
//! and the private scalar as a big-endian `d`, each exactly 32 bytes once the
//! base64url layer has been removed. This module validates those byte strings
//! and converts them into group elements.
//!
//! ```
//! use ecmul_k256::jwk::{check_key_pair, SecretKey};
//! use rand_core::OsRng;
//!
//! let secret = SecretKey::random(&mut OsRng);
//! let public = secret.public_key();
//! let (x, y) = public.to_jwk_coordinates();
//!
//! let parsed = ecmul_k256::jwk::PublicKey::from_jwk_coordinates(&x, &y)?;
//! check_key_pair(&secret, &parsed)?;
//! # Ok::<(), ecmul_k256::Error>(())
//! ```

use crate::{AffinePoint, FieldBytes, ProjectivePoint, Scalar};
use core::fmt::{self, Debug};
use ecmul::{Error, Result, ScalarMul};
use rand_core::{CryptoRng, RngCore};
use subtle::{Choice, ConstantTimeEq};

/// Length of each JWK coordinate and of `d`.
const COORDINATE_SIZE: usize = 32;

fn coordinate(bytes: &[u8]) -> Result<[u8; COORDINATE_SIZE]> {
    bytes.try_into().map_err(|_| Error::Encoding)
}

/// secp256k1 public key.
///
/// Always a finite curve point whose coordinates are both nonzero.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PublicKey {
    point: AffinePoint,
}

impl PublicKey {
    /// Parse the `x` and `y` members of a JWK.
    ///
    /// Fails with [`Error::Encoding`] if a coordinate is not 32 bytes or not
    /// below the field modulus, and with [`Error::InvalidPoint`] if a
    /// coordinate is zero or the point is not on the curve.
    pub fn from_jwk_coordinates(x: &[u8], y: &[u8]) -> Result<Self> {
        let point = AffinePoint::from_coordinates(&coordinate(x)?, &coordinate(y)?)?;
        Self::from_affine(point)
    }

    /// Wrap an affine point, rejecting the identity and points with a zero
    /// coordinate.
    pub fn from_affine(point: AffinePoint) -> Result<Self> {
        let degenerate = point.is_identity() | point.x.is_zero() | point.y.is_zero();
        if bool::from(degenerate | !point.is_on_curve()) {
            return Err(Error::InvalidPoint);
        }
        Ok(Self { point })
    }

    /// Big-endian `x` and `y` members of the JWK.
    pub fn to_jwk_coordinates(&self) -> (FieldBytes, FieldBytes) {
        (self.point.x().into(), self.point.y().into())
    }

    /// The public point in affine coordinates.
    pub fn as_affine(&self) -> &AffinePoint {
        &self.point
    }

    /// The public point in projective coordinates.
    pub fn to_projective(&self) -> ProjectivePoint {
        self.point.into()
    }
}

/// secp256k1 private key: a scalar `d` with `0 < d < n`.
#[derive(Clone)]
pub struct SecretKey {
    scalar: Scalar,
}

impl SecretKey {
    /// Parse the `d` member of a JWK.
    ///
    /// Fails with [`Error::InvalidScalar`] if `d` is not 32 bytes, is zero,
    /// or is not below the group order.
    pub fn from_jwk_d(d: &[u8]) -> Result<Self> {
        Self::from_scalar(Scalar::from_be_bytes(d)?)
    }

    /// Wrap a nonzero scalar.
    pub fn from_scalar(scalar: Scalar) -> Result<Self> {
        if scalar.is_zero().into() {
            return Err(Error::InvalidScalar);
        }
        Ok(Self { scalar })
    }

    /// Generate a random secret key.
    pub fn random(rng: &mut (impl CryptoRng + RngCore)) -> Self {
        loop {
            if let Ok(key) = Self::from_scalar(Scalar::random(&mut *rng)) {
                return key;
            }
        }
    }

    /// Big-endian `d` member of the JWK.
    pub fn to_jwk_d(&self) -> FieldBytes {
        self.scalar.to_be_bytes().into()
    }

    /// The secret scalar.
    pub fn as_scalar(&self) -> &Scalar {
        &self.scalar
    }

    /// Compute `d * G`.
    pub fn public_key(&self) -> PublicKey {
        // d is nonzero and below n, and the group has prime order without
        // points of order 2 or x = 0, so d * G has two nonzero coordinates.
        PublicKey {
            point: ProjectivePoint::scalar_base_mult(&self.scalar).to_affine(),
        }
    }
}

impl ConstantTimeEq for SecretKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.scalar.ct_eq(&other.scalar)
    }
}

impl Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey").finish_non_exhaustive()
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        zeroize::Zeroize::zeroize(&mut self.scalar);
    }
}

impl zeroize::ZeroizeOnDrop for SecretKey {}

/// Checks that `public` equals `secret * G`.
///
/// Fails with [`Error::InvalidPoint`] if the keys do not belong together.
pub fn check_key_pair(secret: &SecretKey, public: &PublicKey) -> Result<()> {
    let expected = ProjectivePoint::scalar_base_mult(&secret.scalar);
    if bool::from(expected.ct_eq(&public.to_projective())) {
        Ok(())
    } else {
        Err(Error::InvalidPoint)
    }
}
