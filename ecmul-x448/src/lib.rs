#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_qualifications
)]

#[cfg(any(feature = "std", test))]
extern crate std;

pub use ecmul_ed448::{Error, MontgomeryPoint, Result};

use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// The u-coordinate `5` of the RFC 7748 base point.
pub const X448_BASEPOINT_BYTES: [u8; 56] = MontgomeryPoint::GENERATOR.0;

/// A PublicKey is a point on Curve448.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct PublicKey(MontgomeryPoint);

/// A Secret is a clamped scalar for Curve448.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct Secret([u8; 56]);

/// A SharedSecret is a point on Curve448.
/// This point is the result of a Diffie-Hellman key exchange.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct SharedSecret(MontgomeryPoint);

/// Clamps `arr` as RFC 7748 §5 decodes X448 scalars.
impl From<[u8; 56]> for Secret {
    fn from(arr: [u8; 56]) -> Secret {
        let mut secret = Secret(arr);
        secret.clamp();
        secret
    }
}

/// `X448(secret, 5)` through the fixed-base tables.
impl From<&Secret> for PublicKey {
    fn from(secret: &Secret) -> PublicKey {
        PublicKey(MontgomeryPoint::mul_base_clamped(secret.0))
    }
}

impl PublicKey {
    /// Converts a byte slice into a public key.
    ///
    /// Fails with [`Error::Encoding`] unless the slice is 56 bytes, and with
    /// [`Error::InvalidPoint`] if it encodes a low-order point.
    pub fn from_bytes(bytes: &[u8]) -> Result<PublicKey> {
        let public_key = PublicKey::from_bytes_unchecked(bytes)?;
        if bool::from(public_key.0.is_low_order()) {
            return Err(Error::InvalidPoint);
        }
        Ok(public_key)
    }

    /// Converts a byte slice into a public key without the low-order check.
    pub fn from_bytes_unchecked(bytes: &[u8]) -> Result<PublicKey> {
        let arr: [u8; 56] = bytes.try_into().map_err(|_| Error::Encoding)?;
        Ok(PublicKey(MontgomeryPoint(arr)))
    }

    /// Converts a public key into a byte slice
    pub fn as_bytes(&self) -> &[u8; 56] {
        self.0.as_bytes()
    }
}

impl SharedSecret {
    /// Converts a shared secret into a byte slice
    pub fn as_bytes(&self) -> &[u8; 56] {
        self.0.as_bytes()
    }
}

impl Secret {
    /// Generate an X448 `Secret` key.
    pub fn new<T>(csprng: &mut T) -> Self
    where
        T: RngCore + CryptoRng + ?Sized,
    {
        let mut bytes = [0u8; 56];
        csprng.fill_bytes(&mut bytes);
        let secret = Secret::from(bytes);
        bytes.zeroize();
        secret
    }

    fn clamp(&mut self) {
        self.0[0] &= 252;
        self.0[55] |= 128;
    }

    /// Performs a Diffie-Hellman key exchange with an external public key.
    ///
    /// Fails with [`Error::InvalidPoint`] if `public_key` has low order, which
    /// can only happen when it was built with
    /// [`PublicKey::from_bytes_unchecked`].
    pub fn as_diffie_hellman(&self, public_key: &PublicKey) -> Result<SharedSecret> {
        if bool::from(public_key.0.is_low_order()) {
            return Err(Error::InvalidPoint);
        }
        Ok(SharedSecret(public_key.0.mul_clamped(self.0)))
    }

    /// Converts a byte slice into a clamped secret.
    ///
    /// Fails with [`Error::InvalidScalar`] unless the slice is 56 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Secret> {
        let arr: [u8; 56] = bytes.try_into().map_err(|_| Error::InvalidScalar)?;
        Ok(Secret::from(arr))
    }

    /// Converts a secret into a byte array
    pub fn as_bytes(&self) -> &[u8; 56] {
        &self.0
    }
}

/// The X448 function of RFC 7748 §5, refusing low-order u-coordinates.
pub fn x448(scalar_bytes: [u8; 56], point_bytes: [u8; 56]) -> Result<[u8; 56]> {
    let point = PublicKey::from_bytes(&point_bytes)?;
    Ok(point.0.mul_clamped(scalar_bytes).0)
}

/// The X448 function of RFC 7748 §5 with no checks on the point.
pub fn x448_unchecked(scalar_bytes: [u8; 56], point_bytes: [u8; 56]) -> [u8; 56] {
    MontgomeryPoint(point_bytes).mul_clamped(scalar_bytes).0
}

#[cfg(test)]
mod test {
    use super::*;
    use rand_core::OsRng;

    #[test]
    fn test_low_order() {
        for low in [
            MontgomeryPoint::LOW_A,
            MontgomeryPoint::LOW_B,
            MontgomeryPoint::LOW_C,
        ] {
            assert_eq!(PublicKey::from_bytes(&low.0), Err(Error::InvalidPoint));
            assert_eq!(x448([7u8; 56], low.0), Err(Error::InvalidPoint));

            // the unchecked path lets the point in, but the exchange refuses it
            let bad_key = PublicKey::from_bytes_unchecked(&low.0).unwrap();
            let bob_priv = Secret::new(&mut OsRng);
            assert!(matches!(
                bob_priv.as_diffie_hellman(&bad_key),
                Err(Error::InvalidPoint)
            ));
            assert_eq!(x448_unchecked([7u8; 56], low.0), [0u8; 56]);
        }
    }

    #[test]
    fn test_lengths() {
        assert_eq!(PublicKey::from_bytes(&[5u8; 55]), Err(Error::Encoding));
        assert_eq!(PublicKey::from_bytes_unchecked(&[5u8; 57]), Err(Error::Encoding));
        assert!(matches!(Secret::from_bytes(&[1u8; 32]), Err(Error::InvalidScalar)));
    }

    #[test]
    fn test_clamping() {
        let secret = Secret::from([0xffu8; 56]);
        assert_eq!(secret.as_bytes()[0], 0xfc);
        assert_eq!(secret.as_bytes()[55], 0xff);

        let secret = Secret::from([0u8; 56]);
        assert_eq!(secret.as_bytes()[0], 0);
        assert_eq!(secret.as_bytes()[55], 0x80);
    }

    #[test]
    fn test_random_dh() {
        let alice_priv = Secret::new(&mut OsRng);
        let alice_pub = PublicKey::from(&alice_priv);

        let bob_priv = Secret::new(&mut OsRng);
        let bob_pub = PublicKey::from(&bob_priv);

        // clamping keeps honest keys out of the small subgroup
        assert!(!bool::from(alice_pub.0.is_low_order()));
        assert!(!bool::from(bob_pub.0.is_low_order()));

        let shared_alice = alice_priv.as_diffie_hellman(&bob_pub).unwrap();
        let shared_bob = bob_priv.as_diffie_hellman(&alice_pub).unwrap();

        assert_eq!(shared_alice.as_bytes()[..], shared_bob.as_bytes()[..]);
    }

    #[test]
    fn test_public_key_matches_ladder() {
        let secret = Secret::from([0x33u8; 56]);
        let public = PublicKey::from(&secret);
        assert_eq!(
            public.as_bytes(),
            &x448_unchecked(*secret.as_bytes(), X448_BASEPOINT_BYTES)
        );
    }
}
