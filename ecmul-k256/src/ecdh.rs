//! Elliptic Curve Diffie-Hellman support.
//!
//! This is the raw `Z` value of ECDH-ES: the x-coordinate of `d * Q`. Key
//! derivation from it (Concat KDF) belongs to the JWE layer.
//!
//! ```
//! use ecmul_k256::jwk::SecretKey;
//! use rand_core::OsRng;
//!
//! // Alice
//! let alice_secret = SecretKey::random(&mut OsRng);
//! let alice_public = alice_secret.public_key();
//!
//! // Bob
//! let bob_secret = SecretKey::random(&mut OsRng);
//! let bob_public = bob_secret.public_key();
//!
//! let alice_shared = alice_secret.diffie_hellman(&bob_public);
//! let bob_shared = bob_secret.diffie_hellman(&alice_public);
//!
//! assert_eq!(alice_shared.raw_secret_bytes(), bob_shared.raw_secret_bytes());
//! ```

use crate::{
    jwk::{PublicKey, SecretKey},
    FieldBytes, ProjectivePoint,
};
use ecmul::ScalarMul;

/// Shared secret value computed via ECDH key agreement.
pub struct SharedSecret {
    secret_bytes: FieldBytes,
}

impl SharedSecret {
    /// Big-endian x-coordinate of the shared point.
    pub fn raw_secret_bytes(&self) -> &FieldBytes {
        &self.secret_bytes
    }
}

impl Drop for SharedSecret {
    fn drop(&mut self) {
        zeroize::Zeroize::zeroize(self.secret_bytes.as_mut_slice());
    }
}

impl zeroize::ZeroizeOnDrop for SharedSecret {}

impl SecretKey {
    /// Compute the ECDH shared secret with `public`.
    ///
    /// The result is never the identity because `public` is a nonzero point
    /// of prime order and the secret scalar is nonzero.
    pub fn diffie_hellman(&self, public: &PublicKey) -> SharedSecret {
        let shared = ProjectivePoint::scalar_mult(self.as_scalar(), &public.to_projective());
        SharedSecret {
            secret_bytes: shared.to_affine().x().into(),
        }
    }
}
