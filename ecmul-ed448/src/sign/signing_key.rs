use crate::sign::expanded::ExpandedSecretKey;
use crate::{
    Context, Scalar, ScalarBytes, Signature, SigningError, VerifyingKey, PREHASH_LENGTH,
};
use core::fmt::{self, Debug, Formatter};
use crypto_signature::Error;
use rand_core::{CryptoRng, RngCore};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(feature = "alloc")]
use alloc::{boxed::Box, vec::Vec};

/// Ed448 secret key as defined in [RFC8032 § 5.2.5]
///
/// The 57 byte seed that is hashed to derive the signing scalar and the
/// nonce prefix.
pub type SecretKey = ScalarBytes;

/// Signing key for Ed448
#[derive(Clone)]
pub struct SigningKey {
    pub(crate) secret: ExpandedSecretKey,
}

impl Debug for SigningKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("verifying_key", &self.secret.public_key)
            .finish_non_exhaustive()
    }
}

impl Zeroize for SigningKey {
    fn zeroize(&mut self) {
        self.secret.zeroize();
    }
}

impl Drop for SigningKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for SigningKey {}

impl ConstantTimeEq for SigningKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.secret.seed[..].ct_eq(&other.secret.seed[..])
    }
}

impl Eq for SigningKey {}

impl PartialEq for SigningKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl From<SecretKey> for SigningKey {
    fn from(secret_scalar: SecretKey) -> Self {
        Self::from(&secret_scalar)
    }
}

impl From<&SecretKey> for SigningKey {
    fn from(secret_scalar: &SecretKey) -> Self {
        Self {
            secret: ExpandedSecretKey::from(secret_scalar),
        }
    }
}

#[cfg(feature = "alloc")]
impl TryFrom<Vec<u8>> for SigningKey {
    type Error = SigningError;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from(value.as_slice())
    }
}

#[cfg(feature = "alloc")]
impl TryFrom<&Vec<u8>> for SigningKey {
    type Error = SigningError;

    fn try_from(value: &Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from(value.as_slice())
    }
}

impl TryFrom<&[u8]> for SigningKey {
    type Error = SigningError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let seed: &SecretKey = value
            .try_into()
            .map_err(|_| SigningError::InvalidSecretKeyLength)?;
        Ok(Self::from(seed))
    }
}

#[cfg(feature = "alloc")]
impl TryFrom<Box<[u8]>> for SigningKey {
    type Error = SigningError;

    fn try_from(value: Box<[u8]>) -> Result<Self, Self::Error> {
        Self::try_from(value.as_ref())
    }
}

impl crypto_signature::Signer<Signature> for SigningKey {
    fn try_sign(&self, msg: &[u8]) -> Result<Signature, Error> {
        Ok(self.sign_raw(msg))
    }
}

impl crypto_signature::hazmat::PrehashSigner<Signature> for SigningKey {
    fn sign_prehash(&self, prehash: &[u8]) -> Result<Signature, Error> {
        let prehash = prehash_array(prehash)?;
        Ok(self.sign_prehashed(&[], prehash)?)
    }
}

impl crypto_signature::Signer<Signature> for Context<'_, '_, SigningKey> {
    fn try_sign(&self, msg: &[u8]) -> Result<Signature, Error> {
        Ok(self.key.sign_ctx(self.value, msg)?)
    }
}

impl crypto_signature::hazmat::PrehashSigner<Signature> for Context<'_, '_, SigningKey> {
    fn sign_prehash(&self, prehash: &[u8]) -> Result<Signature, Error> {
        let prehash = prehash_array(prehash)?;
        Ok(self.key.sign_prehashed(self.value, prehash)?)
    }
}

impl crypto_signature::Verifier<Signature> for SigningKey {
    fn verify(&self, msg: &[u8], signature: &Signature) -> Result<(), Error> {
        Ok(self.secret.public_key.verify_raw(signature, msg)?)
    }
}

impl crypto_signature::Keypair for SigningKey {
    type VerifyingKey = VerifyingKey;

    fn verifying_key(&self) -> VerifyingKey {
        self.secret.public_key
    }
}

pub(crate) fn prehash_array(prehash: &[u8]) -> Result<&[u8; PREHASH_LENGTH], SigningError> {
    prehash
        .try_into()
        .map_err(|_| SigningError::PrehashedMessageLength)
}

impl SigningKey {
    /// Generate a cryptographically random [`SigningKey`].
    pub fn generate(rng: &mut (impl CryptoRng + RngCore)) -> Self {
        let mut secret_scalar = [0u8; 57];
        rng.fill_bytes(&mut secret_scalar);
        let key = Self::from(&secret_scalar);
        secret_scalar.zeroize();
        key
    }

    /// Serialize this [`SigningKey`] as bytes.
    pub fn to_bytes(&self) -> SecretKey {
        self.secret.seed
    }

    /// Serialize this [`SigningKey`] as a byte reference.
    pub fn as_bytes(&self) -> &SecretKey {
        &self.secret.seed
    }

    /// Return the clamped [`Scalar`] for this [`SigningKey`].
    ///
    /// This is the scalar that is actually used for signing.
    /// Be warned, this is secret material that should be handled with care.
    pub fn to_scalar(&self) -> Scalar {
        self.secret.scalar
    }

    /// Get the [`VerifyingKey`] for this [`SigningKey`].
    pub fn verifying_key(&self) -> VerifyingKey {
        self.secret.public_key
    }

    /// Bind a context string to this key for use with [`Signer`].
    ///
    /// [`Signer`]: crypto_signature::Signer
    pub fn with_context<'k, 'v>(&'k self, context: &'v [u8]) -> Context<'k, 'v, Self> {
        Context {
            key: self,
            value: context,
        }
    }

    /// Sign a `message` with this [`SigningKey`] using the Ed448 algorithm
    /// defined in [RFC8032 §5.2](https://datatracker.ietf.org/doc/html/rfc8032#section-5.2).
    ///
    /// Equivalent to `sign_ctx` with an empty context.
    pub fn sign_raw(&self, message: &[u8]) -> Signature {
        self.secret.sign_unchecked(0, &[], message)
    }

    /// Sign a `message` in the given `context` with this [`SigningKey`].
    ///
    /// The context must be at most 255 bytes.
    pub fn sign_ctx(&self, context: &[u8], message: &[u8]) -> Result<Signature, SigningError> {
        self.secret.sign_inner(0, context, message)
    }

    /// Sign a prehashed message using the Ed448ph algorithm.
    ///
    /// `prehashed_message` is the 64 byte SHAKE256 output of the message,
    /// computed by the caller.
    pub fn sign_prehashed(
        &self,
        context: &[u8],
        prehashed_message: &[u8; PREHASH_LENGTH],
    ) -> Result<Signature, SigningError> {
        self.secret.sign_inner(1, context, prehashed_message)
    }
}
