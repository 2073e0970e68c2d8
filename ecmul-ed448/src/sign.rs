//! Ed448 signatures (RFC 8032 §5.2) built on the group layer of this crate.
//!
//! # Example
//! Generate a [`SigningKey`], sign a message and check the [`Signature`]
//! with the matching [`VerifyingKey`].
//!
//! ```
//! use ecmul_ed448::*;
//! use rand_core::OsRng;
//!
//! let signing_key = SigningKey::generate(&mut OsRng);
//! let signature = signing_key.sign_raw(b"Hello, world!");
//! let verifying_key = signing_key.verifying_key();
//!
//! assert!(verifying_key.verify_raw(&signature, b"Hello, world!").is_ok());
//! ```
//!
//! Context strings of up to 255 bytes are supported through `sign_ctx` and
//! `verify_ctx`, or by wrapping a key with `with_context` and using the
//! [`Signer`] and [`Verifier`] traits of the `signature` crate.
//!
//! Ed448ph takes the 64 byte SHAKE256 digest of the message, computed by the
//! caller, through `sign_prehashed` and `verify_prehashed`.
//!
//! [`Signer`]: crypto_signature::Signer
//! [`Verifier`]: crypto_signature::Verifier
mod error;
mod expanded;
mod signature;
mod signing_key;
mod verifying_key;

pub use crypto_signature;
pub use error::*;
pub use signature::*;
pub use signing_key::*;
pub use verifying_key::*;

use crate::{Scalar, WideScalarBytes};
use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake256,
};

/// Length of a secret key in bytes
pub const SECRET_KEY_LENGTH: usize = 57;

/// Length of a public key in bytes
pub const PUBLIC_KEY_LENGTH: usize = 57;

/// Length of a signature in bytes
pub const SIGNATURE_LENGTH: usize = 114;

/// Length of the SHAKE256 digest signed in Ed448ph mode
pub const PREHASH_LENGTH: usize = 64;

/// Longest context string accepted by RFC 8032
pub const MAX_CONTEXT_LENGTH: usize = 255;

/// Constant string "SigEd448".
pub(crate) const HASH_HEAD: [u8; 8] = [0x53, 0x69, 0x67, 0x45, 0x64, 0x34, 0x34, 0x38];

/// A key bound to a context string.
///
/// Created by `with_context` on a [`SigningKey`] or [`VerifyingKey`].
#[derive(Copy, Clone, Debug)]
pub struct Context<'k, 'v, K> {
    pub(crate) key: &'k K,
    pub(crate) value: &'v [u8],
}

impl<K> Context<'_, '_, K> {
    /// The context string.
    pub fn value(&self) -> &[u8] {
        self.value
    }
}

/// `SHAKE256(dom4(phflag, ctx) || parts.., 114)` reduced modulo the group order.
///
/// The caller guarantees `ctx.len() <= 255`.
pub(crate) fn hash_to_scalar(phflag: u8, ctx: &[u8], parts: &[&[u8]]) -> Scalar {
    let mut hasher = Shake256::default()
        .chain(HASH_HEAD)
        .chain([phflag])
        .chain([ctx.len() as u8])
        .chain(ctx);
    for part in parts {
        hasher.update(part);
    }
    let mut reader = hasher.finalize_xof();
    let mut bytes: WideScalarBytes = [0u8; 114];
    reader.read(&mut bytes);
    Scalar::from_uniform_bytes(&bytes)
}

pub(crate) fn check_context(ctx: &[u8]) -> Result<(), SigningError> {
    if ctx.len() > MAX_CONTEXT_LENGTH {
        return Err(SigningError::PrehashedContextLength);
    }
    Ok(())
}
