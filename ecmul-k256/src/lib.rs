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

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

mod affine;
mod field;
mod projective;
mod scalar;

#[cfg(feature = "ecdh")]
pub mod ecdh;
#[cfg(feature = "jwk")]
pub mod jwk;

pub use crate::{
    affine::AffinePoint,
    field::FieldElement,
    projective::ProjectivePoint,
    scalar::{Scalar, ORDER},
};
pub use ecmul::{self, Error, GroupLaw, Result, ScalarMul};
pub use elliptic_curve;

use elliptic_curve::{bigint::U256, consts::U32, FieldBytesEncoding};

/// secp256k1 elliptic curve.
///
/// Specified in Certicom's SECG in SEC 2: Recommended Elliptic Curve Domain Parameters:
///
/// <https://www.secg.org/sec2-v2.pdf>
///
/// The curve's equation is `y² = x³ + 7` over a ~256-bit prime field.
///
/// JOSE uses it for `ES256K` signatures and `crv: "secp256k1"` JWKs.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct Secp256k1;

impl elliptic_curve::Curve for Secp256k1 {
    /// 32-byte serialized field elements.
    type FieldBytesSize = U32;

    /// 256-bit field modulus.
    type Uint = U256;

    /// Curve order.
    const ORDER: U256 = ORDER;
}

impl elliptic_curve::PrimeCurve for Secp256k1 {}

impl FieldBytesEncoding<Secp256k1> for U256 {}

/// Serialized field element, big-endian.
pub type FieldBytes = elliptic_curve::FieldBytes<Secp256k1>;
