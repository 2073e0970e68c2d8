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

// Internal macros. Must come first!
#[macro_use]
mod macros;

mod curve;
mod field;
#[cfg(feature = "signing")]
mod sign;

pub use crate::{
    curve::{
        edwards::{AffinePoint, CompressedEdwardsY, EdwardsPoint, PointBytes},
        montgomery::{MontgomeryPoint, ProjectiveMontgomeryPoint},
    },
    field::{FieldElement, Scalar, ScalarBytes, WideScalarBytes, ORDER},
};
#[cfg(feature = "signing")]
pub use crate::sign::*;
pub use ecmul::{self, Error, GroupLaw, Result, ScalarMul};
pub use elliptic_curve;
pub use rand_core;
pub use subtle;

use elliptic_curve::{
    bigint::{Encoding, U448},
    consts::U57,
    FieldBytesEncoding,
};

/// Edwards448 curve.
///
/// The untwisted Edwards form `x² + y² = 1 - 39081·x²·y²` of Curve448 over
/// the Goldilocks prime `2⁴⁴⁸ - 2²²⁴ - 1`, as used by RFC 8032.
///
/// JOSE and COSE use it for `EdDSA` with `crv: "Ed448"`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Ed448;

impl elliptic_curve::Curve for Ed448 {
    /// 57-byte serialized field elements, matching the point encoding.
    type FieldBytesSize = U57;

    /// 448-bit field modulus.
    type Uint = U448;

    /// Order of the prime subgroup.
    const ORDER: U448 = ORDER;
}

impl elliptic_curve::PrimeCurve for Ed448 {}

/// Serialized field element, little-endian with a zero 57th byte.
pub type Ed448FieldBytes = elliptic_curve::FieldBytes<Ed448>;

impl FieldBytesEncoding<Ed448> for U448 {
    fn decode_field_bytes(field_bytes: &Ed448FieldBytes) -> Self {
        U448::from_le_slice(&field_bytes[..56])
    }

    fn encode_field_bytes(&self) -> Ed448FieldBytes {
        let mut data = Ed448FieldBytes::default();
        data[..56].copy_from_slice(&self.to_le_bytes());
        data
    }
}
