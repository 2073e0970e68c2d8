//! Ed448-Goldilocks, the untwisted Edwards curve `x^2 + y^2 = 1 + d x^2 y^2`
//! with `d = -39081`.

#![allow(non_snake_case)]

mod affine;
mod extended;

pub use affine::AffinePoint;
pub use extended::{CompressedEdwardsY, EdwardsPoint, PointBytes};
