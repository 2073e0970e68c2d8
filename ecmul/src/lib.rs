#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

#[cfg(not(any(feature = "std", feature = "critical-section")))]
compile_error!("`ecmul` requires either the `std` or the `critical-section` feature");

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod mul;

#[cfg(test)]
mod dev;
mod error;
mod group;
mod lookup_table;

pub use crate::{
    error::{Error, Result},
    group::{GroupLaw, ScalarMul},
    lookup_table::{BasepointTable, LookupTable},
};
pub use elliptic_curve::{self, subtle};
