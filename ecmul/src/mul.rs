//! Scalar recoding and fixed-shape windowed multiplication.
//!
//! Scalars enter these routines as signed radix-16 digits `d_i` with
//! `k = sum(d_i * 16^i)`. Every digit but the last lies in `[-8, 8)` and the
//! last one is a final carry in `{0, 1}`, so each digit can be served by a
//! [`LookupTable`] of eight multiples plus a conditional negation.

use crate::{GroupLaw, LookupTable};
use elliptic_curve::subtle::Choice;

/// Recodes a little-endian integer into signed radix-16 digits.
///
/// `digits` must hold exactly `2 * bytes.len() + 1` entries. The result
/// satisfies `k = sum(digits[i] * 16^i)` with `digits[i]` in `[-8, 8)` for all
/// but the last position, which receives the final carry.
///
/// The recoding runs the same instructions for every input value.
///
/// # Panics
///
/// If `digits` has the wrong length.
pub fn recode_signed_radix16(bytes: &[u8], digits: &mut [i8]) {
    assert_eq!(digits.len(), 2 * bytes.len() + 1, "digit buffer size");

    // Step 1: change radix.
    // Convert from radix 256 (bytes) to radix 16 (nibbles)
    for (i, byte) in bytes.iter().enumerate() {
        digits[2 * i] = (byte & 15) as i8;
        digits[2 * i + 1] = ((byte >> 4) & 15) as i8;
    }
    digits[2 * bytes.len()] = 0;

    // Step 2: re-center coefficients from [0,16) to [-8,8)
    for i in 0..(digits.len() - 1) {
        let carry = (digits[i] + 8) >> 4;
        digits[i] -= carry << 4;
        digits[i + 1] += carry;
    }
}

/// Computes `k * point` from the signed radix-16 digits of `k`.
///
/// Starting from the most significant digit, every following digit costs four
/// doublings, one constant-time table selection and one addition. Leading zero
/// digits are processed like any other.
///
/// # Panics
///
/// If `digits` is empty or holds a digit outside `-8..=8`.
pub fn mul_windowed<Point: GroupLaw>(point: &Point, digits: &[i8]) -> Point {
    assert!(!digits.is_empty(), "at least one digit");
    let top = digits.len() - 1;
    let table = LookupTable::new(*point);

    let mut acc = table.select(digits[top]);
    for &digit in digits[..top].iter().rev() {
        acc = acc.double_n(4);
        acc = acc + table.select(digit);
    }

    acc
}

/// Computes `k * point` one bit at a time, most significant bit first.
///
/// Each bit costs one doubling and one addition whose result is kept or
/// discarded with a constant-time select. Used as a slow, independent
/// reference for the windowed routines.
pub fn mul_double_and_add<Point: GroupLaw>(point: &Point, le_bytes: &[u8]) -> Point {
    let mut acc = Point::identity();

    for byte in le_bytes.iter().rev() {
        for bit in (0..8).rev() {
            acc = acc.double();
            let sum = acc + *point;
            let choice = Choice::from((byte >> bit) & 1);
            acc.conditional_assign(&sum, choice);
        }
    }

    acc
}
