//! Instrumented toy group used by the unit tests.
//!
//! `Zq` is the additive group of integers modulo the Mersenne prime
//! `2^61 - 1`, generated by `1`. Scalar multiplication is plain modular
//! multiplication, which gives an independent reference for the generic
//! algorithms. Every group operation bumps a thread-local counter.

use crate::{mul, GroupLaw};
use core::{
    cell::Cell,
    ops::{Add, Neg},
};
use elliptic_curve::subtle::{Choice, ConditionallySelectable};

const Q: u64 = (1 << 61) - 1;

/// Number of operations performed on the current thread since the last reset.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Counters {
    pub(crate) adds: usize,
    pub(crate) doubles: usize,
    pub(crate) negations: usize,
    pub(crate) selects: usize,
}

std::thread_local! {
    static COUNTERS: Cell<Counters> = Cell::new(Counters::default());
}

fn bump(f: impl FnOnce(&mut Counters)) {
    COUNTERS.with(|c| {
        let mut counters = c.get();
        f(&mut counters);
        c.set(counters);
    });
}

pub(crate) fn reset_counters() {
    COUNTERS.with(|c| c.set(Counters::default()));
}

pub(crate) fn counters() -> Counters {
    COUNTERS.with(|c| c.get())
}

/// Signed radix-16 digits of a 64-bit scalar.
pub(crate) fn digits(k: u64) -> [i8; 17] {
    let mut digits = [0i8; 17];
    mul::recode_signed_radix16(&k.to_le_bytes(), &mut digits);
    digits
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Zq(u64);

impl Zq {
    pub(crate) fn new(value: u64) -> Self {
        Self(value % Q)
    }

    pub(crate) fn reference_mul(k: u64, p: Zq) -> Zq {
        Zq(((k as u128 * p.0 as u128) % Q as u128) as u64)
    }
}

impl ConditionallySelectable for Zq {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        bump(|c| c.selects += 1);
        Zq(u64::conditional_select(&a.0, &b.0, choice))
    }
}

impl Add for Zq {
    type Output = Zq;

    fn add(self, rhs: Zq) -> Zq {
        bump(|c| c.adds += 1);
        Zq((self.0 + rhs.0) % Q)
    }
}

impl Neg for Zq {
    type Output = Zq;

    fn neg(self) -> Zq {
        bump(|c| c.negations += 1);
        Zq((Q - self.0) % Q)
    }
}

impl GroupLaw for Zq {
    fn identity() -> Self {
        Zq(0)
    }

    fn generator() -> Self {
        Zq(1)
    }

    fn double(&self) -> Self {
        bump(|c| c.doubles += 1);
        Zq((self.0 << 1) % Q)
    }
}
