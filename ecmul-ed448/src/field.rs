mod element;
mod scalar;

pub use element::FieldElement;
pub use scalar::{Scalar, ScalarBytes, WideScalarBytes, ORDER};

use elliptic_curve::bigint::{
    impl_modulus,
    modular::constant_mod::{Residue, ResidueParams},
    U448,
};

impl_modulus!(FieldModulus, U448, "fffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffffffffffffffffffffffffffffffffffffffffffffffffffff");
pub(crate) type ResidueType = Residue<FieldModulus, { FieldModulus::LIMBS }>;
