use core::fmt::{self, Display, Formatter};

/// Result type with the `ecmul` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised at the decode boundary of points and scalars.
///
/// Group arithmetic on validated values never fails, so none of these are
/// produced by the multiplication routines themselves.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// Input bytes have the wrong length, set reserved bits, or encode a
    /// field element that is not reduced.
    Encoding,
    /// Coordinates are well-formed but do not satisfy the curve equation, or
    /// violate a curve-specific acceptance rule.
    InvalidPoint,
    /// Scalar is not reduced modulo the group order, has the wrong width, or
    /// is not an acceptable private key.
    InvalidScalar,
    /// A point was built from an all-zero coordinate tuple, i.e. it was never
    /// decoded or assigned.
    Uninitialized,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Encoding => write!(f, "malformed point or scalar encoding"),
            Error::InvalidPoint => write!(f, "point is not a valid curve point"),
            Error::InvalidScalar => write!(f, "scalar is out of range"),
            Error::Uninitialized => write!(f, "point value was never initialized"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
