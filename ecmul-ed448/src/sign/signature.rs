use crate::{
    CompressedEdwardsY, EdwardsPoint, Scalar, ScalarBytes, SigningError, PUBLIC_KEY_LENGTH,
    SIGNATURE_LENGTH,
};

#[cfg(feature = "alloc")]
use alloc::{boxed::Box, vec::Vec};

/// Ed448 signature as defined in [RFC8032 § 5.2.5]
///
/// The `R` half is kept compressed so a parsed signature re-encodes
/// byte for byte.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Signature {
    pub(crate) r: CompressedEdwardsY,
    pub(crate) s: ScalarBytes,
}

impl Default for Signature {
    fn default() -> Self {
        Self {
            r: CompressedEdwardsY::default(),
            s: [0u8; 57],
        }
    }
}

#[cfg(feature = "alloc")]
impl TryFrom<Vec<u8>> for Signature {
    type Error = SigningError;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from(value.as_slice())
    }
}

#[cfg(feature = "alloc")]
impl TryFrom<&Vec<u8>> for Signature {
    type Error = SigningError;

    fn try_from(value: &Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from(value.as_slice())
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = SigningError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let bytes: &[u8; SIGNATURE_LENGTH] = value
            .try_into()
            .map_err(|_| SigningError::InvalidSignatureLength)?;
        Self::from_bytes(bytes)
    }
}

#[cfg(feature = "alloc")]
impl TryFrom<Box<[u8]>> for Signature {
    type Error = SigningError;

    fn try_from(value: Box<[u8]>) -> Result<Self, Self::Error> {
        Self::try_from(value.as_ref())
    }
}

impl From<Signature> for [u8; SIGNATURE_LENGTH] {
    fn from(signature: Signature) -> Self {
        signature.to_bytes()
    }
}

impl Signature {
    /// Converts [`Signature`] to a byte array.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        let mut bytes = [0u8; SIGNATURE_LENGTH];
        bytes[..PUBLIC_KEY_LENGTH].copy_from_slice(self.r.as_bytes());
        bytes[PUBLIC_KEY_LENGTH..].copy_from_slice(&self.s);
        bytes
    }

    /// Converts a byte array to a [`Signature`].
    ///
    /// `R` must decode to a point other than the identity and `S` must be a
    /// canonical nonzero scalar.
    pub fn from_bytes(bytes: &[u8; SIGNATURE_LENGTH]) -> Result<Self, SigningError> {
        let r = CompressedEdwardsY::from_slice(&bytes[..PUBLIC_KEY_LENGTH])
            .map_err(|_| SigningError::InvalidSignatureRComponent)?;
        let mut s = [0u8; 57];
        s.copy_from_slice(&bytes[PUBLIC_KEY_LENGTH..]);

        r.decompress_nonidentity()?;
        Self::decode_s(&s)?;

        Ok(Self { r, s })
    }

    /// The `r` value of the signature.
    pub fn r(&self) -> CompressedEdwardsY {
        self.r
    }

    /// The `s` value of the signature.
    pub fn s(&self) -> &ScalarBytes {
        &self.s
    }

    pub(crate) fn decode_s(s: &ScalarBytes) -> Result<Scalar, SigningError> {
        // the scalar fits in 56 bytes; the 57th must be zero
        if s[56] != 0x00 {
            return Err(SigningError::InvalidSignatureSComponent);
        }
        let scalar = Scalar::from_canonical_bytes(s)
            .map_err(|_| SigningError::InvalidSignatureSComponent)?;
        if bool::from(scalar.is_zero()) {
            return Err(SigningError::InvalidSignatureSComponent);
        }
        Ok(scalar)
    }
}

impl CompressedEdwardsY {
    pub(crate) fn decompress_nonidentity(&self) -> Result<EdwardsPoint, SigningError> {
        let point = self
            .decompress()
            .map_err(|_| SigningError::InvalidSignatureRComponent)?;
        if bool::from(point.is_identity()) {
            return Err(SigningError::InvalidSignatureRComponent);
        }
        Ok(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ORDER;
    use elliptic_curve::bigint::Encoding;
    use hex_literal::hex;

    fn sample() -> [u8; SIGNATURE_LENGTH] {
        let mut bytes = [0u8; SIGNATURE_LENGTH];
        bytes[..57].copy_from_slice(CompressedEdwardsY::GENERATOR.as_bytes());
        bytes[57] = 1;
        bytes
    }

    #[test]
    fn round_trip() {
        let bytes = sample();
        let sig = Signature::from_bytes(&bytes).unwrap();
        assert_eq!(sig.to_bytes(), bytes);
        assert_eq!(sig.r(), CompressedEdwardsY::GENERATOR);
        assert_eq!(Signature::try_from(&bytes[..]).unwrap(), sig);
    }

    #[test]
    fn wrong_length() {
        let bytes = sample();
        assert_eq!(
            Signature::try_from(&bytes[..113]).unwrap_err(),
            SigningError::InvalidSignatureLength
        );
    }

    #[test]
    fn rejects_bad_r() {
        let mut bytes = sample();
        bytes[..57].copy_from_slice(CompressedEdwardsY::IDENTITY.as_bytes());
        assert_eq!(
            Signature::from_bytes(&bytes).unwrap_err(),
            SigningError::InvalidSignatureRComponent
        );

        let mut bytes = sample();
        bytes[56] = 0x01;
        assert_eq!(
            Signature::from_bytes(&bytes).unwrap_err(),
            SigningError::InvalidSignatureRComponent
        );
        // on the curve, but with a component of order 4
        let mut bytes = sample();
        bytes[..57].copy_from_slice(&hex!("13b6714c7a5f53101bbec88f2f17cd30f42e37fae363a5474efb4197ed6005df5861ae178a0c2c16ad378b7befed0d0904b7ced35e9f674180"));
        assert_eq!(
            Signature::from_bytes(&bytes).unwrap_err(),
            SigningError::InvalidSignatureRComponent
        );
    }

    #[test]
    fn rejects_bad_s() {
        let mut bytes = sample();
        bytes[113] = 1;
        assert_eq!(
            Signature::from_bytes(&bytes).unwrap_err(),
            SigningError::InvalidSignatureSComponent
        );

        let mut bytes = sample();
        bytes[57..].fill(0);
        assert_eq!(
            Signature::from_bytes(&bytes).unwrap_err(),
            SigningError::InvalidSignatureSComponent
        );

        let mut bytes = sample();
        bytes[57..113].copy_from_slice(&ORDER.to_le_bytes()[..56]);
        assert_eq!(
            Signature::from_bytes(&bytes).unwrap_err(),
            SigningError::InvalidSignatureSComponent
        );
    }
}
