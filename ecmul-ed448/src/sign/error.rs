use core::fmt::{self, Display, Formatter};

#[cfg(feature = "std")]
use std::error::Error;

/// Signing errors
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SigningError {
    /// Context string is longer than 255 bytes
    PrehashedContextLength,
    /// Prehashed message is not 64 bytes
    PrehashedMessageLength,
    /// Secret key length is invalid
    InvalidSecretKeyLength,
    /// Public key bytes are invalid
    InvalidPublicKeyBytes,
    /// Signature S component is invalid
    InvalidSignatureSComponent,
    /// Signature R component is invalid
    InvalidSignatureRComponent,
    /// Signature length is invalid
    InvalidSignatureLength,
    /// A group element failed to decode
    Group(ecmul::Error),
    /// Signature verification failed
    Verify,
}

impl Display for SigningError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SigningError::PrehashedContextLength => write!(f, "context length is invalid"),
            SigningError::PrehashedMessageLength => {
                write!(f, "prehashed message length is invalid")
            }
            SigningError::InvalidSecretKeyLength => write!(f, "secret key length is invalid"),
            SigningError::InvalidPublicKeyBytes => write!(f, "public key bytes are invalid"),
            SigningError::InvalidSignatureSComponent => {
                write!(f, "signature S component is invalid")
            }
            SigningError::InvalidSignatureRComponent => {
                write!(f, "signature R component is invalid")
            }
            SigningError::InvalidSignatureLength => write!(f, "signature length is invalid"),
            SigningError::Group(err) => write!(f, "group element is invalid: {}", err),
            SigningError::Verify => write!(f, "signature verification failed"),
        }
    }
}

#[cfg(feature = "std")]
impl Error for SigningError {}

impl From<ecmul::Error> for SigningError {
    fn from(err: ecmul::Error) -> Self {
        SigningError::Group(err)
    }
}

impl From<SigningError> for crypto_signature::Error {
    #[cfg(feature = "std")]
    fn from(err: SigningError) -> Self {
        crypto_signature::Error::from_source(err)
    }

    #[cfg(not(feature = "std"))]
    fn from(_err: SigningError) -> Self {
        crypto_signature::Error::new()
    }
}
