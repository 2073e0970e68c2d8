use crate::sign::{check_context, hash_to_scalar};
use crate::{
    EdwardsPoint, Scalar, ScalarBytes, ScalarMul, SecretKey, Signature, SigningError,
    VerifyingKey, WideScalarBytes, SECRET_KEY_LENGTH,
};
use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake256,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

#[derive(Clone)]
pub(crate) struct ExpandedSecretKey {
    pub(crate) seed: SecretKey,
    pub(crate) scalar: Scalar,
    pub(crate) public_key: VerifyingKey,
    pub(crate) hash_prefix: ScalarBytes,
}

impl Zeroize for ExpandedSecretKey {
    fn zeroize(&mut self) {
        self.seed.zeroize();
        self.scalar.zeroize();
        self.hash_prefix.zeroize();
    }
}

impl Drop for ExpandedSecretKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for ExpandedSecretKey {}

impl From<&SecretKey> for ExpandedSecretKey {
    fn from(secret_key: &SecretKey) -> Self {
        Self::from_seed(secret_key)
    }
}

impl ExpandedSecretKey {
    pub(crate) fn from_seed(seed: &SecretKey) -> Self {
        let mut reader = Shake256::default().chain(seed).finalize_xof();
        let mut bytes: WideScalarBytes = [0u8; 114];
        reader.read(&mut bytes);

        let mut scalar_bytes = [0u8; 57];
        scalar_bytes.copy_from_slice(&bytes[..SECRET_KEY_LENGTH]);
        let scalar = Scalar::clamp_and_reduce(&scalar_bytes);

        let mut hash_prefix = [0u8; 57];
        hash_prefix.copy_from_slice(&bytes[SECRET_KEY_LENGTH..]);

        scalar_bytes.zeroize();
        bytes.zeroize();

        let point = EdwardsPoint::scalar_base_mult(&scalar);
        let public_key = VerifyingKey {
            compressed: point.compress(),
            point,
        };

        Self {
            seed: *seed,
            scalar,
            public_key,
            hash_prefix,
        }
    }

    /// Signs `m` under `dom4(phflag, ctx)`.
    pub(crate) fn sign_inner(
        &self,
        phflag: u8,
        ctx: &[u8],
        m: &[u8],
    ) -> Result<Signature, SigningError> {
        check_context(ctx)?;
        Ok(self.sign_unchecked(phflag, ctx, m))
    }

    /// Signing core; `ctx` must already be at most 255 bytes.
    pub(crate) fn sign_unchecked(&self, phflag: u8, ctx: &[u8], m: &[u8]) -> Signature {
        // SHAKE256(dom4(F, C) || prefix || PH(M), 114) -> scalar r
        let r = hash_to_scalar(phflag, ctx, &[&self.hash_prefix, m]);

        // R = r*B
        let compressed_r = EdwardsPoint::scalar_base_mult(&r).compress();

        // SHAKE256(dom4(F, C) || R || A || PH(M), 114) -> scalar k
        let k = hash_to_scalar(
            phflag,
            ctx,
            &[compressed_r.as_bytes(), self.public_key.compressed.as_bytes(), m],
        );

        // S = (r + k * s) mod L
        Signature {
            r: compressed_r,
            s: k.mul_add(&self.scalar, &r).to_bytes(),
        }
    }
}
