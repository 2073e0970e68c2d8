//! JWK key handling against known secp256k1 key pairs.

#![cfg(feature = "jwk")]

use ecmul_k256::{
    jwk::{check_key_pair, PublicKey, SecretKey},
    Error, ProjectivePoint, Scalar, ScalarMul,
};
use hex_literal::hex;
use proptest::prelude::*;
use rand_core::OsRng;

struct KeyPair {
    d: [u8; 32],
    x: [u8; 32],
    y: [u8; 32],
}

const KEY_PAIRS: &[KeyPair] = &[
    KeyPair {
        d: hex!("0000000000000000000000000000000000000000000000000000000000000003"),
        x: hex!("f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9"),
        y: hex!("388f7b0f632de8140fe337e62a37f3566500a99934c2231b6cb9fd7584b8e672"),
    },
    KeyPair {
        d: hex!("c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721"),
        x: hex!("2c8c31fc9f990c6b55e3865a184a4ce50e09481f2eaeb3e60ec1cea13a6ae645"),
        y: hex!("64b95e4fdb6948c0386e189b006a29f686769b011704275e4459822dc3328085"),
    },
    KeyPair {
        d: hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364140"),
        x: hex!("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
        y: hex!("b7c52588d95c3b9aa25b0403f1eef75702e84bb7597aabe663b82f6f04ef2777"),
    },
];

#[test]
fn known_key_pairs() {
    for pair in KEY_PAIRS {
        let secret = SecretKey::from_jwk_d(&pair.d).unwrap();
        let public = PublicKey::from_jwk_coordinates(&pair.x, &pair.y).unwrap();

        assert_eq!(secret.public_key(), public);
        assert_eq!(check_key_pair(&secret, &public), Ok(()));

        let (x, y) = public.to_jwk_coordinates();
        assert_eq!(x.as_slice(), &pair.x);
        assert_eq!(y.as_slice(), &pair.y);
    }
}

#[test]
fn mismatched_pairs_are_rejected() {
    let secret = SecretKey::from_jwk_d(&KEY_PAIRS[0].d).unwrap();
    let public = PublicKey::from_jwk_coordinates(&KEY_PAIRS[1].x, &KEY_PAIRS[1].y).unwrap();
    assert_eq!(check_key_pair(&secret, &public), Err(Error::InvalidPoint));
}

#[test]
fn off_curve_coordinates() {
    let mut y = KEY_PAIRS[1].y;
    y[0] ^= 0x80;
    assert_eq!(
        PublicKey::from_jwk_coordinates(&KEY_PAIRS[1].x, &y),
        Err(Error::InvalidPoint)
    );
}

#[test]
fn random_keys_are_consistent() {
    for _ in 0..8 {
        let secret = SecretKey::random(&mut OsRng);
        let public = secret.public_key();
        let (x, y) = public.to_jwk_coordinates();
        let parsed = PublicKey::from_jwk_coordinates(&x, &y).unwrap();
        assert_eq!(check_key_pair(&secret, &parsed), Ok(()));

        let d = secret.to_jwk_d();
        let reparsed = SecretKey::from_jwk_d(&d).unwrap();
        assert_eq!(reparsed.public_key(), public);
    }
}

proptest! {
    #[test]
    fn base_mult_distributes(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        let mut wide = [0u8; 64];
        wide[..32].copy_from_slice(&a);
        let a = Scalar::from_uniform_bytes(&wide);
        wide[..32].copy_from_slice(&b);
        let b = Scalar::from_uniform_bytes(&wide);

        prop_assert_eq!(
            ProjectivePoint::scalar_base_mult(&(a + b)),
            ProjectivePoint::scalar_base_mult(&a) + ProjectivePoint::scalar_base_mult(&b)
        );
        prop_assert_eq!(
            ProjectivePoint::scalar_base_mult(&(a * b)),
            ProjectivePoint::scalar_mult(&a, &ProjectivePoint::scalar_base_mult(&b))
        );
    }
}
