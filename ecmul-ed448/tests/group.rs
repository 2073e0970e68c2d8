//! Group-law and encoding properties of Ed448 through the public API.

use ecmul_ed448::{
    CompressedEdwardsY, EdwardsPoint, Error, GroupLaw, MontgomeryPoint, Scalar, ScalarMul,
};
use hex_literal::hex;
use proptest::prelude::*;

prop_compose! {
    fn scalar()(bytes in any::<[u8; 32]>(), tail in any::<[u8; 24]>()) -> Scalar {
        let mut wide = [0u8; 114];
        wide[..32].copy_from_slice(&bytes);
        wide[32..56].copy_from_slice(&tail);
        wide[100..].copy_from_slice(&bytes[..14]);
        Scalar::from_uniform_bytes(&wide)
    }
}

// Public keys from RFC 8032 §7.4
const RFC8032_KEYS: [[u8; 57]; 3] = [
    hex!("5fd7449b59b461fd2ce787ec616ad46a1da1342485a70e1f8a0ea75d80e96778edf124769b46c7061bd6783df1e50f6cd1fa1abeafe8256180"),
    hex!("43ba28f430cdff456ae531545f7ecd0ac834a55d9358c0372bfa0c6c6798c0866aea01eb00742802b8438ea4cb82169c235160627b4c3a9480"),
    hex!("79756f014dcfe2079f5dd9e718be4171e2ef2486a08f25186f6bff43a9936b9bfe12402b08ae65798a3d81e22e9ec80e7690862ef3d4ed3a00"),
];

#[test]
fn rfc8032_keys_decode() {
    for bytes in RFC8032_KEYS {
        let point = EdwardsPoint::from_bytes(&bytes).unwrap();
        assert!(bool::from(point.is_on_curve()));
        assert!(bool::from(point.is_torsion_free()));
        assert_eq!(point.to_bytes(), bytes);
    }
}

#[test]
fn decode_errors() {
    assert_eq!(EdwardsPoint::from_bytes(&[0u8; 56]), Err(Error::Encoding));
    assert_eq!(EdwardsPoint::from_bytes(&[0u8; 58]), Err(Error::Encoding));

    // y = p
    let mut y_is_p = [0xffu8; 57];
    y_is_p[28] = 0xfe;
    y_is_p[56] = 0;
    assert_eq!(EdwardsPoint::from_bytes(&y_is_p), Err(Error::Encoding));

    // y = 2 has no matching x
    let mut y_is_two = [0u8; 57];
    y_is_two[0] = 2;
    assert_eq!(EdwardsPoint::from_bytes(&y_is_two), Err(Error::InvalidPoint));
}

#[test]
fn generator_tables_agree_with_variable_base() {
    let k = Scalar::from(0x0123_4567_89ab_cdefu64);
    assert_eq!(
        EdwardsPoint::scalar_base_mult(&k),
        EdwardsPoint::scalar_mult(&k, &EdwardsPoint::generator())
    );
    assert_eq!(
        EdwardsPoint::scalar_base_mult(&Scalar::ZERO),
        EdwardsPoint::identity()
    );
}

#[test]
fn compressed_round_trip_of_identity() {
    let identity = CompressedEdwardsY::IDENTITY.decompress().unwrap();
    assert!(bool::from(identity.is_identity()));
    assert_eq!(identity.compress(), CompressedEdwardsY::IDENTITY);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn base_mult_is_linear(a in scalar(), b in scalar()) {
        let lhs = EdwardsPoint::scalar_base_mult(&(a + b));
        let rhs = EdwardsPoint::scalar_base_mult(&a) + EdwardsPoint::scalar_base_mult(&b);
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn scalar_mult_composes(a in scalar(), b in scalar()) {
        let b_g = EdwardsPoint::scalar_base_mult(&b);
        prop_assert_eq!(
            EdwardsPoint::scalar_mult(&a, &b_g),
            EdwardsPoint::scalar_base_mult(&(a * b))
        );
    }

    #[test]
    fn double_scalar_base_mult_matches(a in scalar(), b in scalar(), c in scalar()) {
        let p = EdwardsPoint::scalar_base_mult(&c);
        prop_assert_eq!(
            EdwardsPoint::double_scalar_base_mult(&a, &p, &b),
            EdwardsPoint::scalar_base_mult(&(a * c + b))
        );
    }

    #[test]
    fn encoding_round_trip(a in scalar()) {
        let p = EdwardsPoint::scalar_base_mult(&a);
        let bytes = p.to_bytes();
        let q = EdwardsPoint::from_bytes(&bytes).unwrap();
        prop_assert_eq!(p, q);
        prop_assert_eq!(q.to_bytes(), bytes);
        prop_assert!(bool::from(q.is_torsion_free()));
    }

    #[test]
    fn montgomery_map_commutes(a in scalar()) {
        let p = EdwardsPoint::scalar_base_mult(&a);
        prop_assert_eq!(p.to_montgomery(), &a * &MontgomeryPoint::GENERATOR);
    }

    #[test]
    fn negation(a in scalar()) {
        let p = EdwardsPoint::scalar_base_mult(&a);
        prop_assert_eq!(-p, EdwardsPoint::scalar_base_mult(&-a));
        prop_assert!(bool::from((p - p).is_identity()));
    }
}
