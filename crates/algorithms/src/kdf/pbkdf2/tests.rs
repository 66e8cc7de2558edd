use super::*;
use crate::hash::Sha256;
use crate::kdf::KeyDerivationFunction;

/// PBKDF2-HMAC-SHA256 with a single iteration (published test vector)
#[test]
fn pbkdf2_sha256_one_iteration() {
    let derived = Pbkdf2::<Sha256>::pbkdf2(b"password", b"salt", 1, 32).unwrap();
    let expected =
        hex::decode("120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b").unwrap();
    assert_eq!(derived.as_slice(), expected.as_slice());
}

/// PBKDF2-HMAC-SHA256 with two iterations
#[test]
fn pbkdf2_sha256_two_iterations() {
    let derived = Pbkdf2::<Sha256>::pbkdf2(b"password", b"salt", 2, 32).unwrap();
    let expected =
        hex::decode("ae4d0c95af6b46d32d0adff928f06dd02a303f8ef3c251dfd6e2d85a95474c43").unwrap();
    assert_eq!(derived.as_slice(), expected.as_slice());
}

/// PBKDF2-HMAC-SHA256 with a realistic iteration count
#[test]
fn pbkdf2_sha256_4096_iterations() {
    let derived = Pbkdf2::<Sha256>::pbkdf2(b"password", b"salt", 4096, 32).unwrap();
    let expected =
        hex::decode("c5e478d59288c841aa530db6845c4c8d962893a001ce4e11a4963873aa98134a").unwrap();
    assert_eq!(derived.as_slice(), expected.as_slice());
}

/// Longer password and salt, output spanning two hash blocks
#[test]
fn pbkdf2_sha256_long_inputs() {
    let derived = Pbkdf2::<Sha256>::pbkdf2(
        b"passwordPASSWORDpassword",
        b"saltSALTsaltSALTsaltSALTsaltSALTsalt",
        4096,
        40,
    )
    .unwrap();
    let expected = hex::decode(
        "348c89dbcbd32b2f32d814b8116e84cf2b17347ebc1800181c4e2a1fb8dd53e1c635518c7dac47e9",
    )
    .unwrap();
    assert_eq!(derived.as_slice(), expected.as_slice());
}

#[test]
fn derivation_is_deterministic() {
    let a = Pbkdf2::<Sha256>::pbkdf2_secure(b"pw", b"some salt", 1000, 32).unwrap();
    let b = Pbkdf2::<Sha256>::pbkdf2_secure(b"pw", b"some salt", 1000, 32).unwrap();
    assert_eq!(a, b);
}

#[test]
fn one_salt_bit_changes_the_whole_output() {
    let baseline = Pbkdf2::<Sha256>::pbkdf2_secure(b"pw", b"some salt", 1000, 32).unwrap();
    let mut salt = b"some salt".to_vec();
    salt[0] ^= 0x01;
    let flipped = Pbkdf2::<Sha256>::pbkdf2_secure(b"pw", &salt, 1000, 32).unwrap();

    assert_ne!(baseline, flipped);
    // Avalanche: almost no byte positions survive a single-bit salt change.
    let surviving = baseline
        .iter()
        .zip(flipped.iter())
        .filter(|(a, b)| a == b)
        .count();
    assert!(surviving < 8, "only {surviving} bytes changed");
}

#[test]
fn zero_iterations_is_rejected() {
    let err = Pbkdf2::<Sha256>::pbkdf2(b"pw", b"salt", 0, 32).unwrap_err();
    assert!(matches!(err, Error::Parameter { .. }));
}

#[test]
fn zero_length_is_rejected() {
    let err = Pbkdf2::<Sha256>::pbkdf2(b"pw", b"salt", 1, 0).unwrap_err();
    assert!(matches!(err, Error::Parameter { .. }));
}

#[test]
fn oversized_requests_fail_with_derived_key_too_long() {
    // One block more than the 2^32 - 1 ceiling
    let over = (MAX_BLOCKS + 1) * 32;
    let err = Pbkdf2::<Sha256>::pbkdf2(b"pw", b"salt", 1, over).unwrap_err();
    assert!(matches!(err, Error::DerivedKeyTooLong { .. }));
}

#[test]
fn partial_final_block_is_truncated() {
    // 33 bytes needs two SHA-256 blocks, one byte from the second
    let derived = Pbkdf2::<Sha256>::pbkdf2_secure(b"pw", b"salt", 10, 33).unwrap();
    assert_eq!(derived.len(), 33);

    let prefix = Pbkdf2::<Sha256>::pbkdf2_secure(b"pw", b"salt", 10, 32).unwrap();
    assert_eq!(&derived[..32], prefix.as_slice());
}

#[test]
fn builder_matches_direct_call() {
    let kdf = Pbkdf2::<Sha256>::new();
    let via_builder = kdf
        .builder()
        .with_ikm(b"password")
        .with_salt(b"salt")
        .with_iterations(2)
        .with_output_length(32)
        .derive()
        .unwrap();

    let direct = Pbkdf2::<Sha256>::pbkdf2_secure(b"password", b"salt", 2, 32).unwrap();
    assert_eq!(via_builder, direct);
}

#[test]
fn derive_array_checks_the_requested_length() {
    let kdf = Pbkdf2::<Sha256>::new();
    let result: Result<[u8; 16]> = kdf
        .builder()
        .with_ikm(b"password")
        .with_salt(b"salt")
        .with_iterations(1)
        .with_output_length(32)
        .derive_array();
    assert!(matches!(result, Err(Error::Length { .. })));
}
