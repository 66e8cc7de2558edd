use super::*;
use crate::error::Error;
use proptest::prelude::*;

fn cipher() -> Aes128 {
    Aes128::new(Gf256)
}

#[test]
fn fips197_appendix_b_vector() {
    // FIPS 197 Appendix B
    // Key: 2b7e151628aed2a6abf7158809cf4f3c
    // Plaintext: 3243f6a8885a308d313198a2e0370734
    // Ciphertext: 3925841d02dc09fbdc118597196a0b32
    let key = hex::decode("2b7e151628aed2a6abf7158809cf4f3c").unwrap();
    let plaintext = hex::decode("3243f6a8885a308d313198a2e0370734").unwrap();
    let expected = hex::decode("3925841d02dc09fbdc118597196a0b32").unwrap();

    let ciphertext = cipher().encrypt(&plaintext, &key).unwrap();
    assert_eq!(ciphertext, expected);

    let recovered = cipher().decrypt(&ciphertext, &key).unwrap();
    assert_eq!(recovered, plaintext);
}

#[test]
fn nist_ecb_known_answer() {
    // NIST test vector: AES-128-ECB
    // Key: 2b7e151628aed2a6abf7158809cf4f3c
    // Plaintext: 6bc1bee22e409f96e93d7e117393172a
    // Ciphertext: 3ad77bb40d7a3660a89ecaf32466ef97
    let key = hex::decode("2b7e151628aed2a6abf7158809cf4f3c").unwrap();
    let plaintext = hex::decode("6bc1bee22e409f96e93d7e117393172a").unwrap();
    let expected = hex::decode("3ad77bb40d7a3660a89ecaf32466ef97").unwrap();

    let ciphertext = cipher().encrypt(&plaintext, &key).unwrap();
    assert_eq!(ciphertext, expected);
}

#[test]
fn key_expansion_yields_44_words() {
    let key = hex::decode("2b7e151628aed2a6abf7158809cf4f3c").unwrap();
    let schedule = cipher().key_expansion(&key).unwrap();

    assert_eq!(RoundKeySchedule::WORDS, 44);
    // FIPS 197 Appendix A.1: the first and last expanded words.
    assert_eq!(schedule.word(0).unwrap(), 0x2b7e1516);
    assert_eq!(schedule.word(4).unwrap(), 0xa0fafe17);
    assert_eq!(schedule.word(43).unwrap(), 0xb6630ca6);
    assert!(schedule.word(44).is_err());
}

#[test]
fn round_trip_with_the_reference_configuration_key() {
    let key = hex::decode("2b7e151628aed2a6abf7cf9f2430c08d").unwrap();
    let plaintext = hex::decode("3243f6a8885a308d313198a2e0370734").unwrap();

    let ciphertext = cipher().encrypt(&plaintext, &key).unwrap();
    assert_ne!(ciphertext, plaintext);

    let recovered = cipher().decrypt(&ciphertext, &key).unwrap();
    assert_eq!(recovered, plaintext);
}

#[test]
fn multi_block_inputs_are_processed_per_block() {
    let key = [0x11u8; 16];
    let mut plaintext = Vec::new();
    plaintext.extend_from_slice(&[0xABu8; 16]);
    plaintext.extend_from_slice(&[0xABu8; 16]);

    let ciphertext = cipher().encrypt(&plaintext, &key).unwrap();
    assert_eq!(ciphertext.len(), 32);
    // Deterministic per-message encryption: identical blocks map identically.
    assert_eq!(&ciphertext[..16], &ciphertext[16..]);

    let recovered = cipher().decrypt(&ciphertext, &key).unwrap();
    assert_eq!(recovered, plaintext);
}

#[test]
fn wrong_key_length_is_rejected_before_any_work() {
    let aes = cipher();
    let block = [0u8; 16];

    for bad in [0usize, 15, 17, 32] {
        let key = vec![0u8; bad];
        let err = aes.encrypt(&block, &key).unwrap_err();
        assert!(
            matches!(err, Error::Length { context: "AES-128 key", .. }),
            "key length {bad} should be rejected"
        );
    }
}

#[test]
fn unaligned_or_empty_input_is_rejected() {
    let aes = cipher();
    let key = [0u8; 16];

    for bad in [1usize, 15, 17, 31] {
        let data = vec![0u8; bad];
        assert!(matches!(
            aes.encrypt(&data, &key).unwrap_err(),
            Error::Length { .. }
        ));
        assert!(matches!(
            aes.decrypt(&data, &key).unwrap_err(),
            Error::Length { .. }
        ));
    }
    assert!(aes.encrypt(&[], &key).is_err());
    assert!(aes.decrypt(&[], &key).is_err());
}

#[test]
fn generated_keys_come_from_the_injected_source() {
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    let mut rng_a = ChaCha20Rng::seed_from_u64(7);
    let mut rng_b = ChaCha20Rng::seed_from_u64(7);

    let key_a = Aes128::generate_key(&mut rng_a);
    let key_b = Aes128::generate_key(&mut rng_b);
    assert_eq!(key_a, key_b);
}

proptest! {
    #[test]
    fn encrypt_then_decrypt_is_identity(key in any::<[u8; 16]>(), block in any::<[u8; 16]>()) {
        let aes = cipher();
        let ciphertext = aes.encrypt(&block, &key).unwrap();
        let recovered = aes.decrypt(&ciphertext, &key).unwrap();
        prop_assert_eq!(recovered.as_slice(), block.as_slice());
    }
}
