//! End-to-end tests for the authenticated encryption wrapper

use galcrypt_symmetric::{open, seal, Error, SealKey};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn key() -> SealKey {
    SealKey::generate(&mut ChaCha20Rng::seed_from_u64(1234))
}

#[test]
fn round_trip_simple_message() {
    let key = key();
    let (ciphertext, tag) = seal("hello", &key).unwrap();
    let plaintext = open(&ciphertext, &key, &tag).unwrap();
    assert_eq!(plaintext, "hello");
}

#[test]
fn round_trip_empty_and_unicode_messages() {
    let key = key();
    for message in ["", "a", "exactly sixteen!", "snowman \u{2603} and \u{1F980}"] {
        let (ciphertext, tag) = seal(message, &key).unwrap();
        assert_eq!(open(&ciphertext, &key, &tag).unwrap(), message);
    }
}

#[test]
fn encryption_is_deterministic_per_message() {
    let key = key();
    let (ct_a, tag_a) = seal("same message", &key).unwrap();
    let (ct_b, tag_b) = seal("same message", &key).unwrap();
    assert_eq!(ct_a, ct_b);
    assert_eq!(tag_a.as_ref(), tag_b.as_ref());
}

#[test]
fn flipping_any_ciphertext_bit_fails_authentication() {
    let key = key();
    let (ciphertext, tag) = seal("tamper with me", &key).unwrap();

    for byte in 0..ciphertext.len() {
        for bit in 0..8 {
            let mut tampered = ciphertext.clone();
            tampered[byte] ^= 1 << bit;
            let err = open(&tampered, &key, &tag).unwrap_err();
            assert!(
                matches!(err, Error::AuthenticationFailed { .. }),
                "byte {byte} bit {bit} must fail authentication, got {err:?}"
            );
        }
    }
}

#[test]
fn flipping_any_tag_bit_fails_authentication() {
    let key = key();
    let (ciphertext, tag) = seal("tamper with me", &key).unwrap();

    for byte in 0..tag.len() {
        for bit in 0..8 {
            let mut tag_bytes = *tag;
            tag_bytes[byte] ^= 1 << bit;
            let tampered = algorithms::types::Tag::new(tag_bytes);
            let err = open(&ciphertext, &key, &tampered).unwrap_err();
            assert!(
                matches!(err, Error::AuthenticationFailed { .. }),
                "tag byte {byte} bit {bit} must fail authentication"
            );
        }
    }
}

#[test]
fn decrypting_with_the_wrong_key_fails_authentication() {
    let key = key();
    let other = SealKey::generate(&mut ChaCha20Rng::seed_from_u64(5678));

    let (ciphertext, tag) = seal("secret", &key).unwrap();
    let err = open(&ciphertext, &other, &tag).unwrap_err();
    assert!(matches!(err, Error::AuthenticationFailed { .. }));
}

#[test]
fn wrong_key_lengths_are_rejected_eagerly() {
    for bad in [0usize, 16, 31, 33, 64] {
        let err = SealKey::from_slice(&vec![0u8; bad]).unwrap_err();
        assert!(matches!(err, Error::InvalidLength { .. }));
    }
}

#[test]
fn password_derived_keys_round_trip() {
    let key = SealKey::derive_from_password(b"hunter2", b"per-user salt", 1_000).unwrap();
    let (ciphertext, tag) = seal("derived-key message", &key).unwrap();

    // Re-derive from the same inputs and decrypt with the fresh key.
    let again = SealKey::derive_from_password(b"hunter2", b"per-user salt", 1_000).unwrap();
    assert_eq!(open(&ciphertext, &again, &tag).unwrap(), "derived-key message");

    // A different password cannot open it.
    let wrong = SealKey::derive_from_password(b"hunter3", b"per-user salt", 1_000).unwrap();
    assert!(matches!(
        open(&ciphertext, &wrong, &tag).unwrap_err(),
        Error::AuthenticationFailed { .. }
    ));
}

#[test]
fn longer_messages_span_multiple_blocks() {
    let key = key();
    let message = "The quick brown fox jumps over the lazy dog, twice over: \
                   the quick brown fox jumps over the lazy dog.";
    let (ciphertext, tag) = seal(message, &key).unwrap();
    assert!(ciphertext.len() > 16);
    assert_eq!(ciphertext.len() % 16, 0);
    assert_eq!(open(&ciphertext, &key, &tag).unwrap(), message);
}
