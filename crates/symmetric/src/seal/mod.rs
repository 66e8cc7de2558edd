//! Encrypt-then-MAC authenticated encryption
//!
//! [`Aes128HmacSha256`] composes the two primitives: AES-128 encrypts the
//! padded message, HMAC-SHA256 tags the ciphertext. Decryption recomputes
//! and verifies the tag in constant time first; only a matching tag ever
//! reaches the block cipher, so cipher-level behavior can never become an
//! oracle for attackers.

use crate::cipher::{AuthenticatedCipher, SymmetricCipher};
use crate::error::{validate, Error, Result, SymmetricResultExt};
use crate::keys::SealKey;
use crate::padding;
use algorithms::block::BlockCipher;
use algorithms::field::Gf256;
use algorithms::hash::Sha256;
use algorithms::mac::Hmac;
use algorithms::types::Tag;
use algorithms::Aes128;
use params::utils::cipher::{AES_BLOCK_SIZE, SEAL_TAG_SIZE};
use zeroize::Zeroizing;

/// Authenticated encryption: AES-128 + HMAC-SHA256, encrypt-then-MAC.
///
/// Holds no state between calls beyond the key; round-key schedules and
/// message buffers are created fresh per invocation and dropped on return.
#[derive(Clone)]
pub struct Aes128HmacSha256 {
    key: SealKey,
    cipher: Aes128,
}

impl SymmetricCipher for Aes128HmacSha256 {
    type Key = SealKey;

    fn new(key: &Self::Key) -> Result<Self> {
        Ok(Self {
            key: key.clone(),
            cipher: Aes128::new(Gf256),
        })
    }

    fn name() -> &'static str {
        "AES-128-HMAC-SHA256"
    }
}

impl AuthenticatedCipher for Aes128HmacSha256 {
    type Tag = Tag<SEAL_TAG_SIZE>;

    fn encrypt(&self, plaintext: &str) -> Result<(Vec<u8>, Self::Tag)> {
        let padded = Zeroizing::new(padding::pad(plaintext.as_bytes(), AES_BLOCK_SIZE));

        let ciphertext = self
            .cipher
            .encrypt(&padded, self.key.cipher_key())
            .map_primitive_err()?;

        let tag_bytes =
            Hmac::<Sha256>::mac(self.key.as_bytes(), &ciphertext).map_primitive_err()?;
        let tag = Tag::from_slice(&tag_bytes).map_primitive_err()?;

        Ok((ciphertext, tag))
    }

    fn decrypt(&self, ciphertext: &[u8], tag: &Self::Tag) -> Result<String> {
        // Eager validation before any cryptographic work
        validate::block_aligned("sealed ciphertext", ciphertext.len(), AES_BLOCK_SIZE)?;

        // Tag verification strictly precedes decryption; a mismatch means
        // the block cipher never runs.
        let tag_ok = Hmac::<Sha256>::verify(self.key.as_bytes(), ciphertext, tag.as_ref())
            .map_primitive_err()?;
        validate::authentication(tag_ok, Self::name())?;

        let padded = Zeroizing::new(
            self.cipher
                .decrypt(ciphertext, self.key.cipher_key())
                .map_primitive_err()?,
        );

        let body = padding::unpad(&padded, AES_BLOCK_SIZE)?;
        let text = std::str::from_utf8(body).map_err(|_| Error::DecodeFailed {
            context: "sealed plaintext",
            message: "decrypted bytes are not valid UTF-8".to_string(),
        })?;

        Ok(text.to_string())
    }
}

/// Encrypt `plaintext` under `key`, returning the ciphertext and its tag.
pub fn seal(plaintext: &str, key: &SealKey) -> Result<(Vec<u8>, Tag<SEAL_TAG_SIZE>)> {
    Aes128HmacSha256::new(key)?.encrypt(plaintext)
}

/// Verify `tag` and decrypt `ciphertext` back to text.
pub fn open(ciphertext: &[u8], key: &SealKey, tag: &Tag<SEAL_TAG_SIZE>) -> Result<String> {
    Aes128HmacSha256::new(key)?.decrypt(ciphertext, tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> SealKey {
        SealKey::new([0x42u8; 32])
    }

    #[test]
    fn encrypt_produces_block_aligned_ciphertext_and_a_tag() {
        let (ciphertext, tag) = seal("hello", &key()).unwrap();
        assert_eq!(ciphertext.len(), 16);
        assert_eq!(tag.len(), 32);
    }

    #[test]
    fn the_tag_covers_the_ciphertext_under_the_full_key() {
        let (ciphertext, tag) = seal("hello", &key()).unwrap();
        let expected = Hmac::<Sha256>::mac(key().as_bytes(), &ciphertext).unwrap();
        assert_eq!(tag.as_ref(), expected.as_slice());
    }

    #[test]
    fn decrypt_rejects_unaligned_ciphertext_before_verification() {
        let (mut ciphertext, tag) = seal("hello", &key()).unwrap();
        ciphertext.pop();
        let err = open(&ciphertext, &key(), &tag).unwrap_err();
        assert!(matches!(err, Error::InvalidLength { .. }));
    }
}
