//! Seal keys for authenticated encryption
//!
//! A [`SealKey`] is 32 bytes: the first 16 key the AES-128 core and the
//! full key material keys the HMAC tag. Keys come from a caller-supplied
//! secure random source or from a password via PBKDF2-HMAC-SHA256 — there
//! is no hidden global generator anywhere in this crate.

use crate::error::{Result, SymmetricResultExt};
use algorithms::hash::Sha256;
use algorithms::kdf::Pbkdf2;
use algorithms::types::{Salt, SecretBytes};
use params::utils::cipher::{AES128_KEY_SIZE, SEAL_KEY_SIZE};
use params::utils::kdf::DEFAULT_SALT_SIZE;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A 32-byte key for the authenticated encryption wrapper
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub struct SealKey {
    bytes: SecretBytes<SEAL_KEY_SIZE>,
}

impl SealKey {
    /// Key size in bytes
    pub const SIZE: usize = SEAL_KEY_SIZE;

    /// Create a key from an existing array
    pub fn new(bytes: [u8; SEAL_KEY_SIZE]) -> Self {
        Self {
            bytes: SecretBytes::new(bytes),
        }
    }

    /// Create a key from a slice, validating its length
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        Ok(Self {
            bytes: SecretBytes::from_slice(slice)
                .map_err(|e| e.with_context("seal key"))?,
        })
    }

    /// Generate a random key from a caller-supplied secure source
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Self {
            bytes: SecretBytes::random(rng),
        }
    }

    /// Derive a key from a password and salt via PBKDF2-HMAC-SHA256.
    ///
    /// The derivation is deterministic in (password, salt, iterations), so
    /// the same inputs always reproduce the same key.
    pub fn derive_from_password(password: &[u8], salt: &[u8], iterations: u32) -> Result<Self> {
        let derived =
            Pbkdf2::<Sha256>::pbkdf2(password, salt, iterations, SEAL_KEY_SIZE)
                .map_primitive_err()?;
        Self::from_slice(&derived)
    }

    /// The full key material (keys the HMAC tag)
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_ref()
    }

    /// The leading bytes that key the block cipher
    pub(crate) fn cipher_key(&self) -> &[u8] {
        &self.bytes.as_ref()[..AES128_KEY_SIZE]
    }
}

impl AsRef<[u8]> for SealKey {
    fn as_ref(&self) -> &[u8] {
        self.bytes.as_ref()
    }
}

/// Generate a random salt for password-based key derivation
pub fn generate_salt<R: RngCore + CryptoRng>(rng: &mut R) -> Salt<DEFAULT_SALT_SIZE> {
    Salt::random(rng)
}
