//! Block cipher primitives
//!
//! The traits here follow the type-level marker pattern used across the
//! crate: a [`CipherAlgorithm`] carries the compile-time constants, and a
//! [`BlockCipher`] implementation does the work. Keys are passed per call
//! and round-key schedules live only for the duration of one invocation.

pub mod aes;
pub use aes::{Aes128, RoundKeySchedule};

use crate::error::Result;
use rand::{CryptoRng, RngCore};

/// Marker trait for block cipher algorithms
pub trait CipherAlgorithm {
    /// Size of the key in bytes
    const KEY_SIZE: usize;

    /// Size of the block in bytes
    const BLOCK_SIZE: usize;

    /// Returns the algorithm name
    fn name() -> &'static str;
}

/// Trait for block ciphers operating on block-aligned byte buffers
pub trait BlockCipher {
    /// The algorithm this cipher implements
    type Algorithm: CipherAlgorithm;

    /// The key type used by this cipher
    type Key: AsRef<[u8]>;

    /// Encrypts a block-aligned buffer with the given key.
    ///
    /// Inputs of the wrong length are rejected before any arithmetic runs;
    /// padding is the caller's responsibility.
    fn encrypt(&self, plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>>;

    /// Decrypts a block-aligned buffer with the given key.
    fn decrypt(&self, ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>>;

    /// Generates a random key from a caller-supplied secure source
    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key;
}
