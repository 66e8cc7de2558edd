//! Symmetric cipher traits
//!
//! This module defines the core traits the authenticated encryption
//! implementations in this crate conform to.

use crate::error::Result;

/// Common trait for all symmetric encryption algorithms
pub trait SymmetricCipher {
    /// The key type used by this cipher
    type Key;

    /// Creates a new cipher instance with the given key
    fn new(key: &Self::Key) -> Result<Self>
    where
        Self: Sized;

    /// Returns the name of this cipher
    fn name() -> &'static str;
}

/// Trait for authenticated encryption of text messages
///
/// Implementations bind a ciphertext to an authentication tag; decryption
/// verifies the tag in constant time before any block-cipher work happens.
pub trait AuthenticatedCipher: SymmetricCipher {
    /// The authentication tag type produced and verified by this cipher
    type Tag;

    /// Encrypts plaintext and returns the ciphertext with its tag
    fn encrypt(&self, plaintext: &str) -> Result<(Vec<u8>, Self::Tag)>;

    /// Verifies the tag, then decrypts the ciphertext back to text.
    ///
    /// Fails with an authentication error — and performs no decryption at
    /// all — when the tag does not match.
    fn decrypt(&self, ciphertext: &[u8], tag: &Self::Tag) -> Result<String>;
}
