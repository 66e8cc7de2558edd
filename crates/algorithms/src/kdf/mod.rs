//! Key derivation functions with operation pattern and type-level guarantees
//!
//! ## Example usage
//!
//! ```
//! # use rand::rngs::OsRng;
//! use galcrypt_algorithms::hash::Sha256;
//! use galcrypt_algorithms::kdf::{KdfOperation, KeyDerivationFunction, Pbkdf2};
//!
//! let kdf = Pbkdf2::<Sha256>::new();
//! let salt = Pbkdf2::<Sha256>::generate_salt(&mut OsRng);
//!
//! // Traditional API
//! let key1 = kdf
//!     .derive_key(b"password123", Some(salt.as_ref()), 32)
//!     .unwrap();
//!
//! // Operation pattern API
//! let key2 = kdf
//!     .builder()
//!     .with_ikm(b"password123")
//!     .with_salt(salt.as_ref())
//!     .with_output_length(32)
//!     .derive()
//!     .unwrap();
//!
//! assert_eq!(key1, key2);
//! ```

use crate::error::Result;
use rand::{CryptoRng, RngCore};

pub mod pbkdf2;

pub use pbkdf2::{Pbkdf2, Pbkdf2Params};

/// Marker trait for KDF algorithms
pub trait KdfAlgorithm {
    /// Minimum salt size in bytes
    const MIN_SALT_SIZE: usize;

    /// Default output size in bytes
    const DEFAULT_OUTPUT_SIZE: usize;

    /// Static algorithm identifier
    const ALGORITHM_ID: &'static str;

    /// Returns the KDF algorithm name
    fn name() -> String {
        Self::ALGORITHM_ID.to_string()
    }
}

/// Builder-style operation for KDF invocations
pub trait KdfOperation<'a, A: KdfAlgorithm>: Sized {
    /// Set the input keying material
    fn with_ikm(self, ikm: &'a [u8]) -> Self;

    /// Set the salt
    fn with_salt(self, salt: &'a [u8]) -> Self;

    /// Set the desired output length
    fn with_output_length(self, length: usize) -> Self;

    /// Execute the key derivation
    fn derive(self) -> Result<Vec<u8>>;

    /// Execute the key derivation into a fixed-size array
    fn derive_array<const N: usize>(self) -> Result<[u8; N]>;
}

/// Common trait for all key derivation functions
pub trait KeyDerivationFunction {
    /// The algorithm this KDF implements
    type Algorithm: KdfAlgorithm;

    /// Salt type with appropriate validation
    type Salt: AsRef<[u8]> + Clone;

    /// Creates a new instance of the KDF with default parameters
    fn new() -> Self;

    /// Derives a key from input material and an optional salt.
    ///
    /// A `length` of zero falls back to the instance's configured default.
    fn derive_key(&self, input: &[u8], salt: Option<&[u8]>, length: usize) -> Result<Vec<u8>>;

    /// Creates a builder for fluent API usage
    fn builder(&self) -> impl KdfOperation<'_, Self::Algorithm>
    where
        Self: Sized;

    /// Generate a random salt with appropriate size
    fn generate_salt<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Salt;
}
