//! Hash function implementations
//!
//! The trait surface mirrors the rest of the crate: a [`HashAlgorithm`]
//! marker carries the compile-time constants, and a [`HashFunction`] does
//! the streaming work.

pub mod sha2;
pub use sha2::Sha256;

use crate::error::Result;

/// Marker trait for hash algorithms
pub trait HashAlgorithm {
    /// Digest size in bytes
    const OUTPUT_SIZE: usize;

    /// Internal block size in bytes
    const BLOCK_SIZE: usize;

    /// Static algorithm identifier
    const ALGORITHM_ID: &'static str;
}

/// Common trait for streaming hash functions
pub trait HashFunction: Sized {
    /// The algorithm this hash function implements
    type Algorithm: HashAlgorithm;

    /// The digest type produced on finalization
    type Output: AsRef<[u8]> + Clone;

    /// Creates a fresh hasher
    fn new() -> Self;

    /// Feeds data into the hasher
    fn update(&mut self, data: &[u8]) -> Result<&mut Self>;

    /// Finalizes the hasher and returns the digest.
    ///
    /// The internal state is zeroized; the hasher must not be reused.
    fn finalize(&mut self) -> Result<Self::Output>;

    /// One-shot digest helper
    fn digest(data: &[u8]) -> Result<Self::Output> {
        let mut hasher = Self::new();
        hasher.update(data)?;
        hasher.finalize()
    }

    /// Digest size in bytes
    fn output_size() -> usize {
        Self::Algorithm::OUTPUT_SIZE
    }

    /// Internal block size in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Returns the algorithm name
    fn name() -> &'static str {
        Self::Algorithm::ALGORITHM_ID
    }
}
