//! Constants for hash functions

/// SHA-256 output size in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// SHA-256 block size in bytes
pub const SHA256_BLOCK_SIZE: usize = 64;
