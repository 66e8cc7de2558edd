//! Constants for the block cipher and the authenticated encryption wrapper

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// Number of 32-bit columns in the AES state (Nb)
pub const AES_NB: usize = 4;

/// Number of 32-bit words in an AES-128 cipher key (Nk)
pub const AES128_NK: usize = 4;

/// Number of rounds for AES-128 (Nr)
pub const AES128_ROUNDS: usize = 10;

/// Seal key size in bytes for the authenticated encryption wrapper
pub const SEAL_KEY_SIZE: usize = 32;

/// Authentication tag size in bytes (HMAC-SHA256 output)
pub const SEAL_TAG_SIZE: usize = 32;
