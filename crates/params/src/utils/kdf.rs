//! Constants for key derivation

/// Default PBKDF2 iteration count
pub const PBKDF2_DEFAULT_ITERATIONS: u32 = 100_000;

/// Default derived key length in bytes
pub const PBKDF2_DEFAULT_KEY_LENGTH: usize = 32;

/// Default salt size in bytes
pub const DEFAULT_SALT_SIZE: usize = 16;
