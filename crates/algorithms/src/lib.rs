//! Cryptographic primitives with constant-time implementations
//!
//! This crate provides the primitive layer of the galcrypt workspace: the
//! AES-128 block cipher core built over an explicit finite-field capability,
//! SHA-256, HMAC, and PBKDF2 key derivation, together with typed wrappers
//! for salts, tags, and digests.
//!
//! # Security Features
//!
//! - Secure memory handling with automatic zeroization
//! - Constant-time comparison operations for all secret-bearing values
//! - Branchless GF(2⁸) arithmetic
//! - Eager validation before any cryptographic work begins

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Finite-field abstractions
pub mod field;
pub use field::{FiniteField, Gf256};

// Block cipher implementations
pub mod block;
pub use block::{Aes128, BlockCipher, CipherAlgorithm, RoundKeySchedule};

// Hash function implementations
pub mod hash;
pub use hash::{HashAlgorithm, HashFunction, Sha256};

// MAC implementations
pub mod mac;
pub use mac::Hmac;

// KDF implementations
pub mod kdf;
pub use kdf::{KdfAlgorithm, KdfOperation, KeyDerivationFunction, Pbkdf2, Pbkdf2Params};

// Type system
pub mod types;
pub use types::{ConstantTimeEq, Digest, Salt, Tag};

// Re-export security types from galcrypt-common
pub use common::security::{
    EphemeralSecret, SecretBuffer, SecretVec, SecureZeroingType, ZeroizeGuard,
};

// Re-export the secret byte container from galcrypt-api
pub use api::types::SecretBytes;
