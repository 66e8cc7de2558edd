//! Authenticated encryption for the galcrypt workspace
//!
//! This crate provides the high-level contract callers consume: an
//! encrypt-then-MAC scheme combining the AES-128 core with HMAC-SHA256,
//! keyed either by random bytes or by a password through PBKDF2. The raw
//! block cipher primitive stays in `galcrypt-algorithms`, independently
//! testable against the published vectors; this layer never merges with it.

#![forbid(unsafe_code)]

pub mod cipher;
pub mod error;
pub mod keys;
pub mod padding;
pub mod seal;

// Re-export main types for convenience
pub use cipher::{AuthenticatedCipher, SymmetricCipher};
pub use keys::{generate_salt, SealKey};
pub use seal::{open, seal, Aes128HmacSha256};

// Re-export the API error system instead of custom error types
pub use api::error::{validate, Error, Result};
