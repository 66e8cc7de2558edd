//! galcrypt — a pure Rust symmetric cipher engine.
//!
//! This crate re-exports the galcrypt workspace: the primitive layer
//! ([`algorithms`]), the high-level authenticated encryption layer
//! ([`symmetric`]), and the supporting api/common/internal/params crates.

#![forbid(unsafe_code)]

pub use galcrypt_algorithms as algorithms;
pub use galcrypt_api as api;
pub use galcrypt_common as common;
pub use galcrypt_internal as internal;
pub use galcrypt_params as params;
pub use galcrypt_symmetric as symmetric;

// The types most callers want, one level up.
pub use galcrypt_algorithms::{Aes128, Gf256, Hmac, Pbkdf2, Sha256};
pub use galcrypt_api::{Error, Result};
pub use galcrypt_symmetric::{open, seal, Aes128HmacSha256, SealKey};
