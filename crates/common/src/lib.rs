//! Common implementations and shared functionality for the galcrypt workspace

#![forbid(unsafe_code)]

pub mod security;

pub use security::{
    EphemeralSecret, SecretBuffer, SecretVec, SecureZeroingType, ZeroizeGuard,
};
