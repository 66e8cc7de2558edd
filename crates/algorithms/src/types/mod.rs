//! Type-safe wrappers for cryptographic values
//!
//! Domain-specific types with compile-time size guarantees, designed to be
//! ergonomic while preventing common mistakes such as variable-time tag
//! comparison.

// Submodules
pub mod digest;
pub mod salt;
pub mod tag;

// Sealed trait module (not public)
pub(crate) mod sealed;

// Re-export main types
pub use digest::Digest;
pub use salt::Salt;
pub use tag::Tag;

// Re-export the secret containers the primitives are built on
pub use api::types::SecretBytes;
pub use common::security::{SecretBuffer, SecretVec};

/// Trait for cryptographic types with constant-time equality
pub trait ConstantTimeEq {
    /// Compare two values in constant time
    fn ct_eq(&self, other: &Self) -> bool;
}
