//! Public API types for the galcrypt workspace
//!
//! This crate defines the error taxonomy every other galcrypt crate speaks,
//! plus the fixed-size secret byte container used for key material.

#![forbid(unsafe_code)]

pub mod error;
pub mod types;

// Re-export the primary error type and result
pub use error::{Error, Result};

// Re-export error handling traits and validation helpers
pub use error::{validate, ResultExt};

// Re-export the secret byte container
pub use types::SecretBytes;
