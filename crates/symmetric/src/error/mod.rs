//! Error handling for the authenticated encryption layer
//!
//! This crate speaks the public API error system; primitive-level errors
//! from `galcrypt-algorithms` are converted at the boundary so callers see
//! one taxonomy.

// Re-export the primary API error system
pub use api::error::{validate, Error, Result, ResultExt};

use algorithms::error::Error as PrimitiveError;

/// Extension trait converting primitive-layer results to API results
pub trait SymmetricResultExt<T> {
    /// Convert a Result with a primitive error into a Result with an API error
    fn map_primitive_err(self) -> Result<T>;
}

impl<T> SymmetricResultExt<T> for core::result::Result<T, PrimitiveError> {
    fn map_primitive_err(self) -> Result<T> {
        self.map_err(Error::from)
    }
}
