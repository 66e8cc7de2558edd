//! Error handling for the galcrypt workspace

pub mod traits;
pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export error traits
pub use traits::ResultExt;

// Standard library error conversions
impl From<std::array::TryFromSliceError> for Error {
    fn from(_: std::array::TryFromSliceError) -> Self {
        Self::InvalidLength {
            context: "array conversion",
            expected: 0, // Unknown expected size
            actual: 0,   // Unknown actual size
        }
    }
}

impl std::error::Error for Error {}

// Specialized result types for different operations
/// Result type for cipher operations
pub type CipherResult<T> = Result<T>;
/// Result type for key derivation operations
pub type KdfResult<T> = Result<T>;
