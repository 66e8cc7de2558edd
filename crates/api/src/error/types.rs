//! Error type definitions for cryptographic operations

use core::fmt;

/// Primary error type for cryptographic operations
///
/// Every failure a caller can observe maps to exactly one variant, so
/// integrity failures are never conflated with malformed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid length error with context
    InvalidLength {
        /// Where the length check failed
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        /// Which parameter was rejected
        context: &'static str,
        /// Why the parameter was rejected
        message: String,
    },

    /// Requested derived-key length exceeds what the KDF can produce
    DerivedKeyTooLong {
        /// The KDF that rejected the request
        context: &'static str,
        /// Requested output length in bytes
        requested: usize,
        /// Maximum producible output length in bytes
        max: usize,
    },

    /// Authentication failed error (tag mismatch)
    AuthenticationFailed {
        /// Algorithm whose tag verification failed
        context: &'static str,
        /// Additional details
        message: String,
    },

    /// Byte-to-text decoding failed after an otherwise successful operation
    DecodeFailed {
        /// What was being decoded
        context: &'static str,
        /// Why decoding failed
        message: String,
    },

    /// A field operation was applied to an operand outside its domain
    InvalidOperand {
        /// The operation that was rejected
        context: &'static str,
        /// Why the operand is invalid
        message: String,
    },

    /// Other error
    Other {
        /// Where the error originated
        context: &'static str,
        /// Detailed error message
        message: String,
    },
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Add context to an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::DerivedKeyTooLong {
                requested, max, ..
            } => Self::DerivedKeyTooLong {
                context,
                requested,
                max,
            },
            Self::AuthenticationFailed { message, .. } => {
                Self::AuthenticationFailed { context, message }
            }
            Self::DecodeFailed { message, .. } => Self::DecodeFailed { context, message },
            Self::InvalidOperand { message, .. } => Self::InvalidOperand { context, message },
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::InvalidParameter { context, message } => {
                write!(f, "Invalid parameter '{}': {}", context, message)
            }
            Error::DerivedKeyTooLong {
                context,
                requested,
                max,
            } => {
                write!(
                    f,
                    "Derived key too long for {}: requested {} bytes, maximum {}",
                    context, requested, max
                )
            }
            Error::AuthenticationFailed { context, message } => {
                write!(f, "Authentication failed for {}: {}", context, message)
            }
            Error::DecodeFailed { context, message } => {
                write!(f, "Decoding failed for {}: {}", context, message)
            }
            Error::InvalidOperand { context, message } => {
                write!(f, "Invalid operand in {}: {}", context, message)
            }
            Error::Other { context, message } => {
                write!(f, "Error in {}: {}", context, message)
            }
        }
    }
}
