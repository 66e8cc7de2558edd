//! Error handling for cryptographic primitives

use api::Error as CoreError;
use std::borrow::Cow;
use std::fmt;

/// The error type for cryptographic primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Authentication failure (tag verification)
    Authentication {
        /// Algorithm that failed authentication
        algorithm: &'static str,
    },

    /// Requested derived-key length exceeds the PRF output ceiling
    DerivedKeyTooLong {
        /// KDF that rejected the request
        context: &'static str,
        /// Requested output length in bytes
        requested: usize,
        /// Maximum producible output length in bytes
        max: usize,
    },

    /// Byte-to-text decoding failure
    Decode {
        /// What was being decoded
        context: &'static str,
        /// Why decoding failed
        reason: &'static str,
    },

    /// A field operation was applied to an operand outside its domain
    Operand {
        /// The operation that was rejected
        context: &'static str,
        /// Why the operand is invalid
        reason: &'static str,
    },

    /// Fallback for other errors
    Other(&'static str),
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for cryptographic primitives operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
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
            Error::Authentication { algorithm } => {
                write!(f, "Authentication failed for {}", algorithm)
            }
            Error::DerivedKeyTooLong {
                context,
                requested,
                max,
            } => {
                write!(
                    f,
                    "Derived key too long for {}: requested {}, maximum {}",
                    context, requested, max
                )
            }
            Error::Decode { context, reason } => {
                write!(f, "Decoding failed for {}: {}", context, reason)
            }
            Error::Operand { context, reason } => {
                write!(f, "Invalid operand in {}: {}", context, reason)
            }
            Error::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {}

// Conversion into the public API error type
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: match name {
                    Cow::Borrowed(s) => s,
                    Cow::Owned(s) => Box::leak(s.into_boxed_str()),
                },
                message: reason.into_owned(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Authentication { algorithm } => CoreError::AuthenticationFailed {
                context: algorithm,
                message: "authentication tag verification failed".to_string(),
            },
            Error::DerivedKeyTooLong {
                context,
                requested,
                max,
            } => CoreError::DerivedKeyTooLong {
                context,
                requested,
                max,
            },
            Error::Decode { context, reason } => CoreError::DecodeFailed {
                context,
                message: reason.to_string(),
            },
            Error::Operand { context, reason } => CoreError::InvalidOperand {
                context,
                message: reason.to_string(),
            },
            Error::Other(msg) => CoreError::Other {
                context: "primitives",
                message: msg.to_string(),
            },
        }
    }
}

// Include the validation submodule
pub mod validate;
